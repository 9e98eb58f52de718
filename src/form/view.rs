/// Surface the form controller reports to.
pub trait FormView {
    /// Shows the server's confirmation in the form's message region.
    fn show_message(&mut self, message: &str);

    /// Interrupts the user with an error.
    fn alert(&mut self, message: &str);
}
