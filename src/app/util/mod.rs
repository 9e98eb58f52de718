pub mod janitor;
pub mod time;
