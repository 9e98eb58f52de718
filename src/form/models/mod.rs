pub mod withdrawal_form;
