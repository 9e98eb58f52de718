pub mod new_transaction_template;
