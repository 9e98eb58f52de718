pub mod cleanup_result;
pub mod transaction;
