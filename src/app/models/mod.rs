pub mod api_error;
pub mod api_message;
pub mod json_from_request;
