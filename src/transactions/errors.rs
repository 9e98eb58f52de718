use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum TransactionsApiError {
    AmountBelowMinimum,
    SaveFailed,
    MailFailed,
    CleanupFailed,
}

impl TransactionsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::AmountBelowMinimum => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "minimum amount is 30".to_string(),
            },
            Self::SaveFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "failed to save transaction".to_string(),
            },
            Self::MailFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "failed to send email".to_string(),
            },
            Self::CleanupFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "failed to clean up old transactions".to_string(),
            },
        }
    }
}
