use axum::http::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
    RouteNotFound,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "internal server error".to_string(),
            },
            Self::RouteNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "route not found".to_string(),
            },
        }
    }
}
