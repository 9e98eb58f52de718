use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    BoxError,
};

use super::{errors::DefaultApiError, models::api_error::ApiError};

pub async fn get_root() -> Result<(), ApiError> {
    Ok(())
}

pub async fn not_found() -> ApiError {
    DefaultApiError::RouteNotFound.value()
}

pub async fn handle_error(err: BoxError) -> ApiError {
    tracing::error!(%err);
    DefaultApiError::InternalServerError.value()
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(details, "handler panicked");

    DefaultApiError::InternalServerError.value().into_response()
}
