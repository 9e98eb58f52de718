use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    app::models::{
        api_error::ApiError, api_message::ApiMessage, json_from_request::JsonFromRequest,
    },
    AppState,
};

use super::{
    dtos::create_transaction_dto::CreateTransactionDto, errors::TransactionsApiError,
    models::cleanup_result::CleanupResult, service,
};

pub async fn create_transaction(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<CreateTransactionDto>,
) -> Result<Json<ApiMessage>, ApiError> {
    tracing::info!(nickname = %dto.nickname, amount = dto.amount, "transaction request received");

    match dto.validate() {
        Ok(_) => match service::create_transaction(&dto, &state).await {
            Ok(message) => Ok(Json(message)),
            Err(e) => Err(e),
        },
        Err(e) => {
            tracing::debug!(%e);
            Err(TransactionsApiError::AmountBelowMinimum.value())
        }
    }
}

pub async fn cleanup_transactions(
    State(state): State<AppState>,
) -> Result<Json<CleanupResult>, ApiError> {
    match service::cleanup_transactions(&state).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err(e),
    }
}
