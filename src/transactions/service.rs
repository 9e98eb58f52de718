use crate::{
    app::{
        models::{api_error::ApiError, api_message::ApiMessage},
        util::time,
    },
    mail::templates::new_transaction_template::new_transaction_template,
    AppState,
};

use super::{
    dtos::create_transaction_dto::CreateTransactionDto,
    errors::TransactionsApiError,
    models::{cleanup_result::CleanupResult, transaction::Transaction},
    RETENTION_SECS,
};

/// Persists the request, then notifies the operator. A record that was saved
/// stays saved when the notification fails.
pub async fn create_transaction(
    dto: &CreateTransactionDto,
    state: &AppState,
) -> Result<ApiMessage, ApiError> {
    let transaction = match state.store.insert(Transaction::new(dto)).await {
        Ok(transaction) => transaction,
        Err(e) => {
            tracing::error!(%e);
            return Err(TransactionsApiError::SaveFailed.value());
        }
    };

    tracing::debug!(id = %transaction.id, "transaction saved");

    let (subject, body) = new_transaction_template(&transaction);

    match state
        .mailer
        .send_mail(&state.envy.mail_recipient, &subject, &body)
        .await
    {
        Ok(_) => Ok(ApiMessage::new("transaction saved and sent by email")),
        Err(e) => {
            tracing::error!(%e, id = %transaction.id, "transaction saved but mail failed");
            Err(TransactionsApiError::MailFailed.value())
        }
    }
}

pub async fn cleanup_transactions(state: &AppState) -> Result<CleanupResult, ApiError> {
    let cutoff = (time::current_time_in_secs() as i64) - RETENTION_SECS;

    match state.store.delete_older_than(cutoff).await {
        Ok(deleted_count) => {
            tracing::debug!(cutoff, deleted_count, "old transactions cleaned up");

            Ok(CleanupResult {
                message: "old transactions cleaned up".to_string(),
                deleted_count,
            })
        }
        Err(e) => {
            tracing::error!(%e);
            Err(TransactionsApiError::CleanupFailed.value())
        }
    }
}
