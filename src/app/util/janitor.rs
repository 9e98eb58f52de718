use std::time::Duration;

use tokio::{task, time::interval};

use crate::{transactions, AppState};

pub fn spawn(state: AppState, period: Duration) {
    tracing::debug!("janitor spawned, running every {:?}", period);

    task::spawn(async move {
        let mut interval = interval(period);

        loop {
            interval.tick().await;
            cleanup_transactions(&state).await;
        }
    });
}

async fn cleanup_transactions(state: &AppState) {
    match transactions::service::cleanup_transactions(state).await {
        Ok(result) => {
            if result.deleted_count > 0 {
                tracing::info!("janitor removed {} old transaction(s)", result.deleted_count);
            }
        }
        Err(e) => {
            tracing::error!("cleanup_transactions: {}", e.message);
        }
    }
}
