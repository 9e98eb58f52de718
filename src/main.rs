use std::{env, net::SocketAddr, process, sync::Arc, time::Duration};

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use withdrawal_api::{
    app::{envy::Envy, util::janitor},
    mail::service::SmtpMailer,
    transactions::store::PgTransactionStore,
    AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            process::exit(1);
        }
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let pool = match PgPoolOptions::new()
        .max_connections(50)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to connect to database: {}", e);
            process::exit(1);
        }
    };

    let store = PgTransactionStore::new(pool);
    if let Err(e) = store.ensure_schema().await {
        tracing::error!("failed to prepare transactions table: {}", e);
        process::exit(1);
    }

    tracing::info!("connected to db");

    let mailer = match SmtpMailer::new(&envy) {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!("failed to configure mailer: {}", e);
            process::exit(1);
        }
    };

    let state = AppState {
        store: Arc::new(store),
        mailer: Arc::new(mailer),
        envy: Arc::new(envy),
    };

    if let Some(secs) = state.envy.cleanup_interval_secs.filter(|secs| *secs > 0) {
        janitor::spawn(state.clone(), Duration::from_secs(secs));
    }

    // app
    let app = withdrawal_api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    let server = match axum::Server::try_bind(&addr) {
        Ok(builder) => builder,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            process::exit(1);
        }
    };

    if let Err(e) = server
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("server error: {}", e);
        process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
