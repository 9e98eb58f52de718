use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app::envy::Envy, mail::service::Mailer, transactions::store::TransactionStore};

pub mod app;
pub mod form;
pub mod mail;
pub mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TransactionStore>,
    pub mailer: Arc<dyn Mailer>,
    pub envy: Arc<Envy>,
}

pub fn router(state: AppState) -> Router {
    let rate_limit = state.envy.rate_limit_per_sec.unwrap_or(50).max(1);
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::DELETE]);

    let cors = match state.envy.cors_origin.as_deref() {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => cors.allow_origin(origin),
            Err(e) => {
                tracing::warn!(%e, "ignoring invalid CORS_ORIGIN, allowing any origin");
                cors.allow_origin(Any)
            }
        },
        None => cors.allow_origin(Any),
    };

    Router::new()
        .route(
            "/",
            get(app::controller::get_root).fallback(app::controller::not_found),
        )
        .route(
            "/transaction",
            post(transactions::controller::create_transaction)
                .fallback(app::controller::not_found),
        )
        .route(
            "/cleanup",
            delete(transactions::controller::cleanup_transactions)
                .fallback(app::controller::not_found),
        )
        .fallback(app::controller::not_found)
        // layers
        .layer(DefaultBodyLimit::max(100 * 1024))
        .layer(CatchPanicLayer::custom(app::controller::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(app::controller::handle_error))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
        .with_state(state)
}
