//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use synergia_app::ports::{BookingRepository, EventRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes with a `/health` liveness check.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<ER, BR>(state: AppState<ER, BR>) -> Router
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
