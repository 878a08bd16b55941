//! # synergiad: synergia daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Resolve configuration (fixed port, `RUST_LOG` filter)
//! - Initialize `tracing` output
//! - Construct the in-memory event and booking stores with the demo data
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use synergia_adapter_http_axum::state::AppState;
use synergia_adapter_storage_memory::{InMemoryBookingRepository, InMemoryEventRepository, seed};
use synergia_app::services::booking_service::BookingService;
use synergia_app::services::event_service::EventService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Stores
    let event_repo = InMemoryEventRepository::with_events(seed::events());
    let booking_repo = InMemoryBookingRepository::with_bookings(seed::bookings());

    // Services
    let event_service = EventService::new(event_repo.clone());
    let booking_service = BookingService::new(booking_repo, event_repo);

    // HTTP
    let state = AppState::new(event_service, booking_service);
    let app = synergia_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr;
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("Synergia Event Booking API running on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
