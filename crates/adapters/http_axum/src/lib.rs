//! # synergia-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for events (`/events`, `/events/add`, `/event/{id}`)
//!   and bookings (`/api/bookings`, `/api/bookings/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into status codes and JSON bodies, keeping the
//!   response shape of each endpoint as clients already expect it
//!
//! ## Dependency rule
//! Depends on `synergia-app` (for port traits and services) and `synergia-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
