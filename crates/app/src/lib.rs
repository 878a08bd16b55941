//! # synergia-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters must implement:
//!   - `EventRepository`: CRUD for events, assigns event ids
//!   - `BookingRepository`: CRUD for bookings, assigns booking ids
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EventService`: add, list, get, update, delete events
//!   - `BookingService`: book against an existing event, list, get,
//!     update, cancel
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `synergia-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
