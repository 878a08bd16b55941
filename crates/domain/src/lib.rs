//! # synergia-domain
//!
//! Pure domain model for the synergia event booking service.
//!
//! ## Responsibilities
//! - Foundational types: typed integer identifiers, error conventions
//! - Define **Events** (a schedulable happening with a name, date and venue)
//! - Define **Bookings** (a participant's registration against one event)
//! - Define the partial updates accepted for both, and their presence checks
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod booking;
pub mod event;
