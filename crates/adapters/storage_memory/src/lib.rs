//! # synergia-adapter-storage-memory
//!
//! Process-local storage adapter. Nothing survives a restart.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `synergia-app::ports::storage`
//! - Keep each collection in insertion order behind its own async lock
//! - Assign ids from a per-collection counter that never hands out an id twice
//! - Provide the demo records the service starts with
//!
//! ## Dependency rule
//! Depends on `synergia-app` (for port traits) and `synergia-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod table;

pub mod booking_repo;
pub mod event_repo;
pub mod seed;

pub use booking_repo::InMemoryBookingRepository;
pub use event_repo::InMemoryEventRepository;
