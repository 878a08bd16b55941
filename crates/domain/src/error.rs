//! Common error types used across the workspace.
//!
//! The `Display` text of [`ValidationError`] and [`NotFoundError`] is what
//! clients receive as the `message` of an error response, so it is phrased
//! for humans.

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum SynergiaError {
    /// A required field was missing or empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed record, or a record it references, does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Presence checks on incoming records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One of `name`, `date`, `venue` is missing.
    #[error("Please provide name, date, and venue")]
    MissingEventFields,

    /// One of `name`, `email` is missing.
    #[error("Please provide name and email")]
    MissingBookingFields,
}

/// A lookup by id that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record, e.g. `"Event"`.
    pub entity: &'static str,
    /// The id as supplied by the caller.
    pub id: String,
}

impl NotFoundError {
    /// Build a not-found error for an [`Event`](crate::event::Event).
    #[must_use]
    pub fn event(id: impl ToString) -> Self {
        Self {
            entity: "Event",
            id: id.to_string(),
        }
    }

    /// Build a not-found error for a [`Booking`](crate::booking::Booking).
    #[must_use]
    pub fn booking(id: impl ToString) -> Self {
        Self {
            entity: "Booking",
            id: id.to_string(),
        }
    }
}
