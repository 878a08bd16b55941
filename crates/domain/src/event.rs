//! Event: a schedulable happening with a name, a date and a venue.

use serde::{Deserialize, Serialize};

use crate::error::{SynergiaError, ValidationError};
use crate::id::EventId;

/// A stored event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Caller-supplied, never parsed.
    pub date: String,
    pub venue: String,
}

impl Event {
    /// Attach an identifier to a validated [`NewEvent`].
    #[must_use]
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Self {
            id,
            name: new.name,
            date: new.date,
            venue: new.venue,
        }
    }
}

/// An event that has not been stored yet and so has no id.
///
/// Absent request fields are represented as empty strings; call
/// [`NewEvent::validate`] before storing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub venue: String,
}

impl NewEvent {
    /// Check presence of every field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingEventFields`] when a field is empty.
    pub fn validate(&self) -> Result<(), SynergiaError> {
        if self.name.is_empty() || self.date.is_empty() || self.venue.is_empty() {
            return Err(ValidationError::MissingEventFields.into());
        }
        Ok(())
    }
}

/// Partial update of an [`Event`]. Only the fields that are set and
/// non-empty replace the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub venue: Option<String>,
}

impl EventPatch {
    /// Overwrite the supplied fields of `event`, leaving the others alone.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(name) = self.name.filter(|v| !v.is_empty()) {
            event.name = name;
        }
        if let Some(date) = self.date.filter(|v| !v.is_empty()) {
            event.date = date;
        }
        if let Some(venue) = self.venue.filter(|v| !v.is_empty()) {
            event.venue = venue;
        }
    }
}
