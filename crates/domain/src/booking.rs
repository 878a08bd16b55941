//! Booking: a participant's registration against one event.

use serde::{Deserialize, Serialize};

use crate::error::{SynergiaError, ValidationError};
use crate::id::{BookingId, EventId};

/// A stored booking.
///
/// `event_id` named an existing event when the booking was created. Nothing
/// keeps it valid afterwards: deleting the event leaves the booking intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub event_id: EventId,
    /// Participant name.
    pub name: String,
    pub email: String,
}

impl Booking {
    /// Attach an identifier to a validated [`NewBooking`].
    #[must_use]
    pub fn from_new(id: BookingId, new: NewBooking) -> Self {
        Self {
            id,
            event_id: new.event_id,
            name: new.name,
            email: new.email,
        }
    }
}

/// A booking that has not been stored yet.
///
/// Absent request fields are represented as empty strings; call
/// [`NewBooking::validate`] before storing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub event_id: EventId,
    pub name: String,
    pub email: String,
}

impl NewBooking {
    /// Check presence of `name` and `email`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingBookingFields`] when one is empty.
    pub fn validate(&self) -> Result<(), SynergiaError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingBookingFields.into());
        }
        Ok(())
    }
}

/// Partial update of a [`Booking`]. The event reference cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl BookingPatch {
    /// Overwrite the supplied, non-empty fields of `booking`.
    pub fn apply_to(self, booking: &mut Booking) {
        if let Some(name) = self.name.filter(|v| !v.is_empty()) {
            booking.name = name;
        }
        if let Some(email) = self.email.filter(|v| !v.is_empty()) {
            booking.email = email;
        }
    }
}
