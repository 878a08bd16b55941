//! Storage port: repository traits for events and bookings.
//!
//! Repositories own id assignment: `create` receives a record without an id
//! and returns it with a fresh one. Listing returns records in insertion
//! order. `update` reads and writes a record as a single step so concurrent
//! patches touching different fields both land.

use std::future::Future;

use synergia_domain::booking::{Booking, BookingPatch, NewBooking};
use synergia_domain::error::SynergiaError;
use synergia_domain::event::{Event, EventPatch, NewEvent};
use synergia_domain::id::{BookingId, EventId};

/// Repository for persisting and querying [`Event`]s.
pub trait EventRepository {
    /// Assign an id to `event` and append it.
    fn create(&self, event: NewEvent) -> impl Future<Output = Result<Event, SynergiaError>> + Send;

    /// Get an event by its identifier.
    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send;

    /// Get all events in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Event>, SynergiaError>> + Send;

    /// Apply `patch` to the stored event in one step, returning the result,
    /// or `None` if no event has that id.
    fn update(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send;

    /// Remove an event, returning it if it existed.
    fn delete(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send;
}

/// Repository for persisting and querying [`Booking`]s.
pub trait BookingRepository {
    /// Assign an id to `booking` and append it.
    fn create(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = Result<Booking, SynergiaError>> + Send;

    /// Get a booking by its identifier.
    fn get_by_id(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send;

    /// Get all bookings in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Booking>, SynergiaError>> + Send;

    /// Apply `patch` to the stored booking in one step, returning the
    /// result, or `None` if no booking has that id.
    fn update(
        &self,
        id: BookingId,
        patch: BookingPatch,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send;

    /// Remove a booking, returning it if it existed.
    fn delete(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send;
}
