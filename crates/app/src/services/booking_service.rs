//! Booking service: use-cases for managing bookings.

use synergia_domain::booking::{Booking, BookingPatch, NewBooking};
use synergia_domain::error::{NotFoundError, SynergiaError};
use synergia_domain::id::{BookingId, EventId};

use crate::ports::{BookingRepository, EventRepository};

/// Application service for booking CRUD operations.
///
/// Holds a read-only handle on the event repository to check that a new
/// booking references an existing event.
pub struct BookingService<R, E> {
    repo: R,
    events: E,
}

impl<R, E> BookingService<R, E>
where
    R: BookingRepository,
    E: EventRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, events: E) -> Self {
        Self { repo, events }
    }

    /// Book a participant onto an existing event.
    ///
    /// The event is resolved first, so a booking for an unknown event is
    /// reported as not found even when its fields are also missing.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] if the event does not exist,
    /// [`SynergiaError::Validation`] if `name` or `email` is missing, or a
    /// storage error propagated from a repository.
    #[tracing::instrument(skip(self, booking), fields(event_id = %booking.event_id))]
    pub async fn create_booking(&self, booking: NewBooking) -> Result<Booking, SynergiaError> {
        self.ensure_event_exists(booking.event_id).await?;
        booking.validate()?;
        let created = self.repo.create(booking).await?;
        tracing::info!(id = %created.id, "booking created");
        Ok(created)
    }

    /// Look up a booking by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] when no booking with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, SynergiaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::booking(id).into())
    }

    /// List all bookings in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, SynergiaError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to the participant details of a booking.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] if the booking does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_booking(
        &self,
        id: BookingId,
        patch: BookingPatch,
    ) -> Result<Booking, SynergiaError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| NotFoundError::booking(id).into())
    }

    /// Cancel a booking, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] if the booking does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_booking(&self, id: BookingId) -> Result<Booking, SynergiaError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| NotFoundError::booking(id))?;
        tracing::info!(%id, "booking cancelled");
        Ok(removed)
    }

    async fn ensure_event_exists(&self, id: EventId) -> Result<(), SynergiaError> {
        match self.events.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => {
                tracing::debug!(%id, "booking references unknown event");
                Err(NotFoundError::event(id).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeBookingRepo, FakeEventRepo};
    use synergia_domain::error::ValidationError;
    use synergia_domain::event::NewEvent;

    async fn make_service() -> BookingService<FakeBookingRepo, FakeEventRepo> {
        let events = FakeEventRepo::default();
        events
            .create(NewEvent {
                name: "AI & ML Workshop".into(),
                date: "2025-11-10".into(),
                venue: "Auditorium A".into(),
            })
            .await
            .unwrap();
        BookingService::new(FakeBookingRepo::default(), events)
    }

    fn ann(event_id: u64) -> NewBooking {
        NewBooking {
            event_id: EventId::new(event_id),
            name: "Ann".into(),
            email: "ann@x.com".into(),
        }
    }

    #[tokio::test]
    async fn should_create_booking_when_event_exists() {
        let svc = make_service().await;

        let created = svc.create_booking(ann(1)).await.unwrap();
        assert_eq!(created.event_id, EventId::new(1));

        let fetched = svc.get_booking(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_event_missing() {
        let svc = make_service().await;

        let result = svc.create_booking(ann(999)).await;
        assert!(matches!(
            result,
            Err(SynergiaError::NotFound(NotFoundError { entity: "Event", .. }))
        ));
        assert_eq!(svc.repo.count(), 0);
    }

    #[tokio::test]
    async fn should_check_event_before_fields() {
        let svc = make_service().await;
        let booking = NewBooking {
            event_id: EventId::new(999),
            name: String::new(),
            email: String::new(),
        };

        let result = svc.create_booking(booking).await;
        assert!(matches!(result, Err(SynergiaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_empty_name_for_existing_event() {
        let svc = make_service().await;
        let mut booking = ann(1);
        booking.name = String::new();

        let result = svc.create_booking(booking).await;
        assert!(matches!(
            result,
            Err(SynergiaError::Validation(
                ValidationError::MissingBookingFields
            ))
        ));
        assert_eq!(svc.repo.count(), 0);
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let svc = make_service().await;
        let created = svc.create_booking(ann(1)).await.unwrap();

        let updated = svc
            .update_booking(
                created.id,
                BookingPatch {
                    name: Some("Ann Lee".into()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ann Lee");
        assert_eq!(updated.email, "ann@x.com");
    }

    #[tokio::test]
    async fn should_keep_booking_when_its_event_is_deleted() {
        let svc = make_service().await;
        let created = svc.create_booking(ann(1)).await.unwrap();

        svc.events.delete(EventId::new(1)).await.unwrap();

        assert_eq!(svc.get_booking(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn should_delete_booking_and_return_removed_record() {
        let svc = make_service().await;
        let created = svc.create_booking(ann(1)).await.unwrap();

        let removed = svc.delete_booking(created.id).await.unwrap();
        assert_eq!(removed, created);
        assert!(matches!(
            svc.get_booking(created.id).await,
            Err(SynergiaError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_booking() {
        let svc = make_service().await;
        let result = svc.delete_booking(BookingId::new(7)).await;
        assert!(matches!(
            result,
            Err(SynergiaError::NotFound(NotFoundError { entity: "Booking", .. }))
        ));
    }
}
