//! Event service: use-cases for managing events.

use synergia_domain::error::{NotFoundError, SynergiaError};
use synergia_domain::event::{Event, EventPatch, NewEvent};
use synergia_domain::id::EventId;

use crate::ports::EventRepository;

/// Application service for event CRUD operations.
pub struct EventService<R> {
    repo: R,
}

impl<R: EventRepository> EventService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Add a new event after checking that every field is present.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::Validation`] if a field is missing, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, event), fields(event_name = %event.name))]
    pub async fn create_event(&self, event: NewEvent) -> Result<Event, SynergiaError> {
        event.validate()?;
        let created = self.repo.create(event).await?;
        tracing::info!(id = %created.id, "event added");
        Ok(created)
    }

    /// Look up an event by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] when no event with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_event(&self, id: EventId) -> Result<Event, SynergiaError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::event(id).into())
    }

    /// List all events in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_events(&self) -> Result<Vec<Event>, SynergiaError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing event.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] if the event does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_event(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> Result<Event, SynergiaError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| NotFoundError::event(id).into())
    }

    /// Delete an event by id, returning the removed record.
    ///
    /// Bookings referencing the event are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SynergiaError::NotFound`] if the event does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_event(&self, id: EventId) -> Result<Event, SynergiaError> {
        let removed = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| NotFoundError::event(id))?;
        tracing::info!(%id, "event deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::FakeEventRepo;
    use synergia_domain::error::ValidationError;

    fn make_service() -> EventService<FakeEventRepo> {
        EventService::new(FakeEventRepo::default())
    }

    fn demo_day() -> NewEvent {
        NewEvent {
            name: "Demo Day".into(),
            date: "2025-12-01".into(),
            venue: "Hall B".into(),
        }
    }

    #[tokio::test]
    async fn should_create_event_when_valid() {
        let svc = make_service();

        let created = svc.create_event(demo_day()).await.unwrap();
        let fetched = svc.get_event(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_reject_create_when_venue_is_empty() {
        let svc = make_service();
        let mut event = demo_day();
        event.venue = String::new();

        let result = svc.create_event(event).await;
        assert!(matches!(
            result,
            Err(SynergiaError::Validation(ValidationError::MissingEventFields))
        ));
        assert!(svc.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_event_missing() {
        let svc = make_service();
        let result = svc.get_event(EventId::new(99)).await;
        assert!(matches!(result, Err(SynergiaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_events_in_insertion_order() {
        let svc = make_service();
        svc.create_event(demo_day()).await.unwrap();
        svc.create_event(NewEvent {
            name: "Hack Night".into(),
            ..demo_day()
        })
        .await
        .unwrap();

        let names: Vec<String> = svc
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["Demo Day", "Hack Night"]);
    }

    #[tokio::test]
    async fn should_update_only_supplied_fields() {
        let svc = make_service();
        let created = svc.create_event(demo_day()).await.unwrap();

        let updated = svc
            .update_event(
                created.id,
                EventPatch {
                    venue: Some("Lab 2".into()),
                    ..EventPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.venue, "Lab 2");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.date, created.date);
        assert_eq!(svc.get_event(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_event() {
        let svc = make_service();
        let result = svc.update_event(EventId::new(5), EventPatch::default()).await;
        assert!(matches!(result, Err(SynergiaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_event_and_return_removed_record() {
        let svc = make_service();
        let created = svc.create_event(demo_day()).await.unwrap();

        let removed = svc.delete_event(created.id).await.unwrap();
        assert_eq!(removed, created);

        let result = svc.get_event(created.id).await;
        assert!(matches!(result, Err(SynergiaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_event() {
        let svc = make_service();
        let result = svc.delete_event(EventId::new(99)).await;
        assert!(matches!(
            result,
            Err(SynergiaError::NotFound(NotFoundError { entity: "Event", .. }))
        ));
    }
}
