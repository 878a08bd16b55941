//! In-memory implementation of [`EventRepository`].

use std::sync::Arc;

use tokio::sync::RwLock;

use synergia_app::ports::EventRepository;
use synergia_domain::error::SynergiaError;
use synergia_domain::event::{Event, EventPatch, NewEvent};
use synergia_domain::id::EventId;

use crate::table::Table;

/// Event store kept in process memory.
///
/// Cloning is cheap and every clone shares the same collection, so the
/// booking service can look events up through its own handle.
#[derive(Clone, Default)]
pub struct InMemoryEventRepository {
    table: Arc<RwLock<Table<Event>>>,
}

impl InMemoryEventRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `events`, in the given order.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        tracing::debug!(count = events.len(), "seeding event store");
        Self {
            table: Arc::new(RwLock::new(Table::with_records(events))),
        }
    }
}

impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: NewEvent) -> Result<Event, SynergiaError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Event::from_new(id, event)))
    }

    async fn get_by_id(&self, id: EventId) -> Result<Option<Event>, SynergiaError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Event>, SynergiaError> {
        Ok(self.table.read().await.all())
    }

    async fn update(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> Result<Option<Event>, SynergiaError> {
        let mut table = self.table.write().await;
        Ok(table.modify(id, |event| patch.apply_to(event)))
    }

    async fn delete(&self, id: EventId) -> Result<Option<Event>, SynergiaError> {
        Ok(self.table.write().await.remove(id))
    }
}
