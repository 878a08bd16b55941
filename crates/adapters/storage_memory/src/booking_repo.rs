//! In-memory implementation of [`BookingRepository`].

use std::sync::Arc;

use tokio::sync::RwLock;

use synergia_app::ports::BookingRepository;
use synergia_domain::booking::{Booking, BookingPatch, NewBooking};
use synergia_domain::error::SynergiaError;
use synergia_domain::id::BookingId;

use crate::table::Table;

/// Booking store kept in process memory. Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    table: Arc<RwLock<Table<Booking>>>,
}

impl InMemoryBookingRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `bookings`, in the given order.
    #[must_use]
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        tracing::debug!(count = bookings.len(), "seeding booking store");
        Self {
            table: Arc::new(RwLock::new(Table::with_records(bookings))),
        }
    }
}

impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: NewBooking) -> Result<Booking, SynergiaError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Booking::from_new(id, booking)))
    }

    async fn get_by_id(&self, id: BookingId) -> Result<Option<Booking>, SynergiaError> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Booking>, SynergiaError> {
        Ok(self.table.read().await.all())
    }

    async fn update(
        &self,
        id: BookingId,
        patch: BookingPatch,
    ) -> Result<Option<Booking>, SynergiaError> {
        let mut table = self.table.write().await;
        Ok(table.modify(id, |booking| patch.apply_to(booking)))
    }

    async fn delete(&self, id: BookingId) -> Result<Option<Booking>, SynergiaError> {
        Ok(self.table.write().await.remove(id))
    }
}
