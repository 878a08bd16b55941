//! Shared application state for axum handlers.

use std::sync::Arc;

use synergia_app::ports::{BookingRepository, EventRepository};
use synergia_app::services::booking_service::BookingService;
use synergia_app::services::event_service::EventService;

/// Application state shared across all axum handlers.
///
/// Generic over the event and booking repositories to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone` and only the `Arc` wrappers are cloned.
pub struct AppState<ER, BR> {
    /// Event CRUD service.
    pub event_service: Arc<EventService<ER>>,
    /// Booking CRUD service, which also reads events.
    pub booking_service: Arc<BookingService<BR, ER>>,
}

impl<ER, BR> Clone for AppState<ER, BR> {
    fn clone(&self) -> Self {
        Self {
            event_service: Arc::clone(&self.event_service),
            booking_service: Arc::clone(&self.booking_service),
        }
    }
}

impl<ER, BR> AppState<ER, BR>
where
    ER: EventRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(event_service: EventService<ER>, booking_service: BookingService<BR, ER>) -> Self {
        Self {
            event_service: Arc::new(event_service),
            booking_service: Arc::new(booking_service),
        }
    }
}
