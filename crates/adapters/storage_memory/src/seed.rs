//! Demo records loaded at startup when seeding is enabled.

use synergia_domain::booking::Booking;
use synergia_domain::event::Event;
use synergia_domain::id::{BookingId, EventId};

/// The two events the service ships with.
#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: EventId::new(1),
            name: "AI & ML Workshop".to_string(),
            date: "2025-11-10".to_string(),
            venue: "Auditorium A".to_string(),
        },
        Event {
            id: EventId::new(2),
            name: "Web Dev Hackathon".to_string(),
            date: "2025-11-12".to_string(),
            venue: "Lab 1".to_string(),
        },
    ]
}

/// One booking for each of the demo [`events`].
#[must_use]
pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: BookingId::new(1),
            event_id: EventId::new(1),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        Booking {
            id: BookingId::new(2),
            event_id: EventId::new(2),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}
