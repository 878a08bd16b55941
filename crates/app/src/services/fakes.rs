//! Vec-backed repositories for service tests.

use std::future::Future;
use std::sync::Mutex;

use synergia_domain::booking::{Booking, BookingPatch, NewBooking};
use synergia_domain::error::SynergiaError;
use synergia_domain::event::{Event, EventPatch, NewEvent};
use synergia_domain::id::{BookingId, EventId};

use crate::ports::{BookingRepository, EventRepository};

#[derive(Default)]
pub struct FakeEventRepo {
    store: Mutex<Vec<Event>>,
}

impl EventRepository for FakeEventRepo {
    fn create(&self, event: NewEvent) -> impl Future<Output = Result<Event, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = EventId::new(store.iter().map(|e| e.id.get()).max().unwrap_or(0) + 1);
        let event = Event::from_new(id, event);
        store.push(event.clone());
        async { Ok(event) }
    }

    fn get_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|e| e.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Event>, SynergiaError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: EventId,
        patch: EventPatch,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.iter_mut().find(|e| e.id == id).map(|event| {
            patch.apply_to(event);
            event.clone()
        });
        async { Ok(result) }
    }

    fn delete(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store
            .iter()
            .position(|e| e.id == id)
            .map(|index| store.remove(index));
        async { Ok(result) }
    }
}

#[derive(Default)]
pub struct FakeBookingRepo {
    store: Mutex<Vec<Booking>>,
}

impl FakeBookingRepo {
    pub fn count(&self) -> usize {
        self.store.lock().unwrap().len()
    }
}

impl BookingRepository for FakeBookingRepo {
    fn create(
        &self,
        booking: NewBooking,
    ) -> impl Future<Output = Result<Booking, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = BookingId::new(store.iter().map(|b| b.id.get()).max().unwrap_or(0) + 1);
        let booking = Booking::from_new(id, booking);
        store.push(booking.clone());
        async { Ok(booking) }
    }

    fn get_by_id(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|b| b.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Booking>, SynergiaError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(
        &self,
        id: BookingId,
        patch: BookingPatch,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.iter_mut().find(|b| b.id == id).map(|booking| {
            patch.apply_to(booking);
            booking.clone()
        });
        async { Ok(result) }
    }

    fn delete(
        &self,
        id: BookingId,
    ) -> impl Future<Output = Result<Option<Booking>, SynergiaError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store
            .iter()
            .position(|b| b.id == id)
            .map(|index| store.remove(index));
        async { Ok(result) }
    }
}
