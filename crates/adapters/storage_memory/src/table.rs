//! Ordered in-memory collection with counter-based id assignment.

use synergia_domain::booking::Booking;
use synergia_domain::event::Event;
use synergia_domain::id::{BookingId, EventId};

/// A stored record that carries its own id.
pub(crate) trait Record: Clone {
    type Id: Copy + Eq + From<u64> + Into<u64>;

    fn id(&self) -> Self::Id;
}

impl Record for Event {
    type Id = EventId;

    fn id(&self) -> EventId {
        self.id
    }
}

impl Record for Booking {
    type Id = BookingId;

    fn id(&self) -> BookingId {
        self.id
    }
}

/// Records in insertion order plus the next id to hand out.
///
/// `next_id` only ever grows, so an id freed by a removal is never reused.
#[derive(Debug)]
pub(crate) struct Table<T: Record> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    /// Build a table holding `records`, continuing ids after the highest one.
    pub(crate) fn with_records(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(|r| Into::<u64>::into(r.id()))
            .max()
            .map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    /// Assign the next id, build the record with it and append it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(T::Id) -> T) -> T {
        let id = <T::Id as From<u64>>::from(self.next_id);
        self.next_id += 1;
        let record = build(id);
        self.records.push(record.clone());
        record
    }

    pub(crate) fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Mutate the record with `id` in place and return a copy of the result,
    /// or `None` when there is no such record.
    pub(crate) fn modify(&mut self, id: T::Id, edit: impl FnOnce(&mut T)) -> Option<T> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        edit(record);
        Some(record.clone())
    }

    pub(crate) fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }
}
