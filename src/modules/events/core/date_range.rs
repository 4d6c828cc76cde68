// Date range selection of events.
//
// Purpose
// - One place for the inclusion predicate and ordering, used by the use case and by adapters
//   that filter client side.
//
// Known limitation
// - Only the start date is tested against the range. An event that starts before the range and
//   ends inside it is not returned.

use crate::modules::events::core::event::Event;
use crate::shared::application::errors::ValidationError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Both bounds are inclusive.
    pub fn includes(&self, event: &Event) -> bool {
        event.start_date >= self.start && event.start_date <= self.end
    }
}

/// Keeps events starting inside `range`, ordered by start date. Ties keep retrieval order.
pub fn select_starting_within(events: Vec<Event>, range: &DateRange) -> Vec<Event> {
    let mut selected: Vec<Event> = events.into_iter().filter(|e| range.includes(e)).collect();
    sort_by_start(&mut selected);
    selected
}

pub fn sort_by_start(events: &mut [Event]) {
    events.sort_by_key(|e| e.start_date);
}
