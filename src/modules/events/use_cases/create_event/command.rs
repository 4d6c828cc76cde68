// Command data type for creating an event.
//
// Purpose
// - Express user intent to put a new event on the shared calendar.
//
// Responsibilities
// - Carry input data for the decider to validate and turn into a NewEvent.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub is_all_day: bool,
    pub participants: Vec<String>,
}
