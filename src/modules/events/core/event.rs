use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as stored by the document store.
///
/// `id`, `created_at` and `updated_at` are assigned by the store. `created_by` never changes
/// after creation and is always one of the `participants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_all_day: bool,
    pub participants: Vec<String>,
}

impl Event {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }

    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.is_owned_by(user_id) || self.participants.iter().any(|p| p == user_id)
    }
}

/// Event data before the store assigns identity and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub created_by: String,
    pub is_all_day: bool,
    pub participants: Vec<String>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub is_all_day: Option<bool>,
    pub participants: Option<Vec<String>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch onto a stored event. Identity and ownership are never touched.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            event.end_date = end_date;
        }
        if let Some(location) = self.location {
            event.location = Some(location);
        }
        if let Some(color) = self.color {
            event.color = Some(color);
        }
        if let Some(is_all_day) = self.is_all_day {
            event.is_all_day = is_all_day;
        }
        if let Some(participants) = self.participants {
            event.participants = participants;
        }
    }
}

/// Deduplicates participants, keeping first occurrences, and makes sure `owner` is listed once.
pub fn normalize_participants(participants: Vec<String>, owner: &str) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(participants.len() + 1);
    for participant in participants {
        if !normalized.contains(&participant) {
            normalized.push(participant);
        }
    }
    if !normalized.iter().any(|p| p == owner) {
        normalized.push(owner.to_string());
    }
    normalized
}
