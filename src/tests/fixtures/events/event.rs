use crate::modules::events::core::event::{Event, NewEvent};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn fixed_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        let start = fixed_start();
        Self {
            inner: Event {
                id: "e1".to_string(),
                title: "Standup".to_string(),
                description: Some("Daily sync".to_string()),
                start_date: start,
                end_date: start + Duration::minutes(30),
                location: None,
                color: None,
                created_by: "u1".to_string(),
                created_at: start - Duration::days(1),
                updated_at: start - Duration::days(1),
                is_all_day: false,
                participants: vec!["u1".to_string()],
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = Some(v.into());
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v;
        self
    }

    /// Moves the event so it starts at `v`, keeping a 30 minute duration.
    pub fn starting_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_date = v;
        self.inner.end_date = v + Duration::minutes(30);
        self
    }

    pub fn ending_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEventBuilder {
    pub fn new() -> Self {
        let start = fixed_start();
        Self {
            inner: NewEvent {
                title: "Standup".to_string(),
                description: None,
                start_date: start,
                end_date: start + Duration::minutes(30),
                location: None,
                color: None,
                created_by: "u1".to_string(),
                is_all_day: false,
                participants: vec!["u1".to_string()],
            },
        }
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        let owner = v.into();
        self.inner.participants = vec![owner.clone()];
        self.inner.created_by = owner;
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}
