// Shared test fixture for the CreateEvent command, seeded from a JSON file.

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventDto {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub is_all_day: bool,
    pub participants: Vec<String>,
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/create_event.json").unwrap();
        let dto: CreateEventDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateEvent {
                title: dto.title,
                description: dto.description,
                start_date: dto.start_date,
                end_date: dto.end_date,
                location: dto.location,
                color: dto.color,
                is_all_day: dto.is_all_day,
                participants: dto.participants,
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn start_date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

#[cfg(test)]
mod create_event_builder_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEventBuilder::default().build();
        assert_eq!(built.title, "Standup");
        assert_eq!(
            built.start_date,
            Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
        );
        assert_eq!(
            built.end_date,
            Utc.with_ymd_and_hms(2024, 1, 10, 9, 30, 0).unwrap()
        );
        assert!(!built.is_all_day);
        assert!(built.participants.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();
        let custom = CreateEventBuilder::new()
            .title("Retro")
            .start_date(start)
            .end_date(start)
            .participants(vec!["u2".into()])
            .build();
        assert_eq!(custom.title, "Retro");
        assert_eq!(custom.start_date, start);
        assert_eq!(custom.end_date, start);
        assert_eq!(custom.participants, vec!["u2"]);
    }
}
