// Pure part of ScheduleEventNotification: when to fire and what to show.

use crate::modules::events::core::event::Event;
use crate::shared::application::errors::ValidationError;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPlan {
    pub title: String,
    pub body: String,
    pub notify_at: DateTime<Utc>,
    pub data: serde_json::Value,
}

pub fn reminder_body(event: &Event) -> String {
    let starts_at = event.start_date.format("%H:%M");
    match &event.location {
        Some(location) if !location.trim().is_empty() => {
            format!("Starts at {starts_at} at {location}")
        }
        _ => format!("Starts at {starts_at}"),
    }
}

pub fn decide_schedule(
    event: &Event,
    minutes_before: u32,
    now: DateTime<Utc>,
) -> Result<NotificationPlan, ValidationError> {
    let notify_at = event
        .start_date
        .checked_sub_signed(Duration::minutes(i64::from(minutes_before)))
        .filter(|notify_at| *notify_at >= now)
        .ok_or(ValidationError::NotificationInPast)?;
    Ok(NotificationPlan {
        title: event.title.clone(),
        body: reminder_body(event),
        notify_at,
        data: json!({ "eventId": event.id }),
    })
}
