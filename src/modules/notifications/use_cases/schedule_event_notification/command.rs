use serde::Deserialize;

pub const DEFAULT_MINUTES_BEFORE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEventNotification {
    pub event_id: String,
    #[serde(default = "default_minutes_before")]
    pub minutes_before: u32,
}

impl ScheduleEventNotification {
    pub fn new(event_id: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            minutes_before: DEFAULT_MINUTES_BEFORE,
        }
    }

    pub fn minutes_before(mut self, minutes: u32) -> Self {
        self.minutes_before = minutes;
        self
    }
}

fn default_minutes_before() -> u32 {
    DEFAULT_MINUTES_BEFORE
}
