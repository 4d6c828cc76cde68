// Pure decision functions for event creation.
//
// Responsibilities
// - Reject a blank title or an end date before the start date.
// - Make the creator the owner and a participant, listed exactly once.
// - Never perform input or output.

use crate::modules::events::core::event::{NewEvent, normalize_participants};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::application::errors::ValidationError;
use crate::shared::core::validation::{ensure_interval, ensure_title};

pub fn validate_create(command: &CreateEvent) -> Result<(), ValidationError> {
    ensure_title(&command.title)?;
    ensure_interval(command.start_date, command.end_date)
}

pub fn decide_create(command: CreateEvent, creator_id: &str) -> NewEvent {
    NewEvent {
        title: command.title,
        description: command.description,
        start_date: command.start_date,
        end_date: command.end_date,
        location: command.location,
        color: command.color,
        created_by: creator_id.to_string(),
        is_all_day: command.is_all_day,
        participants: normalize_participants(command.participants, creator_id),
    }
}
