// Pure decision functions for event updates.
//
// Responsibilities
// - Validate the patch on its own: a supplied title must not be blank, and when both dates are
//   supplied the end must not precede the start.
// - Authorize against the stored event and keep the creator among the participants.
//
// Known limitation
// - A patch carrying a single date is not checked against the stored other date, so an update
//   can leave an event whose end precedes its start.

use crate::modules::events::core::access::ensure_owner;
use crate::modules::events::core::event::{Event, EventPatch, normalize_participants};
use crate::shared::application::errors::{ApplicationError, ValidationError};
use crate::shared::core::validation::{ensure_interval, ensure_title};

pub fn validate_update(patch: &EventPatch) -> Result<(), ValidationError> {
    if let Some(title) = &patch.title {
        ensure_title(title)?;
    }
    if let (Some(start), Some(end)) = (patch.start_date, patch.end_date) {
        ensure_interval(start, end)?;
    }
    Ok(())
}

pub fn decide_update(
    existing: &Event,
    current_user_id: &str,
    mut patch: EventPatch,
) -> Result<EventPatch, ApplicationError> {
    ensure_owner(existing, current_user_id, "update")?;
    patch.participants = patch
        .participants
        .map(|participants| normalize_participants(participants, &existing.created_by));
    Ok(patch)
}
