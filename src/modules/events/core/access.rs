// Access rules for events.
//
// - Only the creator may change or delete an event.
// - The creator and every listed participant may read it.

use crate::modules::events::core::event::Event;
use crate::shared::application::errors::ApplicationError;

pub fn ensure_owner(event: &Event, user_id: &str, action: &str) -> Result<(), ApplicationError> {
    if !event.is_owned_by(user_id) {
        return Err(ApplicationError::Authorization(format!(
            "only the creator may {action} event {}",
            event.id
        )));
    }
    Ok(())
}

pub fn ensure_visible(event: &Event, user_id: &str) -> Result<(), ApplicationError> {
    if !event.is_visible_to(user_id) {
        return Err(ApplicationError::Authorization(format!(
            "event {} is not shared with this user",
            event.id
        )));
    }
    Ok(())
}

pub fn event_not_found(id: &str) -> ApplicationError {
    ApplicationError::NotFound {
        entity: "event",
        id: id.to_string(),
    }
}
