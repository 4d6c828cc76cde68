// Command data type for changing an existing event.
//
// Only the fields present in `patch` change. The event keeps its id, creator and creation time.

use crate::modules::events::core::event::EventPatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub event_id: String,
    pub patch: EventPatch,
}
