//! Synthetic named events dispatched by report widgets.

use serde::Serialize;

/// A named event as created by [`new_event`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub bubbles: bool,
    pub cancelable: bool,
    pub default_prevented: bool,
}

impl Event {
    /// Marks the default action as prevented. No effect on non-cancelable events.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }
}

/// Creates a bubbling, cancelable event named `name`.
pub fn new_event(name: &str) -> Event {
    Event {
        event_type: name.to_string(),
        bubbles: true,
        cancelable: true,
        default_prevented: false,
    }
}
