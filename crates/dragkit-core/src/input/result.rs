//! Input result type

use serde::Serialize;

/// Result of handing an event to the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event drove the state machine
    Handled {
        /// Host should call `preventDefault()` on the native event
        #[serde(rename = "preventDefault")]
        prevent_default: bool,
    },
    /// Event arrived in a state that ignores it
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled { .. })
    }

    /// Check if the native default action should be suppressed
    #[inline]
    pub fn prevents_default(&self) -> bool {
        matches!(self, InputResult::Handled { prevent_default: true })
    }
}
