//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::error::DragError;

/// Options for building a [`Draggable`](crate::Draggable)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragConfig {
    /// Identifier of the cage element. Unknown ids mean no cage.
    pub cage: Option<String>,
    /// Log session transitions through the host's debug output
    pub trace: bool,
}

impl DragConfig {
    /// Parse a JSON options document such as `{"cage":"arena","trace":true}`
    pub fn from_json(json: &str) -> Result<Self, DragError> {
        Ok(serde_json::from_str(json)?)
    }
}
