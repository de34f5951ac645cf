//! Normalized input events
//!
//! Mouse and touch events are collapsed into one shape before they reach
//! the controller. Touch events contribute only their first touch point.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// Device family an event came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Phase of a single-pointer interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// mousedown / touchstart
    Press,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Release,
}

/// A press, move or release carrying viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    pub kind: InputKind,
    pub source: InputSource,
    /// Pointer position (`clientX`/`clientY`). Unused for releases.
    pub position: Vec2,
}

impl InputEvent {
    /// Create a new event
    #[inline]
    pub const fn new(kind: InputKind, source: InputSource, position: Vec2) -> Self {
        Self { kind, source, position }
    }

    /// Mouse press at `(x, y)`
    #[inline]
    pub const fn mouse_down(x: f64, y: f64) -> Self {
        Self::new(InputKind::Press, InputSource::Mouse, Vec2::new(x, y))
    }

    /// Mouse move to `(x, y)`
    #[inline]
    pub const fn mouse_move(x: f64, y: f64) -> Self {
        Self::new(InputKind::Move, InputSource::Mouse, Vec2::new(x, y))
    }

    /// Mouse release
    #[inline]
    pub const fn mouse_up() -> Self {
        Self::new(InputKind::Release, InputSource::Mouse, Vec2::ZERO)
    }

    /// Touch start with the first touch point at `(x, y)`
    #[inline]
    pub const fn touch_start(x: f64, y: f64) -> Self {
        Self::new(InputKind::Press, InputSource::Touch, Vec2::new(x, y))
    }

    /// Touch move with the first touch point at `(x, y)`
    #[inline]
    pub const fn touch_move(x: f64, y: f64) -> Self {
        Self::new(InputKind::Move, InputSource::Touch, Vec2::new(x, y))
    }

    /// Touch end
    #[inline]
    pub const fn touch_end() -> Self {
        Self::new(InputKind::Release, InputSource::Touch, Vec2::ZERO)
    }
}
