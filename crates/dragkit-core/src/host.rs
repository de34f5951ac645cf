//! Host abstraction for the presentation layer
//!
//! The controller never touches a document directly. Everything it needs
//! from the page goes through [`DragHost`], so the state machine runs the
//! same against the browser DOM and against an in-memory test scene.
//!
//! # Implementations
//!
//! - **Browser**: `dragkit-web`'s `WebHost` over `web-sys`
//! - **Tests**: `dragkit-host-mock`'s `MockHost`

use crate::input::Listener;
use crate::math::{Axis, Rect};

/// Computed `left`/`top` style values, as the host reports them
///
/// These are raw strings such as `"100px"` or `"auto"`; the controller
/// parses them itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedOffset {
    pub left: String,
    pub top: String,
}

impl ComputedOffset {
    /// Create from raw style strings
    pub fn new(left: impl Into<String>, top: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            top: top.into(),
        }
    }

    /// Raw value for an axis
    pub fn along(&self, axis: Axis) -> &str {
        match axis {
            Axis::Horizontal => &self.left,
            Axis::Vertical => &self.top,
        }
    }
}

/// Presentation-layer operations consumed by a [`Draggable`](crate::Draggable)
///
/// Implementations provide:
/// - Identifier resolution
/// - Geometry and computed-style queries
/// - Inline position writes
/// - Listener registration on the subject or the global surface
/// - Debug output
pub trait DragHost {
    /// Handle to a page element (subject or cage)
    type Element: Clone;

    /// Resolve an element identifier
    ///
    /// # Returns
    /// * `Some(element)` - An element with this id exists
    /// * `None` - No such element
    fn resolve(&self, id: &str) -> Option<Self::Element>;

    /// Bounding rectangle in viewport coordinates
    ///
    /// Detached elements report [`Rect::ZERO`].
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Current computed `left`/`top` of an element
    fn computed_offset(&self, element: &Self::Element) -> ComputedOffset;

    /// Whether the element is an image (`<img>`), whose native drag-image
    /// behavior has to be suppressed on mouse input
    fn is_image(&self, element: &Self::Element) -> bool;

    /// Write `style.left` or `style.top` in pixels
    fn set_offset(&mut self, element: &Self::Element, axis: Axis, px: f64);

    /// Register a listener
    ///
    /// `Subject`-scoped listeners go on `subject`, `Global`-scoped ones on
    /// the global input surface.
    fn attach(&mut self, listener: Listener, subject: &Self::Element);

    /// Unregister a listener previously passed to [`attach`](Self::attach)
    fn detach(&mut self, listener: Listener, subject: &Self::Element);

    /// Write a diagnostic message
    fn debug_write(&self, msg: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_offset_along() {
        let offset = ComputedOffset::new("12px", "auto");
        assert_eq!(offset.along(Axis::Horizontal), "12px");
        assert_eq!(offset.along(Axis::Vertical), "auto");
    }
}
