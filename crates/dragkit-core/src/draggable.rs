//! Draggable controller
//!
//! One controller makes one subject draggable. It owns the session state
//! and the table of listeners it has attached through its host.
//!
//! ```text
//!            press                      move
//!   Idle ───────────────▶ Dragging ◀──────────┐
//!    ▲                      │   └─────────────┘
//!    └──────── release ─────┘
//! ```
//!
//! `deactivate()` drops every listener and leaves the controller inert
//! until `reactivate()`.

use serde::Serialize;

use crate::clamp::compute_placement;
use crate::config::DragConfig;
use crate::error::DragError;
use crate::host::DragHost;
use crate::input::{InputEvent, InputKind, InputResult, InputSource, Listener, ListenerTable};
use crate::math::{Axis, Vec2};

/// Session state of a controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DragState {
    /// No pointer is down
    #[default]
    Idle,
    /// A pointer is down on the subject
    Dragging {
        /// Device that started the session
        source: InputSource,
        /// Pointer position relative to the subject's top-left at press time
        #[serde(rename = "grabOffset")]
        grab_offset: Vec2,
    },
}

impl DragState {
    /// Check if a pointer is down
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Grab offset of the current session
    pub fn grab_offset(&self) -> Option<Vec2> {
        match self {
            DragState::Dragging { grab_offset, .. } => Some(*grab_offset),
            DragState::Idle => None,
        }
    }
}

/// Makes a subject element follow the pointer, optionally inside a cage
pub struct Draggable<H: DragHost> {
    host: H,
    subject: H::Element,
    cage: Option<H::Element>,
    state: DragState,
    /// Survives release; recomputed on the next press
    last_grab_offset: Vec2,
    listeners: ListenerTable,
    trace: bool,
}

impl<H: DragHost> Draggable<H> {
    /// Create a controller and start listening for presses on `subject`
    pub fn new(host: H, subject: H::Element, cage: Option<H::Element>) -> Self {
        let mut draggable = Self {
            host,
            subject,
            cage,
            state: DragState::Idle,
            last_grab_offset: Vec2::ZERO,
            listeners: ListenerTable::new(),
            trace: false,
        };
        draggable.activate();
        draggable
    }

    /// Create a controller from element identifiers
    ///
    /// An unknown cage id silently means no cage.
    ///
    /// # Returns
    /// * `Err(DragError::SubjectNotFound)` - `subject_id` did not resolve
    pub fn from_ids(host: H, subject_id: &str, cage_id: Option<&str>) -> Result<Self, DragError> {
        let subject = host
            .resolve(subject_id)
            .ok_or_else(|| DragError::SubjectNotFound(subject_id.to_string()))?;
        let cage = cage_id.and_then(|id| resolve_cage(&host, id));
        Ok(Self::new(host, subject, cage))
    }

    /// Create a controller from a [`DragConfig`]
    pub fn with_config(host: H, subject: H::Element, config: &DragConfig) -> Self {
        let cage = config.cage.as_deref().and_then(|id| resolve_cage(&host, id));
        let mut draggable = Self::new(host, subject, cage);
        draggable.trace = config.trace;
        draggable.trace_log("activated");
        draggable
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Stop all dragging and drop every listener this controller attached
    ///
    /// Calling it again is harmless.
    pub fn deactivate(&mut self) {
        self.state = DragState::Idle;
        let attached = self.listeners;
        for listener in attached.iter() {
            self.detach(listener);
        }
        self.trace_log("deactivated");
    }

    /// Reset to the freshly-constructed state: idle, press listeners only
    pub fn reactivate(&mut self) {
        self.deactivate();
        self.activate();
        self.trace_log("reactivated");
    }

    fn activate(&mut self) {
        for listener in Listener::PRESS {
            self.attach(listener);
        }
    }

    // =========================================================================
    // Cage
    // =========================================================================

    /// Replace the containment surface; `None` removes the constraint
    pub fn set_cage(&mut self, cage: Option<H::Element>) {
        self.cage = cage;
        self.trace_log(if self.cage.is_some() { "cage set" } else { "cage cleared" });
    }

    /// Replace the containment surface by identifier
    ///
    /// An id that does not resolve clears the constraint.
    pub fn set_cage_id(&mut self, id: Option<&str>) {
        let cage = id.and_then(|id| resolve_cage(&self.host, id));
        self.set_cage(cage);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch an event delivered by the host
    ///
    /// Events for listeners this controller has not attached are dropped.
    pub fn handle(&mut self, event: InputEvent) -> InputResult {
        if !self.listeners.contains(Listener::for_input(event.source, event.kind)) {
            return InputResult::Unhandled;
        }

        match event.kind {
            InputKind::Press => self.press(event.source, event.position),
            InputKind::Move => self.move_to(event.source, event.position),
            InputKind::Release => self.release(event.source),
        }
    }

    /// Start a session: record the grab offset and follow the pointer globally
    ///
    /// A press during a session overwrites it.
    pub fn press(&mut self, source: InputSource, position: Vec2) -> InputResult {
        let rect = self.host.bounding_rect(&self.subject);
        let grab_offset = position - rect.position();

        self.state = DragState::Dragging { source, grab_offset };
        self.last_grab_offset = grab_offset;
        for listener in Listener::session(source) {
            self.attach(listener);
        }

        self.trace_log(&format!(
            "press ({:?}) at ({}, {}), grab offset ({}, {})",
            source, position.x, position.y, grab_offset.x, grab_offset.y
        ));

        InputResult::Handled {
            prevent_default: self.suppresses_default(source),
        }
    }

    /// Reposition the subject for a pointer move
    pub fn move_to(&mut self, source: InputSource, position: Vec2) -> InputResult {
        let Some(grab_offset) = self.state.grab_offset() else {
            return InputResult::Unhandled;
        };

        let subject_rect = self.host.bounding_rect(&self.subject);
        let style = self.host.computed_offset(&self.subject);
        let cage_rect = self.cage.as_ref().map(|cage| self.host.bounding_rect(cage));

        let placement = compute_placement(position, grab_offset, subject_rect, &style, cage_rect);
        for axis in Axis::ALL {
            if let Some(px) = placement.along(axis) {
                self.host.set_offset(&self.subject, axis, px);
            }
        }

        InputResult::Handled {
            prevent_default: self.suppresses_default(source),
        }
    }

    /// End the session and stop following this source
    ///
    /// Press listeners stay attached so the next press starts a new session.
    /// The source's session listeners are dropped even when no session is
    /// running, since an overwritten session may have left them attached.
    pub fn release(&mut self, source: InputSource) -> InputResult {
        for listener in Listener::session(source) {
            self.detach(listener);
        }
        if !self.state.is_dragging() {
            return InputResult::Unhandled;
        }

        self.state = DragState::Idle;
        self.trace_log(&format!("release ({:?})", source));

        InputResult::Handled {
            prevent_default: false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Grab offset of the current session, if one is running
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.state.grab_offset()
    }

    /// Grab offset recorded by the most recent press
    pub fn last_grab_offset(&self) -> Vec2 {
        self.last_grab_offset
    }

    pub fn subject(&self) -> &H::Element {
        &self.subject
    }

    pub fn cage(&self) -> Option<&H::Element> {
        self.cage.as_ref()
    }

    /// Whether `listener` is currently attached by this controller
    pub fn is_listening(&self, listener: Listener) -> bool {
        self.listeners.contains(listener)
    }

    /// Whether any listener is attached (false after `deactivate`)
    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listeners(&self) -> ListenerTable {
        self.listeners
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn attach(&mut self, listener: Listener) {
        if self.listeners.insert(listener) {
            self.host.attach(listener, &self.subject);
        }
    }

    fn detach(&mut self, listener: Listener) {
        if self.listeners.remove(listener) {
            self.host.detach(listener, &self.subject);
        }
    }

    /// Touch always suppresses scrolling; mouse only suppresses the native
    /// drag-image of `<img>` subjects.
    fn suppresses_default(&self, source: InputSource) -> bool {
        match source {
            InputSource::Touch => true,
            InputSource::Mouse => self.host.is_image(&self.subject),
        }
    }

    fn trace_log(&self, msg: &str) {
        if self.trace {
            self.host.debug_write(&format!("[dragkit] {}", msg));
        }
    }
}

fn resolve_cage<H: DragHost>(host: &H, id: &str) -> Option<H::Element> {
    let cage = host.resolve(id);
    if cage.is_none() {
        host.debug_write(&format!("[dragkit] cage '{}' not found, dragging unconstrained", id));
    }
    cage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_state() {
        let state = DragState::Idle;
        assert!(!state.is_dragging());
        assert!(state.grab_offset().is_none());
        assert_eq!(DragState::default(), DragState::Idle);
    }

    #[test]
    fn test_dragging_state_preserves_offset() {
        let state = DragState::Dragging {
            source: InputSource::Touch,
            grab_offset: Vec2::new(10.0, 5.0),
        };
        assert!(state.is_dragging());

        let offset = state.grab_offset().unwrap();
        assert!((offset.x - 10.0).abs() < 0.001);
        assert!((offset.y - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_string(&DragState::Dragging {
            source: InputSource::Mouse,
            grab_offset: Vec2::new(1.0, 2.0),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"state":"dragging","source":"mouse","grabOffset":{"x":1.0,"y":2.0}}"#
        );
        assert_eq!(serde_json::to_string(&DragState::Idle).unwrap(), r#"{"state":"idle"}"#);
    }
}
