//! Mock host implementation for testing dragkit
//!
//! This provides an in-memory scene that implements [`DragHost`], so the
//! drag controller can be exercised without a browser.
//!
//! Each element has a viewport rect and a positioning origin. Its computed
//! `left`/`top` are `rect - origin`, and writing a style offset moves the
//! rect accordingly, which is how an absolutely positioned element inside a
//! positioned ancestor behaves.

use std::cell::RefCell;
use std::collections::BTreeMap;

use dragkit_core::{Axis, ComputedOffset, DragHost, Listener, ListenerScope, Rect, Vec2};

/// Handle to an element in the mock scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// Simulated element state
#[derive(Clone, Debug)]
struct MockElement {
    id: String,
    tag: String,
    rect: Rect,
    /// Viewport position of the element's containing block
    origin: Vec2,
    /// Whether computed style reports pixel offsets (false mimics `auto`)
    positioned: bool,
    attached_to_document: bool,
}

/// Mock host for unit testing
///
/// Provides a simulated element tree, listener registry, and debug log.
pub struct MockHost {
    elements: BTreeMap<ElementId, MockElement>,
    next_id: u32,
    /// Listeners on elements: (element, listener)
    element_listeners: Vec<(ElementId, Listener)>,
    /// Listeners on the global input surface
    global_listeners: Vec<Listener>,
    /// Every style write, in order: (element, axis, px)
    style_writes: Vec<(ElementId, Axis, f64)>,
    /// Captured debug messages
    debug_log: RefCell<Vec<String>>,
}

impl MockHost {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_id: 1,
            element_listeners: Vec::new(),
            global_listeners: Vec::new(),
            style_writes: Vec::new(),
            debug_log: RefCell::new(Vec::new()),
        }
    }

    /// Add a `<div>` with the given viewport rect whose containing block
    /// sits at the viewport origin
    pub fn add_element(&mut self, id: &str, rect: Rect) -> ElementId {
        self.add_element_with(id, "DIV", rect, Vec2::ZERO)
    }

    /// Add an element with an explicit tag name and containing-block origin
    pub fn add_element_with(&mut self, id: &str, tag: &str, rect: Rect, origin: Vec2) -> ElementId {
        let handle = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            handle,
            MockElement {
                id: id.to_string(),
                tag: tag.to_ascii_uppercase(),
                rect,
                origin,
                positioned: true,
                attached_to_document: true,
            },
        );
        handle
    }

    /// Make computed `left`/`top` report `auto`
    pub fn set_unpositioned(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.positioned = false;
        }
    }

    /// Move an element's rect directly (layout change outside the controller)
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.rect = rect;
        }
    }

    /// Detach an element from the document
    ///
    /// Detached elements report a zero rect and empty computed styles.
    pub fn remove_element(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.attached_to_document = false;
        }
    }

    /// Current viewport rect of an element
    pub fn rect(&self, element: ElementId) -> Rect {
        self.bounding_rect(&element)
    }

    /// Current style offset (`left`, `top`) of an element
    pub fn style_offset(&self, element: ElementId) -> Option<Vec2> {
        self.elements
            .get(&element)
            .map(|el| el.rect.position() - el.origin)
    }

    /// All style writes so far
    pub fn style_writes(&self) -> &[(ElementId, Axis, f64)] {
        &self.style_writes
    }

    /// Forget recorded style writes
    pub fn clear_style_writes(&mut self) {
        self.style_writes.clear();
    }

    /// Check whether a listener is registered on an element
    pub fn has_element_listener(&self, element: ElementId, listener: Listener) -> bool {
        self.element_listeners.contains(&(element, listener))
    }

    /// Check whether a listener is registered on the global surface
    pub fn has_global_listener(&self, listener: Listener) -> bool {
        self.global_listeners.contains(&listener)
    }

    /// Total registrations across elements and the global surface
    pub fn listener_count(&self) -> usize {
        self.element_listeners.len() + self.global_listeners.len()
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.borrow().clone()
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log
            .borrow()
            .iter()
            .any(|msg| msg.contains(substr))
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DragHost for MockHost {
    type Element = ElementId;

    fn resolve(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, el)| el.attached_to_document && el.id == id)
            .map(|(handle, _)| *handle)
    }

    fn bounding_rect(&self, element: &ElementId) -> Rect {
        match self.elements.get(element) {
            Some(el) if el.attached_to_document => el.rect,
            _ => Rect::ZERO,
        }
    }

    fn computed_offset(&self, element: &ElementId) -> ComputedOffset {
        match self.elements.get(element) {
            Some(el) if el.attached_to_document && el.positioned => {
                let offset = el.rect.position() - el.origin;
                ComputedOffset::new(format!("{}px", offset.x), format!("{}px", offset.y))
            }
            Some(el) if el.attached_to_document => ComputedOffset::new("auto", "auto"),
            _ => ComputedOffset::default(),
        }
    }

    fn is_image(&self, element: &ElementId) -> bool {
        self.elements
            .get(element)
            .map(|el| el.tag == "IMG")
            .unwrap_or(false)
    }

    fn set_offset(&mut self, element: &ElementId, axis: Axis, px: f64) {
        self.style_writes.push((*element, axis, px));
        if let Some(el) = self.elements.get_mut(element) {
            el.positioned = true;
            match axis {
                Axis::Horizontal => el.rect.x = px + el.origin.x,
                Axis::Vertical => el.rect.y = px + el.origin.y,
            }
        }
    }

    fn attach(&mut self, listener: Listener, subject: &ElementId) {
        match listener.scope() {
            ListenerScope::Subject => {
                if !self.has_element_listener(*subject, listener) {
                    self.element_listeners.push((*subject, listener));
                }
            }
            ListenerScope::Global => {
                if !self.has_global_listener(listener) {
                    self.global_listeners.push(listener);
                }
            }
        }
        self.debug_write(&format!("[mock-host] add {} ({:?})", listener.event_name(), listener.scope()));
    }

    fn detach(&mut self, listener: Listener, subject: &ElementId) {
        match listener.scope() {
            ListenerScope::Subject => self
                .element_listeners
                .retain(|entry| *entry != (*subject, listener)),
            ListenerScope::Global => self.global_listeners.retain(|l| *l != listener),
        }
        self.debug_write(&format!("[mock-host] remove {} ({:?})", listener.event_name(), listener.scope()));
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.borrow_mut().push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_id() {
        let mut host = MockHost::new();
        let subject = host.add_element("box", Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(host.resolve("box"), Some(subject));
        assert_eq!(host.resolve("missing"), None);
    }

    #[test]
    fn test_computed_offset_tracks_origin() {
        let mut host = MockHost::new();
        let el = host.add_element_with("box", "div", Rect::new(100.0, 50.0, 40.0, 20.0), Vec2::new(30.0, 20.0));

        assert_eq!(host.computed_offset(&el), ComputedOffset::new("70px", "30px"));
        assert!(!host.is_image(&el));
    }

    #[test]
    fn test_set_offset_moves_rect() {
        let mut host = MockHost::new();
        let el = host.add_element_with("box", "img", Rect::new(100.0, 50.0, 40.0, 20.0), Vec2::new(30.0, 20.0));

        host.set_offset(&el, Axis::Horizontal, 10.0);
        host.set_offset(&el, Axis::Vertical, 5.0);

        assert_eq!(host.rect(el), Rect::new(40.0, 25.0, 40.0, 20.0));
        assert_eq!(host.style_writes().len(), 2);
        assert!(host.is_image(&el));
    }

    #[test]
    fn test_removed_element_reports_zero_rect() {
        let mut host = MockHost::new();
        let el = host.add_element("box", Rect::new(100.0, 50.0, 40.0, 20.0));
        host.remove_element(el);

        assert_eq!(host.bounding_rect(&el), Rect::ZERO);
        assert_eq!(host.computed_offset(&el), ComputedOffset::default());
        assert_eq!(host.resolve("box"), None);
    }

    #[test]
    fn test_listener_registry_scopes() {
        let mut host = MockHost::new();
        let el = host.add_element("box", Rect::new(0.0, 0.0, 10.0, 10.0));

        host.attach(Listener::MouseDown, &el);
        host.attach(Listener::MouseMove, &el);
        host.attach(Listener::MouseMove, &el);

        assert!(host.has_element_listener(el, Listener::MouseDown));
        assert!(host.has_global_listener(Listener::MouseMove));
        assert!(!host.has_element_listener(el, Listener::MouseMove));
        assert_eq!(host.listener_count(), 2);

        host.detach(Listener::MouseMove, &el);
        assert_eq!(host.listener_count(), 1);
        assert!(host.has_log_containing("remove mousemove"));
    }
}
