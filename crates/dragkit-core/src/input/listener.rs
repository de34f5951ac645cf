//! Listener identities and the per-controller registration table

use super::event::{InputKind, InputSource};

/// Where a listener is registered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerScope {
    /// On the dragged element itself
    Subject,
    /// On the global input surface (the window)
    Global,
}

/// One native event registration owned by a controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl Listener {
    /// Every listener a controller can own
    pub const ALL: [Listener; 6] = [
        Listener::MouseDown,
        Listener::MouseMove,
        Listener::MouseUp,
        Listener::TouchStart,
        Listener::TouchMove,
        Listener::TouchEnd,
    ];

    /// Listeners attached while idle
    pub const PRESS: [Listener; 2] = [Listener::MouseDown, Listener::TouchStart];

    /// Listener for a source/kind pair
    pub fn for_input(source: InputSource, kind: InputKind) -> Listener {
        match (source, kind) {
            (InputSource::Mouse, InputKind::Press) => Listener::MouseDown,
            (InputSource::Mouse, InputKind::Move) => Listener::MouseMove,
            (InputSource::Mouse, InputKind::Release) => Listener::MouseUp,
            (InputSource::Touch, InputKind::Press) => Listener::TouchStart,
            (InputSource::Touch, InputKind::Move) => Listener::TouchMove,
            (InputSource::Touch, InputKind::Release) => Listener::TouchEnd,
        }
    }

    /// Move and release listeners attached for the length of a session
    pub fn session(source: InputSource) -> [Listener; 2] {
        [
            Listener::for_input(source, InputKind::Move),
            Listener::for_input(source, InputKind::Release),
        ]
    }

    /// DOM event type name
    pub fn event_name(self) -> &'static str {
        match self {
            Listener::MouseDown => "mousedown",
            Listener::MouseMove => "mousemove",
            Listener::MouseUp => "mouseup",
            Listener::TouchStart => "touchstart",
            Listener::TouchMove => "touchmove",
            Listener::TouchEnd => "touchend",
        }
    }

    pub fn source(self) -> InputSource {
        match self {
            Listener::MouseDown | Listener::MouseMove | Listener::MouseUp => InputSource::Mouse,
            Listener::TouchStart | Listener::TouchMove | Listener::TouchEnd => InputSource::Touch,
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            Listener::MouseDown | Listener::TouchStart => InputKind::Press,
            Listener::MouseMove | Listener::TouchMove => InputKind::Move,
            Listener::MouseUp | Listener::TouchEnd => InputKind::Release,
        }
    }

    /// Press listeners live on the subject; the rest on the global surface
    /// so a drag keeps tracking after the pointer leaves the subject.
    pub fn scope(self) -> ListenerScope {
        match self.kind() {
            InputKind::Press => ListenerScope::Subject,
            InputKind::Move | InputKind::Release => ListenerScope::Global,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of listeners a controller currently has attached
///
/// Attaching an already-present listener is a no-op, matching how the DOM
/// deduplicates identical `addEventListener` calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerTable {
    bits: u8,
}

impl ListenerTable {
    /// Empty table
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Record a listener. Returns false if it was already present.
    pub fn insert(&mut self, listener: Listener) -> bool {
        let was_present = self.contains(listener);
        self.bits |= listener.bit();
        !was_present
    }

    /// Forget a listener. Returns false if it was not present.
    pub fn remove(&mut self, listener: Listener) -> bool {
        let was_present = self.contains(listener);
        self.bits &= !listener.bit();
        was_present
    }

    #[inline]
    pub fn contains(&self, listener: Listener) -> bool {
        self.bits & listener.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Attached listeners in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Listener> + '_ {
        Listener::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_scopes() {
        assert_eq!(Listener::MouseDown.scope(), ListenerScope::Subject);
        assert_eq!(Listener::TouchStart.scope(), ListenerScope::Subject);
        assert_eq!(Listener::MouseMove.scope(), ListenerScope::Global);
        assert_eq!(Listener::MouseUp.scope(), ListenerScope::Global);
        assert_eq!(Listener::TouchMove.scope(), ListenerScope::Global);
        assert_eq!(Listener::TouchEnd.scope(), ListenerScope::Global);
    }

    #[test]
    fn test_for_input_roundtrips_source_and_kind() {
        for listener in Listener::ALL {
            assert_eq!(Listener::for_input(listener.source(), listener.kind()), listener);
        }
    }

    #[test]
    fn test_session_listeners() {
        assert_eq!(
            Listener::session(InputSource::Touch),
            [Listener::TouchMove, Listener::TouchEnd]
        );
        assert_eq!(Listener::TouchEnd.event_name(), "touchend");
    }

    #[test]
    fn test_table_deduplicates() {
        let mut table = ListenerTable::new();
        assert!(table.insert(Listener::MouseDown));
        assert!(!table.insert(Listener::MouseDown));
        assert_eq!(table.len(), 1);

        assert!(table.remove(Listener::MouseDown));
        assert!(!table.remove(Listener::MouseDown));
        assert!(table.is_empty());
    }

    #[test]
    fn test_table_iter_order() {
        let mut table = ListenerTable::new();
        table.insert(Listener::TouchEnd);
        table.insert(Listener::MouseDown);

        let attached: Vec<_> = table.iter().collect();
        assert_eq!(attached, vec![Listener::MouseDown, Listener::TouchEnd]);
    }
}
