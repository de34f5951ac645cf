//! Native event normalization

use dragkit_core::{InputEvent, InputKind, InputSource, Listener, Vec2};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Convert a native event delivered to `listener` into an [`InputEvent`]
///
/// Touch events use the first active touch point only. `touchend` has no
/// active touch left, which is fine since releases carry no position.
/// Returns `None` for events of an unexpected type or a touch press/move
/// without touches.
///
/// `clientX`/`clientY` come through web-sys as `i32`, so positions are
/// whole pixels.
pub(crate) fn normalize(listener: Listener, event: &Event) -> Option<InputEvent> {
    let position = match listener.source() {
        InputSource::Mouse => {
            let event = event.dyn_ref::<MouseEvent>()?;
            Vec2::new(event.client_x() as f64, event.client_y() as f64)
        }
        InputSource::Touch => {
            let event = event.dyn_ref::<TouchEvent>()?;
            match event.touches().item(0) {
                Some(touch) => Vec2::new(touch.client_x() as f64, touch.client_y() as f64),
                None if listener.kind() == InputKind::Release => Vec2::ZERO,
                None => return None,
            }
        }
    };

    Some(InputEvent::new(listener.kind(), listener.source(), position))
}
