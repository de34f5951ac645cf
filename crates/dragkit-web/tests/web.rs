//! Browser tests for the Draggable export
//!
//! Run with `wasm-pack test --headless --chrome crates/dragkit-web`. The
//! touch tests need the `Touch` and `TouchEvent` constructors, which desktop
//! Firefox hides by default.

#![cfg(target_arch = "wasm32")]

use dragkit_web::Draggable;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{
    Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit, Touch, TouchEvent,
    TouchEventInit, TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn add_box(id: &str, style: &str) -> Element {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_attribute("style", style).unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn mouse(target: &EventTarget, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn touch_point(target: &EventTarget, id: i32, x: i32, y: i32) -> Touch {
    let init = Object::new();
    Reflect::set(&init, &"identifier".into(), &id.into()).unwrap();
    Reflect::set(&init, &"target".into(), target).unwrap();
    Reflect::set(&init, &"clientX".into(), &x.into()).unwrap();
    Reflect::set(&init, &"clientY".into(), &y.into()).unwrap();
    Touch::new(init.unchecked_ref::<TouchInit>()).unwrap()
}

/// Dispatch a touch event; returns whether a handler called preventDefault
fn touch(target: &EventTarget, kind: &str, touches: &[Touch]) -> bool {
    let list = Array::new();
    for point in touches {
        list.push(point);
    }
    let init = Object::new();
    Reflect::set(&init, &"bubbles".into(), &JsValue::TRUE).unwrap();
    Reflect::set(&init, &"cancelable".into(), &JsValue::TRUE).unwrap();
    Reflect::set(&init, &"touches".into(), &list).unwrap();
    let event = TouchEvent::new_with_event_init_dict(kind, init.unchecked_ref::<TouchEventInit>()).unwrap();
    target.dispatch_event(&event).unwrap();
    event.default_prevented()
}

fn style_property(element: &Element, name: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(name)
        .unwrap()
}

fn style_left(element: &Element) -> String {
    style_property(element, "left")
}

#[wasm_bindgen_test]
fn test_drag_within_cage() {
    let subject = add_box(
        "web-subject",
        "position:absolute;left:100px;top:50px;width:40px;height:20px",
    );
    let cage = add_box(
        "web-cage",
        "position:absolute;left:0px;top:0px;width:200px;height:200px",
    );
    let window: EventTarget = web_sys::window().unwrap().into();

    let drag = Draggable::new(JsValue::from_str("web-subject"), JsValue::from_str("web-cage")).unwrap();

    mouse(&subject, "mousedown", 110, 55);
    assert!(drag.is_dragging());

    mouse(&window, "mousemove", 5, 55);
    assert_eq!(style_left(&subject), "0px");

    mouse(&window, "mousemove", 130, 60);
    assert_eq!(style_left(&subject), "120px");

    mouse(&window, "mouseup", 130, 60);
    assert!(!drag.is_dragging());

    mouse(&window, "mousemove", 20, 20);
    assert_eq!(style_left(&subject), "120px");

    drop(drag);
    subject.remove();
    cage.remove();
}

#[wasm_bindgen_test]
fn test_touch_follows_first_point() {
    let subject = add_box(
        "web-touch",
        "position:absolute;left:100px;top:50px;width:40px;height:20px",
    );
    let window: EventTarget = web_sys::window().unwrap().into();
    let drag = Draggable::new(subject.clone().into(), JsValue::NULL).unwrap();

    let prevented = touch(
        &subject,
        "touchstart",
        &[touch_point(&subject, 1, 110, 55), touch_point(&subject, 2, 300, 300)],
    );
    assert!(prevented);
    assert!(drag.is_dragging());

    // Second point is ignored; grab offset is (10, 5)
    touch(
        &window,
        "touchmove",
        &[touch_point(&subject, 1, 150, 80), touch_point(&subject, 2, 5, 5)],
    );
    assert_eq!(style_left(&subject), "140px");
    assert_eq!(style_property(&subject, "top"), "75px");

    // A move without touch points carries no position
    touch(&window, "touchmove", &[]);
    assert!(drag.is_dragging());
    assert_eq!(style_left(&subject), "140px");

    // touchend has no touch points left and still ends the session
    touch(&window, "touchend", &[]);
    assert!(!drag.is_dragging());

    touch(&window, "touchmove", &[touch_point(&subject, 1, 20, 20)]);
    assert_eq!(style_left(&subject), "140px");

    drop(drag);
    subject.remove();
}

#[wasm_bindgen_test]
fn test_deactivate_stops_presses() {
    let subject = add_box(
        "web-inert",
        "position:absolute;left:10px;top:10px;width:40px;height:20px",
    );
    let drag = Draggable::new(subject.clone().into(), JsValue::NULL).unwrap();

    drag.deactivate();
    drag.deactivate();
    mouse(&subject, "mousedown", 15, 15);
    assert!(!drag.is_dragging());

    drag.reactivate();
    mouse(&subject, "mousedown", 15, 15);
    assert!(drag.is_dragging());
    assert!(drag.state_json().contains("\"state\":\"dragging\""));

    drop(drag);
    subject.remove();
}

#[wasm_bindgen_test]
fn test_unknown_subject_is_an_error() {
    assert!(Draggable::new(JsValue::from_str("no-such-element"), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_with_options_rejects_bad_json() {
    let subject = add_box("web-opts", "position:absolute;left:0px;top:0px;width:10px;height:10px");
    assert!(Draggable::with_options(JsValue::from_str("web-opts"), "{").is_err());
    assert!(Draggable::with_options(JsValue::from_str("web-opts"), r#"{"cage":"nowhere"}"#).is_ok());

    subject.remove();
}
