//! WASM export for the drag controller
//!
//! This module wraps the core `Draggable` in a JS-friendly class. Subject
//! and cage arguments may be elements or element id strings.

use std::cell::RefCell;
use std::rc::Rc;

use dragkit_core::{DragConfig, DragError, Draggable as Controller};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::handlers::{Handlers, SharedController};
use crate::host::WebHost;

/// Makes a DOM element draggable, optionally inside a cage element
#[wasm_bindgen]
pub struct Draggable {
    inner: Rc<SharedController>,
}

#[wasm_bindgen]
impl Draggable {
    /// Create a controller and start listening for presses on `subject`
    ///
    /// `cage` may be an element, an id, or `null`/`undefined`. An unknown
    /// cage id means no cage; an unknown subject is an error.
    #[wasm_bindgen(constructor)]
    pub fn new(subject: JsValue, cage: JsValue) -> Result<Draggable, JsValue> {
        let (window, document) = dom()?;
        let subject = subject_from(&subject, &document)?;
        let cage = element_from(&cage, &document);

        Ok(Self::build(window, document, |host| Controller::new(host, subject, cage)))
    }

    /// Create a controller from a JSON options document
    ///
    /// Options: `{"cage": "<id>", "trace": true}`; both are optional.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(subject: JsValue, options_json: &str) -> Result<Draggable, JsValue> {
        let config = DragConfig::from_json(options_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let (window, document) = dom()?;
        let subject = subject_from(&subject, &document)?;

        Ok(Self::build(window, document, |host| {
            Controller::with_config(host, subject, &config)
        }))
    }

    /// Replace the cage; `null` removes it
    #[wasm_bindgen(js_name = setCage)]
    pub fn set_cage(&self, cage: JsValue) {
        self.with_controller(|drag| match cage.as_string() {
            Some(id) => drag.set_cage_id(Some(&id)),
            None => drag.set_cage(cage.dyn_ref::<Element>().cloned()),
        });
    }

    /// Stop dragging and remove every listener this instance registered
    #[wasm_bindgen]
    pub fn deactivate(&self) {
        self.with_controller(|drag| drag.deactivate());
    }

    /// Reset to the freshly-constructed state
    #[wasm_bindgen]
    pub fn reactivate(&self) {
        self.with_controller(|drag| drag.reactivate());
    }

    /// Whether a pointer is currently down on the subject
    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.with_controller(|drag| drag.is_dragging()).unwrap_or(false)
    }

    /// Session state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        self.with_controller(|drag| serde_json::to_string(&drag.state()).ok())
            .flatten()
            .unwrap_or_else(|| "{}".to_string())
    }
}

impl Draggable {
    fn build(
        window: Window,
        document: Document,
        controller: impl FnOnce(WebHost) -> Controller<WebHost>,
    ) -> Self {
        let inner = Rc::new_cyclic(|weak| {
            let host = WebHost::new(window, document, Handlers::new(weak));
            RefCell::new(controller(host))
        });
        Self { inner }
    }

    fn with_controller<R>(&self, f: impl FnOnce(&mut Controller<WebHost>) -> R) -> Option<R> {
        match self.inner.try_borrow_mut() {
            Ok(mut drag) => Some(f(&mut drag)),
            Err(_) => {
                crate::log("[dragkit] controller busy; call ignored");
                None
            }
        }
    }
}

impl Drop for Draggable {
    fn drop(&mut self) {
        // Handlers die with the controller; none may stay registered
        self.with_controller(|drag| drag.deactivate());
    }
}

fn dom() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok((window, document))
}

/// Element argument: an element, an id string, or nothing
fn element_from(value: &JsValue, document: &Document) -> Option<Element> {
    match value.as_string() {
        Some(id) => {
            let element = document.get_element_by_id(&id);
            if element.is_none() {
                crate::log(&format!("[dragkit] element '{}' not found", id));
            }
            element
        }
        None => value.dyn_ref::<Element>().cloned(),
    }
}

fn subject_from(value: &JsValue, document: &Document) -> Result<Element, JsValue> {
    element_from(value, document).ok_or_else(|| {
        let id = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        JsValue::from_str(&DragError::SubjectNotFound(id).to_string())
    })
}
