//! DragHost implementation over the browser DOM

use dragkit_core::{Axis, ComputedOffset, DragHost, Listener, ListenerScope, Rect};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

use crate::handlers::Handlers;

/// Browser host: the window is the global input surface
pub struct WebHost {
    window: Window,
    document: Document,
    handlers: Handlers,
}

impl WebHost {
    pub(crate) fn new(window: Window, document: Document, handlers: Handlers) -> Self {
        Self {
            window,
            document,
            handlers,
        }
    }

    fn target<'a>(&'a self, listener: Listener, subject: &'a Element) -> &'a EventTarget {
        match listener.scope() {
            ListenerScope::Subject => subject,
            ListenerScope::Global => &self.window,
        }
    }
}

impl DragHost for WebHost {
    type Element = Element;

    fn resolve(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn computed_offset(&self, element: &Element) -> ComputedOffset {
        let Ok(Some(style)) = self.window.get_computed_style(element) else {
            return ComputedOffset::default();
        };
        ComputedOffset::new(
            style.get_property_value("left").unwrap_or_default(),
            style.get_property_value("top").unwrap_or_default(),
        )
    }

    fn is_image(&self, element: &Element) -> bool {
        element.tag_name() == "IMG"
    }

    fn set_offset(&mut self, element: &Element, axis: Axis, px: f64) {
        let Some(element) = element.dyn_ref::<HtmlElement>() else {
            self.debug_write("[dragkit] subject has no inline style; position not written");
            return;
        };
        if let Err(e) = element
            .style()
            .set_property(axis.css_property(), &format!("{}px", px))
        {
            self.debug_write(&format!("[dragkit] failed to set {}: {:?}", axis.css_property(), e));
        }
    }

    fn attach(&mut self, listener: Listener, subject: &Element) {
        // Touch handlers call preventDefault, which passive listeners ignore
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        let result = self
            .target(listener, subject)
            .add_event_listener_with_callback_and_add_event_listener_options(
                listener.event_name(),
                self.handlers.function(listener),
                &options,
            );
        if let Err(e) = result {
            self.debug_write(&format!("[dragkit] add {} failed: {:?}", listener.event_name(), e));
        }
    }

    fn detach(&mut self, listener: Listener, subject: &Element) {
        let result = self
            .target(listener, subject)
            .remove_event_listener_with_callback(listener.event_name(), self.handlers.function(listener));
        if let Err(e) = result {
            self.debug_write(&format!("[dragkit] remove {} failed: {:?}", listener.event_name(), e));
        }
    }

    fn debug_write(&self, msg: &str) {
        crate::log(msg);
    }
}
