//! Per-instance native event closures

use std::cell::RefCell;
use std::rc::Weak;

use dragkit_core::{Draggable as Controller, Listener};
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::event::normalize;
use crate::host::WebHost;

/// Shared controller type the closures call back into
pub(crate) type SharedController = RefCell<Controller<WebHost>>;

/// One closure per [`Listener`], owned by a single controller
///
/// Closures must be stored to prevent garbage collection, and keeping the
/// exact same function objects is what lets `removeEventListener` find them.
pub(crate) struct Handlers {
    closures: [Closure<dyn FnMut(Event)>; 6],
}

impl Handlers {
    /// Build handlers that dispatch into the controller behind `controller`
    ///
    /// The back-reference is weak so the controller can be dropped while
    /// its host still owns these closures.
    pub(crate) fn new(controller: &Weak<SharedController>) -> Self {
        Self {
            closures: Listener::ALL.map(|listener| handler(listener, controller.clone())),
        }
    }

    /// JS function registered for `listener`
    pub(crate) fn function(&self, listener: Listener) -> &js_sys::Function {
        self.closures[listener as usize].as_ref().unchecked_ref()
    }
}

fn handler(listener: Listener, controller: Weak<SharedController>) -> Closure<dyn FnMut(Event)> {
    Closure::wrap(Box::new(move |event: Event| {
        let Some(shared) = controller.upgrade() else {
            return;
        };
        let Ok(mut drag) = shared.try_borrow_mut() else {
            crate::log(&format!("[dragkit] {} dropped: controller busy", listener.event_name()));
            return;
        };
        let Some(input) = normalize(listener, &event) else {
            return;
        };
        if drag.handle(input).prevents_default() {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(Event)>)
}
