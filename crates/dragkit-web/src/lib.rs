//! Browser bindings for dragkit
//!
//! Exposes a `Draggable` class to JavaScript that makes a DOM element follow
//! mouse and touch input, optionally kept inside a cage element:
//!
//! ```js
//! import init, { Draggable } from "dragkit_web";
//!
//! await init();
//! const drag = new Draggable("card", "table");
//! drag.setCage(null);
//! drag.deactivate();
//! drag.reactivate();
//! drag.free();
//! ```
//!
//! ## Module Structure
//!
//! - `host` - `WebHost`, the `DragHost` implementation over `web-sys`
//! - `handlers` - Per-instance native event closures
//! - `event` - Native event to `InputEvent` normalization
//! - `draggable` - The `wasm_bindgen` export

use wasm_bindgen::prelude::*;

mod draggable;
mod event;
mod handlers;
mod host;

pub use draggable::Draggable;
pub use host::WebHost;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub(crate) fn log(s: &str);
}

/// Module initialization: route Rust panics to the browser console
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
