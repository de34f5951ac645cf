//! Drag controller core for dragkit
//!
//! This crate makes a single element follow mouse or touch input, optionally
//! kept inside a containment rectangle (the "cage"):
//! - Drag session state machine (idle / dragging)
//! - Grab-offset tracking so the grabbed point stays under the pointer
//! - Per-axis clamping against the cage
//! - Listener bookkeeping so a controller only ever removes its own handlers
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Axis`)
//! - [`input`]: Normalized events, listener identities, handler results
//! - [`host`]: The [`DragHost`] trait the presentation layer implements
//! - [`clamp`]: Pure positioning and clamping functions
//! - [`Draggable`]: The controller
//!
//! ## Example
//!
//! ```ignore
//! use dragkit_core::{Draggable, InputEvent};
//!
//! let mut drag = Draggable::from_ids(host, "card", Some("table"))?;
//! drag.handle(InputEvent::mouse_down(110.0, 55.0));
//! drag.handle(InputEvent::mouse_move(130.0, 60.0));
//! drag.handle(InputEvent::mouse_up());
//! ```
//!
//! The core has no browser dependency; `dragkit-web` binds it to the DOM and
//! `dragkit-host-mock` runs it in tests.

pub mod clamp;
pub mod host;
pub mod input;
pub mod math;

mod config;
mod draggable;
mod error;

pub use clamp::{compute_placement, parse_css_px, place_axis, Placement};
pub use config::DragConfig;
pub use draggable::{DragState, Draggable};
pub use error::DragError;
pub use host::{ComputedOffset, DragHost};
pub use input::{InputEvent, InputKind, InputResult, InputSource, Listener, ListenerScope, ListenerTable};
pub use math::{Axis, Rect, Vec2};
