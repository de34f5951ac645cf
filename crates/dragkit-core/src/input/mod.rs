//! Input module
//!
//! Normalized event model, listener bookkeeping, and handler results.

mod event;
mod listener;
mod result;

pub use event::{InputEvent, InputKind, InputSource};
pub use listener::{Listener, ListenerScope, ListenerTable};
pub use result::InputResult;
