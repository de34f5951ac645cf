//! Geometry types shared by the controller and its hosts

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::{Axis, Vec2};
