//! Subject positioning and cage clamping
//!
//! Positions are computed in viewport coordinates and then shifted into the
//! subject's own positioning coordinates by a translation measured on every
//! move: `t = computed style offset - bounding rect edge`.

use serde::Serialize;

use crate::host::ComputedOffset;
use crate::math::{Axis, Rect, Vec2};

/// Style offsets to write after a move
///
/// `None` leaves that axis untouched for this move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Placement {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl Placement {
    /// Value for an axis
    pub fn along(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// Parse a CSS length the way `parseInt` does
///
/// Leading whitespace and an optional sign are accepted, then as many
/// decimal digits as follow; anything after them (a fraction, a unit) is
/// ignored. Returns `None` when no digit is present, e.g. for `"auto"`.
pub fn parse_css_px(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut n = 0.0_f64;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        n = n * 10.0 + f64::from(b - b'0');
        seen = true;
    }

    if !seen {
        return None;
    }
    Some(if negative { -n } else { n })
}

/// New style offset along one axis
///
/// # Arguments
/// * `pointer` - Pointer coordinate
/// * `grab` - Grab offset from the subject's near edge
/// * `extent` - Subject width or height
/// * `cage` - Cage `(near, far)` edges, if constrained
/// * `translation` - Viewport-to-style shift for this axis
///
/// # Returns
/// * `Some(offset)` - Style offset to write
/// * `None` - Pointer fell in the dead zone between the border checks and
///   the free band; leave the axis as it is
pub fn place_axis(
    pointer: f64,
    grab: f64,
    extent: f64,
    cage: Option<(f64, f64)>,
    translation: f64,
) -> Option<f64> {
    let Some((near, far)) = cage else {
        return Some(pointer + translation - grab);
    };

    if pointer - grab < near {
        Some(near + translation)
    } else if pointer + extent - grab > far {
        Some(far - extent + translation)
    } else if pointer >= near + grab && pointer <= far - (extent - grab) {
        Some(pointer - grab + translation)
    } else {
        None
    }
}

/// Compute where the subject goes for a pointer position
///
/// Each axis is decided independently. An axis whose computed style does
/// not parse gets no update.
pub fn compute_placement(
    pointer: Vec2,
    grab: Vec2,
    subject: Rect,
    style: &ComputedOffset,
    cage: Option<Rect>,
) -> Placement {
    let place = |axis: Axis| {
        let translation = parse_css_px(style.along(axis))? - subject.start(axis);
        place_axis(
            pointer.along(axis),
            grab.along(axis),
            subject.extent(axis),
            cage.map(|c| (c.start(axis), c.end(axis))),
            translation,
        )
    };

    Placement {
        left: place(Axis::Horizontal),
        top: place(Axis::Vertical),
    }
}
