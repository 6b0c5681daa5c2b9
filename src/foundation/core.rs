pub use kurbo::{BezPath, CubicBez, Point, QuadBez, Rect};

/// Offsets closer than this to 0 or 1 count as an exact keyframe hit (2^-52).
pub const OFFSET_EPSILON: f64 = f64::EPSILON;

pub(crate) fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < OFFSET_EPSILON
}

/// Number of six-value curve groups in a flat point list.
pub(crate) fn group_count(len: usize) -> usize {
    len.saturating_sub(2) / 6
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
