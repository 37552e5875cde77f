//! Tolerance defaults for the 2D cutting kernel (internal).
//!
//! Policy
//! - Defaults are fixed constants; the controller-level knobs live in
//!   `cut::CutCfg`. Values are tuned for pixel-scale shapes (tens to
//!   thousands of units across).

/// Slack added to the triangle-inequality test in `is_point_near_segment`.
pub(crate) const NEAR_SEGMENT_BUFFER: f64 = 0.1;
/// Distance by which axis-aligned random cuts overhang the bounding box.
pub(crate) const STRAIGHT_OVERHANG: f64 = 50.0;
/// Two intersection points closer than this are the same point.
pub(crate) const POINT_EPS: f64 = 1e-9;
/// Children of a split with smaller area are treated as degenerate slivers.
pub(crate) const MIN_CHILD_AREA: f64 = 1e-9;
/// Shapes narrower or shorter than this have no usable centroid line.
pub(crate) const MIN_EXTENT: f64 = 1e-6;
/// Angles probed by `forced_line` in diagonal mode (evenly over `[0, π)`).
pub(crate) const FORCED_ANGLE_STEPS: usize = 8;
