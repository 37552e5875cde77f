//! Accept/reject policy for candidate cuts.
//!
//! - Full check: the cut enters and exits the shape, does not crowd an accepted
//!   cut, and (unless relaxed) passes near the bounding-box midpoint.
//! - Basic check: at least one edge crossing. Used once two cuts are accepted so
//!   intersecting patterns from the denser strategies are not rejected.

use crate::geom::{
    bounds, centroid_of_bounds, intersection_count_with_polygon, is_point_near_segment,
    too_close, CutLine, Point,
};

use super::cfg::CutCfg;

/// Full validation of `candidate` against `shape` and the accepted cuts.
pub fn is_valid(
    candidate: &CutLine,
    shape: &[Point],
    existing: &[CutLine],
    relaxed: bool,
    cfg: &CutCfg,
) -> bool {
    if intersection_count_with_polygon(candidate, shape) < 2 {
        return false;
    }
    if existing
        .iter()
        .any(|e| too_close(candidate, e, cfg.min_cut_distance))
    {
        return false;
    }
    if relaxed {
        return true;
    }
    let anchor = centroid_of_bounds(&bounds(shape));
    is_point_near_segment(anchor, candidate, cfg.center_threshold)
}

/// Cheap check: the cut touches at least one polygon edge.
#[inline]
pub fn is_valid_basic(candidate: &CutLine, shape: &[Point]) -> bool {
    intersection_count_with_polygon(candidate, shape) >= 1
}
