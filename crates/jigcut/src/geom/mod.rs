//! 2D geometry kernel for cut generation.
//!
//! Purpose
//! - Value types (`Point`, `Polygon`, `Bounds`, `CutLine`, `CutKind`).
//! - Pure predicates and reductions (`kernel`): intersections, distance proxies,
//!   bounds and centroids.
//! - Randomized primitive line generators (`lines`), each extended past the
//!   bounding box so the produced segment straddles the shape.
//!
//! Conventions
//! - Polygons are implicitly closed vertex rings; winding is preserved by every
//!   operation that returns polygons.
//! - Intersection parameters are accepted on the closed interval `[0, 1]`.

pub(crate) mod cfg;
pub mod kernel;
pub mod lines;
mod types;

pub use kernel::{
    bounds, centroid_of_bounds, intersection_count_with_polygon, is_point_near_segment,
    polygon_area, segment_intersection, too_close, vertex_centroid,
};
pub use lines::{center_crossing_line, diagonal_line, forced_line, straight_line};
pub use types::{Bounds, CutKind, CutLine, Point, Polygon};
