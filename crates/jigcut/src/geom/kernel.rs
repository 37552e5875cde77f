//! Pure geometric predicates and reductions used by validation and splitting.
//!
//! - `bounds`, `polygon_area`, `vertex_centroid`: reductions over a vertex ring.
//! - `segment_intersection`: parametric 2×2 solve, `None` when parallel or off-segment.
//! - `is_point_near_segment`, `too_close`: cheap distance proxies used by the validator.
//! - `intersection_count_with_polygon`: edge crossings of a cut (wrap-around included).

use nalgebra::Vector2;

use super::cfg::NEAR_SEGMENT_BUFFER;
use super::types::{Bounds, CutLine, Point};

/// Min/max reduction; the empty set yields `Bounds::ZERO`.
pub fn bounds(points: &[Point]) -> Bounds {
    let Some(first) = points.first() else {
        return Bounds::ZERO;
    };
    points.iter().skip(1).fold(
        Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        },
        |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        },
    )
}

/// Midpoint of the bounding box, used as the "through the middle" anchor.
#[inline]
pub fn centroid_of_bounds(b: &Bounds) -> Point {
    b.center()
}

/// Vertex-average centroid; `None` for an empty ring.
pub fn vertex_centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Absolute shoelace area of an implicitly closed ring.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    (twice * 0.5).abs()
}

/// Intersection of segments `p1–p2` and `p3–p4`.
///
/// Returns `None` when the determinant is exactly zero (parallel or collinear)
/// or when either parameter falls outside `[0, 1]`.
pub fn segment_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let den = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if den == 0.0 {
        return None;
    }
    let ua = ((p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x)) / den;
    let ub = ((p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x)) / den;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some(p1 + (p2 - p1) * ua)
}

/// Triangle-inequality test: `|p-a| + |p-b| <= |a-b| + threshold` (plus a 0.1 buffer).
pub fn is_point_near_segment(point: Point, line: &CutLine, threshold: f64) -> bool {
    let d1 = (point - line.a).norm();
    let d2 = (point - line.b).norm();
    d1 + d2 <= line.length() + threshold + NEAR_SEGMENT_BUFFER
}

/// Number of polygon edges (closing edge included) that the cut crosses.
pub fn intersection_count_with_polygon(line: &CutLine, polygon: &[Point]) -> usize {
    let n = polygon.len();
    if n < 2 {
        return 0;
    }
    (0..n)
        .filter(|&i| {
            segment_intersection(line.a, line.b, polygon[i], polygon[(i + 1) % n]).is_some()
        })
        .count()
}

/// Endpoint-distance proxy for "nearly coincident" cuts.
///
/// True when any endpoint of `a` lies within `min_distance` of an endpoint of `b`.
pub fn too_close(a: &CutLine, b: &CutLine, min_distance: f64) -> bool {
    let pairs = [(a.a, b.a), (a.a, b.b), (a.b, b.a), (a.b, b.b)];
    let closest = pairs
        .iter()
        .map(|(p, q)| (p - q).norm())
        .fold(f64::INFINITY, f64::min);
    closest < min_distance
}
