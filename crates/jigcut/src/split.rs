//! Recursive polygon partition along an ordered list of cut lines.
//!
//! Model
//! - Keep a fragment list seeded with the shape; each cut replaces every
//!   fragment it bisects by its two children, in place.
//! - A fragment is bisected only when the cut crosses its boundary at exactly
//!   two distinct points. Crossings through a vertex are reported by both
//!   incident edges and are merged first.
//! - Children keep the parent's winding: vertices are copied in order and the
//!   two crossing points are inserted at their edge positions.
//! - Splits that leave a child with fewer than 3 distinct vertices or with
//!   (near) zero area are rejected and the fragment is kept whole.
//!
//! Notes
//! - Children are never re-examined against the cut that produced them: each
//!   child carries the chord on that cut as an edge, so a second bisection
//!   cannot succeed.
//! - `split_fragment` takes the re-attempt depth explicitly; a fragment handed
//!   in deeper than `max_split_depth` is returned unsplit. The splitter itself
//!   always enters at depth 0, so the cap only bounds external re-entry.

use crate::cut::CutCfg;
use crate::geom::cfg::{MIN_CHILD_AREA, POINT_EPS};
use crate::geom::{polygon_area, segment_intersection, CutLine, Point, Polygon};

/// Split `shape` by every cut, in order, with the default configuration.
pub fn split_polygon(shape: &[Point], cuts: &[CutLine]) -> Vec<Polygon> {
    split_polygon_with_cfg(shape, cuts, &CutCfg::default())
}

/// Split `shape` by every cut, in order. Fragments with < 3 vertices are dropped.
///
/// Fragments are processed from an explicit worklist of `(fragment, next cut)`
/// pairs; output order follows the ring order of each bisection.
pub fn split_polygon_with_cfg(shape: &[Point], cuts: &[CutLine], cfg: &CutCfg) -> Vec<Polygon> {
    let mut out = Vec::new();
    let mut work: Vec<(Polygon, usize)> = vec![(shape.to_vec(), 0)];
    while let Some((fragment, k)) = work.pop() {
        let Some(cut) = cuts.get(k) else {
            if fragment.len() >= 3 {
                out.push(fragment);
            }
            continue;
        };
        // Reversed so the first child is popped first.
        for child in split_fragment(&fragment, cut, 0, cfg.max_split_depth)
            .into_iter()
            .rev()
        {
            work.push((child, k + 1));
        }
    }
    out
}

/// Split one fragment by `cut` at re-attempt `depth`.
///
/// Returns the two children on a clean bisection, otherwise `[fragment]`
/// (fewer or more than two distinct crossings, a degenerate child, or
/// `depth > max_depth`).
pub fn split_fragment(
    fragment: &[Point],
    cut: &CutLine,
    depth: usize,
    max_depth: usize,
) -> Vec<Polygon> {
    if depth > max_depth {
        return vec![fragment.to_vec()];
    }
    match bisect(fragment, cut) {
        Some((first, second)) => vec![first, second],
        None => vec![fragment.to_vec()],
    }
}

/// Distinct `(edge index, point)` crossings of `cut` with the fragment boundary.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping). A crossing that
/// coincides with an earlier one is attributed to the earlier edge only.
pub fn edge_crossings(fragment: &[Point], cut: &CutLine) -> Vec<(usize, Point)> {
    let n = fragment.len();
    let mut hits: Vec<(usize, Point)> = Vec::with_capacity(4);
    for i in 0..n {
        let p = fragment[i];
        let q = fragment[(i + 1) % n];
        if let Some(x) = segment_intersection(cut.a, cut.b, p, q) {
            if hits.iter().all(|(_, h)| (h - x).norm() > POINT_EPS) {
                hits.push((i, x));
            }
        }
    }
    hits
}

fn bisect(poly: &[Point], cut: &CutLine) -> Option<(Polygon, Polygon)> {
    let hits = edge_crossings(poly, cut);
    if hits.len() != 2 {
        return None;
    }
    // Edges are scanned in order, so i < j.
    let (i, p1) = hits[0];
    let (j, p2) = hits[1];

    let mut first: Polygon = Vec::with_capacity(poly.len() + 2);
    first.extend_from_slice(&poly[..=i]);
    first.push(p1);
    first.push(p2);
    first.extend_from_slice(&poly[j + 1..]);

    let mut second: Polygon = Vec::with_capacity(j - i + 2);
    second.push(p1);
    second.extend_from_slice(&poly[i + 1..=j]);
    second.push(p2);

    let first = dedup_ring(first);
    let second = dedup_ring(second);
    if !is_proper(&first) || !is_proper(&second) {
        return None;
    }
    Some((first, second))
}

/// Drop consecutive coincident vertices (closing pair included).
fn dedup_ring(mut ring: Polygon) -> Polygon {
    ring.dedup_by(|a, b| (*a - *b).norm() <= POINT_EPS);
    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if (first - last).norm() <= POINT_EPS {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}

#[inline]
fn is_proper(ring: &[Point]) -> bool {
    ring.len() >= 3 && polygon_area(ring) > MIN_CHILD_AREA
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{bounds, CutKind};
    use nalgebra::vector;

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![100.0, 0.0],
            vector![100.0, 100.0],
            vector![0.0, 100.0],
        ]
    }

    fn line(a: (f64, f64), b: (f64, f64)) -> CutLine {
        CutLine::new(vector![a.0, a.1], vector![b.0, b.1], CutKind::Diagonal)
    }

    fn total_area(polys: &[Polygon]) -> f64 {
        polys.iter().map(|p| polygon_area(p)).sum()
    }

    #[test]
    fn vertical_cut_halves_square() {
        let cut = line((50.0, -10.0), (50.0, 110.0));
        let parts = split_polygon(&square(), &[cut]);
        assert_eq!(parts.len(), 2);
        for p in &parts {
            assert_eq!(p.len(), 4);
            assert!((polygon_area(p) - 5000.0).abs() < 1e-9);
        }
        // Parent order is preserved: first child starts at the parent's first vertex.
        assert_eq!(parts[0][0], vector![0.0, 0.0]);
        assert!((parts[0][1] - vector![50.0, 0.0]).norm() < 1e-9);
    }

    #[test]
    fn corner_to_corner_cut_yields_two_triangles() {
        let cut = line((-10.0, -10.0), (110.0, 110.0));
        let parts = split_polygon(&square(), &[cut]);
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| p.len() == 3));
        assert!((total_area(&parts) - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn near_miss_leaves_fragment_unchanged() {
        // Ends inside the square: one crossing only.
        let stub = line((50.0, -10.0), (50.0, 40.0));
        assert_eq!(split_fragment(&square(), &stub, 0, 3), vec![square()]);
        // Misses entirely.
        let outside = line((120.0, -10.0), (120.0, 110.0));
        assert_eq!(split_fragment(&square(), &outside, 0, 3), vec![square()]);
    }

    #[test]
    fn tangent_at_vertex_is_not_a_split() {
        // Touches the square only at (100, 100); both edges report that vertex.
        let touch = line((50.0, 150.0), (150.0, 50.0));
        let raw = (0..4)
            .filter(|&i| {
                let sq = square();
                segment_intersection(touch.a, touch.b, sq[i], sq[(i + 1) % 4]).is_some()
            })
            .count();
        assert_eq!(raw, 2);
        assert_eq!(edge_crossings(&square(), &touch).len(), 1);
        assert_eq!(split_fragment(&square(), &touch, 0, 3), vec![square()]);
    }

    #[test]
    fn cut_along_an_edge_is_not_a_split() {
        let along = line((50.0, 0.0), (50.0, 100.0));
        let halves = split_polygon(&square(), &[along]);
        assert_eq!(halves.len(), 2);
        // Re-applying the same cut finds the shared edge and leaves both halves alone.
        let again = split_polygon(&square(), &[along, along]);
        assert_eq!(again, halves);
    }

    #[test]
    fn concave_fragment_with_four_crossings_is_kept() {
        // U shape: a horizontal line through both arms crosses four edges.
        let u = vec![
            vector![0.0, 0.0],
            vector![90.0, 0.0],
            vector![90.0, 90.0],
            vector![60.0, 90.0],
            vector![60.0, 30.0],
            vector![30.0, 30.0],
            vector![30.0, 90.0],
            vector![0.0, 90.0],
        ];
        let cut = line((-10.0, 60.0), (100.0, 60.0));
        assert_eq!(edge_crossings(&u, &cut).len(), 4);
        assert_eq!(split_fragment(&u, &cut, 0, 3), vec![u.clone()]);
    }

    #[test]
    fn depth_cap_returns_fragment_unsplit() {
        let cut = line((50.0, -10.0), (50.0, 110.0));
        assert_eq!(split_fragment(&square(), &cut, 0, 0).len(), 2);
        assert_eq!(split_fragment(&square(), &cut, 3, 3).len(), 2);
        assert_eq!(split_fragment(&square(), &cut, 4, 3), vec![square()]);
    }

    #[test]
    fn children_are_final_for_their_cut() {
        let cuts = [
            line((50.0, -10.0), (50.0, 110.0)),
            line((-10.0, 20.0), (110.0, 90.0)),
        ];
        for cut in &cuts {
            for child in split_fragment(&square(), cut, 0, 3) {
                assert_eq!(split_fragment(&child, cut, 1, 3), vec![child.clone()]);
            }
        }
    }

    #[test]
    fn crossing_cuts_conserve_area_and_bounds() {
        let cuts = [
            line((50.0, -10.0), (50.0, 110.0)),
            line((-10.0, 30.0), (110.0, 70.0)),
            line((-10.0, 80.0), (110.0, 10.0)),
        ];
        let parts = split_polygon(&square(), &cuts);
        assert_eq!(parts.len(), 7);
        assert!((total_area(&parts) - 10_000.0).abs() < 1e-6);
        let outer = bounds(&square()).expanded(1e-9);
        for p in &parts {
            assert!(p.len() >= 3);
            assert!(outer.contains_bounds(&bounds(p)));
        }
    }
}
