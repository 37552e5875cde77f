//! Primitive cut-line generators.
//!
//! Model
//! - Every generator extends its segment well past the bounding box so the
//!   result reliably enters and leaves the shape.
//! - Randomness comes from the caller's `Rng`; nothing here reads global state.

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::Rng;

use super::cfg::{FORCED_ANGLE_STEPS, MIN_EXTENT, STRAIGHT_OVERHANG};
use super::kernel::{bounds, intersection_count_with_polygon, too_close, vertex_centroid};
use super::types::{Bounds, CutKind, CutLine, Point};

/// Vertical segment at `x`, spanning `[y0, y1]`.
#[inline]
fn vertical(x: f64, y0: f64, y1: f64) -> CutLine {
    CutLine::new(Vector2::new(x, y0), Vector2::new(x, y1), CutKind::Straight)
}

/// Horizontal segment at `y`, spanning `[x0, x1]`.
#[inline]
fn horizontal(y: f64, x0: f64, x1: f64) -> CutLine {
    CutLine::new(Vector2::new(x0, y), Vector2::new(x1, y), CutKind::Straight)
}

/// Axis-aligned line at a random offset, overhanging the box by 50 units on both ends.
pub fn straight_line<R: Rng + ?Sized>(b: &Bounds, rng: &mut R) -> CutLine {
    if rng.gen::<f64>() < 0.5 {
        let x = b.min_x + rng.gen::<f64>() * b.width();
        vertical(x, b.min_y - STRAIGHT_OVERHANG, b.max_y + STRAIGHT_OVERHANG)
    } else {
        let y = b.min_y + rng.gen::<f64>() * b.height();
        horizontal(y, b.min_x - STRAIGHT_OVERHANG, b.max_x + STRAIGHT_OVERHANG)
    }
}

/// Random-angle line through the box midpoint with half-length `0.8 × max(w, h)`.
pub fn diagonal_line<R: Rng + ?Sized>(b: &Bounds, rng: &mut R) -> CutLine {
    let angle = rng.gen::<f64>() * PI;
    CutLine::through(b.center(), angle, 0.8 * b.max_dim(), CutKind::Diagonal)
}

/// Line anchored exactly at the bounding-box midpoint.
///
/// Straight output (when `force_straight` or `kind == Straight`) overhangs by a
/// random 10–20% of the spanned dimension; diagonal output has total length
/// `1.2 × diagonal`.
pub fn center_crossing_line<R: Rng + ?Sized>(
    shape: &[Point],
    force_straight: bool,
    kind: CutKind,
    rng: &mut R,
) -> CutLine {
    let b = bounds(shape);
    let c = b.center();
    if force_straight || kind == CutKind::Straight {
        let frac = 0.1 + 0.1 * rng.gen::<f64>();
        if rng.gen::<f64>() < 0.5 {
            let ext = b.height() * frac;
            vertical(c.x, b.min_y - ext, b.max_y + ext)
        } else {
            let ext = b.width() * frac;
            horizontal(c.y, b.min_x - ext, b.max_x + ext)
        }
    } else {
        let angle = rng.gen::<f64>() * PI;
        CutLine::through(c, angle, 0.6 * b.diagonal(), kind)
    }
}

/// Axis-aligned line through `c`, overhanging by 20% of the spanned dimension.
fn centroid_straight<R: Rng + ?Sized>(b: &Bounds, c: Point, rng: &mut R) -> CutLine {
    if rng.gen::<f64>() < 0.5 {
        let ext = 0.2 * b.height();
        vertical(c.x, b.min_y - ext, b.max_y + ext)
    } else {
        let ext = 0.2 * b.width();
        horizontal(c.y, b.min_x - ext, b.max_x + ext)
    }
}

/// Last-resort generator anchored at the vertex-average centroid.
///
/// Returns `None` for degenerate shapes (non-finite or near-zero width/height,
/// non-finite centroid). Diagonal mode probes 8 evenly spaced angles and takes
/// the first line that crosses the polygon twice without crowding an existing
/// cut; if none qualifies it falls back to the straight case.
pub fn forced_line<R: Rng + ?Sized>(
    shape: &[Point],
    existing: &[CutLine],
    kind: CutKind,
    min_distance: f64,
    rng: &mut R,
) -> Option<CutLine> {
    let b = bounds(shape);
    let (w, h) = (b.width(), b.height());
    if !(w.is_finite() && h.is_finite()) || w <= MIN_EXTENT || h <= MIN_EXTENT {
        return None;
    }
    let c = vertex_centroid(shape)?;
    if !(c.x.is_finite() && c.y.is_finite()) {
        return None;
    }
    if kind == CutKind::Diagonal {
        let half_len = 0.75 * b.diagonal();
        for k in 0..FORCED_ANGLE_STEPS {
            let angle = k as f64 * PI / FORCED_ANGLE_STEPS as f64;
            let line = CutLine::through(c, angle, half_len, CutKind::Diagonal);
            if intersection_count_with_polygon(&line, shape) >= 2
                && !existing.iter().any(|e| too_close(&line, e, min_distance))
            {
                return Some(line);
            }
        }
    }
    Some(centroid_straight(&b, c, rng))
}
