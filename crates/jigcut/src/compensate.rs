//! Extra cuts when a split under-produces pieces.
//!
//! Model
//! - Deficient means fewer pieces than accepted cuts.
//! - Each round appends up to `compensation_lines_per_round` centroid-anchored
//!   lines and re-splits the original shape with the grown cut list.
//! - The result with the most pieces across rounds wins; a round never makes
//!   the kept result smaller.

use std::f64::consts::PI;

use nalgebra::Vector2;
use rand::Rng;

use crate::cut::CutCfg;
use crate::geom::{bounds, vertex_centroid, CutKind, CutLine, Point, Polygon};
use crate::split::split_polygon_with_cfg;

/// Anchor jitter as a fraction of the box side, so repeated lines differ.
const ANCHOR_JITTER_FRAC: f64 = 0.25;

/// Pieces and the cut list that produced them.
#[derive(Clone, Debug)]
pub struct Compensated {
    pub cuts: Vec<CutLine>,
    pub pieces: Vec<Polygon>,
    /// Rounds actually run.
    pub rounds: usize,
}

/// True when `pieces` is short relative to `cuts`.
#[inline]
pub fn is_deficient(pieces: usize, cuts: usize) -> bool {
    pieces < cuts
}

/// Centroid-anchored line with a random angle (axis-aligned in straight mode),
/// total length `1.5 × diagonal`. `None` for degenerate shapes.
pub fn compensation_line<R: Rng + ?Sized>(
    shape: &[Point],
    kind: CutKind,
    rng: &mut R,
) -> Option<CutLine> {
    let b = bounds(shape);
    let (w, h) = (b.width(), b.height());
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return None;
    }
    let c = vertex_centroid(shape)?;
    if !(c.x.is_finite() && c.y.is_finite()) {
        return None;
    }
    let jitter = Vector2::new(
        rng.gen_range(-ANCHOR_JITTER_FRAC..=ANCHOR_JITTER_FRAC) * w,
        rng.gen_range(-ANCHOR_JITTER_FRAC..=ANCHOR_JITTER_FRAC) * h,
    );
    let anchor = c + jitter;
    let half_len = 0.75 * b.diagonal();
    let line = match kind {
        CutKind::Straight => {
            let d = if rng.gen::<f64>() < 0.5 {
                Vector2::new(half_len, 0.0)
            } else {
                Vector2::new(0.0, half_len)
            };
            CutLine::new(anchor - d, anchor + d, kind)
        }
        CutKind::Diagonal => CutLine::through(anchor, rng.gen::<f64>() * PI, half_len, kind),
    };
    Some(line)
}

/// Run compensation rounds over an initial split.
pub fn compensate<R: Rng + ?Sized>(
    shape: &[Point],
    cuts: Vec<CutLine>,
    pieces: Vec<Polygon>,
    kind: CutKind,
    target_cut_count: usize,
    cfg: &CutCfg,
    rng: &mut R,
) -> Compensated {
    let accepted = cuts.len();
    let max_rounds = cfg.compensation_rounds(target_cut_count);
    let mut best = Compensated {
        cuts: cuts.clone(),
        pieces,
        rounds: 0,
    };
    let mut grown = cuts;
    let mut rounds = 0;
    while rounds < max_rounds && is_deficient(best.pieces.len(), accepted) {
        rounds += 1;
        let deficit = accepted - best.pieces.len();
        let wanted = deficit.clamp(1, cfg.compensation_lines_per_round.max(1));
        let before = grown.len();
        for _ in 0..wanted {
            if let Some(line) = compensation_line(shape, kind, rng) {
                grown.push(line);
            }
        }
        if grown.len() == before {
            tracing::debug!(rounds, "compensation produced no lines; giving up");
            break;
        }
        let pieces = split_polygon_with_cfg(shape, &grown, cfg);
        tracing::debug!(
            round = rounds,
            pieces = pieces.len(),
            best = best.pieces.len(),
            cuts = grown.len(),
            "compensation round"
        );
        if pieces.len() > best.pieces.len() {
            best.pieces = pieces;
            best.cuts = grown.clone();
        }
    }
    best.rounds = rounds;
    best
}
