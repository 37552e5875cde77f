//! Cut proposal strategies, selected by difficulty.
//!
//! - `Simple` (≤3): every cut crosses the middle of the shape.
//! - `Medium` (4..=6): usually crosses a random accepted cut near its midpoint.
//! - `Hard` (≥7): always aims near the averaged midpoint of up to three
//!   accepted cuts, roughly perpendicular to their mean direction. The anchor
//!   is shifted across the new line so successive cuts do not share a point.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use nalgebra::Vector2;
use rand::seq::index::sample;
use rand::Rng;

use crate::geom::{
    center_crossing_line, diagonal_line, straight_line, Bounds, CutKind, CutLine, Point,
};

/// Chance that `Medium` aims at an existing cut once one exists.
const MEDIUM_INTERSECT_PROB: f64 = 0.7;
/// Anchor jitter (per axis) around the targeted cut's midpoint.
const MEDIUM_JITTER: f64 = 40.0;
/// Half-length of `Medium` intersecting lines, relative to the larger box side.
const MEDIUM_EXTENT: f64 = 0.75;
/// Cuts averaged by `Hard` per proposal.
const HARD_SAMPLE: usize = 3;
/// Chance that `Hard` ignores the orientation bias in straight mode.
const HARD_UNBIASED_PROB: f64 = 0.2;
/// Half-width of the angular spread around the perpendicular (15°).
const HARD_SPREAD: f64 = PI / 12.0;
/// Anchor offset (fraction of the spanned side) applied across `Hard` lines.
const HARD_OFFSET_FRAC: f64 = 0.15;
/// Half-length of `Hard` lines, relative to the larger box side.
const HARD_EXTENT: f64 = 1.2;

/// Difficulty-tiered proposal strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Simple,
    Medium,
    Hard,
}

impl Strategy {
    /// `≤3 → Simple`, `4..=6 → Medium`, `≥7 → Hard`.
    pub fn for_difficulty(difficulty: u8) -> Self {
        match difficulty {
            0..=3 => Strategy::Simple,
            4..=6 => Strategy::Medium,
            _ => Strategy::Hard,
        }
    }

    /// Propose one candidate cut. `None` when the bounds are degenerate.
    pub fn propose_cut<R: Rng + ?Sized>(
        &self,
        b: &Bounds,
        existing: &[CutLine],
        shape: &[Point],
        kind: CutKind,
        rng: &mut R,
    ) -> Option<CutLine> {
        let dim = b.max_dim();
        if !(dim.is_finite() && dim > 0.0) {
            return None;
        }
        let line = match self {
            Strategy::Simple => center_crossing_line(shape, false, kind, rng),
            Strategy::Medium => {
                if !existing.is_empty() && rng.gen::<f64>() < MEDIUM_INTERSECT_PROB {
                    medium_crossing(b, existing, kind, rng)
                } else {
                    random_line(b, kind, rng)
                }
            }
            Strategy::Hard => {
                if existing.is_empty() {
                    random_line(b, kind, rng)
                } else {
                    hard_crossing(b, existing, kind, rng)
                }
            }
        };
        Some(line)
    }
}

fn random_line<R: Rng + ?Sized>(b: &Bounds, kind: CutKind, rng: &mut R) -> CutLine {
    match kind {
        CutKind::Straight => straight_line(b, rng),
        CutKind::Diagonal => diagonal_line(b, rng),
    }
}

/// Axis-aligned segment centred on `anchor`.
fn axis_line(anchor: Point, vertical: bool, half_len: f64) -> CutLine {
    let d = if vertical {
        Vector2::new(0.0, half_len)
    } else {
        Vector2::new(half_len, 0.0)
    };
    CutLine::new(anchor - d, anchor + d, CutKind::Straight)
}

fn medium_crossing<R: Rng + ?Sized>(
    b: &Bounds,
    existing: &[CutLine],
    kind: CutKind,
    rng: &mut R,
) -> CutLine {
    let target = existing[rng.gen_range(0..existing.len())];
    let jitter = Vector2::new(
        rng.gen_range(-MEDIUM_JITTER..=MEDIUM_JITTER),
        rng.gen_range(-MEDIUM_JITTER..=MEDIUM_JITTER),
    );
    let anchor = target.midpoint() + jitter;
    let half_len = MEDIUM_EXTENT * b.max_dim();
    match kind {
        CutKind::Straight => axis_line(anchor, !target.is_vertical(), half_len),
        CutKind::Diagonal => {
            let offset = rng.gen_range(FRAC_PI_4..=3.0 * FRAC_PI_4);
            CutLine::through(anchor, target.angle() + offset, half_len, CutKind::Diagonal)
        }
    }
}

fn hard_crossing<R: Rng + ?Sized>(
    b: &Bounds,
    existing: &[CutLine],
    kind: CutKind,
    rng: &mut R,
) -> CutLine {
    let picked = sample(rng, existing.len(), existing.len().min(HARD_SAMPLE));
    let n = picked.len() as f64;
    let mut anchor = Vector2::zeros();
    let (mut c2, mut s2) = (0.0, 0.0);
    let mut verticals = 0usize;
    for i in picked.iter() {
        let cut = &existing[i];
        anchor += cut.midpoint();
        // Doubled-angle mean keeps θ and θ+π equivalent.
        let th = cut.angle();
        c2 += (2.0 * th).cos();
        s2 += (2.0 * th).sin();
        if cut.is_vertical() {
            verticals += 1;
        }
    }
    anchor /= n;
    let half_len = HARD_EXTENT * b.max_dim();
    match kind {
        CutKind::Straight => {
            let horizontals = picked.len() - verticals;
            let vertical = if rng.gen::<f64>() < HARD_UNBIASED_PROB || verticals == horizontals {
                rng.gen::<f64>() < 0.5
            } else {
                verticals < horizontals
            };
            let offset = rng.gen_range(-HARD_OFFSET_FRAC..=HARD_OFFSET_FRAC);
            if vertical {
                anchor.x += offset * b.width();
            } else {
                anchor.y += offset * b.height();
            }
            axis_line(anchor, vertical, half_len)
        }
        CutKind::Diagonal => {
            let mean = 0.5 * s2.atan2(c2);
            let angle = mean + FRAC_PI_2 + rng.gen_range(-HARD_SPREAD..=HARD_SPREAD);
            // Averaged midpoints of centred cuts coincide; shift across the new line.
            let offset = rng.gen_range(-HARD_OFFSET_FRAC..=HARD_OFFSET_FRAC) * b.max_dim();
            let shifted = anchor + Vector2::new(mean.cos(), mean.sin()) * offset;
            CutLine::through(shifted, angle, half_len, CutKind::Diagonal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{bounds, intersection_count_with_polygon, segment_intersection};
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    fn square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![100.0, 0.0],
            vector![100.0, 100.0],
            vector![0.0, 100.0],
        ]
    }

    #[test]
    fn selection_by_difficulty() {
        let picked: Vec<Strategy> = (1..=8).map(Strategy::for_difficulty).collect();
        assert_eq!(&picked[..3], &[Strategy::Simple; 3]);
        assert_eq!(&picked[3..6], &[Strategy::Medium; 3]);
        assert_eq!(&picked[6..], &[Strategy::Hard; 2]);
    }

    #[test]
    fn degenerate_bounds_yield_no_proposal() {
        let point = vec![vector![1.0, 1.0]; 3];
        let b = bounds(&point);
        let mut rng = StdRng::seed_from_u64(1);
        for s in [Strategy::Simple, Strategy::Medium, Strategy::Hard] {
            assert!(s
                .propose_cut(&b, &[], &point, CutKind::Diagonal, &mut rng)
                .is_none());
        }
    }

    #[test]
    fn straight_mode_stays_axis_aligned() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(21);
        let existing = vec![CutLine::new(
            vector![50.0, -50.0],
            vector![50.0, 150.0],
            CutKind::Straight,
        )];
        for s in [Strategy::Simple, Strategy::Medium, Strategy::Hard] {
            for _ in 0..50 {
                let c = s
                    .propose_cut(&b, &existing, &sq, CutKind::Straight, &mut rng)
                    .unwrap();
                assert!(c.a.x == c.b.x || c.a.y == c.b.y, "{s:?} produced {c:?}");
            }
        }
    }

    #[test]
    fn hard_proposals_cross_the_sampled_cuts() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(77);
        let first = CutLine::through(vector![50.0, 50.0], 0.3, 90.0, CutKind::Diagonal);
        let existing = vec![first];
        for _ in 0..100 {
            let c = Strategy::Hard
                .propose_cut(&b, &existing, &sq, CutKind::Diagonal, &mut rng)
                .unwrap();
            assert!(segment_intersection(c.a, c.b, first.a, first.b).is_some());
            assert!(intersection_count_with_polygon(&c, &sq) >= 2);
            // Within 15° of perpendicular.
            let diff = (c.angle() - first.angle()).rem_euclid(PI);
            assert!((diff - FRAC_PI_2).abs() <= HARD_SPREAD + 1e-9);
        }
    }

    /// Distance from `p` to the infinite line carrying `c`.
    fn distance_to_line(p: Point, c: &CutLine) -> f64 {
        let d = (c.b - c.a).normalize();
        let r = p - c.a;
        (r.x * d.y - r.y * d.x).abs()
    }

    #[test]
    fn hard_diagonal_lines_do_not_share_an_anchor() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(31);
        let first = CutLine::through(vector![50.0, 50.0], 0.3, 90.0, CutKind::Diagonal);
        let cap = HARD_OFFSET_FRAC * b.max_dim();
        let mut widest: f64 = 0.0;
        for _ in 0..100 {
            let c = Strategy::Hard
                .propose_cut(&b, &[first], &sq, CutKind::Diagonal, &mut rng)
                .unwrap();
            let d = distance_to_line(vector![50.0, 50.0], &c);
            assert!(d <= cap + 1e-9, "d={d}");
            widest = widest.max(d);
        }
        assert!(widest > 0.5 * cap, "widest={widest}");
    }

    #[test]
    fn medium_straight_crosses_perpendicular_within_jitter() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(5);
        let vertical = CutLine::new(vector![50.0, -50.0], vector![50.0, 150.0], CutKind::Straight);
        let horizontal =
            CutLine::new(vector![-50.0, 30.0], vector![150.0, 30.0], CutKind::Straight);
        for target in [vertical, horizontal] {
            for _ in 0..200 {
                let c = medium_crossing(&b, &[target], CutKind::Straight, &mut rng);
                assert_eq!(c.is_vertical(), !target.is_vertical(), "{c:?}");
                assert!(c.a.x == c.b.x || c.a.y == c.b.y);
                let m = c.midpoint() - target.midpoint();
                let bound = MEDIUM_JITTER + 1e-9;
                assert!(m.x.abs() <= bound && m.y.abs() <= bound, "{m:?}");
                assert!((c.length() - 2.0 * MEDIUM_EXTENT * b.max_dim()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn hard_straight_prefers_the_minority_axis() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(13);
        let verticals: Vec<CutLine> = [20.0, 50.0, 80.0]
            .iter()
            .map(|&x| CutLine::new(vector![x, -50.0], vector![x, 150.0], CutKind::Straight))
            .collect();
        let trials = 400;
        let horizontal = (0..trials)
            .filter(|_| {
                !Strategy::Hard
                    .propose_cut(&b, &verticals, &sq, CutKind::Straight, &mut rng)
                    .unwrap()
                    .is_vertical()
            })
            .count();
        // Biased 80% of the time, a coin flip otherwise: about 90% horizontal.
        assert!(horizontal > 320, "horizontal={horizontal}");
        assert!(horizontal < trials, "the unbiased branch never fired");
    }

    #[test]
    fn medium_diagonal_offsets_between_45_and_135_degrees() {
        let sq = square();
        let b = bounds(&sq);
        let mut rng = StdRng::seed_from_u64(8);
        let first = CutLine::through(vector![50.0, 50.0], 0.0, 90.0, CutKind::Diagonal);
        let mut crossing = 0;
        for _ in 0..200 {
            let c = Strategy::Medium
                .propose_cut(&b, &[first], &sq, CutKind::Diagonal, &mut rng)
                .unwrap();
            if segment_intersection(c.a, c.b, first.a, first.b).is_some() {
                crossing += 1;
            }
        }
        // 70% aim at the cut; random fallbacks through the centre also cross.
        assert!(crossing > 140, "crossing={crossing}");
    }
}
