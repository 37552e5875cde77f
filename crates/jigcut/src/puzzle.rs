//! Top-level puzzle generation: cuts → split → compensation.
//!
//! Purpose
//! - Single entry point from `(shape, difficulty, kind)` to piece polygons.
//! - `original_positions` is an independent copy of `pieces` taken at creation,
//!   so callers may move or rotate pieces without losing the reference layout.
//!
//! Contract
//! - Errors only for caller contract violations (`CutError`).
//! - The piece count is at most what the level asks for and may be lower; it is
//!   never an error to get fewer pieces.

use rand::Rng;

use crate::compensate::compensate;
use crate::cut::{check_contract, generate_cuts_with_cfg, CutCfg, CutResult};
use crate::geom::{forced_line, CutKind, CutLine, Point, Polygon};
use crate::split::split_polygon_with_cfg;

/// Pieces plus their untransformed snapshot and the cuts that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationResult {
    pub pieces: Vec<Polygon>,
    pub original_positions: Vec<Polygon>,
    pub cuts: Vec<CutLine>,
}

impl GenerationResult {
    pub fn new(pieces: Vec<Polygon>, cuts: Vec<CutLine>) -> Self {
        let original_positions = pieces.clone();
        Self {
            pieces,
            original_positions,
            cuts,
        }
    }
}

/// Generate a puzzle with the default configuration.
pub fn generate_puzzle<R: Rng + ?Sized>(
    shape: &[Point],
    difficulty: u8,
    kind: CutKind,
    rng: &mut R,
) -> CutResult<GenerationResult> {
    generate_puzzle_with_cfg(shape, difficulty, kind, &CutCfg::default(), rng)
}

/// Generate a puzzle.
///
/// When the controller accepts no cut at all, one `forced_line` is tried so a
/// usable shape still yields at least two pieces.
pub fn generate_puzzle_with_cfg<R: Rng + ?Sized>(
    shape: &[Point],
    difficulty: u8,
    kind: CutKind,
    cfg: &CutCfg,
    rng: &mut R,
) -> CutResult<GenerationResult> {
    let settings = check_contract(shape, difficulty)?;
    let mut cuts = generate_cuts_with_cfg(shape, difficulty, kind, cfg, rng)?;
    if cuts.is_empty() {
        match forced_line(shape, &cuts, kind, cfg.min_cut_distance, rng) {
            Some(line) => cuts.push(line),
            None => tracing::debug!(difficulty, "no cut possible; returning shape whole"),
        }
    }
    let pieces = split_polygon_with_cfg(shape, &cuts, cfg);
    let out = compensate(
        shape,
        cuts,
        pieces,
        kind,
        settings.target_cut_count,
        cfg,
        rng,
    );
    tracing::debug!(
        difficulty,
        %kind,
        cuts = out.cuts.len(),
        pieces = out.pieces.len(),
        rounds = out.rounds,
        "puzzle generated"
    );
    Ok(GenerationResult::new(out.pieces, out.cuts))
}
