//! Curated call surface for collaborators (puzzle assembly, CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules; internals may move.

// Geometry kernel
pub use crate::geom::{
    bounds, center_crossing_line, centroid_of_bounds, diagonal_line, forced_line,
    intersection_count_with_polygon, is_point_near_segment, polygon_area, segment_intersection,
    straight_line, too_close, vertex_centroid, Bounds, CutKind, CutLine, Point, Polygon,
};
// Cut generation
pub use crate::cut::{
    check_contract, generate_cuts, generate_cuts_report, generate_cuts_with_cfg, is_valid,
    is_valid_basic, settings_for, CutCfg, CutError, CutReport, CutResult, DifficultySettings,
    Strategy, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
// Splitting and compensation
pub use crate::compensate::{compensate, compensation_line, Compensated};
pub use crate::split::{edge_crossings, split_fragment, split_polygon, split_polygon_with_cfg};
// Top level
pub use crate::puzzle::{generate_puzzle, generate_puzzle_with_cfg, GenerationResult};

/// Pieces a level asks for when every cut lands (`target_cut_count + 1`).
///
/// An upper reference only; generation may return fewer pieces.
pub fn nominal_piece_count(difficulty: u8) -> Option<usize> {
    settings_for(difficulty).map(|s| s.target_cut_count + 1)
}
