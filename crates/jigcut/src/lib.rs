//! Jigsaw cutting engine: closed 2D shape → irregular puzzle pieces.
//!
//! Pipeline
//! - `cut`: difficulty-tuned strategies propose cut lines; a validator and a
//!   bounded attempt budget decide which ones are kept.
//! - `split`: the shape is partitioned along the accepted cuts, in order.
//! - `compensate`: extra centroid-anchored cuts when the split under-produces.
//! - `puzzle`: composes the above into `generate_puzzle`.
//!
//! Randomness is always the caller's `rand::Rng`; the crate holds no global
//! state, so concurrent calls on different shapes are independent.

pub mod api;
pub mod compensate;
pub mod cut;
pub mod geom;
pub mod puzzle;
pub mod split;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cut::{
        generate_cuts, generate_cuts_with_cfg, CutCfg, CutError, CutResult, DifficultySettings,
    };
    pub use crate::geom::{Bounds, CutKind, CutLine, Point, Polygon};
    pub use crate::puzzle::{generate_puzzle, generate_puzzle_with_cfg, GenerationResult};
    pub use crate::split::split_polygon;
    pub use nalgebra::Vector2 as Vec2;
}
