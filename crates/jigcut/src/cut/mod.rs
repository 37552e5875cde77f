//! Cut-line generation: difficulty table, validation, strategies, controller.
//!
//! Purpose
//! - Turn `(shape, difficulty, kind)` into an ordered list of accepted cut
//!   lines, consuming randomness only through the caller's `Rng`.
//! - Surface caller contract violations as `CutError`; geometric trouble only
//!   shortens the returned list.
//!
//! Code cross-refs: `geom::{lines, kernel}`, `split::split_polygon`.

mod cfg;
mod controller;
mod error;
pub mod strategy;
pub mod validate;

pub use cfg::{settings_for, CutCfg, DifficultySettings, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use controller::{
    check_contract, generate_cuts, generate_cuts_report, generate_cuts_with_cfg, CutReport,
};
pub use error::{CutError, CutResult};
pub use strategy::Strategy;
pub use validate::{is_valid, is_valid_basic};
