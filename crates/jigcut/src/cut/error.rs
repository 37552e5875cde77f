//! Contract errors raised at the controller boundary.
//!
//! Geometric degeneracy is never an error; it shows up as fewer cuts or pieces.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CutError {
    #[error("shape must have ≥3 points (got {got})")]
    ShapeTooSmall { got: usize },

    #[error("difficulty out of range: expected 1..=8, got {got}")]
    DifficultyOutOfRange { got: u8 },

    #[error("unsupported cut kind: {name:?}")]
    UnsupportedKind { name: String },

    #[error("no difficulty settings for level {difficulty}")]
    MissingSettings { difficulty: u8 },
}

pub type CutResult<T> = Result<T, CutError>;
