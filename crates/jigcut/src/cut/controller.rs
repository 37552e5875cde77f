//! Cut generation loop: contract checks, per-slot attempt budget, early stop.
//!
//! Model
//! - For each of `target_cut_count` slots, ask the strategy for up to
//!   `attempts_per_cut` proposals and keep the first that validates.
//! - Fewer than two accepted cuts: full validation (relaxed when the level does
//!   not use center cuts). Two or more: basic validation only.
//! - A slot whose budget runs out ends generation; the partial list is final.

use rand::Rng;

use crate::geom::{bounds, center_crossing_line, CutKind, CutLine, Point};

use super::cfg::{settings_for, CutCfg, DifficultySettings, MAX_DIFFICULTY, MIN_DIFFICULTY};
use super::error::{CutError, CutResult};
use super::strategy::Strategy;
use super::validate::{is_valid, is_valid_basic};

/// Accepted cuts plus the number of proposals spent producing them.
#[derive(Clone, Debug, Default)]
pub struct CutReport {
    pub cuts: Vec<CutLine>,
    pub proposals: usize,
}

/// Validate the caller contract and resolve the difficulty settings.
pub fn check_contract(
    shape: &[Point],
    difficulty: u8,
) -> CutResult<&'static DifficultySettings> {
    if shape.len() < 3 {
        return Err(CutError::ShapeTooSmall { got: shape.len() });
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(CutError::DifficultyOutOfRange { got: difficulty });
    }
    settings_for(difficulty).ok_or(CutError::MissingSettings { difficulty })
}

/// Generate cut lines with the default configuration.
pub fn generate_cuts<R: Rng + ?Sized>(
    shape: &[Point],
    difficulty: u8,
    kind: CutKind,
    rng: &mut R,
) -> CutResult<Vec<CutLine>> {
    generate_cuts_with_cfg(shape, difficulty, kind, &CutCfg::default(), rng)
}

/// Generate cut lines; the result may be shorter than the level's target.
pub fn generate_cuts_with_cfg<R: Rng + ?Sized>(
    shape: &[Point],
    difficulty: u8,
    kind: CutKind,
    cfg: &CutCfg,
    rng: &mut R,
) -> CutResult<Vec<CutLine>> {
    generate_cuts_report(shape, difficulty, kind, cfg, rng).map(|r| r.cuts)
}

/// Like `generate_cuts_with_cfg`, also reporting the proposal count.
///
/// Post: `report.proposals <= target_cut_count * cfg.attempts_per_cut`.
pub fn generate_cuts_report<R: Rng + ?Sized>(
    shape: &[Point],
    difficulty: u8,
    kind: CutKind,
    cfg: &CutCfg,
    rng: &mut R,
) -> CutResult<CutReport> {
    let settings = check_contract(shape, difficulty)?;
    let b = bounds(shape);
    let strategy = Strategy::for_difficulty(difficulty);
    let mut report = CutReport {
        cuts: Vec::with_capacity(settings.target_cut_count),
        proposals: 0,
    };

    for slot in 0..settings.target_cut_count {
        let mut accepted = None;
        for _ in 0..cfg.attempts_per_cut {
            report.proposals += 1;
            let candidate = if report.cuts.is_empty()
                && settings.use_center_cut
                && rng.gen::<f64>() < settings.center_probability
            {
                Some(center_crossing_line(shape, false, kind, rng))
            } else {
                strategy.propose_cut(&b, &report.cuts, shape, kind, rng)
            };
            let Some(candidate) = candidate else {
                continue;
            };
            let ok = if report.cuts.len() >= 2 {
                is_valid_basic(&candidate, shape)
            } else {
                is_valid(
                    &candidate,
                    shape,
                    &report.cuts,
                    !settings.use_center_cut,
                    cfg,
                )
            };
            if ok {
                accepted = Some(candidate);
                break;
            }
        }
        match accepted {
            Some(cut) => report.cuts.push(cut),
            None => {
                tracing::debug!(
                    slot,
                    accepted = report.cuts.len(),
                    target = settings.target_cut_count,
                    "cut slot exhausted; stopping"
                );
                break;
            }
        }
    }
    tracing::trace!(
        difficulty,
        %kind,
        cuts = report.cuts.len(),
        proposals = report.proposals,
        "cuts generated"
    );
    Ok(report)
}
