//! Input shapes and JSON DTOs for the CLI.
//!
//! Points travel as `[x, y]` pairs so files stay readable and tool-agnostic.

use anyhow::{bail, Context, Result};
use jigcut::api::{CutKind, CutLine, GenerationResult, Point, Polygon};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::path::Path;

pub const PRESETS: [&str; 4] = ["square", "rect", "hexagon", "star"];

/// Resolve a preset name, or read a JSON file holding `[[x, y], ...]`.
pub fn load_shape(src: &str) -> Result<Polygon> {
    if let Some(shape) = preset(src) {
        return Ok(shape);
    }
    let path = Path::new(src);
    if !path.exists() {
        bail!(
            "unknown shape {src:?}: expected one of {} or a JSON file",
            PRESETS.join(", ")
        );
    }
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pts: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pts.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

pub fn preset(name: &str) -> Option<Polygon> {
    let shape = match name {
        "square" => rect(400.0, 400.0),
        "rect" => rect(600.0, 300.0),
        "hexagon" => (0..6)
            .map(|k| {
                let th = TAU * k as f64 / 6.0;
                Vector2::new(200.0 + 200.0 * th.cos(), 200.0 + 200.0 * th.sin())
            })
            .collect(),
        "star" => (0..10)
            .map(|k| {
                let th = PI * k as f64 / 5.0 - PI / 2.0;
                let r = if k % 2 == 0 { 200.0 } else { 85.0 };
                Vector2::new(200.0 + r * th.cos(), 200.0 + r * th.sin())
            })
            .collect(),
        _ => return None,
    };
    Some(shape)
}

fn rect(w: f64, h: f64) -> Polygon {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(w, 0.0),
        Vector2::new(w, h),
        Vector2::new(0.0, h),
    ]
}

#[inline]
fn pair(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn ring(poly: &[Point]) -> Vec<[f64; 2]> {
    poly.iter().map(pair).collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CutDto {
    pub a: [f64; 2],
    pub b: [f64; 2],
    pub kind: String,
}

impl From<&CutLine> for CutDto {
    fn from(c: &CutLine) -> Self {
        Self {
            a: pair(&c.a),
            b: pair(&c.b),
            kind: c.kind.to_string(),
        }
    }
}

/// On-disk form of one generated puzzle.
#[derive(Debug, Serialize, Deserialize)]
pub struct PuzzleDto {
    pub difficulty: u8,
    pub kind: String,
    pub seed: u64,
    pub shape: Vec<[f64; 2]>,
    pub cuts: Vec<CutDto>,
    pub pieces: Vec<Vec<[f64; 2]>>,
    pub original_positions: Vec<Vec<[f64; 2]>>,
}

impl PuzzleDto {
    pub fn new(
        shape: &[Point],
        difficulty: u8,
        kind: CutKind,
        seed: u64,
        res: &GenerationResult,
    ) -> Self {
        Self {
            difficulty,
            kind: kind.to_string(),
            seed,
            shape: ring(shape),
            cuts: res.cuts.iter().map(CutDto::from).collect(),
            pieces: res.pieces.iter().map(|p| ring(p)).collect(),
            original_positions: res.original_positions.iter().map(|p| ring(p)).collect(),
        }
    }
}
