use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jigcut::api::{generate_puzzle, polygon_area, CutKind, MAX_DIFFICULTY, MIN_DIFFICULTY};
use rand::{rngs::StdRng, SeedableRng};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod shapes;

use provenance::{write_sidecar, GenParams};
use shapes::{load_shape, PuzzleDto};

#[derive(Parser)]
#[command(name = "jigcut")]
#[command(about = "Cut shapes into jigsaw pieces and inspect the results")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate one puzzle and write it as JSON (plus a provenance sidecar)
    Generate {
        /// Preset (square, rect, hexagon, star) or a JSON file of [x, y] points
        #[arg(long, default_value = "square")]
        shape: String,
        #[arg(long, default_value_t = 1)]
        difficulty: u8,
        /// straight | diagonal
        #[arg(long, default_value = "straight")]
        kind: CutKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Piece-count statistics per difficulty over consecutive seeds
    Stats {
        #[arg(long, default_value = "square")]
        shape: String,
        #[arg(long, default_value_t = 50)]
        runs: u64,
        #[arg(long, default_value = "straight")]
        kind: CutKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            shape,
            difficulty,
            kind,
            seed,
            out,
        } => generate(&shape, difficulty, kind, seed, &out),
        Action::Stats {
            shape,
            runs,
            kind,
            seed,
        } => stats(&shape, runs, kind, seed),
        Action::Report => report(),
    }
}

fn generate(shape_src: &str, difficulty: u8, kind: CutKind, seed: u64, out: &str) -> Result<()> {
    tracing::info!(shape = shape_src, difficulty, %kind, seed, out, "generate");
    let shape = load_shape(shape_src)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let res = generate_puzzle(&shape, difficulty, kind, &mut rng)?;
    tracing::info!(pieces = res.pieces.len(), cuts = res.cuts.len(), "generated");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let dto = PuzzleDto::new(&shape, difficulty, kind, seed, &res);
    std::fs::write(out_path, serde_json::to_vec_pretty(&dto)?)
        .with_context(|| format!("writing {}", out_path.display()))?;

    let params = GenParams {
        shape: shape_src.to_string(),
        difficulty,
        kind: kind.to_string(),
        seed,
        pieces: res.pieces.len(),
        cuts: res.cuts.len(),
    };
    let sidecar = write_sidecar(out_path, &params)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

fn stats(shape_src: &str, runs: u64, kind: CutKind, seed: u64) -> Result<()> {
    tracing::info!(shape = shape_src, runs, %kind, seed, "stats");
    let shape = load_shape(shape_src)?;
    let whole = polygon_area(&shape);
    let mut rows = Vec::new();
    for difficulty in MIN_DIFFICULTY..=MAX_DIFFICULTY {
        let mut counts = Vec::with_capacity(runs as usize);
        let mut area_sum = 0.0;
        let mut worst_area_err = 0.0_f64;
        for s in seed..seed.saturating_add(runs) {
            let mut rng = StdRng::seed_from_u64(s);
            let res = generate_puzzle(&shape, difficulty, kind, &mut rng)?;
            let area: f64 = res.pieces.iter().map(|p| polygon_area(p)).sum();
            area_sum += area;
            if whole > 0.0 {
                worst_area_err = worst_area_err.max((area - whole).abs() / whole);
            }
            counts.push(res.pieces.len());
        }
        let n = counts.len().max(1) as f64;
        rows.push(serde_json::json!({
            "difficulty": difficulty,
            "runs": counts.len(),
            "min_pieces": counts.iter().min(),
            "max_pieces": counts.iter().max(),
            "mean_pieces": counts.iter().sum::<usize>() as f64 / n,
            "mean_total_area": area_sum / n,
            "max_rel_area_error": worst_area_err,
        }));
    }
    let obj = serde_json::json!({
        "shape": shape_src,
        "kind": kind.to_string(),
        "seed": seed,
        "levels": rows,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let mut obj = provenance::header();
    obj["presets"] = serde_json::json!(shapes::PRESETS);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn kind_flag_parses_through_fromstr() {
        let cmd = Cmd::try_parse_from(["jigcut", "stats", "--kind", "Diagonal"]).unwrap();
        match cmd.action {
            Action::Stats { kind, runs, .. } => {
                assert_eq!(kind, CutKind::Diagonal);
                assert_eq!(runs, 50);
            }
            _ => panic!("expected stats"),
        }
        assert!(Cmd::try_parse_from(["jigcut", "stats", "--kind", "wavy"]).is_err());
    }

    #[test]
    fn generate_writes_puzzle_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("puzzle.json");
        generate("hexagon", 3, CutKind::Diagonal, 5, out.to_str().unwrap()).unwrap();
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["difficulty"], 3);
        assert_eq!(doc["kind"], "diagonal");
        let pieces = doc["pieces"].as_array().unwrap();
        assert!(!pieces.is_empty());
        assert_eq!(doc["pieces"], doc["original_positions"]);
        assert!(dir
            .path()
            .join("nested")
            .join("puzzle.provenance.json")
            .exists());
    }

    #[test]
    fn generate_rejects_bad_difficulty() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("p.json");
        let err = generate("square", 9, CutKind::Straight, 0, out.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("difficulty out of range"));
        assert!(!out.exists());
    }
}
