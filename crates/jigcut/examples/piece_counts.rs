//! Print piece counts per difficulty for a few preset shapes.
//!
//! Usage:
//!   cargo run -p jigcut --example piece_counts -- straight
//!   cargo run -p jigcut --example piece_counts -- diagonal
//!
//! Each row shows min/mean/max pieces over 20 seeds next to the level's
//! nominal count (target cuts + 1).

use jigcut::api::{generate_puzzle, nominal_piece_count, CutKind, Point, MAX_DIFFICULTY};
use nalgebra::Vector2;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "straight".to_string());
    let kind: CutKind = match mode.parse() {
        Ok(k) => k,
        Err(e) => {
            eprintln!("{e}; usage: piece_counts [straight|diagonal]");
            return;
        }
    };
    let shapes: [(&str, Vec<Point>); 2] = [
        (
            "square",
            vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(300.0, 0.0),
                Vector2::new(300.0, 300.0),
                Vector2::new(0.0, 300.0),
            ],
        ),
        (
            "hexagon",
            (0..6)
                .map(|k| {
                    let th = std::f64::consts::TAU * k as f64 / 6.0;
                    Vector2::new(150.0 * th.cos(), 150.0 * th.sin())
                })
                .collect(),
        ),
    ];
    for (name, shape) in &shapes {
        println!("{name} ({kind}):");
        for difficulty in 1..=MAX_DIFFICULTY {
            let counts: Vec<usize> = (0..20u64)
                .filter_map(|seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    generate_puzzle(shape, difficulty, kind, &mut rng).ok()
                })
                .map(|r| r.pieces.len())
                .collect();
            let min = counts.iter().min().copied().unwrap_or(0);
            let max = counts.iter().max().copied().unwrap_or(0);
            let mean = counts.iter().sum::<usize>() as f64 / counts.len().max(1) as f64;
            println!(
                "  level {difficulty}: min={min} mean={mean:.1} max={max} nominal={}",
                nominal_piece_count(difficulty).unwrap_or(0)
            );
        }
    }
}
