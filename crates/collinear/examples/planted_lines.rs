//! Plant a few collinear runs in noise and print what each algorithm finds.
//!
//! Usage:
//!   cargo run -p collinear --example planted_lines -- [seed]

use collinear::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025);
    let cfg = PlantedCfg {
        cloud: CloudCfg {
            noise: 40,
            bound: 100,
        },
        lines: 3,
        run_len: 6,
    };
    let ex = Extractor::new(draw_planted(cfg, ReplayToken { seed, index: 0 }));
    let fast = ex.lines_fast();
    println!("{} points, {} maximal lines", ex.len(), fast.len());
    for l in &fast {
        println!("  {} points: {l}", l.len());
    }
    println!("brute: {} collinear 4-subsets", ex.lines_brute().len());
}
