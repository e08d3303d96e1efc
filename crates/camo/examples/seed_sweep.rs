//! Print shape counts and area shares for a few seeds.
//!
//! Usage:
//!   cargo run -p camo --example seed_sweep -- 5
//!
//! Handy for eyeballing how far the measured shares drift from the targets.

use camo::prelude::*;

fn main() {
    let runs: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    for seed in 0..runs {
        let cfg = CamoCfg {
            seed,
            ..CamoCfg::default()
        };
        let pattern = generate(&cfg);
        println!(
            "seed {seed}: macro={}, micro={}",
            pattern.macro_shapes().count(),
            pattern.micro_shapes().count()
        );
        print!("{}", AreaReport::from_shapes(&pattern.shapes));
    }
}
