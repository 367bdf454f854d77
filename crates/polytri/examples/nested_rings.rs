//! Print triangle counts and covered area for random nested ring sets.
//!
//! Usage:
//!   cargo run -p polytri --example nested_rings -- 4
//!
//! Each line: ring count, vertices per ring, triangles, covered area.

use polytri::api::{covered_area, draw_nested_rings, triangulate, ReplayToken, StarCfg, TriangulateCfg};

fn main() {
    let rings: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let cfg = TriangulateCfg::default();
    for index in 0..5 {
        let polys = draw_nested_rings(StarCfg::default(), rings, ReplayToken { seed: 2025, index });
        let sizes: Vec<usize> = polys.iter().map(|p| p.len()).collect();
        match triangulate(&polys, &cfg) {
            Ok(tris) => println!(
                "rings={} sizes={:?} triangles={} area={:.6}",
                rings,
                sizes,
                tris.len(),
                covered_area(&tris)
            ),
            Err(err) => eprintln!("rings={} sizes={:?} error: {}", rings, sizes, err),
        }
    }
}
