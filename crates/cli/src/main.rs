use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polytri::api::{
    covered_area, draw_nested_rings, triangulate, Point, Polygon, ReplayToken, StarCfg,
    Triangle, TriangulateCfg, VertexCount,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{Record, Run};

#[derive(Parser)]
#[command(name = "polytri")]
#[command(about = "Triangulate nested polygon sets from JSON")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate `[[[x, y], ...], ...]` into `{count, area, triangles}`
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Per-axis tolerance for duplicate bridge vertices (0 = exact)
        #[arg(long, default_value_t = 0.0)]
        dedup_eps: f64,
        /// Do not reject containment samples lying on another boundary
        #[arg(long)]
        allow_ambiguous: bool,
    },
    /// Write a random nested ring set (mixed windings)
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 3)]
        rings: usize,
        /// Vertices per ring (at least 8); random in 8..=24 when omitted
        #[arg(long)]
        vertices: Option<usize>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Polygon set as read from / written to JSON.
type PolygonsJson = Vec<Vec<[f64; 2]>>;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct TrianglesJson {
    count: usize,
    area: f64,
    triangles: Vec<[[f64; 2]; 3]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate {
            input,
            out,
            dedup_eps,
            allow_ambiguous,
        } => {
            let cfg = TriangulateCfg {
                dedup_eps,
                strict_containment: !allow_ambiguous,
            };
            run_triangulate(&input, &out, &cfg, cmd.tag)
        }
        Action::Sample {
            seed,
            index,
            rings,
            vertices,
            out,
        } => run_sample(ReplayToken { seed, index }, rings, vertices, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn polygons_from_json(raw: PolygonsJson) -> Vec<Polygon> {
    raw.into_iter()
        .map(|ring| Polygon::new(ring.into_iter().map(|[x, y]| Point::new(x, y)).collect()))
        .collect()
}

fn polygons_to_json(polys: &[Polygon]) -> PolygonsJson {
    polys
        .iter()
        .map(|p| p.pts.iter().map(|v| [v.x, v.y]).collect())
        .collect()
}

fn triangles_to_json(tris: &[Triangle]) -> TrianglesJson {
    TrianglesJson {
        count: tris.len(),
        area: covered_area(tris),
        triangles: tris.iter().map(|t| t.0.map(|v| [v.x, v.y])).collect(),
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_triangulate(
    input: &Path,
    out: &Path,
    cfg: &TriangulateCfg,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "triangulate");
    let raw: PolygonsJson = serde_json::from_slice(
        &std::fs::read(input).with_context(|| format!("reading {}", input.display()))?,
    )
    .with_context(|| format!("parsing {}", input.display()))?;
    let polys = polygons_from_json(raw);
    let vertices: usize = polys.iter().map(Polygon::len).sum();

    let tris = triangulate(&polys, cfg)
        .with_context(|| format!("triangulating {}", input.display()))?;
    let doc = triangles_to_json(&tris);
    tracing::info!(polygons = polys.len(), vertices, triangles = doc.count, area = doc.area, "done");

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let run = Run::Triangulate {
        input: input.to_string_lossy().into_owned(),
        polygons: polys.len(),
        vertices,
        dedup_eps: cfg.dedup_eps,
        strict_containment: cfg.strict_containment,
        triangles: doc.count,
        area: doc.area,
    };
    provenance::write_sidecar(out, &run, tag.as_deref())?;
    Ok(())
}

fn run_sample(
    tok: ReplayToken,
    rings: usize,
    vertices: Option<usize>,
    out: &Path,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, rings, tag = ?tag, "sample");
    let cfg = StarCfg {
        vertex_count: vertices.map_or(StarCfg::default().vertex_count, VertexCount::Fixed),
        ..StarCfg::default()
    };
    let polys = draw_nested_rings(cfg, rings, tok);

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&polygons_to_json(&polys))?)
        .with_context(|| format!("writing {}", out.display()))?;

    let run = Run::Sample {
        seed: tok.seed,
        index: tok.index,
        rings,
        vertices,
    };
    provenance::write_sidecar(out, &run, tag.as_deref())?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let record = Record::new(&Run::Report, tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_flags() {
        let cmd = Cmd::try_parse_from([
            "polytri",
            "--tag",
            "t1",
            "triangulate",
            "--input",
            "in.json",
            "--out",
            "out.json",
            "--dedup-eps",
            "1e-9",
            "--allow-ambiguous",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Triangulate {
                dedup_eps,
                allow_ambiguous,
                ..
            } => {
                assert_eq!(dedup_eps, 1e-9);
                assert!(allow_ambiguous);
            }
            _ => panic!("expected triangulate"),
        }
    }

    #[test]
    fn triangulate_square_with_hole_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("polys.json");
        let out = dir.path().join("nested/tris.json");
        std::fs::write(
            &input,
            "[[[0,0],[4,0],[4,4],[0,4]], [[1,1],[1,3],[3,3],[3,1]]]",
        )
        .unwrap();
        run_triangulate(&input, &out, &TriangulateCfg::default(), Some("x".into())).unwrap();

        let doc: TrianglesJson = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc.count, 8);
        assert_eq!(doc.triangles.len(), 8);
        assert!((doc.area - 12.0).abs() < 1e-12);

        let prov_path = dir.path().join("nested/tris.provenance.json");
        let prov: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(prov["tag"], "x");
        assert_eq!(prov["run"]["command"], "triangulate");
        assert_eq!(prov["run"]["polygons"], 2);
        assert_eq!(prov["run"]["triangles"], 8);
    }

    #[test]
    fn triangulate_reports_bad_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("polys.json");
        let out = dir.path().join("tris.json");
        std::fs::write(&input, "[[[0,0],[1,1]]]").unwrap();
        let err = run_triangulate(&input, &out, &TriangulateCfg::default(), None).unwrap_err();
        assert!(format!("{err:#}").contains("need at least 3"), "{err:#}");
        assert!(!out.exists());
    }

    #[test]
    fn sample_then_triangulate() {
        let dir = tempdir().unwrap();
        let polys = dir.path().join("rings.json");
        let tris = dir.path().join("rings_tris.json");
        run_sample(ReplayToken { seed: 4, index: 2 }, 3, Some(12), &polys, None).unwrap();

        let raw: PolygonsJson = serde_json::from_slice(&std::fs::read(&polys).unwrap()).unwrap();
        assert_eq!(raw.len(), 3);
        assert!(raw.iter().all(|r| r.len() == 12));

        run_triangulate(&polys, &tris, &TriangulateCfg::default(), None).unwrap();
        let doc: TrianglesJson = serde_json::from_slice(&std::fs::read(&tris).unwrap()).unwrap();
        // ring 0 with ring 1 as hole, ring 2 on its own
        assert_eq!(doc.count, (12 + 14 - 2) + (12 - 2));
    }
}
