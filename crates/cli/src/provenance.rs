//! Provenance records: what produced an artifact, from which commit, with which knobs.
//!
//! Every file the CLI writes gets a `<stem>.provenance.json` sidecar; `report` prints
//! the same record without outputs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// The command run and its parameters, plus a short result summary where one exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Run {
    Triangulate {
        input: String,
        polygons: usize,
        vertices: usize,
        dedup_eps: f64,
        strict_containment: bool,
        triangles: usize,
        area: f64,
    },
    Sample {
        seed: u64,
        index: u64,
        rings: usize,
        vertices: Option<usize>,
    },
    Report,
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
pub struct Record<'a> {
    code_rev: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    tag: Option<&'a str>,
    run: &'a Run,
    outputs: Vec<String>,
}

impl<'a> Record<'a> {
    pub fn new(run: &'a Run, tag: Option<&'a str>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: polytri::VERSION,
            callsite: None,
            tag,
            run,
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar for `artifact`; the caller's location is recorded.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, run: &Run, tag: Option<&str>) -> Result<PathBuf> {
    let caller = Location::caller();
    let artifact = artifact.as_ref();
    let mut record = Record::new(run, tag);
    record.callsite = Some(Callsite {
        file: caller.file(),
        line: caller.line(),
    });
    record.outputs.push(artifact.to_string_lossy().into_owned());

    let path = provenance_path(artifact);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map_or_else(|| OsString::from("artifact"), |s| s.to_os_string());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit id: `GIT_COMMIT` at build time, then at run time, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let baked = option_env!("GIT_COMMIT").map(str::to_string);
    let runtime = std::env::var("GIT_COMMIT").ok();
    baked
        .into_iter()
        .chain(runtime)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
