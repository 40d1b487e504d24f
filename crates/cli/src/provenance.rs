//! `<report>.provenance.json`: what a `pi1` run read, how it was configured,
//! and the shape of what it produced.

use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde::Serialize;

/// The input file as seen by the run.
#[derive(Debug, Serialize)]
pub struct InputRecord {
    pub path: String,
    pub bytes: u64,
    /// Simplex rows kept after `--at` truncation.
    pub simplices: usize,
}

impl InputRecord {
    pub fn read(path: &Path, simplices: usize) -> Result<Self> {
        let bytes = fs::metadata(path)
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        Ok(Self {
            path: path.to_string_lossy().into_owned(),
            bytes,
            simplices,
        })
    }
}

/// Builder settings plus a summary of the resulting presentation.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub input: InputRecord,
    pub base_point: Option<usize>,
    pub simplify: bool,
    pub at: Option<f64>,
    /// Cell counts of the 2-skeleton the builder consumed.
    pub f_vector: Vec<usize>,
    pub generators: usize,
    pub relators: usize,
    pub abelianization: String,
}

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    fundgroup_version: &'static str,
    callsite: Callsite,
    run: &'a RunRecord,
    report: String,
}

/// Write the sidecar next to `report` and return its path.
#[track_caller]
pub fn write_sidecar(report: &Path, run: &RunRecord) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        fundgroup_version: fundgroup::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        run,
        report: report.to_string_lossy().into_owned(),
    };
    let path = sidecar_path(report);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "provenance written");
    Ok(path)
}

/// `out/report.json` -> `out/report.provenance.json`.
fn sidecar_path(report: &Path) -> PathBuf {
    let stem = report
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    report.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
