//! Reading simplex lists from JSON or tabular (CSV / Parquet) files.
//!
//! JSON: `{"simplices": [[0,1],[1,2,3]], "base_point": 0, "filtration": [0.0, 0.5]}`
//! (`base_point` and `filtration` optional; `filtration` parallel to `simplices`).
//!
//! Tables: one simplex per row in integer columns `v0, v1, ...` (nulls for
//! lower-dimensional rows) and an optional float column `filtration`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Simplices plus an optional base point, as read from disk.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ComplexInput {
    pub simplices: Vec<Vec<usize>>,
    #[serde(default)]
    pub base_point: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtration: Option<Vec<f64>>,
}

impl ComplexInput {
    /// Keep simplices with filtration value `<= at`. Errors when the input carries no values.
    pub fn truncate_at(&mut self, at: f64) -> Result<()> {
        let Some(values) = self.filtration.take() else {
            bail!("--at given but the input has no filtration values");
        };
        if values.len() != self.simplices.len() {
            bail!(
                "filtration has {} values for {} simplices",
                values.len(),
                self.simplices.len()
            );
        }
        let simplices = std::mem::take(&mut self.simplices);
        let (kept, kept_values): (Vec<_>, Vec<_>) = simplices
            .into_iter()
            .zip(values)
            .filter(|(_, f)| *f <= at)
            .unzip();
        self.simplices = kept;
        self.filtration = Some(kept_values);
        Ok(())
    }
}

/// Read by extension: `.json`, `.csv`, or `.parquet`.
pub fn read_complex(path: &Path, at: Option<f64>) -> Result<ComplexInput> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let mut parsed: ComplexInput = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            if let Some(t) = at {
                parsed.truncate_at(t)?;
            }
            Ok(parsed)
        }
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(1000))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf, at).with_context(|| format!("reading {}", path.display()))
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            read_table(lf, at).with_context(|| format!("reading {}", path.display()))
        }
        other => bail!("unsupported input extension {other:?} (expected json, csv, parquet)"),
    }
}

fn read_table(lf: LazyFrame, at: Option<f64>) -> Result<ComplexInput> {
    let lf = match at {
        Some(t) => lf.filter(col("filtration").lt_eq(lit(t))),
        None => lf,
    };
    let df = lf.collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_table_shape");

    let mut columns: Vec<Vec<Option<i64>>> = Vec::new();
    while let Ok(series) = df.column(&format!("v{}", columns.len())) {
        // An all-null column may be inferred as any dtype; anything else must be integral.
        if !series.dtype().is_integer() && series.null_count() < series.len() {
            bail!(
                "vertex column {} has dtype {}, expected integers",
                series.name(),
                series.dtype()
            );
        }
        let ints = series.cast(&DataType::Int64)?;
        columns.push(ints.i64()?.into_iter().collect());
    }
    if columns.is_empty() {
        bail!("table has no vertex column v0");
    }

    let mut simplices = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut simplex = Vec::with_capacity(columns.len());
        for v in columns.iter().filter_map(|c| c[row]) {
            if v < 0 {
                bail!("row {row}: negative vertex id {v}");
            }
            simplex.push(v as usize);
        }
        if !simplex.is_empty() {
            simplices.push(simplex);
        }
    }
    Ok(ComplexInput {
        simplices,
        base_point: None,
        filtration: None,
    })
}
