use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundgroup::api::{standard_complex, two_skeleton, STANDARD_NAMES};
use fundgroup::{fundamental_group, BuildCfg, Complex, Presentation, SimplicialComplex};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Fundamental group presentations of simplicial complexes")]
struct Cmd {
    /// Log builder internals (tree size, generator and relator counts)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a presentation from a simplex list and write a JSON report
    Pi1 {
        /// .json, .csv or .parquet simplex list
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Vertex selecting the component of a disconnected complex
        #[arg(long)]
        base_point: Option<usize>,
        /// Return the raw spanning-tree presentation
        #[arg(long)]
        no_simplify: bool,
        /// Keep only simplices with filtration value <= AT
        #[arg(long)]
        at: Option<f64>,
    },
    /// Print the presentation of a standard triangulation
    Standard {
        #[arg(long)]
        name: String,
        #[arg(long)]
        no_simplify: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON report written by `pi1`.
#[derive(Debug, Serialize)]
struct PresentationReport {
    /// Cell counts of the 2-skeleton.
    f_vector: Vec<usize>,
    base_point: Option<usize>,
    simplified: bool,
    generators: Vec<String>,
    relators: Vec<String>,
    abelian_rank: usize,
    abelian_torsion: Vec<u64>,
    presentation: String,
}

impl PresentationReport {
    fn new(
        complex: &Complex,
        base_point: Option<usize>,
        simplified: bool,
        p: &Presentation,
    ) -> Self {
        let ab = p.abelian_invariants();
        Self {
            f_vector: complex.f_vector(),
            base_point,
            simplified,
            generators: p.generator_names().to_vec(),
            relators: p.relator_strings(),
            abelian_rank: ab.rank,
            abelian_torsion: ab.torsion,
            presentation: p.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Pi1 {
            input,
            out,
            base_point,
            no_simplify,
            at,
        } => pi1(&input, &out, base_point, !no_simplify, at),
        Action::Standard { name, no_simplify } => standard(&name, !no_simplify),
        Action::Report => report(),
    }
}

fn pi1(
    input: &str,
    out: &str,
    base_point: Option<usize>,
    simplify: bool,
    at: Option<f64>,
) -> Result<()> {
    tracing::info!(input, out, base_point = ?base_point, simplify, at = ?at, "pi1");
    let parsed = input::read_complex(Path::new(input), at)?;
    let base_point = base_point.or(parsed.base_point);
    let complex = two_skeleton(&parsed.simplices);
    tracing::info!(
        f_vector = ?complex.f_vector(),
        connected = complex.is_connected(),
        "complex"
    );
    let p = fundamental_group(&complex, base_point, BuildCfg { simplify })
        .with_context(|| format!("computing the fundamental group of {input}"))?;
    tracing::info!(
        generators = p.num_generators(),
        relators = p.num_relators(),
        "presentation"
    );

    let report = PresentationReport::new(&complex, base_point, simplify, &p);
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {out}"))?;

    let run = provenance::RunRecord {
        input: provenance::InputRecord::read(Path::new(input), parsed.simplices.len())?,
        base_point,
        simplify,
        at,
        f_vector: report.f_vector,
        generators: p.num_generators(),
        relators: p.num_relators(),
        abelianization: p.abelian_invariants().to_string(),
    };
    provenance::write_sidecar(out_path, &run)?;
    Ok(())
}

fn standard(name: &str, simplify: bool) -> Result<()> {
    let Some(complex) = standard_complex(name) else {
        anyhow::bail!("unknown complex {name:?}; known: {}", STANDARD_NAMES.join(", "));
    };
    let p = fundamental_group(&complex, None, BuildCfg { simplify })?;
    println!("{p}");
    println!("H1 = {}", p.abelian_invariants());
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "fundgroup_version": fundgroup::VERSION,
        "standard_complexes": STANDARD_NAMES,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
