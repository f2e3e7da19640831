//! Volterra Model Validation Runner
//!
//! Fits a memory polynomial on the extraction half of a measured dataset,
//! scores it on the validation half and writes a JSON report.
//!
//! # Dataset format
//!
//! ```json
//! {
//!   "name": "synthetic_pa",
//!   "params": { "order": 3, "memory_depth": 1 },
//!   "extraction": { "input": [[0.1, 0.2], ...], "output": [[0.1, 0.19], ...] },
//!   "validation": { "input": [...], "output": [...] }
//! }
//! ```
//!
//! Samples are plain numbers (real data) or `[re, im]` pairs (complex
//! baseband). Any complex sample switches the run to complex arithmetic with
//! the envelope basis. `params` and `validation` are optional; command-line
//! flags take precedence over `params`.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p volterra-validation --bin volterra-validate --release -- \
//!     --dataset validation/volterra/data/synthetic_pa.json --output report.json
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;
use volterra::prelude::*;

const DEFAULT_ORDER: usize = 3;
const DEFAULT_MEMORY_DEPTH: usize = 2;

/// CLI arguments for the validation runner.
#[derive(Parser, Debug)]
#[command(name = "volterra-validate")]
#[command(about = "Fit a Volterra model on extraction data and score it on validation data")]
struct Args {
    /// Dataset JSON file.
    #[arg(long)]
    dataset: PathBuf,

    /// Polynomial order P (overrides the dataset).
    #[arg(long)]
    order: Option<usize>,

    /// Memory depth M (overrides the dataset).
    #[arg(long)]
    memory_depth: Option<usize>,

    /// Feature basis (defaults to envelope for complex data, power otherwise).
    #[arg(long, value_enum)]
    basis: Option<BasisArg>,

    /// Output JSON report file. Printed to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fill feature rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Log per-stage details.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum BasisArg {
    Power,
    Envelope,
}

impl From<BasisArg> for Basis {
    fn from(arg: BasisArg) -> Self {
        match arg {
            BasisArg::Power => Basis::Power,
            BasisArg::Envelope => Basis::Envelope,
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// A real number or a `[re, im]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
enum SampleValue {
    Real(f64),
    Complex([f64; 2]),
}

impl SampleValue {
    fn is_complex(&self) -> bool {
        matches!(self, Self::Complex(_))
    }

    fn to_real(&self) -> f64 {
        match *self {
            Self::Real(v) => v,
            Self::Complex([re, _]) => re,
        }
    }

    fn to_complex(&self) -> Complex64 {
        match *self {
            Self::Real(v) => Complex64::new(v, 0.0),
            Self::Complex([re, im]) => Complex64::new(re, im),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Dataset {
    name: String,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    params: Params,
    extraction: SignalPair,
    #[serde(default)]
    validation: Option<SignalPair>,
}

#[derive(Debug, Default, Deserialize)]
struct Params {
    order: Option<usize>,
    memory_depth: Option<usize>,
    basis: Option<BasisArg>,
}

#[derive(Debug, Deserialize)]
struct SignalPair {
    input: Vec<SampleValue>,
    output: Vec<SampleValue>,
}

impl SignalPair {
    fn is_complex(&self) -> bool {
        self.input
            .iter()
            .chain(self.output.iter())
            .any(SampleValue::is_complex)
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Serialize)]
struct Report {
    name: String,
    order: usize,
    memory_depth: usize,
    basis: BasisArg,
    complex: bool,
    coefficients: Vec<SampleValue>,
    formatted: String,
    training: Option<Metrics>,
    validation: Option<ValidationMetrics>,
}

#[derive(Debug, Serialize)]
struct Metrics {
    samples: usize,
    nmse_db: f64,
    rmse: f64,
    mae: f64,
    max_abs_error: f64,
}

impl From<&Diagnostics<f64>> for Metrics {
    fn from(d: &Diagnostics<f64>) -> Self {
        Self {
            samples: d.n,
            nmse_db: d.nmse_db,
            rmse: d.rmse,
            mae: d.mae,
            max_abs_error: d.max_abs_error,
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationMetrics {
    #[serde(flatten)]
    metrics: Metrics,
    /// `(|actual|, |predicted|)` per sample for an AM/AM plot.
    amplitude: Vec<[f64; 2]>,
    /// Endpoints of the `y = x` reference line.
    reference: Option<[f64; 2]>,
}

/// Resolved run settings.
#[derive(Debug, Clone, Copy)]
struct Settings {
    order: usize,
    memory_depth: usize,
    basis: BasisArg,
    parallel: bool,
}

// ============================================================================
// Pipeline
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let file = fs::File::open(&args.dataset)
        .with_context(|| format!("failed to open dataset {}", args.dataset.display()))?;
    let dataset: Dataset = serde_json::from_reader(file)
        .with_context(|| format!("failed to parse dataset {}", args.dataset.display()))?;

    let complex = dataset.extraction.is_complex()
        || dataset.validation.as_ref().is_some_and(SignalPair::is_complex);

    let settings = Settings {
        order: args
            .order
            .or(dataset.params.order)
            .unwrap_or(DEFAULT_ORDER),
        memory_depth: args
            .memory_depth
            .or(dataset.params.memory_depth)
            .unwrap_or(DEFAULT_MEMORY_DEPTH),
        basis: args.basis.or(dataset.params.basis).unwrap_or(if complex {
            BasisArg::Envelope
        } else {
            BasisArg::Power
        }),
        parallel: args.parallel,
    };

    info!("=== Volterra Validation: {} ===", dataset.name);
    if let Some(notes) = &dataset.notes {
        info!("Notes: {}", notes);
    }
    info!(
        "P = {}, M = {}, basis = {:?}, complex = {}",
        settings.order, settings.memory_depth, settings.basis, complex
    );

    let start = Instant::now();
    let report = if complex {
        run(&dataset, settings, true, SampleValue::to_complex, |c| {
            SampleValue::Complex([c.re, c.im])
        })?
    } else {
        run(&dataset, settings, false, SampleValue::to_real, |&v| {
            SampleValue::Real(v)
        })?
    };
    info!("Finished in {:?}", start.elapsed());

    let json = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Expand and fit on the extraction set, then expand, predict and score on the
/// validation set.
fn run<T>(
    dataset: &Dataset,
    settings: Settings,
    complex: bool,
    convert: fn(&SampleValue) -> T,
    back: fn(&T) -> SampleValue,
) -> Result<Report>
where
    T: Sample<RealField = f64>,
{
    let x: Vec<T> = dataset.extraction.input.iter().map(convert).collect();
    let y: Vec<T> = dataset.extraction.output.iter().map(convert).collect();
    info!("Extraction samples: {}", x.len());

    let model = Volterra::new()
        .order(settings.order)
        .memory_depth(settings.memory_depth)
        .basis(settings.basis.into())
        .parallel(settings.parallel)
        .return_diagnostics()
        .build()?;

    let fitted = model.fit(&x, &y).context("extraction fit failed")?;
    info!("Coefficients: {}", fitted.coefficients);
    debug!("\n{}", fitted);

    let training = fitted.diagnostics.as_ref().map(Metrics::from);
    if let Some(metrics) = &training {
        info!("Training NMSE: {:.4} dB", metrics.nmse_db);
    }

    let validation = match &dataset.validation {
        Some(pair) => {
            let x_val: Vec<T> = pair.input.iter().map(convert).collect();
            let y_val: Vec<T> = pair.output.iter().map(convert).collect();
            info!("Validation samples: {}", x_val.len());

            let scored = fitted
                .validate(&x_val, &y_val)
                .context("validation scoring failed")?;
            info!("Validation NMSE: {:.4} dB", scored.nmse_db);
            debug!("\n{}", scored);

            Some(ValidationMetrics {
                metrics: Metrics::from(&scored.diagnostics),
                amplitude: scored.amplitude.pairs().map(|(a, p)| [*a, *p]).collect(),
                reference: scored.amplitude.reference.map(|(lo, hi)| [lo, hi]),
            })
        }
        None => {
            warn!("Dataset has no validation set; reporting training metrics only");
            None
        }
    };

    Ok(Report {
        name: dataset.name.clone(),
        order: settings.order,
        memory_depth: settings.memory_depth,
        basis: settings.basis,
        complex,
        coefficients: fitted.coefficients.to_vec().iter().map(back).collect(),
        formatted: fitted.coefficients.to_string(),
        training,
        validation,
    })
}
