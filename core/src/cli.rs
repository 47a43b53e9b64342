use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use crate::session::{run_session, ErrorPolicy, OutputFormat, SessionOptions};
use crate::storage::{load_packages, sample_packages};

#[derive(Parser, Debug)]
#[command(
    name = "workout-tracker",
    about = "Distance, speed and calories for running, walking and swimming sessions",
    long_about = "Reads workout packages (code + readings) and prints one summary line per package. \
                  Without --input the built-in sample packages are used."
)]
pub struct Args {
    /// JSON file with packages: [{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,

    /// Stop at the first rejected package instead of skipping it
    #[arg(long)]
    pub halt_on_error: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            policy: if self.halt_on_error { ErrorPolicy::Halt } else { ErrorPolicy::Continue },
            format: self.format.into(),
        }
    }
}

/// Kjører en hel økt-rapport til `out`. Avvist pakke gir feil (exit != 0),
/// men først etter at resten er skrevet ut (med mindre --halt-on-error).
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let packages = match &args.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("could not load packages from {}", path.display()))?,
        None => sample_packages(),
    };

    let outcome = run_session(&packages, args.session_options(), out)?;
    out.flush()?;

    if !outcome.is_clean() {
        for f in &outcome.failures {
            eprintln!("#{} {} [{}]: {}", f.index, f.workout_type, f.error.kind(), f.error);
        }
        bail!("{} of {} packages rejected", outcome.failures.len(), packages.len());
    }
    Ok(())
}
