use std::io::Write;

use log::{debug, info, warn};

use crate::dispatch::read_package;
use crate::error::{Result, WorkoutError};
use crate::metrics::MetricsRecord;
use crate::storage::Package;

/// Hva som skjer når en pakke ikke kan bygges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Logg, noter feilen og fortsett med neste pakke.
    #[default]
    Continue,
    /// Stopp ved første feil.
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// Ett JSON-objekt per linje.
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub policy: ErrorPolicy,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub struct Failure {
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}

#[derive(Debug, Default)]
pub struct SessionOutcome {
    pub written: usize,
    pub failures: Vec<Failure>,
}

impl SessionOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Dispatch → beregning → formatering for én pakke.
pub fn summarize(package: &Package) -> Result<MetricsRecord> {
    let workout = read_package(&package.workout_type, &package.data)?;
    let record = workout.summary();
    debug!(
        "{}: distance={:.3} km speed={:.3} km/h calories={:.3}",
        record.training_type(),
        record.distance(),
        record.speed(),
        record.calories()
    );
    Ok(record)
}

pub fn render(record: &MetricsRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(record.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&record.to_json())?),
    }
}

/// Kjører alle pakkene i rekkefølge og skriver én linje per vellykket pakke.
pub fn run_session<W: Write>(
    packages: &[Package],
    opts: SessionOptions,
    out: &mut W,
) -> Result<SessionOutcome> {
    let mut outcome = SessionOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match summarize(package) {
            Ok(record) => {
                writeln!(out, "{}", render(&record, opts.format)?)?;
                outcome.written += 1;
            }
            Err(error) if opts.policy == ErrorPolicy::Halt => {
                warn!("package #{index} ({}) rejected, halting: {error}", package.workout_type);
                return Err(error);
            }
            Err(error) => {
                warn!("package #{index} ({}) skipped: {error}", package.workout_type);
                outcome.failures.push(Failure {
                    index,
                    workout_type: package.workout_type.clone(),
                    error,
                });
            }
        }
    }

    info!(
        "session done: {} written, {} rejected",
        outcome.written,
        outcome.failures.len()
    );
    Ok(outcome)
}
