use thiserror::Error;

/// Feil fra konstruksjon av en økt eller innlesing av pakker.
#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("unrecognized workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("invalid argument count for {code}: expected {expected} readings, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid measurement: {field} = {value}")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("failed to read session input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed session input at {}: {}", .0.path(), .0.inner())]
    Json(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("unexpected data after package list: {0}")]
    TrailingInput(serde_json::Error),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl WorkoutError {
    /// Kort navn på feiltypen, brukt i logg og JSON-utdata.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_workout_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::InvalidMeasurement { .. } => "invalid_measurement",
            WorkoutError::Io(_) => "io",
            WorkoutError::Json(_) | WorkoutError::TrailingInput(_) => "json",
            WorkoutError::Encode(_) => "encode",
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
