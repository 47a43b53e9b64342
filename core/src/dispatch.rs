use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WorkoutError};
use crate::models::{Running, SportsWalking, Swimming};
use crate::physics::AnyWorkout;

/// Tre-bokstavskoden fra sensorpakken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swm,
    Run,
    Wlk,
}

impl WorkoutCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutCode::Swm => "SWM",
            WorkoutCode::Run => "RUN",
            WorkoutCode::Wlk => "WLK",
        }
    }

    /// Antall målinger varianten krever, i rekkefølge.
    pub fn arity(self) -> usize {
        match self {
            WorkoutCode::Run => 3, // action, duration, weight
            WorkoutCode::Wlk => 4, // + height
            WorkoutCode::Swm => 5, // + length_pool, count_pool
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SWM" => Ok(WorkoutCode::Swm),
            "RUN" => Ok(WorkoutCode::Run),
            "WLK" => Ok(WorkoutCode::Wlk),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bygger riktig variant fra kode + målinger.
///
/// Feil antall målinger gir `ArityMismatch`; ingenting kuttes eller fylles ut.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<AnyWorkout> {
    let code: WorkoutCode = workout_type.parse()?;
    let workout: AnyWorkout = match (code, data) {
        (WorkoutCode::Run, &[action, duration, weight]) => {
            Running::new(action, duration, weight)?.into()
        }
        (WorkoutCode::Wlk, &[action, duration, weight, height]) => {
            SportsWalking::new(action, duration, weight, height)?.into()
        }
        (WorkoutCode::Swm, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(action, duration, weight, length_pool, count_pool)?.into()
        }
        _ => {
            return Err(WorkoutError::ArityMismatch {
                code: code.as_str(),
                expected: code.arity(),
                got: data.len(),
            })
        }
    };
    Ok(workout)
}
