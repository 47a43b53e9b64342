use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkoutError};

/// Én sensorpakke: kode + målinger i fast rekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Innebygde eksempelpakker (brukes når ingen fil er oppgitt).
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Leser en JSON-liste med pakker fra disk.
///
/// Formatet er `[{"workout_type": "RUN", "data": [15000, 1, 75]}, ...]`.
/// Parse-feil rapporteres med sti til feltet (f.eks. `[1].data[2]`).
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let packages = parse_packages(&contents)?;
    debug!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

pub fn parse_packages(json: &str) -> Result<Vec<Package>> {
    let mut de = serde_json::Deserializer::from_str(json);
    let packages: Vec<Package> = serde_path_to_error::deserialize(&mut de)?;
    // kun mellomrom er lov etter lista
    de.end().map_err(WorkoutError::TrailingInput)?;
    Ok(packages)
}
