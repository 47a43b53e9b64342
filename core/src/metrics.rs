use std::fmt;

use serde::Serialize;

use crate::physics::RoundTo;

/// Ferdig beregnet resultat for én økt. Opprettes kun fra en variant
/// (se `Workout::summary`) og endres aldri.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRecord {
    training_type: &'static str,
    duration: f64, // timer
    distance: f64, // km
    speed: f64,    // km/t
    calories: f64, // kcal
}

/// JSON-visning, tall avrundet til 3 desimaler.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsJson {
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl MetricsRecord {
    pub(crate) fn new(
        training_type: &'static str,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self { training_type, duration, distance, speed, calories }
    }

    pub fn training_type(&self) -> &'static str {
        self.training_type
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn to_json(&self) -> MetricsJson {
        MetricsJson {
            training_type: self.training_type,
            duration: self.duration.round_to(3),
            distance: self.distance.round_to(3),
            speed: self.speed.round_to(3),
            calories: self.calories.round_to(3),
        }
    }
}

/// Tekstlinjen som skrives ut per økt.
impl fmt::Display for MetricsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
