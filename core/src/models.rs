use crate::error::{Result, WorkoutError};

/// Felles grunnlag for alle økter: antall handlinger (steg/tak),
/// varighet i timer og vekt i kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action: u32,      // steg eller svømmetak
    duration_h: f64,  // timer, > 0
    weight_kg: f64,   // kg, > 0
}

impl Training {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action: non_negative_count("action", action)?,
            duration_h: positive("duration", duration_h)?,
            weight_kg: positive("weight", weight_kg)?,
        })
    }

    #[inline]
    pub fn action(&self) -> u32 {
        self.action
    }

    #[inline]
    pub fn duration_h(&self) -> f64 {
        self.duration_h
    }

    #[inline]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Varighet i minutter (brukes i kaloriformlene).
    #[inline]
    pub fn duration_min(&self) -> f64 {
        self.duration_h * crate::physics::MINUTES_IN_HOUR
    }
}

/// Løping – ingen ekstra felt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub(crate) base: Training,
}

impl Running {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: Training::new(action, duration_h, weight_kg)?,
        })
    }
}

/// Sportsgange – trenger høyde (cm) i tillegg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub(crate) base: Training,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: f64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        Ok(Self {
            base: Training::new(action, duration_h, weight_kg)?,
            height_cm: positive("height", height_cm)?,
        })
    }

    #[inline]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// Svømming – bassenglengde (m) og antall bassenglengder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub(crate) base: Training,
    length_pool_m: f64,
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Result<Self> {
        let base = Training::new(action, duration_h, weight_kg)?;
        let length_pool_m = positive("length_pool", length_pool_m)?;
        let count_pool = non_negative_count("count_pool", count_pool)?;
        if count_pool == 0 {
            return Err(WorkoutError::InvalidMeasurement {
                field: "count_pool",
                value: 0.0,
            });
        }
        Ok(Self {
            base,
            length_pool_m,
            count_pool,
        })
    }

    #[inline]
    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    #[inline]
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Validering
// ──────────────────────────────────────────────────────────────────────────────

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidMeasurement { field, value })
    }
}

/// Heltall >= 0 som passer i u32 (steg, tak, bassenglengder).
fn non_negative_count(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidMeasurement { field, value })
    }
}
