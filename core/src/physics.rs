// core/src/physics.rs
use crate::metrics::MetricsRecord;
use crate::models::{Running, SportsWalking, Swimming, Training};

pub const M_IN_KM: f64 = 1000.0;        // meter per km
pub const MINUTES_IN_HOUR: f64 = 60.0;  // minutter per time

// --- RoundTo trait (offentlig, brukt av metrics.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Felles formelsett for en økt.
///
/// `spent_calories` har ingen standardkropp: hver variant må levere sin egen,
/// og `Training` alene implementerer ikke traitet.
pub trait Workout {
    /// Navn på økttypen (brukes som etikett i meldingen).
    const NAME: &'static str;
    /// Meter per handling (steg eller tak).
    const LEN_STEP: f64 = 0.65;

    fn base(&self) -> &Training;

    /// Distanse i km.
    fn distance(&self) -> f64 {
        self.base().action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Snittfart i km/t over hele økten.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_h()
    }

    /// Forbrente kcal.
    fn spent_calories(&self) -> f64;

    fn summary(&self) -> MetricsRecord {
        MetricsRecord::new(
            Self::NAME,
            self.base().duration_h(),
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Løping
// ──────────────────────────────────────────────────────────────────────────────

impl Running {
    pub const COEFF_CALORIE_1: f64 = 18.0;
    pub const COEFF_CALORIE_2: f64 = 20.0;
}

impl Workout for Running {
    const NAME: &'static str = "Running";

    fn base(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        (Self::COEFF_CALORIE_1 * self.mean_speed() - Self::COEFF_CALORIE_2)
            * b.weight_kg()
            / M_IN_KM
            * b.duration_min()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Sportsgange
// ──────────────────────────────────────────────────────────────────────────────

impl SportsWalking {
    pub const COEFF_CALORIE_1: f64 = 0.035;
    pub const COEFF_CALORIE_2: f64 = 0.029;
}

impl Workout for SportsWalking {
    const NAME: &'static str = "SportsWalking";

    fn base(&self) -> &Training {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        // Heltallsdivisjon (gulv) av fart² på høyde – skal være slik.
        let speed_term = self.mean_speed().powi(2).div_euclid(self.height_cm());
        (Self::COEFF_CALORIE_1 * b.weight_kg()
            + speed_term * Self::COEFF_CALORIE_2 * b.weight_kg())
            * b.duration_min()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Svømming
// ──────────────────────────────────────────────────────────────────────────────

impl Swimming {
    pub const COEFF_CALORIE_1: f64 = 1.1;
    pub const COEFF_CALORIE_2: f64 = 2.0;
}

impl Workout for Swimming {
    const NAME: &'static str = "Swimming";
    const LEN_STEP: f64 = 1.38; // ett svømmetak

    fn base(&self) -> &Training {
        &self.base
    }

    /// Fart fra bassenglengder, ikke fra antall tak.
    fn mean_speed(&self) -> f64 {
        self.length_pool_m() * self.count_pool() as f64 / M_IN_KM / self.base.duration_h()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::COEFF_CALORIE_1) * Self::COEFF_CALORIE_2 * self.base.weight_kg()
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Lukket sumtype over de tre øktene
// ──────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyWorkout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_workout {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            AnyWorkout::Running($w) => $body,
            AnyWorkout::SportsWalking($w) => $body,
            AnyWorkout::Swimming($w) => $body,
        }
    };
}

impl AnyWorkout {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyWorkout::Running(_) => Running::NAME,
            AnyWorkout::SportsWalking(_) => SportsWalking::NAME,
            AnyWorkout::Swimming(_) => Swimming::NAME,
        }
    }

    pub fn base(&self) -> &Training {
        each_workout!(self, w => w.base())
    }

    pub fn distance(&self) -> f64 {
        each_workout!(self, w => w.distance())
    }

    pub fn mean_speed(&self) -> f64 {
        each_workout!(self, w => w.mean_speed())
    }

    pub fn spent_calories(&self) -> f64 {
        each_workout!(self, w => w.spent_calories())
    }

    pub fn summary(&self) -> MetricsRecord {
        each_workout!(self, w => w.summary())
    }
}

impl From<Running> for AnyWorkout {
    fn from(w: Running) -> Self {
        AnyWorkout::Running(w)
    }
}

impl From<SportsWalking> for AnyWorkout {
    fn from(w: SportsWalking) -> Self {
        AnyWorkout::SportsWalking(w)
    }
}

impl From<Swimming> for AnyWorkout {
    fn from(w: Swimming) -> Self {
        AnyWorkout::Swimming(w)
    }
}
