pub mod cli;
pub mod dispatch;
pub mod error;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod session;
pub mod storage;

#[cfg(feature = "python")]
mod py;

pub use dispatch::{read_package, WorkoutCode};
pub use error::WorkoutError;
pub use metrics::{MetricsJson, MetricsRecord};
pub use models::{Running, SportsWalking, Swimming, Training};
pub use physics::{AnyWorkout, RoundTo, Workout};
pub use session::{run_session, summarize, ErrorPolicy, OutputFormat, SessionOptions, SessionOutcome};
pub use storage::{load_packages, parse_packages, sample_packages, Package};
