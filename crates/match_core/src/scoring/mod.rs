pub mod heuristic;
pub mod model;
pub mod schedule;
pub mod types;

pub use heuristic::HeuristicModel;
pub use model::ConfidenceModel;
pub use schedule::{FixedSchedule, RandomizedSchedule, ScheduleCompatibility};
pub use types::ConfidenceBreakdown;
