pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod snapshot;

pub use config::{EngineConfig, ScoringWeights, StressThresholds};
pub use engine::Planner;
pub use error::{AquaplanError, Result};
pub use models::{
    AllocationBatch, AllocationEntry, FieldRecord, FieldWarning, ScoredField, StressLevel,
};
pub use report::AllocationReport;
