use super::{allocation, scoring, stress};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{AllocationBatch, AllocationEntry, FieldRecord, FieldWarning};

/// Runs one full allocation cycle: score, rank, allocate, classify.
///
/// Holds an immutable configuration, so concurrent cycles with
/// different calibrations never interfere. Carries no state between
/// runs; every call takes a fresh snapshot and returns a fresh batch.
pub struct Planner {
    config: EngineConfig,
}

impl Planner {
    /// Configuration problems (bad weights, bad thresholds) invalidate
    /// every derived score, so they fail construction rather than
    /// surfacing mid-cycle.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the allocation plan for one snapshot.
    ///
    /// A field that fails validation is excluded and recorded as a
    /// warning on the batch; the rest of the snapshot still goes
    /// through. Only a bad budget aborts the cycle.
    pub fn run(&self, fields: &[FieldRecord], total_available_m3: f64) -> Result<AllocationBatch> {
        let mut scored = Vec::with_capacity(fields.len());
        let mut warnings = Vec::new();

        for field in fields {
            let validated = field
                .validate_requirement()
                .and_then(|_| scoring::score_field(field.clone(), &self.config.weights));
            match validated {
                Ok(s) => scored.push(s),
                Err(e) => {
                    tracing::warn!("Excluding field {}: {}", field.id, e);
                    warnings.push(FieldWarning::new(&field.id, e));
                }
            }
        }

        let allocations = allocation::allocate(scored, total_available_m3)?;

        let entries = allocations
            .into_iter()
            .map(|(scored, allocated_water_m3)| {
                let stress_level =
                    stress::classify(&scored.field, allocated_water_m3, &self.config.stress);
                AllocationEntry {
                    scored,
                    allocated_water_m3,
                    stress_level,
                }
            })
            .collect();

        Ok(AllocationBatch::new(total_available_m3, entries, warnings))
    }
}
