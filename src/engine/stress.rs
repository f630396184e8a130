use crate::config::StressThresholds;
use crate::models::{shortfall_ratio, FieldRecord, StressLevel};

/// Classify a field's water stress after allocation.
///
/// Severity combines how dry the field already is (`moisture_score`)
/// with how much of its demand went unmet this cycle. A fully served
/// field with adequate moisture is unstressed; a dry field that
/// received less than half its requirement is in high stress.
pub fn classify(
    field: &FieldRecord,
    allocated_water_m3: f64,
    thresholds: &StressThresholds,
) -> StressLevel {
    let shortfall = shortfall_ratio(allocated_water_m3, field.water_requirement_m3);

    if field.moisture_score < thresholds.high_moisture && shortfall > thresholds.high_shortfall {
        StressLevel::High
    } else if field.moisture_score < thresholds.medium_moisture
        && shortfall > thresholds.medium_shortfall
    {
        StressLevel::Medium
    } else if shortfall > 0.0 || field.moisture_score < thresholds.low_moisture {
        StressLevel::Low
    } else {
        StressLevel::None
    }
}
