use crate::config::ScoringWeights;
use crate::error::Result;
use crate::models::{FieldRecord, ScoredField};

/// Composite irrigation priority for one field.
///
/// Weighted sum of the four normalized sub-scores. Sub-scores are
/// range-checked here so an out-of-contract record fails before it can
/// influence the ranking. The caller is responsible for validating the
/// weights once per cycle.
pub fn priority_score(field: &FieldRecord, weights: &ScoringWeights) -> Result<f64> {
    field.validate_scores()?;

    Ok(weights.yield_weight * field.yield_score
        + weights.health_weight * field.health_score
        + weights.moisture_weight * field.moisture_score
        + weights.drought_risk_weight * field.drought_risk_score)
}

/// Score a field and pair it with the result.
pub fn score_field(field: FieldRecord, weights: &ScoringWeights) -> Result<ScoredField> {
    let priority_score = priority_score(&field, weights)?;
    Ok(ScoredField {
        field,
        priority_score,
    })
}
