use crate::error::{AquaplanError, Result};
use serde::{Deserialize, Serialize};

/// One management zone's measurements for a single allocation cycle.
///
/// All four sub-scores are normalized upstream by the ingestion
/// collaborators (satellite NDVI, soil sensors, yield history) and must
/// arrive in [0, 1]:
/// - `yield_score`: historical productivity relative to the regional max
/// - `health_score`: normalized NDVI
/// - `moisture_score`: 1 - soil moisture deficit fraction
/// - `drought_risk_score`: climate vulnerability index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub id: String,
    pub yield_score: f64,
    pub health_score: f64,
    pub moisture_score: f64,
    pub drought_risk_score: f64,
    pub water_requirement_m3: f64,
}

impl FieldRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            yield_score: 0.0,
            health_score: 0.0,
            moisture_score: 0.0,
            drought_risk_score: 0.0,
            water_requirement_m3: 0.0,
        }
    }

    /// Check every sub-score against the [0, 1] contract.
    ///
    /// NaN fails the range check, so records that pass never poison a
    /// later sort or weighted sum.
    pub fn validate_scores(&self) -> Result<()> {
        for (attribute, value) in [
            ("yield_score", self.yield_score),
            ("health_score", self.health_score),
            ("moisture_score", self.moisture_score),
            ("drought_risk_score", self.drought_risk_score),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AquaplanError::InvalidScoreRange {
                    field_id: self.id.clone(),
                    attribute,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Check the irrigation demand is a usable quantity.
    pub fn validate_requirement(&self) -> Result<()> {
        if !self.water_requirement_m3.is_finite() || self.water_requirement_m3 < 0.0 {
            return Err(AquaplanError::InvalidAllocationInput(format!(
                "field {}: water_requirement_m3 is {}, expected a non-negative amount",
                self.id, self.water_requirement_m3
            )));
        }
        Ok(())
    }
}

/// A field together with its composite priority score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredField {
    #[serde(flatten)]
    pub field: FieldRecord,
    pub priority_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_field() -> FieldRecord {
        FieldRecord {
            id: "north_hills".into(),
            yield_score: 0.8,
            health_score: 0.68,
            moisture_score: 0.12,
            drought_risk_score: 0.85,
            water_requirement_m3: 1200.0,
        }
    }

    #[test]
    fn valid_field_passes_validation() {
        let field = valid_field();
        assert!(field.validate_scores().is_ok());
        assert!(field.validate_requirement().is_ok());
    }

    #[test]
    fn out_of_range_score_names_field_and_attribute() {
        let mut field = valid_field();
        field.health_score = 1.2;

        let err = field.validate_scores().unwrap_err();
        match err {
            AquaplanError::InvalidScoreRange {
                field_id,
                attribute,
                value,
            } => {
                assert_eq!(field_id, "north_hills");
                assert_eq!(attribute, "health_score");
                assert!((value - 1.2).abs() < 1e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_score_is_rejected() {
        let mut field = valid_field();
        field.moisture_score = f64::NAN;
        assert!(field.validate_scores().is_err());
    }

    #[test]
    fn negative_requirement_is_rejected() {
        let mut field = valid_field();
        field.water_requirement_m3 = -50.0;
        assert!(field.validate_requirement().is_err());
    }

    #[test]
    fn boundary_scores_are_accepted() {
        let mut field = valid_field();
        field.yield_score = 0.0;
        field.health_score = 1.0;
        assert!(field.validate_scores().is_ok());
    }
}
