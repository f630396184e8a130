use super::field::ScoredField;
use serde::{Deserialize, Serialize};

/// Post-allocation water stress classification for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    None,
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::None => "none",
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field excluded from the cycle, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWarning {
    pub field_id: String,
    pub reason: String,
}

impl FieldWarning {
    pub fn new(field_id: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self {
            field_id: field_id.into(),
            reason: reason.to_string(),
        }
    }
}

/// One line of the allocation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    #[serde(flatten)]
    pub scored: ScoredField,
    pub allocated_water_m3: f64,
    pub stress_level: StressLevel,
}

impl AllocationEntry {
    /// Fraction of this field's requirement left unmet, 0 when the
    /// field required nothing.
    pub fn shortfall_ratio(&self) -> f64 {
        shortfall_ratio(
            self.allocated_water_m3,
            self.scored.field.water_requirement_m3,
        )
    }
}

pub fn shortfall_ratio(allocated_water_m3: f64, water_requirement_m3: f64) -> f64 {
    if water_requirement_m3 <= 0.0 {
        0.0
    } else {
        1.0 - allocated_water_m3 / water_requirement_m3
    }
}

/// The result of one allocation cycle: entries in irrigation order,
/// plus the fields that had to be excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationBatch {
    pub total_available_m3: f64,
    pub entries: Vec<AllocationEntry>,
    pub warnings: Vec<FieldWarning>,
    pub allocation_rate: f64,
}

impl AllocationBatch {
    pub fn new(
        total_available_m3: f64,
        entries: Vec<AllocationEntry>,
        warnings: Vec<FieldWarning>,
    ) -> Self {
        let allocated: f64 = entries.iter().map(|e| e.allocated_water_m3).sum();
        let required: f64 = entries
            .iter()
            .map(|e| e.scored.field.water_requirement_m3)
            .sum();
        let allocation_rate = if required > 0.0 {
            allocated / required
        } else {
            0.0
        };

        Self {
            total_available_m3,
            entries,
            warnings,
            allocation_rate,
        }
    }

    pub fn total_allocated_m3(&self) -> f64 {
        self.entries.iter().map(|e| e.allocated_water_m3).sum()
    }

    pub fn total_required_m3(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.scored.field.water_requirement_m3)
            .sum()
    }

    /// Count of fields classified at or above the given stress level.
    pub fn stressed_count(&self, at_least: StressLevel) -> usize {
        self.entries
            .iter()
            .filter(|e| e.stress_level >= at_least)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldRecord;

    fn entry(id: &str, requirement: f64, allocated: f64) -> AllocationEntry {
        let mut field = FieldRecord::new(id);
        field.water_requirement_m3 = requirement;
        AllocationEntry {
            scored: ScoredField {
                field,
                priority_score: 0.5,
            },
            allocated_water_m3: allocated,
            stress_level: StressLevel::None,
        }
    }

    #[test]
    fn allocation_rate_is_allocated_over_required() {
        let batch = AllocationBatch::new(
            250.0,
            vec![entry("a", 100.0, 100.0), entry("b", 150.0, 150.0), entry("c", 200.0, 0.0)],
            Vec::new(),
        );
        assert!((batch.allocation_rate - 250.0 / 450.0).abs() < 1e-9);
        assert!((batch.total_allocated_m3() - 250.0).abs() < 1e-9);
        assert!((batch.total_required_m3() - 450.0).abs() < 1e-9);
    }

    #[test]
    fn allocation_rate_zero_when_nothing_required() {
        let batch = AllocationBatch::new(100.0, vec![entry("a", 0.0, 0.0)], Vec::new());
        assert_eq!(batch.allocation_rate, 0.0);
    }

    #[test]
    fn shortfall_ratio_zero_for_zero_requirement() {
        assert_eq!(shortfall_ratio(0.0, 0.0), 0.0);
        assert!((shortfall_ratio(20.0, 100.0) - 0.8).abs() < 1e-9);
        assert_eq!(shortfall_ratio(100.0, 100.0), 0.0);
    }

    #[test]
    fn stress_levels_order_by_severity() {
        assert!(StressLevel::High > StressLevel::Medium);
        assert!(StressLevel::Medium > StressLevel::Low);
        assert!(StressLevel::Low > StressLevel::None);
    }

    #[test]
    fn stressed_count_uses_severity_floor() {
        let mut entries = vec![entry("a", 100.0, 100.0), entry("b", 100.0, 10.0), entry("c", 100.0, 0.0)];
        entries[1].stress_level = StressLevel::Medium;
        entries[2].stress_level = StressLevel::High;
        let batch = AllocationBatch::new(110.0, entries, Vec::new());

        assert_eq!(batch.stressed_count(StressLevel::Medium), 2);
        assert_eq!(batch.stressed_count(StressLevel::High), 1);
        assert_eq!(batch.stressed_count(StressLevel::None), 3);
    }

    #[test]
    fn stress_level_display() {
        assert_eq!(StressLevel::None.as_str(), "none");
        assert_eq!(StressLevel::High.as_str(), "high");
        assert_eq!(format!("{}", StressLevel::Medium), "medium");
    }
}
