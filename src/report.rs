use crate::models::{AllocationBatch, FieldWarning, StressLevel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Flat per-field record for JSON transport to the reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub field_id: String,
    pub priority_score: f64,
    pub allocated_water_m3: f64,
    pub water_requirement_m3: f64,
    pub stress_level: StressLevel,
}

/// Serializable summary of one allocation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub analysis_date: DateTime<Utc>,
    pub total_fields: usize,
    pub total_available_m3: f64,
    pub total_allocated_m3: f64,
    pub total_required_m3: f64,
    pub allocation_rate: f64,
    pub water_stress_count: usize,
    pub entries: Vec<ReportEntry>,
    pub excluded_fields: Vec<FieldWarning>,
}

impl AllocationReport {
    pub fn from_batch(batch: &AllocationBatch) -> Self {
        let entries = batch
            .entries
            .iter()
            .map(|e| ReportEntry {
                field_id: e.scored.field.id.clone(),
                priority_score: e.scored.priority_score,
                allocated_water_m3: e.allocated_water_m3,
                water_requirement_m3: e.scored.field.water_requirement_m3,
                stress_level: e.stress_level,
            })
            .collect();

        Self {
            analysis_date: Utc::now(),
            total_fields: batch.entries.len(),
            total_available_m3: batch.total_available_m3,
            total_allocated_m3: batch.total_allocated_m3(),
            total_required_m3: batch.total_required_m3(),
            allocation_rate: batch.allocation_rate,
            water_stress_count: batch.stressed_count(StressLevel::Medium),
            entries,
            excluded_fields: batch.warnings.clone(),
        }
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Ranked plain-text summary of a batch for console output.
pub fn render_summary(batch: &AllocationBatch) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Water status: {:.0} m3 available vs {:.0} m3 required ({:.1}% allocation rate)",
        batch.total_available_m3,
        batch.total_required_m3(),
        batch.allocation_rate * 100.0
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<20} {:>9} {:>12} {:>12} {:>8}",
        "Field", "Priority", "Required m3", "Allocated m3", "Stress"
    );

    for entry in &batch.entries {
        let _ = writeln!(
            out,
            "{:<20} {:>9.3} {:>12.1} {:>12.1} {:>8}",
            entry.scored.field.id,
            entry.scored.priority_score,
            entry.scored.field.water_requirement_m3,
            entry.allocated_water_m3,
            entry.stress_level.as_str()
        );
    }

    let stressed = batch.stressed_count(StressLevel::Medium);
    if stressed > 0 {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}/{} fields at medium or worse water stress",
            stressed,
            batch.entries.len()
        );
    }

    if !batch.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Excluded fields:");
        for warning in &batch.warnings {
            let _ = writeln!(out, "  {}: {}", warning.field_id, warning.reason);
        }
    }

    out
}
