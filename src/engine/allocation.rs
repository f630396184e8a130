use crate::error::{AquaplanError, Result};
use crate::models::ScoredField;
use std::cmp::Ordering;

/// Order fields for the allocation walk: highest priority first, ties
/// going to the smaller demand so equal-priority small fields are fully
/// served before large ones, remaining ties by id for a total order.
pub fn rank(fields: &mut [ScoredField]) {
    fields.sort_by(compare_priority);
}

fn compare_priority(a: &ScoredField, b: &ScoredField) -> Ordering {
    b.priority_score
        .total_cmp(&a.priority_score)
        .then_with(|| {
            a.field
                .water_requirement_m3
                .total_cmp(&b.field.water_requirement_m3)
        })
        .then_with(|| a.field.id.cmp(&b.field.id))
}

/// Distribute the water budget over ranked fields in a single greedy
/// pass. Each field is either fully served or receives exactly what is
/// left (possibly nothing); once the budget is spent, every remaining
/// field gets zero. Higher-priority fields are saturated before any
/// lower-priority field is touched; there is no retroactive rebalancing.
///
/// Fields must already carry validated, non-negative requirements.
pub fn allocate(
    mut fields: Vec<ScoredField>,
    total_available_m3: f64,
) -> Result<Vec<(ScoredField, f64)>> {
    if !total_available_m3.is_finite() || total_available_m3 < 0.0 {
        return Err(AquaplanError::InvalidAllocationInput(format!(
            "total_available_m3 is {}, expected a non-negative amount",
            total_available_m3
        )));
    }

    rank(&mut fields);

    let mut remaining_budget = total_available_m3;
    let mut allocations = Vec::with_capacity(fields.len());

    for scored in fields {
        let requirement = scored.field.water_requirement_m3;
        let allocated = if remaining_budget >= requirement {
            remaining_budget -= requirement;
            requirement
        } else {
            let rest = remaining_budget;
            remaining_budget = 0.0;
            rest
        };
        allocations.push((scored, allocated));
    }

    Ok(allocations)
}
