//! Sequential composition of multiple scenarios onto one schedule.
//!
//! Scenarios are folded in the order the caller supplies them: each active
//! scenario is applied to the schedule produced by the previous one, so
//! interacting scenarios compound. Order dependence is deliberate API
//! behavior — callers control the order when scenarios can interact, e.g. a
//! lump sum landing after an extra-monthly window has already shortened the
//! schedule.

use crate::amortization::model::{AmortizationRow, LoanScenario, Property, Schedule, ScenarioKind};
use crate::amortization::scenario;

/// Fold all active scenarios onto a copy of the baseline, in order.
pub fn combine_scenarios(
    baseline: &[AmortizationRow],
    scenarios: &[LoanScenario],
    property: &Property,
) -> Schedule {
    let mut schedule = baseline.to_vec();
    for s in scenarios.iter().filter(|s| s.is_active) {
        schedule = scenario::apply_scenario(&schedule, s, property);
    }
    schedule
}

/// The synthetic scenario record attached to a combined result. Exists only
/// to satisfy the result shape; carries no per-type fields.
pub fn combined_scenario_record() -> LoanScenario {
    LoanScenario {
        id: 0,
        name: Some("Combined Scenarios".to_string()),
        is_active: true,
        kind: ScenarioKind::Combined,
    }
}
