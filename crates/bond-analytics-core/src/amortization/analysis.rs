//! Comparative savings analysis and top-level orchestration.
//!
//! `summarize` diffs a modified schedule against the baseline;
//! `generate_property_analysis` is the engine's entry point, producing the
//! full [`PropertyAnalysis`] consumed by presentation layers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::time::Instant;

use crate::amortization::model::{
    AmortizationRow, IncreaseFrequency, LoanScenario, Property, PropertyAnalysis, Schedule,
    ScenarioKind, ScenarioResult,
};
use crate::amortization::{baseline, combine, scenario};
use crate::error::BondAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::BondAnalyticsResult;

/// Diff a modified schedule against the baseline for one scenario.
///
/// Pure arithmetic; empty schedules yield zero-valued savings and `None`
/// payoff dates rather than panicking.
pub fn summarize(
    baseline: &[AmortizationRow],
    modified: Schedule,
    scenario: &LoanScenario,
) -> ScenarioResult {
    let baseline_interest: Money = baseline.iter().map(|r| r.interest_payment).sum();
    let modified_interest: Money = modified.iter().map(|r| r.interest_payment).sum();
    let baseline_total: Money = baseline.iter().map(|r| r.total_payment).sum();
    let modified_total: Money = modified.iter().map(|r| r.total_payment).sum();

    ScenarioResult {
        scenario: scenario.clone(),
        total_interest_saved: baseline_interest - modified_interest,
        months_saved: (baseline.len() as u32).saturating_sub(modified.len() as u32),
        original_payoff_date: baseline.last().map(|r| r.payment_date),
        new_payoff_date: modified.last().map(|r| r.payment_date),
        total_amount_paid: modified_total,
        baseline_total_paid: baseline_total,
        schedule: modified,
    }
}

/// Build the full analysis for a property and its scenarios.
///
/// The baseline is built once. Each active scenario is applied to the
/// baseline independently — the individual branches are not cumulative. When
/// two or more scenarios are active, a combined projection folds them all
/// onto the baseline in list order and is reported under a synthetic
/// "Combined Scenarios" record. `as_of` anchors the projection at the next
/// payment due; passing it explicitly keeps the engine a pure function.
pub fn generate_property_analysis(
    property: &Property,
    scenarios: &[LoanScenario],
    as_of: NaiveDate,
) -> BondAnalyticsResult<ComputationOutput<PropertyAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_property(property)?;

    let baseline_schedule = baseline::build_schedule(property, as_of)?;
    if let Some(last) = baseline_schedule.last() {
        if last.remaining_balance > Decimal::ZERO {
            warnings.push(format!(
                "Monthly payment {} does not amortize the loan within the remaining term; {} remains after the final payment",
                property.monthly_payment, last.remaining_balance
            ));
        }
    }

    let active: Vec<&LoanScenario> = scenarios.iter().filter(|s| s.is_active).collect();

    let mut scenario_results = Vec::with_capacity(active.len());
    for s in &active {
        if let ScenarioKind::MonthlyIncrease {
            frequency: IncreaseFrequency::Annually,
            ..
        } = s.kind
        {
            warnings.push(format!(
                "Scenario {}: 'annually' increase frequency is applied as a fixed increase from the trigger onward",
                s.id
            ));
        }
        let modified = scenario::apply_scenario(&baseline_schedule, s, property);
        scenario_results.push(summarize(&baseline_schedule, modified, s));
    }

    let combined_result = if active.len() > 1 {
        let combined = combine::combine_scenarios(&baseline_schedule, scenarios, property);
        Some(summarize(
            &baseline_schedule,
            combined,
            &combine::combined_scenario_record(),
        ))
    } else {
        None
    };

    let analysis = PropertyAnalysis {
        property: property.clone(),
        baseline_schedule,
        scenario_results,
        combined_result,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization Projection with Scenario Overlay",
        &(property, scenarios),
        warnings,
        elapsed,
        analysis,
    ))
}

fn validate_property(property: &Property) -> BondAnalyticsResult<()> {
    if property.current_loan_balance < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "current_loan_balance".into(),
            reason: "Loan balance cannot be negative".into(),
        });
    }
    if property.annual_interest_rate < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "annual_interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if property.monthly_payment < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "monthly_payment".into(),
            reason: "Monthly payment cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::model::Trigger;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn standard_property() -> Property {
        Property {
            current_loan_balance: dec!(900_000),
            annual_interest_rate: dec!(11.25),
            monthly_payment: dec!(9450),
            remaining_term_months: 240,
            loan_start_date: date(2024, 3, 1),
        }
    }

    fn extra_monthly(id: u64, amount: Decimal, active: bool) -> LoanScenario {
        LoanScenario {
            id,
            name: None,
            is_active: active,
            kind: ScenarioKind::ExtraMonthly {
                amount,
                start: Trigger::PaymentNumber(1),
                end: None,
                duration_months: None,
            },
        }
    }

    // -----------------------------------------------------------------------
    // 1. No active scenarios: empty results, no combined branch
    // -----------------------------------------------------------------------
    #[test]
    fn test_no_active_scenarios() {
        let property = standard_property();
        let scenarios = vec![extra_monthly(1, dec!(1_000), false)];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();

        assert!(output.result.scenario_results.is_empty());
        assert!(output.result.combined_result.is_none());
        assert!(!output.result.baseline_schedule.is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. One active scenario: one result, still no combined branch
    // -----------------------------------------------------------------------
    #[test]
    fn test_single_active_scenario_no_combined() {
        let property = standard_property();
        let scenarios = vec![extra_monthly(1, dec!(1_000), true)];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();

        assert_eq!(output.result.scenario_results.len(), 1);
        assert!(output.result.combined_result.is_none());
    }

    // -----------------------------------------------------------------------
    // 3. Two active scenarios add a combined result with the synthetic record
    // -----------------------------------------------------------------------
    #[test]
    fn test_combined_result_present_with_two_active() {
        let property = standard_property();
        let scenarios = vec![
            extra_monthly(1, dec!(500), true),
            LoanScenario {
                id: 2,
                name: None,
                is_active: true,
                kind: ScenarioKind::LumpSum {
                    amount: dec!(30_000),
                    trigger: Trigger::PaymentNumber(12),
                },
            },
        ];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();

        let combined = output.result.combined_result.as_ref().unwrap();
        assert!(matches!(combined.scenario.kind, ScenarioKind::Combined));
        let best_individual = output
            .result
            .scenario_results
            .iter()
            .map(|r| r.months_saved)
            .max()
            .unwrap();
        assert!(combined.months_saved >= best_individual);
    }

    // -----------------------------------------------------------------------
    // 4. Summary arithmetic: savings are positive and dates consistent
    // -----------------------------------------------------------------------
    #[test]
    fn test_summary_savings_positive() {
        let property = standard_property();
        let scenarios = vec![extra_monthly(1, dec!(1_000), true)];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();

        let result = &output.result.scenario_results[0];
        assert!(result.total_interest_saved > Decimal::ZERO);
        assert!(result.months_saved > 0);
        assert!(result.new_payoff_date.unwrap() < result.original_payoff_date.unwrap());
        assert!(result.total_amount_paid < result.baseline_total_paid);
    }

    // -----------------------------------------------------------------------
    // 5. Empty baseline: zero-valued summary, no panic
    // -----------------------------------------------------------------------
    #[test]
    fn test_empty_baseline_zero_results() {
        let property = Property {
            remaining_term_months: 0,
            ..standard_property()
        };
        let scenarios = vec![extra_monthly(1, dec!(1_000), true)];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();

        let result = &output.result.scenario_results[0];
        assert_eq!(result.total_interest_saved, Decimal::ZERO);
        assert_eq!(result.months_saved, 0);
        assert!(result.original_payoff_date.is_none());
        assert!(result.new_payoff_date.is_none());
    }

    // -----------------------------------------------------------------------
    // 6. Validation rejects negative balance and rate
    // -----------------------------------------------------------------------
    #[test]
    fn test_validation_rejects_negative_inputs() {
        let negative_balance = Property {
            current_loan_balance: dec!(-1),
            ..standard_property()
        };
        assert!(generate_property_analysis(&negative_balance, &[], date(2026, 3, 15)).is_err());

        let negative_rate = Property {
            annual_interest_rate: dec!(-0.5),
            ..standard_property()
        };
        assert!(generate_property_analysis(&negative_rate, &[], date(2026, 3, 15)).is_err());
    }

    // -----------------------------------------------------------------------
    // 7. The 'annually' frequency caveat surfaces as a warning
    // -----------------------------------------------------------------------
    #[test]
    fn test_annually_frequency_warns() {
        let property = standard_property();
        let scenarios = vec![LoanScenario {
            id: 9,
            name: None,
            is_active: true,
            kind: ScenarioKind::MonthlyIncrease {
                amount: dec!(250),
                start: Trigger::PaymentNumber(1),
                frequency: IncreaseFrequency::Annually,
            },
        }];
        let output =
            generate_property_analysis(&property, &scenarios, date(2026, 3, 15)).unwrap();
        assert!(output.warnings.iter().any(|w| w.contains("annually")));
    }

    // -----------------------------------------------------------------------
    // 8. Non-amortizing payment surfaces as a warning, not an error
    // -----------------------------------------------------------------------
    #[test]
    fn test_non_amortizing_payment_warns() {
        let property = Property {
            monthly_payment: dec!(100),
            ..standard_property()
        };
        let output = generate_property_analysis(&property, &[], date(2026, 3, 15)).unwrap();
        assert!(!output.warnings.is_empty());
        assert_eq!(
            output.result.baseline_schedule.len(),
            property.remaining_term_months as usize
        );
    }
}
