//! Applies a payment-modification scenario to an amortization schedule.
//!
//! Any principal injection perturbs every downstream row, so the applier
//! rebuilds the whole row sequence in a single forward pass: each row's
//! interest and scheduled principal are recomputed against the running
//! balance, extras already present in the input rows are carried over and
//! re-capped, and the scenario's own contribution is added where its
//! triggers fire. The schedule truncates at the row where the balance
//! reaches zero. The input schedule is never mutated.

use rust_decimal::Decimal;

use crate::amortization::model::{
    AmortizationRow, LoanScenario, Property, Schedule, ScenarioKind,
};
use crate::amortization::payment;

/// Overlay one scenario on a schedule.
///
/// Inactive scenarios are an identity: the input is returned as a structural
/// copy. The input may be the baseline or a schedule already modified by
/// earlier scenarios; carried extra and lump-sum amounts compound with this
/// scenario's own.
pub fn apply_scenario(
    schedule: &[AmortizationRow],
    scenario: &LoanScenario,
    property: &Property,
) -> Schedule {
    if !scenario.is_active {
        return schedule.to_vec();
    }

    let mut out = Vec::with_capacity(schedule.len());
    let mut balance = property.current_loan_balance;
    // A lump sum fires on the first row whose trigger matches, then never again.
    let mut lump_pending = matches!(scenario.kind, ScenarioKind::LumpSum { .. });

    for row in schedule {
        if balance <= Decimal::ZERO {
            break;
        }

        let split = payment::split_payment(
            balance,
            property.annual_interest_rate,
            property.monthly_payment,
        );

        if split.principal >= balance {
            // The fixed instalment alone closes the loan; nothing is left
            // for extras on this row.
            out.push(AmortizationRow {
                payment_number: row.payment_number,
                payment_date: row.payment_date,
                principal_payment: balance,
                interest_payment: split.interest,
                total_payment: balance + split.interest,
                extra_payment: Decimal::ZERO,
                lump_sum_payment: Decimal::ZERO,
                remaining_balance: Decimal::ZERO,
            });
            return out;
        }

        let after_scheduled = balance - split.principal;

        // Carry extras applied by earlier scenarios, then add this
        // scenario's contribution for the row.
        let mut extra = row.extra_payment;
        let mut lump = row.lump_sum_payment;
        match &scenario.kind {
            ScenarioKind::LumpSum { amount, trigger } => {
                if lump_pending && trigger.matches(row.payment_number, row.payment_date) {
                    lump += *amount;
                    lump_pending = false;
                }
            }
            ScenarioKind::ExtraMonthly {
                amount,
                start,
                end,
                duration_months,
            } => {
                let started = start.matches(row.payment_number, row.payment_date);
                // The end trigger is exclusive: the matching row itself no
                // longer receives the extra. A fixed duration counts from
                // payment 1 regardless of the start trigger.
                let ended = match (end, duration_months) {
                    (Some(t), _) => t.matches(row.payment_number, row.payment_date),
                    (None, Some(d)) => row.payment_number > *d,
                    (None, None) => false,
                };
                if started && !ended {
                    extra += *amount;
                }
            }
            ScenarioKind::MonthlyIncrease { amount, start, .. } => {
                // Applied as a flat instalment increase from the trigger
                // onward; see IncreaseFrequency for the `annually` caveat.
                if start.matches(row.payment_number, row.payment_date) {
                    extra += *amount;
                }
            }
            ScenarioKind::Combined => {}
        }

        // Neither extras nor lump sums may overpay the loan.
        if lump > after_scheduled {
            lump = after_scheduled;
        }
        let headroom = after_scheduled - lump;
        if extra > headroom {
            extra = headroom;
        }

        let principal = split.principal + extra + lump;
        let new_balance = after_scheduled - extra - lump;

        out.push(AmortizationRow {
            payment_number: row.payment_number,
            payment_date: row.payment_date,
            principal_payment: principal,
            interest_payment: split.interest,
            total_payment: split.interest + principal,
            extra_payment: extra,
            lump_sum_payment: lump,
            remaining_balance: new_balance,
        });

        if new_balance <= Decimal::ZERO {
            return out;
        }
        balance = new_balance;
    }

    out
}
