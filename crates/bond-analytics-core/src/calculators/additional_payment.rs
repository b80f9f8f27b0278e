//! Additional-payment calculator: effect of a fixed extra monthly amount on
//! an amortizing loan's payoff time and lifetime interest.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment;
use crate::error::BondAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent};
use crate::BondAnalyticsResult;

/// Additional-payment input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalPaymentInput {
    /// Outstanding loan balance.
    pub loan_amount: Money,
    /// Annual interest rate in percent.
    pub annual_interest_rate: RatePercent,
    /// Remaining term in months.
    pub term_months: u32,
    /// Extra amount paid on top of the instalment every month.
    pub extra_monthly: Money,
}

/// Additional-payment output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalPaymentOutput {
    /// Standard instalment for the loan, before the extra.
    pub monthly_instalment: Money,
    pub original_term_months: u32,
    pub new_term_months: u32,
    pub months_saved: u32,
    pub total_interest_without_extra: Money,
    pub total_interest_with_extra: Money,
    pub interest_saved: Money,
}

/// Project the loan with and without the extra payment and diff the two.
pub fn calculate_additional_payment(
    input: &AdditionalPaymentInput,
) -> BondAnalyticsResult<ComputationOutput<AdditionalPaymentOutput>> {
    let start = Instant::now();
    validate(input)?;

    let instalment = payment::monthly_payment(
        input.loan_amount,
        input.annual_interest_rate,
        input.term_months,
    )?;

    let (base_months, base_interest) = simulate_payoff(
        input.loan_amount,
        input.annual_interest_rate,
        instalment,
        input.term_months,
    );
    let (new_months, new_interest) = simulate_payoff(
        input.loan_amount,
        input.annual_interest_rate,
        instalment + input.extra_monthly,
        input.term_months,
    );

    let output = AdditionalPaymentOutput {
        monthly_instalment: instalment,
        original_term_months: base_months,
        new_term_months: new_months,
        months_saved: base_months.saturating_sub(new_months),
        total_interest_without_extra: base_interest,
        total_interest_with_extra: new_interest,
        interest_saved: base_interest - new_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Amortization Payoff Simulation",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

/// Run the loan down month by month, bounded by the nominal term.
/// Returns (months until payoff, total interest paid).
fn simulate_payoff(
    balance: Money,
    annual_rate_percent: RatePercent,
    monthly_payment: Money,
    max_months: u32,
) -> (u32, Money) {
    let mut remaining = balance;
    let mut total_interest = Decimal::ZERO;
    let mut months = 0u32;

    for _ in 0..max_months {
        let split = payment::split_payment(remaining, annual_rate_percent, monthly_payment);
        total_interest += split.interest;
        months += 1;
        if split.principal >= remaining {
            remaining = Decimal::ZERO;
            break;
        }
        remaining -= split.principal;
    }

    (months, total_interest)
}

fn validate(input: &AdditionalPaymentInput) -> BondAnalyticsResult<()> {
    if input.loan_amount <= Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "loan_amount".into(),
            reason: "Loan amount must be positive".into(),
        });
    }
    if input.annual_interest_rate < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "annual_interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    if input.term_months == 0 {
        return Err(BondAnalyticsError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be greater than zero".into(),
        });
    }
    if input.extra_monthly < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "extra_monthly".into(),
            reason: "Extra payment cannot be negative".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_input() -> AdditionalPaymentInput {
        AdditionalPaymentInput {
            loan_amount: dec!(900_000),
            annual_interest_rate: dec!(11.25),
            term_months: 240,
            extra_monthly: dec!(1_000),
        }
    }

    // -----------------------------------------------------------------------
    // 1. An extra R1,000/month on a 20-year bond saves years and interest
    // -----------------------------------------------------------------------
    #[test]
    fn test_extra_payment_saves_time_and_interest() {
        let out = calculate_additional_payment(&standard_input()).unwrap().result;
        assert!(out.new_term_months < 240);
        assert!(out.months_saved >= 36, "saved only {} months", out.months_saved);
        assert!(out.interest_saved > dec!(100_000));
    }

    // -----------------------------------------------------------------------
    // 2. Zero extra: the two simulations agree
    // -----------------------------------------------------------------------
    #[test]
    fn test_zero_extra_is_neutral() {
        let input = AdditionalPaymentInput {
            extra_monthly: dec!(0),
            ..standard_input()
        };
        let out = calculate_additional_payment(&input).unwrap().result;
        assert_eq!(out.months_saved, 0);
        assert_eq!(out.interest_saved, dec!(0));
        assert_eq!(out.new_term_months, out.original_term_months);
    }

    // -----------------------------------------------------------------------
    // 3. Baseline simulation runs the full nominal term
    // -----------------------------------------------------------------------
    #[test]
    fn test_baseline_simulation_spans_term() {
        let out = calculate_additional_payment(&standard_input()).unwrap().result;
        assert_eq!(out.original_term_months, 240);
    }

    // -----------------------------------------------------------------------
    // 4. A huge extra pays the loan off almost immediately
    // -----------------------------------------------------------------------
    #[test]
    fn test_huge_extra_immediate_payoff() {
        let input = AdditionalPaymentInput {
            extra_monthly: dec!(1_000_000),
            ..standard_input()
        };
        let out = calculate_additional_payment(&input).unwrap().result;
        assert_eq!(out.new_term_months, 1);
    }

    // -----------------------------------------------------------------------
    // 5. Negative extra is rejected
    // -----------------------------------------------------------------------
    #[test]
    fn test_negative_extra_rejected() {
        let input = AdditionalPaymentInput {
            extra_monthly: dec!(-50),
            ..standard_input()
        };
        assert!(calculate_additional_payment(&input).is_err());
    }
}
