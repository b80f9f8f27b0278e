//! Deposit savings calculator: months needed to save a deposit target.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment;
use crate::error::BondAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent};
use crate::BondAnalyticsResult;

/// Upper bound on the accumulation loop (100 years of monthly deposits).
const MAX_SAVINGS_MONTHS: u32 = 1_200;

/// Deposit savings input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositSavingsInput {
    /// Deposit amount being saved toward.
    pub target_amount: Money,
    /// Amount already saved.
    #[serde(default)]
    pub current_savings: Money,
    /// Amount saved each month.
    pub monthly_saving: Money,
    /// Annual interest rate on savings, in percent.
    #[serde(default)]
    pub annual_interest_rate: RatePercent,
}

/// Deposit savings output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositSavingsOutput {
    pub months_to_target: u32,
    /// Balance at the month the target is reached.
    pub projected_balance: Money,
    pub total_contributed: Money,
    pub interest_earned: Money,
}

/// Project monthly savings with interest until the target is reached.
///
/// Interest compounds monthly on the running balance before each deposit.
/// The loop is bounded by `MAX_SAVINGS_MONTHS`; an unreachable target is an
/// explicit error rather than an endless projection.
pub fn calculate_deposit_savings(
    input: &DepositSavingsInput,
) -> BondAnalyticsResult<ComputationOutput<DepositSavingsOutput>> {
    let start = Instant::now();
    validate(input)?;

    let monthly_rate = payment::monthly_rate(input.annual_interest_rate);

    let mut balance = input.current_savings;
    let mut contributed = Decimal::ZERO;
    let mut months = 0u32;

    if balance < input.target_amount {
        if input.monthly_saving <= Decimal::ZERO && monthly_rate.is_zero() {
            return Err(BondAnalyticsError::FinancialImpossibility(
                "Target cannot be reached without a monthly saving or interest".into(),
            ));
        }

        loop {
            if months >= MAX_SAVINGS_MONTHS {
                return Err(BondAnalyticsError::FinancialImpossibility(format!(
                    "Target {} not reachable within {} months",
                    input.target_amount, MAX_SAVINGS_MONTHS
                )));
            }
            balance = balance * (Decimal::ONE + monthly_rate) + input.monthly_saving;
            contributed += input.monthly_saving;
            months += 1;
            if balance >= input.target_amount {
                break;
            }
        }
    }

    let output = DepositSavingsOutput {
        months_to_target: months,
        projected_balance: balance,
        total_contributed: contributed,
        interest_earned: balance - input.current_savings - contributed,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly-Compounded Savings Accumulation",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

fn validate(input: &DepositSavingsInput) -> BondAnalyticsResult<()> {
    if input.target_amount <= Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "target_amount".into(),
            reason: "Target amount must be positive".into(),
        });
    }
    if input.current_savings < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "current_savings".into(),
            reason: "Current savings cannot be negative".into(),
        });
    }
    if input.monthly_saving < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "monthly_saving".into(),
            reason: "Monthly saving cannot be negative".into(),
        });
    }
    if input.annual_interest_rate < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "annual_interest_rate".into(),
            reason: "Interest rate cannot be negative".into(),
        });
    }
    Ok(())
}
