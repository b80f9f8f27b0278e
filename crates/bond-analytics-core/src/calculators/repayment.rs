//! Bond repayment calculator: instalment and lifetime cost for a purchase.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment;
use crate::error::BondAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent};
use crate::BondAnalyticsResult;

/// Bond repayment input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentInput {
    /// Property purchase price.
    pub purchase_price: Money,
    /// Upfront deposit.
    #[serde(default)]
    pub deposit: Money,
    /// Annual interest rate in percent.
    pub annual_interest_rate: RatePercent,
    /// Loan term in months.
    pub term_months: u32,
}

/// Bond repayment output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentOutput {
    /// Financed amount (price less deposit).
    pub loan_amount: Money,
    pub monthly_instalment: Money,
    pub total_repaid: Money,
    pub total_interest: Money,
}

/// Compute the instalment and lifetime interest for a bond.
pub fn calculate_repayment(
    input: &RepaymentInput,
) -> BondAnalyticsResult<ComputationOutput<RepaymentOutput>> {
    let start = Instant::now();
    validate(input)?;

    let loan_amount = input.purchase_price - input.deposit;
    let monthly_instalment =
        payment::monthly_payment(loan_amount, input.annual_interest_rate, input.term_months)?;
    let total_repaid = monthly_instalment * Decimal::from(input.term_months);
    let total_interest = total_repaid - loan_amount;

    let output = RepaymentOutput {
        loan_amount,
        monthly_instalment,
        total_repaid,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-Pay Amortization Formula",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

fn validate(input: &RepaymentInput) -> BondAnalyticsResult<()> {
    if input.purchase_price <= Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "purchase_price".into(),
            reason: "Purchase price must be positive".into(),
        });
    }
    if input.deposit < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "deposit".into(),
            reason: "Deposit cannot be negative".into(),
        });
    }
    if input.deposit >= input.purchase_price {
        return Err(BondAnalyticsError::InvalidInput {
            field: "deposit".into(),
            reason: "Deposit must be less than the purchase price".into(),
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
    Ok(())
}
