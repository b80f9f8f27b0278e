//! Affordability calculator: maximum loan and purchase price from income.
//!
//! Follows the South African lender convention of qualifying a repayment of
//! up to 30% of gross monthly income, further limited by committed monthly
//! expenses.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment;
use crate::error::BondAnalyticsError;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent};
use crate::BondAnalyticsResult;

/// Share of gross income a lender will allow toward the instalment.
const INSTALMENT_INCOME_SHARE: Decimal = dec!(0.30);

/// Affordability input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityInput {
    pub gross_monthly_income: Money,
    /// Committed monthly expenses (debit orders, other debt service).
    #[serde(default)]
    pub monthly_expenses: Money,
    /// Deposit available toward the purchase.
    #[serde(default)]
    pub deposit: Money,
    /// Annual interest rate in percent.
    pub annual_interest_rate: RatePercent,
    /// Loan term in months.
    pub term_months: u32,
}

/// Affordability output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityOutput {
    pub max_monthly_instalment: Money,
    pub max_loan_amount: Money,
    pub max_purchase_price: Money,
}

/// Compute the maximum affordable instalment, loan and purchase price.
pub fn calculate_affordability(
    input: &AffordabilityInput,
) -> BondAnalyticsResult<ComputationOutput<AffordabilityOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    validate(input)?;

    let income_cap = input.gross_monthly_income * INSTALMENT_INCOME_SHARE;
    let disposable = input.gross_monthly_income - input.monthly_expenses;
    let mut max_instalment = income_cap.min(disposable);
    if max_instalment < Decimal::ZERO {
        max_instalment = Decimal::ZERO;
    }
    if disposable < income_cap {
        warnings.push(
            "Committed expenses reduce the affordable instalment below the 30% income share"
                .to_string(),
        );
    }

    // Present value of the affordable instalment over the term.
    let r = payment::monthly_rate(input.annual_interest_rate);
    let max_loan_amount = if max_instalment.is_zero() {
        Decimal::ZERO
    } else if r.is_zero() {
        max_instalment * Decimal::from(input.term_months)
    } else {
        let factor = payment::compound(r, input.term_months);
        max_instalment * (Decimal::ONE - Decimal::ONE / factor) / r
    };

    let output = AffordabilityOutput {
        max_monthly_instalment: max_instalment,
        max_loan_amount,
        max_purchase_price: max_loan_amount + input.deposit,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Income-Share Affordability with Annuity Present Value",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &AffordabilityInput) -> BondAnalyticsResult<()> {
    if input.gross_monthly_income <= Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "gross_monthly_income".into(),
            reason: "Gross income must be positive".into(),
        });
    }
    if input.monthly_expenses < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "monthly_expenses".into(),
            reason: "Expenses cannot be negative".into(),
        });
    }
    if input.deposit < Decimal::ZERO {
        return Err(BondAnalyticsError::InvalidInput {
            field: "deposit".into(),
            reason: "Deposit cannot be negative".into(),
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
