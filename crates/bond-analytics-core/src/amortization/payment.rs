//! Closed-form payment arithmetic for a level-pay amortizing loan.
//!
//! All math in `rust_decimal::Decimal`. Powers of `(1 + r)` are computed by
//! iterative multiplication over the integer term to avoid `powd` drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::BondAnalyticsError;
use crate::types::{Money, RatePercent};
use crate::BondAnalyticsResult;

/// Convert an annual percentage rate to a monthly decimal rate.
pub fn monthly_rate(annual_rate_percent: RatePercent) -> Decimal {
    annual_rate_percent / dec!(100) / dec!(12)
}

/// Interest/principal split of a single payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSplit {
    pub interest: Money,
    pub principal: Money,
}

/// Standard amortization instalment: `P·r·(1+r)^n / ((1+r)^n − 1)`.
///
/// Falls back to straight-line `P / n` at a zero rate.
pub fn monthly_payment(
    principal: Money,
    annual_rate_percent: RatePercent,
    term_months: u32,
) -> BondAnalyticsResult<Money> {
    if term_months == 0 {
        return Err(BondAnalyticsError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be greater than zero".into(),
        });
    }
    if principal <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let r = monthly_rate(annual_rate_percent);
    if r.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let factor = compound(r, term_months);
    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(BondAnalyticsError::DivisionByZero {
            context: "monthly payment annuity factor".into(),
        });
    }

    Ok(principal * r * factor / denominator)
}

/// Split a fixed payment against a balance into interest and principal.
///
/// `interest = balance · r`; `principal = payment − interest`. The caller is
/// responsible for capping principal at the remaining balance on the final
/// payment.
pub fn split_payment(
    balance: Money,
    annual_rate_percent: RatePercent,
    payment: Money,
) -> PaymentSplit {
    let interest = balance * monthly_rate(annual_rate_percent);
    PaymentSplit {
        interest,
        principal: payment - interest,
    }
}

/// Compute `(1 + r)^n` via iterative multiplication.
pub(crate) fn compound(rate: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}
