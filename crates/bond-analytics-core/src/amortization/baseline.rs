//! Baseline amortization schedule projection.
//!
//! Projects the unmodified month-by-month schedule for a property from its
//! current balance, fixed rate and fixed instalment. The projection starts
//! at the next payment due: row dates are anchored at the loan start date
//! plus the whole months already elapsed as of the supplied date.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::amortization::model::{AmortizationRow, Property, Schedule};
use crate::amortization::payment;
use crate::error::BondAnalyticsError;
use crate::BondAnalyticsResult;

/// Build the unmodified schedule for a property.
///
/// Iterates at most `remaining_term_months` times. When the fixed instalment
/// would overpay the balance, the final row carries only the remaining
/// balance as principal and the schedule truncates there, which can land
/// before the nominal term elapses. Returns an empty schedule for a zero
/// balance or zero remaining term.
pub fn build_schedule(property: &Property, as_of: NaiveDate) -> BondAnalyticsResult<Schedule> {
    let mut schedule = Vec::with_capacity(property.remaining_term_months as usize);

    let mut balance = property.current_loan_balance;
    if balance <= Decimal::ZERO || property.remaining_term_months == 0 {
        return Ok(schedule);
    }

    let elapsed = months_elapsed(property.loan_start_date, as_of);

    for offset in 1..=property.remaining_term_months {
        let date = payment_date(property.loan_start_date, elapsed + offset)?;
        let split = payment::split_payment(
            balance,
            property.annual_interest_rate,
            property.monthly_payment,
        );

        if split.principal >= balance {
            // The fixed instalment overpays: close the loan on this row.
            schedule.push(AmortizationRow {
                payment_number: offset,
                payment_date: date,
                principal_payment: balance,
                interest_payment: split.interest,
                total_payment: balance + split.interest,
                extra_payment: Decimal::ZERO,
                lump_sum_payment: Decimal::ZERO,
                remaining_balance: Decimal::ZERO,
            });
            break;
        }

        balance -= split.principal;
        schedule.push(AmortizationRow {
            payment_number: offset,
            payment_date: date,
            principal_payment: split.principal,
            interest_payment: split.interest,
            total_payment: property.monthly_payment,
            extra_payment: Decimal::ZERO,
            lump_sum_payment: Decimal::ZERO,
            remaining_balance: balance,
        });
    }

    Ok(schedule)
}

/// Whole months from `start` to `as_of`, floored at zero.
pub(crate) fn months_elapsed(start: NaiveDate, as_of: NaiveDate) -> u32 {
    if as_of <= start {
        return 0;
    }
    let mut months =
        (as_of.year() - start.year()) * 12 + as_of.month() as i32 - start.month() as i32;
    if as_of.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

/// The calendar date `months_ahead` whole months after the loan start.
pub(crate) fn payment_date(
    start: NaiveDate,
    months_ahead: u32,
) -> BondAnalyticsResult<NaiveDate> {
    start
        .checked_add_months(Months::new(months_ahead))
        .ok_or_else(|| {
            BondAnalyticsError::DateError(format!(
                "Payment date overflows {} months after {}",
                months_ahead, start
            ))
        })
}
