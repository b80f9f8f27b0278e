//! Value types shared across the amortization engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Money, RatePercent};

/// A property's current loan state. Immutable input to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Outstanding loan balance.
    pub current_loan_balance: Money,
    /// Annual interest rate in percent (11.25 = 11.25%).
    pub annual_interest_rate: RatePercent,
    /// Fixed monthly instalment currently being paid.
    pub monthly_payment: Money,
    /// Months left on the nominal term.
    pub remaining_term_months: u32,
    /// Date the loan was originated.
    pub loan_start_date: NaiveDate,
}

/// The condition at which a scenario's effect begins or occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Fires on the first payment dated on or after this date.
    Date(NaiveDate),
    /// Fires on the first payment whose 1-based number is >= this value.
    PaymentNumber(u32),
}

impl Trigger {
    /// Whether a row at `payment_number` / `payment_date` satisfies this trigger.
    pub fn matches(&self, payment_number: u32, payment_date: NaiveDate) -> bool {
        match self {
            Trigger::Date(d) => payment_date >= *d,
            Trigger::PaymentNumber(n) => payment_number >= *n,
        }
    }
}

/// How a monthly-increase scenario steps its amount.
///
/// `Annually` is accepted for forward compatibility but is currently applied
/// as a flat increase from the trigger onward; the engine surfaces a warning
/// when it sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncreaseFrequency {
    Once,
    Annually,
}

/// The payment modification a scenario describes. Each variant carries only
/// the fields meaningful for its type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioKind {
    /// A once-off capital injection at the trigger.
    LumpSum { amount: Money, trigger: Trigger },
    /// A recurring extra payment from `start` until an exclusive `end`
    /// trigger or a fixed number of months counted from payment 1.
    ExtraMonthly {
        amount: Money,
        start: Trigger,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<Trigger>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration_months: Option<u32>,
    },
    /// A permanent instalment increase from `start` onward.
    MonthlyIncrease {
        amount: Money,
        start: Trigger,
        frequency: IncreaseFrequency,
    },
    /// Synthetic record representing the combined effect of several
    /// scenarios. Never supplied by callers; carries no fields.
    Combined,
}

/// A user-defined payment-modification scenario attached to a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScenario {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub kind: ScenarioKind,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based position within this projection (not absolute loan life).
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    /// Principal portion, including any extra and lump-sum amounts.
    pub principal_payment: Money,
    pub interest_payment: Money,
    /// `principal_payment + interest_payment`.
    pub total_payment: Money,
    /// Recurring extra amount applied this month (0 if none).
    pub extra_payment: Money,
    /// Lump-sum amount applied this month (0 if none).
    pub lump_sum_payment: Money,
    /// Balance after this payment. Exactly zero on the final row.
    pub remaining_balance: Money,
}

/// An ordered amortization schedule, payments 1..K until payoff.
pub type Schedule = Vec<AmortizationRow>;

/// A scenario's projected schedule and its savings versus the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: LoanScenario,
    pub schedule: Schedule,
    pub total_interest_saved: Money,
    pub months_saved: u32,
    pub original_payoff_date: Option<NaiveDate>,
    pub new_payoff_date: Option<NaiveDate>,
    pub total_amount_paid: Money,
    pub baseline_total_paid: Money,
}

/// The full derived view for a property: baseline, per-scenario results and
/// the optional combined projection. Built fresh on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyAnalysis {
    pub property: Property,
    pub baseline_schedule: Schedule,
    pub scenario_results: Vec<ScenarioResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined_result: Option<ScenarioResult>,
}
