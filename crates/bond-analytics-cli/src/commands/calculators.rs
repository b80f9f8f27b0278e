use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use bond_analytics_core::calculators::additional_payment::{self, AdditionalPaymentInput};
use bond_analytics_core::calculators::affordability::{self, AffordabilityInput};
use bond_analytics_core::calculators::deposit_savings::{self, DepositSavingsInput};
use bond_analytics_core::calculators::repayment::{self, RepaymentInput};

use crate::input;

/// Arguments for the bond repayment calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RepaymentArgs {
    /// Property purchase price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Upfront deposit
    #[arg(long, default_value = "0")]
    pub deposit: Decimal,

    /// Annual interest rate in percent (e.g. 11.5)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the affordability calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct AffordabilityArgs {
    /// Gross monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Committed monthly expenses
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Deposit available toward the purchase
    #[arg(long, default_value = "0")]
    pub deposit: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the deposit savings calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DepositSavingsArgs {
    /// Deposit amount being saved toward
    #[arg(long)]
    pub target: Option<Decimal>,

    /// Amount already saved
    #[arg(long, default_value = "0")]
    pub current: Decimal,

    /// Amount saved each month
    #[arg(long)]
    pub monthly: Option<Decimal>,

    /// Annual interest rate on savings, in percent
    #[arg(long, default_value = "0")]
    pub rate: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the extra-payment calculator
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ExtraPaymentArgs {
    /// Outstanding loan balance
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Remaining term in months
    #[arg(long)]
    pub term: Option<u32>,

    /// Extra amount paid every month on top of the instalment
    #[arg(long, default_value = "0")]
    pub extra: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_repayment(args: RepaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let repayment_input: RepaymentInput = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RepaymentInput {
            purchase_price: args.price.ok_or("--price is required (or provide --input)")?,
            deposit: args.deposit,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    };

    let result = repayment::calculate_repayment(&repayment_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_affordability(args: AffordabilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let affordability_input: AffordabilityInput = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AffordabilityInput {
            gross_monthly_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            monthly_expenses: args.expenses,
            deposit: args.deposit,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    };

    let result = affordability::calculate_affordability(&affordability_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_deposit_savings(args: DepositSavingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let savings_input: DepositSavingsInput = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        DepositSavingsInput {
            target_amount: args.target.ok_or("--target is required (or provide --input)")?,
            current_savings: args.current,
            monthly_saving: args
                .monthly
                .ok_or("--monthly is required (or provide --input)")?,
            annual_interest_rate: args.rate,
        }
    };

    let result = deposit_savings::calculate_deposit_savings(&savings_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_extra_payment(args: ExtraPaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let extra_input: AdditionalPaymentInput = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AdditionalPaymentInput {
            loan_amount: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
            extra_monthly: args.extra,
        }
    };

    let result = additional_payment::calculate_additional_payment(&extra_input)?;
    Ok(serde_json::to_value(result)?)
}
