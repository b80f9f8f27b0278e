use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use bond_analytics_core::amortization::analysis;
use bond_analytics_core::amortization::baseline;
use bond_analytics_core::amortization::model::{LoanScenario, Property};

use crate::input;

/// Property plus scenarios, as supplied by `--input` or piped stdin.
#[derive(Debug, Deserialize)]
struct AnalysisRequest {
    property: Property,
    #[serde(default)]
    scenarios: Vec<LoanScenario>,
    /// Projection anchor date; defaults to today.
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

/// Arguments for the full property analysis
#[derive(Args)]
pub struct AnalysisArgs {
    /// Path to a JSON or YAML file with the property and its scenarios
    #[arg(long)]
    pub input: Option<String>,

    /// Projection anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for the baseline schedule
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Outstanding loan balance
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 11.25)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Fixed monthly instalment
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Months left on the nominal term
    #[arg(long)]
    pub term: Option<u32>,

    /// Loan start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Projection anchor date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_analysis(args: AnalysisArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: AnalysisRequest = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input is required (or pipe JSON to stdin)".into());
    };

    let as_of = args
        .as_of
        .or(request.as_of)
        .unwrap_or_else(|| Local::now().date_naive());

    let result =
        analysis::generate_property_analysis(&request.property, &request.scenarios, as_of)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let property: Property = if let Some(ref path) = args.input {
        input::read_typed(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        Property {
            current_loan_balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            annual_interest_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            monthly_payment: args
                .payment
                .ok_or("--payment is required (or provide --input)")?,
            remaining_term_months: args.term.ok_or("--term is required (or provide --input)")?,
            loan_start_date: args
                .start_date
                .ok_or("--start-date is required (or provide --input)")?,
        }
    };

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let schedule = baseline::build_schedule(&property, as_of)?;
    Ok(serde_json::to_value(schedule)?)
}
