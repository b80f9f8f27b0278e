mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::analysis::{AnalysisArgs, ScheduleArgs};
use commands::calculators::{
    AffordabilityArgs, DepositSavingsArgs, ExtraPaymentArgs, RepaymentArgs,
};

/// Home-loan amortization and scenario analytics
#[derive(Parser)]
#[command(
    name = "bondcalc",
    version,
    about = "Home-loan amortization and scenario analytics",
    long_about = "A CLI for projecting home-loan (bond) amortization schedules with \
                  decimal precision. Supports what-if payment scenarios (lump sum, \
                  extra monthly, instalment increase), combined-scenario analysis, \
                  and repayment, affordability, deposit-savings and extra-payment \
                  calculators."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full property analysis: baseline, per-scenario and combined projections
    Analysis(AnalysisArgs),
    /// Baseline amortization schedule for a property
    Schedule(ScheduleArgs),
    /// Bond repayment: instalment and lifetime interest for a purchase
    Repayment(RepaymentArgs),
    /// Maximum affordable instalment, loan and purchase price
    Affordability(AffordabilityArgs),
    /// Months needed to save a deposit target
    DepositSavings(DepositSavingsArgs),
    /// Effect of a fixed extra monthly payment on payoff and interest
    ExtraPayment(ExtraPaymentArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Analysis(args) => commands::analysis::run_analysis(args),
        Commands::Schedule(args) => commands::analysis::run_schedule(args),
        Commands::Repayment(args) => commands::calculators::run_repayment(args),
        Commands::Affordability(args) => commands::calculators::run_affordability(args),
        Commands::DepositSavings(args) => commands::calculators::run_deposit_savings(args),
        Commands::ExtraPayment(args) => commands::calculators::run_extra_payment(args),
        Commands::Version => {
            println!("bondcalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
