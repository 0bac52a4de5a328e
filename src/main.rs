//! Retirement System CLI
//!
//! Command-line interface for running retirement income projections. Raw
//! argument text goes through the same batch validation as any other caller,
//! so a bad submission prints one aggregated report instead of failing on the
//! first field.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use retirement_system::export;
use retirement_system::input::fields;
use retirement_system::{validate, ProjectionEngine, ProjectionResult, RawFields};

/// Project a retirement portfolio and income schedule
#[derive(Parser, Debug)]
#[command(name = "retirement_system", version, about = "Retirement income projection")]
struct Cli {
    /// Current portfolio value in dollars (thousands separators allowed)
    #[arg(long)]
    portfolio: Option<String>,

    /// Portfolio valuation date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<String>,

    /// Withdrawal start date (YYYY-MM-DD)
    #[arg(long)]
    withdrawal_date: Option<String>,

    /// Expected annual return rate as a whole percent (e.g. 8)
    #[arg(long)]
    rate: Option<String>,

    /// First year withdrawal in dollars
    #[arg(long)]
    first_withdrawal: Option<String>,

    /// Withdrawal rate for later years, whole percent of the prior end balance
    #[arg(long)]
    withdraw_rate: Option<String>,

    /// Number of years to project
    #[arg(long)]
    years: Option<String>,

    /// Estimated annual Social Security income in dollars
    #[arg(long)]
    ss_income: Option<String>,

    /// Estimated annual Social Security COLA as a whole percent
    #[arg(long)]
    ss_cola: Option<String>,

    /// Write the CSV export to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the structured result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Collect the provided arguments into the raw field batch
    fn raw_fields(&self) -> RawFields {
        let mut raw = RawFields::new();
        insert_field(&mut raw, fields::CURRENT_PORTFOLIO, &self.portfolio);
        insert_field(&mut raw, fields::AS_OF_DATE, &self.as_of);
        insert_field(&mut raw, fields::WITHDRAWAL_DATE, &self.withdrawal_date);
        insert_field(&mut raw, fields::RATE, &self.rate);
        insert_field(&mut raw, fields::FIRST_YEAR_WITHDRAWAL, &self.first_withdrawal);
        insert_field(&mut raw, fields::WITHDRAW_RATE, &self.withdraw_rate);
        insert_field(&mut raw, fields::YEARS, &self.years);
        insert_field(&mut raw, fields::SS_ANNUAL_INCOME, &self.ss_income);
        insert_field(&mut raw, fields::SS_COLA, &self.ss_cola);
        raw
    }
}

fn insert_field(raw: &mut RawFields, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        raw.insert(name.to_string(), value.clone());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let input = match validate(&cli.raw_fields()) {
        Ok(input) => input,
        Err(report) => {
            eprintln!("{}", report);
            std::process::exit(1);
        }
    };

    let result = ProjectionEngine::project(&input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        export::write_csv(&result, file)?;
        println!("\nCSV export written to: {}", path.display());
    }

    Ok(())
}

/// Print the resolved-input echo block, the yearly table, and the summary
fn print_report(result: &ProjectionResult) {
    let input = &result.resolved.input;

    println!("Retirement Income Projection");
    println!("============================\n");

    println!("Current Portfolio Value: ${:.2} (as of {})", input.current_portfolio, input.as_of_date);
    if result.resolved.rollforward_days > 0 {
        println!(
            "Value at Withdrawal Start ({}, {} days later): ${:.2}",
            input.withdrawal_date, result.resolved.rollforward_days, result.resolved.future_value
        );
    }
    println!("Expected Annual Return Rate: {:.2}% (daily compounding)", input.annual_return_rate * 100.0);
    println!("Estimated Annual Social Security Income: ${:.2}", input.ss_annual_income);
    println!("Estimated Annual COLA: {:.2}%", input.ss_cola * 100.0);
    println!();

    println!(
        "{:>6} {:>16} {:>14} {:>14} {:>14} {:>16} {:>16}",
        "Year", "Start Balance", "Withdrawal", "SS Income", "Total Income", "After Withdrawal", "End Balance"
    );
    println!("{}", "-".repeat(102));

    for row in &result.rows {
        println!(
            "{:>6} {:>16.2} {:>14.2} {:>14.2} {:>14.2} {:>16.2} {:>16.2}",
            row.year,
            row.start_balance,
            row.withdrawal,
            row.ss_income,
            row.total_income,
            row.after_withdrawal_balance,
            row.end_balance,
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years Projected: {}", summary.years_projected);
    println!("  Total Withdrawals: ${:.2}", summary.total_withdrawals);
    println!("  Total Social Security Income: ${:.2}", summary.total_ss_income);
    println!("  Final End Balance: ${:.2}", summary.final_end_balance);
    if let Some(year) = summary.first_negative_year {
        println!("  Balance goes negative in: {}", year);
    }
}
