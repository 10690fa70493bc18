//! Write the full rate sheet for one deposit amount to CSV
//!
//! One row per tier, term and payout frequency (24 rows)

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use term_deposit::{parse_deposit, QuoteConfig, QuoteRunner, RateTable};

#[derive(Parser)]
#[command(name = "rate_sheet", about = "Quote every tier, term and payout frequency")]
struct Cli {
    /// Deposit amount, commas allowed
    #[arg(long, default_value = "100,000")]
    deposit: String,

    /// Rate table CSV. Defaults to the built-in rate sheet.
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "rate_sheet.csv")]
    output: PathBuf,
}

/// One CSV output row
#[derive(Debug, Serialize)]
struct SheetRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Term")]
    term: u32,
    #[serde(rename = "Frequency")]
    frequency: String,
    #[serde(rename = "Deposit")]
    deposit: f64,
    #[serde(rename = "APY")]
    apy: f64,
    #[serde(rename = "Interest")]
    interest: f64,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "MonthlyPayout")]
    monthly_payout: f64,
    #[serde(rename = "QuarterlyPayout")]
    quarterly_payout: f64,
    #[serde(rename = "YearlyPayout")]
    yearly_payout: f64,
    #[serde(rename = "MeetsMinimum")]
    meets_minimum: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    let rates = match &cli.rates {
        Some(path) => RateTable::from_csv_path(path)
            .with_context(|| format!("loading rate table from {}", path.display()))?,
        None => RateTable::standard(),
    };
    let runner = QuoteRunner::with_config(rates, QuoteConfig { include_series: false });

    let deposit = parse_deposit(&cli.deposit);
    let quotes = runner.rate_sheet(deposit);
    log::info!("quoted {} combinations in {:?}", quotes.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    for quote in &quotes {
        let sel = &quote.selection;
        writer.serialize(SheetRow {
            tier: sel.tier.to_string(),
            term: sel.term.years(),
            frequency: sel.frequency.to_string(),
            deposit: sel.deposit,
            apy: quote.apy(),
            interest: quote.maturity.interest,
            total: quote.maturity.total,
            monthly_payout: quote.payouts.monthly,
            quarterly_payout: quote.payouts.quarterly,
            yearly_payout: quote.payouts.yearly,
            meets_minimum: sel.meets_minimum(),
        })?;
    }
    writer.flush()?;

    println!("Wrote {} quotes to {}", quotes.len(), cli.output.display());
    Ok(())
}
