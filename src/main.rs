//! Term Deposit CLI
//!
//! Quotes a single deposit selection and prints the projection

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use term_deposit::{
    parse_deposit, AccountTier, PayoutFrequency, ProjectionEngine, RateTable, Selection, TermLength,
};

#[derive(Parser)]
#[command(name = "term_deposit", about = "Quote a term deposit and project its balance")]
struct Cli {
    /// Account tier: Orbit or Odyssey
    #[arg(long, default_value = "Orbit")]
    tier: AccountTier,

    /// Term length in years: 5, 7 or 10
    #[arg(long, default_value = "5")]
    term: TermLength,

    /// Payout frequency: Monthly, Quarterly, Annually or Term
    #[arg(long, default_value = "Monthly")]
    frequency: PayoutFrequency,

    /// Deposit amount, commas allowed. Defaults to the tier minimum.
    #[arg(long)]
    deposit: Option<String>,

    /// Rate table CSV. Defaults to the built-in rate sheet.
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Print the quote as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rates = match &cli.rates {
        Some(path) => RateTable::from_csv_path(path)
            .with_context(|| format!("loading rate table from {}", path.display()))?,
        None => RateTable::standard(),
    };
    let engine = ProjectionEngine::with_rates(rates);

    let deposit = cli
        .deposit
        .as_deref()
        .map(parse_deposit)
        .unwrap_or_else(|| cli.tier.minimum_deposit());
    let selection = Selection::new(cli.tier, cli.term, cli.frequency, deposit);
    let quote = engine.quote(&selection);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("Term Deposit Quote");
    println!("==================\n");
    println!("  Account:   {}", selection.tier);
    println!("  Term:      {}", selection.term);
    println!("  Payout:    {}", selection.frequency);
    println!("  Deposit:   ${:.2}", selection.deposit);
    if !selection.meets_minimum() {
        println!(
            "  (below the {} minimum of ${:.2})",
            selection.tier,
            selection.tier.minimum_deposit()
        );
    }
    println!("  APY:       {}%", quote.apy());
    println!();

    println!("Maturity:");
    println!("  Total Interest Earned: ${:.2}", quote.maturity.interest);
    println!("  Total Balance:         ${:.2}", quote.maturity.total);
    println!();

    println!("Interest Payouts:");
    println!("  Monthly:   ${:.0}", quote.payouts.monthly);
    println!("  Quarterly: ${:.0}", quote.payouts.quarterly);
    println!("  Yearly:    ${:.0}", quote.payouts.yearly);
    println!("  Term:      ${:.0}", quote.payouts.term);
    println!();

    println!("Projected Balance ({} points):", quote.series.len());
    println!("{:>12} {:>14} {:>14}", "Point", "Interest", "Total");
    println!("{}", "-".repeat(42));
    for point in &quote.series {
        println!(
            "{:>12} {:>14.2} {:>14.2}",
            point.caption(),
            point.interest_over(selection.deposit),
            point.value
        );
    }

    Ok(())
}
