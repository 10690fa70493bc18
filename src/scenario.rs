//! Quote runner for batch quoting
//!
//! Loads the rate table once, then quotes many selections against it
//! without re-reading the CSV.

use rayon::prelude::*;

use crate::projection::{ProjectionEngine, Quote, QuoteConfig};
use crate::rates::{RateTable, RateTableError};
use crate::selection::{AccountTier, PayoutFrequency, Selection, TermLength};

/// Pre-loaded quote runner for batch quoting
///
/// # Example
/// ```
/// use term_deposit::QuoteRunner;
///
/// let runner = QuoteRunner::new();
/// let sheet = runner.rate_sheet(100_000.0);
/// assert_eq!(sheet.len(), 24);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteRunner {
    engine: ProjectionEngine,
}

impl QuoteRunner {
    /// Create runner with the standard in-memory rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner by loading the rate table from the default CSV
    pub fn from_csv() -> Result<Self, RateTableError> {
        Ok(Self::with_rates(RateTable::from_csv()?))
    }

    /// Create runner from a specific rate table file
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self, RateTableError> {
        Ok(Self::with_rates(RateTable::from_csv_path(path)?))
    }

    /// Create runner with a pre-built rate table
    pub fn with_rates(rates: RateTable) -> Self {
        Self {
            engine: ProjectionEngine::with_rates(rates),
        }
    }

    /// Create runner with a pre-built rate table and quote config
    pub fn with_config(rates: RateTable, config: QuoteConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(rates, config),
        }
    }

    /// Quote a single selection
    pub fn run(&self, selection: &Selection) -> Quote {
        self.engine.quote(selection)
    }

    /// Quote many selections in parallel, preserving input order
    pub fn run_batch(&self, selections: &[Selection]) -> Vec<Quote> {
        selections
            .par_iter()
            .map(|selection| self.engine.quote(selection))
            .collect()
    }

    /// Quote every tier, term and frequency for one deposit, in rate-table order
    pub fn rate_sheet(&self, deposit: f64) -> Vec<Quote> {
        let selections: Vec<Selection> = AccountTier::ALL
            .into_iter()
            .flat_map(|tier| {
                TermLength::ALL.into_iter().flat_map(move |term| {
                    PayoutFrequency::ALL
                        .into_iter()
                        .map(move |frequency| Selection::new(tier, term, frequency, deposit))
                })
            })
            .collect();

        self.run_batch(&selections)
    }

    /// Get reference to the underlying engine
    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
