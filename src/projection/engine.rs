//! Projection engine: rate lookup, maturity and chart series for a selection

use serde::{Deserialize, Serialize};

use super::maturity::{compute_maturity, ProjectionResult};
use super::payouts::{payout_breakdown, PayoutBreakdown};
use super::series::{generate_series, ProjectionPoint};
use crate::rates::RateTable;
use crate::selection::{AccountTier, PayoutFrequency, Selection, TermLength};

/// Configuration for quoting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Whether quotes carry the projected balance series
    pub include_series: bool,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self { include_series: true }
    }
}

/// Everything the calculator shows for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub selection: Selection,
    pub maturity: ProjectionResult,
    pub payouts: PayoutBreakdown,
    /// Empty when the engine is configured without series
    pub series: Vec<ProjectionPoint>,
}

impl Quote {
    pub fn apy(&self) -> f64 {
        self.maturity.apy
    }
}

/// Stateless projection engine over an injected rate table
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    rates: RateTable,
    config: QuoteConfig,
}

impl ProjectionEngine {
    /// Create a new engine with the given rate table and config
    pub fn new(rates: RateTable, config: QuoteConfig) -> Self {
        Self { rates, config }
    }

    /// Engine over the given rate table with default config
    pub fn with_rates(rates: RateTable) -> Self {
        Self::new(rates, QuoteConfig::default())
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// APY percent for a tier, term and payout frequency
    pub fn lookup_apy(&self, tier: AccountTier, term: TermLength, frequency: PayoutFrequency) -> f64 {
        self.rates.lookup_apy(tier, term, frequency)
    }

    /// Quote a selection from scratch
    pub fn quote(&self, selection: &Selection) -> Quote {
        let term_years = selection.term.years();
        let apy = self.lookup_apy(selection.tier, selection.term, selection.frequency);
        let maturity = compute_maturity(selection.deposit, term_years, apy);
        let payouts = payout_breakdown(maturity.interest, term_years, selection.frequency);

        let series = if self.config.include_series {
            generate_series(selection.deposit, term_years, selection.frequency, apy)
        } else {
            Vec::new()
        };

        log::debug!(
            "quoted {} {} {} on {:.2}: apy {}%, interest {:.2}, total {:.2}",
            selection.tier,
            selection.term,
            selection.frequency,
            selection.deposit,
            apy,
            maturity.interest,
            maturity.total
        );

        Quote {
            selection: selection.clone(),
            maturity,
            payouts,
            series,
        }
    }
}
