//! APY rate table keyed by tier, term and payout frequency

use serde::Serialize;

use crate::selection::{AccountTier, PayoutFrequency, TermLength};

/// Annual percentage yields, one row of four columns per (tier, term)
///
/// Columns follow `PayoutFrequency::column`: Monthly, Quarterly, Annually, Term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rows: [[[f64; 4]; 3]; 2],
}

pub(super) fn tier_index(tier: AccountTier) -> usize {
    match tier {
        AccountTier::Orbit => 0,
        AccountTier::Odyssey => 1,
    }
}

pub(super) fn term_index(term: TermLength) -> usize {
    match term {
        TermLength::FiveYears => 0,
        TermLength::SevenYears => 1,
        TermLength::TenYears => 2,
    }
}

impl RateTable {
    /// Published rate sheet for the Orbit and Odyssey accounts
    pub fn standard() -> Self {
        Self {
            rows: [
                // Orbit
                [
                    [5.5, 6.0, 7.5, 12.0],  // 5 years
                    [7.0, 7.5, 9.0, 13.5],  // 7 years
                    [7.5, 8.0, 9.5, 14.0],  // 10 years
                ],
                // Odyssey
                [
                    [6.5, 7.0, 8.5, 13.0],
                    [7.5, 8.0, 9.5, 14.0],
                    [8.5, 9.0, 10.5, 15.0],
                ],
            ],
        }
    }

    /// Build a table from explicit rows. Callers must supply every (tier, term) pair.
    pub(crate) fn from_rows(rows: [[[f64; 4]; 3]; 2]) -> Self {
        Self { rows }
    }

    /// APY percent for a selection. Total over all enum combinations.
    pub fn lookup_apy(&self, tier: AccountTier, term: TermLength, frequency: PayoutFrequency) -> f64 {
        self.row(tier, term)[frequency.column()]
    }

    /// The four APY columns for a (tier, term) pair
    pub fn row(&self, tier: AccountTier, term: TermLength) -> &[f64; 4] {
        &self.rows[tier_index(tier)][term_index(term)]
    }

    /// Iterate every (tier, term, frequency, apy) entry in table order
    pub fn entries(&self) -> impl Iterator<Item = (AccountTier, TermLength, PayoutFrequency, f64)> + '_ {
        AccountTier::ALL.into_iter().flat_map(move |tier| {
            TermLength::ALL.into_iter().flat_map(move |term| {
                PayoutFrequency::ALL
                    .into_iter()
                    .map(move |freq| (tier, term, freq, self.lookup_apy(tier, term, freq)))
            })
        })
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
