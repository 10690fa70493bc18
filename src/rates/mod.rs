//! Rate sheet for the deposit accounts

mod table;
pub mod loader;

pub use table::RateTable;
pub use loader::{RateTableError, DEFAULT_RATE_TABLE_PATH};

use crate::selection::{AccountTier, PayoutFrequency, TermLength};

/// Look up the APY percent for a selection in the given table
pub fn lookup_apy(
    table: &RateTable,
    tier: AccountTier,
    term: TermLength,
    frequency: PayoutFrequency,
) -> f64 {
    table.lookup_apy(tier, term, frequency)
}
