//! Term Deposit - Projection engine for tiered term deposit accounts
//!
//! This library provides:
//! - APY lookup by account tier, term length and payout frequency
//! - Maturity interest and balance under simple interest
//! - Straight-line balance series for charting
//! - Per-period payout breakdowns and batch rate sheets

pub mod selection;
pub mod rates;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use selection::{AccountTier, PayoutFrequency, Selection, SelectionError, TermLength, parse_deposit};
pub use rates::{RateTable, RateTableError, lookup_apy};
pub use projection::{
    ProjectionEngine, ProjectionPoint, ProjectionResult, Quote, QuoteConfig,
    compute_maturity, generate_series, generate_series_for,
};
pub use scenario::QuoteRunner;
