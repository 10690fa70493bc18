//! Projection engine for term deposit quotes

mod engine;
mod maturity;
mod payouts;
mod series;

pub use engine::{ProjectionEngine, Quote, QuoteConfig};
pub use maturity::{compute_maturity, round_cents, ProjectionResult};
pub use payouts::{payout_breakdown, PayoutBreakdown};
pub use series::{generate_series, generate_series_for, ProjectionPoint};
