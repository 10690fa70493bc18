//! Selection types and deposit input handling

mod data;
mod deposit;

pub use data::{AccountTier, PayoutFrequency, Selection, SelectionError, TermLength};
pub use deposit::parse_deposit;
