//! Deposit selection types matching the calculator form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::deposit::parse_deposit;

/// Errors for selection values the typed API cannot represent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown account tier '{0}' (expected Orbit or Odyssey)")]
    InvalidTier(String),

    #[error("unsupported term '{0}' (expected 5, 7 or 10 years)")]
    InvalidTerm(String),

    #[error("unknown payout frequency '{0}' (expected Monthly, Quarterly, Annually or Term)")]
    InvalidFrequency(String),
}

/// Account tier offered to the depositor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountTier {
    Orbit,
    Odyssey,
}

impl AccountTier {
    /// All tiers in rate-table order
    pub const ALL: [AccountTier; 2] = [AccountTier::Orbit, AccountTier::Odyssey];

    /// Minimum opening deposit for the tier
    pub fn minimum_deposit(&self) -> f64 {
        match self {
            AccountTier::Orbit => 50_000.0,
            AccountTier::Odyssey => 100_000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountTier::Orbit => "Orbit",
            AccountTier::Odyssey => "Odyssey",
        }
    }
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountTier {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orbit" => Ok(AccountTier::Orbit),
            "odyssey" => Ok(AccountTier::Odyssey),
            _ => Err(SelectionError::InvalidTier(s.to_string())),
        }
    }
}

/// Whole-year deposit term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermLength {
    FiveYears,
    SevenYears,
    TenYears,
}

impl TermLength {
    /// All terms in rate-table order
    pub const ALL: [TermLength; 3] = [
        TermLength::FiveYears,
        TermLength::SevenYears,
        TermLength::TenYears,
    ];

    /// Term length in years
    pub fn years(&self) -> u32 {
        match self {
            TermLength::FiveYears => 5,
            TermLength::SevenYears => 7,
            TermLength::TenYears => 10,
        }
    }

    /// Normalize an integer year count to a supported term
    pub fn from_years(years: u32) -> Result<Self, SelectionError> {
        match years {
            5 => Ok(TermLength::FiveYears),
            7 => Ok(TermLength::SevenYears),
            10 => Ok(TermLength::TenYears),
            other => Err(SelectionError::InvalidTerm(other.to_string())),
        }
    }
}

impl fmt::Display for TermLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Years", self.years())
    }
}

impl FromStr for TermLength {
    type Err = SelectionError;

    /// Accepts "5", " 7 " and the dropdown label form "10 Years"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("Years")
            .or_else(|| trimmed.strip_suffix("years"))
            .unwrap_or(trimmed)
            .trim();

        digits
            .parse::<u32>()
            .map_err(|_| SelectionError::InvalidTerm(s.to_string()))
            .and_then(|years| {
                Self::from_years(years).map_err(|_| SelectionError::InvalidTerm(s.to_string()))
            })
    }
}

impl TryFrom<u32> for TermLength {
    type Error = SelectionError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::from_years(years)
    }
}

/// How often interest is paid out over the term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutFrequency {
    Monthly,
    Quarterly,
    Annually,
    Term,
}

impl PayoutFrequency {
    /// All frequencies in rate-table column order
    pub const ALL: [PayoutFrequency; 4] = [
        PayoutFrequency::Monthly,
        PayoutFrequency::Quarterly,
        PayoutFrequency::Annually,
        PayoutFrequency::Term,
    ];

    /// Column index into a rate-table row
    pub fn column(&self) -> usize {
        match self {
            PayoutFrequency::Monthly => 0,
            PayoutFrequency::Quarterly => 1,
            PayoutFrequency::Annually => 2,
            PayoutFrequency::Term => 3,
        }
    }

    /// Category name used for projected series points
    pub fn point_label(&self) -> &'static str {
        match self {
            PayoutFrequency::Monthly => "Month",
            PayoutFrequency::Quarterly => "Quarter",
            PayoutFrequency::Annually => "Year",
            PayoutFrequency::Term => "Term",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutFrequency::Monthly => "Monthly",
            PayoutFrequency::Quarterly => "Quarterly",
            PayoutFrequency::Annually => "Annually",
            PayoutFrequency::Term => "Term",
        }
    }
}

impl fmt::Display for PayoutFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoutFrequency {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PayoutFrequency::Monthly),
            "quarterly" => Ok(PayoutFrequency::Quarterly),
            "annually" => Ok(PayoutFrequency::Annually),
            "term" => Ok(PayoutFrequency::Term),
            _ => Err(SelectionError::InvalidFrequency(s.to_string())),
        }
    }
}

/// Current state of the deposit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub tier: AccountTier,
    pub term: TermLength,
    pub frequency: PayoutFrequency,
    /// Deposit amount, already normalized (never negative or NaN)
    pub deposit: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            tier: AccountTier::Orbit,
            term: TermLength::FiveYears,
            frequency: PayoutFrequency::Monthly,
            deposit: AccountTier::Orbit.minimum_deposit(),
        }
    }
}

impl Selection {
    pub fn new(tier: AccountTier, term: TermLength, frequency: PayoutFrequency, deposit: f64) -> Self {
        let selection = Self {
            tier,
            term,
            frequency,
            deposit: normalize_amount(deposit),
        };
        selection.warn_if_below_minimum();
        selection
    }

    /// Switch tier; the deposit resets to the new tier's minimum
    pub fn with_tier(mut self, tier: AccountTier) -> Self {
        self.tier = tier;
        self.deposit = tier.minimum_deposit();
        self
    }

    pub fn with_term(mut self, term: TermLength) -> Self {
        self.term = term;
        self
    }

    pub fn with_frequency(mut self, frequency: PayoutFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the deposit from raw form input such as "50,000"
    pub fn with_deposit_input(mut self, input: &str) -> Self {
        self.deposit = parse_deposit(input);
        self.warn_if_below_minimum();
        self
    }

    pub fn meets_minimum(&self) -> bool {
        self.deposit >= self.tier.minimum_deposit()
    }

    fn warn_if_below_minimum(&self) {
        if !self.meets_minimum() {
            log::warn!(
                "deposit {:.2} is below the {} minimum of {:.2}",
                self.deposit,
                self.tier,
                self.tier.minimum_deposit()
            );
        }
    }
}

fn normalize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}
