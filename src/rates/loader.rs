//! CSV-based rate table loader
//!
//! Expected columns: `Tier,Term,Monthly,Quarterly,Annually,TermPayout`,
//! one row per (tier, term) pair.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::Reader;
use thiserror::Error;

use super::table::{term_index, tier_index};
use super::RateTable;
use crate::selection::{AccountTier, SelectionError, TermLength};

/// Default location of the rate sheet, relative to the working directory
pub const DEFAULT_RATE_TABLE_PATH: &str = "data/rate_table.csv";

/// Errors raised while loading a rate sheet
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("failed to open rate table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rate table row: {0}")]
    Csv(#[from] csv::Error),

    #[error("rate table row {row}: {source}")]
    Selection {
        row: usize,
        #[source]
        source: SelectionError,
    },

    #[error("rate table row {row}: non-finite or negative rate for {tier} {term}")]
    InvalidRate {
        row: usize,
        tier: AccountTier,
        term: TermLength,
    },

    #[error("rate table defines {tier} {term} more than once")]
    DuplicateRow { tier: AccountTier, term: TermLength },

    #[error("rate table is missing {tier} {term}")]
    MissingRow { tier: AccountTier, term: TermLength },
}

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Tier")]
    tier: String,
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "Monthly")]
    monthly: f64,
    #[serde(rename = "Quarterly")]
    quarterly: f64,
    #[serde(rename = "Annually")]
    annually: f64,
    #[serde(rename = "TermPayout")]
    term_payout: f64,
}

impl CsvRow {
    fn rates(&self) -> [f64; 4] {
        [self.monthly, self.quarterly, self.annually, self.term_payout]
    }
}

impl RateTable {
    /// Load the rate sheet from the default location
    pub fn from_csv() -> Result<Self, RateTableError> {
        Self::from_csv_path(Path::new(DEFAULT_RATE_TABLE_PATH))
    }

    /// Load the rate sheet from a specific CSV file
    pub fn from_csv_path(path: &Path) -> Result<Self, RateTableError> {
        let file = File::open(path).map_err(|source| RateTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        log::info!("loaded rate table from {}", path.display());
        Ok(table)
    }

    /// Load the rate sheet from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RateTableError> {
        let mut reader = Reader::from_reader(reader);
        let mut rows: [[Option<[f64; 4]>; 3]; 2] = [[None; 3]; 2];

        for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row_number = idx + 1;
            let record = result?;

            let tier: AccountTier = record.tier.parse().map_err(|source| RateTableError::Selection {
                row: row_number,
                source,
            })?;
            let term: TermLength = record.term.parse().map_err(|source| RateTableError::Selection {
                row: row_number,
                source,
            })?;

            let rates = record.rates();
            if rates.iter().any(|r| !r.is_finite() || *r < 0.0) {
                return Err(RateTableError::InvalidRate { row: row_number, tier, term });
            }

            let slot = &mut rows[tier_index(tier)][term_index(term)];
            if slot.is_some() {
                return Err(RateTableError::DuplicateRow { tier, term });
            }
            *slot = Some(rates);
        }

        let mut complete = [[[0.0; 4]; 3]; 2];
        for tier in AccountTier::ALL {
            for term in TermLength::ALL {
                complete[tier_index(tier)][term_index(term)] = rows[tier_index(tier)][term_index(term)]
                    .ok_or(RateTableError::MissingRow { tier, term })?;
            }
        }

        Ok(Self::from_rows(complete))
    }
}
