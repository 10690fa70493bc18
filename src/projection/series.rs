//! Projected balance series for charting

use serde::{Deserialize, Serialize};

use super::maturity::{compute_maturity, round_cents, simple_interest};
use crate::selection::PayoutFrequency;

/// One plotted balance sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Category name: "Month", "Quarter", "Year" or "Term"
    pub label: String,

    /// Projected balance at this point
    pub value: f64,

    /// Position in the series (0-indexed)
    pub index: usize,
}

impl ProjectionPoint {
    fn new(frequency: PayoutFrequency, index: usize, value: f64) -> Self {
        Self {
            label: frequency.point_label().to_string(),
            value,
            index,
        }
    }

    /// Interest accrued above the opening deposit at this point
    pub fn interest_over(&self, deposit: f64) -> f64 {
        self.value - deposit
    }

    /// Tooltip caption, e.g. "Month - 3"
    pub fn caption(&self) -> String {
        format!("{} - {}", self.label, self.index + 1)
    }
}

/// Straight-line balance projection for the chart
///
/// | frequency | points | point i (1-indexed)                          |
/// |-----------|--------|----------------------------------------------|
/// | Monthly   | 12     | deposit + interest * (i / term / 12)         |
/// | Quarterly | 4      | deposit + interest * (i / term / 4)          |
/// | Annually  | term   | deposit + interest * (i / term)              |
/// | Term      | 1      | deposit + interest, unrounded                |
///
/// Interpolated points use the cent-rounded maturity interest and are
/// themselves rounded to cents. The single Term point is the raw total and
/// is left unrounded.
pub fn generate_series(
    deposit: f64,
    term_years: u32,
    frequency: PayoutFrequency,
    apy: f64,
) -> Vec<ProjectionPoint> {
    let (count, per_year) = match frequency {
        PayoutFrequency::Monthly => (12, 12),
        PayoutFrequency::Quarterly => (4, 4),
        PayoutFrequency::Annually => (term_years as usize, 1),
        PayoutFrequency::Term => {
            let total = deposit + simple_interest(deposit, term_years, apy);
            return vec![ProjectionPoint::new(frequency, 0, total)];
        }
    };

    let maturity = compute_maturity(deposit, term_years, apy);
    let maturity_total = deposit + maturity.interest;

    (1..=count)
        .map(|i| {
            // A zero-year term earns nothing; keep the points at the deposit
            let fraction = if term_years == 0 {
                0.0
            } else {
                i as f64 / term_years as f64 / per_year as f64
            };
            let value = round_cents(deposit + (maturity_total - deposit) * fraction);
            ProjectionPoint::new(frequency, i - 1, value)
        })
        .collect()
}

/// Series for a frequency given by name, as received from a form field
///
/// An unrecognized name yields an empty series rather than an error.
pub fn generate_series_for(
    deposit: f64,
    term_years: u32,
    frequency: &str,
    apy: f64,
) -> Vec<ProjectionPoint> {
    match frequency.parse::<PayoutFrequency>() {
        Ok(freq) => generate_series(deposit, term_years, freq, apy),
        Err(err) => {
            log::debug!("{}; returning empty series", err);
            Vec::new()
        }
    }
}
