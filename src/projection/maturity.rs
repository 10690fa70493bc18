//! Maturity values under simple (non-compounding) interest

use serde::{Deserialize, Serialize};

/// Interest and balance at the end of the term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// APY percent the values were computed with
    pub apy: f64,

    /// Total interest earned over the term, rounded to cents
    pub interest: f64,

    /// Deposit plus interest, rounded to cents
    pub total: f64,
}

/// Round to 2 decimal places, halves away from zero
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unrounded simple interest: deposit * apy% * years
pub(crate) fn simple_interest(deposit: f64, term_years: u32, apy: f64) -> f64 {
    deposit * (apy / 100.0) * term_years as f64
}

/// Interest and balance at maturity
///
/// Interest is linear in the term: it is never compounded, whatever the
/// payout frequency. Zero deposits give zero values and negative deposits
/// pass straight through.
pub fn compute_maturity(deposit: f64, term_years: u32, apy: f64) -> ProjectionResult {
    let interest = simple_interest(deposit, term_years, apy);
    let total = deposit + interest;

    ProjectionResult {
        apy,
        interest: round_cents(interest),
        total: round_cents(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(2.5), 2.5);
        assert_eq!(round_cents(1234.5678), 1234.57);
        assert_eq!(round_cents(1234.5612), 1234.56);
        assert_eq!(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_orbit_five_year_monthly() {
        let result = compute_maturity(50_000.0, 5, 5.5);
        assert_eq!(result.interest, 13_750.0);
        assert_eq!(result.total, 63_750.0);
        assert_eq!(result.apy, 5.5);
    }

    #[test]
    fn test_zero_deposit() {
        let result = compute_maturity(0.0, 5, 5.5);
        assert_eq!(result.interest, 0.0);
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn test_negative_deposit_passes_through() {
        let result = compute_maturity(-1_000.0, 5, 10.0);
        assert_eq!(result.interest, -500.0);
        assert_eq!(result.total, -1_500.0);
    }

    #[test]
    fn test_interest_is_not_compounded() {
        // 10 years at 10% simple doubles the deposit
        let result = compute_maturity(100_000.0, 10, 10.0);
        assert_eq!(result.interest, 100_000.0);
        assert_eq!(result.total, 200_000.0);
    }

    #[test]
    fn test_odd_cents_are_rounded() {
        // 12,345.67 * 7.5% * 7 = 6,481.476750...
        let result = compute_maturity(12_345.67, 7, 7.5);
        assert_eq!(result.interest, 6_481.48);
        assert_eq!(result.total, 18_827.15);
    }
}
