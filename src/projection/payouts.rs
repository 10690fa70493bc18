//! Per-period interest payouts shown alongside the projection

use serde::{Deserialize, Serialize};

use crate::selection::PayoutFrequency;

/// Whole-dollar interest paid per period
///
/// A period finer than the chosen payout frequency is reported as 0: a
/// quarterly payout has no monthly figure, a term payout has only the term
/// figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    pub monthly: f64,
    pub quarterly: f64,
    pub yearly: f64,
    pub term: f64,
}

/// Split total maturity interest into per-period payouts
///
/// Figures are truncated toward zero to whole dollars.
pub fn payout_breakdown(interest: f64, term_years: u32, frequency: PayoutFrequency) -> PayoutBreakdown {
    let per_period = |periods_per_year: f64, paid: bool| {
        if !paid || term_years == 0 {
            0.0
        } else {
            whole_dollars(interest / term_years as f64 / periods_per_year)
        }
    };

    use PayoutFrequency::*;
    PayoutBreakdown {
        monthly: per_period(12.0, matches!(frequency, Monthly)),
        quarterly: per_period(4.0, matches!(frequency, Monthly | Quarterly)),
        yearly: per_period(1.0, matches!(frequency, Monthly | Quarterly | Annually)),
        term: whole_dollars(interest),
    }
}

fn whole_dollars(amount: f64) -> f64 {
    if amount.is_finite() {
        amount.trunc()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_shows_every_period() {
        // 13,750 over 5 years
        let payouts = payout_breakdown(13_750.0, 5, PayoutFrequency::Monthly);
        assert_eq!(payouts.monthly, 229.0);
        assert_eq!(payouts.quarterly, 687.0);
        assert_eq!(payouts.yearly, 2_750.0);
        assert_eq!(payouts.term, 13_750.0);
    }

    #[test]
    fn test_coarser_frequencies_hide_finer_periods() {
        let quarterly = payout_breakdown(15_000.0, 5, PayoutFrequency::Quarterly);
        assert_eq!(quarterly.monthly, 0.0);
        assert_eq!(quarterly.quarterly, 750.0);
        assert_eq!(quarterly.yearly, 3_000.0);

        let annually = payout_breakdown(18_750.0, 5, PayoutFrequency::Annually);
        assert_eq!(annually.monthly, 0.0);
        assert_eq!(annually.quarterly, 0.0);
        assert_eq!(annually.yearly, 3_750.0);

        let term = payout_breakdown(30_000.0, 5, PayoutFrequency::Term);
        assert_eq!(
            term,
            PayoutBreakdown { monthly: 0.0, quarterly: 0.0, yearly: 0.0, term: 30_000.0 }
        );
    }

    #[test]
    fn test_truncation_toward_zero() {
        let payouts = payout_breakdown(999.99, 1, PayoutFrequency::Monthly);
        assert_eq!(payouts.monthly, 83.0);
        assert_eq!(payouts.term, 999.0);

        let negative = payout_breakdown(-999.99, 1, PayoutFrequency::Annually);
        assert_eq!(negative.yearly, -999.0);
    }

    #[test]
    fn test_zero_term() {
        let payouts = payout_breakdown(0.0, 0, PayoutFrequency::Monthly);
        assert_eq!(payouts.monthly, 0.0);
        assert_eq!(payouts.quarterly, 0.0);
        assert_eq!(payouts.yearly, 0.0);
        assert_eq!(payouts.term, 0.0);
    }
}
