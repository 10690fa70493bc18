//! End-to-end checks of the public projection API

use approx::assert_abs_diff_eq;
use term_deposit::{
    compute_maturity, generate_series, generate_series_for, lookup_apy, parse_deposit,
    AccountTier::{self, *},
    PayoutFrequency::{self, *},
    ProjectionEngine, RateTable, Selection,
    TermLength::{self, *},
};

#[test]
fn every_tabulated_apy() {
    let table = RateTable::standard();
    let expected: [(AccountTier, TermLength, [f64; 4]); 6] = [
        (Orbit, FiveYears, [5.5, 6.0, 7.5, 12.0]),
        (Orbit, SevenYears, [7.0, 7.5, 9.0, 13.5]),
        (Orbit, TenYears, [7.5, 8.0, 9.5, 14.0]),
        (Odyssey, FiveYears, [6.5, 7.0, 8.5, 13.0]),
        (Odyssey, SevenYears, [7.5, 8.0, 9.5, 14.0]),
        (Odyssey, TenYears, [8.5, 9.0, 10.5, 15.0]),
    ];

    let mut checked = 0;
    for (tier, term, rates) in expected {
        for (freq, apy) in [Monthly, Quarterly, Annually, Term].into_iter().zip(rates) {
            assert_eq!(lookup_apy(&table, tier, term, freq), apy, "{tier} {term} {freq}");
            checked += 1;
        }
    }
    assert_eq!(checked, 24);
}

#[test]
fn maturity_examples() {
    let zero = compute_maturity(0.0, 5, 5.5);
    assert_eq!((zero.interest, zero.total), (0.0, 0.0));

    let orbit = compute_maturity(50_000.0, 5, 5.5);
    assert_eq!((orbit.interest, orbit.total), (13_750.0, 63_750.0));
}

#[test]
fn term_series_is_single_unrounded_total() {
    for deposit in [0.0, 50_000.0, 61_234.56, 123_456.789] {
        for term in TermLength::ALL {
            let apy = lookup_apy(&RateTable::standard(), Odyssey, term, Term);
            let series = generate_series(deposit, term.years(), Term, apy);

            assert_eq!(series.len(), 1);
            let raw_total = deposit + deposit * (apy / 100.0) * term.years() as f64;
            assert_eq!(series[0].value, raw_total);
            assert_abs_diff_eq!(
                series[0].value,
                compute_maturity(deposit, term.years(), apy).total,
                epsilon = 0.005
            );
        }
    }
}

#[test]
fn monthly_series_has_twelve_points_ending_at_one_year_of_interest() {
    for term in TermLength::ALL {
        let years = term.years();
        let apy = lookup_apy(&RateTable::standard(), Orbit, term, Monthly);
        let deposit = 50_000.0;
        let series = generate_series(deposit, years, Monthly, apy);
        let maturity = compute_maturity(deposit, years, apy);

        assert_eq!(series.len(), 12);
        assert_abs_diff_eq!(
            series[11].value,
            deposit + maturity.interest / years as f64,
            epsilon = 0.005
        );
    }

    // With a one-year horizon the twelfth month lands on the maturity total
    let one_year = generate_series(50_000.0, 1, Monthly, 5.5);
    assert_eq!(one_year[11].value, compute_maturity(50_000.0, 1, 5.5).total);
}

#[test]
fn series_lengths_follow_cadence() {
    for term in TermLength::ALL {
        let years = term.years();
        assert_eq!(generate_series(60_000.0, years, Monthly, 6.0).len(), 12);
        assert_eq!(generate_series(60_000.0, years, Quarterly, 6.0).len(), 4);
        assert_eq!(generate_series(60_000.0, years, Annually, 6.0).len(), years as usize);
        assert_eq!(generate_series(60_000.0, years, Term, 6.0).len(), 1);
    }
    assert!(generate_series_for(60_000.0, 5, "Fortnightly", 6.0).is_empty());
}

#[test]
fn series_is_nondecreasing_and_indexed_from_zero() {
    for freq in PayoutFrequency::ALL {
        let series = generate_series(100_000.0, 10, freq, 9.0);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.index, i);
        }
        assert!(series.windows(2).all(|w| w[0].value <= w[1].value));
    }
}

#[test]
fn engine_calls_are_idempotent() {
    let engine = ProjectionEngine::default();
    for quote in term_deposit::QuoteRunner::new().rate_sheet(87_654.32) {
        let again = engine.quote(&quote.selection);
        assert_eq!(again.maturity.interest.to_bits(), quote.maturity.interest.to_bits());
        assert_eq!(again.maturity.total.to_bits(), quote.maturity.total.to_bits());
        assert_eq!(again.series.len(), quote.series.len());
        for (a, b) in again.series.iter().zip(&quote.series) {
            assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
    }
}

#[test]
fn total_increases_with_deposit() {
    let table = RateTable::standard();
    for tier in AccountTier::ALL {
        for term in TermLength::ALL {
            for freq in PayoutFrequency::ALL {
                let apy = table.lookup_apy(tier, term, freq);
                let totals: Vec<f64> = [0.0, 1.0, 50_000.0, 50_000.01, 100_000.0, 1_000_000.0]
                    .iter()
                    .map(|d| compute_maturity(*d, term.years(), apy).total)
                    .collect();
                assert!(totals.windows(2).all(|w| w[0] < w[1]), "{tier} {term} {freq}: {totals:?}");
            }
        }
    }
}

#[test]
fn bad_deposit_input_resolves_to_zero() {
    for input in ["", "abc", "-50,000", "NaN", "--", "1e999"] {
        assert_eq!(parse_deposit(input), 0.0, "{input:?}");

        let selection = Selection::default().with_deposit_input(input);
        let quote = ProjectionEngine::default().quote(&selection);
        assert_eq!(quote.maturity.total, 0.0);
        assert!(quote.series.iter().all(|p| p.value == 0.0));
    }
}
