//! Deposit input parsing

/// Parse a deposit amount from form input such as "50,000" or "125000.50"
///
/// Thousands separators are stripped before parsing. Empty, unparseable,
/// non-finite and negative input all resolve to 0 so the engine never has to
/// reject a frame.
pub fn parse_deposit(input: &str) -> f64 {
    let cleaned: String = input.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
        Ok(amount) => {
            log::debug!("deposit input {:?} parsed to {}, using 0", input, amount);
            0.0
        }
        Err(_) => {
            log::debug!("deposit input {:?} is not a number, using 0", input);
            0.0
        }
    }
}
