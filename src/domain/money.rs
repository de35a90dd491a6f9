/// Amounts are plain binary floating-point values. The balance check
/// compares them exactly, so no normalization happens on input.
pub type Amount = f64;

/// Round an amount to two decimal places, halves away from zero.
/// Example: 161.050000001 -> 161.05, 0.125 -> 0.13
pub fn round_to_cents(amount: Amount) -> Amount {
    (amount * 100.0).round() / 100.0
}

/// Format an amount with two decimal places for display.
/// Example: 161.05 -> "161.05", 924.0 -> "924.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}
