use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a value with exactly `places` decimal places.
///
/// Midpoints are rounded away from zero, based on the exact binary value of the float, so `1.005` (which is
/// really `1.00499999...`) becomes `1.00` while `0.125` becomes `0.13`.
///
/// Values that cannot be represented as a `Decimal` (NaN, infinities, very large magnitudes) fall back to the
/// standard float formatting.
pub fn to_fixed(value: f64, places: u32) -> String {
    let value = normalize_zero(value);

    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", places as usize, rounded)
        }
        None => format!("{:.*}", places as usize, value),
    }
}

/// Formats a value in its shortest form, e.g. `288`, `242.5`, `83.3`.
pub fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

/// `-0.0` and `0.0` compare equal, but format differently.
pub fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
