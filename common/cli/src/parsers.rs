/// Parses a non-negative, finite length, e.g. a kerf width of '0.125'.
pub fn length_parser(s: &str) -> Result<f64, String> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("Invalid length: '{}', cause: {}", s, error))?;

    if !value.is_finite() {
        return Err(format!("Invalid length: '{}', expected a finite number", s));
    }
    if value < 0.0 {
        return Err(format!("Invalid length: '{}', expected a number >= 0", s));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0.125", Ok(0.125))]
    #[case("0", Ok(0.0))]
    #[case(" 0.25 ", Ok(0.25))]
    #[case("1/8", Err("Invalid length: '1/8', cause: invalid float literal".to_string()))]
    #[case("-0.125", Err("Invalid length: '-0.125', expected a number >= 0".to_string()))]
    #[case("inf", Err("Invalid length: 'inf', expected a finite number".to_string()))]
    #[case("NaN", Err("Invalid length: 'NaN', expected a finite number".to_string()))]
    fn test_length_parser(#[case] value: &str, #[case] expected: Result<f64, String>) {
        assert_eq!(length_parser(value), expected);
    }
}
