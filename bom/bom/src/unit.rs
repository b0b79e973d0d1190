/// Linear feet.
pub const LINEAR_FEET: &str = "LF";
/// Inches.
pub const INCHES: &str = "IN";

/// Linear units are billed by length rather than by count.
///
/// The comparison is exact, "lf" is not a linear unit.
pub fn is_linear_unit(unit: &str) -> bool {
    matches!(unit, LINEAR_FEET | INCHES)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("LF", true)]
    #[case("IN", true)]
    #[case("EA", false)]
    #[case("SQ FT", false)]
    #[case("lf", false)]
    #[case("", false)]
    fn test_is_linear_unit(#[case] unit: &str, #[case] expected: bool) {
        assert_eq!(is_linear_unit(unit), expected);
    }
}
