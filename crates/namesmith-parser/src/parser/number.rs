//! Numeric normalization for identifier codes.

/// Canonicalize the digit run of an identifier.
///
/// Leading zeros are always stripped. Codes written with four or more digits
/// keep the stripped form (`"0"` if nothing is left); codes written with three
/// or fewer are left-padded back to exactly three digits.
///
/// ```
/// use namesmith_parser::parser::number::normalize;
///
/// assert_eq!(normalize("02"), "002");
/// assert_eq!(normalize("007"), "007");
/// assert_eq!(normalize("00231"), "231");
/// assert_eq!(normalize("0000"), "0");
/// ```
pub fn normalize(raw: &str) -> String {
    let stripped = raw.trim_start_matches('0');
    let stripped = if stripped.is_empty() { "0" } else { stripped };

    if raw.len() >= 4 {
        stripped.to_string()
    } else {
        format!("{stripped:0>3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_codes_padded_to_three() {
        assert_eq!(normalize("02"), "002");
        assert_eq!(normalize("20"), "020");
        assert_eq!(normalize("00"), "000");
        assert_eq!(normalize("99"), "099");
    }

    #[test]
    fn test_three_digit_codes_keep_padding() {
        assert_eq!(normalize("007"), "007");
        assert_eq!(normalize("070"), "070");
        assert_eq!(normalize("000"), "000");
        assert_eq!(normalize("123"), "123");
    }

    #[test]
    fn test_long_codes_lose_leading_zeros() {
        assert_eq!(normalize("00231"), "231");
        assert_eq!(normalize("0000"), "0");
        assert_eq!(normalize("0012"), "12");
        assert_eq!(normalize("9999"), "9999");
        assert_eq!(normalize("000001"), "1");
        assert_eq!(normalize("100000"), "100000");
    }
}
