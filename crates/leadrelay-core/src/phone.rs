//! Phone number normalization.

/// Formats a raw phone string as `(AAA) BBB-CCCC`.
///
/// Inputs that are empty or already formatted (leading `(`) are returned
/// unchanged, which makes the function idempotent. All non-digits are
/// stripped, a leading `1` country code is dropped from 11-digit numbers,
/// and anything that does not reduce to exactly 10 digits passes through
/// untouched. Malformed numbers are never an error.
pub fn format_phone(phone: &str) -> String {
    if phone.is_empty() || phone.starts_with('(') {
        return phone.to_string();
    }

    let mut digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        digits.remove(0);
    }

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_ten_digits() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn strips_separators_before_formatting() {
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone("555 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn drops_leading_country_code() {
        assert_eq!(format_phone("15551234567"), "(555) 123-4567");
        assert_eq!(format_phone("+1 555 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn already_formatted_input_is_untouched() {
        assert_eq!(format_phone("(555) 123-4567"), "(555) 123-4567");
    }

    #[test]
    fn unrecognized_shapes_pass_through() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_phone("call the office"), "call the office");
        assert_eq!(format_phone("+44 20 7946 0958"), "+44 20 7946 0958");
    }
}
