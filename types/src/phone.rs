//! Russian phone number validation and formatting.
//!
//! Three related but distinct operations share this module:
//!
//! - [`is_valid`] gates form submission,
//! - [`canonical`] normalizes a validated number just before delivery,
//! - [`format_as_typed`] re-renders the phone field on every keystroke.
//!
//! The as-typed formatter is progressive: for any partial digit sequence its
//! output is a prefix of the full `+7 (XXX) XXX-XX-XX` rendering, so the
//! field never jumps under the caret.

use std::sync::LazyLock;

use regex::Regex;

/// Mobile/landline pattern: optional `+7`/`7`/`8` country prefix, a 3-digit
/// operator code starting with 4-9, a 3-digit group, then two 2-digit groups,
/// with optional separators tolerated around the operator code.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+7|7|8)?[\s\-]?\(?[489][0-9]{2}\)?[\s\-]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}$")
        .expect("valid phone regex")
});

/// Keep digits plus a single leading `+`.
fn strip_for_validation(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit);
    if trimmed.starts_with('+') {
        std::iter::once('+').chain(digits).collect()
    } else {
        digits.collect()
    }
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Whether `raw` is an acceptable phone number.
///
/// Everything except digits and a leading plus sign is stripped before the
/// pattern match, so live-formatted values (`+7 (999) 123-45-67`) and bare
/// digit strings (`89991234567`) validate identically.
#[must_use]
pub fn is_valid(raw: &str) -> bool {
    PHONE_RE.is_match(&strip_for_validation(raw))
}

/// Canonical rendering used just before delivery.
///
/// Exactly 11 digits render as `+7 (XXX) XXX-XX-XX`, skipping the leading
/// country digit. Anything else is returned unchanged; post-validation this
/// fallback should not occur.
#[must_use]
pub fn canonical(raw: &str) -> String {
    let digits = digits_of(raw);
    if digits.len() == 11 {
        format!(
            "+7 ({}) {}-{}-{}",
            &digits[1..4],
            &digits[4..7],
            &digits[7..9],
            &digits[9..11]
        )
    } else {
        raw.to_string()
    }
}

/// Progressive rendering applied on every keystroke in the phone field.
///
/// Strips the input to digits, coerces the country digit to `7` when the
/// first typed digit is neither `7` nor `8`, then renders as much of the
/// canonical template as the available digits cover. Digits beyond the 11th
/// are dropped. Empty input renders empty.
#[must_use]
pub fn format_as_typed(raw: &str) -> String {
    let mut digits = digits_of(raw);
    if digits.is_empty() {
        return String::new();
    }
    if !digits.starts_with('7') && !digits.starts_with('8') {
        digits.insert(0, '7');
    }

    let end = digits.len().min(11);
    let mut formatted = String::from("+7 ");
    if digits.len() > 1 {
        formatted.push('(');
        formatted.push_str(&digits[1..end.min(4)]);
    }
    if digits.len() >= 4 {
        formatted.push_str(") ");
        formatted.push_str(&digits[4..end.min(7)]);
    }
    if digits.len() >= 7 {
        formatted.push('-');
        formatted.push_str(&digits[7..end.min(9)]);
    }
    if digits.len() >= 9 {
        formatted.push('-');
        formatted.push_str(&digits[9..end]);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bare_digits_with_eight() {
        assert!(is_valid("89991234567"));
    }

    #[test]
    fn valid_plus_seven() {
        assert!(is_valid("+79991234567"));
    }

    #[test]
    fn valid_formatted() {
        assert!(is_valid("+7 (999) 123-45-67"));
    }

    #[test]
    fn valid_without_country_prefix() {
        assert!(is_valid("4951234567"));
    }

    #[test]
    fn invalid_too_short() {
        assert!(!is_valid("123"));
    }

    #[test]
    fn invalid_operator_code_start() {
        // Operator codes start with 4-9; 1xx and 2xx are rejected.
        assert!(!is_valid("81231234567"));
        assert!(!is_valid("82991234567"));
    }

    #[test]
    fn invalid_letters_dominating() {
        assert!(!is_valid("call me maybe"));
    }

    #[test]
    fn empty_is_invalid() {
        assert!(!is_valid(""));
    }

    #[test]
    fn canonical_eleven_digits() {
        assert_eq!(canonical("89991234567"), "+7 (999) 123-45-67");
        assert_eq!(canonical("+7 (999) 123-45-67"), "+7 (999) 123-45-67");
    }

    #[test]
    fn canonical_preserves_significant_digits_in_order() {
        assert_eq!(canonical("74956781203"), "+7 (495) 678-12-03");
    }

    #[test]
    fn canonical_fallback_returns_input() {
        assert_eq!(canonical("123"), "123");
        assert_eq!(canonical(""), "");
    }

    #[test]
    fn as_typed_empty() {
        assert_eq!(format_as_typed(""), "");
        assert_eq!(format_as_typed("abc"), "");
    }

    #[test]
    fn as_typed_single_country_digit() {
        assert_eq!(format_as_typed("8"), "+7 ");
        assert_eq!(format_as_typed("7"), "+7 ");
    }

    #[test]
    fn as_typed_coerces_leading_digit() {
        // "9" is treated as the first operator digit, not a country code.
        assert_eq!(format_as_typed("9"), "+7 (9");
    }

    #[test]
    fn as_typed_progressive_boundaries() {
        assert_eq!(format_as_typed("79"), "+7 (9");
        assert_eq!(format_as_typed("7999"), "+7 (999) ");
        assert_eq!(format_as_typed("79991"), "+7 (999) 1");
        assert_eq!(format_as_typed("7999123"), "+7 (999) 123-");
        assert_eq!(format_as_typed("799912345"), "+7 (999) 123-45-");
        assert_eq!(format_as_typed("79991234567"), "+7 (999) 123-45-67");
    }

    #[test]
    fn as_typed_ignores_excess_digits() {
        assert_eq!(format_as_typed("7999123456789"), "+7 (999) 123-45-67");
    }

    #[test]
    fn as_typed_each_step_is_prefix_of_full() {
        let full_digits = "89161234567";
        let full = format_as_typed(full_digits);
        for take in 1..=full_digits.len() {
            let partial = format_as_typed(&full_digits[..take]);
            assert!(
                full.starts_with(&partial),
                "{partial:?} is not a prefix of {full:?}"
            );
        }
    }

    #[test]
    fn as_typed_strips_non_digits() {
        assert_eq!(format_as_typed("+7 (999) 1"), "+7 (999) 1");
    }
}
