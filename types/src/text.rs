//! Small pure text helpers.

/// First run of decimal digits in `s`, as `(substring, value)`.
///
/// Returns `None` when `s` has no digits or the run overflows `u64`.
#[must_use]
pub fn first_digit_run(s: &str) -> Option<(&str, u64)> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let run = &rest[..len];
    let value = run.parse::<u64>().ok()?;
    Some((run, value))
}

/// Replace the first occurrence of `needle` in `template` with `value`.
///
/// Used by the counter animation: each tick re-renders the original label
/// text with the digit run substituted, leaving surrounding text (`+`,
/// units, suffixes) intact.
#[must_use]
pub fn replace_first(template: &str, needle: &str, value: u64) -> String {
    template.replacen(needle, &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_run_at_start() {
        assert_eq!(first_digit_run("500+ клиентов"), Some(("500", 500)));
    }

    #[test]
    fn digit_run_in_middle() {
        assert_eq!(first_digit_run("более 12 лет"), Some(("12", 12)));
    }

    #[test]
    fn first_of_several_runs() {
        assert_eq!(first_digit_run("10 из 200"), Some(("10", 10)));
    }

    #[test]
    fn no_digits() {
        assert_eq!(first_digit_run("надежность"), None);
    }

    #[test]
    fn empty_string() {
        assert_eq!(first_digit_run(""), None);
    }

    #[test]
    fn replaces_only_first_occurrence() {
        assert_eq!(replace_first("10 из 10", "10", 7), "7 из 10");
    }

    #[test]
    fn replace_keeps_suffix() {
        assert_eq!(replace_first("500+ клиентов", "500", 250), "250+ клиентов");
    }
}
