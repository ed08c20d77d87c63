//! Input validation for package names, versions and attempt counts.
//!
//! Everything here is pure and runs before any request is made.

use crate::types::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Attempts used when the caller does not supply a count.
pub const DEFAULT_ATTEMPTS: u32 = 1;

static PACKAGE_NAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+$").unwrap());

/// One to four numeric segments with an optional pre-release label.
static PACKAGE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]+)?(\.[0-9]+)?(\.[0-9]+)?(-[0-9A-Za-z.-]+)?$").unwrap()
});

/// Check that `input` is not blank and, if given, that it matches `pattern`.
///
/// The pattern is applied to the untrimmed input, so surrounding whitespace
/// fails any anchored pattern.
pub fn is_valid_input(input: &str, pattern: Option<&Regex>) -> bool {
    !input.trim().is_empty() && pattern.is_none_or(|re| re.is_match(input))
}

/// Validate a package identifier.
///
/// Allowed: ASCII letters, digits, `.`, `_` and `-`. The name must start with
/// a letter or digit, must not contain `..` and must not end with `.` or `-`.
pub fn is_valid_package_name(name: &str) -> bool {
    if !is_valid_input(name, Some(&PACKAGE_NAME_CHARSET)) {
        return false;
    }

    let starts_alphanumeric = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());

    starts_alphanumeric && !name.contains("..") && !name.ends_with('.') && !name.ends_with('-')
}

/// Validate a version string such as `1`, `1.2.3.4` or `1.2.3-beta.1`.
pub fn is_valid_package_version(version: &str) -> bool {
    is_valid_input(version, Some(&PACKAGE_VERSION))
}

/// Check that `input` is a finite number no smaller than one.
pub fn is_valid_attempt_budget(input: &str) -> bool {
    input
        .trim()
        .parse::<f64>()
        .is_ok_and(|n| n.is_finite() && n >= 1.0)
}

/// Resolve the raw `attempts` input into an attempt budget.
///
/// Missing or blank input falls back to [`DEFAULT_ATTEMPTS`]. A valid budget
/// is cut down to its leading whole number, so `"2.0"` is 2, `"1.5"` is 1 and
/// `"1e3"` is 1.
pub fn parse_attempt_budget(raw: Option<&str>) -> Result<u32, ValidationError> {
    let trimmed = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(DEFAULT_ATTEMPTS),
    };

    if !is_valid_attempt_budget(trimmed) {
        return Err(ValidationError::Attempts(trimmed.to_string()));
    }

    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    // No leading digits (".5e1"): fall back to the number's integer part.
    let whole = if digits.is_empty() {
        trimmed.parse::<f64>().map(|n| n.trunc().to_string()).unwrap_or_default()
    } else {
        digits.to_string()
    };

    match whole.parse::<u32>() {
        Ok(0) => Ok(DEFAULT_ATTEMPTS),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::Attempts(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_input() {
        assert!(is_valid_input("abc", None));
        assert!(!is_valid_input("", None));
        assert!(!is_valid_input("   ", None));

        let digits = Regex::new(r"^[0-9]+$").unwrap();
        assert!(is_valid_input("123", Some(&digits)));
        assert!(!is_valid_input(" 123 ", Some(&digits)));
        assert!(!is_valid_input("12a", Some(&digits)));
    }

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package_name("NuGetPackage"));
        assert!(is_valid_package_name("10Package-F_dx64.dd.A"));
        assert!(is_valid_package_name("PackageName__"));
        assert!(is_valid_package_name("a"));
        assert!(is_valid_package_name("Newtonsoft.Json"));
    }

    #[test]
    fn test_invalid_package_names() {
        assert!(!is_valid_package_name("!Invalid"));
        assert!(!is_valid_package_name("%invalidName"));
        assert!(!is_valid_package_name("-Invalid"));
        assert!(!is_valid_package_name("_Invalid"));
        assert!(!is_valid_package_name("Invalid Name"));
        assert!(!is_valid_package_name("..Invalid"));
        assert!(!is_valid_package_name(".Invalid"));
        assert!(!is_valid_package_name("Invalid..Name"));
        assert!(!is_valid_package_name("Invalid."));
        assert!(!is_valid_package_name("Invalid-"));
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("   "));
    }

    #[test]
    fn test_package_name_edge_cases() {
        assert!(!is_valid_package_name("a..b"));
        assert!(!is_valid_package_name("a."));
        assert!(!is_valid_package_name("a-"));
        assert!(!is_valid_package_name("-a"));
        assert!(!is_valid_package_name("_a"));
        assert!(!is_valid_package_name("Pąckage"));
    }

    #[test]
    fn test_valid_versions() {
        for version in [
            "0.0.1",
            "1",
            "1.0",
            "1.0.0",
            "1.0.0-beta",
            "1.0.0-BETA",
            "1.0.0.1",
            "1.0.0.1-preview",
            "2.1.0-rc.1",
            "3.0.0-alpha-2",
        ] {
            assert!(is_valid_package_version(version), "{version} should be valid");
        }
    }

    #[test]
    fn test_invalid_versions() {
        for version in [
            "1.0.0.1.5",
            "v1.0.0",
            "A.B.Invalid",
            "",
            " ",
            "1.0.0-",
            "1..0",
            "1.0.0+build",
            " 1.0.0",
        ] {
            assert!(!is_valid_package_version(version), "{version:?} should be invalid");
        }
    }

    #[test]
    fn test_attempt_budget() {
        assert!(is_valid_attempt_budget("3"));
        assert!(is_valid_attempt_budget("1"));
        assert!(!is_valid_attempt_budget("-1"));
        assert!(!is_valid_attempt_budget("0"));
        assert!(!is_valid_attempt_budget("abc"));
        assert!(!is_valid_attempt_budget(""));
        assert!(!is_valid_attempt_budget("NaN"));
        assert!(!is_valid_attempt_budget("inf"));
    }

    #[test]
    fn test_parse_attempt_budget() {
        assert_eq!(parse_attempt_budget(None), Ok(DEFAULT_ATTEMPTS));
        assert_eq!(parse_attempt_budget(Some("")), Ok(DEFAULT_ATTEMPTS));
        assert_eq!(parse_attempt_budget(Some("  ")), Ok(DEFAULT_ATTEMPTS));
        assert_eq!(parse_attempt_budget(Some("5")), Ok(5));
        assert_eq!(parse_attempt_budget(Some(" 2 ")), Ok(2));
        assert_eq!(
            parse_attempt_budget(Some("-10")),
            Err(ValidationError::Attempts("-10".to_string()))
        );
        assert!(parse_attempt_budget(Some("abc")).is_err());
    }

    #[test]
    fn test_parse_attempt_budget_takes_leading_whole_number() {
        for (input, expected) in [
            ("2.0", 2),
            ("1.5", 1),
            ("3.", 3),
            ("1e3", 1),
            ("+4", 4),
            ("0010", 10),
            (".5e1", 5),
        ] {
            assert!(is_valid_attempt_budget(input), "{input} should be a valid budget");
            assert_eq!(parse_attempt_budget(Some(input)), Ok(expected), "{input}");
        }
    }

    #[test]
    fn test_parse_attempt_budget_rejects_overflow() {
        assert_eq!(
            parse_attempt_budget(Some("99999999999")),
            Err(ValidationError::Attempts("99999999999".to_string()))
        );
    }
}
