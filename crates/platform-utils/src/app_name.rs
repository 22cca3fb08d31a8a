use std::sync::LazyLock;

use regex::Regex;

/// Identifier-safe application names: no path separators, never `.` or `..`.
pub const APP_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9._-]*$";

/// Predicate deciding whether an app name may be used as a path segment.
pub type AppNamePredicate = fn(&str) -> bool;

static APP_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(APP_NAME_PATTERN).expect("valid regex"));

pub fn is_valid_app_name(name: &str) -> bool {
    APP_NAME_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_identifier_like_names() {
        for name in ["myapp", "MyApp2", "my-app", "my_app", "org.example.app", "7zip"] {
            assert!(is_valid_app_name(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_empty_and_path_like_names() {
        for name in ["", ".", "..", "../etc", "a/b", r"a\b", ".hidden", "-flag", "has space", "caf\u{e9}"] {
            assert!(!is_valid_app_name(name), "{name:?} should be invalid");
        }
    }
}
