//! Scoped CSS Test Utils

use regex::Regex;
use scoped_css::{scope_css, ScopeCssError};

#[allow(dead_code)]
pub fn scope(scope_name: &str, css: &str) -> String {
    match scope_css(scope_name, css) {
        Ok(scoped) => scoped,
        Err(err) => panic!("Expected '{}' to scope cleanly, got: {}", css, err),
    }
}

#[allow(dead_code)]
pub fn scope_err(scope_name: &str, css: &str) -> ScopeCssError {
    match scope_css(scope_name, css) {
        Ok(scoped) => panic!("Expected '{}' to fail, got '{}'", css, scoped),
        Err(err) => err,
    }
}

/// Collapse whitespace runs so expectations can be written readably.
pub fn normalize_css(css: &str) -> String {
    let spaces = Regex::new(r"\s+").unwrap();
    spaces.replace_all(css, " ").trim().to_string()
}

#[allow(dead_code)]
pub fn assert_equal_css(actual: &str, expected: &str) {
    let actual_css = normalize_css(actual);
    let expected_css = normalize_css(expected);
    assert_eq!(
        actual_css, expected_css,
        "Expected '{}' to equal '{}'",
        actual_css, expected_css
    );
}

#[allow(dead_code)]
pub fn assert_contains(actual: &str, expected: &str) {
    assert!(
        actual.contains(expected),
        "Expected '{}' to contain '{}'",
        actual,
        expected
    );
}

#[allow(dead_code)]
pub fn assert_not_contains(actual: &str, expected: &str) {
    assert!(
        !actual.contains(expected),
        "Expected '{}' to not contain '{}'",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_css() {
        let css = "  \n  one {\n\tcolor: red; }  \n  ";
        assert_eq!(normalize_css(css), "one { color: red; }");
    }
}
