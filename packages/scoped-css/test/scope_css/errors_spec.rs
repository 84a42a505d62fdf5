//! Error Tests
//!
//! Any failure aborts the whole call; no partial output is produced.

mod utils;
use scoped_css::{ErrorKind, ScopeCssError};
use utils::scope_err;

#[test]
fn should_reject_animations_with_an_unsupported_value_count() {
    for css in [
        "div { animation: 1s a b; }",
        "div { animation: 1s ease 1s 2 a; }",
        "div { animation: 1s ease 1s 2 reverse both a; }",
        "div { animation: 1s; }",
    ] {
        let err = scope_err("s", css);
        assert_eq!(err.kind(), ErrorKind::MalformedAnimation, "{}", css);
        assert!(
            err.to_string().starts_with("illegal animation value"),
            "{}",
            err
        );
    }
}

#[test]
fn should_reject_animations_whose_values_do_not_fit() {
    let err = scope_err("s", "div { animation: 1s 2s; }");
    assert_eq!(
        err,
        ScopeCssError::AnimationSlot {
            definition: "1s 2s".to_string(),
            token: "2s".to_string(),
        }
    );
}

#[test]
fn should_reject_unsupported_at_rules() {
    let err = scope_err("s", "@foo;");
    assert_eq!(err.kind(), ErrorKind::UnsupportedAtRule);
    assert!(err.to_string().contains("unsupported At-Rule \"@foo\""), "{}", err);

    for css in [
        "@import url(a.css);",
        "@font-face { font-family: x; }",
        "@charset \"utf-8\";",
        "a {}\n@page { margin: 0 }",
    ] {
        assert_eq!(scope_err("s", css).kind(), ErrorKind::UnsupportedAtRule, "{}", css);
    }
}

#[test]
fn should_reject_unterminated_quotes() {
    let err = scope_err("s", "a { content: \"oops; }");
    assert_eq!(err.kind(), ErrorKind::UnterminatedQuote);
}

#[test]
fn should_reject_structural_errors() {
    for css in [
        "a { color: red;",
        "a { color }",
        "a",
        "@media screen { a {}",
        "@keyframes spin { from { opacity: 0 }",
        "@keyframes {}",
        "a {} }",
    ] {
        assert_eq!(scope_err("s", css).kind(), ErrorKind::Structural, "{}", css);
    }
}

#[test]
fn should_not_produce_partial_output() {
    // The valid first rule is lost along with the bad second one.
    let result = scoped_css::scope_css("s", "a { color: red; }\nb { animation: 1s x y; }");
    assert!(result.is_err());
}
