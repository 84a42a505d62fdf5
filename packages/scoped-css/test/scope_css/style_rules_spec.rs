//! Style Rule Tests
//!
//! Selectors are prefixed, declarations are compressed but otherwise kept.

mod utils;
use utils::{assert_not_contains, scope};

#[test]
fn should_output_nothing_for_empty_css() {
    assert_eq!(scope("dummy", ""), "");
}

#[test]
fn should_output_nothing_for_blank_css() {
    assert_eq!(scope("dummy", " \n\r\x0B\x0C\t"), "");
}

#[test]
fn should_prefix_every_selector_of_a_list() {
    assert_eq!(
        scope("s", "a.x,a.y{color:red;}"),
        "[data-s] a.x,[data-s] a.y{color:red;}\n"
    );
}

#[test]
fn should_keep_an_empty_block() {
    assert_eq!(scope("s", "a{}"), "[data-s] a{}\n");
    assert_eq!(
        scope("dummy", "\na.banner-body {   }"),
        "[data-dummy] a.banner-body{}\n"
    );
}

#[test]
fn should_compress_a_single_declaration() {
    let css = "
a.banner-body {
    text-decoration: none;
}";
    assert_eq!(
        scope("dummy", css),
        "[data-dummy] a.banner-body{text-decoration:none;}\n"
    );
}

#[test]
fn should_keep_values_verbatim() {
    let css = "
a.banner-body {
    display: flex;
    border: 1px solid #afafaf;
}
            ";
    assert_eq!(
        scope("dummy", css),
        "[data-dummy] a.banner-body{display:flex;border:1px solid #afafaf;}\n"
    );
}

#[test]
fn should_put_each_rule_on_its_own_line() {
    let css = "
a.banner-body {
    display: flex;
}
a.banner-footer {
    display: flex;
}
            ";
    assert_eq!(
        scope("dummy", css),
        "[data-dummy] a.banner-body{display:flex;}\n[data-dummy] a.banner-footer{display:flex;}\n"
    );
}

#[test]
fn should_trim_selectors_around_commas() {
    let css = "
a.banner-body, a.banner-footer {
    display: flex;
}
            ";
    assert_eq!(
        scope("dummy", css),
        "[data-dummy] a.banner-body,[data-dummy] a.banner-footer{display:flex;}\n"
    );
}

#[test]
fn should_keep_complex_selectors_intact() {
    let css = "ul > li:nth-child(2n + 1), a[href^='http://x.io/a,b'] ~ p::after, :is(h1, h2) { margin: 0 }";
    assert_eq!(
        scope("s", css),
        "[data-s] ul > li:nth-child(2n + 1),[data-s] a[href^='http://x.io/a,b'] ~ p::after,[data-s] :is(h1, h2){margin:0;}\n"
    );
}

#[test]
fn should_keep_escaped_selector_characters() {
    assert_eq!(
        scope("s", r".w-1\/2, .a\,b { width: 50%; }"),
        "[data-s] .w-1\\/2,[data-s] .a\\,b{width:50%;}\n"
    );
}

#[test]
fn should_keep_quoted_delimiters_in_values() {
    let css = r#"q::before { content: "a; b } c"; font-family: "Helvetica Neue", sans-serif; }"#;
    assert_eq!(
        scope("s", css),
        "[data-s] q::before{content:\"a; b } c\";font-family:\"Helvetica Neue\", sans-serif;}\n"
    );
}

#[test]
fn should_not_touch_non_animation_properties_mentioning_animation() {
    let css = "a { animation-duration: 2s; transition: opacity 1s; }";
    let scoped = scope("s", css);
    assert_eq!(scoped, "[data-s] a{animation-duration:2s;transition:opacity 1s;}\n");
    assert_not_contains(&scoped, "2s-s");
}

#[test]
fn should_scope_independent_calls_independently() {
    let css = "p { color: blue; }";
    assert_eq!(scope("one", css), "[data-one] p{color:blue;}\n");
    assert_eq!(scope("two", css), "[data-two] p{color:blue;}\n");
}

#[test]
fn should_skip_a_comment_before_a_selector() {
    assert_eq!(
        scope("s", "/* don't touch */\na { color: red; }"),
        "[data-s] a{color:red;}\n"
    );
}

#[test]
fn should_skip_comments_between_declarations() {
    assert_eq!(
        scope("s", "a { color: red; /* note */ margin: 0; /* trailing */ }"),
        "[data-s] a{color:red;margin:0;}\n"
    );
}

#[test]
fn should_ignore_quotes_commas_and_braces_in_comments() {
    let css = "/* it's a, b } */ a, /* x's } */ b { /* c, d } */ color: red; }\n/* end' */";
    assert_eq!(scope("s", css), "[data-s] a,[data-s] b{color:red;}\n");
}

#[test]
fn should_keep_a_comment_inside_a_selector() {
    assert_eq!(
        scope("s", "a /* x, y' */ > b {}"),
        "[data-s] a /* x, y' */ > b{}\n"
    );
}

#[test]
fn should_scope_a_comment_only_sheet_to_nothing() {
    assert_eq!(scope("s", "  /* nothing here */  "), "");
}
