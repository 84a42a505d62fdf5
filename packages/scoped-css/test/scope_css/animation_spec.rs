//! Animation Tests
//!
//! `animation` shorthand values are classified per sub-property, renamed and
//! written back in canonical order.

mod utils;
use utils::{assert_contains, scope};

#[test]
fn should_rename_a_two_value_animation() {
    assert_eq!(
        scope("s", "div { animation: 3s fadeout; }"),
        "[data-s] div{animation:3s fadeout-s;}\n"
    );
}

#[test]
fn should_rename_a_four_value_animation() {
    assert_eq!(
        scope("s", "div { animation: 1s linear 2s slidein; }"),
        "[data-s] div{animation:1s linear 2s slidein-s;}\n"
    );
}

#[test]
fn should_rename_an_eight_value_animation() {
    assert_eq!(
        scope(
            "s",
            "div { animation: 3s ease-in 1s 2 reverse both paused slidein; }"
        ),
        "[data-s] div{animation:3s ease-in 1s 2 reverse both paused slidein-s;}\n"
    );
}

#[test]
fn should_write_values_in_canonical_order() {
    assert_eq!(
        scope("s", "div { animation: slidein 3s; }"),
        "[data-s] div{animation:3s slidein-s;}\n"
    );
    assert_eq!(
        scope(
            "s",
            "div { animation: infinite alternate steps(4, end) forwards 1s running 0.5s bounce }"
        ),
        "[data-s] div{animation:1s steps(4, end) 0.5s infinite alternate forwards running bounce-s;}\n"
    );
}

#[test]
fn should_rename_every_definition_of_a_list() {
    assert_eq!(
        scope("s", "div { animation: 1s a, 2s b; }"),
        "[data-s] div{animation:1s a-s,2s b-s;}\n"
    );
}

#[test]
fn should_rename_quoted_animation_names() {
    assert_eq!(
        scope("s", "div { animation: 3s \"fade out\"; }"),
        "[data-s] div{animation:3s \"fade out s\";}\n"
    );
}

#[test]
fn should_treat_a_keyword_as_the_name_when_its_slot_is_missing() {
    // A four-value definition has no play-state.
    assert_eq!(
        scope("s", "div { animation: 4s paused ease-in 1s; }"),
        "[data-s] div{animation:4s ease-in 1s paused-s;}\n"
    );
}

#[test]
fn should_rename_animation_name_declarations() {
    assert_eq!(
        scope("s", "div { animation-name: spin }"),
        "[data-s] div{animation-name:spin-s;}\n"
    );
    assert_contains(
        &scope("s", "div { animation-name: 'a b', c; }"),
        "animation-name:'a b s',c-s;",
    );
}

#[test]
fn should_leave_other_animation_longhands_alone() {
    assert_eq!(
        scope(
            "s",
            "div { animation-timing-function: ease; animation-play-state: paused; }"
        ),
        "[data-s] div{animation-timing-function:ease;animation-play-state:paused;}\n"
    );
}
