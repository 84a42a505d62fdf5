//! Animation Shorthand
//!
//! Splits an `animation` value into its comma-separated definitions and
//! assigns every value of a definition to a named sub-property.
//!
//! A definition holds exactly 2, 4 or 8 values. Which sub-properties exist is
//! fixed by that count:
//!
//! | values | sub-properties                                                  |
//! |--------|-----------------------------------------------------------------|
//! | 2      | duration, name                                                  |
//! | 4      | duration, timing-function, delay, name                          |
//! | 8      | all of the above plus iteration-count, direction, fill-mode,    |
//! |        | play-state                                                      |
//!
//! Values are type-ambiguous (`1s` may be a duration or a delay, `paused` a
//! play-state or a name), so each value goes to the first sub-property in
//! [`AnimationSlot::PRECEDENCE`] that accepts it, exists for the count, and is
//! still empty.

use bitflags::bitflags;
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use smallvec::SmallVec;

use crate::chars;
use crate::error::{Result, ScopeCssError};
use crate::scanner::Scanner;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?(?:ms|s)$").unwrap()
});

static CALC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^calc\(.*\)$").unwrap());

static TIMING_FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:cubic-bezier|steps)\(.*\)$").unwrap());

const TIMING_FUNCTION_KEYWORDS: &[&str] = &[
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "linear",
    "step-start",
    "step-end",
    "initial",
    "unset",
    "inherit",
];

const DIRECTION_KEYWORDS: &[&str] = &["normal", "reverse", "alternate", "alternate-reverse"];

const FILL_MODE_KEYWORDS: &[&str] = &["none", "forwards", "backwards", "both"];

const PLAY_STATE_KEYWORDS: &[&str] = &["running", "paused"];

// CSS-wide keywords that can never name a @keyframes rule
const RESERVED_KEYWORDS: &[&str] = &["none", "initial", "inherit", "unset"];

bitflags! {
    /// A set of animation sub-properties
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SlotSet: u8 {
        const DURATION = 1 << 0;
        const TIMING_FUNCTION = 1 << 1;
        const DELAY = 1 << 2;
        const ITERATION_COUNT = 1 << 3;
        const DIRECTION = 1 << 4;
        const FILL_MODE = 1 << 5;
        const PLAY_STATE = 1 << 6;
        const NAME = 1 << 7;
    }
}

/// One `animation-*` sub-property of the shorthand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationSlot {
    Duration,
    TimingFunction,
    Delay,
    IterationCount,
    Direction,
    FillMode,
    PlayState,
    Name,
}

impl AnimationSlot {
    /// Assignment precedence, which is also the serialization order
    pub const PRECEDENCE: [AnimationSlot; 8] = [
        AnimationSlot::Duration,
        AnimationSlot::TimingFunction,
        AnimationSlot::Delay,
        AnimationSlot::IterationCount,
        AnimationSlot::Direction,
        AnimationSlot::FillMode,
        AnimationSlot::PlayState,
        AnimationSlot::Name,
    ];

    pub fn flag(self) -> SlotSet {
        match self {
            AnimationSlot::Duration => SlotSet::DURATION,
            AnimationSlot::TimingFunction => SlotSet::TIMING_FUNCTION,
            AnimationSlot::Delay => SlotSet::DELAY,
            AnimationSlot::IterationCount => SlotSet::ITERATION_COUNT,
            AnimationSlot::Direction => SlotSet::DIRECTION,
            AnimationSlot::FillMode => SlotSet::FILL_MODE,
            AnimationSlot::PlayState => SlotSet::PLAY_STATE,
            AnimationSlot::Name => SlotSet::NAME,
        }
    }

    /// Longhand property this slot stands for
    pub fn property_name(self) -> &'static str {
        match self {
            AnimationSlot::Duration => "animation-duration",
            AnimationSlot::TimingFunction => "animation-timing-function",
            AnimationSlot::Delay => "animation-delay",
            AnimationSlot::IterationCount => "animation-iteration-count",
            AnimationSlot::Direction => "animation-direction",
            AnimationSlot::FillMode => "animation-fill-mode",
            AnimationSlot::PlayState => "animation-play-state",
            AnimationSlot::Name => "animation-name",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Number of values in one animation definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Two,
    Four,
    Eight,
}

impl Arity {
    pub fn from_count(count: usize) -> Option<Arity> {
        match count {
            2 => Some(Arity::Two),
            4 => Some(Arity::Four),
            8 => Some(Arity::Eight),
            _ => None,
        }
    }

    /// Sub-properties a definition of this arity carries
    pub fn expected_slots(self) -> SlotSet {
        match self {
            Arity::Two => SlotSet::DURATION | SlotSet::NAME,
            Arity::Four => {
                SlotSet::DURATION | SlotSet::TIMING_FUNCTION | SlotSet::DELAY | SlotSet::NAME
            }
            Arity::Eight => SlotSet::all(),
        }
    }
}

/// One fully assigned animation definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnimationValue {
    TwoValues {
        name: String,
        duration: String,
    },
    FourValues {
        name: String,
        duration: String,
        timing_function: String,
        delay: String,
    },
    EightValues {
        name: String,
        duration: String,
        timing_function: String,
        delay: String,
        iteration_count: String,
        direction: String,
        fill_mode: String,
        play_state: String,
    },
}

impl AnimationValue {
    pub fn arity(&self) -> Arity {
        match self {
            AnimationValue::TwoValues { .. } => Arity::Two,
            AnimationValue::FourValues { .. } => Arity::Four,
            AnimationValue::EightValues { .. } => Arity::Eight,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnimationValue::TwoValues { name, .. }
            | AnimationValue::FourValues { name, .. }
            | AnimationValue::EightValues { name, .. } => name,
        }
    }

    pub fn set_name(&mut self, new_name: String) {
        match self {
            AnimationValue::TwoValues { name, .. }
            | AnimationValue::FourValues { name, .. }
            | AnimationValue::EightValues { name, .. } => *name = new_name,
        }
    }

    /// Value held by `slot`, `None` when the arity has no such slot
    pub fn get(&self, slot: AnimationSlot) -> Option<&str> {
        use AnimationSlot as S;
        let value = match (self, slot) {
            (AnimationValue::TwoValues { name, .. }, S::Name) => name,
            (AnimationValue::TwoValues { duration, .. }, S::Duration) => duration,
            (AnimationValue::TwoValues { .. }, _) => return None,
            (AnimationValue::FourValues { name, .. }, S::Name) => name,
            (AnimationValue::FourValues { duration, .. }, S::Duration) => duration,
            (AnimationValue::FourValues { timing_function, .. }, S::TimingFunction) => {
                timing_function
            }
            (AnimationValue::FourValues { delay, .. }, S::Delay) => delay,
            (AnimationValue::FourValues { .. }, _) => return None,
            (AnimationValue::EightValues { name, .. }, S::Name) => name,
            (AnimationValue::EightValues { duration, .. }, S::Duration) => duration,
            (AnimationValue::EightValues { timing_function, .. }, S::TimingFunction) => {
                timing_function
            }
            (AnimationValue::EightValues { delay, .. }, S::Delay) => delay,
            (AnimationValue::EightValues { iteration_count, .. }, S::IterationCount) => {
                iteration_count
            }
            (AnimationValue::EightValues { direction, .. }, S::Direction) => direction,
            (AnimationValue::EightValues { fill_mode, .. }, S::FillMode) => fill_mode,
            (AnimationValue::EightValues { play_state, .. }, S::PlayState) => play_state,
        };
        Some(value.as_str())
    }

    /// Present slots with their values, in serialization order
    pub fn slots(&self) -> impl Iterator<Item = (AnimationSlot, &str)> + '_ {
        AnimationSlot::PRECEDENCE
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|value| (slot, value)))
    }
}

struct SlotRule {
    slot: AnimationSlot,
    accepts: fn(&str) -> bool,
}

/// Lexical test per sub-property, in assignment precedence
const SLOT_RULES: &[SlotRule] = &[
    SlotRule {
        slot: AnimationSlot::Duration,
        accepts: is_time,
    },
    SlotRule {
        slot: AnimationSlot::TimingFunction,
        accepts: is_timing_function,
    },
    SlotRule {
        slot: AnimationSlot::Delay,
        accepts: is_time,
    },
    SlotRule {
        slot: AnimationSlot::IterationCount,
        accepts: is_iteration_count,
    },
    SlotRule {
        slot: AnimationSlot::Direction,
        accepts: is_direction,
    },
    SlotRule {
        slot: AnimationSlot::FillMode,
        accepts: is_fill_mode,
    },
    SlotRule {
        slot: AnimationSlot::PlayState,
        accepts: is_play_state,
    },
    SlotRule {
        slot: AnimationSlot::Name,
        accepts: is_keyframes_name,
    },
];

/// Every sub-property `token` could lexically belong to.
///
/// `paused` gives `{play-state, name}`, `1s` gives `{duration, delay}`, `2`
/// gives `{iteration-count}` and an unknown word gives `{name}`.
pub fn candidate_slots(token: &str) -> SlotSet {
    SLOT_RULES
        .iter()
        .filter(|rule| (rule.accepts)(token))
        .fold(SlotSet::empty(), |set, rule| set | rule.slot.flag())
}

fn is_number(token: &str) -> bool {
    NUMBER_RE.is_match(token)
}

/// `<time>` or `calc()`
fn is_time(token: &str) -> bool {
    CALC_RE.is_match(token) || TIME_RE.is_match(token)
}

fn is_timing_function(token: &str) -> bool {
    TIMING_FUNCTION_RE.is_match(token) || TIMING_FUNCTION_KEYWORDS.contains(&token)
}

fn is_iteration_count(token: &str) -> bool {
    token == "infinite" || is_number(token)
}

fn is_direction(token: &str) -> bool {
    DIRECTION_KEYWORDS.contains(&token)
}

fn is_fill_mode(token: &str) -> bool {
    FILL_MODE_KEYWORDS.contains(&token)
}

fn is_play_state(token: &str) -> bool {
    PLAY_STATE_KEYWORDS.contains(&token)
}

// Anything that is not a number, a time or a timing function may be a
// <custom-ident> or string, except the CSS-wide keywords.
fn is_keyframes_name(token: &str) -> bool {
    !RESERVED_KEYWORDS.contains(&token)
        && !is_number(token)
        && !is_time(token)
        && !TIMING_FUNCTION_RE.is_match(token)
}

/// Collects the values of one definition and seals them into an
/// [`AnimationValue`] once every slot of the arity holds a value.
#[derive(Debug, Clone)]
pub struct AnimationValueBuilder {
    arity: Arity,
    filled: SlotSet,
    values: [Option<String>; 8],
}

impl AnimationValueBuilder {
    pub fn new(arity: Arity) -> Self {
        AnimationValueBuilder {
            arity,
            filled: SlotSet::empty(),
            values: Default::default(),
        }
    }

    pub fn filled(&self) -> SlotSet {
        self.filled
    }

    /// Slots of the arity still waiting for a value
    pub fn open_slots(&self) -> SlotSet {
        self.arity.expected_slots() - self.filled
    }

    /// Put `token` in the first open slot it qualifies for.
    pub fn place(&mut self, token: &str) -> Option<AnimationSlot> {
        let candidates = candidate_slots(token) & self.open_slots();
        let slot = AnimationSlot::PRECEDENCE
            .into_iter()
            .find(|slot| candidates.contains(slot.flag()))?;

        self.filled |= slot.flag();
        self.values[slot.index()] = Some(token.to_string());
        Some(slot)
    }

    pub fn build(mut self) -> Option<AnimationValue> {
        if !self.open_slots().is_empty() {
            return None;
        }

        let mut take = |slot: AnimationSlot| {
            self.values[slot.index()]
                .take()
                .filter(|value| !value.is_empty())
        };

        let value = match self.arity {
            Arity::Two => AnimationValue::TwoValues {
                duration: take(AnimationSlot::Duration)?,
                name: take(AnimationSlot::Name)?,
            },
            Arity::Four => AnimationValue::FourValues {
                duration: take(AnimationSlot::Duration)?,
                timing_function: take(AnimationSlot::TimingFunction)?,
                delay: take(AnimationSlot::Delay)?,
                name: take(AnimationSlot::Name)?,
            },
            Arity::Eight => AnimationValue::EightValues {
                duration: take(AnimationSlot::Duration)?,
                timing_function: take(AnimationSlot::TimingFunction)?,
                delay: take(AnimationSlot::Delay)?,
                iteration_count: take(AnimationSlot::IterationCount)?,
                direction: take(AnimationSlot::Direction)?,
                fill_mode: take(AnimationSlot::FillMode)?,
                play_state: take(AnimationSlot::PlayState)?,
                name: take(AnimationSlot::Name)?,
            },
        };
        Some(value)
    }
}

/// Parser for the value of the `animation` shorthand
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationValueParser;

impl AnimationValueParser {
    pub fn new() -> Self {
        AnimationValueParser
    }

    pub fn parse(&self, value: &str) -> Result<Vec<AnimationValue>> {
        split_definitions(value)?
            .into_iter()
            .map(|(definition, tokens)| self.parse_definition(definition, &tokens))
            .collect()
    }

    fn parse_definition(&self, definition: &str, tokens: &[&str]) -> Result<AnimationValue> {
        let arity =
            Arity::from_count(tokens.len()).ok_or_else(|| ScopeCssError::AnimationArity {
                definition: definition.to_string(),
                count: tokens.len(),
            })?;

        let mut builder = AnimationValueBuilder::new(arity);
        for &token in tokens {
            let slot = builder
                .place(token)
                .ok_or_else(|| ScopeCssError::AnimationSlot {
                    definition: definition.to_string(),
                    token: token.to_string(),
                })?;
            trace!("animation value {:?} -> {}", token, slot.property_name());
        }

        builder
            .build()
            .ok_or_else(|| ScopeCssError::AnimationIncomplete {
                definition: definition.to_string(),
            })
    }
}

type Definition<'a> = (&'a str, SmallVec<[&'a str; 8]>);

/// Split at top-level commas, then each definition into its values.
fn split_definitions(value: &str) -> Result<Vec<Definition<'_>>> {
    let mut scanner = Scanner::new(value);
    let mut definitions = Vec::new();

    scanner.skip_whitespace_and_breaks();
    loop {
        let start = scanner.cursor();
        let mut tokens = SmallVec::new();
        while !scanner.is_eof() && scanner.peek() != Some(chars::COMMA) {
            tokens.push(scanner.read_single_value(&[chars::COMMA])?);
            scanner.skip_whitespace_and_breaks();
        }
        definitions.push((scanner.slice_from(start).trim_end(), tokens));

        if scanner.peek() != Some(chars::COMMA) {
            break;
        }
        scanner.expect(chars::COMMA)?;
        scanner.skip_whitespace_and_breaks();
    }

    Ok(definitions)
}
