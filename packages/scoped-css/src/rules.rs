//! Rule Tree
//!
//! Output of the rule-set parser. Each conditional at-rule owns its nested
//! rules, so the tree has no sharing and no back-references.

use serde::Serialize;

use crate::animation::AnimationValue;

/// A parsed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Rule {
    /// `selector, selector { declarations }`
    Style(CssRule),
    /// `@keyframes <name> { ... }` with the body kept unparsed
    Keyframes(KeyframesRule),
    /// `@media` or `@supports` holding nested rules
    Conditional(ConditionalRule),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssRule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyframesRule {
    pub name: String,
    /// Brace-delimited body, verbatim
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalRule {
    pub kind: ConditionalKind,
    /// Everything between the at-rule name and `{`, never rewritten
    pub condition_text: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionalKind {
    Media,
    Supports,
}

impl ConditionalKind {
    pub fn from_at_keyword(name: &str) -> Option<ConditionalKind> {
        match name {
            "@media" => Some(ConditionalKind::Media),
            "@supports" => Some(ConditionalKind::Supports),
            _ => None,
        }
    }

    pub fn at_keyword(self) -> &'static str {
        match self {
            ConditionalKind::Media => "@media",
            ConditionalKind::Supports => "@supports",
        }
    }
}

/// A `property: value;` pair inside a style rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Declaration {
    /// Any property other than `animation` and `animation-name`
    Other { property: String, value: String },
    AnimationName { value: String },
    /// One entry per comma-separated animation
    Animation { values: Vec<AnimationValue> },
}
