//! Rule Set Serializer
//!
//! Writes a rule tree back to CSS text. Style rules come out compressed
//! (`a,b{color:red;}`), keyframes bodies come out exactly as captured, and
//! each rule ends with a newline. Original formatting is not preserved.

use crate::animation::AnimationValue;
use crate::rules::{ConditionalRule, CssRule, Declaration, KeyframesRule, Rule};

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSetSerializer;

impl RuleSetSerializer {
    pub fn new() -> Self {
        RuleSetSerializer
    }

    pub fn serialize(&self, rules: &[Rule]) -> String {
        let mut out = String::new();
        for rule in rules {
            match rule {
                Rule::Style(style) => self.serialize_style_rule(style, &mut out),
                Rule::Keyframes(keyframes) => self.serialize_keyframes_rule(keyframes, &mut out),
                Rule::Conditional(conditional) => {
                    self.serialize_conditional_rule(conditional, &mut out)
                }
            }
            out.push('\n');
        }
        out
    }

    fn serialize_style_rule(&self, rule: &CssRule, out: &mut String) {
        out.push_str(&rule.selectors.join(","));
        out.push('{');
        for declaration in &rule.declarations {
            self.serialize_declaration(declaration, out);
        }
        out.push('}');
    }

    fn serialize_declaration(&self, declaration: &Declaration, out: &mut String) {
        match declaration {
            Declaration::Other { property, value } => {
                out.push_str(property);
                out.push(':');
                out.push_str(value);
            }
            Declaration::AnimationName { value } => {
                out.push_str("animation-name:");
                out.push_str(value);
            }
            Declaration::Animation { values } => {
                out.push_str("animation:");
                let definitions: Vec<String> =
                    values.iter().map(serialize_animation_value).collect();
                out.push_str(&definitions.join(","));
            }
        }
        out.push(';');
    }

    fn serialize_keyframes_rule(&self, rule: &KeyframesRule, out: &mut String) {
        out.push_str("@keyframes ");
        out.push_str(&rule.name);
        out.push_str(&rule.body);
    }

    fn serialize_conditional_rule(&self, rule: &ConditionalRule, out: &mut String) {
        out.push_str(rule.kind.at_keyword());
        out.push(' ');
        out.push_str(&rule.condition_text);
        out.push_str("{\n");
        out.push_str(&self.serialize(&rule.rules));
        out.push('}');
    }
}

/// Present slots in canonical order, space separated
fn serialize_animation_value(value: &AnimationValue) -> String {
    value
        .slots()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize `rules` with the default serializer.
pub fn serialize(rules: &[Rule]) -> String {
    RuleSetSerializer::new().serialize(rules)
}
