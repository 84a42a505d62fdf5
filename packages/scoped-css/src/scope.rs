//! Scope Transform
//!
//! Rewrites a parsed rule tree so it only applies under one scope:
//! - every selector gets `[data-<scope>] ` in front of it
//! - every `@keyframes` name and every name referenced from `animation` or
//!   `animation-name` is renamed with [`rename`]
//!
//! Names are renamed whether or not a matching `@keyframes` exists in the same
//! sheet, so references to keyframes defined elsewhere are renamed too. The
//! transform is not idempotent: applying it twice renames twice
//! (`foo-s-s`), so a tree must be scoped once.

use crate::chars;
use crate::config::ScopeOptions;
use crate::rules::{CssRule, Declaration, Rule};
use crate::scanner::Scanner;

pub struct ScopeTransform<'s> {
    scope: &'s str,
    attribute_prefix: &'s str,
}

impl<'s> ScopeTransform<'s> {
    pub fn new(scope: &'s str) -> Self {
        ScopeTransform {
            scope,
            attribute_prefix: "data-",
        }
    }

    pub fn with_options(scope: &'s str, options: &'s ScopeOptions) -> Self {
        ScopeTransform {
            scope,
            attribute_prefix: &options.attribute_prefix,
        }
    }

    pub fn apply(&self, rules: &mut [Rule]) {
        for rule in rules {
            match rule {
                Rule::Style(style) => self.scope_style_rule(style),
                Rule::Keyframes(keyframes) => {
                    keyframes.name = rename(self.scope, &keyframes.name);
                }
                Rule::Conditional(conditional) => self.apply(&mut conditional.rules),
            }
        }
    }

    /// `selector` prefixed with the scope attribute
    pub fn scope_selector(&self, selector: &str) -> String {
        format!("[{}{}] {}", self.attribute_prefix, self.scope, selector)
    }

    fn scope_style_rule(&self, rule: &mut CssRule) {
        for selector in rule.selectors.iter_mut() {
            *selector = self.scope_selector(selector);
        }

        for declaration in rule.declarations.iter_mut() {
            match declaration {
                Declaration::Animation { values } => {
                    for value in values.iter_mut() {
                        let name = rename(self.scope, value.name());
                        value.set_name(name);
                    }
                }
                Declaration::AnimationName { value } => {
                    *value = rename_each(self.scope, value);
                }
                Declaration::Other { .. } => {}
            }
        }
    }
}

/// Scoped form of a keyframes name.
///
/// A quoted name gets a space and the scope inside its quotes
/// (`"fade out"` -> `"fade out s"`); a bare identifier gets `-` and the scope
/// (`fade` -> `fade-s`).
pub fn rename(scope: &str, ident: &str) -> String {
    let bytes = ident.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open), Some(&close)) if bytes.len() >= 2 && chars::is_quote(open) && open == close => {
            let quote = open as char;
            let content = &ident[1..ident.len() - 1];
            format!("{}{} {}{}", quote, content, scope, quote)
        }
        _ => format!("{}-{}", ident, scope),
    }
}

// `animation-name` may list several names.
fn rename_each(scope: &str, value: &str) -> String {
    match split_top_level_commas(value) {
        Some(names) if names.len() > 1 => names
            .iter()
            .map(|name| rename(scope, name))
            .collect::<Vec<_>>()
            .join(","),
        _ => rename(scope, value),
    }
}

fn split_top_level_commas(value: &str) -> Option<Vec<&str>> {
    let mut scanner = Scanner::new(value);
    let mut items = Vec::new();

    loop {
        let start = scanner.cursor();
        scanner.scan_top_level(&[chars::COMMA]).ok()?;
        items.push(scanner.slice_from(start).trim());

        if scanner.peek() != Some(chars::COMMA) {
            return Some(items);
        }
        scanner.expect(chars::COMMA).ok()?;
    }
}
