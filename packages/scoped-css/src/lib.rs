#![deny(clippy::all)]

//! Scoped CSS
//!
//! Rewrites example stylesheets so they only apply inside one marked
//! container: selectors get an attribute prefix, and keyframes names together
//! with every `animation` / `animation-name` reference get a scope suffix.
//!
//! Pipeline: [`RuleSetParser`] -> [`ScopeTransform`] -> [`RuleSetSerializer`].

pub mod animation;
pub mod brace_parser;
pub mod chars;
mod config;
mod error;
pub mod parser;
pub mod rules;
pub mod scanner;
pub mod scope;
pub mod serializer;

use log::debug;
use rayon::prelude::*;

// Re-exports
pub use animation::{AnimationSlot, AnimationValue, AnimationValueParser, Arity, SlotSet};
pub use config::ScopeOptions;
pub use error::{ErrorKind, Result, ScopeCssError};
pub use parser::RuleSetParser;
pub use rules::{ConditionalKind, ConditionalRule, CssRule, Declaration, KeyframesRule, Rule};
pub use scope::{rename, ScopeTransform};
pub use serializer::RuleSetSerializer;

/// Scope `css` to `scope` using the `data-` attribute prefix.
///
/// ```
/// let scoped = scoped_css::scope_css("s", "a.x, a.y { color: red; }").unwrap();
/// assert_eq!(scoped, "[data-s] a.x,[data-s] a.y{color:red;}\n");
/// ```
pub fn scope_css(scope: &str, css: &str) -> Result<String> {
    scope_css_with_options(scope, css, &ScopeOptions::default())
}

pub fn scope_css_with_options(scope: &str, css: &str, options: &ScopeOptions) -> Result<String> {
    let mut rules = parse_css_rules(css)?;
    ScopeTransform::with_options(scope, options).apply(&mut rules);
    let scoped = RuleSetSerializer::new().serialize(&rules);

    debug!(
        "scoped {} rules to {:?} ({} -> {} bytes)",
        rules.len(),
        scope,
        css.len(),
        scoped.len()
    );
    Ok(scoped)
}

/// Parse without scoping.
pub fn parse_css_rules(css: &str) -> Result<Vec<Rule>> {
    RuleSetParser::new(css).parse()
}

/// Scope many independent `(scope, css)` pairs in parallel.
///
/// Results come back in input order; one failing stylesheet does not affect
/// the others.
pub fn scope_css_many<S, C>(inputs: &[(S, C)]) -> Vec<Result<String>>
where
    S: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|(scope, css)| scope_css(scope.as_ref(), css.as_ref()))
        .collect()
}
