#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use scoped_css::{ScopeCssError, ScopeOptions};

fn scope_error(err: ScopeCssError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

/// Scope example CSS for injection into the page.
///
/// `options` is an optional JSON object such as `{"attributePrefix": "data-"}`.
#[napi]
pub fn scope_css(scope: String, css: String, options: Option<String>) -> Result<String> {
    let options = match options {
        Some(json) => ScopeOptions::from_json(&json).map_err(|e| {
            Error::new(Status::InvalidArg, format!("invalid scope options: {}", e))
        })?,
        None => ScopeOptions::default(),
    };

    scoped_css::scope_css_with_options(&scope, &css, &options).map_err(scope_error)
}

/// Parse CSS and return the rule tree as JSON
#[napi]
pub fn parse_css_rules(css: String) -> Result<String> {
    let rules = scoped_css::parse_css_rules(&css).map_err(scope_error)?;
    serde_json::to_string(&rules).map_err(|e| Error::from_reason(e.to_string()))
}

/// Get binding version
#[napi]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
