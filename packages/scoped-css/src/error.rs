//! Scoping Errors
//!
//! Every failure is fatal for the whole call: the parser assumes well-formed
//! CSS and never returns a partial tree.

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScopeCssError>;

/// Broad failure category, one per class of malformed input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An `@`-rule other than `@media`, `@supports` or `@keyframes`
    UnsupportedAtRule,
    /// An `animation` shorthand with a bad value count or an unplaceable value
    MalformedAnimation,
    /// A quote opened but never closed
    UnterminatedQuote,
    /// An expected delimiter was not found
    Structural,
}

/// Error raised while parsing CSS for scoping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeCssError {
    #[error(
        "unsupported At-Rule \"{name}\" at offset {offset}. \
         Currently supported At-Rules are @media, @supports and @keyframes"
    )]
    UnsupportedAtRule { name: String, offset: usize },

    #[error("illegal animation value \"{definition}\": expected 2, 4 or 8 values, found {count}")]
    AnimationArity { definition: String, count: usize },

    #[error("illegal animation value \"{definition}\": no free sub-property accepts \"{token}\"")]
    AnimationSlot { definition: String, token: String },

    #[error("illegal animation value \"{definition}\": not every sub-property was filled")]
    AnimationIncomplete { definition: String },

    #[error("missing quote: {quote} opened at offset {offset} is never closed")]
    UnterminatedQuote { quote: char, offset: usize },

    #[error("expected '{expected}' at offset {offset}")]
    MissingDelimiter { expected: char, offset: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedCharacter { found: char, offset: usize },
}

impl ScopeCssError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScopeCssError::UnsupportedAtRule { .. } => ErrorKind::UnsupportedAtRule,
            ScopeCssError::AnimationArity { .. }
            | ScopeCssError::AnimationSlot { .. }
            | ScopeCssError::AnimationIncomplete { .. } => ErrorKind::MalformedAnimation,
            ScopeCssError::UnterminatedQuote { .. } => ErrorKind::UnterminatedQuote,
            ScopeCssError::MissingDelimiter { .. } | ScopeCssError::UnexpectedCharacter { .. } => {
                ErrorKind::Structural
            }
        }
    }

    pub(crate) fn missing(expected: u8, offset: usize) -> Self {
        ScopeCssError::MissingDelimiter {
            expected: expected as char,
            offset,
        }
    }
}
