/*
 * Character Codes
 *
 * Byte constants for the delimiters the CSS scanner cares about
 */

//! Every delimiter the parser stops on is ASCII, so scanning works on bytes
//! and slices are always taken at character boundaries.

// Whitespace and breaks
pub const TAB: u8 = b'\t';
pub const LF: u8 = b'\n';
pub const VTAB: u8 = 0x0B;
pub const FF: u8 = 0x0C;
pub const CR: u8 = b'\r';
pub const SPACE: u8 = b' ';

// Punctuation
pub const DQ: u8 = b'"';
pub const SQ: u8 = b'\'';
pub const LPAREN: u8 = b'(';
pub const RPAREN: u8 = b')';
pub const COMMA: u8 = b',';
pub const COLON: u8 = b':';
pub const SEMICOLON: u8 = b';';
pub const AT: u8 = b'@';
pub const SLASH: u8 = b'/';
pub const STAR: u8 = b'*';

// Brackets
pub const LBRACKET: u8 = b'[';
pub const BACKSLASH: u8 = b'\\';
pub const RBRACKET: u8 = b']';

// Braces
pub const LBRACE: u8 = b'{';
pub const RBRACE: u8 = b'}';

/// Space, tab, CR, LF, vertical tab and form feed.
pub fn is_whitespace_or_break(ch: u8) -> bool {
    ch == SPACE || ch == TAB || ch == LF || ch == CR || ch == VTAB || ch == FF
}

/// Check if byte opens or closes a CSS string
pub fn is_quote(ch: u8) -> bool {
    ch == SQ || ch == DQ
}

/// Opening bracket that nests a value (`(` or `[`)
pub fn is_open_group(ch: u8) -> bool {
    ch == LPAREN || ch == LBRACKET
}

pub fn is_close_group(ch: u8) -> bool {
    ch == RPAREN || ch == RBRACKET
}
