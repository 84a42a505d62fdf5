//! CSS Scanner
//!
//! Cursor primitives shared by the rule-set parser, the keyframes body
//! capture and the animation shorthand tokenizer.
//!
//! Two flavours of scanning exist:
//! - [`Scanner::advance_until`] is a plain character-class scan. It is used
//!   where escapes and strings cannot appear (at-rule names, property names,
//!   at-rule conditions).
//! - [`Scanner::read_single_value`] and [`Scanner::scan_top_level`] treat a
//!   backslash and the following character as one unit, step over quoted
//!   strings, and ignore delimiters nested in `(...)` or `[...]`.

use crate::chars;
use crate::error::{Result, ScopeCssError};

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner::at(input, 0)
    }

    /// Scanner positioned at `cursor` (clamped to the input length)
    pub fn at(input: &'a str, cursor: usize) -> Self {
        Scanner {
            input,
            cursor: cursor.min(input.len()),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.input.len());
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.input.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.cursor).copied()
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Text from `start` up to the cursor
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.cursor)
    }

    /// Skip whitespace, breaks and `/* ... */` comments.
    pub fn skip_whitespace_and_breaks(&mut self) {
        loop {
            self.advance_until(|ch| !chars::is_whitespace_or_break(ch));
            if !self.is_comment_start() {
                return;
            }
            self.skip_comment();
        }
    }

    /// Move forward until `should_stop` accepts the current byte or input ends.
    pub fn advance_until(&mut self, should_stop: impl Fn(u8) -> bool) {
        while let Some(ch) = self.peek() {
            if should_stop(ch) {
                break;
            }
            self.cursor += 1;
        }
    }

    /// Consume `expected` or fail with a structural error.
    pub fn expect(&mut self, expected: u8) -> Result<()> {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            Ok(())
        } else {
            Err(ScopeCssError::missing(expected, self.cursor))
        }
    }

    /// Read one CSS value token.
    ///
    /// A token starting with a quote runs through the matching unescaped
    /// quote, inclusive. Any other token runs until whitespace or a byte in
    /// `follow_set`, except inside parentheses or brackets, so
    /// `cubic-bezier(0.1, 0.7, 1, 0.1)` is one token.
    pub fn read_single_value(&mut self, follow_set: &[u8]) -> Result<&'a str> {
        let start = self.cursor;

        match self.peek() {
            Some(quote) if chars::is_quote(quote) => self.skip_quoted()?,
            _ => {
                let mut depth = 0usize;
                while let Some(ch) = self.peek() {
                    if ch == chars::BACKSLASH {
                        self.skip_escape();
                        continue;
                    }
                    if depth == 0 && (chars::is_whitespace_or_break(ch) || follow_set.contains(&ch)) {
                        break;
                    }
                    if depth > 0 && chars::is_quote(ch) {
                        self.skip_quoted()?;
                        continue;
                    }
                    if chars::is_open_group(ch) {
                        depth += 1;
                    } else if chars::is_close_group(ch) {
                        depth = depth.saturating_sub(1);
                    }
                    self.cursor += 1;
                }
            }
        }

        Ok(self.slice_from(start))
    }

    /// Move to the first byte of `stops` that is not escaped, quoted or
    /// nested in parentheses/brackets. Braces in `stops` match at any depth.
    /// Stops at end of input when nothing matches; callers check with
    /// [`Scanner::peek`].
    pub fn scan_top_level(&mut self, stops: &[u8]) -> Result<()> {
        let mut depth = 0usize;
        while let Some(ch) = self.peek() {
            if ch == chars::BACKSLASH {
                self.skip_escape();
                continue;
            }
            if ch == chars::SLASH && self.is_comment_start() {
                self.skip_comment();
                continue;
            }
            if chars::is_quote(ch) {
                self.skip_quoted()?;
                continue;
            }
            if stops.contains(&ch) && (depth == 0 || ch == chars::LBRACE || ch == chars::RBRACE) {
                return Ok(());
            }
            if chars::is_open_group(ch) {
                depth += 1;
            } else if chars::is_close_group(ch) {
                depth = depth.saturating_sub(1);
            }
            self.cursor += 1;
        }
        Ok(())
    }

    pub(crate) fn is_comment_start(&self) -> bool {
        let bytes = self.input.as_bytes();
        bytes.get(self.cursor) == Some(&chars::SLASH)
            && bytes.get(self.cursor + 1) == Some(&chars::STAR)
    }

    /// Cursor sits on `/*`; leaves it just past the closing `*/`, or at end
    /// of input for an unclosed comment. Quotes and braces inside are inert.
    pub(crate) fn skip_comment(&mut self) {
        let from = self.cursor + 2;
        self.cursor = match self.input[from..].find("*/") {
            Some(pos) => from + pos + 2,
            None => self.input.len(),
        };
    }

    /// Step over a backslash and the byte it escapes.
    pub(crate) fn skip_escape(&mut self) {
        self.cursor = (self.cursor + 2).min(self.input.len());
    }

    /// Cursor sits on an opening quote; leaves it just past the closing one.
    pub(crate) fn skip_quoted(&mut self) -> Result<()> {
        let open = self.cursor;
        let quote = self.input.as_bytes()[open];
        self.cursor += 1;

        loop {
            match self.peek() {
                None => {
                    return Err(ScopeCssError::UnterminatedQuote {
                        quote: quote as char,
                        offset: open,
                    })
                }
                Some(chars::BACKSLASH) => self.skip_escape(),
                Some(ch) if ch == quote => {
                    self.cursor += 1;
                    return Ok(());
                }
                Some(_) => self.cursor += 1,
            }
        }
    }
}
