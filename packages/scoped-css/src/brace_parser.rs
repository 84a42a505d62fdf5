//! Nested Brace Parser
//!
//! Captures a brace-balanced span without interpreting it. Only `@keyframes`
//! bodies go through here; their percentage blocks are kept byte for byte.
//!
//! For `div { a { b.c.de } } e` starting at 0 the captured span is
//! `{ a { b.c.de } }`.

use crate::chars;
use crate::error::{Result, ScopeCssError};
use crate::scanner::Scanner;

/// A captured `{ ... }` span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedBlock<'a> {
    /// The span from the opening `{` through the matching `}`, inclusive
    pub text: &'a str,
    /// Offset of the opening `{`
    pub start: usize,
    /// Offset just past the closing `}`
    pub end: usize,
}

pub struct NestedBraceParser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> NestedBraceParser<'a> {
    pub fn new(input: &'a str, start: usize) -> Self {
        NestedBraceParser {
            scanner: Scanner::at(input, start),
        }
    }

    pub fn parse(mut self) -> Result<NestedBlock<'a>> {
        // Find the first unescaped left brace.
        while let Some(ch) = self.scanner.peek() {
            if ch == chars::LBRACE {
                break;
            }
            if ch == chars::BACKSLASH {
                self.scanner.skip_escape();
            } else {
                self.scanner.set_cursor(self.scanner.cursor() + 1);
            }
        }
        let start = self.scanner.cursor();
        self.scanner.expect(chars::LBRACE)?;

        let mut open_braces = 1usize;
        while open_braces > 0 {
            let Some(ch) = self.scanner.peek() else {
                return Err(ScopeCssError::missing(chars::RBRACE, self.scanner.cursor()));
            };
            match ch {
                chars::BACKSLASH => {
                    self.scanner.skip_escape();
                    continue;
                }
                chars::SQ | chars::DQ => {
                    self.scanner.skip_quoted()?;
                    continue;
                }
                chars::SLASH if self.scanner.is_comment_start() => {
                    self.scanner.skip_comment();
                    continue;
                }
                chars::LBRACE => open_braces += 1,
                chars::RBRACE => open_braces -= 1,
                _ => {}
            }
            self.scanner.set_cursor(self.scanner.cursor() + 1);
        }

        let end = self.scanner.cursor();
        Ok(NestedBlock {
            text: self.scanner.slice(start, end),
            start,
            end,
        })
    }
}
