//! Rule Set Parser
//!
//! Recursive-descent parser turning CSS text into a [`Rule`] tree.
//!
//! The input is assumed to be syntactically valid CSS. Semantic problems
//! (unknown properties, odd values) pass through untouched, but any structural
//! problem aborts the whole parse: there is no recovery and no partial tree.

use log::trace;

use crate::animation::AnimationValueParser;
use crate::brace_parser::NestedBraceParser;
use crate::chars;
use crate::error::{Result, ScopeCssError};
use crate::rules::{ConditionalKind, ConditionalRule, CssRule, Declaration, KeyframesRule, Rule};
use crate::scanner::Scanner;

const KEYFRAMES_KEYWORD: &str = "@keyframes";

pub struct RuleSetParser<'a> {
    scanner: Scanner<'a>,
    animation_parser: AnimationValueParser,
}

impl<'a> RuleSetParser<'a> {
    pub fn new(css: &'a str) -> Self {
        RuleSetParser {
            scanner: Scanner::new(css),
            animation_parser: AnimationValueParser::new(),
        }
    }

    pub fn parse(mut self) -> Result<Vec<Rule>> {
        let rules = self.parse_rule_set()?;

        // A nested rule set ends at `}`; at the top level that is a stray brace.
        if let Some(ch) = self.scanner.peek() {
            return Err(ScopeCssError::UnexpectedCharacter {
                found: ch as char,
                offset: self.scanner.cursor(),
            });
        }
        Ok(rules)
    }

    /// Parse rules until end of input or an unmatched `}`.
    fn parse_rule_set(&mut self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        self.scanner.skip_whitespace_and_breaks();

        while !self.scanner.is_eof() && self.scanner.peek() != Some(chars::RBRACE) {
            rules.push(self.parse_rule()?);
            self.scanner.skip_whitespace_and_breaks();
        }
        Ok(rules)
    }

    fn parse_rule(&mut self) -> Result<Rule> {
        if self.scanner.peek() == Some(chars::AT) {
            self.parse_at_rule()
        } else {
            self.parse_css_rule().map(Rule::Style)
        }
    }

    fn parse_at_rule(&mut self) -> Result<Rule> {
        let offset = self.scanner.cursor();
        let name = self.parse_at_rule_name();
        self.scanner.skip_whitespace_and_breaks();
        trace!("at-rule {} at offset {}", name, offset);

        if let Some(kind) = ConditionalKind::from_at_keyword(name) {
            return self.parse_conditional_rule(kind).map(Rule::Conditional);
        }
        if name == KEYFRAMES_KEYWORD {
            return self.parse_keyframes_rule().map(Rule::Keyframes);
        }
        Err(ScopeCssError::UnsupportedAtRule {
            name: name.to_string(),
            offset,
        })
    }

    fn parse_at_rule_name(&mut self) -> &'a str {
        let start = self.scanner.cursor();
        self.scanner.advance_until(|ch| {
            chars::is_whitespace_or_break(ch)
                || chars::is_quote(ch)
                || ch == chars::LBRACE
                || ch == chars::LPAREN
                || ch == chars::SEMICOLON
        });
        self.scanner.slice_from(start)
    }

    fn parse_conditional_rule(&mut self, kind: ConditionalKind) -> Result<ConditionalRule> {
        let start = self.scanner.cursor();
        self.scanner.advance_until(|ch| ch == chars::LBRACE);
        let condition_text = self.scanner.slice_from(start).to_string();
        self.scanner.expect(chars::LBRACE)?;

        let rules = self.parse_rule_set()?;
        self.scanner.expect(chars::RBRACE)?;

        Ok(ConditionalRule {
            kind,
            condition_text,
            rules,
        })
    }

    fn parse_keyframes_rule(&mut self) -> Result<KeyframesRule> {
        // The name is a <custom-ident> or a string.
        let name_offset = self.scanner.cursor();
        let name = self.scanner.read_single_value(&[chars::LBRACE])?;
        if name.is_empty() {
            return Err(match self.scanner.peek() {
                Some(ch) => ScopeCssError::UnexpectedCharacter {
                    found: ch as char,
                    offset: name_offset,
                },
                None => ScopeCssError::missing(chars::LBRACE, name_offset),
            });
        }
        self.scanner.skip_whitespace_and_breaks();

        let block = NestedBraceParser::new(self.scanner.input(), self.scanner.cursor()).parse()?;
        self.scanner.set_cursor(block.end);

        Ok(KeyframesRule {
            name: name.to_string(),
            body: block.text.to_string(),
        })
    }

    fn parse_css_rule(&mut self) -> Result<CssRule> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;
        trace!(
            "style rule {:?} with {} declarations",
            selectors,
            declarations.len()
        );
        Ok(CssRule {
            selectors,
            declarations,
        })
    }

    /// Selector list up to and including the opening `{`.
    fn parse_selectors(&mut self) -> Result<Vec<String>> {
        let mut selectors = Vec::new();

        loop {
            let start = self.scanner.cursor();
            self.scanner
                .scan_top_level(&[chars::COMMA, chars::LBRACE, chars::RBRACE])?;
            selectors.push(self.scanner.slice_from(start).trim().to_string());

            if self.scanner.peek() != Some(chars::COMMA) {
                break;
            }
            self.scanner.expect(chars::COMMA)?;
            self.scanner.skip_whitespace_and_breaks();
        }

        self.scanner.expect(chars::LBRACE)?;
        Ok(selectors)
    }

    /// Declarations up to and including the closing `}`.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();

        loop {
            self.scanner.skip_whitespace_and_breaks();
            match self.scanner.peek() {
                Some(chars::RBRACE) => {
                    self.scanner.expect(chars::RBRACE)?;
                    return Ok(declarations);
                }
                Some(chars::SEMICOLON) => self.scanner.expect(chars::SEMICOLON)?,
                Some(_) => declarations.push(self.parse_declaration()?),
                None => return Err(ScopeCssError::missing(chars::RBRACE, self.scanner.cursor())),
            }
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration> {
        let start = self.scanner.cursor();
        self.scanner.advance_until(|ch| {
            ch == chars::COLON || ch == chars::SEMICOLON || ch == chars::LBRACE || ch == chars::RBRACE
        });
        let property = self.scanner.slice_from(start).trim();
        self.scanner.expect(chars::COLON)?;
        self.scanner.skip_whitespace_and_breaks();

        let value_start = self.scanner.cursor();
        self.scanner
            .scan_top_level(&[chars::SEMICOLON, chars::RBRACE])?;
        let value = self.scanner.slice_from(value_start).trim();

        // The last declaration of a block may leave out its semicolon.
        match self.scanner.peek() {
            Some(chars::SEMICOLON) => self.scanner.expect(chars::SEMICOLON)?,
            Some(_) => {}
            None => return Err(ScopeCssError::missing(chars::SEMICOLON, self.scanner.cursor())),
        }

        Ok(match property {
            "animation" => Declaration::Animation {
                values: self.animation_parser.parse(value)?,
            },
            "animation-name" => Declaration::AnimationName {
                value: value.to_string(),
            },
            _ => Declaration::Other {
                property: property.to_string(),
                value: value.to_string(),
            },
        })
    }
}

/// Parse `css` into its rule tree.
pub fn parse_rule_set(css: &str) -> Result<Vec<Rule>> {
    RuleSetParser::new(css).parse()
}
