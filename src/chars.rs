use crate::cursor::Cursor;
use crate::error::{Found, ParseError};
use crate::parser::{Outcome, Parsed, Parser};
use crate::pattern::CharPattern;
use crate::value::{Tag, Value};
use std::borrow::Cow;

/// Parser that consumes any single character
///
/// Fails only at the end of input. Scanning combinators use it to step over
/// input one character at a time.
#[derive(Debug, Clone, Copy)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(c) => Ok(Parsed::new(Value::Char(c), Tag::Char, cursor.advance(1))),
            None => Err(ParseError::Exhausted {
                expected: Cow::Borrowed("any character"),
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes one character if it satisfies a pattern
#[derive(Debug, Clone, Copy)]
pub struct CharMatch<C> {
    pattern: C,
}

impl<C> CharMatch<C> {
    pub fn new(pattern: C) -> Self {
        CharMatch { pattern }
    }
}

impl<'code, C> Parser<'code> for CharMatch<C>
where
    C: CharPattern,
{
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match cursor.value() {
            Some(c) if self.pattern.matches(c) => {
                Ok(Parsed::new(Value::Char(c), Tag::Char, cursor.advance(1)))
            }
            _ => Err(ParseError::Mismatch {
                expected: self.pattern.describe(),
                found: Found::text(cursor.peek(1)),
                loc: cursor.loc(),
            }),
        }
    }
}

/// Convenience function to create a single-character matcher
pub fn char_match<C: CharPattern>(pattern: C) -> CharMatch<C> {
    CharMatch::new(pattern)
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> CharMatch<char> {
    CharMatch::new(expected)
}
