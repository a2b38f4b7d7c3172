use crate::cursor::Cursor;
use crate::error::{Found, ParseError};
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};
use std::borrow::Cow;

/// Parser that matches an exact, case-sensitive word
pub struct Literal {
    expected: Cow<'static, str>,
    chars: usize,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let chars = expected.chars().count();
        Self { expected, chars }
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        if cursor.remaining().starts_with(&*self.expected) {
            return Ok(Parsed::new(
                Value::Str(self.expected.to_string()),
                Tag::String,
                cursor.advance(self.chars),
            ));
        }

        Err(ParseError::Mismatch {
            expected: format!("'{}'", self.expected).into(),
            found: Found::text(cursor.peek(self.chars)),
            loc: cursor.loc(),
        })
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
