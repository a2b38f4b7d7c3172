use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Unlike [`OneOf`](crate::one_of::OneOf) it needs no boxing, so it works for
/// any output type as long as both sides agree on it.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let first = match self.parser1.parse(cursor) {
            Ok(parsed) => return Ok(parsed),
            Err(error) => error,
        };

        self.parser2.parse(cursor).map_err(|second| ParseError::NoAlternative {
            alternatives: 2,
            furthest: Some(Box::new(ParseError::furthest(first, second))),
            loc: cursor.loc(),
        })
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::is_char;
    use crate::error::ErrorKind;
    use crate::value::Value;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(is_char('a'), is_char('b'));
        let parsed = parser.parse(Cursor::new("abc")).unwrap();

        assert_eq!(parsed.value, Value::Char('a'));
        assert_eq!(parsed.cursor.value(), Some('b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(is_char('a'), is_char('b'));
        let parsed = parser.parse(Cursor::new("bcd")).unwrap();

        assert_eq!(parsed.value, Value::Char('b'));
        assert_eq!(parsed.cursor.value(), Some('c'));
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(is_char('a'), is_char('b'));
        let error = parser.parse(Cursor::new("xyz")).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ChoiceExhaustion);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));
        let parsed = parser.parse(Cursor::new("c")).unwrap();

        assert_eq!(parsed.value, Value::Char('c'));
        assert!(parsed.cursor.eos());
    }
}
