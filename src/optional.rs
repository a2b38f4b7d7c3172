use crate::cursor::Cursor;
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};
use log::trace;

/// Parser combinator that makes another parser optional
///
/// On success the inner result is returned unchanged. On failure the result is
/// `Value::None` tagged `none` with the original, unadvanced cursor, so
/// `Optional` itself never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code, Output = Value>,
{
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                trace!("optional: absorbed failure: {}", error);
                Ok(Parsed::new(Value::None, Tag::None, cursor))
            }
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code, Output = Value>,
{
    Optional::new(parser)
}
