use crate::chars::AnyChar;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Outcome, Parser};
use log::trace;

/// Parser combinator that skips input one character at a time until `parser` matches
///
/// Returns the inner parser's own success, with its value and advanced cursor.
/// Each skipped character is consumed exactly once, so a single scan is linear
/// in the length of the skipped prefix. Scans nested inside repetitions can
/// still be quadratic overall.
///
/// Fails with an exhaustion error when the input runs out before `parser`
/// matches.
pub struct SkipUntil<P> {
    parser: P,
}

impl<P> SkipUntil<P> {
    pub fn new(parser: P) -> Self {
        SkipUntil { parser }
    }
}

impl<'code, P> Parser<'code> for SkipUntil<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let start = cursor;

        loop {
            let error = match self.parser.parse(cursor) {
                Ok(parsed) => {
                    trace!(
                        "skip_until: skipped {} bytes",
                        cursor.position() - start.position()
                    );
                    return Ok(parsed);
                }
                Err(error) => error,
            };

            cursor = match AnyChar.parse(cursor) {
                Ok(step) => step.cursor,
                Err(_) => {
                    return Err(ParseError::Exhausted {
                        expected: format!("a match for {}", error.expected()).into(),
                        loc: cursor.loc(),
                    });
                }
            };
        }
    }
}

/// Convenience function to create a SkipUntil parser
pub fn skip_until<'code, P>(parser: P) -> SkipUntil<P>
where
    P: Parser<'code>,
{
    SkipUntil::new(parser)
}
