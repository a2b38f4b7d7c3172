use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};
use log::debug;

/// Apply `parser` repeatedly from `cursor` until it fails or stops consuming input
///
/// Returns the collected values and the cursor after the last consuming match.
fn repeat<'code, P>(parser: &P, mut cursor: Cursor<'code>) -> (Vec<Value>, Cursor<'code>)
where
    P: Parser<'code, Output = Value>,
{
    let mut values = Vec::new();

    while let Ok(parsed) = parser.parse(cursor) {
        if parsed.cursor == cursor {
            // A zero-width match would repeat forever
            debug!("many: stopping on zero-width match at {}", cursor.position());
            break;
        }
        values.push(parsed.value);
        cursor = parsed.cursor;
    }

    (values, cursor)
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Character-like results are joined into one string tagged
/// `string`, anything else is collected into a list tagged `list`. Zero
/// matches produce the empty string and leave the cursor where it was.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code, Output = Value>,
{
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (values, cursor) = repeat(&self.parser, cursor);
        let (value, tag) = Value::accumulate(values);
        Ok(Parsed::new(value, tag, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code, Output = Value>,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is required and its failure is propagated; the rest
/// behave like [`Many`].
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code, Output = Value>,
{
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let first = self.parser.parse(cursor)?;
        let (rest, cursor) = repeat(&self.parser, first.cursor);

        let mut values = Vec::with_capacity(rest.len() + 1);
        values.push(first.value);
        values.extend(rest);

        let (value, tag) = Value::accumulate(values);
        Ok(Parsed::new(value, tag, cursor))
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code, Output = Value>,
{
    Many1::new(parser)
}

/// Parser combinator that matches exactly `count` occurrences of the given parser
///
/// Any failure before the last repetition fails the whole parser. The values
/// are always returned as a list.
pub struct ManyN<P> {
    parser: P,
    count: usize,
}

impl<P> ManyN<P> {
    pub fn new(count: usize, parser: P) -> Self {
        ManyN { parser, count }
    }
}

impl<'code, P> Parser<'code> for ManyN<P>
where
    P: Parser<'code, Output = Value>,
{
    type Output = Value;

    fn parse(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut values = Vec::with_capacity(self.count);

        for _ in 0..self.count {
            let parsed = self.parser.parse(cursor)?;
            values.push(parsed.value);
            cursor = parsed.cursor;
        }

        Ok(Parsed::new(Value::List(values), Tag::List, cursor))
    }
}

/// Convenience function to create a ManyN parser
pub fn many_n<'code, P>(count: usize, parser: P) -> ManyN<P>
where
    P: Parser<'code, Output = Value>,
{
    ManyN::new(count, parser)
}

/// Parser combinator that repeats `parser` until `terminator` matches
///
/// `parser` runs at least once, and `terminator` is tried after every
/// repetition. The terminator is consumed but its value is discarded. A
/// failure of `parser` before the terminator is found fails the whole parser
/// with that error.
pub struct ManyUntil<P, T> {
    parser: P,
    terminator: T,
}

impl<P, T> ManyUntil<P, T> {
    pub fn new(parser: P, terminator: T) -> Self {
        ManyUntil { parser, terminator }
    }
}

impl<'code, P, T> Parser<'code> for ManyUntil<P, T>
where
    P: Parser<'code, Output = Value>,
    T: Parser<'code>,
{
    type Output = Value;

    fn parse(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut values = Vec::new();

        loop {
            let parsed = self.parser.parse(cursor)?;
            let progressed = parsed.cursor != cursor;
            values.push(parsed.value);
            cursor = parsed.cursor;

            if let Ok(terminator) = self.terminator.parse(cursor) {
                let (value, tag) = Value::accumulate(values);
                return Ok(Parsed::new(value, tag, terminator.cursor));
            }

            if !progressed {
                return Err(ParseError::NoProgress {
                    combinator: "many_until",
                    loc: cursor.loc(),
                });
            }
        }
    }
}

/// Convenience function to create a ManyUntil parser
pub fn many_until<'code, P, T>(parser: P, terminator: T) -> ManyUntil<P, T>
where
    P: Parser<'code, Output = Value>,
    T: Parser<'code>,
{
    ManyUntil::new(parser, terminator)
}
