use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::{Tag, Value};

/// A successful parse: the produced value, its type tag and the advanced cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'code, T = Value> {
    pub value: T,
    pub tag: Tag,
    pub cursor: Cursor<'code>,
}

impl<'code, T> Parsed<'code, T> {
    pub fn new(value: T, tag: impl Into<Tag>, cursor: Cursor<'code>) -> Self {
        Parsed {
            value,
            tag: tag.into(),
            cursor,
        }
    }

    /// Byte offset of the cursor after the match
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }
}

/// Result of running a parser: success, or a diagnostic without side effects
pub type Outcome<'code, T = Value> = Result<Parsed<'code, T>, ParseError<'code>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success, or an error
    /// if the parse fails. Failures never consume input: the caller's cursor
    /// is still valid and can be handed to another parser.
    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A type-erased value parser that can be stored next to parsers of other types
/// and shared across threads
pub type BoxedParser = Box<dyn for<'code> Parser<'code, Output = Value> + Send + Sync>;

/// Erase the type of a value parser
pub fn boxed<P>(parser: P) -> BoxedParser
where
    P: for<'code> Parser<'code, Output = Value> + Send + Sync + 'static,
{
    Box::new(parser)
}

/// Parser backed by a plain function from cursor to outcome
pub struct FnParser<F> {
    function: F,
}

impl<'code, F, T> Parser<'code> for FnParser<F>
where
    F: Fn(Cursor<'code>) -> Outcome<'code, T>,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        (self.function)(cursor)
    }
}

/// Convenience function to turn a function into a parser
pub fn from_fn<F>(function: F) -> FnParser<F> {
    FnParser { function }
}
