use crate::cursor::Cursor;
use crate::parser::{Outcome, Parsed, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The type tag and cursor of the inner result are kept as they are; combine
/// with [`tagged`](crate::tagged::TagExt::tagged) to relabel the new value.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let parsed = self.parser.parse(cursor)?;
        Ok(Parsed::new((self.mapper)(parsed.value), parsed.tag, parsed.cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
