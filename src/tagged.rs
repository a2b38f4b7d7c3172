use crate::cursor::Cursor;
use crate::parser::{Outcome, Parser};
use crate::value::Tag;

/// Parser combinator that replaces the type tag of a successful result
pub struct Tagged<P> {
    parser: P,
    tag: Tag,
}

impl<P> Tagged<P> {
    pub fn new(parser: P, tag: impl Into<Tag>) -> Self {
        Tagged {
            parser,
            tag: tag.into(),
        }
    }
}

impl<'code, P> Parser<'code> for Tagged<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut parsed = self.parser.parse(cursor)?;
        parsed.tag = self.tag.clone();
        Ok(parsed)
    }
}

/// Extension trait to add .tagged() method support for parsers
pub trait TagExt<'code>: Parser<'code> + Sized {
    fn tagged(self, tag: impl Into<Tag>) -> Tagged<Self> {
        Tagged::new(self, tag)
    }
}

/// Implement TagExt for all parsers
impl<'code, P> TagExt<'code> for P where P: Parser<'code> {}
