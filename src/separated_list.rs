use crate::cursor::Cursor;
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};
use log::debug;

/// Parser combinator that matches a list of items separated by a parser
///
/// Alternates `item`, `separator`, `item`, ... for as long as both match and
/// returns the items as a list tagged `list`. It never fails: no items is an
/// empty list, so callers that need at least one element check the length.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `[1, 2, 3]`
/// - `"1,2,"` with separator `,` → `[1, 2]`, cursor after the trailing `,`
///
/// # Note
/// - A separator that matched before a failing item stays consumed
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code, Output = Value>,
    PS: Parser<'code>,
{
    type Output = Value;

    fn parse(&self, mut cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut items = Vec::new();

        loop {
            let start = cursor;

            let Ok(item) = self.parser.parse(cursor) else {
                break;
            };
            items.push(item.value);
            cursor = item.cursor;

            let Ok(separator) = self.separator.parse(cursor) else {
                break;
            };
            cursor = separator.cursor;

            if cursor == start {
                debug!("sep_by: stopping on zero-width iteration at {}", cursor.position());
                break;
            }
        }

        Ok(Parsed::new(Value::List(items), Tag::List, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code, Output = Value>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
