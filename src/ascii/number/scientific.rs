use super::digit::digit;
use crate::chars::is_char;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::many::many1;
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};

/// Parser that matches a decimal floating point literal: `digits '.' digits`
///
/// Both digit runs are required, so `1.` and `.5` are rejected. There is no
/// sign or exponent.
#[derive(Debug, Clone, Copy)]
pub struct Scientific;

impl<'code> Parser<'code> for Scientific {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let whole = many1(digit()).parse(cursor)?;
        let point = is_char('.').parse(whole.cursor)?;
        let fraction = many1(digit()).parse(point.cursor)?;

        let text = fraction.cursor.consumed_since(&cursor);
        let invalid = || ParseError::InvalidValue {
            kind: "float",
            text: text.to_string(),
            loc: cursor.loc(),
        };

        let value = text.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(Parsed::new(Value::Float(value), Tag::Float, fraction.cursor))
    }
}

/// Convenience function to create a Scientific parser
pub fn scientific() -> Scientific {
    Scientific
}
