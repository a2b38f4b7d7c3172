use super::digit::digit;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::many::many1;
use crate::parser::{Outcome, Parsed, Parser};
use crate::value::{Tag, Value};

/// Parser that matches an unsigned base-10 integer
///
/// At least one digit is required. Runs of digits too large for an `i64`
/// fail with an invalid-value error instead of wrapping.
#[derive(Debug, Clone, Copy)]
pub struct Integer;

impl<'code> Parser<'code> for Integer {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let digits = many1(digit()).parse(cursor)?;
        let text = digits.cursor.consumed_since(&cursor);

        let value = text.parse::<i64>().map_err(|_| ParseError::InvalidValue {
            kind: "integer",
            text: text.to_string(),
            loc: cursor.loc(),
        })?;

        Ok(Parsed::new(Value::Int(value), Tag::Integer, digits.cursor))
    }
}

/// Convenience function to create an Integer parser
pub fn integer() -> Integer {
    Integer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_positive_integer() {
        let parsed = integer().parse(Cursor::new("123abc")).unwrap();

        assert_eq!(parsed.value, Value::Int(123));
        assert_eq!(parsed.tag, Tag::Integer);
        assert_eq!(parsed.cursor.value(), Some('a'));
    }

    #[test]
    fn test_leading_zeros() {
        let parsed = integer().parse(Cursor::new("007")).unwrap();
        assert_eq!(parsed.value, Value::Int(7));
    }

    #[test]
    fn test_stops_at_decimal_point() {
        let parsed = integer().parse(Cursor::new("10.5")).unwrap();

        assert_eq!(parsed.value, Value::Int(10));
        assert_eq!(parsed.cursor.value(), Some('.'));
    }

    #[test]
    fn test_requires_a_digit() {
        let error = integer().parse(Cursor::new("abc")).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::PatternMismatch);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(integer().parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_max_value() {
        let parsed = integer().parse(Cursor::new("9223372036854775807")).unwrap();
        assert_eq!(parsed.value, Value::Int(i64::MAX));
    }

    #[test]
    fn test_overflow() {
        let error = integer()
            .parse(Cursor::new("x 9223372036854775808").advance(2))
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::InvalidValue);
        assert_eq!(error.position(), 2);
        assert!(
            error
                .to_string()
                .contains("invalid integer literal '9223372036854775808'")
        );
    }
}
