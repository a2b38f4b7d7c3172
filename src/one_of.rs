use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Outcome, Parser};
use crate::value::Value;
use log::trace;

/// Parser combinator that tries alternatives in order from the same cursor
///
/// The first success is returned verbatim. Earlier alternatives shadow later
/// ones on input both could match, so order them from most to least specific.
/// When every alternative fails the error carries the failure that got
/// furthest into the input (the last one on a tie).
///
/// Build one with the [`one_of!`](crate::one_of!) macro.
pub struct OneOf {
    alternatives: Vec<BoxedParser>,
}

impl OneOf {
    pub fn new(alternatives: Vec<BoxedParser>) -> Self {
        OneOf { alternatives }
    }
}

impl<'code> Parser<'code> for OneOf {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let mut furthest: Option<ParseError<'code>> = None;

        for (index, alternative) in self.alternatives.iter().enumerate() {
            match alternative.parse(cursor) {
                Ok(parsed) => return Ok(parsed),
                Err(error) => {
                    trace!(
                        "one_of: alternative {} rejected at {}: {}",
                        index,
                        cursor.position(),
                        error
                    );
                    furthest = Some(match furthest {
                        Some(previous) => ParseError::furthest(previous, error),
                        None => error,
                    });
                }
            }
        }

        Err(ParseError::NoAlternative {
            alternatives: self.alternatives.len(),
            furthest: furthest.map(Box::new),
            loc: cursor.loc(),
        })
    }
}

/// Build a [`OneOf`] from any number of value parsers
#[macro_export]
macro_rules! one_of {
    ($($parser:expr),+ $(,)?) => {
        $crate::one_of::OneOf::new(vec![$($crate::parser::boxed($parser)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::integer;
    use crate::chars::is_char;
    use crate::error::ErrorKind;
    use crate::literal::literal;
    use crate::tagged::TagExt;
    use crate::value::Tag;

    #[test]
    fn test_first_success_wins() {
        let parser = one_of![literal("ab"), literal("abc")];
        let parsed = parser.parse(Cursor::new("abcd")).unwrap();

        assert_eq!(parsed.value, Value::from("ab"));
        assert_eq!(parsed.offset(), 2);
    }

    #[test]
    fn test_later_alternative() {
        let parser = one_of![is_char('a'), integer()];
        let parsed = parser.parse(Cursor::new("20 asdfasdf")).unwrap();

        assert_eq!(parsed.value, Value::Int(20));
        assert_eq!(parsed.tag, Tag::Integer);
    }

    #[test]
    fn test_result_equals_alternative_result() {
        let cursor = Cursor::new("xyz");
        let direct = is_char('x').parse(cursor).unwrap();
        let chosen = one_of![is_char('x'), is_char('y')].parse(cursor).unwrap();

        assert_eq!(direct, chosen);
    }

    #[test]
    fn test_retagged() {
        let parser = one_of![literal("true"), literal("false")].tagged("bool");
        let parsed = parser.parse(Cursor::new("false")).unwrap();

        assert_eq!(parsed.tag, Tag::from("bool"));
        assert_eq!(parsed.value, Value::from("false"));
    }

    #[test]
    fn test_all_fail() {
        let parser = one_of![is_char('a'), is_char('b')];
        let error = parser.parse(Cursor::new("xyz")).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ChoiceExhaustion);
        assert!(error.to_string().contains("none of 2 alternatives"));
        // Tie on position goes to the last alternative
        assert!(error.to_string().contains("expected 'b'"));
    }

    #[test]
    fn test_reports_furthest_failure() {
        let parser = one_of![literal("hello"), sequence_ab()];
        let error = parser.parse(Cursor::new("abx")).unwrap_err();

        assert_eq!(error.position(), 2);
    }

    fn sequence_ab() -> crate::sequence::Sequence {
        crate::sequence![is_char('a'), is_char('b'), is_char('c')]
    }

    #[test]
    fn test_empty_choice_fails() {
        let parser = OneOf::new(Vec::new());
        let error = parser.parse(Cursor::new("a")).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ChoiceExhaustion);
        assert_eq!(error.position(), 0);
    }
}
