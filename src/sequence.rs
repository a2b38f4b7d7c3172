use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{BoxedParser, Outcome, Parsed, Parser};
use crate::value::{Tag, Value};

/// Parser combinator that runs parsers in order and collects their values
///
/// Each parser starts where the previous one stopped. The first failure is
/// returned unchanged and all partial progress is discarded. The values are
/// collected into a `Value::List` tagged `list`; use `.tagged()` to supply a
/// different tag.
///
/// Build one with the [`sequence!`](crate::sequence!) macro, which boxes its
/// arguments so parsers of different types can be mixed.
pub struct Sequence {
    parsers: Vec<BoxedParser>,
}

impl Sequence {
    pub fn new(parsers: Vec<BoxedParser>) -> Self {
        Sequence { parsers }
    }

    /// Narrow the result to the value at `index`
    pub fn select(self, index: usize) -> Select {
        Select {
            sequence: self,
            selection: Selection::One(index),
        }
    }

    /// Narrow the result to the pair of values at `first` and `second`
    pub fn select_pair(self, first: usize, second: usize) -> Select {
        Select {
            sequence: self,
            selection: Selection::Many(vec![first, second]),
        }
    }

    /// Narrow the result to the values at `indices`, in the given order
    pub fn select_many(self, indices: impl Into<Vec<usize>>) -> Select {
        Select {
            sequence: self,
            selection: Selection::Many(indices.into()),
        }
    }

    fn run<'code>(&self, cursor: Cursor<'code>) -> Result<(Vec<Value>, Cursor<'code>), ParseError<'code>> {
        let mut values = Vec::with_capacity(self.parsers.len());
        let mut current = cursor;

        for parser in &self.parsers {
            let parsed = parser.parse(current)?;
            values.push(parsed.value);
            current = parsed.cursor;
        }

        Ok((values, current))
    }
}

impl<'code> Parser<'code> for Sequence {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let (values, cursor) = self.run(cursor)?;
        Ok(Parsed::new(Value::List(values), Tag::List, cursor))
    }
}

enum Selection {
    One(usize),
    Many(Vec<usize>),
}

/// A sequence whose value is narrowed to selected positions
///
/// Used to drop syntactic noise such as braces and separators while keeping
/// the semantic payload. A single selection yields the value itself; several
/// yield a `Value::Tuple`.
pub struct Select {
    sequence: Sequence,
    selection: Selection,
}

impl<'code> Parser<'code> for Select {
    type Output = Value;

    fn parse(&self, cursor: Cursor<'code>) -> Outcome<'code, Self::Output> {
        let start = cursor;
        let (mut values, cursor) = self.sequence.run(cursor)?;
        let len = values.len();

        let out_of_range = |index: usize| ParseError::Selection {
            index,
            len,
            loc: start.loc(),
        };

        let value = match &self.selection {
            Selection::One(index) => {
                if *index >= len {
                    return Err(out_of_range(*index));
                }
                values.swap_remove(*index)
            }
            Selection::Many(indices) => {
                let mut picked = Vec::with_capacity(indices.len());
                for &index in indices {
                    let value = values.get(index).ok_or_else(|| out_of_range(index))?;
                    picked.push(value.clone());
                }
                Value::Tuple(picked)
            }
        };

        Ok(Parsed::new(value, Tag::List, cursor))
    }
}

/// Build a [`Sequence`] from any number of value parsers
///
/// ```
/// use pcomb::{parse, sequence, Value};
/// use pcomb::ascii::integer;
/// use pcomb::literal::literal;
///
/// let parser = sequence![integer(), literal("hello"), integer()].select(1);
/// let parsed = parse(&parser, "10hello22 rest").unwrap();
/// assert_eq!(parsed.value, Value::from("hello"));
/// ```
#[macro_export]
macro_rules! sequence {
    ($($parser:expr),+ $(,)?) => {
        $crate::sequence::Sequence::new(vec![$($crate::parser::boxed($parser)),+])
    };
}
