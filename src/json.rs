//! A small JSON grammar assembled from the combinators in this crate
//!
//! Strings have no escape sequences, numbers are unsigned, and only spaces
//! count as insignificant whitespace. Objects produce a list of `(key, value)`
//! tuples in source order, lists produce a list of values.
//!
//! Nesting is handled by plain recursion, so every level of `[` or `{` costs
//! several stack frames. About a thousand levels fit in an 8 MB main thread
//! stack; input nested thousands of levels deep overflows the stack
//! and aborts the process. Run untrusted input on a thread with a larger stack
//! or bound its depth before parsing.
//!
//! ```
//! use pcomb::{parse, Value};
//! use pcomb::json;
//!
//! let parsed = parse(&json::object(), r#"{"a": "b", "c": "d"}"#).unwrap();
//! let pairs = parsed.value.as_list().unwrap();
//! assert_eq!(pairs[0], Value::Tuple(vec!["a".into(), "b".into()]));
//! assert_eq!(pairs[1], Value::Tuple(vec!["c".into(), "d".into()]));
//! ```

use crate::ascii::{number as ascii_number, spaces};
use crate::chars::{char_match, is_char};
use crate::lazy::lazy;
use crate::literal::literal;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::{BoxedParser, boxed};
use crate::pattern::class;
use crate::separated_list::sep_by;
use crate::tagged::TagExt;
use crate::value::{Tag, Value};
use crate::{one_of, sequence};

/// A double-quoted string, tagged `string`
pub fn string() -> BoxedParser {
    let character = char_match(class("string character", |c| c != '"' && c != '\\'));

    boxed(
        sequence![is_char('"'), many(character), is_char('"')]
            .select(1)
            .tagged(Tag::String),
    )
}

/// `true`, `True`, `false` or `False`, tagged `bool`
pub fn boolean() -> BoxedParser {
    boxed(
        one_of![
            literal("true"),
            literal("True"),
            literal("false"),
            literal("False"),
        ]
        .map(|word| Value::Bool(matches!(word.as_str(), Some("true" | "True"))))
        .tagged("bool"),
    )
}

/// `null`, producing `Value::None`
pub fn null() -> BoxedParser {
    boxed(literal("null").map(|_| Value::None).tagged(Tag::None))
}

/// An unsigned float or integer; floats are tried first
pub fn number() -> BoxedParser {
    boxed(ascii_number())
}

/// A comma with optional spaces on either side
pub fn separator() -> BoxedParser {
    boxed(sequence![spaces(), is_char(','), spaces()])
}

/// Any JSON value
///
/// Recursion depth is bounded only by the stack; see the module docs.
pub fn value() -> BoxedParser {
    boxed(one_of![
        string(),
        number(),
        boolean(),
        null(),
        lazy(list),
        lazy(object),
    ])
}

/// `[` values separated by commas `]`, tagged `list`
///
/// Each nested list recurses through [`value`]; see the module docs for the depth limit.
pub fn list() -> BoxedParser {
    boxed(
        sequence![
            is_char('['),
            spaces(),
            sep_by(lazy(value), separator()),
            spaces(),
            is_char(']'),
        ]
        .select(2)
        .tagged(Tag::List),
    )
}

/// Object key: a string, number or boolean
pub fn key() -> BoxedParser {
    boxed(one_of![string(), number(), boolean()])
}

/// `key : value`, producing a `(key, value)` tuple tagged `jpair`
pub fn pair() -> BoxedParser {
    boxed(
        sequence![key(), spaces(), is_char(':'), spaces(), lazy(value)]
            .select_pair(0, 4)
            .tagged("jpair"),
    )
}

/// `{` pairs separated by commas `}`, tagged `object`
///
/// Each nested object recurses through [`pair`] and [`value`]; see the module
/// docs for the depth limit.
pub fn object() -> BoxedParser {
    boxed(
        sequence![
            is_char('{'),
            spaces(),
            sep_by(pair(), separator()),
            spaces(),
            is_char('}'),
        ]
        .select(2)
        .tagged("object"),
    )
}
