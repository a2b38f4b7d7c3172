//! # pcomb - Parser Combinator Runtime
//!
//! A small algebra of composable parsers over text. Every parser takes an
//! immutable [`Cursor`] and either advances it while producing a [`Value`]
//! with a type [`Tag`], or fails with a [`ParseError`] and leaves the caller's
//! cursor untouched. Grammars such as the bundled [`json`] one are assembled
//! purely by composing constructors.
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Expected pattern, what was found, line and offset
//! - **Backtracking for free**: Cursors are `Copy`, so alternatives retry from the same place
//! - **Reusable**: Parsers hold no mutable state and can be shared across threads
//!
//! ```
//! use pcomb::{parse, Value};
//! use pcomb::ascii::integer;
//! use pcomb::literal::literal;
//! use pcomb::separated_list::sep_by;
//!
//! let parsed = parse(&sep_by(integer(), literal(",")), "1,2,3").unwrap();
//! assert_eq!(
//!     parsed.value,
//!     Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
//! );
//! assert!(parsed.cursor.eos());
//! ```

pub mod ascii;
pub mod chars;
pub mod cursor;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod separated_list;
pub mod sequence;
pub mod skip_until;
pub mod tagged;
pub mod value;

pub use cursor::Cursor;
pub use error::{CodeLoc, ErrorKind, Found, ParseError, ReadablePosition};
pub use parser::{BoxedParser, Outcome, Parsed, Parser, boxed, from_fn};
pub use value::{Tag, Value};

use log::debug;

/// Run `parser` over `input` from offset 0
///
/// The parser does not have to consume the whole input; check
/// `parsed.cursor.eos()` when trailing text is not allowed.
pub fn parse<'code, P>(parser: &P, input: &'code str) -> Outcome<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    debug!("parse: starting on {} bytes of input", input.len());

    let outcome = parser.parse(Cursor::new(input));
    match &outcome {
        Ok(parsed) => debug!(
            "parse: succeeded with tag {} at offset {}",
            parsed.tag,
            parsed.offset()
        ),
        Err(error) => debug!("parse: failed: {}", error),
    }

    outcome
}
