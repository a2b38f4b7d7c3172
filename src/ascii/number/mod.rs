use crate::one_of;
use crate::one_of::OneOf;

pub mod digit;
pub mod integer;
pub mod scientific;

pub use digit::digit;
pub use integer::{Integer, integer};
pub use scientific::{Scientific, scientific};

/// Parser that matches either a float or an integer
///
/// The float is tried first, otherwise the integer would stop at the decimal
/// point and leave the fraction behind.
pub fn number() -> OneOf {
    one_of![scientific(), integer()]
}
