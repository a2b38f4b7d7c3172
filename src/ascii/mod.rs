pub mod alphanumeric;
pub mod number;
pub mod whitespace;

pub use alphanumeric::alphanumeric;
pub use number::{Integer, Scientific, digit, integer, number, scientific};
pub use whitespace::{newline, space, spaces, spaces_optional, whitespace};
