use crate::chars::{CharMatch, char_match};
use crate::pattern::{Class, class};

/// Parser that matches a single ASCII digit (0-9)
pub fn digit() -> CharMatch<Class> {
    char_match(class("digit", |c| c.is_ascii_digit()))
}
