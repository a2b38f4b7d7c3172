use crate::chars::{CharMatch, char_match, is_char};
use crate::many::{Many, many};
use crate::optional::{Optional, optional};

/// Parser that matches a single space character
pub fn space() -> CharMatch<char> {
    is_char(' ')
}

/// Parser that matches zero or more spaces
pub fn spaces() -> Many<CharMatch<char>> {
    many(space())
}

/// Non-failing variant of [`spaces`] for call sites that treat the run as optional
pub fn spaces_optional() -> Optional<Many<CharMatch<char>>> {
    optional(spaces())
}

/// Parser that matches a line feed
pub fn newline() -> CharMatch<char> {
    is_char('\n')
}

/// Parser that matches a single ASCII whitespace character (space, tab, newline, carriage return)
pub fn whitespace() -> CharMatch<[char; 4]> {
    char_match([' ', '\t', '\n', '\r'])
}
