use std::borrow::Cow;
use std::ops::RangeInclusive;

/// A set of characters a single-character matcher accepts
///
/// Implementations are plain predicates: matching is O(1) and never allocates.
/// `describe` is only called to build a diagnostic after a mismatch.
pub trait CharPattern {
    fn matches(&self, c: char) -> bool;

    /// Human readable name of the pattern for error messages
    fn describe(&self) -> Cow<'static, str>;
}

impl CharPattern for char {
    fn matches(&self, c: char) -> bool {
        c == *self
    }

    fn describe(&self) -> Cow<'static, str> {
        format!("'{}'", self.escape_debug()).into()
    }
}

impl CharPattern for RangeInclusive<char> {
    fn matches(&self, c: char) -> bool {
        self.contains(&c)
    }

    fn describe(&self) -> Cow<'static, str> {
        format!("character in '{}'..='{}'", self.start(), self.end()).into()
    }
}

impl<const N: usize> CharPattern for [char; N] {
    fn matches(&self, c: char) -> bool {
        self.contains(&c)
    }

    fn describe(&self) -> Cow<'static, str> {
        let options: Vec<String> = self.iter().map(|c| format!("'{}'", c.escape_debug())).collect();
        format!("one of {}", options.join(", ")).into()
    }
}

/// A named character class backed by a predicate function
#[derive(Debug, Clone, Copy)]
pub struct Class {
    name: &'static str,
    predicate: fn(char) -> bool,
}

impl CharPattern for Class {
    fn matches(&self, c: char) -> bool {
        (self.predicate)(c)
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }
}

/// Create a named character class, e.g. `class("digit", |c| c.is_ascii_digit())`
pub fn class(name: &'static str, predicate: fn(char) -> bool) -> Class {
    Class { name, predicate }
}
