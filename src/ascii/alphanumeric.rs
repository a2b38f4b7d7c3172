use crate::chars::{CharMatch, char_match};
use crate::pattern::{Class, class};

/// Parser that matches a single ASCII letter or digit
pub fn alphanumeric() -> CharMatch<Class> {
    char_match(class("alphanumeric", |c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::parser::Parser;
    use crate::value::Value;

    #[test]
    fn test_alphanumeric_letter() {
        let parsed = alphanumeric().parse(Cursor::new("abc")).unwrap();

        assert_eq!(parsed.value, Value::Char('a'));
        assert_eq!(parsed.cursor.value(), Some('b'));
    }

    #[test]
    fn test_alphanumeric_digit() {
        let parsed = alphanumeric().parse(Cursor::new("7x")).unwrap();
        assert_eq!(parsed.value, Value::Char('7'));
    }

    #[test]
    fn test_alphanumeric_rejects_punctuation() {
        let error = alphanumeric().parse(Cursor::new("\"")).unwrap_err();
        assert!(error.to_string().contains("expected alphanumeric, found '\\\"'"));
    }

    #[test]
    fn test_alphanumeric_rejects_non_ascii() {
        assert!(alphanumeric().parse(Cursor::new("é")).is_err());
    }
}
