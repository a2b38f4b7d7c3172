use std::borrow::Cow;
use std::fmt;

/// The payload a parser produces
///
/// Its shape depends on which combinator produced it: single-character
/// matchers produce `Char`, literals and joined repetitions produce `Str`,
/// sequences and separated lists produce `List`, multi-index selections
/// produce `Tuple`, and `optional` produces `None` when nothing matched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    None,
    Char(char),
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Tuple(Vec<Value>),
}

impl Value {
    /// Join character-like values into one string, anything else into a list
    ///
    /// An empty accumulation joins to the empty string.
    pub fn accumulate(values: Vec<Value>) -> (Value, Tag) {
        if values.iter().all(Value::is_char_like) {
            let mut joined = String::new();
            for value in &values {
                match value {
                    Value::Char(c) => joined.push(*c),
                    Value::Str(s) => joined.push_str(s),
                    _ => {}
                }
            }
            (Value::Str(joined), Tag::String)
        } else {
            (Value::List(values), Tag::List)
        }
    }

    pub fn is_char_like(&self) -> bool {
        matches!(self, Value::Char(_) | Value::Str(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Text of a character-like value
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Char(c) => Some(c.to_string()),
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => write_items(f, "[", items, "]"),
            Value::Tuple(items) => write_items(f, "(", items, ")"),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    write!(f, "{}", open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Label describing the semantic category of a produced value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub enum Tag {
    Char,
    String,
    Integer,
    Float,
    List,
    None,
    Named(Cow<'static, str>),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Char => "char",
            Tag::String => "string",
            Tag::Integer => "integer",
            Tag::Float => "float",
            Tag::List => "list",
            Tag::None => "none",
            Tag::Named(name) => name,
        }
    }
}

impl Tag {
    fn builtin(name: &str) -> Option<Tag> {
        match name {
            "char" => Some(Tag::Char),
            "string" => Some(Tag::String),
            "integer" => Some(Tag::Integer),
            "float" => Some(Tag::Float),
            "list" => Some(Tag::List),
            "none" => Some(Tag::None),
            _ => None,
        }
    }
}

impl From<&'static str> for Tag {
    fn from(name: &'static str) -> Self {
        Tag::builtin(name).unwrap_or(Tag::Named(Cow::Borrowed(name)))
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::builtin(&name).unwrap_or(Tag::Named(Cow::Owned(name)))
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
