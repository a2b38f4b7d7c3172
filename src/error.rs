use std::borrow::Cow;
use std::fmt;

/// Human readable location of an error: 1-based line and byte offset within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self {
            code,
            loc: loc.min(code.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn code(&self) -> &'code str {
        self.code
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on rendering (tabs, wide and zero-width characters).
    pub fn readable_position(&self) -> ReadablePosition {
        let before = self.code.get(..self.loc).unwrap_or(self.code);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first {
                continue;
            }
            if current_line > last {
                break;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let column = content
                    .get(..pos.byte_offset)
                    .map_or(pos.byte_offset, |head| head.chars().count());
                let pointer_offset = prefix.len() + column;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )
    }
}

/// What a matcher actually saw where it expected something else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Text(String),
    EndOfInput,
}

impl Found {
    /// Describe the text at the cursor, treating empty text as end of input
    pub fn text(text: &str) -> Self {
        if text.is_empty() {
            Found::EndOfInput
        } else {
            Found::Text(text.to_string())
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Text(text) => write!(f, "'{}'", text.escape_debug()),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The failure taxonomy a [`ParseError`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character or literal matcher did not find what it expected
    PatternMismatch,
    /// Input ran out before a scan or repetition could finish
    Exhaustion,
    /// Every alternative of an ordered choice failed
    ChoiceExhaustion,
    /// The matched text could not be turned into a value
    InvalidValue,
    /// The combinator graph itself is unusable on this input
    Construction,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError<'code> {
    #[error("expected {expected}, found {found} at {loc}")]
    Mismatch {
        expected: Cow<'static, str>,
        found: Found,
        loc: CodeLoc<'code>,
    },
    #[error("reached end of input while looking for {expected} at {loc}")]
    Exhausted {
        expected: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    #[error("none of {alternatives} alternatives matched at {loc}{}", furthest_suffix(.furthest))]
    NoAlternative {
        alternatives: usize,
        furthest: Option<Box<ParseError<'code>>>,
        loc: CodeLoc<'code>,
    },
    #[error("invalid {kind} literal '{text}' at {loc}")]
    InvalidValue {
        kind: &'static str,
        text: String,
        loc: CodeLoc<'code>,
    },
    #[error("cannot select element {index} from a sequence of {len} at {loc}")]
    Selection {
        index: usize,
        len: usize,
        loc: CodeLoc<'code>,
    },
    #[error("{combinator} matched without consuming input at {loc}")]
    NoProgress {
        combinator: &'static str,
        loc: CodeLoc<'code>,
    },
}

fn furthest_suffix(furthest: &Option<Box<ParseError<'_>>>) -> String {
    match furthest {
        Some(error) => format!("; furthest failure: {}", error),
        None => String::new(),
    }
}

impl<'code> ParseError<'code> {
    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::Mismatch { loc, .. }
            | ParseError::Exhausted { loc, .. }
            | ParseError::InvalidValue { loc, .. }
            | ParseError::Selection { loc, .. }
            | ParseError::NoProgress { loc, .. } => *loc,
            ParseError::NoAlternative { furthest, loc, .. } => {
                furthest.as_ref().map_or(*loc, |error| error.loc())
            }
        }
    }

    /// Returns the position where this error occurred
    ///
    /// For a failed choice this is the position of the alternative that got furthest.
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Mismatch { .. } => ErrorKind::PatternMismatch,
            ParseError::Exhausted { .. } => ErrorKind::Exhaustion,
            ParseError::NoAlternative { .. } => ErrorKind::ChoiceExhaustion,
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ParseError::Selection { .. } | ParseError::NoProgress { .. } => ErrorKind::Construction,
        }
    }

    /// What the failing matcher was looking for
    pub fn expected(&self) -> Cow<'static, str> {
        match self {
            ParseError::Mismatch { expected, .. } | ParseError::Exhausted { expected, .. } => {
                expected.clone()
            }
            ParseError::NoAlternative { alternatives, .. } => {
                format!("one of {} alternatives", alternatives).into()
            }
            ParseError::InvalidValue { kind, .. } => format!("a valid {}", kind).into(),
            ParseError::Selection { .. } | ParseError::NoProgress { .. } => {
                Cow::Borrowed("a consuming match")
            }
        }
    }

    /// Pick the error that progressed furthest into the input
    ///
    /// Ties go to `later`, so a choice reports the last diagnostic it saw.
    pub fn furthest(earlier: Self, later: Self) -> Self {
        if earlier.position() > later.position() {
            earlier
        } else {
            later
        }
    }

    /// Multi-line rendering of the error with surrounding source lines
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        report.push_str("\n\n");
        for line in self.loc().context_lines() {
            report.push_str(&line);
            report.push('\n');
        }
        report
    }
}
