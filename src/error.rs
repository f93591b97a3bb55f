//! Error types for parsing and value access.
//!
//! Every parse failure carries a message drawn from a fixed catalog, plus an
//! optional structural location: a JSON-Pointer-like path (`/a/0`) built from
//! the object keys and array indices traversed before the fault. The path
//! lets a caller locate the problem in a large document without re-scanning.

use std::fmt;

use thiserror::Error;

/// The fixed catalog of parse failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No valid JSON value at the current position.
    #[error("Illegal JSON syntax")]
    IllegalSyntax,
    /// An object member did not start with a string key.
    #[error("Illegal key in JSON object")]
    IllegalKey,
    /// No `:` between an object key and its value.
    #[error("Missing colon in JSON object")]
    MissingColon,
    /// An object was not closed with `}`.
    #[error("Missing closing brace in JSON object")]
    MissingClosingBrace,
    /// An array was not closed with `]`.
    #[error("Missing closing bracket in JSON array")]
    MissingClosingBracket,
    /// A malformed number literal (bare sign, leading zero, missing digits).
    #[error("Illegal JSON number")]
    IllegalNumber,
    /// End of input before the closing quote of a string.
    #[error("Unterminated JSON string")]
    UnterminatedString,
    /// A raw control character (below U+0020) inside a string body.
    #[error("Illegal character in JSON string")]
    IllegalStringCharacter,
    /// A backslash followed by an unrecognized escape character.
    #[error("Illegal escape sequence in JSON string")]
    IllegalEscape,
    /// A malformed `\u` escape: too few hex digits or a broken surrogate pair.
    #[error("Illegal Unicode sequence in JSON string")]
    IllegalUnicodeSequence,
    /// The same key appeared twice within one object.
    #[error("Duplicate key in JSON object: {0:?}")]
    DuplicateKey(String),
    /// Nesting exceeded the configured maximum depth.
    #[error("Maximum nesting depth exceeded")]
    MaximumDepthExceeded,
    /// Non-whitespace input remained after a complete value.
    #[error("Excess characters after JSON value")]
    ExcessCharacters,
}

/// A parse failure: what went wrong, and where in the document.
///
/// `Display` renders the catalog message, followed by ` at <path>` when the
/// fault occurred below the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    pointer: Option<String>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, pointer: Option<String>) -> Self {
        Self { kind, pointer }
    }

    /// The catalog entry describing the failure.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The structural location of the failure, if it occurred below the root.
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind, None)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pointer {
            Some(pointer) => write!(f, "{} at {}", self.kind, pointer),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error raised when a value is accessed as the wrong variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expected {expected}, found {found}")]
pub struct TypeError {
    /// Description of the requested type.
    pub expected: &'static str,
    /// Name of the variant actually present.
    pub found: &'static str,
}

/// Error constructing parser limits outside the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Maximum nesting depth must be between {min} and {max}, got {got}")]
pub struct InvalidLimits {
    /// The rejected value.
    pub got: usize,
    /// Smallest accepted value.
    pub min: usize,
    /// Largest accepted value.
    pub max: usize,
}
