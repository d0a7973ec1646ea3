//! Error types shared across the crate.

use alloc::string::String;

use bstr::BString;
use thiserror::Error;

/// Error returned by the parser entry points.
///
/// Carries the syntax-level failure and the byte offset into the input at
/// which it was detected. For failures inside a string literal the offset
/// points at the opening quote of that literal.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: SyntaxError,
    /// Byte offset into the (BOM-stripped) input.
    pub offset: usize,
}

/// The ways a JSON document can fail to parse.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A byte that no JSON production starts with (shown as a character).
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// The document ended mid-value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Arrays/objects nested deeper than [`MAX_NESTING`](crate::MAX_NESTING).
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
    /// A raw byte below `0x20` inside a string literal.
    #[error("unescaped control character 0x{0:02x} in string")]
    ControlCharacter(u8),
    /// A backslash followed by a byte that selects no escape.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A `\u` escape without four hex digits, or one that decoded to no
    /// Unicode scalar value.
    #[error("invalid \\u escape sequence")]
    InvalidUnicodeEscape,
    /// A surrogate half without its partner.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u16),
    /// Raw string bytes that are not well-formed UTF-8.
    #[error("invalid UTF-8 sequence {0:?} in string")]
    InvalidUtf8(BString),
    /// The same key appeared twice in one object.
    #[error("duplicate object key {0:?}")]
    DuplicateKey(String),
    /// An object key whose decoded form contains NUL.
    #[error("object key contains a NUL character")]
    NulInKey,
    /// A numeric token violating JSON's number grammar.
    #[error("malformed number literal")]
    InvalidNumber,
    /// A number too large for a double.
    #[error("number out of range")]
    NumberOutOfRange,
}

/// Error from [`parse_file`](crate::parse_file): either the file could not
/// be read or its contents were not valid JSON.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum ParseFileError {
    /// Reading the file failed.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Returned when inserting a key that is already present via
/// [`JsonObject::try_insert`](crate::JsonObject::try_insert).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("key {name:?} already present")]
pub struct DuplicateKeyError {
    /// The rejected key.
    pub name: String,
}

/// Returned by indexed array operations when the index is past the end.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("index {index} out of bounds for array of length {len}")]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// Array length at the time of the call.
    pub len: usize,
}

/// Returned when wrapping a NaN or infinite double in a [`Value`].
///
/// [`Value`]: crate::Value
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("JSON numbers must be finite")]
pub struct NonFiniteNumberError;
