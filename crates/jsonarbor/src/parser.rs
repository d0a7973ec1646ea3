//! Recursive-descent JSON parser over raw bytes.

use alloc::string::String;
use core::fmt;

use bstr::ByteSlice;

use crate::{
    JsonArray, JsonObject, Value,
    error::{ParseError, SyntaxError},
    strings,
};

/// Deepest permitted nesting of arrays and objects. Exceeding it is a
/// syntax error; the limit is what bounds parser stack growth.
pub const MAX_NESTING: usize = 2048;

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a JSON document from UTF-8 bytes, optionally preceded by a BOM.
///
/// Two deliberate deviations from RFC 8259 are accepted: a trailing comma
/// before `}` or `]`, and bytes following the root value (which are left
/// unexamined).
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first syntax, encoding, depth, or
/// numeric-range problem encountered.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    let mut cursor = Cursor::new(input);
    parse_value(&mut cursor, 0)
}

/// Parses a JSON document from a string slice. See [`parse`].
///
/// # Errors
///
/// Returns a [`ParseError`] on malformed input.
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// Reads an entire file and parses it as one JSON document.
///
/// # Errors
///
/// Returns [`crate::error::ParseFileError`] on I/O or parse failure.
#[cfg(feature = "std")]
pub fn parse_file<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Value, crate::error::ParseFileError> {
    let bytes = std::fs::read(path)?;
    Ok(parse(&bytes)?)
}

/// Byte cursor with a running offset for error reporting.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// The C `isspace` set: space, tab, newline, vertical tab, form feed,
    /// carriage return.
    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Consumes `literal` if the input continues with it.
    fn eat(&mut self, literal: &[u8]) -> bool {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    fn fail(&self, kind: SyntaxError) -> ParseError {
        ParseError {
            kind,
            offset: self.pos,
        }
    }

    /// Error for the current byte: its character when present, otherwise
    /// end-of-input.
    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(byte) => self.fail(SyntaxError::UnexpectedCharacter(char::from(byte))),
            None => self.fail(SyntaxError::UnexpectedEndOfInput),
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("rest", &self.input[self.pos..].as_bstr())
            .finish()
    }
}

fn parse_value(cursor: &mut Cursor<'_>, nesting: usize) -> Result<Value, ParseError> {
    if nesting > MAX_NESTING {
        return Err(cursor.fail(SyntaxError::DepthLimitExceeded));
    }
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(b'{') => parse_object(cursor, nesting + 1),
        Some(b'[') => parse_array(cursor, nesting + 1),
        Some(b'"') => Ok(Value::String(quoted_string(cursor)?)),
        Some(b't' | b'f') => parse_boolean(cursor),
        Some(b'n') => parse_null(cursor),
        Some(b'-' | b'0'..=b'9') => parse_number(cursor),
        _ => Err(cursor.unexpected()),
    }
}

fn parse_object(cursor: &mut Cursor<'_>, nesting: usize) -> Result<Value, ParseError> {
    let mut object = JsonObject::new();
    cursor.bump(); // the '{' that dispatched here
    cursor.skip_whitespace();
    if cursor.peek() == Some(b'}') {
        cursor.bump();
        return Ok(Value::Object(object));
    }
    loop {
        let key_offset = cursor.pos;
        let key = quoted_string(cursor)?;
        // Keys with embedded NUL are not addressable; reject them.
        if key.as_bytes().contains(&0) {
            return Err(ParseError {
                kind: SyntaxError::NulInKey,
                offset: key_offset,
            });
        }
        cursor.skip_whitespace();
        if cursor.peek() != Some(b':') {
            return Err(cursor.unexpected());
        }
        cursor.bump();
        let value = parse_value(cursor, nesting)?;
        object.add(key, value).map_err(|dup| ParseError {
            kind: SyntaxError::DuplicateKey(dup.name),
            offset: key_offset,
        })?;
        cursor.skip_whitespace();
        if cursor.peek() != Some(b',') {
            break;
        }
        cursor.bump();
        cursor.skip_whitespace();
        if cursor.peek() == Some(b'}') {
            break; // trailing comma
        }
    }
    cursor.skip_whitespace();
    if cursor.peek() != Some(b'}') {
        return Err(cursor.unexpected());
    }
    cursor.bump();
    Ok(Value::Object(object))
}

fn parse_array(cursor: &mut Cursor<'_>, nesting: usize) -> Result<Value, ParseError> {
    let mut array = JsonArray::new();
    cursor.bump(); // the '[' that dispatched here
    cursor.skip_whitespace();
    if cursor.peek() == Some(b']') {
        cursor.bump();
        return Ok(Value::Array(array));
    }
    loop {
        let value = parse_value(cursor, nesting)?;
        array.push(value);
        cursor.skip_whitespace();
        if cursor.peek() != Some(b',') {
            break;
        }
        cursor.bump();
        cursor.skip_whitespace();
        if cursor.peek() == Some(b']') {
            break; // trailing comma
        }
    }
    cursor.skip_whitespace();
    if cursor.peek() != Some(b']') {
        return Err(cursor.unexpected());
    }
    cursor.bump();
    array.shrink_to_fit();
    Ok(Value::Array(array))
}

/// Parses a quoted string literal: scans the raw span (honoring `\<any>` as
/// a two-byte skip), then hands the body to the unescaper. Errors point at
/// the opening quote.
fn quoted_string(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let literal_start = cursor.pos;
    if cursor.peek() != Some(b'"') {
        return Err(cursor.unexpected());
    }
    cursor.bump();
    let body_start = cursor.pos;
    loop {
        match cursor.peek() {
            None => return Err(cursor.fail(SyntaxError::UnexpectedEndOfInput)),
            Some(b'"') => break,
            Some(b'\\') => {
                cursor.bump();
                if cursor.peek().is_none() {
                    return Err(cursor.fail(SyntaxError::UnexpectedEndOfInput));
                }
                cursor.bump();
            }
            Some(_) => cursor.bump(),
        }
    }
    let body = &cursor.input[body_start..cursor.pos];
    cursor.bump(); // closing quote
    strings::unescape(body).map_err(|kind| ParseError {
        kind,
        offset: literal_start,
    })
}

fn parse_boolean(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    if cursor.eat(b"true") {
        Ok(Value::Boolean(true))
    } else if cursor.eat(b"false") {
        Ok(Value::Boolean(false))
    } else {
        Err(cursor.unexpected())
    }
}

fn parse_null(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    if cursor.eat(b"null") {
        Ok(Value::Null)
    } else {
        Err(cursor.unexpected())
    }
}

/// JSON's two post-hoc restrictions on an otherwise float-parser-shaped
/// token: no leading zero followed by another digit, and nothing
/// hexadecimal.
fn is_decimal(token: &[u8]) -> bool {
    if token.len() > 1 && token[0] == b'0' && token[1] != b'.' {
        return false;
    }
    if token.len() > 2 && token.starts_with(b"-0") && token[2] != b'.' {
        return false;
    }
    !token.iter().any(|&b| b == b'x' || b == b'X')
}

/// Scans the longest prefix a C `strtod` would consume: optional sign,
/// digits, an optional fraction, an exponent only when it is complete
/// (marker, optional sign, at least one digit), and the hex form after a
/// bare zero. An incomplete exponent or `0x` with no hex digits is backed
/// off, leaving those bytes unconsumed for the surrounding grammar.
fn scan_number_token(cursor: &mut Cursor<'_>) -> usize {
    let start = cursor.pos;
    if cursor.peek() == Some(b'-') {
        cursor.bump();
    }
    while matches!(cursor.peek(), Some(b'0'..=b'9')) {
        cursor.bump();
    }
    // strtod commits to "0x" only after a bare zero and only when at least
    // one hex digit follows; the slice then fails the decimal check.
    if matches!(&cursor.input[start..cursor.pos], [b'0'] | [b'-', b'0'])
        && matches!(cursor.peek(), Some(b'x' | b'X'))
        && cursor
            .input
            .get(cursor.pos + 1)
            .is_some_and(u8::is_ascii_hexdigit)
    {
        cursor.bump();
        while cursor.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
            cursor.bump();
        }
    }
    if cursor.peek() == Some(b'.') {
        cursor.bump();
        while matches!(cursor.peek(), Some(b'0'..=b'9')) {
            cursor.bump();
        }
    }
    if matches!(cursor.peek(), Some(b'e' | b'E')) {
        let mut lookahead = cursor.pos + 1;
        if matches!(cursor.input.get(lookahead), Some(b'+' | b'-')) {
            lookahead += 1;
        }
        if matches!(cursor.input.get(lookahead), Some(b'0'..=b'9')) {
            cursor.pos = lookahead + 1;
            while matches!(cursor.peek(), Some(b'0'..=b'9')) {
                cursor.bump();
            }
        }
    }
    start
}

fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let start = scan_number_token(cursor);
    let token = &cursor.input[start..cursor.pos];
    let fail = |kind: SyntaxError| ParseError {
        kind,
        offset: start,
    };
    if !is_decimal(token) {
        return Err(fail(SyntaxError::InvalidNumber));
    }
    let text = core::str::from_utf8(token).map_err(|_| fail(SyntaxError::InvalidNumber))?;
    let number: f64 = text.parse().map_err(|_| fail(SyntaxError::InvalidNumber))?;
    if !number.is_finite() {
        return Err(fail(SyntaxError::NumberOutOfRange));
    }
    Ok(Value::Number(number))
}
