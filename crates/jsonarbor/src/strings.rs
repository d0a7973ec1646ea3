//! JSON string literal bodies: unescaping on the way in, escaping on the
//! way out.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{error::SyntaxError, unicode};

/// Decodes the body of a JSON string literal (the bytes between the quotes).
///
/// Handles the eight simple escapes and `\uXXXX` (with UTF-16 surrogate
/// pairing), rejects unescaped control characters, and verifies every raw
/// non-ASCII byte sequence as strict UTF-8. The output is never longer than
/// the input.
pub(crate) fn unescape(input: &[u8]) -> Result<String, SyntaxError> {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let mut ix = 0;
    while ix < input.len() {
        let byte = input[ix];
        if byte == b'\\' {
            let escape = *input.get(ix + 1).ok_or(SyntaxError::UnexpectedEndOfInput)?;
            match escape {
                b'"' | b'\\' | b'/' => out.push(escape),
                b'b' => out.push(0x08),
                b'f' => out.push(0x0C),
                b'n' => out.push(b'\n'),
                b'r' => out.push(b'\r'),
                b't' => out.push(b'\t'),
                b'u' => {
                    ix += 1 + decode_unicode_escape(&input[ix + 1..], &mut out)?;
                    continue;
                }
                other => return Err(SyntaxError::InvalidEscape(char::from(other))),
            }
            ix += 2;
        } else if byte < 0x20 {
            return Err(SyntaxError::ControlCharacter(byte));
        } else if byte < 0x80 {
            out.push(byte);
            ix += 1;
        } else {
            let end = input.len().min(ix + 4);
            let len = unicode::verify_sequence(&input[ix..])
                .ok_or_else(|| SyntaxError::InvalidUtf8(input[ix..end].into()))?;
            out.extend_from_slice(&input[ix..ix + len]);
            ix += len;
        }
    }
    out.shrink_to_fit();
    // Every byte above was either ASCII, a verified sequence, or produced by
    // `char::encode_utf8`, so this cannot fail.
    String::from_utf8(out).map_err(|err| SyntaxError::InvalidUtf8(err.into_bytes().into()))
}

/// Decodes one `\uXXXX` escape. `input` starts at the selecting `u`; returns
/// the number of bytes consumed from there (5, or 11 for a surrogate pair).
fn decode_unicode_escape(input: &[u8], out: &mut Vec<u8>) -> Result<usize, SyntaxError> {
    let unit =
        unicode::decode_hex_quad(&input[1..]).ok_or(SyntaxError::InvalidUnicodeEscape)?;
    let (scalar, consumed) = if unicode::is_lead_surrogate(unit) {
        if input.get(5) != Some(&b'\\') || input.get(6) != Some(&b'u') {
            return Err(SyntaxError::UnpairedSurrogate(unit));
        }
        let trail = unicode::decode_hex_quad(input.get(7..).unwrap_or_default())
            .ok_or(SyntaxError::InvalidUnicodeEscape)?;
        if !unicode::is_trail_surrogate(trail) {
            return Err(SyntaxError::UnpairedSurrogate(unit));
        }
        (unicode::combine_surrogates(unit, trail), 11)
    } else if unicode::is_trail_surrogate(unit) {
        return Err(SyntaxError::UnpairedSurrogate(unit));
    } else {
        (u32::from(unit), 5)
    };
    let ch = char::from_u32(scalar).ok_or(SyntaxError::InvalidUnicodeEscape)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    Ok(consumed)
}

/// Writes `src` with JSON escaping applied: `\"`, `\\`, the short control
/// escapes, lowercase `\u00xx` for the remaining control characters, and
/// optionally `\/`.
pub(crate) fn write_escaped<W: fmt::Write>(
    src: &str,
    escape_slashes: bool,
    out: &mut W,
) -> fmt::Result {
    for ch in src.chars() {
        match ch {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '/' if escape_slashes => out.write_str("\\/")?,
            c if (c as u32) < 0x20 => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn escaped(src: &str, escape_slashes: bool) -> String {
        let mut out = String::new();
        write_escaped(src, escape_slashes, &mut out).unwrap();
        out
    }

    #[test]
    fn simple_escapes() {
        assert_eq!(unescape(br#"a\"b\\c\/d"#).unwrap(), "a\"b\\c/d");
        assert_eq!(unescape(br"\b\f\n\r\t").unwrap(), "\u{8}\u{c}\n\r\t");
    }

    #[test]
    fn bmp_unicode_escape() {
        assert_eq!(unescape(br"\u0041").unwrap(), "A");
        assert_eq!(unescape(br"\u00e9").unwrap(), "\u{e9}");
        assert_eq!(unescape(br"\u20ac").unwrap(), "\u{20ac}");
    }

    #[test]
    fn surrogate_pair_decodes_to_four_bytes() {
        let decoded = unescape(br"\uD834\uDD1E").unwrap();
        assert_eq!(decoded, "\u{1d11e}");
        assert_eq!(decoded.as_bytes(), &[0xF0, 0x9D, 0x84, 0x9E]);
    }

    #[test]
    fn unpaired_surrogates_fail() {
        assert_eq!(
            unescape(br"\uD800").unwrap_err(),
            SyntaxError::UnpairedSurrogate(0xD800)
        );
        assert_eq!(
            unescape(br"\uDC00").unwrap_err(),
            SyntaxError::UnpairedSurrogate(0xDC00)
        );
        assert_eq!(
            unescape(br"\uD834\n").unwrap_err(),
            SyntaxError::UnpairedSurrogate(0xD834)
        );
        assert_eq!(
            unescape(br"\uD834A").unwrap_err(),
            SyntaxError::UnpairedSurrogate(0xD834)
        );
    }

    #[test]
    fn escaped_nul_is_kept() {
        let decoded = unescape(br"a\u0000b").unwrap();
        assert_eq!(decoded.as_bytes(), b"a\0b");
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn raw_control_bytes_fail() {
        assert_eq!(
            unescape(b"a\x01b").unwrap_err(),
            SyntaxError::ControlCharacter(0x01)
        );
        assert_eq!(
            unescape(b"a\x1fb").unwrap_err(),
            SyntaxError::ControlCharacter(0x1F)
        );
    }

    #[test]
    fn invalid_utf8_fails() {
        assert!(matches!(
            unescape(&[b'a', 0xC0, 0xAF]).unwrap_err(),
            SyntaxError::InvalidUtf8(_)
        ));
        assert!(matches!(
            unescape(&[0xE2, 0x82]).unwrap_err(),
            SyntaxError::InvalidUtf8(_)
        ));
    }

    #[test]
    fn unknown_escape_fails() {
        assert_eq!(
            unescape(br"\q").unwrap_err(),
            SyntaxError::InvalidEscape('q')
        );
    }

    #[test]
    fn escape_control_characters() {
        assert_eq!(escaped("a\u{1}b", false), "a\\u0001b");
        assert_eq!(escaped("\"\\\u{8}\u{c}\n\r\t", false), "\\\"\\\\\\b\\f\\n\\r\\t");
    }

    #[test]
    fn slash_escaping_is_optional() {
        assert_eq!(escaped("a/b", true), "a\\/b");
        assert_eq!(escaped("a/b", false), "a/b");
    }
}
