use alloc::string::String;

use rstest::rstest;

use crate::{SyntaxError, parse, parse_str};

#[rstest]
#[case::empty("")]
#[case::comma_only_object("{,}")]
#[case::unterminated_object(r#"{"a":1"#)]
#[case::missing_colon(r#"{"a" 1}"#)]
#[case::unquoted_key("{a:1}")]
#[case::unterminated_array("[1,")]
#[case::unterminated_string(r#""abc"#)]
#[case::dangling_escape("\"abc\\")]
#[case::bare_word("flase")]
#[case::truncated_true("tru")]
#[case::truncated_null("nul")]
#[case::lone_colon(":")]
#[case::double_comma("[1,,2]")]
#[case::leading_comma("[,1]")]
#[case::dangling_exponent_in_array("[1e]")]
#[case::dangling_exponent_in_object(r#"{"a":1e}"#)]
fn rejected(#[case] text: &str) {
    assert!(parse_str(text).is_err(), "accepted {text:?}");
}

#[rstest]
#[case::leading_zero("01")]
#[case::negative_leading_zero("-01")]
#[case::hex("0xA")]
#[case::upper_hex("0X1")]
fn bad_number_grammar(#[case] text: &str) {
    assert_eq!(
        parse_str(text).unwrap_err().kind,
        SyntaxError::InvalidNumber
    );
}

#[test]
fn good_number_neighbors_of_the_bad_grammar() {
    assert_eq!(parse_str("0.1").unwrap().as_number(), Some(0.1));
    assert_eq!(parse_str("-0.1").unwrap().as_number(), Some(-0.1));
}

#[test]
fn overflowing_numbers_are_out_of_range() {
    assert_eq!(
        parse_str("1e400").unwrap_err().kind,
        SyntaxError::NumberOutOfRange
    );
    assert_eq!(
        parse_str("-1e400").unwrap_err().kind,
        SyntaxError::NumberOutOfRange
    );
}

#[test]
fn lone_surrogates_fail() {
    assert_eq!(
        parse_str(r#""\uD800""#).unwrap_err().kind,
        SyntaxError::UnpairedSurrogate(0xD800)
    );
    assert_eq!(
        parse_str(r#""\uDC00\uD800""#).unwrap_err().kind,
        SyntaxError::UnpairedSurrogate(0xDC00)
    );
}

#[test]
fn control_byte_inside_string_literal() {
    assert_eq!(
        parse(b"\"a\x01b\"").unwrap_err().kind,
        SyntaxError::ControlCharacter(0x01)
    );
}

#[test]
fn duplicate_keys_fail() {
    let err = parse_str(r#"{"a":1,"a":2}"#).unwrap_err();
    assert_eq!(err.kind, SyntaxError::DuplicateKey(String::from("a")));
}

#[test]
fn keys_with_escaped_nul_fail() {
    assert_eq!(
        parse_str(r#"{"a\u0000b":1}"#).unwrap_err().kind,
        SyntaxError::NulInKey
    );
    // the same escape is fine in a string value
    let root = parse_str(r#"{"k":"a\u0000b"}"#).unwrap();
    let value = root.as_object().unwrap().get_string("k").unwrap();
    assert_eq!(value.as_bytes(), b"a\0b");
}

#[test]
fn invalid_utf8_in_string_is_an_encoding_error() {
    // overlong encoding of '/'
    let err = parse(b"\"\xC0\xAF\"").unwrap_err();
    assert!(matches!(err.kind, SyntaxError::InvalidUtf8(_)));
    // bare continuation byte
    let err = parse(b"\"\x80\"").unwrap_err();
    assert!(matches!(err.kind, SyntaxError::InvalidUtf8(_)));
}

#[test]
fn bad_escape_selector_fails() {
    assert_eq!(
        parse_str(r#""a\qb""#).unwrap_err().kind,
        SyntaxError::InvalidEscape('q')
    );
}

#[test]
fn error_offsets_point_into_the_input() {
    let err = parse_str("[1, x]").unwrap_err();
    assert_eq!(err.kind, SyntaxError::UnexpectedCharacter('x'));
    assert_eq!(err.offset, 4);

    let err = parse_str(r#"{"k": "bad\q"}"#).unwrap_err();
    assert_eq!(err.offset, 6, "string errors point at the opening quote");
}
