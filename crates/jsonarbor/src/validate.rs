//! Structural schema validation.

use crate::Value;

/// Checks `value` against `schema`, a template expressed as a JSON value.
///
/// The rules are shape-based, not a schema language:
///
/// - a `Null` schema matches anything;
/// - any other type mismatch fails;
/// - an object schema requires every one of its keys to be present in the
///   candidate with a valid sub-value (extra candidate keys are fine; an
///   empty object schema matches any object);
/// - an array schema uses its first element as the template every candidate
///   element must match (an empty array schema matches any array; further
///   schema elements are ignored);
/// - primitive leaves succeed on type equality alone.
///
/// # Examples
///
/// ```
/// use jsonarbor::{parse_str, validate};
///
/// let schema = parse_str(r#"{"name":"", "age":0}"#).unwrap();
/// let good = parse_str(r#"{"name":"x","age":7,"extra":true}"#).unwrap();
/// let bad = parse_str(r#"{"name":"x"}"#).unwrap();
/// assert!(validate(&schema, &good));
/// assert!(!validate(&schema, &bad));
/// ```
#[must_use]
pub fn validate(schema: &Value, value: &Value) -> bool {
    if schema.value_type() != value.value_type() && !schema.is_null() {
        return false;
    }
    match (schema, value) {
        (Value::Array(schema_array), Value::Array(array)) => {
            let Some(template) = schema_array.get(0) else {
                return true;
            };
            array.iter().all(|element| validate(template, element))
        }
        (Value::Object(schema_object), Value::Object(object)) => {
            if schema_object.is_empty() {
                return true;
            }
            if object.len() < schema_object.len() {
                return false;
            }
            schema_object.iter().all(|(key, template)| {
                object
                    .get(key)
                    .is_some_and(|element| validate(template, element))
            })
        }
        _ => true,
    }
}
