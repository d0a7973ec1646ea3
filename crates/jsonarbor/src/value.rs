//! The JSON value tree.

use alloc::{string::String, vec::Vec};

use crate::{JsonArray, JsonObject, error::NonFiniteNumberError};

/// Type codes for JSON values.
///
/// The discriminants are stable and exposed for callers that persist or
/// compare numeric type codes; convert with `ValueType::code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ValueType {
    /// Reserved. No [`Value`] ever reports this type; it exists so the full
    /// code range of the wire-compatible enum is representable.
    Error = -1,
    /// The `null` literal.
    Null = 1,
    /// A string.
    String = 2,
    /// A finite double.
    Number = 3,
    /// An object.
    Object = 4,
    /// An array.
    Array = 5,
    /// `true` or `false`.
    Boolean = 6,
}

impl ValueType {
    /// The numeric code of this type.
    #[must_use]
    pub fn code(self) -> i8 {
        self as i8
    }
}

/// A JSON value as defined by [RFC 8259].
///
/// A `Value` owns its entire subtree: arrays and objects hold their children
/// by value, so a child can never be attached to two parents, and dropping a
/// value releases everything beneath it.
///
/// # Examples
///
/// ```
/// use jsonarbor::{JsonObject, Value};
///
/// let mut object = JsonObject::new();
/// object.insert("key", Value::from("value"));
/// let v = Value::Object(object);
/// assert_eq!(v.to_json(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A finite IEEE-754 double. Construct through `TryFrom<f64>` (or the
    /// parser), which reject NaN and the infinities.
    Number(f64),
    /// A UTF-8 string; may contain embedded NUL.
    String(String),
    /// An ordered sequence of values.
    Array(JsonArray),
    /// An insertion-ordered map from string keys to values.
    Object(JsonObject),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<JsonArray> for Value {
    fn from(v: JsonArray) -> Self {
        Self::Array(v)
    }
}

impl From<JsonObject> for Value {
    fn from(v: JsonObject) -> Self {
        Self::Object(v)
    }
}

impl TryFrom<f64> for Value {
    type Error = NonFiniteNumberError;

    /// Wraps a double, failing on NaN and ±infinity.
    fn try_from(v: f64) -> Result<Self, NonFiniteNumberError> {
        if v.is_finite() {
            Ok(Self::Number(v))
        } else {
            Err(NonFiniteNumberError)
        }
    }
}

impl Value {
    /// The type code of this value. Never [`ValueType::Error`].
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The string payload, or `None` for any other type.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// The number payload, or `None` for any other type.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let Self::Number(n) = self { Some(*n) } else { None }
    }

    /// The boolean payload, or `None` for any other type.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        if let Self::Boolean(b) = self { Some(*b) } else { None }
    }

    /// The array container, or `None` for any other type.
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// Mutable access to the array container.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// The object container, or `None` for any other type.
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }

    /// Mutable access to the object container.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }

    /// Consumes the value and returns its string, if it is one.
    #[must_use]
    pub fn into_string(self) -> Option<String> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// Consumes the value and returns its array container, if it is one.
    #[must_use]
    pub fn into_array(self) -> Option<JsonArray> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// Consumes the value and returns its object container, if it is one.
    #[must_use]
    pub fn into_object(self) -> Option<JsonObject> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }

    /// Deep equality with tolerant number comparison.
    ///
    /// Arrays compare positionally, objects by key (insertion order is
    /// ignored), strings byte-for-byte, and numbers with an absolute
    /// tolerance of `1e-6`. Use `==` for the strict structural variant.
    #[must_use]
    pub fn equals(&self, other: &Value) -> bool {
        const EPSILON: f64 = 1e-6;
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => (a - b).abs() < EPSILON,
            (Self::String(a), Self::String(b)) => a.as_bytes() == b.as_bytes(),
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.equals(y)))
            }
            _ => false,
        }
    }

    /// Finds the value whose container directly holds `descendant`, searching
    /// this value's subtree by identity.
    ///
    /// Returns `self`'s wrapping of the container when `descendant` is a
    /// direct child of an array or object somewhere below `self`, or `None`
    /// when `descendant` is not part of this tree (in particular, when it is
    /// the root itself). This is a lookup aid; ownership always flows from
    /// parent to child.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonarbor::parse_str;
    ///
    /// let root = parse_str(r#"{"k":"v"}"#).unwrap();
    /// let inner = root.as_object().unwrap().get("k").unwrap();
    /// let parent = root.parent_of(inner).unwrap();
    /// assert!(core::ptr::eq(parent, &root));
    /// ```
    #[must_use]
    pub fn parent_of<'a>(&'a self, descendant: &Value) -> Option<&'a Value> {
        let mut stack: Vec<&Value> = alloc::vec![self];
        while let Some(candidate) = stack.pop() {
            match candidate {
                Value::Array(array) => {
                    for child in array {
                        if core::ptr::eq(child, descendant) {
                            return Some(candidate);
                        }
                        stack.push(child);
                    }
                }
                Value::Object(object) => {
                    for (_, child) in object {
                        if core::ptr::eq(child, descendant) {
                            return Some(candidate);
                        }
                        stack.push(child);
                    }
                }
                _ => {}
            }
        }
        None
    }
}

/// Drops a batch of values without recursing per nesting level.
///
/// Containers drain their children onto the worklist before the value
/// itself is dropped, so teardown of arbitrarily deep trees uses constant
/// stack.
pub(crate) fn drop_children(mut stack: Vec<Value>) {
    while let Some(mut value) = stack.pop() {
        match &mut value {
            Value::Array(array) => {
                let mut children = array.take_items();
                stack.append(&mut children);
            }
            Value::Object(object) => {
                let mut children = object.take_values();
                stack.append(&mut children);
            }
            _ => {}
        }
    }
}
