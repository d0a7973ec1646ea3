//! A JSON value tree: strict parser, insertion-ordered objects, structural
//! validation.
//!
//! The crate parses UTF-8 JSON text into an owned [`Value`] tree, offers a
//! mutating API over that tree, compares trees ([`Value::equals`]) and
//! checks them against shape templates ([`validate`]), and serializes back
//! to canonical JSON. Objects keep insertion order while still giving O(1)
//! average lookup, backed by an open-addressed probe table with
//! backward-shift deletion.
//!
//! `no_std` + `alloc` by default; the `std` feature adds
//! [`parse_file`], and the `serde` feature adds `Serialize`/`Deserialize`
//! for [`Value`].
//!
//! # Examples
//!
//! ```
//! use jsonarbor::{Value, parse_str};
//!
//! let root = parse_str(r#"{"name":"arbor","tags":["json","tree"]}"#)?;
//! let object = root.as_object().unwrap();
//! assert_eq!(object.get_string("name"), Some("arbor"));
//! assert_eq!(object.dotget("tags").unwrap().as_array().unwrap().len(), 2);
//! assert_eq!(root.to_json(), r#"{"name":"arbor","tags":["json","tree"]}"#);
//! # Ok::<(), jsonarbor::ParseError>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod array;
mod error;
mod object;
mod parser;
mod ser;
#[cfg(any(test, feature = "serde"))]
mod serde;
mod strings;
mod unicode;
mod validate;
mod value;

#[cfg(test)]
mod tests;

pub use array::JsonArray;
#[cfg(feature = "std")]
pub use error::ParseFileError;
pub use error::{
    DuplicateKeyError, IndexError, NonFiniteNumberError, ParseError, SyntaxError,
};
pub use object::{Iter as ObjectIter, JsonObject};
#[cfg(feature = "std")]
pub use parser::parse_file;
pub use parser::{MAX_NESTING, parse, parse_str};
pub use ser::SerializeOptions;
pub use validate::validate;
pub use value::{Value, ValueType};

/// Containers allocate no storage until first use, then never fewer than
/// this many slots.
pub(crate) const STARTING_CAPACITY: usize = 16;
