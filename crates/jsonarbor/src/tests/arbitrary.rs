use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{JsonArray, JsonObject, Value};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FiniteNumber(pub f64);

impl Arbitrary for FiniteNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Self(value)
    }
}

/// Object keys must survive a serialize/parse cycle, so embedded NUL (which
/// the parser rejects in keys) is stripped.
fn arbitrary_key(g: &mut Gen) -> String {
    String::arbitrary(g).replace('\0', " ")
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(FiniteNumber::arbitrary(g).0),
                    _ => Value::String(String::arbitrary(g)),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(FiniteNumber::arbitrary(g).0),
                    3 => Value::String(String::arbitrary(g)),
                    4 => {
                        let len = usize::arbitrary(g) % 4;
                        let mut array = JsonArray::new();
                        for _ in 0..len {
                            array.push(gen_val(g, depth - 1));
                        }
                        Value::Array(array)
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 4;
                        let mut object = JsonObject::new();
                        for _ in 0..len {
                            let key = arbitrary_key(g);
                            let val = gen_val(g, depth - 1);
                            object.insert(&key, val);
                        }
                        Value::Object(object)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}
