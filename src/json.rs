//! Convert JSON documents into formattable values.
//!
//! JSON has no static types, so every array element and object member sits in a polymorphic slot:
//! arrays become `[]interface{}` and objects become `map[string]interface{}`.

use crate::types::{IntWidth, Type};
use crate::value::Value;
use serde_json::Value as Json;

impl Value {
    /// Convert a JSON value. Numbers become `int64` if they fit, then `uint64`, then `float64`.
    /// `null` becomes a nil `*interface{}`.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::Null => Value::nil_ptr(Type::Interface),
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(IntWidth::W64, i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(IntWidth::W64, u)
                } else {
                    n.as_f64().map_or(Value::Invalid, Value::Float64)
                }
            }
            Json::String(s) => Value::String(s.clone()),
            Json::Array(elems) => {
                Value::slice(Type::Interface, elems.iter().map(Value::from_json).collect())
            }
            Json::Object(members) => Value::map(
                Type::String,
                Type::Interface,
                members
                    .iter()
                    .map(|(key, elem)| (Value::String(key.clone()), Value::from_json(elem)))
                    .collect(),
            ),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Value {
        Value::from_json(json)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Value {
        Value::from_json(&json)
    }
}
