//! Pretty-print arbitrary values as deterministic, diffable text.
//!
//! ```
//! use pretty_format::{format, Type, Value};
//!
//! let value = Value::slice(Type::Interface, vec![Value::from("hello"), Value::int(1234)]);
//! assert_eq!(
//!     format(&value).unwrap(),
//!     "[]interface{}{\n  (string)\"hello\",\n  (int)1234,\n}"
//! );
//! ```

mod formatting;
mod infra;
#[cfg(feature = "json")]
mod json;
mod types;
mod value;

pub use formatting::{format, format_padded, format_with, FormatError, FormatOptions};
pub use types::{Field, IntWidth, Kind, Shape, StructType, Type};
pub use value::Value;
