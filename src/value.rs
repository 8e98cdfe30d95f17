use crate::types::{IntWidth, Kind, StructType, Type};
use std::sync::Arc;

/// A value to be formatted, together with the type information its rendering needs.
///
/// Scalars carry their own type. Containers carry the *declared* type of their elements, which is
/// what appears in their header (`[]int{`, `map[string]interface{}{`) and which decides whether
/// each element sits in a polymorphic slot. An element of a polymorphic slot is simply its concrete
/// value; its concrete type comes from [`Value::type_of`].
///
/// Values own their children, so a value graph is always a finite tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value and no type. This is what an empty polymorphic slot holds.
    Invalid,
    Bool(bool),
    /// A signed integer. Formatting fails with `InvalidType` if it doesn't fit the width.
    Int(IntWidth, i64),
    /// An unsigned integer. Formatting fails with `InvalidType` if it doesn't fit the width.
    Uint(IntWidth, u64),
    /// An integer holding a memory address.
    Uintptr(usize),
    Float32(f32),
    Float64(f64),
    /// Real and imaginary parts.
    Complex64(f32, f32),
    /// Real and imaginary parts.
    Complex128(f64, f64),
    String(String),
    /// A fixed-length sequence, with its element type.
    Array(Type, Vec<Value>),
    /// A variable-length sequence, with its element type. `None` is a nil slice.
    Slice(Type, Option<Vec<Value>>),
    /// A mapping, with its key type, element type, and entries. `None` is a nil map.
    Map(Type, Type, Option<Vec<(Value, Value)>>),
    /// A record, with one value per field of its type, in declaration order. Formatting fails with
    /// `InvalidType` if the counts differ; [`Value::record`] checks this up front.
    Struct(Arc<StructType>, Vec<Value>),
    /// A nullable reference, with its pointee type.
    Ptr(Type, Option<Box<Value>>),
    /// A polymorphic slot that was never unwrapped to its concrete value.
    Interface,
    Func,
    Chan,
    /// A raw memory address.
    UnsafePointer(usize),
}

impl Value {
    pub fn int(n: i64) -> Value {
        Value::Int(IntWidth::Native, n)
    }

    pub fn uint(n: u64) -> Value {
        Value::Uint(IntWidth::Native, n)
    }

    pub fn string(s: &str) -> Value {
        Value::String(s.to_owned())
    }

    pub fn array(elem: Type, items: Vec<Value>) -> Value {
        Value::Array(elem, items)
    }

    pub fn slice(elem: Type, items: Vec<Value>) -> Value {
        Value::Slice(elem, Some(items))
    }

    pub fn nil_slice(elem: Type) -> Value {
        Value::Slice(elem, None)
    }

    pub fn map(key: Type, elem: Type, entries: Vec<(Value, Value)>) -> Value {
        Value::Map(key, elem, Some(entries))
    }

    pub fn nil_map(key: Type, elem: Type) -> Value {
        Value::Map(key, elem, None)
    }

    /// Construct a record value. Panics if the number of values differs from the number of fields.
    pub fn record(struct_type: &Arc<StructType>, values: Vec<Value>) -> Value {
        assert_eq!(
            struct_type.fields.len(),
            values.len(),
            "Value::record: {} has {} fields but was given {} values",
            Type::Struct(struct_type.clone()),
            struct_type.fields.len(),
            values.len()
        );
        Value::Struct(struct_type.clone(), values)
    }

    pub fn ptr(pointee: Type, target: Value) -> Value {
        Value::Ptr(pointee, Some(Box::new(target)))
    }

    pub fn nil_ptr(pointee: Type) -> Value {
        Value::Ptr(pointee, None)
    }

    /// The concrete kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Invalid => Kind::Invalid,
            Value::Bool(_) => Kind::Bool,
            Value::Int(width, _) => Kind::int(*width),
            Value::Uint(width, _) => Kind::uint(*width),
            Value::Uintptr(_) => Kind::Uintptr,
            Value::Float32(_) => Kind::Float32,
            Value::Float64(_) => Kind::Float64,
            Value::Complex64(_, _) => Kind::Complex64,
            Value::Complex128(_, _) => Kind::Complex128,
            Value::String(_) => Kind::String,
            Value::Array(_, _) => Kind::Array,
            Value::Slice(_, _) => Kind::Slice,
            Value::Map(_, _, _) => Kind::Map,
            Value::Struct(_, _) => Kind::Struct,
            Value::Ptr(_, _) => Kind::Ptr,
            Value::Interface => Kind::Interface,
            Value::Func => Kind::Func,
            Value::Chan => Kind::Chan,
            Value::UnsafePointer(_) => Kind::UnsafePointer,
        }
    }

    /// The concrete type of this value.
    pub fn type_of(&self) -> Type {
        match self {
            Value::Invalid => Type::Invalid,
            Value::Bool(_) => Type::Bool,
            Value::Int(width, _) => Type::Int(*width),
            Value::Uint(width, _) => Type::Uint(*width),
            Value::Uintptr(_) => Type::Uintptr,
            Value::Float32(_) => Type::Float32,
            Value::Float64(_) => Type::Float64,
            Value::Complex64(_, _) => Type::Complex64,
            Value::Complex128(_, _) => Type::Complex128,
            Value::String(_) => Type::String,
            Value::Array(elem, items) => Type::array(items.len(), elem.clone()),
            Value::Slice(elem, _) => Type::slice(elem.clone()),
            Value::Map(key, elem, _) => Type::map(key.clone(), elem.clone()),
            Value::Struct(struct_type, _) => Type::Struct(struct_type.clone()),
            Value::Ptr(pointee, _) => Type::ptr(pointee.clone()),
            Value::Interface => Type::Interface,
            Value::Func => Type::Func,
            Value::Chan => Type::Chan,
            Value::UnsafePointer(_) => Type::UnsafePointer,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $width:expr, $ty:ty, $repr:ty) => {
        impl From<$ty> for Value {
            fn from(n: $ty) -> Value {
                Value::$variant($width, n as $repr)
            }
        }
    };
}

impl_from_int!(Int, IntWidth::Native, isize, i64);
impl_from_int!(Int, IntWidth::W8, i8, i64);
impl_from_int!(Int, IntWidth::W16, i16, i64);
impl_from_int!(Int, IntWidth::W32, i32, i64);
impl_from_int!(Int, IntWidth::W64, i64, i64);
impl_from_int!(Uint, IntWidth::Native, usize, u64);
impl_from_int!(Uint, IntWidth::W8, u8, u64);
impl_from_int!(Uint, IntWidth::W16, u16, u64);
impl_from_int!(Uint, IntWidth::W32, u32, u64);
impl_from_int!(Uint, IntWidth::W64, u64, u64);

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Value {
        Value::Float32(x)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float64(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}
