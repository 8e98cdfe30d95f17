//! Type descriptors: the static shape of a value, as seen by its container.
//!
//! - [`Type`] describes every type a [`Value`](crate::Value) can have.
//! - [`Kind`] and [`Shape`] classify a type for rendering.

mod kind;

pub use kind::{Kind, Shape};

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The width of an integer type. `Native` is the platform word size (`int` / `uint`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum IntWidth {
    Native,
    W8,
    W16,
    W32,
    W64,
}

/// Describes the type of a value slot. Containers carry the `Type` of their elements, which is how
/// the formatter knows whether an element sits in a polymorphic slot (`Type::Interface`) and so
/// needs a `(type)` annotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Type {
    /// No type information at all.
    Invalid,
    Bool,
    /// Signed integer.
    Int(IntWidth),
    /// Unsigned integer.
    Uint(IntWidth),
    /// An integer holding a memory address.
    Uintptr,
    Float32,
    Float64,
    /// Complex number with `f32` components.
    Complex64,
    /// Complex number with `f64` components.
    Complex128,
    String,
    /// Fixed-length sequence: `[len]elem`.
    Array(usize, Box<Type>),
    /// Variable-length sequence: `[]elem`.
    Slice(Box<Type>),
    /// Mapping from key type to element type.
    Map(Box<Type>, Box<Type>),
    /// A record with named fields.
    Struct(Arc<StructType>),
    /// A nullable reference to a value of the pointee type.
    Ptr(Box<Type>),
    /// A polymorphic slot: the concrete type is only known from the value stored in it.
    Interface,
    Func,
    Chan,
    /// A raw memory address.
    UnsafePointer,
}

/// The layout of a record type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StructType {
    /// `None` for an anonymous record.
    pub name: Option<String>,
    /// Fields, in declaration order.
    pub fields: Vec<Field>,
}

/// One named field of a [`StructType`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Field {
    pub name: String,
    pub ty: Type,
    /// Only exported fields are displayed.
    pub exported: bool,
}

impl IntWidth {
    /// Number of bits. `Native` is 64 bits wide.
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 | IntWidth::Native => 64,
        }
    }

    /// Can a signed integer of this width hold `n`?
    pub fn fits_signed(self, n: i64) -> bool {
        let bits = self.bits();
        bits == 64 || (n >= -(1i64 << (bits - 1)) && n < (1i64 << (bits - 1)))
    }

    /// Can an unsigned integer of this width hold `n`?
    pub fn fits_unsigned(self, n: u64) -> bool {
        let bits = self.bits();
        bits == 64 || n < (1u64 << bits)
    }
}

impl Type {
    pub fn int() -> Type {
        Type::Int(IntWidth::Native)
    }

    pub fn uint() -> Type {
        Type::Uint(IntWidth::Native)
    }

    pub fn array(len: usize, elem: Type) -> Type {
        Type::Array(len, Box::new(elem))
    }

    pub fn slice(elem: Type) -> Type {
        Type::Slice(Box::new(elem))
    }

    pub fn map(key: Type, elem: Type) -> Type {
        Type::Map(Box::new(key), Box::new(elem))
    }

    pub fn ptr(pointee: Type) -> Type {
        Type::Ptr(Box::new(pointee))
    }

    pub fn record(struct_type: StructType) -> Type {
        Type::Struct(Arc::new(struct_type))
    }

    /// The flat kind of this type, ignoring any element types.
    pub fn kind(&self) -> Kind {
        match self {
            Type::Invalid => Kind::Invalid,
            Type::Bool => Kind::Bool,
            Type::Int(width) => Kind::int(*width),
            Type::Uint(width) => Kind::uint(*width),
            Type::Uintptr => Kind::Uintptr,
            Type::Float32 => Kind::Float32,
            Type::Float64 => Kind::Float64,
            Type::Complex64 => Kind::Complex64,
            Type::Complex128 => Kind::Complex128,
            Type::String => Kind::String,
            Type::Array(_, _) => Kind::Array,
            Type::Slice(_) => Kind::Slice,
            Type::Map(_, _) => Kind::Map,
            Type::Struct(_) => Kind::Struct,
            Type::Ptr(_) => Kind::Ptr,
            Type::Interface => Kind::Interface,
            Type::Func => Kind::Func,
            Type::Chan => Kind::Chan,
            Type::UnsafePointer => Kind::UnsafePointer,
        }
    }

    pub fn shape(&self) -> Shape {
        self.kind().shape()
    }

    /// Is this the type of a polymorphic slot?
    pub fn is_interface(&self) -> bool {
        matches!(self, Type::Interface)
    }

    /// The canonical name of this type, as used in container headers and `(type)` annotations.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Array(len, elem) => write!(f, "[{}]{}", len, elem),
            Type::Slice(elem) => write!(f, "[]{}", elem),
            Type::Map(key, elem) => write!(f, "map[{}]{}", key, elem),
            Type::Ptr(pointee) => write!(f, "*{}", pointee),
            Type::Struct(struct_type) => write!(f, "{}", struct_type),
            Type::Interface => write!(f, "interface{{}}"),
            _ => write!(f, "{}", self.kind()),
        }
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "(anonymous struct)"),
        }
    }
}

impl StructType {
    pub fn new(name: &str, fields: Vec<Field>) -> StructType {
        StructType {
            name: Some(name.to_owned()),
            fields,
        }
    }

    pub fn anonymous(fields: Vec<Field>) -> StructType {
        StructType { name: None, fields }
    }

    /// Does any field get displayed?
    pub fn has_exported_fields(&self) -> bool {
        self.fields.iter().any(|field| field.exported)
    }
}

impl Field {
    /// A field whose visibility follows its name: it's exported iff it starts with an uppercase
    /// letter.
    pub fn new(name: &str, ty: Type) -> Field {
        let exported = name.chars().next().map_or(false, char::is_uppercase);
        Field {
            name: name.to_owned(),
            ty,
            exported,
        }
    }

    pub fn exported(name: &str, ty: Type) -> Field {
        Field {
            name: name.to_owned(),
            ty,
            exported: true,
        }
    }

    pub fn hidden(name: &str, ty: Type) -> Field {
        Field {
            name: name.to_owned(),
            ty,
            exported: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Type::int().name(), "int");
        assert_eq!(Type::Int(IntWidth::W64).name(), "int64");
        assert_eq!(Type::Uint(IntWidth::W8).name(), "uint8");
        assert_eq!(Type::Complex64.name(), "complex64");
        assert_eq!(Type::UnsafePointer.name(), "unsafe.Pointer");
        assert_eq!(Type::slice(Type::String).name(), "[]string");
        assert_eq!(Type::array(3, Type::Interface).name(), "[3]interface{}");
        assert_eq!(
            Type::map(Type::Interface, Type::slice(Type::Bool)).name(),
            "map[interface{}][]bool"
        );
        assert_eq!(Type::ptr(Type::ptr(Type::Float64)).name(), "**float64");
    }

    #[test]
    fn test_struct_names() {
        let named = Type::record(StructType::new("foo1", vec![]));
        assert_eq!(named.name(), "foo1");
        assert_eq!(Type::ptr(named.clone()).name(), "*foo1");
        assert_eq!(Type::slice(Type::ptr(named)).name(), "[]*foo1");

        let anon = Type::record(StructType::anonymous(vec![Field::new("A", Type::int())]));
        assert_eq!(anon.name(), "(anonymous struct)");
    }

    #[test]
    fn test_int_widths() {
        assert!(IntWidth::W8.fits_signed(127));
        assert!(IntWidth::W8.fits_signed(-128));
        assert!(!IntWidth::W8.fits_signed(128));
        assert!(!IntWidth::W8.fits_signed(-129));
        assert!(IntWidth::W16.fits_signed(-32768));
        assert!(!IntWidth::W32.fits_signed(1 << 31));
        assert!(IntWidth::Native.fits_signed(i64::MIN));
        assert!(IntWidth::W8.fits_unsigned(255));
        assert!(!IntWidth::W8.fits_unsigned(256));
        assert!(IntWidth::W32.fits_unsigned(u64::from(u32::MAX)));
        assert!(IntWidth::W64.fits_unsigned(u64::MAX));
    }

    #[test]
    fn test_field_visibility() {
        assert!(Field::new("Asd", Type::String).exported);
        assert!(!Field::new("bar", Type::int()).exported);
        assert!(!Field::new("_X", Type::int()).exported);
        assert!(Field::exported("x", Type::int()).exported);
        assert!(!Field::hidden("X", Type::int()).exported);

        let st = StructType::new("foo2", vec![Field::new("dsa", Type::int())]);
        assert!(!st.has_exported_fields());
    }
}
