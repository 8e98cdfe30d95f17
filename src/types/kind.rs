use super::IntWidth;
use std::fmt;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The flat kind of a type, without any of its element types. Its `Display` is the primitive kind
/// name (`int`, `float64`, `unsafe.Pointer`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Array,
    Slice,
    Map,
    Struct,
    Ptr,
    Interface,
    Func,
    Chan,
    UnsafePointer,
}

/// How a kind of value gets rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Booleans and numbers.
    Scalar,
    /// Strings.
    Text,
    /// Arrays and slices.
    Sequence,
    Mapping,
    Record,
    /// A nullable reference.
    Reference,
    /// A polymorphic slot that was never unwrapped.
    Polymorphic,
    /// Functions, channels, raw addresses, and the invalid type. These cannot be rendered.
    Unrepresentable,
}

impl Kind {
    pub(crate) fn int(width: IntWidth) -> Kind {
        match width {
            IntWidth::Native => Kind::Int,
            IntWidth::W8 => Kind::Int8,
            IntWidth::W16 => Kind::Int16,
            IntWidth::W32 => Kind::Int32,
            IntWidth::W64 => Kind::Int64,
        }
    }

    pub(crate) fn uint(width: IntWidth) -> Kind {
        match width {
            IntWidth::Native => Kind::Uint,
            IntWidth::W8 => Kind::Uint8,
            IntWidth::W16 => Kind::Uint16,
            IntWidth::W32 => Kind::Uint32,
            IntWidth::W64 => Kind::Uint64,
        }
    }

    pub fn shape(self) -> Shape {
        use Kind::*;

        match self {
            Bool | Int | Int8 | Int16 | Int32 | Int64 | Uint | Uint8 | Uint16 | Uint32 | Uint64
            | Float32 | Float64 | Complex64 | Complex128 => Shape::Scalar,
            String => Shape::Text,
            Array | Slice => Shape::Sequence,
            Map => Shape::Mapping,
            Struct => Shape::Record,
            Ptr => Shape::Reference,
            Interface => Shape::Polymorphic,
            Invalid | Uintptr | Func | Chan | UnsafePointer => Shape::Unrepresentable,
        }
    }

    fn name(self) -> &'static str {
        use Kind::*;

        match self {
            Invalid => "invalid",
            Bool => "bool",
            Int => "int",
            Int8 => "int8",
            Int16 => "int16",
            Int32 => "int32",
            Int64 => "int64",
            Uint => "uint",
            Uint8 => "uint8",
            Uint16 => "uint16",
            Uint32 => "uint32",
            Uint64 => "uint64",
            Uintptr => "uintptr",
            Float32 => "float32",
            Float64 => "float64",
            Complex64 => "complex64",
            Complex128 => "complex128",
            String => "string",
            Array => "array",
            Slice => "slice",
            Map => "map",
            Struct => "struct",
            Ptr => "ptr",
            Interface => "interface",
            Func => "func",
            Chan => "chan",
            UnsafePointer => "unsafe.Pointer",
        }
    }
}

impl Shape {
    /// Whether a value of this shape already shows its type in its own header, so that it needs no
    /// `(type)` annotation when it sits in a polymorphic slot.
    pub fn is_self_describing(self) -> bool {
        match self {
            Shape::Sequence | Shape::Mapping | Shape::Record | Shape::Polymorphic => true,
            Shape::Scalar | Shape::Text | Shape::Reference | Shape::Unrepresentable => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
