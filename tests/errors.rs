mod common;

use common::{assert_fmt_err, record_type};
use pretty_format::{Field, FormatError, IntWidth, StructType, Type, Value};

#[test]
fn errors_at_top_level() {
    assert_fmt_err(&Value::Invalid, FormatError::InvalidType);
    assert_fmt_err(&Value::Func, FormatError::FunctionType);
    assert_fmt_err(&Value::Chan, FormatError::ChanType);
    assert_fmt_err(&Value::Interface, FormatError::InterfaceType);
    assert_fmt_err(&Value::UnsafePointer(0xdead), FormatError::ArbitraryPointerType);
    assert_fmt_err(&Value::Uintptr(0xbeef), FormatError::ArbitraryPointerType);
}

#[test]
fn errors_in_sequences() {
    let value = Value::slice(Type::Func, vec![Value::Func]);
    assert_fmt_err(&value, FormatError::FunctionType);

    let value = Value::array(
        Type::Interface,
        vec![Value::int(1), Value::Chan, Value::Func],
    );
    assert_fmt_err(&value, FormatError::ChanType);
}

#[test]
fn errors_in_empty_interface_slot() {
    let value = Value::slice(Type::Interface, vec![Value::from("ok"), Value::Invalid]);
    assert_fmt_err(&value, FormatError::InvalidType);
}

#[test]
fn errors_in_maps() {
    let bad_key = Value::map(
        Type::Interface,
        Type::int(),
        vec![
            (Value::from("fine"), Value::int(1)),
            (Value::Uintptr(1), Value::int(2)),
        ],
    );
    assert_fmt_err(&bad_key, FormatError::ArbitraryPointerType);

    let bad_elem = Value::map(Type::String, Type::Chan, vec![(Value::from("c"), Value::Chan)]);
    assert_fmt_err(&bad_elem, FormatError::ChanType);
}

#[test]
fn errors_in_exported_fields() {
    let handler = record_type(StructType::new(
        "Handler",
        vec![
            Field::new("Name", Type::String),
            Field::new("Callback", Type::Func),
        ],
    ));
    let value = Value::record(&handler, vec![Value::from("on_click"), Value::Func]);
    assert_fmt_err(&value, FormatError::FunctionType);
}

#[test]
fn errors_in_record_arity() {
    let point = record_type(StructType::new(
        "P",
        vec![Field::new("A", Type::int()), Field::new("B", Type::int())],
    ));
    let missing = Value::Struct(point.clone(), vec![Value::int(1)]);
    assert_fmt_err(&missing, FormatError::InvalidType);

    let extra = Value::Struct(
        point.clone(),
        vec![Value::int(1), Value::int(2), Value::int(3)],
    );
    assert_fmt_err(&extra, FormatError::InvalidType);

    let nested = Value::ptr(Type::Struct(point.clone()), Value::Struct(point, vec![]));
    assert_fmt_err(&nested, FormatError::InvalidType);
}

#[test]
fn errors_in_integer_width() {
    assert_fmt_err(&Value::Int(IntWidth::W8, 1000), FormatError::InvalidType);
    assert_fmt_err(&Value::Int(IntWidth::W8, 128), FormatError::InvalidType);
    assert_fmt_err(&Value::Int(IntWidth::W16, -32769), FormatError::InvalidType);
    assert_fmt_err(&Value::Uint(IntWidth::W16, 70000), FormatError::InvalidType);
    assert_fmt_err(&Value::Uint(IntWidth::W32, 1 << 32), FormatError::InvalidType);

    let value = Value::slice(
        Type::Interface,
        vec![Value::from(1i8), Value::Int(IntWidth::W8, 1000)],
    );
    assert_fmt_err(&value, FormatError::InvalidType);
}

#[test]
fn errors_through_pointers() {
    let value = Value::ptr(Type::Interface, Value::Interface);
    assert_fmt_err(&value, FormatError::InterfaceType);

    let deep = Value::slice(
        Type::ptr(Type::Chan),
        vec![Value::nil_ptr(Type::Chan), Value::ptr(Type::Chan, Value::Chan)],
    );
    assert_fmt_err(&deep, FormatError::ChanType);
}

#[test]
fn errors_display() {
    assert_eq!(FormatError::InvalidType.to_string(), "invalid type");
    assert_eq!(
        FormatError::ArbitraryPointerType.to_string(),
        "arbitrary pointer types cannot be serialized reliably"
    );
    assert_eq!(
        FormatError::FunctionType.to_string(),
        "functions cannot be serialized"
    );
    assert_eq!(
        FormatError::InterfaceType.to_string(),
        "interfaces cannot be serialized"
    );
    assert_eq!(
        FormatError::ChanType.to_string(),
        "channels cannot be serialized"
    );
}

