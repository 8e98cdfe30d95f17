#![cfg(feature = "serialization")]

use pretty_format::{Field, FormatOptions, StructType, Type};

#[test]
fn serialization_type_descriptor() {
    let ty = Type::map(
        Type::String,
        Type::slice(Type::record(StructType::new(
            "Point",
            vec![Field::new("X", Type::int()), Field::new("y", Type::Interface)],
        ))),
    );
    let json = serde_json::to_string(&ty).unwrap();
    let restored: Type = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, ty);
    assert_eq!(restored.name(), "map[string][]Point");
}

#[test]
fn serialization_options() {
    let options: FormatOptions =
        serde_json::from_str(r#"{"indent_width": 4, "base_depth": 0}"#).unwrap();
    assert_eq!(options.indent_width, 4);
    assert_eq!(options.base_depth, 0);
}
