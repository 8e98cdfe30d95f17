#![allow(unused)]

use pretty_format::{format, format_with, FormatError, FormatOptions, StructType, Value};
use std::sync::Arc;

fn compare_lines(message: &str, actual: &str, expected: &[&str]) {
    let actual = actual.split('\n').collect::<Vec<_>>();
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

/// Format `value` with the default options and check that it gives exactly these lines.
#[track_caller]
pub fn assert_fmt(value: &Value, expected_lines: &[&str]) {
    match format(value) {
        Ok(actual) => compare_lines("IN FORMAT", &actual, expected_lines),
        Err(err) => panic!("format failed: {}\nEXPECTED:\n{}", err, expected_lines.join("\n")),
    }
}

/// Format `value` with the given options and check that it gives exactly these lines.
#[track_caller]
pub fn assert_fmt_with(value: &Value, options: &FormatOptions, expected_lines: &[&str]) {
    match format_with(value, options) {
        Ok(actual) => compare_lines("IN FORMAT_WITH", &actual, expected_lines),
        Err(err) => panic!("format failed: {}\nEXPECTED:\n{}", err, expected_lines.join("\n")),
    }
}

/// Check that formatting `value` fails with exactly this error.
#[track_caller]
pub fn assert_fmt_err(value: &Value, expected: FormatError) {
    match format(value) {
        Ok(actual) => panic!(
            "format succeeded, but expected {:?}. ACTUAL:\n{}",
            expected, actual
        ),
        Err(err) => assert_eq!(err, expected),
    }
}

/// Construct a record type and share it.
pub fn record_type(struct_type: StructType) -> Arc<StructType> {
    Arc::new(struct_type)
}
