mod error;
mod literal;
mod options;
mod ordering;
mod render;

pub use error::FormatError;
pub use options::FormatOptions;

use crate::infra::span;
use crate::value::Value;
use render::Renderer;

/// Format a value into a pretty-printed string, using the default options: two spaces of
/// indentation per nesting level.
///
/// Composite values put one element per line, each followed by a comma. Mapping entries are
/// sorted by the text of their keys, so the output is deterministic. Values in polymorphic slots
/// (`Type::Interface`) are prefixed by their concrete type, as in `(int)3`, unless they are
/// sequences, mappings, or records (whose header already names their type).
///
/// Fails if the value, or anything inside it, is a function, channel, raw address, unwrapped
/// interface, or has no type. No partial output is produced.
pub fn format(value: &Value) -> Result<String, FormatError> {
    format_with(value, &FormatOptions::default())
}

/// Format a value into a pretty-printed string, using the given options.
pub fn format_with(value: &Value, options: &FormatOptions) -> Result<String, FormatError> {
    span!("format");

    Renderer::new(options).render(value, options.base_depth)
}

/// Format a value as if it were nested `depth` columns deep: its children are indented to
/// `depth + 2` and its closing brace to `depth`. The first line is not indented.
pub fn format_padded(value: &Value, depth: usize) -> Result<String, FormatError> {
    format_with(
        value,
        &FormatOptions {
            base_depth: depth,
            ..FormatOptions::default()
        },
    )
}
