#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Options for how to lay out a formatted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// Number of spaces added per level of nesting.
    pub indent_width: usize,
    /// Indentation of the outermost value. Its first line is never indented (the caller decides
    /// where it starts), but its closing brace and its children are placed relative to this.
    pub base_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            indent_width: 2,
            base_depth: 0,
        }
    }
}
