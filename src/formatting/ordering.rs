//! Mappings have no inherent order, so their entries are sorted before display.

/// One rendered entry of a mapping. Annotations are `Some("(type)")` for keys or elements that sit
/// in a polymorphic slot and aren't self-describing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MapEntry {
    pub key: String,
    pub key_type: Option<String>,
    pub elem: String,
    pub elem_type: Option<String>,
}

impl MapEntry {
    /// Write this entry as one `key: elem,` line, with the given indentation.
    pub(crate) fn write(&self, out: &mut String, indent: usize) {
        out.extend(std::iter::repeat(' ').take(indent));
        if let Some(key_type) = &self.key_type {
            out.push_str(key_type);
        }
        out.push_str(&self.key);
        out.push_str(": ");
        if let Some(elem_type) = &self.elem_type {
            out.push_str(elem_type);
        }
        out.push_str(&self.elem);
        out.push_str(",\n");
    }
}

/// Sort entries by their rendered key text (not including the key's annotation). The sort is
/// stable: entries whose keys render identically stay in the order they were given.
pub(crate) fn sort_entries(entries: &mut [MapEntry]) {
    entries.sort_by(|e1, e2| e1.key.cmp(&e2.key));
}
