use super::error::FormatError;
use super::literal::{format_complex128, format_complex64, format_float32, format_float64, quote};
use super::options::FormatOptions;
use super::ordering::{sort_entries, MapEntry};
use crate::infra::span;
use crate::types::{StructType, Type};
use crate::value::Value;

/// Recursively renders a value to text.
///
/// `depth` is always the indentation of the line the value starts on. A composite value puts its
/// children on their own lines at `depth + indent_width`, and its closing brace back at `depth`.
/// The value's first line is never indented: its parent (or the caller) has already placed it.
pub(crate) struct Renderer {
    indent_width: usize,
}

impl Renderer {
    pub(crate) fn new(options: &FormatOptions) -> Renderer {
        Renderer {
            indent_width: options.indent_width,
        }
    }

    pub(crate) fn render(&self, value: &Value, depth: usize) -> Result<String, FormatError> {
        use Value::*;

        match value {
            Invalid => Err(FormatError::InvalidType),
            Bool(b) => Ok(b.to_string()),
            Int(width, n) if width.fits_signed(*n) => Ok(n.to_string()),
            Uint(width, n) if width.fits_unsigned(*n) => Ok(n.to_string()),
            Int(_, _) | Uint(_, _) => Err(FormatError::InvalidType),
            Float32(x) => Ok(format_float32(*x)),
            Float64(x) => Ok(format_float64(*x)),
            Complex64(re, im) => Ok(format_complex64(*re, *im)),
            Complex128(re, im) => Ok(format_complex128(*re, *im)),
            String(s) => Ok(quote(s)),
            Array(elem_type, items) => {
                let header = format!("[{}]{}", items.len(), elem_type);
                self.render_sequence(&header, elem_type, items, depth)
            }
            Slice(elem_type, items) => {
                let header = format!("[]{}", elem_type);
                let items = items.as_deref().unwrap_or(&[]);
                self.render_sequence(&header, elem_type, items, depth)
            }
            Map(key_type, elem_type, entries) => {
                let entries = entries.as_deref().unwrap_or(&[]);
                self.render_map(key_type, elem_type, entries, depth)
            }
            Struct(struct_type, fields) => self.render_struct(struct_type, fields, depth),
            Ptr(_, None) => Ok("nil".to_owned()),
            Ptr(_, Some(target)) => Ok(format!("&{}", self.render(target, depth)?)),
            Interface => Err(FormatError::InterfaceType),
            Func => Err(FormatError::FunctionType),
            Chan => Err(FormatError::ChanType),
            Uintptr(_) | UnsafePointer(_) => Err(FormatError::ArbitraryPointerType),
        }
    }

    fn render_sequence(
        &self,
        header: &str,
        elem_type: &Type,
        items: &[Value],
        depth: usize,
    ) -> Result<String, FormatError> {
        span!("render_sequence");

        let mut out = format!("{}{{", header);
        if items.is_empty() {
            out.push('}');
            return Ok(out);
        }
        out.push('\n');

        let inner_depth = depth + self.indent_width;
        for item in items {
            let text = self.render(item, inner_depth)?;
            push_indent(&mut out, inner_depth);
            if let Some(annotation) = annotation(elem_type, item) {
                out.push_str(&annotation);
            }
            out.push_str(&text);
            out.push_str(",\n");
        }

        push_indent(&mut out, depth);
        out.push('}');
        Ok(out)
    }

    fn render_map(
        &self,
        key_type: &Type,
        elem_type: &Type,
        entries: &[(Value, Value)],
        depth: usize,
    ) -> Result<String, FormatError> {
        span!("render_map");

        let mut out = format!("map[{}]{}{{", key_type, elem_type);
        if entries.is_empty() {
            out.push('}');
            return Ok(out);
        }
        out.push('\n');

        let inner_depth = depth + self.indent_width;
        let mut rendered = Vec::with_capacity(entries.len());
        for (key, elem) in entries {
            rendered.push(MapEntry {
                key: self.render(key, inner_depth)?,
                key_type: annotation(key_type, key),
                elem: self.render(elem, inner_depth)?,
                elem_type: annotation(elem_type, elem),
            });
        }
        sort_entries(&mut rendered);
        for entry in &rendered {
            entry.write(&mut out, inner_depth);
        }

        push_indent(&mut out, depth);
        out.push('}');
        Ok(out)
    }

    fn render_struct(
        &self,
        struct_type: &StructType,
        values: &[Value],
        depth: usize,
    ) -> Result<String, FormatError> {
        span!("render_struct");

        if struct_type.fields.len() != values.len() {
            return Err(FormatError::InvalidType);
        }

        let mut out = format!("{}{{", struct_type);

        let inner_depth = depth + self.indent_width;
        let mut has_exported_fields = false;
        for (field, value) in struct_type.fields.iter().zip(values) {
            if !field.exported {
                continue;
            }
            if !has_exported_fields {
                has_exported_fields = true;
                out.push('\n');
            }

            let text = self.render(value, inner_depth)?;
            push_indent(&mut out, inner_depth);
            out.push_str(&field.name);
            out.push_str(": ");
            if let Some(annotation) = annotation(&field.ty, value) {
                out.push_str(&annotation);
            }
            out.push_str(&text);
            out.push_str(",\n");
        }

        if has_exported_fields {
            push_indent(&mut out, depth);
        }
        out.push('}');
        Ok(out)
    }
}

/// A value sitting in a polymorphic slot gets a `(type)` prefix, unless its own header already
/// shows its type.
fn annotation(slot_type: &Type, value: &Value) -> Option<String> {
    if slot_type.is_interface() && !value.kind().shape().is_self_describing() {
        Some(format!("({})", value.type_of()))
    } else {
        None
    }
}

fn push_indent(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat(' ').take(indent));
}
