//! Rendering of decoded values for the terminal and for export.
//!
//! Export gets plain pretty-printed JSON (what lands in the clipboard);
//! the terminal gets the same tree with ANSI colors per scalar kind.

use owo_colors::OwoColorize;

use crate::{decode::Value, error::ViewError};

const INDENT: &str = "  ";
/// Bytes shown in full before a blob rendering is elided.
const BYTES_PREVIEW: usize = 16;

/// Pretty JSON text of a decoded value, for copy/export.
pub fn to_pretty_json(value: &Value) -> Result<String, ViewError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// ANSI-colored rendering for terminals.
pub fn to_ansi(value: &Value) -> String {
    let mut out = String::new();
    write_ansi(&mut out, value, 0);
    out
}

fn write_ansi(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".yellow().to_string()),
        Value::Bool(b) => out.push_str(&b.cyan().to_string()),
        Value::Int(i) => out.push_str(&i.magenta().to_string()),
        Value::Float(f) => out.push_str(&f.magenta().to_string()),
        Value::Str(s) => out.push_str(&format!("{s:?}").green().to_string()),
        Value::Bytes(b) => out.push_str(&blob_preview(b).dimmed().to_string()),
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                push_indent(out, depth + 1);
                write_ansi(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push(']');
        }
        Value::Map(entries) if entries.is_empty() => out.push_str("{}"),
        Value::Map(entries) => {
            out.push_str("{\n");
            for (i, (key, item)) in entries.iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&format!("{key:?}").red().to_string());
                out.push_str(": ");
                write_ansi(out, item, depth + 1);
                if i + 1 < entries.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push('}');
        }
    }
}

fn blob_preview(bytes: &[u8]) -> String {
    let hex: String = bytes
        .iter()
        .take(BYTES_PREVIEW)
        .map(|b| format!("{b:02x}"))
        .collect();
    if bytes.len() > BYTES_PREVIEW {
        format!("<{} bytes: {hex}...>", bytes.len())
    } else {
        format!("<{} bytes: {hex}>", bytes.len())
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
