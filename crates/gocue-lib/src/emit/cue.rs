//! Schema syntax (CUE) rendering.
//!
//! Every Go declaration becomes a definition (`#Name`). Struct fields only
//! appear when they carry a `json` tag; the tag decides the field label and
//! whether it is optional.

use crate::file::File;
use crate::ir::{Docs, EnumType, Field, Type};

use super::names::{cue_list, cue_type};

const OMITEMPTY: &str = "omitempty";

/// Render the whole file. The result ends with a single newline.
pub fn emit_cue(file: &File) -> String {
    let mut out = format!("package {}\n\n", file.cue_package_name());

    if !file.imports().is_empty() {
        out.push_str("import (\n");
        for import in file.imports().values() {
            out.push('\t');
            out.push_str(&super::go::emit_import(import));
            out.push('\n');
        }
        out.push_str(")\n\n");
    }

    for ty in file.code() {
        push_docs(&mut out, ty.docs(), 0);
        out.push_str(&emit_definition(ty));
        out.push('\n');
    }

    out.pop();
    out
}

/// One definition, without its docs.
pub fn emit_definition(ty: &Type) -> String {
    match ty {
        Type::Plain(plain) => format!("#{}: {}\n", plain.name, cue_type(&plain.ty)),
        Type::Array(array) => format!("#{}: {}\n", array.name, cue_list(&array.elem)),
        Type::Map(map) => format!(
            "#{}: [{}]: {}\n",
            map.name,
            cue_type(&map.key),
            cue_type(&map.value)
        ),
        Type::Struct(st) => format!("#{}: {}\n", st.name, emit_struct(&st.fields, 0)),
        Type::Enum(en) => {
            let mut out = format!("#{}: {}\n\n", en.name, emit_union(en));
            for value in &en.values {
                out.push_str(&format!("{}_{}: \"{}\"\n", en.name, value, value));
            }
            out
        }
    }
}

fn emit_union(en: &EnumType) -> String {
    en.values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Struct body opening on a line indented by `depth`.
fn emit_struct(fields: &[Field], depth: usize) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let mut out = String::from("{\n");
    for field in fields {
        out.push_str(&emit_field(field, depth + 1));
    }
    push_indent(&mut out, depth);
    out.push('}');
    out
}

fn emit_field(field: &Field, depth: usize) -> String {
    let Some(json) = field.tags.get("json") else {
        return String::new();
    };
    let label = match json.first().map(String::as_str) {
        Some("-") => return String::new(),
        Some("") | None => field.name(),
        Some(name) => name,
    };
    let optional = json.get(1).is_some_and(|opt| opt == OMITEMPTY);

    let value = match &field.ty {
        Type::Plain(plain) => cue_type(&plain.ty),
        Type::Array(array) => cue_list(&array.elem),
        Type::Map(map) => format!("[{}]: {}", cue_type(&map.key), cue_type(&map.value)),
        Type::Struct(st) => emit_struct(&st.fields, depth),
        Type::Enum(en) => emit_union(en),
    };

    let mut out = String::new();
    push_docs(&mut out, field.docs(), depth);
    push_indent(&mut out, depth);
    out.push_str(&quote_label(label));
    if optional {
        out.push('?');
    }
    out.push_str(": ");
    out.push_str(&value);
    out.push('\n');
    out
}

/// Labels that are not plain identifiers must be quoted.
fn quote_label(label: &str) -> String {
    let mut chars = label.chars();
    let ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if ident {
        label.to_string()
    } else {
        format!("{label:?}")
    }
}

/// CUE only has line comments; block comments are converted.
fn push_docs(out: &mut String, docs: Option<&Docs>, depth: usize) {
    let Some(docs) = docs else {
        return;
    };
    for comment in docs.comments() {
        let Some(block) = comment.strip_prefix("/*") else {
            for line in comment.lines() {
                push_indent(out, depth);
                out.push_str(line.trim());
                out.push('\n');
            }
            continue;
        };
        let block = block.strip_suffix("*/").unwrap_or(block);
        for line in block.trim().lines() {
            let line = line.trim();
            let line = line.strip_prefix('*').map(str::trim_start).unwrap_or(line);
            push_indent(out, depth);
            if line.is_empty() {
                out.push_str("//");
            } else {
                out.push_str("// ");
                out.push_str(line);
            }
            out.push('\n');
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}
