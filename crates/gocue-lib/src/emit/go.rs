//! Declaration syntax (Go) rendering.

use crate::file::File;
use crate::ir::{Docs, Field, Import, Type};

/// Render the whole file, unformatted.
///
/// Imports are sorted by path; every entry is followed by a blank line.
pub fn emit_go(file: &File) -> String {
    let mut out = format!("package {}\n\n", file.package_name());

    let mut imports: Vec<&Import> = file.imports().values().collect();
    imports.sort_by(|a, b| a.path.cmp(&b.path));
    if !imports.is_empty() {
        out.push_str("import (\n");
        for import in imports {
            out.push('\t');
            out.push_str(&emit_import(import));
            out.push('\n');
        }
        out.push_str(")\n\n");
    }

    for ty in file.code() {
        push_docs(&mut out, ty.docs(), 0);
        out.push_str(&emit_decl(ty));
        out.push('\n');
    }

    out
}

pub fn emit_import(import: &Import) -> String {
    match &import.name {
        Some(name) => format!("{} \"{}\"", name, import.path),
        None => format!("\"{}\"", import.path),
    }
}

/// One top-level declaration, without its docs.
pub fn emit_decl(ty: &Type) -> String {
    let Type::Enum(en) = ty else {
        return format!("type {} {}\n", ty.name(), emit_type_expr(ty, 0));
    };

    let mut out = format!("type {} string\n\nconst (\n", en.name);
    for value in &en.values {
        out.push_str(&format!("\t{}_{} = \"{}\"\n", en.name, value, value));
    }
    out.push_str(")\n");
    out
}

/// The type expression an entry declares, for use after `type Name` or a
/// field name. `depth` is the indentation of the line it starts on.
fn emit_type_expr(ty: &Type, depth: usize) -> String {
    match ty {
        Type::Plain(plain) => plain.ty.clone(),
        Type::Array(array) => match array.len {
            Some(len) => format!("[{}]{}", len, array.elem),
            None => format!("[]{}", array.elem),
        },
        Type::Map(map) => format!("map[{}]{}", map.key, map.value),
        Type::Struct(st) if st.fields.is_empty() => "struct{}".to_string(),
        Type::Struct(st) => {
            let mut out = String::from("struct {\n");
            for field in &st.fields {
                out.push_str(&emit_field(field, depth + 1));
            }
            push_indent(&mut out, depth);
            out.push('}');
            out
        }
        Type::Enum(_) => "string".to_string(),
    }
}

fn emit_field(field: &Field, depth: usize) -> String {
    let mut out = String::new();
    push_docs(&mut out, field.docs(), depth);
    push_indent(&mut out, depth);
    out.push_str(field.name());
    out.push(' ');
    out.push_str(&emit_type_expr(&field.ty, depth));
    if !field.tags.is_empty() {
        out.push_str(&format!(" `{}`", field.tags));
    }
    out.push('\n');
    out
}

fn push_docs(out: &mut String, docs: Option<&Docs>, depth: usize) {
    let Some(docs) = docs else {
        return;
    };
    for line in docs.text().lines() {
        push_indent(out, depth);
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}
