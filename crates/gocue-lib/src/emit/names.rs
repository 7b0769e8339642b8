//! Name normalization shared by both renderers.
//!
//! Declaration syntax keeps Go type strings as they are. Schema syntax
//! rewrites them: pointers vanish, byte slices become `bytes`, and any name
//! that is not a Go built-in is taken to be a local definition (`#T`) or a
//! definition in an imported package (`pkg.#T`).

use crate::ir::TypeStr;

/// Predeclared Go scalar types.
pub const BUILTINS: &[&str] = &[
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
];

pub fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Element types rendered as a CUE `bytes` value when sliced.
pub fn is_byte(name: &str) -> bool {
    matches!(name, "byte" | "uint8")
}

/// Schema syntax for a Go type string.
pub fn cue_type(ty: &str) -> String {
    match TypeStr::parse(ty) {
        TypeStr::Pointer(elem) => cue_type(elem),
        TypeStr::Slice(elem) | TypeStr::Array { elem, .. } => cue_list(elem),
        TypeStr::Map { key, value } => format!("{{[{}]: {}}}", cue_type(key), cue_type(value)),
        TypeStr::Qualified { qualifier, name } => format!("{qualifier}.#{name}"),
        TypeStr::Named("interface{}" | "any" | "error" | "func()") => "_".to_string(),
        TypeStr::Named("struct{}") => "{}".to_string(),
        TypeStr::Named(name) if is_builtin(name) || name.starts_with('#') => name.to_string(),
        TypeStr::Named(name) => format!("#{name}"),
    }
}

/// Schema syntax for a list of `elem`.
pub fn cue_list(elem: &str) -> String {
    if is_byte(elem) {
        return "bytes".to_string();
    }
    format!("[...{}]", cue_type(elem))
}
