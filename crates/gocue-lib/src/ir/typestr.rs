//! Structural view of Go type strings.
//!
//! IR entries reference other types as strings (`[]*pkg.T`, `map[string]int`).
//! Both the import tracker and the renderers need to look one level into such
//! a string; `TypeStr::parse` splits off the outermost constructor.

/// Outermost constructor of a Go type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeStr<'a> {
    /// `*T`
    Pointer(&'a str),
    /// `[]T`
    Slice(&'a str),
    /// `[N]T`
    Array { len: &'a str, elem: &'a str },
    /// `map[K]V`
    Map { key: &'a str, value: &'a str },
    /// `pkg.T`
    Qualified { qualifier: &'a str, name: &'a str },
    /// Anything else: identifiers and literal shapes like `interface{}`.
    Named(&'a str),
}

impl<'a> TypeStr<'a> {
    pub fn parse(s: &'a str) -> Self {
        if let Some(elem) = s.strip_prefix('*') {
            return TypeStr::Pointer(elem);
        }
        if let Some(elem) = s.strip_prefix("[]") {
            return TypeStr::Slice(elem);
        }
        if let Some(rest) = s.strip_prefix('[') {
            if let Some(close) = rest.find(']') {
                return TypeStr::Array {
                    len: &rest[..close],
                    elem: &rest[close + 1..],
                };
            }
        }
        if let Some(rest) = s.strip_prefix("map[") {
            if let Some(close) = matching_bracket(rest) {
                return TypeStr::Map {
                    key: &rest[..close],
                    value: &rest[close + 1..],
                };
            }
        }
        // Literal shapes can contain dots only inside braces or parens.
        if !s.contains(['{', '(']) {
            if let Some((qualifier, name)) = s.split_once('.') {
                return TypeStr::Qualified { qualifier, name };
            }
        }
        TypeStr::Named(s)
    }
}

/// Package qualifiers referenced anywhere inside a type string.
pub fn qualifiers(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    collect_qualifiers(s, &mut out);
    out
}

fn collect_qualifiers<'a>(s: &'a str, out: &mut Vec<&'a str>) {
    match TypeStr::parse(s) {
        TypeStr::Pointer(elem) | TypeStr::Slice(elem) | TypeStr::Array { elem, .. } => {
            collect_qualifiers(elem, out)
        }
        TypeStr::Map { key, value } => {
            collect_qualifiers(key, out);
            collect_qualifiers(value, out);
        }
        TypeStr::Qualified { qualifier, .. } => out.push(qualifier),
        TypeStr::Named(_) => {}
    }
}

/// Index of the `]` closing a bracket already opened before `s`.
fn matching_bracket(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}
