//! IR node definitions.
//!
//! # Overview
//!
//! A `File` holds a flat, ordered list of `Type` entries. Each entry is one of
//! five closed variants; type references inside an entry are kept as Go type
//! strings (`int`, `*bytes.Buffer`, `[]string`), which both renderers
//! normalize through the shared table in `emit::names`.
//!
//! `Enum` never comes out of the translator. It only appears once a `Plain`
//! entry is promoted in the enum phase of the pipeline.
//!
//! A struct's fields are themselves `Type`s (wrapped in `Field` with tags), so
//! anonymous nested structs compose naturally.

use serde::{Deserialize, Serialize};

use crate::tags::Tags;

/// Documentation attached to a declaration or field.
///
/// Holds the raw comment texts in source order, each either a `// line`
/// comment or a `/* block */` comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Docs(Vec<String>);

impl Docs {
    pub fn new<I, S>(comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            comments
                .into_iter()
                .map(|c| c.into().trim().to_string())
                .collect(),
        )
    }

    /// Single `// text` comment.
    pub fn line(text: &str) -> Self {
        Self(vec![format!("// {}", text.trim())])
    }

    pub fn comments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comment texts joined by newlines, without a trailing newline.
    pub fn text(&self) -> String {
        self.0.join("\n")
    }
}

/// Import of a Go package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Explicit alias (`m "example.com/mock"`).
    pub name: Option<String>,
    pub path: String,
    pub(crate) used: bool,
    pub(crate) original_path: String,
}

impl Import {
    pub fn new(name: Option<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name,
            original_path: path.clone(),
            path,
            used: false,
        }
    }

    /// Key under which the import is known: alias, else last path segment.
    pub fn key(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }

    /// Path as written in the source, before any rewrite.
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// Alias of a scalar, qualified, pointer or `interface{}` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainType {
    pub name: String,
    pub docs: Option<Docs>,
    pub ty: String,
}

/// Slice (`len` absent) or fixed-length array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub name: String,
    pub docs: Option<Docs>,
    pub elem: String,
    pub len: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub name: String,
    pub docs: Option<Docs>,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub name: String,
    pub docs: Option<Docs>,
    pub fields: Vec<Field>,
}

impl StructType {
    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

/// String-backed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub docs: Option<Docs>,
    pub values: Vec<String>,
}

/// One IR entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Plain(PlainType),
    Array(ArrayType),
    Map(MapType),
    Struct(StructType),
    Enum(EnumType),
}

impl Type {
    pub fn plain(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Type::Plain(PlainType {
            name: name.into(),
            docs: None,
            ty: ty.into(),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Type::Plain(t) => &t.name,
            Type::Array(t) => &t.name,
            Type::Map(t) => &t.name,
            Type::Struct(t) => &t.name,
            Type::Enum(t) => &t.name,
        }
    }

    pub fn docs(&self) -> Option<&Docs> {
        match self {
            Type::Plain(t) => t.docs.as_ref(),
            Type::Array(t) => t.docs.as_ref(),
            Type::Map(t) => t.docs.as_ref(),
            Type::Struct(t) => t.docs.as_ref(),
            Type::Enum(t) => t.docs.as_ref(),
        }
    }

    pub fn set_docs(&mut self, docs: Option<Docs>) {
        match self {
            Type::Plain(t) => t.docs = docs,
            Type::Array(t) => t.docs = docs,
            Type::Map(t) => t.docs = docs,
            Type::Struct(t) => t.docs = docs,
            Type::Enum(t) => t.docs = docs,
        }
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.set_docs(Some(docs));
        self
    }

    /// Short variant name, as used by the JSON reflection.
    pub fn kind(&self) -> &'static str {
        match self {
            Type::Plain(_) => "plain",
            Type::Array(_) => "array",
            Type::Map(_) => "map",
            Type::Struct(_) => "struct",
            Type::Enum(_) => "enum",
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Type::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Type strings referenced by this entry, including nested struct fields.
    pub fn referenced_types(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_referenced_types(&mut out);
        out
    }

    fn collect_referenced_types<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Type::Plain(t) => out.push(&t.ty),
            Type::Array(t) => out.push(&t.elem),
            Type::Map(t) => {
                out.push(&t.key);
                out.push(&t.value);
            }
            Type::Struct(t) => {
                for field in &t.fields {
                    field.ty.collect_referenced_types(out);
                }
            }
            Type::Enum(_) => {}
        }
    }
}

/// Struct member: a named type plus its tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ty: Type,
    pub tags: Tags,
}

impl Field {
    pub fn new(ty: Type) -> Self {
        Self {
            ty,
            tags: Tags::new(),
        }
    }

    pub fn with_tags(mut self, tags: Tags) -> Self {
        self.tags = tags;
        self
    }

    pub fn name(&self) -> &str {
        self.ty.name()
    }

    pub fn docs(&self) -> Option<&Docs> {
        self.ty.docs()
    }
}
