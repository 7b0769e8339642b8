//! JSON reflection of the IR, for inspection and debugging.

use serde::Serialize;

use crate::file::File;
use crate::ir::{Docs, Field, Import, Type};
use crate::tags::Tags;
use crate::{Error, Result};

#[derive(Serialize)]
struct Document<'a> {
    package: &'a str,
    imports: Vec<ImportNode<'a>>,
    code: Vec<Node<'a>>,
}

#[derive(Serialize)]
struct ImportNode<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_path: Option<&'a str>,
}

impl<'a> From<&'a Import> for ImportNode<'a> {
    fn from(import: &'a Import) -> Self {
        let original = import.original_path();
        Self {
            name: import.name.as_deref(),
            path: &import.path,
            original_path: (original != import.path).then_some(original),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Node<'a> {
    Plain {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        docs: Option<&'a Docs>,
        #[serde(rename = "type")]
        ty: &'a str,
    },
    Array {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        docs: Option<&'a Docs>,
        #[serde(rename = "type")]
        elem: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        length: Option<u64>,
    },
    Map {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        docs: Option<&'a Docs>,
        key_type: &'a str,
        value_type: &'a str,
    },
    Struct {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        docs: Option<&'a Docs>,
        fields: Vec<FieldNode<'a>>,
    },
    Enum {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        docs: Option<&'a Docs>,
        values: &'a [String],
    },
}

#[derive(Serialize)]
struct FieldNode<'a> {
    #[serde(flatten)]
    node: Node<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a Tags>,
}

impl<'a> From<&'a Type> for Node<'a> {
    fn from(ty: &'a Type) -> Self {
        match ty {
            Type::Plain(t) => Node::Plain {
                name: &t.name,
                docs: t.docs.as_ref(),
                ty: &t.ty,
            },
            Type::Array(t) => Node::Array {
                name: &t.name,
                docs: t.docs.as_ref(),
                elem: &t.elem,
                length: t.len,
            },
            Type::Map(t) => Node::Map {
                name: &t.name,
                docs: t.docs.as_ref(),
                key_type: &t.key,
                value_type: &t.value,
            },
            Type::Struct(t) => Node::Struct {
                name: &t.name,
                docs: t.docs.as_ref(),
                fields: t.fields.iter().map(FieldNode::from).collect(),
            },
            Type::Enum(t) => Node::Enum {
                name: &t.name,
                docs: t.docs.as_ref(),
                values: &t.values,
            },
        }
    }
}

impl<'a> From<&'a Field> for FieldNode<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            node: Node::from(&field.ty),
            tags: (!field.tags.is_empty()).then_some(&field.tags),
        }
    }
}

/// Pretty-printed JSON document describing the file.
pub fn emit_json(file: &File) -> Result<String> {
    let doc = Document {
        package: file.package_name(),
        imports: file.imports().values().map(ImportNode::from).collect(),
        code: file.code().iter().map(Node::from).collect(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| Error::Serialize(e.to_string()))
}
