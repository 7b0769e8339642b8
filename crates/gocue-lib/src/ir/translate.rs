//! Type expression → IR translation.

use crate::ast::{Expr, FieldExpr};
use crate::tags::Tags;
use crate::{Error, Result};

use super::types::{ArrayType, Docs, Field, MapType, PlainType, StructType, Type};

/// Literal used for `interface{...}` and `any`.
pub const ANY_TYPE: &str = "interface{}";

/// Translate one type expression into an IR entry.
///
/// Function types have no data shape and yield `Ok(None)`.
pub fn translate(name: &str, docs: Option<&Docs>, expr: &Expr) -> Result<Option<Type>> {
    let plain = |ty: String| {
        Type::Plain(PlainType {
            name: name.to_string(),
            docs: docs.cloned(),
            ty,
        })
    };

    let ty = match expr {
        Expr::Ident { name: ident } => plain(ident.clone()),
        Expr::Selector { .. } | Expr::Pointer { .. } => plain(stringify(name, expr)?),
        Expr::Interface { .. } => plain(ANY_TYPE.to_string()),
        Expr::Array { len, elem } => Type::Array(ArrayType {
            name: name.to_string(),
            docs: docs.cloned(),
            elem: stringify(name, elem)?,
            len: *len,
        }),
        Expr::Map { key, value } => Type::Map(MapType {
            name: name.to_string(),
            docs: docs.cloned(),
            key: stringify(name, key)?,
            value: stringify(name, value)?,
        }),
        Expr::Struct { fields } => Type::Struct(StructType {
            name: name.to_string(),
            docs: docs.cloned(),
            fields: translate_fields(fields)?,
        }),
        Expr::Func => {
            tracing::debug!(name, "skipping function type");
            return Ok(None);
        }
        Expr::Chan { .. } | Expr::Ellipsis { .. } | Expr::Generic { .. } => {
            return Err(unsupported(name, expr));
        }
    };

    Ok(Some(ty))
}

/// Translate struct fields, dropping those without a data shape.
pub fn translate_fields(fields: &[FieldExpr]) -> Result<Vec<Field>> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        out.extend(translate_field(field)?);
    }
    Ok(out)
}

/// Translate one field declaration.
///
/// `A, B int` declares two fields sharing type and tag. An embedded field is
/// named after its type, without package qualifier or pointer.
pub fn translate_field(field: &FieldExpr) -> Result<Vec<Field>> {
    let tags = match &field.tag {
        Some(raw) => Tags::parse(raw)?,
        None => Tags::new(),
    };

    let names = if field.names.is_empty() {
        vec![embedded_name(&stringify("", &field.expr)?)]
    } else {
        field.names.clone()
    };

    let mut out = Vec::with_capacity(names.len());
    for name in &names {
        if let Some(ty) = translate(name, field.docs.as_ref(), &field.expr)? {
            out.push(Field {
                ty,
                tags: tags.clone(),
            });
        }
    }
    Ok(out)
}

/// Render a nested type expression as a Go type string.
pub fn stringify(name: &str, expr: &Expr) -> Result<String> {
    Ok(match expr {
        Expr::Ident { name } => name.clone(),
        Expr::Selector { qualifier, name } => format!("{qualifier}.{name}"),
        Expr::Pointer { elem } => format!("*{}", stringify(name, elem)?),
        Expr::Array { len: None, elem } => format!("[]{}", stringify(name, elem)?),
        Expr::Array { len: Some(n), elem } => format!("[{n}]{}", stringify(name, elem)?),
        Expr::Map { key, value } => {
            format!("map[{}]{}", stringify(name, key)?, stringify(name, value)?)
        }
        Expr::Interface { .. } => ANY_TYPE.to_string(),
        Expr::Struct { .. } => "struct{}".to_string(),
        Expr::Func => "func()".to_string(),
        Expr::Chan { .. } | Expr::Ellipsis { .. } | Expr::Generic { .. } => {
            return Err(unsupported(name, expr));
        }
    })
}

fn embedded_name(ty: &str) -> String {
    let base = ty.trim_start_matches('*');
    base.rsplit('.').next().unwrap_or(base).to_string()
}

fn unsupported(name: &str, expr: &Expr) -> Error {
    tracing::warn!(name, node = expr.kind(), "unhandled type expression");
    Error::UnsupportedExpr {
        name: name.to_string(),
        node: expr.kind().to_string(),
    }
}
