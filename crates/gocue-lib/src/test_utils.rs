//! Fixture builders shared by the unit tests.

use crate::ast::{Decl, Expr, FieldExpr, GenDecl, ImportSpec, Module, Spec, TypeSpec, ValueExpr, ValueSpec};
use crate::ir::Docs;

/// Tabs as four spaces, so snapshots stay readable.
pub fn untab(s: &str) -> String {
    s.replace('\t', "    ")
}

pub fn module(decls: impl IntoIterator<Item = Decl>) -> Module {
    let mut module = Module::new("demo");
    module.decls.extend(decls);
    module
}

/// One parenthesized declaration group.
pub fn group(specs: impl IntoIterator<Item = Spec>) -> Decl {
    Decl::Gen(GenDecl::new(specs.into_iter().collect()))
}

pub fn import(path: &str) -> Spec {
    Spec::Import(ImportSpec::new(path))
}

pub fn alias(name: &str, path: &str) -> Spec {
    Spec::Import(ImportSpec::named(name, path))
}

pub fn ty(name: &str, expr: Expr) -> Spec {
    Spec::Type(TypeSpec::new(name, expr))
}

/// A declaration on its own: `type name expr`.
pub fn decl(name: &str, expr: Expr) -> Decl {
    group([ty(name, expr)])
}

pub fn field(name: &str, expr: Expr, tag: &str) -> FieldExpr {
    let field = FieldExpr::new(name, expr);
    if tag.is_empty() {
        field
    } else {
        field.with_tag(tag)
    }
}

pub fn structure(fields: impl IntoIterator<Item = FieldExpr>) -> Expr {
    Expr::structure(fields.into_iter().collect())
}

/// `struct { X int `json:"x"`; Y int `json:"y,omitempty"` }`
pub fn point() -> Expr {
    structure([
        field("X", Expr::ident("int"), r#"json:"x""#),
        field("Y", Expr::ident("int"), r#"json:"y,omitempty""#),
    ])
}

/// A protoc-gen-go name table for `name` with its docs.
pub fn proto_enum_table(name: &str, values: &[&str]) -> Decl {
    let elements = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            ValueExpr::key_value(
                ValueExpr::literal(i.to_string()),
                ValueExpr::literal(format!("\"{v}\"")),
            )
        })
        .collect();
    let spec = ValueSpec::new(
        format!("{name}_name"),
        vec![ValueExpr::Composite {
            ty: Some(Expr::map(Expr::ident("int32"), Expr::ident("string"))),
            elements,
        }],
    );
    Decl::Gen(
        GenDecl::new(vec![Spec::Value(spec)])
            .with_docs(Docs::new([format!("// Enum value maps for {name}.")])),
    )
}
