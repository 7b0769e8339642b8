//! Installable rewrites applied while a `File` is built.
//!
//! A `Transform` is one of ten closed variants. Installation routes each
//! variant into a phase of the `Pipeline`:
//! - import transforms run once per import spec
//! - type, field, splice and field-generator transforms run against every
//!   freshly translated declaration (phase A)
//! - splices are replayed after all declarations are read (phase B)
//! - enum generators run per value spec and stage promotions (phase C)
//!
//! Import pruning (phase D) lives in `imports`.

mod enums;
pub(crate) mod imports;
mod pipeline;

#[cfg(test)]
mod pipeline_tests;

use std::fmt;

use indexmap::IndexSet;

use crate::ast::ValueSpec;
use crate::ir::{Docs, EnumType, Field, Import, PlainType, StructType, Type};

pub use enums::{EnumConvention, EnumSynthesizer, ProtoEnumConvention};
pub use imports::sweep;
pub(crate) use pipeline::{Outcome, Pipeline};

pub type ImportPredicate = Box<dyn Fn(&Import) -> bool>;
pub type ImportRewrite = Box<dyn Fn(Import) -> Import>;
pub type TargetPredicate = Box<dyn Fn(Target<'_>) -> bool>;
pub type TypeRewrite = Box<dyn Fn(Type) -> Type>;
pub type FieldPredicate = Box<dyn Fn(&Field) -> bool>;
pub type FieldRewrite = Box<dyn Fn(Field) -> Field>;
pub type FieldGenerator = Box<dyn Fn(&StructType, &Field) -> Option<Transform>>;
pub type EnumGenerator = Box<dyn Fn(Option<&Docs>, &ValueSpec) -> Option<PromoteToEnumType>>;

/// What an `ExcludeType` predicate is looking at.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// A top-level declaration.
    Decl(&'a Type),
    /// A field of a struct declaration.
    Field(&'a Field),
}

impl<'a> Target<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Target::Decl(ty) => ty.name(),
            Target::Field(field) => field.name(),
        }
    }

    pub fn ty(&self) -> &'a Type {
        match self {
            Target::Decl(ty) => ty,
            Target::Field(field) => &field.ty,
        }
    }
}

/// A rewrite installed on a `FileBuilder`.
pub enum Transform {
    ExcludeImport(ImportPredicate),
    ModifyImport(ImportRewrite),
    ExcludeType(TargetPredicate),
    ModifyType(TypeRewrite),
    ExcludeField(FieldPredicate),
    ModifyField(FieldRewrite),
    CopyIntoStruct(CopyIntoStruct),
    GenFieldTransform(FieldGenerator),
    GenEnumTypeTransform(EnumGenerator),
    PromoteToEnumType(PromoteToEnumType),
}

impl Transform {
    pub fn exclude_import(pred: impl Fn(&Import) -> bool + 'static) -> Self {
        Transform::ExcludeImport(Box::new(pred))
    }

    pub fn modify_import(rewrite: impl Fn(Import) -> Import + 'static) -> Self {
        Transform::ModifyImport(Box::new(rewrite))
    }

    pub fn exclude_type(pred: impl Fn(Target<'_>) -> bool + 'static) -> Self {
        Transform::ExcludeType(Box::new(pred))
    }

    /// Exclude every top-level declaration and struct field with this name.
    pub fn exclude_type_named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::exclude_type(move |target| target.name() == name)
    }

    pub fn modify_type(rewrite: impl Fn(Type) -> Type + 'static) -> Self {
        Transform::ModifyType(Box::new(rewrite))
    }

    pub fn exclude_field(pred: impl Fn(&Field) -> bool + 'static) -> Self {
        Transform::ExcludeField(Box::new(pred))
    }

    pub fn modify_field(rewrite: impl Fn(Field) -> Field + 'static) -> Self {
        Transform::ModifyField(Box::new(rewrite))
    }

    pub fn copy_into_struct<I, S>(
        struct_name: impl Into<String>,
        field_to_replace: impl Into<String>,
        from_structs: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transform::CopyIntoStruct(CopyIntoStruct::new(
            struct_name,
            field_to_replace,
            from_structs,
        ))
    }

    pub fn gen_field(
        generator: impl Fn(&StructType, &Field) -> Option<Transform> + 'static,
    ) -> Self {
        Transform::GenFieldTransform(Box::new(generator))
    }

    pub fn gen_enum(
        generator: impl Fn(Option<&Docs>, &ValueSpec) -> Option<PromoteToEnumType> + 'static,
    ) -> Self {
        Transform::GenEnumTypeTransform(Box::new(generator))
    }

    pub fn promote_to_enum<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Transform::PromoteToEnumType(PromoteToEnumType::new(name, values))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Transform::ExcludeImport(_) => "ExcludeImport",
            Transform::ModifyImport(_) => "ModifyImport",
            Transform::ExcludeType(_) => "ExcludeType",
            Transform::ModifyType(_) => "ModifyType",
            Transform::ExcludeField(_) => "ExcludeField",
            Transform::ModifyField(_) => "ModifyField",
            Transform::CopyIntoStruct(_) => "CopyIntoStruct",
            Transform::GenFieldTransform(_) => "GenFieldTransform",
            Transform::GenEnumTypeTransform(_) => "GenEnumTypeTransform",
            Transform::PromoteToEnumType(_) => "PromoteToEnumType",
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::CopyIntoStruct(c) => f.debug_tuple("CopyIntoStruct").field(c).finish(),
            Transform::PromoteToEnumType(p) => {
                f.debug_tuple("PromoteToEnumType").field(p).finish()
            }
            other => f.write_str(other.kind()),
        }
    }
}

/// Splice the fields of `from_structs` over one field of `struct_name`.
///
/// Source structs are harvested (and dropped from the output) as they are
/// read; the splice itself happens once every declaration has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyIntoStruct {
    pub struct_name: String,
    pub field_to_replace: String,
    pub from_structs: IndexSet<String>,
    pub(crate) harvested: Vec<Field>,
}

impl CopyIntoStruct {
    pub fn new<I, S>(
        struct_name: impl Into<String>,
        field_to_replace: impl Into<String>,
        from_structs: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            struct_name: struct_name.into(),
            field_to_replace: field_to_replace.into(),
            from_structs: from_structs.into_iter().map(Into::into).collect(),
            harvested: Vec::new(),
        }
    }

    /// Fields collected so far, in harvest order.
    pub fn harvested(&self) -> &[Field] {
        &self.harvested
    }
}

/// Staged promotion of a plain declaration into a string enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteToEnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl PromoteToEnumType {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Enum carrying the plain type's name and docs, or `None` on name mismatch.
    pub fn apply(&self, plain: &PlainType) -> Option<EnumType> {
        (plain.name == self.name).then(|| EnumType {
            name: plain.name.clone(),
            docs: plain.docs.clone(),
            values: self.values.clone(),
        })
    }
}
