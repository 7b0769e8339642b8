//! Enum synthesis from value declarations.
//!
//! Go has no enum declaration. Generated code usually pairs a string-like
//! alias with a value table, so a convention decides which value specs name
//! an enum and what its members are. The synthesizer only stages the
//! promotion; the alias is rewritten after every declaration is read.

use crate::ast::{ValueExpr, ValueSpec};
use crate::ir::Docs;

use super::{PromoteToEnumType, Transform};

/// Recognizes enum value tables.
pub trait EnumConvention {
    /// Name of the enum type a value spec describes, if it describes one.
    fn enum_name(&self, docs: Option<&Docs>, spec: &ValueSpec) -> Option<String>;

    /// Member values, in declaration order.
    fn values(&self, spec: &ValueSpec) -> Vec<String>;
}

/// Turns an `EnumConvention` into a `GenEnumTypeTransform`.
#[derive(Debug, Clone, Default)]
pub struct EnumSynthesizer<C> {
    convention: C,
}

impl<C: EnumConvention + 'static> EnumSynthesizer<C> {
    pub fn new(convention: C) -> Self {
        Self { convention }
    }

    pub fn synthesize(&self, docs: Option<&Docs>, spec: &ValueSpec) -> Option<PromoteToEnumType> {
        let name = self.convention.enum_name(docs, spec)?;
        let values = self.convention.values(spec);
        if values.is_empty() {
            return None;
        }
        Some(PromoteToEnumType { name, values })
    }

    pub fn into_transform(self) -> Transform {
        Transform::gen_enum(move |docs, spec| self.synthesize(docs, spec))
    }
}

impl<C: EnumConvention + 'static> From<EnumSynthesizer<C>> for Transform {
    fn from(synthesizer: EnumSynthesizer<C>) -> Self {
        synthesizer.into_transform()
    }
}

const PROTO_DOC_PREFIX: &str = "// Enum value maps for ";
const PROTO_NAME_SUFFIX: &str = "_name";

/// Value tables emitted by `protoc-gen-go`:
///
/// ```go
/// // Enum value maps for Color.
/// var (
///     Color_name = map[int32]string{
///         0: "RED",
///         1: "GREEN",
///     }
/// )
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoEnumConvention;

impl EnumConvention for ProtoEnumConvention {
    fn enum_name(&self, docs: Option<&Docs>, spec: &ValueSpec) -> Option<String> {
        if !spec.name()?.ends_with(PROTO_NAME_SUFFIX) {
            return None;
        }
        docs?.comments().iter().find_map(|comment| {
            let name = comment
                .strip_prefix(PROTO_DOC_PREFIX)?
                .trim()
                .trim_end_matches('.');
            (!name.is_empty()).then(|| name.to_string())
        })
    }

    fn values(&self, spec: &ValueSpec) -> Vec<String> {
        let Some(ValueExpr::Composite { elements, .. }) = spec.values.first() else {
            return Vec::new();
        };
        elements
            .iter()
            .filter_map(|element| match element {
                ValueExpr::KeyValue { value, .. } => match value.as_ref() {
                    ValueExpr::Literal { value } => Some(value.replace('"', "")),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }
}
