//! Phase lists and their evaluation.

use std::rc::Rc;

use crate::ast::ValueSpec;
use crate::ir::{Docs, Import, Type};

use super::{
    CopyIntoStruct, EnumGenerator, FieldGenerator, FieldPredicate, FieldRewrite, ImportPredicate,
    ImportRewrite, PromoteToEnumType, Target, TargetPredicate, Transform, TypeRewrite,
};

/// Whether the last `code` entry survived a phase A transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Keep,
    Excluded,
}

/// Phase A transform, evaluated against the newest declaration.
pub(crate) enum Stage {
    ExcludeType(TargetPredicate),
    ModifyType(TypeRewrite),
    ExcludeField(FieldPredicate),
    ModifyField(FieldRewrite),
    /// Index into `Pipeline::splices`.
    Harvest(usize),
    GenField(FieldGenerator),
}

#[derive(Default)]
pub(crate) struct Pipeline {
    exclude_imports: Vec<ImportPredicate>,
    modify_imports: Vec<ImportRewrite>,
    stages: Vec<Rc<Stage>>,
    splices: Vec<CopyIntoStruct>,
    enum_generators: Vec<EnumGenerator>,
    promotions: Vec<PromoteToEnumType>,
}

impl Pipeline {
    /// Route a transform into its phase list.
    ///
    /// Returns the phase A stage it became, if any, so generated transforms
    /// can be evaluated on the spot.
    pub(crate) fn install(&mut self, transform: Transform) -> Option<Rc<Stage>> {
        let stage = match transform {
            Transform::ExcludeImport(pred) => {
                self.exclude_imports.push(pred);
                return None;
            }
            Transform::ModifyImport(rewrite) => {
                self.modify_imports.push(rewrite);
                return None;
            }
            Transform::GenEnumTypeTransform(generator) => {
                self.enum_generators.push(generator);
                return None;
            }
            Transform::PromoteToEnumType(promotion) => {
                self.promotions.push(promotion);
                return None;
            }
            Transform::ExcludeType(pred) => Stage::ExcludeType(pred),
            Transform::ModifyType(rewrite) => Stage::ModifyType(rewrite),
            Transform::ExcludeField(pred) => Stage::ExcludeField(pred),
            Transform::ModifyField(rewrite) => Stage::ModifyField(rewrite),
            Transform::GenFieldTransform(generator) => Stage::GenField(generator),
            Transform::CopyIntoStruct(splice) => {
                self.splices.push(splice);
                Stage::Harvest(self.splices.len() - 1)
            }
        };
        let stage = Rc::new(stage);
        self.stages.push(Rc::clone(&stage));
        Some(stage)
    }

    /// Phase A for one import spec. `None` when excluded.
    pub(crate) fn import(&self, import: Import) -> Option<Import> {
        if self.exclude_imports.iter().any(|pred| pred(&import)) {
            tracing::debug!(path = %import.path, "import excluded");
            return None;
        }
        let original_path = import.path.clone();
        let mut import = import;
        for rewrite in &self.modify_imports {
            import = rewrite(import);
        }
        import.original_path = original_path;
        Some(import)
    }

    /// Phase A for the entry just appended to `code`.
    ///
    /// Only stages installed before the call run; stages generated while it
    /// runs take effect from the next declaration on.
    pub(crate) fn apply(&mut self, code: &mut Vec<Type>) -> Outcome {
        let installed = self.stages.len();
        for i in 0..installed {
            let stage = Rc::clone(&self.stages[i]);
            if self.eval(&stage, code) == Outcome::Excluded {
                return Outcome::Excluded;
            }
        }
        Outcome::Keep
    }

    fn eval(&mut self, stage: &Stage, code: &mut Vec<Type>) -> Outcome {
        let Some(last) = code.last_mut() else {
            return Outcome::Keep;
        };

        match stage {
            Stage::ExcludeType(pred) => {
                if pred(Target::Decl(last)) {
                    tracing::debug!(name = last.name(), "type excluded");
                    code.pop();
                    return Outcome::Excluded;
                }
                if let Type::Struct(st) = last {
                    st.fields.retain(|field| !pred(Target::Field(field)));
                }
            }
            Stage::ExcludeField(pred) => {
                if let Type::Struct(st) = last {
                    st.fields.retain(|field| !pred(field));
                }
            }
            Stage::ModifyType(rewrite) => match last {
                Type::Struct(st) => {
                    for field in &mut st.fields {
                        let ty = std::mem::replace(&mut field.ty, Type::plain("", ""));
                        field.ty = rewrite(ty);
                    }
                }
                other => {
                    let ty = std::mem::replace(other, Type::plain("", ""));
                    *other = rewrite(ty);
                }
            },
            Stage::ModifyField(rewrite) => {
                if let Type::Struct(st) = last {
                    let fields = std::mem::take(&mut st.fields);
                    st.fields = fields.into_iter().map(rewrite.as_ref()).collect();
                }
            }
            Stage::Harvest(index) => {
                let splice = &mut self.splices[*index];
                let is_source = matches!(last, Type::Struct(st) if splice.from_structs.contains(&st.name));
                if is_source {
                    if let Some(Type::Struct(st)) = code.pop() {
                        tracing::debug!(
                            from = %st.name,
                            into = %splice.struct_name,
                            fields = st.fields.len(),
                            "harvested struct"
                        );
                        splice.harvested.extend(st.fields);
                    }
                    return Outcome::Excluded;
                }
            }
            Stage::GenField(generator) => {
                let Type::Struct(st) = last else {
                    return Outcome::Keep;
                };
                let snapshot = st.clone();
                for field in &snapshot.fields {
                    let Some(generated) = generator(&snapshot, field) else {
                        continue;
                    };
                    tracing::debug!(
                        name = %snapshot.name,
                        field = field.name(),
                        kind = generated.kind(),
                        "generated transform"
                    );
                    if let Some(stage) = self.install(generated) {
                        if self.eval(&stage, code) == Outcome::Excluded {
                            return Outcome::Excluded;
                        }
                    }
                }
            }
        }

        Outcome::Keep
    }

    /// Phase A for one value spec: stage whatever the enum generators yield.
    pub(crate) fn stage_enums(&mut self, docs: Option<&Docs>, spec: &ValueSpec) {
        for generator in &self.enum_generators {
            if let Some(promotion) = generator(docs, spec) {
                tracing::debug!(name = %promotion.name, values = promotion.values.len(), "staged enum");
                self.promotions.push(promotion);
            }
        }
    }

    /// Phase B: replace each splice target field with its harvest.
    ///
    /// A target struct that never appeared stops all remaining splices.
    pub(crate) fn splice(&self, code: &mut [Type]) {
        for splice in &self.splices {
            let Some(target) = code.iter_mut().find(|ty| ty.name() == splice.struct_name) else {
                tracing::debug!(
                    struct_name = %splice.struct_name,
                    "splice target not found, skipping remaining splices"
                );
                break;
            };
            let Type::Struct(st) = target else {
                continue;
            };
            let Some(pos) = st
                .fields
                .iter()
                .position(|field| field.name() == splice.field_to_replace)
            else {
                continue;
            };
            st.fields.splice(pos..=pos, splice.harvested.iter().cloned());
        }
    }

    /// Phase C: promote plain entries with a staged enum of the same name.
    pub(crate) fn promote(&self, code: &mut [Type]) {
        for entry in code.iter_mut() {
            let promoted = match entry {
                Type::Plain(plain) => self.promotions.iter().find_map(|p| p.apply(plain)),
                _ => None,
            };
            if let Some(promoted) = promoted {
                *entry = Type::Enum(promoted);
            }
        }
    }
}
