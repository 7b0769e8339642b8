//! The `File` facade: builds the IR once, renders it on demand.

use indexmap::IndexMap;

use crate::ast::{Decl, Module, Spec};
use crate::emit::{self, Canonical, Formatter};
use crate::ir::{Import, Type, translate};
use crate::transform::{self, Outcome, Pipeline, Transform};
use crate::Result;

/// Options for building a `File`.
///
/// Transforms run in the order they are added.
#[derive(Default)]
pub struct FileBuilder {
    package_name: Option<String>,
    cue_package_name: Option<String>,
    pipeline: Pipeline,
    debug: bool,
}

impl FileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Go package name. Defaults to the module's package.
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// CUE package name. Defaults to the Go package name.
    pub fn cue_package_name(mut self, name: impl Into<String>) -> Self {
        self.cue_package_name = Some(name.into());
        self
    }

    pub fn transform(mut self, transform: impl Into<Transform>) -> Self {
        self.pipeline.install(transform.into());
        self
    }

    pub fn transforms(mut self, transforms: impl IntoIterator<Item = Transform>) -> Self {
        for transform in transforms {
            self.pipeline.install(transform);
        }
        self
    }

    /// Skip Go formatting and dump the JSON reflection to stdout.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Read every declaration of `module` and run the transform phases.
    pub fn build(self, module: &Module) -> Result<File> {
        let mut pipeline = self.pipeline;
        let mut imports = IndexMap::new();
        let mut code = Vec::new();

        for decl in &module.decls {
            let Decl::Gen(group) = decl else {
                continue;
            };
            for spec in &group.specs {
                match spec {
                    Spec::Import(spec) => {
                        let import = Import::new(spec.name.clone(), &spec.path);
                        if let Some(import) = pipeline.import(import) {
                            imports.insert(import.key().to_string(), import);
                        }
                    }
                    Spec::Type(spec) => {
                        let docs = spec.docs.as_ref().or(group.docs.as_ref());
                        let Some(ty) = translate(&spec.name, docs, &spec.expr)? else {
                            continue;
                        };
                        code.push(ty);
                        if pipeline.apply(&mut code) == Outcome::Excluded {
                            tracing::debug!(name = %spec.name, "abandoning rest of declaration group");
                            break;
                        }
                    }
                    Spec::Value(spec) => {
                        let docs = spec.docs.as_ref().or(group.docs.as_ref());
                        pipeline.stage_enums(docs, spec);
                    }
                }
            }
        }

        pipeline.splice(&mut code);
        pipeline.promote(&mut code);
        transform::sweep(&code, &mut imports);

        let package_name = self.package_name.unwrap_or_else(|| module.package.clone());
        let cue_package_name = self.cue_package_name.unwrap_or_else(|| package_name.clone());

        Ok(File {
            package_name,
            cue_package_name,
            imports,
            code,
            debug: self.debug,
        })
    }
}

/// A built declaration set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    package_name: String,
    cue_package_name: String,
    imports: IndexMap<String, Import>,
    code: Vec<Type>,
    debug: bool,
}

impl File {
    /// Entries in declaration order.
    pub fn code(&self) -> &[Type] {
        &self.code
    }

    /// Used imports keyed by alias, in declaration order.
    pub fn imports(&self) -> &IndexMap<String, Import> {
        &self.imports
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn cue_package_name(&self) -> &str {
        &self.cue_package_name
    }

    /// First entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.code.iter().find(|ty| ty.name() == name)
    }

    /// Go source, formatted with `Canonical`.
    pub fn go(&self) -> Result<String> {
        self.go_with(&Canonical)
    }

    /// Go source, formatted with `formatter`. Debug builds skip formatting.
    pub fn go_with(&self, formatter: &dyn Formatter) -> Result<String> {
        let src = emit::emit_go(self);
        if self.debug {
            return Ok(src);
        }
        formatter.format(&src)
    }

    /// CUE source.
    pub fn cue(&self) -> String {
        emit::emit_cue(self)
    }

    /// JSON reflection of the IR.
    ///
    /// Debug builds print the document to stdout and return an empty string.
    pub fn reflect(&self) -> Result<String> {
        let doc = emit::emit_json(self)?;
        if self.debug {
            println!("{doc}");
            return Ok(String::new());
        }
        Ok(doc)
    }
}
