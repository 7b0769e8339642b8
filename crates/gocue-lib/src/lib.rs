//! gocue: project Go type declarations into Go and CUE definitions.
//!
//! The pipeline:
//! - `ast` - the parsed declarations handed over by a front end
//! - `tags` - struct tag micro-syntax
//! - `ir` - intermediate representation and the expression translator
//! - `transform` - installable rewrites, enum synthesis, import tracking
//! - `file` - the `File` facade that runs every phase
//! - `emit` - Go, CUE and JSON renderers
//!
//! # Example
//!
//! ```
//! use gocue_lib::ast::{Decl, Expr, GenDecl, Module, Spec, TypeSpec};
//! use gocue_lib::FileBuilder;
//!
//! let module = Module::new("demo").with_decl(Decl::Gen(GenDecl::new(vec![
//!     Spec::Type(TypeSpec::new("Ids", Expr::slice(Expr::ident("string")))),
//! ])));
//!
//! let file = FileBuilder::new().build(&module).expect("valid module");
//! assert_eq!(file.cue(), "package demo\n\n#Ids: [...string]\n");
//! ```

pub mod ast;
pub mod emit;
pub mod file;
pub mod ir;
pub mod tags;
pub mod transform;

#[cfg(test)]
mod test_utils;

pub use file::{File, FileBuilder};
pub use ir::{Docs, Field, Import, Type};
pub use tags::Tags;
pub use transform::Transform;

/// Errors that can occur while building or rendering a file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A type expression the translator has no projection for.
    #[error("unsupported type expression {node} in {name:?}")]
    UnsupportedExpr { name: String, node: String },

    /// A struct tag that does not follow `key:"value"` syntax.
    #[error("malformed struct tag {tag}: {message}")]
    MalformedTag { tag: String, message: String },

    /// The injected formatter rejected the rendered source.
    #[error("formatting failed: {0}")]
    Format(String),

    /// The JSON reflection could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Result type for gocue operations.
pub type Result<T> = std::result::Result<T, Error>;
