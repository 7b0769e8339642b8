//! Renderers for a built `File`.
//!
//! - `go` - declaration syntax, passed through a `Formatter`
//! - `cue` - schema syntax
//! - `reflect` - JSON dump of the IR
//!
//! Both syntaxes share the normalization table in `names`.

pub mod cue;
pub mod format;
pub mod go;
pub mod names;
pub mod reflect;

#[cfg(test)]
mod cue_tests;
#[cfg(test)]
mod names_tests;

pub use cue::emit_cue;
pub use format::{Canonical, Formatter, Verbatim};
pub use go::emit_go;
pub use reflect::emit_json;
