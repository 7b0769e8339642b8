//! Intermediate representation of a declaration set.
//!
//! This module provides:
//! - `Type` and its five variants, `Field`, `Import`, `Docs`
//! - `translate`: parsed type expressions → IR entries
//! - `TypeStr`: one-level view into the Go type strings entries reference

mod translate;
mod types;
mod typestr;

#[cfg(test)]
mod types_tests;

pub use translate::{ANY_TYPE, stringify, translate, translate_field, translate_fields};
pub use types::{ArrayType, Docs, EnumType, Field, Import, MapType, PlainType, StructType, Type};
pub use typestr::{TypeStr, qualifiers};
