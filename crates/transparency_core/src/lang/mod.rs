//! Registry-first vocabularies for the Transparency language.
//!
//! Each submodule defines one vocabulary as a stable ID enum plus a `const`
//! metadata table. The grammar production table (`productions`) ties them
//! together and carries the grammar version.

pub mod builtins;
pub mod ioflags;
pub mod keywords;
pub mod operators;
pub mod productions;
pub mod punctuation;
pub mod registry;
