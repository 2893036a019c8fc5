//! Shared language vocabulary for the Transparency macro-dataflow language.
//!
//! This crate is the single source of truth for the language's surface
//! vocabulary: keywords, operators (with precedence and associativity),
//! punctuation, `@`-builtins, `@`-IO-flags, and the grammar production table.
//! Everything lives in `const` registries with stable IDs so that the lexer,
//! parser, and downstream tools (highlighting, folding, structural search) are
//! generated from one table instead of hand-duplicating the rules.
//!
//! ## Notes
//! - This crate is dependency-free and side-effect-free by design.
//! - The registries are built once at compile time and shared by reference;
//!   there is no global mutable state anywhere in the syntax core.
//!
//! ## See also
//! - `transparency_syntax` for the lexer/parser/CST that consume these tables.

pub mod lang;
