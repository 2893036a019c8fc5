//! Syntax frontend for the Transparency language: lexer, parser, CST, diagnostics,
//! incremental reparse.
//!
//! This crate is dependency-light and intended for reuse across compilers, formatters,
//! LSP servers, and future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not do name resolution, type
//!   checking, or dataflow lowering.
//! - Vocabulary identity (keywords/operators/builtins/productions) comes from the
//!   `transparency_core::lang` registries.
//! - Parsing never fails: every entrypoint returns a [`cst::Tree`] whose diagnostics
//!   list records lexical and syntactic problems.
//!
//! ## Examples
//! ```rust
//! use transparency_syntax::parser;
//!
//! let tree = parser::parse("constant x = 1;");
//! assert!(tree.diagnostics().is_empty());
//! assert_eq!(tree.text(tree.node(tree.root()).span), "constant x = 1;");
//! ```
//!
//! ## See also
//! - `transparency_core::lang` for registry-backed language vocabulary.

pub mod cst;
pub mod diagnostics;
pub mod incremental;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
