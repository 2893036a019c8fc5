//! Shareable metadata for `transparency_core::lang` registries.
//!
//! The registries are **registry-first** vocabularies: keywords, operators,
//! builtins, IO flags, productions. This submodule provides the small,
//! dependency-free metadata types reused across all of them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so the
//!   registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax
//!   rules still lives in the lexer and parser.

/// Identify the grammar revision a vocabulary item is available since.
pub type SinceVersion = &'static str;

/// The first published revision of the Transparency grammar.
pub const SINCE_1_0: SinceVersion = "1.0.0";

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - Intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Shared metadata shape for vocabulary items.
///
/// Registries that need extra per-item data (e.g. operator precedence, keyword
/// category) wrap this struct in an extension info type or repeat the fields
/// inline when wrapping would obscure the table.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
    pub since: SinceVersion,
    pub stability: Stability,
}
