//! Reserved keyword vocabulary for the Transparency language.
//!
//! This module is the single source of truth for reserved words: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that
//! records canonical spellings, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is case-sensitive.
//! - Transparency reserves its type-constructor words (`vector`, `map`,
//!   `int32`, ...) everywhere; contextual tokenization would make the lexer
//!   depend on parse state, so they are keywords here.
//! - The pragma words (`echo`, `expect`, `meta`, `xml`) are *not* reserved:
//!   they are ordinary identifiers that the parser recognizes after `#`.
//! - `@internal` is the only keyword spelled with a leading `@`; the lexer's
//!   at-word scanner consults this registry before the builtin registry.
//!
//! ## Examples
//! ```rust
//! use transparency_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("circuit"), Some(KeywordId::Circuit));
//! assert_eq!(keywords::as_str(KeywordId::Circuit), "circuit");
//! ```

use super::registry::{SINCE_1_0, SinceVersion, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Definitions / declarations
    Function,
    Entry,
    Circuit,
    Class,
    Node,
    Method,
    Var,
    Ref,
    Constant,
    Type,
    Enum,
    Implements,
    Common,

    // Control flow
    Return,
    For,
    While,
    Do,
    If,
    Else,
    Switch,
    Jump,
    Break,
    Continue,
    Case,
    Default,

    // Dataflow statements and qualifiers
    Fork,
    Spawn,
    Share,
    Unshare,
    Trigger,

    // Type qualifiers and markers
    Shared,
    Const,
    To,
    In,
    Out,

    // Assertions
    Assert,
    AtInternal,

    // Literals
    True,
    False,

    // Simple types
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Codepoint,
    Bool,
    Double,
    Single,
    Int,
    Uint,
    Char,
    String,
    Symbol,
    Regex,
    Match,
    Blob,
    Device,
    Buffer,
    Stream,
    Bitset,
    Idxset,

    // Container constructors (element types)
    Vector,
    Deque,
    Pqueue,
    Wire,
    Set,
    Ordset,
    List,
    Table,
    Idxmap,

    // Key-value constructors
    Ordmap,
    Map,

    // Tensor constructor
    Tensor,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Definition,
    ControlFlow,
    Dataflow,
    Qualifier,
    Marker,
    Assertion,
    Literal,
    SimpleType,
    Container,
    KeyVal,
    TensorType,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: SinceVersion,
    pub stability: Stability,
}

const fn kw(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since: SINCE_1_0,
        stability: Stability::Stable,
    }
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::Function, "function", KeywordCategory::Definition),
    kw(KeywordId::Entry, "entry", KeywordCategory::Definition),
    kw(KeywordId::Circuit, "circuit", KeywordCategory::Definition),
    kw(KeywordId::Class, "class", KeywordCategory::Definition),
    kw(KeywordId::Node, "node", KeywordCategory::Definition),
    kw(KeywordId::Method, "method", KeywordCategory::Definition),
    kw(KeywordId::Var, "var", KeywordCategory::Definition),
    kw(KeywordId::Ref, "ref", KeywordCategory::Definition),
    kw(KeywordId::Constant, "constant", KeywordCategory::Definition),
    kw(KeywordId::Type, "type", KeywordCategory::Definition),
    kw(KeywordId::Enum, "enum", KeywordCategory::Definition),
    kw(KeywordId::Implements, "implements", KeywordCategory::Definition),
    kw(KeywordId::Common, "common", KeywordCategory::Definition),
    kw(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    kw(KeywordId::For, "for", KeywordCategory::ControlFlow),
    kw(KeywordId::While, "while", KeywordCategory::ControlFlow),
    kw(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    kw(KeywordId::If, "if", KeywordCategory::ControlFlow),
    kw(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    kw(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    kw(KeywordId::Jump, "jump", KeywordCategory::ControlFlow),
    kw(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    kw(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    kw(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    kw(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    kw(KeywordId::Fork, "fork", KeywordCategory::Dataflow),
    kw(KeywordId::Spawn, "spawn", KeywordCategory::Dataflow),
    kw(KeywordId::Share, "share", KeywordCategory::Dataflow),
    kw(KeywordId::Unshare, "unshare", KeywordCategory::Dataflow),
    kw(KeywordId::Trigger, "trigger", KeywordCategory::Dataflow),
    kw(KeywordId::Shared, "shared", KeywordCategory::Qualifier),
    kw(KeywordId::Const, "const", KeywordCategory::Qualifier),
    kw(KeywordId::To, "to", KeywordCategory::Marker),
    kw(KeywordId::In, "in", KeywordCategory::Marker),
    kw(KeywordId::Out, "out", KeywordCategory::Marker),
    kw(KeywordId::Assert, "assert", KeywordCategory::Assertion),
    kw(KeywordId::AtInternal, "@internal", KeywordCategory::Assertion),
    kw(KeywordId::True, "true", KeywordCategory::Literal),
    kw(KeywordId::False, "false", KeywordCategory::Literal),
    kw(KeywordId::Int8, "int8", KeywordCategory::SimpleType),
    kw(KeywordId::Int16, "int16", KeywordCategory::SimpleType),
    kw(KeywordId::Int32, "int32", KeywordCategory::SimpleType),
    kw(KeywordId::Int64, "int64", KeywordCategory::SimpleType),
    kw(KeywordId::Uint8, "uint8", KeywordCategory::SimpleType),
    kw(KeywordId::Uint16, "uint16", KeywordCategory::SimpleType),
    kw(KeywordId::Uint32, "uint32", KeywordCategory::SimpleType),
    kw(KeywordId::Uint64, "uint64", KeywordCategory::SimpleType),
    kw(KeywordId::Float32, "float32", KeywordCategory::SimpleType),
    kw(KeywordId::Float64, "float64", KeywordCategory::SimpleType),
    kw(KeywordId::Codepoint, "codepoint", KeywordCategory::SimpleType),
    kw(KeywordId::Bool, "bool", KeywordCategory::SimpleType),
    kw(KeywordId::Double, "double", KeywordCategory::SimpleType),
    kw(KeywordId::Single, "single", KeywordCategory::SimpleType),
    kw(KeywordId::Int, "int", KeywordCategory::SimpleType),
    kw(KeywordId::Uint, "uint", KeywordCategory::SimpleType),
    kw(KeywordId::Char, "char", KeywordCategory::SimpleType),
    kw(KeywordId::String, "string", KeywordCategory::SimpleType),
    kw(KeywordId::Symbol, "symbol", KeywordCategory::SimpleType),
    kw(KeywordId::Regex, "regex", KeywordCategory::SimpleType),
    kw(KeywordId::Match, "match", KeywordCategory::SimpleType),
    kw(KeywordId::Blob, "blob", KeywordCategory::SimpleType),
    kw(KeywordId::Device, "device", KeywordCategory::SimpleType),
    kw(KeywordId::Buffer, "buffer", KeywordCategory::SimpleType),
    kw(KeywordId::Stream, "stream", KeywordCategory::SimpleType),
    kw(KeywordId::Bitset, "bitset", KeywordCategory::SimpleType),
    kw(KeywordId::Idxset, "idxset", KeywordCategory::SimpleType),
    kw(KeywordId::Vector, "vector", KeywordCategory::Container),
    kw(KeywordId::Deque, "deque", KeywordCategory::Container),
    kw(KeywordId::Pqueue, "pqueue", KeywordCategory::Container),
    kw(KeywordId::Wire, "wire", KeywordCategory::Container),
    kw(KeywordId::Set, "set", KeywordCategory::Container),
    kw(KeywordId::Ordset, "ordset", KeywordCategory::Container),
    kw(KeywordId::List, "list", KeywordCategory::Container),
    kw(KeywordId::Table, "table", KeywordCategory::Container),
    kw(KeywordId::Idxmap, "idxmap", KeywordCategory::Container),
    kw(KeywordId::Ordmap, "ordmap", KeywordCategory::KeyVal),
    kw(KeywordId::Map, "map", KeywordCategory::KeyVal),
    kw(KeywordId::Tensor, "tensor", KeywordCategory::TensorType),
];

/// Resolve a spelling to a keyword id, if reserved.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

/// Canonical spelling for a keyword id.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata for a keyword id.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .unwrap_or_else(|| unreachable!("keyword {id:?} missing from registry"))
}

/// Category for a keyword id.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the keyword names a simple (scalar-like) type.
pub fn is_simple_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::SimpleType
}

/// Return `true` if the keyword is a container constructor taking one type tuple.
///
/// `in` and `out` also act as container constructors (typed dataflow ports);
/// they are categorized as markers because they double as trigger directions.
pub fn is_container(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Container || matches!(id, KeywordId::In | KeywordId::Out)
}

/// Return `true` if the keyword is a key-value container constructor.
pub fn is_keyval(id: KeywordId) -> bool {
    category(id) == KeywordCategory::KeyVal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_no_duplicate_spellings() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical, "duplicate spelling {:?}", a.canonical);
                assert_ne!(a.id, b.id, "duplicate id {:?}", a.id);
            }
        }
    }

    #[test]
    fn from_str_round_trips_every_entry() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn pragma_words_are_not_reserved() {
        for w in ["echo", "expect", "meta", "xml"] {
            assert_eq!(from_str(w), None, "{w} must stay a plain identifier");
        }
    }

    #[test]
    fn ports_are_containers() {
        assert!(is_container(KeywordId::In));
        assert!(is_container(KeywordId::Out));
        assert!(!is_keyval(KeywordId::In));
    }
}
