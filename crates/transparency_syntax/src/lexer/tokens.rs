//! Token types for the Transparency lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including `@internal`)
//! - `Operator(OperatorId)` / `Punct(PunctuationId)` for symbols
//! - `Builtin(BuiltinId)` / `IoFlag(IoFlagId)` for the closed `@`-word sets
//!
//! ## Notes
//! - Tokens carry no owned text: a token is a kind plus a byte [`Span`], and
//!   text is sliced from the source on demand. This keeps tokens `Copy` and the
//!   incremental splice a plain index shift.
//! - Trivia (whitespace and comments) are real tokens; together with the
//!   significant tokens they tile the source exactly.

use crate::cst::Span;
use transparency_core::lang::builtins::BuiltinId;
use transparency_core::lang::ioflags::IoFlagId;
use transparency_core::lang::keywords::KeywordId;
use transparency_core::lang::operators::OperatorId;
use transparency_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    // ========== Registry-backed vocabulary ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punct(PunctuationId),
    Builtin(BuiltinId),
    IoFlag(IoFlagId),

    // ========== Identifiers and literals ==========
    /// Plain, scoped (`Foo::Bar::baz`), or guillemet-quoted (`«...»`) name.
    Identifier,
    Number,
    String,
    Symbol,
    Codepoint,
    Regex,
    RawString,
    /// `<:...:` dataflow channel marker.
    IoLiteral,

    // ========== Trivia ==========
    Whitespace,
    LineComment,
    BlockComment,

    // ========== Special ==========
    Error,
    Eof,
}

impl TokenKind {
    /// Whitespace and comments: retained for exact reconstruction, excluded
    /// from the significant stream the grammar consumes.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Short lowercase name for dumps and diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Punct(_) => "punct",
            TokenKind::Builtin(_) => "builtin",
            TokenKind::IoFlag(_) => "ioflag",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::Codepoint => "codepoint",
            TokenKind::Regex => "regex",
            TokenKind::RawString => "rawstring",
            TokenKind::IoLiteral => "io",
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment => "comment",
            TokenKind::BlockComment => "comment",
            TokenKind::Error => "error",
            TokenKind::Eof => "eof",
        }
    }
}

/// A token with its kind and source span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
