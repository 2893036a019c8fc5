//! Punctuation vocabulary.
//!
//! Delimiters and structural punctuation. The angle brackets used by type
//! tuples are *not* here: they are lexed as the relational operators `<`/`>`
//! and reinterpreted by the parser in type position.

use super::registry::{LangItemInfo, SINCE_1_0, Stability};

/// Stable identifier for every punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Hash,
    Arrow,
    LArrow,
    Question,
    QuestionQuestion,
}

/// Metadata for a punctuation token.
pub type PunctuationInfo = LangItemInfo<PunctuationId>;

const fn punct(id: PunctuationId, canonical: &'static str, description: &'static str) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        description,
        since: SINCE_1_0,
        stability: Stability::Stable,
    }
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    punct(PunctuationId::LParen, "(", "opens tuple expressions, predicates, and argument lists"),
    punct(PunctuationId::RParen, ")", "closes tuple expressions, predicates, and argument lists"),
    punct(PunctuationId::LBracket, "[", "opens bracket expressions, indexes, and signature types"),
    punct(PunctuationId::RBracket, "]", "closes bracket expressions, indexes, and signature types"),
    punct(PunctuationId::LBrace, "{", "opens scopes, class bodies, ranks, and initializers"),
    punct(PunctuationId::RBrace, "}", "closes scopes, class bodies, ranks, and initializers"),
    punct(PunctuationId::Comma, ",", "list separator"),
    punct(PunctuationId::Semicolon, ";", "statement and definition terminator"),
    punct(PunctuationId::Colon, ":", "labels, base lists, data methods, ternary arms"),
    punct(PunctuationId::Dot, ".", "member selection"),
    punct(PunctuationId::Hash, "#", "pragma introducer"),
    punct(PunctuationId::Arrow, "->", "method invocation"),
    punct(PunctuationId::LArrow, "<-", "dataflow port construction and closure heads"),
    punct(PunctuationId::Question, "?", "ternary selector"),
    punct(PunctuationId::QuestionQuestion, "??", "choose expression selector"),
];

/// Resolve a spelling to a punctuation id.
pub fn from_str(spelling: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == spelling).map(|p| p.id)
}

/// Full metadata for a punctuation id.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| unreachable!("punctuation {id:?} missing from registry"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_round_trips_every_entry() {
        for p in PUNCTUATION {
            assert_eq!(from_str(p.canonical), Some(p.id));
            assert_eq!(info_for(p.id).canonical, p.canonical);
        }
    }
}
