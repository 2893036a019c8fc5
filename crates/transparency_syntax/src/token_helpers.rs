//! Ergonomic matching helpers for [`TokenKind`].
//!
//! Keeps parser call sites free of nested `matches!` on ID-carrying variants.

use crate::lexer::tokens::TokenKind;
use transparency_core::lang::keywords::KeywordId;
use transparency_core::lang::operators::OperatorId;
use transparency_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this token is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this token is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this token is the given punctuation.
    pub fn is_punct(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == id)
    }

    /// Return `true` for any literal token kind (including IO flags, which the
    /// grammar treats as literals).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::Symbol
                | TokenKind::Codepoint
                | TokenKind::Regex
                | TokenKind::RawString
                | TokenKind::IoLiteral
                | TokenKind::IoFlag(_)
        ) || self.is_keyword(KeywordId::True)
            || self.is_keyword(KeywordId::False)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_covers_booleans_and_ioflags() {
        use transparency_core::lang::ioflags::IoFlagId;
        assert!(TokenKind::Keyword(KeywordId::True).is_literal());
        assert!(TokenKind::IoFlag(IoFlagId::Stdin).is_literal());
        assert!(!TokenKind::Identifier.is_literal());
        assert!(!TokenKind::Keyword(KeywordId::If).is_literal());
    }
}
