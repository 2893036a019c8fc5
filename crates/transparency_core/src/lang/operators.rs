//! Operator vocabulary.
//!
//! Defines the canonical operator set with precedence, associativity, and
//! fixity. This table is the one place operator binding strength is recorded;
//! the parser's precedence climbing reads it rather than hard-coding levels.
//!
//! ## Notes
//! - The source material of the language contains several successive,
//!   mutually inconsistent drafts of the operator grouping. This registry fixes
//!   one canonical table (see `DESIGN.md`); historical variants are
//!   deliberately not reconciled.
//! - Higher `precedence` binds tighter. Relational operators are the weakest
//!   binary level; multiplicative the strongest.
//! - `<` and `>` appear here as relational operators. Their second life as
//!   type-tuple delimiters is a parse-context decision, not a lexical one.
//!
//! ## Examples
//! ```rust
//! use transparency_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<~"), Some(OperatorId::FlowLeft));
//! assert_eq!(operators::info_for(OperatorId::Star).precedence, 70);
//! ```

use super::registry::{SINCE_1_0, SinceVersion, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define the syntactic role of an operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Assign,
    Increment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Relational / equality
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    PipePipe,
    AmpAmp,

    // Dataflow zip/join
    ZipJoin,

    // Bitwise
    Pipe,
    Caret,
    Tilde,
    Amp,

    // Dataflow shift
    FlowLeft,
    FlowRight,

    // Additive
    Plus,
    Minus,

    // Multiplicative
    Star,
    Slash,
    Percent,

    // Prefix-only
    Bang,

    // Assignment
    Eq,
    FlowLeftEq,
    FlowRightEq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    PipeEq,
    AmpEq,
    CaretEq,
    TildeEq,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub since: SinceVersion,
    pub stability: Stability,
}

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
        since: SINCE_1_0,
        stability: Stability::Stable,
    }
}

/// Binding strength of prefix unary operators (`- + ! ~ &`), tighter than any
/// binary level.
pub const UNARY_PRECEDENCE: u8 = 90;

/// Operators usable as unary prefixes. `-`, `+`, `~`, and `&` double as binary
/// operators; `!` is prefix-only.
pub const PREFIX_OPERATORS: &[OperatorId] = &[
    OperatorId::Minus,
    OperatorId::Plus,
    OperatorId::Bang,
    OperatorId::Tilde,
    OperatorId::Amp,
];

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::EqEq, "==", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", 10, Associativity::Left, Fixity::Infix),
    op(OperatorId::PipePipe, "||", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::AmpAmp, "&&", 20, Associativity::Left, Fixity::Infix),
    op(OperatorId::ZipJoin, "\\\\", 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::Pipe, "|", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Caret, "^", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Tilde, "~", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Amp, "&", 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::FlowLeft, "<~", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::FlowRight, "~>", 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Plus, "+", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", 60, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Bang, "!", UNARY_PRECEDENCE, Associativity::Right, Fixity::Prefix),
    op(OperatorId::Eq, "=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::FlowLeftEq, "<~=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::FlowRightEq, "~>=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::PlusEq, "+=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::MinusEq, "-=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::StarEq, "*=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::SlashEq, "/=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::PercentEq, "%=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::PipeEq, "|=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::AmpEq, "&=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::CaretEq, "^=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::TildeEq, "~=", 0, Associativity::None, Fixity::Assign),
    op(OperatorId::PlusPlus, "++", 0, Associativity::None, Fixity::Increment),
    op(OperatorId::MinusMinus, "--", 0, Associativity::None, Fixity::Increment),
];

/// Resolve a spelling to an operator id.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Full metadata for an operator id.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .unwrap_or_else(|| unreachable!("operator {id:?} missing from registry"))
}

/// Binary binding strength for an operator, or `None` if it is not an infix
/// binary operator.
pub fn binary_precedence(id: OperatorId) -> Option<u8> {
    let info = info_for(id);
    (info.fixity == Fixity::Infix).then_some(info.precedence)
}

/// Return `true` for the compound and plain assignment operators.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).fixity == Fixity::Assign
}

/// Return `true` for operators usable as unary prefixes.
pub fn is_prefix(id: OperatorId) -> bool {
    PREFIX_OPERATORS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_are_unique() {
        for (i, a) in OPERATORS.iter().enumerate() {
            for b in &OPERATORS[i + 1..] {
                assert_ne!(a.spelling, b.spelling, "duplicate spelling {:?}", a.spelling);
            }
        }
    }

    #[test]
    fn from_str_round_trips_every_entry() {
        for o in OPERATORS {
            assert_eq!(from_str(o.spelling), Some(o.id));
        }
    }

    #[test]
    fn relational_is_weakest_multiplicative_strongest() {
        assert!(info_for(OperatorId::Lt).precedence < info_for(OperatorId::PipePipe).precedence);
        assert!(info_for(OperatorId::PipePipe).precedence < info_for(OperatorId::ZipJoin).precedence);
        assert!(info_for(OperatorId::ZipJoin).precedence < info_for(OperatorId::Pipe).precedence);
        assert!(info_for(OperatorId::Pipe).precedence < info_for(OperatorId::FlowLeft).precedence);
        assert!(info_for(OperatorId::FlowLeft).precedence < info_for(OperatorId::Plus).precedence);
        assert!(info_for(OperatorId::Plus).precedence < info_for(OperatorId::Star).precedence);
        assert!(info_for(OperatorId::Star).precedence < UNARY_PRECEDENCE);
    }

    #[test]
    fn every_binary_level_is_left_associative() {
        for o in OPERATORS {
            if o.fixity == Fixity::Infix {
                assert_eq!(o.associativity, Associativity::Left, "{:?}", o.id);
            }
        }
    }
}
