//! Parser for the Transparency programming language
//!
//! Consumes the significant token stream (trivia attached out-of-band as it is
//! passed) and builds a full-fidelity CST. All ambiguity is resolved statically:
//! no backtracking, no ambiguous-parse forest.
//!
//! - Angle brackets: a predictive, linear scan decides whether `<` opens a type
//!   tuple; infix `<` after a complete operand is always relational.
//! - Cardinality `|expr|`: accepted only in expression-starting position;
//!   bitwise-or is suppressed inside an unparenthesized cardinality operand.
//! - Dangling `else` binds to the nearest unmatched `if`.
//! - Binary precedence and associativity come from the operator registry.
//!
//! Parsing always returns a tree plus diagnostics; malformed input becomes
//! error nodes, never a panic or an `Err`.
//!
//! ## Examples
//!
//! ```rust
//! use transparency_syntax::parser;
//!
//! let tree = parser::parse("function <int> add <int a, int b> { return a + b; }");
//! assert!(tree.diagnostics().is_empty());
//! ```

use crate::cst::{Checkpoint, Span, TokenId, Tree, TreeBuilder};
use crate::diagnostics::Diagnostic;
use crate::lexer::{Token, TokenKind};
use std::sync::Arc;
use transparency_core::lang::keywords::{self, KeywordId};
use transparency_core::lang::operators::{self, OperatorId};
use transparency_core::lang::productions::NodeKind;
use transparency_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
