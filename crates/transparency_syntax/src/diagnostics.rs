//! Diagnostics for the Transparency syntax frontend.
//!
//! Parsing never aborts: the lexer and parser collect [`Diagnostic`] values and
//! always hand back a tree. Callers decide which kinds they treat as fatal.
//!
//! ## Notes
//! - [`DiagnosticKind::Note`] records which static rule resolved an ambiguous
//!   construct (angle brackets, cardinality bars). Notes are never user-fatal.
//! - [`Report`] is the `miette`-rendered form for CLI and LSP consumers.

use crate::cst::Span;
use miette::{NamedSource, SourceSpan};
use thiserror::Error;

/// Severity/taxonomy of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Unrecognized byte or unterminated literal.
    Lex,
    /// Unexpected token or missing expected symbol.
    Syntax,
    /// Informational record of an ambiguity resolution.
    Note,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::Lex => write!(f, "lex error"),
            DiagnosticKind::Syntax => write!(f, "syntax error"),
            DiagnosticKind::Note => write!(f, "note"),
        }
    }
}

/// A single lexical or syntactic diagnostic with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub kind: DiagnosticKind,
    /// Canonical spellings the parser would have accepted at `span.start`.
    pub expected: Vec<&'static str>,
}

impl Diagnostic {
    pub fn lex(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: DiagnosticKind::Lex,
            expected: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: DiagnosticKind::Syntax,
            expected: Vec::new(),
        }
    }

    pub fn note(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: DiagnosticKind::Note,
            expected: Vec::new(),
        }
    }

    pub fn with_expected(mut self, expected: &[&'static str]) -> Self {
        self.expected.extend_from_slice(expected);
        self
    }

    /// Shift the diagnostic span by a signed byte delta.
    ///
    /// Used by the incremental reparser when carrying diagnostics across an edit.
    pub(crate) fn shifted(mut self, delta: isize) -> Self {
        self.span = self.span.shifted(delta);
        self
    }

    /// Render as a labeled `miette` report over the named source.
    pub fn to_report(&self, source_name: &str, source: &str) -> Report {
        let label = if self.expected.is_empty() {
            self.kind.to_string()
        } else {
            format!("expected {}", self.expected.join(" | "))
        };
        Report {
            message: format!("{}: {}", self.kind, self.message),
            src: NamedSource::new(source_name, source.to_string()),
            span: SourceSpan::new(self.span.start.into(), self.span.len()),
            label,
        }
    }
}

/// `miette`-renderable diagnostic report.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("{message}")]
pub struct Report {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_set_is_carried() {
        let d = Diagnostic::syntax("missing expression".into(), Span::new(4, 5)).with_expected(&["(", "identifier"]);
        assert_eq!(d.expected, vec!["(", "identifier"]);
        assert_eq!(d.kind, DiagnosticKind::Syntax);
    }

    #[test]
    fn shifted_moves_both_ends() {
        let d = Diagnostic::lex("x".into(), Span::new(10, 12)).shifted(-3);
        assert_eq!(d.span, Span::new(7, 9));
    }
}
