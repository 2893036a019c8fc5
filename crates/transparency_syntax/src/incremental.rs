//! Incremental re-parsing.
//!
//! [`edit`] takes the previous [`Tree`], a byte-range [`Edit`], and the new
//! source text, and produces the tree a fresh parse of the new source would
//! produce, reusing work from the old tree:
//!
//! 1. **Re-lex locally.** Lexing restarts one token before the damage (token
//!    boundaries are safe restart points) and stops as soon as it produces a
//!    token that lines up with an old token past the edit; the old token
//!    suffix is spliced in with shifted offsets.
//! 2. **Reuse whole items.** Top-level items entirely before the restart point
//!    are copied into the new tree verbatim; items whose tokens all lie past
//!    the re-sync point are copied with shifted spans once the reparse cursor
//!    reaches them. Everything between is reparsed.
//!
//! The result is always byte-for-byte identical to a fresh parse of the new
//! source; the reuse is an optimization, never a semantic choice.

use crate::cst::{Element, Tree, TreeBuilder, TokenId};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::parser::Parser;
use std::sync::Arc;
use transparency_core::lang::productions::NodeKind;

/// A single byte-range replacement: `[start, old_end)` in the old source was
/// replaced by `[start, new_end)` in the new source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub old_end: usize,
    pub new_end: usize,
}

impl Edit {
    /// Signed byte growth of the document.
    pub fn delta(&self) -> isize {
        self.new_end as isize - self.old_end as isize
    }
}

/// Reuse counters for one [`edit_with_stats`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditStats {
    /// Top-level item nodes copied from before the damage.
    pub reused_before: usize,
    /// Top-level item nodes copied (shifted) from after the re-sync point.
    pub reused_after: usize,
    /// Top-level items parsed from tokens.
    pub reparsed: usize,
}

/// Reparse after an edit. See the module docs for the algorithm.
pub fn edit(old: &Tree, edit: &Edit, new_source: &str) -> Tree {
    edit_with_stats(old, edit, new_source).0
}

/// [`edit`] plus reuse statistics.
#[tracing::instrument(level = "debug", skip_all, fields(delta = edit.delta()))]
pub fn edit_with_stats(old: &Tree, edit: &Edit, new_source: &str) -> (Tree, EditStats) {
    let delta = edit.delta();
    let old_tokens = old.tokens();

    // Restart lexing one token before the first token touching the damage.
    let damage = old_tokens.partition_point(|t| t.span.end < edit.start);
    let restart = damage.saturating_sub(1);
    let restart_byte = old_tokens[restart].span.start;

    // Re-lex until a produced token lines up with an old token wholly past the
    // edit. The lexer is suffix-deterministic from any token boundary, so from
    // that point the old tokens (shifted) are exactly what it would produce.
    let mut lexer = Lexer::new_at(new_source, restart_byte);
    let mut relexed: Vec<Token> = Vec::new();
    let mut sync: Option<usize> = None;
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            relexed.push(tok);
            break;
        }
        if tok.span.start >= edit.new_end {
            let old_start = tok.span.start as isize - delta;
            if old_start >= edit.old_end as isize {
                if let Ok(idx) =
                    old_tokens.binary_search_by_key(&(old_start as usize), |t| t.span.start)
                {
                    if old_tokens[idx].kind == tok.kind {
                        sync = Some(idx);
                        break;
                    }
                }
            }
        }
        relexed.push(tok);
    }
    let mut mid_diags = lexer.take_diagnostics();
    if let Some(idx) = sync {
        // The sync token itself is represented by the shifted old suffix, so
        // its diagnostics come from the carry below; producing it during the
        // sync scan must not report them a second time.
        let sync_new_start = (old_tokens[idx].span.start as isize + delta) as usize;
        mid_diags.retain(|d| d.span.start < sync_new_start);
    }

    // Splice the token vector: unchanged prefix, re-lexed middle, shifted suffix.
    let (new_tokens, token_shift) = match sync {
        Some(idx) => {
            let mut v: Vec<Token> =
                Vec::with_capacity(restart + relexed.len() + (old_tokens.len() - idx));
            v.extend_from_slice(&old_tokens[..restart]);
            v.append(&mut relexed);
            for t in &old_tokens[idx..] {
                v.push(Token::new(t.kind, t.span.shifted(delta)));
            }
            let shift = (v.len() - (old_tokens.len() - idx)) as isize - idx as isize;
            (v, shift)
        }
        None => {
            let mut v = Vec::with_capacity(restart + relexed.len());
            v.extend_from_slice(&old_tokens[..restart]);
            v.append(&mut relexed);
            (v, 0)
        }
    };

    // Reusable prefix: items fully before the restart point. A trailing pragma
    // is dropped (its optional expression depends on what follows), as is a
    // trailing error item (its recovery extent does too).
    let items = old.items();
    let mut prefix_len = 0;
    for el in items {
        let span = old.span_of(*el);
        if span.end <= restart_byte && span.start < restart_byte {
            prefix_len += 1;
        } else {
            break;
        }
    }
    while prefix_len > 0 {
        match items[prefix_len - 1] {
            Element::Node(n)
                if matches!(old.node(n).kind, NodeKind::Pragma | NodeKind::Error) =>
            {
                prefix_len -= 1;
            }
            _ => break,
        }
    }
    let prefix_end_byte = if prefix_len == 0 {
        0
    } else {
        old.span_of(items[prefix_len - 1]).end
    };
    let resume_pos = new_tokens.partition_point(|t| t.span.start < prefix_end_byte);

    // Carry diagnostics that the reparse cannot regenerate: lex diagnostics
    // outside the re-lexed window, parse diagnostics inside reused items.
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for d in old.diagnostics() {
        let keep = match d.kind {
            DiagnosticKind::Lex => d.span.end <= restart_byte,
            _ => d.span.end <= prefix_end_byte,
        };
        if keep {
            diagnostics.push(d.clone());
        }
    }
    diagnostics.append(&mut mid_diags);
    if let Some(idx) = sync {
        let sync_old_byte = old_tokens[idx].span.start;
        for d in old.diagnostics() {
            if d.kind == DiagnosticKind::Lex && d.span.start >= sync_old_byte {
                diagnostics.push(d.clone().shifted(delta));
            }
        }
    }

    // Seed the builder with the reused prefix and resume parsing after it.
    let mut builder = TreeBuilder::new(new_tokens);
    builder.start_node(NodeKind::SourceFile);
    let mut stats = EditStats::default();
    for el in &items[..prefix_len] {
        match *el {
            Element::Node(n) => {
                builder.copy_node(old, n, 0, 0);
                stats.reused_before += 1;
            }
            Element::Token(t) => builder.push_token(t),
        }
    }
    tracing::debug!(
        restart_byte,
        resume_pos,
        reused_before = stats.reused_before,
        synced = sync.is_some(),
        "incremental reparse window chosen"
    );

    let mut parser = Parser::resume(new_source, builder, resume_pos, diagnostics);

    // Items whose tokens all lie at or past the sync token are splice
    // candidates; the first old token index of an item is monotonic, so a
    // single cursor suffices.
    let Some(sync_idx) = sync else {
        let tree = parser.finish_file();
        stats.reparsed = items[prefix_len..]
            .iter()
            .filter(|el| matches!(el, Element::Node(_)))
            .count();
        return (tree, stats);
    };
    let first_old_token = |el: &Element| -> usize {
        old_tokens.partition_point(|t| t.span.start < old.span_of(*el).start)
    };
    let mut cand = prefix_len;
    while cand < items.len() && first_old_token(&items[cand]) < sync_idx {
        cand += 1;
    }

    let splice_at = loop {
        let mut target = None;
        while cand < items.len() {
            let first_new = (first_old_token(&items[cand]) as isize + token_shift) as usize;
            if first_new < parser.pos() {
                cand += 1;
            } else {
                target = Some((cand, first_new));
                break;
            }
        }
        match target {
            Some((i, at)) if at == parser.pos() => break Some(i),
            _ => {
                if parser.at_end() {
                    break None;
                }
                parser.parse_one();
                stats.reparsed += 1;
            }
        }
    };

    let Some(splice) = splice_at else {
        return (parser.finish_file(), stats);
    };

    let (mut builder, mut diagnostics) = parser.into_parts();
    let splice_old_byte = old.span_of(items[splice]).start;
    for d in old.diagnostics() {
        if d.kind != DiagnosticKind::Lex && d.span.start >= splice_old_byte {
            diagnostics.push(d.clone().shifted(delta));
        }
    }
    for el in &items[splice..] {
        match *el {
            Element::Node(n) => {
                builder.copy_node(old, n, token_shift, delta);
                stats.reused_after += 1;
            }
            Element::Token(t) => {
                builder.push_token(TokenId((t.0 as isize + token_shift) as u32));
            }
        }
    }
    builder.finish_node();
    let tree = builder.finish(Arc::from(new_source), diagnostics);
    (tree, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn apply(source: &str, start: usize, old_end: usize, replacement: &str) -> (String, Edit) {
        let mut s = String::with_capacity(source.len() + replacement.len());
        s.push_str(&source[..start]);
        s.push_str(replacement);
        s.push_str(&source[old_end..]);
        let edit = Edit {
            start,
            old_end,
            new_end: start + replacement.len(),
        };
        (s, edit)
    }

    /// Apply the edit incrementally and check the result against a fresh parse.
    fn check(source: &str, start: usize, old_end: usize, replacement: &str) -> EditStats {
        let old = parser::parse(source);
        let (new_source, e) = apply(source, start, old_end, replacement);
        let (tree, stats) = edit_with_stats(&old, &e, &new_source);
        let fresh = parser::parse(&new_source);
        assert_eq!(tree.dump(), fresh.dump(), "structure diverged for {new_source:?}");
        assert_eq!(tree.tokens(), fresh.tokens(), "tokens diverged for {new_source:?}");
        assert_eq!(&**tree.source(), new_source.as_str());
        stats
    }

    const THREE_ITEMS: &str = "constant a = 1;\nconstant b = 2;\nconstant c = 3;\n";

    #[test]
    fn replace_in_the_middle_reuses_both_sides() {
        let at = THREE_ITEMS.find('2').unwrap_or_else(|| unreachable!());
        let stats = check(THREE_ITEMS, at, at + 1, "42");
        assert_eq!(stats.reused_before, 1);
        assert_eq!(stats.reused_after, 1);
        assert_eq!(stats.reparsed, 1);
    }

    #[test]
    fn edit_at_the_start_reuses_the_suffix() {
        let stats = check(THREE_ITEMS, 0, 0, "constant z = 0;\n");
        assert_eq!(stats.reused_before, 0);
        assert!(stats.reused_after >= 1, "{stats:?}");
    }

    #[test]
    fn append_at_the_end_reuses_the_prefix() {
        let at = THREE_ITEMS.len();
        let stats = check(THREE_ITEMS, at, at, "constant d = 4;\n");
        assert_eq!(stats.reused_before, 2);
    }

    #[test]
    fn deletion_matches_fresh_parse() {
        let start = THREE_ITEMS.find("constant b").unwrap_or_else(|| unreachable!());
        let end = start + "constant b = 2;\n".len();
        check(THREE_ITEMS, start, end, "");
    }

    #[test]
    fn edit_inside_a_comment_is_structure_neutral() {
        let source = "constant a = 1; // note\nconstant b = 2;\n";
        let at = source.find("note").unwrap_or_else(|| unreachable!());
        check(source, at, at + 4, "changed");
    }

    #[test]
    fn identifier_extension_across_the_edit_boundary() {
        // Typing directly after an identifier must re-lex it as one token.
        let source = "constant ab = 1;\nconstant c = 2;\n";
        let at = source.find(" =").unwrap_or_else(|| unreachable!());
        check(source, at, at, "cdef");
    }

    #[test]
    fn edit_that_breaks_an_item_stays_equivalent() {
        // Deleting the closing brace makes the first function swallow the rest.
        let source = "entry <> main <> { return 1; }\nconstant c = 3;\n";
        let at = source.find('}').unwrap_or_else(|| unreachable!());
        check(source, at, at + 1, "");
    }

    #[test]
    fn edit_that_repairs_an_item_stays_equivalent() {
        let source = "entry <> main <> { return 1; \nconstant c = 3;\n";
        let at = source.find('\n').unwrap_or_else(|| unreachable!());
        check(source, at, at, "}");
    }

    #[test]
    fn pragma_before_the_edit_is_reparsed_not_reused() {
        // The pragma's optional expression is greedy, so an edit right after it
        // can change how far it extends.
        let source = "# echo\nconstant b = 2;\n";
        let at = source.find('2').unwrap_or_else(|| unreachable!());
        let stats = check(source, at, at + 1, "9");
        assert_eq!(stats.reused_before, 0);
    }

    #[test]
    fn edit_in_string_literal() {
        let source = "constant s = \"hello\";\nconstant t = \"world\";\n";
        let at = source.find("hello").unwrap_or_else(|| unreachable!());
        let stats = check(source, at, at + 5, "goodbye");
        assert!(stats.reused_after >= 1, "{stats:?}");
    }

    #[test]
    fn sync_on_a_damaged_literal_reports_its_diagnostic_once() {
        // The unterminated string runs to end of input in both versions, so
        // re-sync lands on the string token itself; its lex diagnostic must
        // come from the carry alone.
        let source = "constant a = \"oops";
        let old = parser::parse(source);
        let at = source.find('"').unwrap_or_else(|| unreachable!());
        let (new_source, e) = apply(source, at, at, "1 + ");
        let tree = edit(&old, &e, &new_source);
        let fresh = parser::parse(&new_source);
        assert_eq!(tree.dump(), fresh.dump());
        let lex_count = |t: &Tree| {
            t.diagnostics().iter().filter(|d| d.kind == DiagnosticKind::Lex).count()
        };
        assert_eq!(lex_count(&tree), 1);
        assert_eq!(lex_count(&tree), lex_count(&fresh));
    }

    #[test]
    fn whole_file_replacement_degenerates_to_a_full_parse() {
        let source = "constant a = 1;\n";
        let replacement = "class C { method! x: int; }\n";
        let stats = check(source, 0, source.len(), replacement);
        assert_eq!(stats.reused_before, 0);
        assert_eq!(stats.reused_after, 0);
    }

    #[test]
    fn repeated_edits_stay_deterministic() {
        let mut source = String::from(THREE_ITEMS);
        let mut tree = parser::parse(&source);
        for (needle, replacement) in [("1", "10"), ("b", "bb"), ("3;", "3 + 4;")] {
            let at = source.find(needle).unwrap_or_else(|| unreachable!());
            let (next, e) = apply(&source, at, at + needle.len(), replacement);
            tree = edit(&tree, &e, &next);
            let fresh = parser::parse(&next);
            assert_eq!(tree.dump(), fresh.dump());
            source = next;
        }
    }
}
