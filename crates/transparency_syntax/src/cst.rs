//! Concrete syntax tree: flat-arena nodes, full-fidelity tokens, byte spans.
//!
//! A [`Tree`] owns an immutable snapshot of the source, the token vector
//! (trivia included, tiling the source exactly), and a flat node arena.
//! Children and parents are indices, so trees are cheap to share, diff, and
//! partially rebuild during incremental edits.
//!
//! ## Notes
//! - Trees are immutable after construction; `incremental::edit` produces a new
//!   tree and leaves the old one untouched.
//! - Node spans are the union of their children's spans; a childless node
//!   (e.g. an error node for a missing expression) carries a zero-length span
//!   anchored where the material should have been.

use std::sync::Arc;

use crate::diagnostics::Diagnostic;
use crate::lexer::tokens::Token;
use transparency_core::lang::productions::{self, NodeKind};

/// Byte range in the source, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Union of two spans (smallest span covering both).
    pub fn cover(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Shift both ends by a signed byte delta.
    pub fn shifted(&self, delta: isize) -> Span {
        Span::new(
            (self.start as isize + delta) as usize,
            (self.end as isize + delta) as usize,
        )
    }
}

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Index of a token in the tree's token vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub u32);

/// One ordered child of a node: either a nested node or a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Node(NodeId),
    Token(TokenId),
}

/// Arena entry for one syntax node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    pub kind: NodeKind,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<Element>,
}

/// An immutable parse result: source snapshot, tokens, node arena, diagnostics.
#[derive(Debug, Clone)]
pub struct Tree {
    source: Arc<str>,
    tokens: Vec<Token>,
    nodes: Vec<NodeData>,
    root: NodeId,
    diagnostics: Vec<Diagnostic>,
    line_starts: Vec<usize>,
}

impl Tree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.0 as usize]
    }

    /// All tokens, trivia included, in source order. They tile the source.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    pub fn text(&self, span: Span) -> &str {
        &self.source[span.start..span.end]
    }

    pub fn token_text(&self, id: TokenId) -> &str {
        self.text(self.token(id).span)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Top-level items: the children of the root `source_file` node.
    pub fn items(&self) -> &[Element] {
        &self.node(self.root).children
    }

    /// 1-based line and column for a byte offset.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        (line + 1, offset - self.line_starts[line] + 1)
    }

    /// Span of an element, node or token alike.
    pub fn span_of(&self, element: Element) -> Span {
        match element {
            Element::Node(n) => self.node(n).span,
            Element::Token(t) => self.token(t).span,
        }
    }

    /// Render the tree as an indented kind/span listing, for tests and debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let data = self.node(id);
        let name = productions::info_for(data.kind).canonical;
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{}@{}..{}\n", name, data.span.start, data.span.end));
        for &child in &data.children {
            match child {
                Element::Node(n) => self.dump_node(n, depth + 1, out),
                Element::Token(t) => {
                    let tok = self.token(t);
                    if tok.kind.is_trivia() {
                        continue;
                    }
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(&format!(
                        "{} {:?}@{}..{}\n",
                        tok.kind.describe(),
                        self.token_text(t),
                        tok.span.start,
                        tok.span.end
                    ));
                }
            }
        }
    }
}

/// A position in the builder's pending child list, used to wrap
/// already-emitted elements into a node after the fact.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint(usize);

/// Incremental constructor for [`Tree`].
///
/// The parser drives this with `start_node`/`finish_node`/`push_token`;
/// `checkpoint`/`start_node_at` retroactively wrap a finished prefix (used for
/// left-associative operators and statement kinds decided late). The
/// incremental reparser splices whole subtrees in with `copy_node`.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    nodes: Vec<NodeData>,
    scratch: Vec<Element>,
    stack: Vec<(NodeKind, usize)>,
    last_end: usize,
}

impl TreeBuilder {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            nodes: Vec::new(),
            scratch: Vec::new(),
            stack: Vec::new(),
            last_end: 0,
        }
    }

    pub fn token_span(&self, id: TokenId) -> Span {
        self.tokens[id.0 as usize].span
    }

    /// The token vector this builder was constructed over.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.scratch.len())
    }

    pub fn start_node(&mut self, kind: NodeKind) {
        self.stack.push((kind, self.scratch.len()));
    }

    /// Start a node whose first children are the elements emitted since `cp`.
    pub fn start_node_at(&mut self, cp: Checkpoint, kind: NodeKind) {
        debug_assert!(
            self.stack.last().is_none_or(|&(_, start)| start <= cp.0),
            "checkpoint predates an unfinished node"
        );
        self.stack.push((kind, cp.0));
    }

    pub fn push_token(&mut self, id: TokenId) {
        self.last_end = self.token_span(id).end;
        self.scratch.push(Element::Token(id));
    }

    pub fn finish_node(&mut self) {
        let (kind, start) = self.stack.pop().unwrap_or_else(|| unreachable!("finish_node without start_node"));
        let children: Vec<Element> = self.scratch.drain(start..).collect();
        let span = children
            .iter()
            .map(|&el| self.element_span(el))
            .reduce(|a, b| a.cover(b))
            .unwrap_or_else(|| Span::empty(self.last_end));
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            span,
            parent: None,
            children,
        });
        self.scratch.push(Element::Node(id));
    }

    fn element_span(&self, el: Element) -> Span {
        match el {
            Element::Node(n) => self.nodes[n.0 as usize].span,
            Element::Token(t) => self.token_span(t),
        }
    }

    /// Splice a subtree from an older tree, shifting token indices and byte
    /// offsets. The copied structure is byte-for-byte what a fresh parse of the
    /// shifted region would build.
    pub fn copy_node(&mut self, old: &Tree, id: NodeId, token_shift: isize, delta: isize) {
        let new_id = self.copy_node_rec(old, id, token_shift, delta);
        self.last_end = self.nodes[new_id.0 as usize].span.end;
        self.scratch.push(Element::Node(new_id));
    }

    fn copy_node_rec(&mut self, old: &Tree, id: NodeId, token_shift: isize, delta: isize) -> NodeId {
        let data = old.node(id);
        let mut children = Vec::with_capacity(data.children.len());
        for &el in &data.children {
            match el {
                Element::Token(t) => {
                    children.push(Element::Token(TokenId((t.0 as isize + token_shift) as u32)));
                }
                Element::Node(n) => {
                    children.push(Element::Node(self.copy_node_rec(old, n, token_shift, delta)));
                }
            }
        }
        let new_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind: data.kind,
            span: data.span.shifted(delta),
            parent: None,
            children,
        });
        new_id
    }

    /// Seal the tree. Expects exactly one pending element: the root node.
    pub fn finish(mut self, source: Arc<str>, diagnostics: Vec<Diagnostic>) -> Tree {
        debug_assert!(self.stack.is_empty(), "unfinished nodes at finish");
        debug_assert_eq!(self.scratch.len(), 1, "expected a single root element");
        let root = match self.scratch.pop() {
            Some(Element::Node(n)) => n,
            _ => unreachable!("root element must be a node"),
        };

        // Parent links in one pass over the arena.
        for i in 0..self.nodes.len() {
            for c in 0..self.nodes[i].children.len() {
                if let Element::Node(child) = self.nodes[i].children[c] {
                    self.nodes[child.0 as usize].parent = Some(NodeId(i as u32));
                }
            }
        }

        let line_starts = line_starts(&source);
        Tree {
            source,
            tokens: self.tokens,
            nodes: self.nodes,
            root,
            diagnostics,
            line_starts,
        }
    }
}

fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}
