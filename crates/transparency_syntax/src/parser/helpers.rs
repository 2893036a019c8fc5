// Token navigation, trivia handling, and error-recovery primitives.

impl<'a> Parser<'a> {
    fn tokens(&self) -> &[Token] {
        self.builder.tokens()
    }

    /// Index of the n-th significant token at or after `pos`. The token vector
    /// always ends with `Eof`, which is significant, so this terminates.
    fn sig_index(&self, n: usize) -> usize {
        let tokens = self.tokens();
        let mut i = self.pos;
        let mut remaining = n;
        loop {
            if !tokens[i].kind.is_trivia() {
                if remaining == 0 {
                    return i;
                }
                if tokens[i].kind == TokenKind::Eof {
                    return i;
                }
                remaining -= 1;
            }
            i += 1;
        }
    }

    /// Kind of the next significant token.
    fn peek(&self) -> TokenKind {
        self.tokens()[self.sig_index(0)].kind
    }

    /// Kind of the n-th significant token ahead (0 == `peek`).
    fn nth(&self, n: usize) -> TokenKind {
        self.tokens()[self.sig_index(n)].kind
    }

    fn peek_span(&self) -> Span {
        self.tokens()[self.sig_index(0)].span
    }

    /// Source text of the next significant token.
    fn peek_text(&self) -> &'a str {
        let span = self.peek_span();
        &self.source[span.start..span.end]
    }

    fn at_eof(&self) -> bool {
        self.peek() == TokenKind::Eof
    }

    /// Push pending trivia tokens into the currently open node.
    fn flush_trivia(&mut self) {
        while self.tokens()[self.pos].kind.is_trivia() {
            self.builder.push_token(TokenId(self.pos as u32));
            self.pos += 1;
        }
    }

    /// Open a node. Pending trivia is flushed to the enclosing node first, so
    /// node spans always begin at a significant token.
    fn start(&mut self, kind: NodeKind) {
        self.flush_trivia();
        self.builder.start_node(kind);
    }

    /// Take a wrap point for a node decided later. Flushes trivia first for
    /// the same reason as [`Parser::start`].
    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    /// Consume the next significant token (and its leading trivia) into the
    /// open node. Never consumes `Eof`.
    fn bump(&mut self) {
        self.flush_trivia();
        if self.tokens()[self.pos].kind == TokenKind::Eof {
            return;
        }
        self.builder.push_token(TokenId(self.pos as u32));
        self.pos += 1;
    }

    fn at_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_keyword(id)
    }

    fn at_operator(&self, id: OperatorId) -> bool {
        self.peek().is_operator(id)
    }

    fn at_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punct(id)
    }

    /// Consume the token if it matches, otherwise report what was expected.
    /// The cursor does not move on a miss; the caller's structure continues.
    fn expect(&mut self, want: TokenKind, name: &'static str) {
        if self.peek() == want {
            self.bump();
        } else {
            self.missing(name);
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, name: &'static str) {
        self.expect(TokenKind::Keyword(id), name);
    }

    fn expect_operator(&mut self, id: OperatorId, name: &'static str) {
        self.expect(TokenKind::Operator(id), name);
    }

    fn expect_punct(&mut self, id: PunctuationId, name: &'static str) {
        self.expect(TokenKind::Punct(id), name);
    }

    fn expect_identifier(&mut self, what: &'static str) {
        if self.peek() == TokenKind::Identifier {
            self.bump();
        } else {
            let span = Span::empty(self.peek_span().start);
            self.diagnostics.push(
                Diagnostic::syntax(format!("expected {what}"), span).with_expected(&["identifier"]),
            );
        }
    }

    /// Record a missing-token diagnostic anchored just before the next token.
    fn missing(&mut self, name: &'static str) {
        let span = Span::empty(self.peek_span().start);
        self.diagnostics
            .push(Diagnostic::syntax(format!("expected {name}"), span).with_expected(&[name]));
    }

    /// Emit a zero-length error node where material is missing, anchored at the
    /// start of the next significant token.
    fn missing_node(&mut self, what: &'static str, expected: &[&'static str]) {
        let span = Span::empty(self.peek_span().start);
        self.diagnostics
            .push(Diagnostic::syntax(format!("expected {what}"), span).with_expected(expected));
        self.start(NodeKind::Error);
        self.builder.finish_node();
    }

    /// Statement-level panic recovery: consume into an error node up to and
    /// including `;`, or stop before `}` / a definition keyword / `Eof`.
    ///
    /// The item-start stop only applies once at least one token has been
    /// consumed; the offending token may itself be a definition keyword, and
    /// the statement loop must make progress past it. `}` always stays for the
    /// enclosing scope, whose loop exits on it.
    fn synchronize(&mut self) {
        self.start(NodeKind::Error);
        let mut consumed = false;
        while !self.at_eof() {
            if self.at_punct(PunctuationId::Semicolon) {
                self.bump();
                break;
            }
            if self.at_punct(PunctuationId::RBrace) {
                break;
            }
            if consumed && self.at_item_start(false) {
                break;
            }
            self.bump();
            consumed = true;
        }
        self.builder.finish_node();
    }
}
