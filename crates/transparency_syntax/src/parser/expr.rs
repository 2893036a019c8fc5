// Expressions: precedence climbing over the operator registry, postfix chains,
// and the type-tuple-led primaries (cast, call, input, closure).

impl<'a> Parser<'a> {
    /// Full expression: binary core plus the loosest-binding forms (ternary,
    /// choose, output) layered left-associatively on top.
    fn parse_expression(&mut self) {
        let cp = self.checkpoint();
        self.parse_expr_binary(0);
        loop {
            match self.peek() {
                TokenKind::Punct(PunctuationId::Question) => {
                    self.builder.start_node_at(cp, NodeKind::TernaryExpression);
                    self.bump();
                    self.parse_expr_binary(0);
                    self.expect_punct(PunctuationId::Colon, "':'");
                    self.parse_expr_binary(0);
                    self.builder.finish_node();
                }
                TokenKind::Punct(PunctuationId::QuestionQuestion) => {
                    self.builder.start_node_at(cp, NodeKind::ChooseExpression);
                    self.bump();
                    self.expect_punct(PunctuationId::LBrace, "'{'");
                    if !self.at_punct(PunctuationId::RBrace) && !self.at_eof() {
                        self.parse_choose_arm();
                        while self.at_punct(PunctuationId::Comma) {
                            self.bump();
                            self.parse_choose_arm();
                        }
                    }
                    self.expect_punct(PunctuationId::RBrace, "'}'");
                    self.builder.finish_node();
                }
                // `lhs <:chan: rhs` writes lhs into the channel; right-associative.
                TokenKind::IoLiteral => {
                    self.builder.start_node_at(cp, NodeKind::OutputExpression);
                    self.bump();
                    self.parse_expression();
                    self.builder.finish_node();
                }
                _ => break,
            }
        }
    }

    /// One arm of a choose expression: `literal: value` or a bare value.
    fn parse_choose_arm(&mut self) {
        if self.peek().is_literal() && self.nth(1).is_punct(PunctuationId::Colon) {
            self.bump();
            self.bump();
        }
        self.parse_expr_binary(0);
    }

    /// Precedence climbing. Every infix level is left-associative, so the
    /// right operand climbs at `prec + 1`.
    fn parse_expr_binary(&mut self, min: u8) {
        let cp = self.checkpoint();
        self.parse_expr_unary();
        loop {
            let TokenKind::Operator(op) = self.peek() else {
                break;
            };
            let Some(prec) = operators::binary_precedence(op) else {
                break;
            };
            if prec < min {
                break;
            }
            // Inside cardinality bars `|` can only close; the caller owns it.
            if op == OperatorId::Pipe && self.no_bitor > 0 {
                break;
            }
            self.builder.start_node_at(cp, NodeKind::BinaryExpression);
            self.bump();
            self.parse_expr_binary(prec + 1);
            self.builder.finish_node();
        }
    }

    fn parse_expr_unary(&mut self) {
        match self.peek() {
            TokenKind::Operator(op) if operators::is_prefix(op) => {
                self.start(NodeKind::UnaryExpression);
                self.bump();
                self.parse_expr_unary();
                self.builder.finish_node();
            }
            TokenKind::Keyword(KeywordId::Share) | TokenKind::Keyword(KeywordId::Unshare) => {
                self.start(NodeKind::QualExpression);
                self.bump();
                self.parse_expr_binary(0);
                self.builder.finish_node();
            }
            TokenKind::Builtin(_) => {
                self.start(NodeKind::BuiltinExpression);
                self.bump();
                self.parse_expr_unary();
                self.builder.finish_node();
            }
            _ => self.parse_expr_postfix(),
        }
    }

    /// Primary plus the left-recursive postfix chain: select, index, call,
    /// method invocation.
    fn parse_expr_postfix(&mut self) {
        let cp = self.checkpoint();
        self.parse_expr_primary(cp);
        loop {
            match self.peek() {
                TokenKind::Punct(PunctuationId::Dot) => {
                    self.builder.start_node_at(cp, NodeKind::SelectExpression);
                    self.bump();
                    self.expect_identifier("a member name");
                    self.builder.finish_node();
                }
                TokenKind::Punct(PunctuationId::LBracket) => {
                    self.builder.start_node_at(cp, NodeKind::IndexExpression);
                    self.bump();
                    self.parse_expr_list(PunctuationId::RBracket);
                    self.expect_punct(PunctuationId::RBracket, "']'");
                    self.builder.finish_node();
                }
                TokenKind::Punct(PunctuationId::LParen) => {
                    self.builder.start_node_at(cp, NodeKind::CallExpression);
                    self.parse_tuple_expression();
                    self.builder.finish_node();
                }
                TokenKind::Punct(PunctuationId::Arrow) => {
                    self.builder.start_node_at(cp, NodeKind::MethodExpression);
                    self.bump();
                    if self.at_operator(OperatorId::Lt) && self.scan_typetuple() {
                        self.typetuple_note();
                        self.parse_typetuple();
                    }
                    self.expect_identifier("a method name");
                    if self.at_operator(OperatorId::Lt) && self.scan_typetuple() {
                        self.typetuple_note();
                        self.parse_typetuple();
                    }
                    self.builder.finish_node();
                }
                _ => break,
            }
        }
    }

    fn parse_expr_primary(&mut self, cp: Checkpoint) {
        match self.peek() {
            TokenKind::Punct(PunctuationId::LParen) => self.parse_tuple_expression(),
            TokenKind::Punct(PunctuationId::LBracket) => {
                self.parse_bracket_expression();
                // `[dims] { ... }` is a dimensioned initializer.
                if self.at_punct(PunctuationId::LBrace) {
                    self.builder.start_node_at(cp, NodeKind::Initializer);
                    self.parse_initializer_body();
                    self.builder.finish_node();
                }
            }
            TokenKind::Punct(PunctuationId::LBrace) => {
                self.start(NodeKind::Initializer);
                self.parse_initializer_body();
                self.builder.finish_node();
            }
            TokenKind::Identifier => self.bump(),
            kind if kind.is_literal() => self.bump(),
            TokenKind::Operator(OperatorId::Pipe) => {
                self.start(NodeKind::CardExpression);
                self.bump();
                self.no_bitor += 1;
                self.parse_expr_binary(0);
                self.no_bitor -= 1;
                self.expect_operator(OperatorId::Pipe, "'|'");
                self.builder.finish_node();
            }
            TokenKind::Operator(OperatorId::Lt) => {
                if self.scan_typetuple() {
                    self.parse_typetuple_led(cp);
                } else {
                    let span = self.peek_span();
                    self.diagnostics.push(Diagnostic::syntax(
                        "'<' does not open a type tuple here".into(),
                        span,
                    ));
                    self.start(NodeKind::Error);
                    self.bump();
                    self.builder.finish_node();
                }
            }
            _ => self.missing_node(
                "an expression",
                &["identifier", "literal", "'('", "'['", "'{'", "'<'", "'|'"],
            ),
        }
    }

    /// Primaries led by a type tuple. The token after the tuple (or after the
    /// following name) decides: cast, input, closure, or call.
    fn parse_typetuple_led(&mut self, cp: Checkpoint) {
        self.parse_typetuple();
        match self.peek() {
            TokenKind::Punct(PunctuationId::LParen) => {
                self.builder.start_node_at(cp, NodeKind::CastExpression);
                self.parse_tuple_expression();
                self.builder.finish_node();
            }
            TokenKind::IoLiteral => {
                self.builder.start_node_at(cp, NodeKind::InputExpression);
                self.bump();
                self.parse_expr_unary();
                self.builder.finish_node();
            }
            TokenKind::Punct(PunctuationId::LArrow) => {
                self.builder.start_node_at(cp, NodeKind::Closure);
                self.bump();
                self.parse_typetuple();
                self.parse_scope();
                self.builder.finish_node();
            }
            TokenKind::Identifier | TokenKind::String => {
                self.bump();
                if self.at_punct(PunctuationId::LParen) {
                    self.builder.start_node_at(cp, NodeKind::CallExpression);
                    self.parse_tuple_expression();
                    self.builder.finish_node();
                } else if self.at_operator(OperatorId::Lt) && self.scan_typetuple() {
                    // `<ret> name <params>` names an existing function as a closure.
                    self.typetuple_note();
                    self.builder.start_node_at(cp, NodeKind::Closure);
                    self.parse_typetuple();
                    self.builder.finish_node();
                } else {
                    self.builder.start_node_at(cp, NodeKind::CallExpression);
                    self.missing_node("an argument list", &["'('", "'<'"]);
                    self.builder.finish_node();
                }
            }
            _ => {
                self.builder.start_node_at(cp, NodeKind::CastExpression);
                self.missing_node("a cast operand", &["'('"]);
                self.builder.finish_node();
            }
        }
    }

    /// `( expr, ... )`.
    fn parse_tuple_expression(&mut self) {
        self.start(NodeKind::TupleExpression);
        self.expect_punct(PunctuationId::LParen, "'('");
        self.parse_expr_list(PunctuationId::RParen);
        self.expect_punct(PunctuationId::RParen, "')'");
        self.builder.finish_node();
    }

    /// `[ expr, ... ]`.
    fn parse_bracket_expression(&mut self) {
        self.start(NodeKind::BracketExpression);
        self.expect_punct(PunctuationId::LBracket, "'['");
        self.parse_expr_list(PunctuationId::RBracket);
        self.expect_punct(PunctuationId::RBracket, "']'");
        self.builder.finish_node();
    }

    fn parse_initializer_body(&mut self) {
        self.expect_punct(PunctuationId::LBrace, "'{'");
        self.parse_expr_list(PunctuationId::RBrace);
        self.expect_punct(PunctuationId::RBrace, "'}'");
    }

    /// Possibly-empty comma-separated expression list up to `close`.
    fn parse_expr_list(&mut self, close: PunctuationId) {
        if self.at_punct(close) || self.at_eof() {
            return;
        }
        self.parse_expression();
        while self.at_punct(PunctuationId::Comma) {
            self.bump();
            self.parse_expression();
        }
    }

    /// Record the static resolution of `<` in a position where a relational
    /// comparison was also grammatically reachable.
    fn typetuple_note(&mut self) {
        let span = self.peek_span();
        self.diagnostics.push(Diagnostic::note(
            "'<' read as a type tuple; a relational comparison was also possible".into(),
            span,
        ));
    }
}
