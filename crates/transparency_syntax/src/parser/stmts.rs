// Statements and executable scopes.

impl<'a> Parser<'a> {
    /// `{ ... }` with nested definitions and executable statements.
    fn parse_scope(&mut self) {
        self.start(NodeKind::Scope);
        self.expect_punct(PunctuationId::LBrace, "'{'");
        while !self.at_punct(PunctuationId::RBrace) && !self.at_eof() {
            self.parse_statement();
        }
        self.expect_punct(PunctuationId::RBrace, "'}'");
        self.builder.finish_node();
    }

    fn parse_statement(&mut self) {
        match self.peek() {
            TokenKind::Keyword(KeywordId::Function) | TokenKind::Keyword(KeywordId::Entry) => {
                self.parse_function_definition()
            }
            TokenKind::Keyword(KeywordId::Var) | TokenKind::Keyword(KeywordId::Ref) => {
                self.parse_variable_or_comprehension()
            }
            TokenKind::Keyword(KeywordId::Type) => self.parse_type_definition(),
            TokenKind::Keyword(KeywordId::Constant) => self.parse_constant_definition(),
            TokenKind::Keyword(KeywordId::Enum) => self.parse_enum_definition(),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return_statement(),
            TokenKind::Keyword(KeywordId::For) => self.parse_for(),
            TokenKind::Keyword(KeywordId::While) => self.parse_while_statement(),
            TokenKind::Keyword(KeywordId::Do) => self.parse_do_statement(),
            TokenKind::Keyword(KeywordId::If) => self.parse_if_statement(),
            TokenKind::Keyword(KeywordId::Switch) | TokenKind::Keyword(KeywordId::Jump) => {
                self.parse_switch_statement()
            }
            TokenKind::Keyword(KeywordId::Break) => {
                self.parse_transfer(NodeKind::BreakStatement)
            }
            TokenKind::Keyword(KeywordId::Continue) => {
                self.parse_transfer(NodeKind::ContinueStatement)
            }
            TokenKind::Keyword(KeywordId::Case) | TokenKind::Keyword(KeywordId::Default) => {
                self.parse_labeled_statement()
            }
            TokenKind::Keyword(KeywordId::Node) => self.parse_node_instantiation(),
            TokenKind::Keyword(KeywordId::Circuit) => self.parse_circuit_instantiation(),
            TokenKind::Keyword(KeywordId::Fork) | TokenKind::Keyword(KeywordId::Spawn) => {
                self.parse_fork_statement()
            }
            TokenKind::Punct(PunctuationId::Semicolon) => self.bump(),
            // `{` at statement position always opens a scope; an initializer
            // expression cannot begin a statement.
            TokenKind::Punct(PunctuationId::LBrace) => self.parse_scope(),
            TokenKind::Identifier if self.nth(1).is_punct(PunctuationId::Colon) => {
                self.parse_labeled_statement()
            }
            _ if self.at_imperative_start() => self.parse_simple_statement(),
            _ => {
                let span = self.peek_span();
                self.diagnostics
                    .push(Diagnostic::syntax("expected a statement".into(), span));
                self.synchronize();
            }
        }
    }

    /// The single statement governed by a control-flow header. `allow_if` is
    /// false for the `if` arm itself, so an unbraced nested `if` is parsed but
    /// flagged; `else` always permits one.
    fn parse_controlled(&mut self, allow_if: bool) {
        match self.peek() {
            TokenKind::Punct(PunctuationId::LBrace) => self.parse_scope(),
            TokenKind::Punct(PunctuationId::Semicolon) => self.bump(),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return_statement(),
            TokenKind::Keyword(KeywordId::Break) => {
                self.parse_transfer(NodeKind::BreakStatement)
            }
            TokenKind::Keyword(KeywordId::Continue) => {
                self.parse_transfer(NodeKind::ContinueStatement)
            }
            TokenKind::Keyword(KeywordId::For) => self.parse_for(),
            TokenKind::Keyword(KeywordId::While) => self.parse_while_statement(),
            TokenKind::Keyword(KeywordId::Do) => self.parse_do_statement(),
            TokenKind::Keyword(KeywordId::Switch) | TokenKind::Keyword(KeywordId::Jump) => {
                self.parse_switch_statement()
            }
            TokenKind::Keyword(KeywordId::If) => {
                if !allow_if {
                    let span = self.peek_span();
                    self.diagnostics.push(Diagnostic::syntax(
                        "nested unbraced 'if'; brace the inner statement".into(),
                        span,
                    ));
                }
                self.parse_if_statement();
            }
            _ if self.at_imperative_start() => self.parse_simple_statement(),
            _ => {
                let span = self.peek_span();
                self.diagnostics
                    .push(Diagnostic::syntax("expected a statement".into(), span));
                self.synchronize();
            }
        }
    }

    fn at_imperative_start(&self) -> bool {
        self.at_keyword(KeywordId::Assert)
            || self.at_keyword(KeywordId::AtInternal)
            || self.at_operator(OperatorId::PlusPlus)
            || self.at_operator(OperatorId::MinusMinus)
            || self.at_expression_start()
    }

    /// `imperative ;` wrapped after the fact.
    fn parse_simple_statement(&mut self) {
        let cp = self.checkpoint();
        self.parse_imperative();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.start_node_at(cp, NodeKind::SimpleStatement);
        self.builder.finish_node();
    }

    /// Assertion, assignment, increment, or a bare expression. Only the bare
    /// expression stays unwrapped.
    fn parse_imperative(&mut self) {
        if self.at_keyword(KeywordId::Assert) || self.at_keyword(KeywordId::AtInternal) {
            self.start(NodeKind::Assertion);
            self.bump();
            self.parse_expression();
            self.builder.finish_node();
            return;
        }
        if self.at_operator(OperatorId::PlusPlus) || self.at_operator(OperatorId::MinusMinus) {
            self.start(NodeKind::Increment);
            self.bump();
            self.parse_expression();
            self.builder.finish_node();
            return;
        }
        let cp = self.checkpoint();
        self.parse_expression();
        match self.peek() {
            TokenKind::Operator(op) if operators::is_assignment(op) => {
                self.builder.start_node_at(cp, NodeKind::Assignment);
                self.bump();
                self.parse_expression();
                self.builder.finish_node();
            }
            TokenKind::Operator(OperatorId::PlusPlus)
            | TokenKind::Operator(OperatorId::MinusMinus) => {
                self.builder.start_node_at(cp, NodeKind::Increment);
                self.bump();
                self.builder.finish_node();
            }
            _ => {}
        }
    }

    /// Dispatch between the classic parenthesized `for` and `for .. in ..`,
    /// which takes no parentheses.
    fn parse_for(&mut self) {
        if self.nth(1).is_punct(PunctuationId::LParen) {
            self.parse_for_statement();
        } else {
            self.parse_for_in_statement();
        }
    }

    fn parse_for_statement(&mut self) {
        self.start(NodeKind::ForStatement);
        self.bump();
        self.expect_punct(PunctuationId::LParen, "'('");
        if self.at_keyword(KeywordId::Var) || self.at_keyword(KeywordId::Ref) {
            self.parse_variable_or_comprehension();
        } else {
            self.parse_simple_statement();
        }
        if self.at_expression_start() {
            self.parse_expression();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");
        if !self.at_punct(PunctuationId::RParen) && !self.at_eof() {
            self.parse_imperative();
        }
        self.expect_punct(PunctuationId::RParen, "')'");
        self.parse_controlled(true);
        self.builder.finish_node();
    }

    /// `for [var|ref] name [in] expr (do controlled | { ... } | ;)`.
    fn parse_for_in_statement(&mut self) {
        self.start(NodeKind::ForInStatement);
        self.bump();
        if self.at_keyword(KeywordId::Var) || self.at_keyword(KeywordId::Ref) {
            self.bump();
        }
        self.expect_identifier("a loop variable");
        if self.at_keyword(KeywordId::In) {
            self.bump();
        }
        self.parse_expression();
        if self.at_keyword(KeywordId::Do) {
            self.bump();
            self.parse_controlled(true);
        } else if self.at_punct(PunctuationId::LBrace) {
            self.parse_scope();
        } else if self.at_punct(PunctuationId::Semicolon) {
            self.bump();
        } else {
            self.missing("'do', '{' or ';'");
        }
        self.builder.finish_node();
    }

    fn parse_while_statement(&mut self) {
        self.start(NodeKind::WhileStatement);
        self.bump();
        self.parse_predicate();
        self.parse_controlled(true);
        self.builder.finish_node();
    }

    fn parse_do_statement(&mut self) {
        self.start(NodeKind::DoStatement);
        self.bump();
        self.parse_controlled(true);
        self.expect_keyword(KeywordId::While, "'while'");
        self.parse_predicate();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    /// `if (p) controlled [else else_controlled]`. A dangling `else` attaches
    /// to the nearest `if`, which the recursion gives for free.
    fn parse_if_statement(&mut self) {
        self.start(NodeKind::IfStatement);
        self.bump();
        self.parse_predicate();
        self.parse_controlled(false);
        if self.at_keyword(KeywordId::Else) {
            self.bump();
            self.parse_controlled(true);
        }
        self.builder.finish_node();
    }

    fn parse_switch_statement(&mut self) {
        self.start(NodeKind::SwitchStatement);
        self.bump();
        self.parse_predicate();
        self.parse_controlled(true);
        self.builder.finish_node();
    }

    fn parse_predicate(&mut self) {
        self.start(NodeKind::Predicate);
        self.expect_punct(PunctuationId::LParen, "'('");
        self.parse_expression();
        self.expect_punct(PunctuationId::RParen, "')'");
        self.builder.finish_node();
    }

    fn parse_return_statement(&mut self) {
        self.start(NodeKind::ReturnStatement);
        self.bump();
        if self.at_expression_start() {
            self.parse_expression();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    /// `break`/`continue` with an optional target label.
    fn parse_transfer(&mut self, kind: NodeKind) {
        self.start(kind);
        self.bump();
        if self.peek() == TokenKind::Identifier {
            self.bump();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    /// `label:`, `case expr:`, or `default:` — a standalone marker, not a
    /// wrapper around the following statement.
    fn parse_labeled_statement(&mut self) {
        self.start(NodeKind::LabeledStatement);
        if self.at_keyword(KeywordId::Case) {
            self.bump();
            self.parse_expression();
        } else if self.at_keyword(KeywordId::Default) {
            self.bump();
        } else {
            self.expect_identifier("a label");
        }
        self.expect_punct(PunctuationId::Colon, "':'");
        self.builder.finish_node();
    }

    /// `node [count] ["name"] expr ;` dynamic node instantiation.
    fn parse_node_instantiation(&mut self) {
        self.start(NodeKind::NodeInstantiation);
        self.bump();
        if self.peek() == TokenKind::Number {
            self.bump();
        }
        if self.peek() == TokenKind::String {
            self.bump();
        }
        self.parse_expression();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    fn parse_circuit_instantiation(&mut self) {
        self.start(NodeKind::CircuitInstantiation);
        self.bump();
        if self.peek() == TokenKind::Number {
            self.bump();
        }
        self.parse_expression();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    fn parse_fork_statement(&mut self) {
        self.start(NodeKind::ForkStatement);
        self.bump();
        self.parse_expression();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }
}
