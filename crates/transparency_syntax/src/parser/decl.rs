// Definitions: functions, circuits, classes, members, variables, pragmas.

/// Words recognized after `#`. They are ordinary identifiers everywhere else.
const PRAGMA_WORDS: &[&str] = &["echo", "expect", "meta", "xml"];

impl<'a> Parser<'a> {
    /// `function <ret> name <params> body` or the `entry` variant.
    fn parse_function_definition(&mut self) {
        self.start(NodeKind::FunctionDefinition);
        self.bump();
        self.parse_typetuple();
        self.expect_identifier("a function name");
        self.parse_typetuple();
        self.parse_body();
        self.builder.finish_node();
    }

    /// `circuit name <params> { ... }`. Unlike functions, circuits always have
    /// a braced scope.
    fn parse_circuit_definition(&mut self) {
        self.start(NodeKind::CircuitDefinition);
        self.bump();
        self.expect_identifier("a circuit name");
        self.parse_typetuple();
        self.parse_scope();
        self.builder.finish_node();
    }

    /// `class name : bases { ... }` or the `node` variant.
    fn parse_class_definition(&mut self) {
        self.start(NodeKind::ClassDefinition);
        self.bump();
        self.expect_identifier("a class name");
        if self.at_punct(PunctuationId::Colon) {
            self.start(NodeKind::BaseSpecifierList);
            self.bump();
            self.parse_base_specifier();
            while self.at_punct(PunctuationId::Comma) {
                self.bump();
                self.parse_base_specifier();
            }
            self.builder.finish_node();
        }
        self.parse_class_body();
        self.builder.finish_node();
    }

    fn parse_base_specifier(&mut self) {
        self.start(NodeKind::BaseSpecifier);
        if self.at_keyword(KeywordId::Common) {
            self.bump();
        }
        self.expect_identifier("a base class name");
        self.builder.finish_node();
    }

    fn parse_class_body(&mut self) {
        self.start(NodeKind::ClassBody);
        self.expect_punct(PunctuationId::LBrace, "'{'");
        while !self.at_punct(PunctuationId::RBrace) && !self.at_eof() {
            self.parse_item(false);
        }
        self.expect_punct(PunctuationId::RBrace, "'}'");
        self.builder.finish_node();
    }

    /// Ctor, dtor, or fire member; the head identifier's final `::` segment
    /// selected `kind`.
    fn parse_special_member(&mut self, kind: NodeKind) {
        self.start(kind);
        self.bump();
        if kind == NodeKind::CtorDefinition {
            self.parse_typetuple();
            // Member initializers may start with or without the leading colon.
            if self.at_punct(PunctuationId::Colon) || self.peek() == TokenKind::Identifier {
                self.parse_ctor_inits();
            }
        }
        self.parse_body();
        self.builder.finish_node();
    }

    fn parse_ctor_inits(&mut self) {
        self.start(NodeKind::CtorInits);
        if self.at_punct(PunctuationId::Colon) {
            self.bump();
        }
        self.parse_ctor_init();
        while self.at_punct(PunctuationId::Comma) {
            self.bump();
            self.parse_ctor_init();
        }
        self.builder.finish_node();
    }

    fn parse_ctor_init(&mut self) {
        self.start(NodeKind::CtorInit);
        self.expect_identifier("a member name");
        self.parse_tuple_expression();
        self.builder.finish_node();
    }

    /// `method! name: type;` (data member) or `method <ret> name <params> body`.
    fn parse_method_definition(&mut self) {
        self.start(NodeKind::MethodDefinition);
        self.bump();
        if self.at_operator(OperatorId::Bang) {
            self.bump();
        }
        if self.peek() == TokenKind::Identifier && self.nth(1).is_punct(PunctuationId::Colon) {
            self.bump();
            self.bump();
            self.parse_typespec();
            self.expect_punct(PunctuationId::Semicolon, "';'");
        } else {
            self.parse_typetuple();
            self.expect_identifier("a method name");
            self.parse_typetuple();
            self.parse_body();
        }
        self.builder.finish_node();
    }

    /// `var`/`ref` declaration. A parenthesized name list makes it a
    /// comprehension (one producer expression fanned out over several names).
    fn parse_variable_or_comprehension(&mut self) {
        if self.nth(1).is_punct(PunctuationId::LParen) {
            self.start(NodeKind::ComprehensionDefinition);
            self.bump();
            self.bump();
            self.parse_id_list();
            self.expect_punct(PunctuationId::RParen, "')'");
        } else {
            self.start(NodeKind::VariableDefinition);
            self.bump();
            self.parse_id_list();
        }
        self.parse_variable_tail();
        self.builder.finish_node();
    }

    /// `: type`, `: type = expr`, or `= expr`, then `;`.
    fn parse_variable_tail(&mut self) {
        if self.at_punct(PunctuationId::Colon) {
            self.bump();
            self.parse_typespec();
            if self.at_operator(OperatorId::Eq) {
                self.bump();
                self.parse_expression();
            }
        } else if self.at_operator(OperatorId::Eq) {
            self.bump();
            self.parse_expression();
        } else {
            self.missing("':' or '='");
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");
    }

    fn parse_id_list(&mut self) {
        self.start(NodeKind::IdList);
        self.expect_identifier("a name");
        while self.at_punct(PunctuationId::Comma) {
            self.bump();
            self.expect_identifier("a name");
        }
        self.builder.finish_node();
    }

    fn parse_constant_definition(&mut self) {
        self.start(NodeKind::ConstantDefinition);
        self.bump();
        self.expect_identifier("a constant name");
        if self.at_punct(PunctuationId::Colon) {
            self.bump();
            self.parse_typespec();
        }
        self.expect_operator(OperatorId::Eq, "'='");
        self.parse_expression();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    fn parse_type_definition(&mut self) {
        self.start(NodeKind::TypeDefinition);
        self.bump();
        self.expect_identifier("a type name");
        self.expect_operator(OperatorId::Eq, "'='");
        self.parse_typespec();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    /// `enum type { a, b, c }` — no trailing semicolon.
    fn parse_enum_definition(&mut self) {
        self.start(NodeKind::EnumDefinition);
        self.bump();
        self.parse_typespec();
        self.expect_punct(PunctuationId::LBrace, "'{'");
        self.parse_id_list();
        self.expect_punct(PunctuationId::RBrace, "'}'");
        self.builder.finish_node();
    }

    fn parse_implements_declaration(&mut self) {
        self.start(NodeKind::ImplementsDeclaration);
        self.bump();
        self.parse_typespec();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.builder.finish_node();
    }

    /// `# word expr?`. The trailing expression is optional and greedy: it is
    /// parsed whenever the next token can start one.
    fn parse_pragma(&mut self) {
        self.start(NodeKind::Pragma);
        self.bump();
        if self.peek() == TokenKind::Identifier && PRAGMA_WORDS.contains(&self.peek_text()) {
            self.bump();
        } else {
            let span = Span::empty(self.peek_span().start);
            self.diagnostics.push(
                Diagnostic::syntax("expected a pragma word".into(), span)
                    .with_expected(&["'echo'", "'expect'", "'meta'", "'xml'"]),
            );
        }
        if self.at_expression_start() {
            self.parse_expression();
        }
        self.builder.finish_node();
    }

    /// A function-ish body: a braced scope or a lone `;` forward declaration.
    fn parse_body(&mut self) {
        if self.at_punct(PunctuationId::LBrace) {
            self.parse_scope();
        } else if self.at_punct(PunctuationId::Semicolon) {
            self.bump();
        } else {
            self.missing("'{' or ';'");
        }
    }
}
