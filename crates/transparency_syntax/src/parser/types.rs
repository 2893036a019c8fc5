// Type grammar: typespec, typeunit forms, type tuples, ranks, signatures.

impl<'a> Parser<'a> {
    /// `< namedtypespec, ... >`. In type position the angle brackets are
    /// unconditional delimiters; no relational reading exists here.
    fn parse_typetuple(&mut self) {
        self.start(NodeKind::TypeTuple);
        self.expect_operator(OperatorId::Lt, "'<'");
        if !self.at_operator(OperatorId::Gt) && !self.at_eof() {
            self.parse_namedtypespec();
            while self.at_punct(PunctuationId::Comma) {
                self.bump();
                self.parse_namedtypespec();
            }
        }
        self.expect_operator(OperatorId::Gt, "'>'");
        self.builder.finish_node();
    }

    /// A type with an optional trailing parameter name: `int count`.
    fn parse_namedtypespec(&mut self) {
        self.start(NodeKind::NamedTypeSpec);
        self.parse_typespec();
        if self.peek() == TokenKind::Identifier {
            self.bump();
        }
        self.builder.finish_node();
    }

    /// A full type: qualified (`shared`/`const`), a type unit, or a type unit
    /// with an array, port, or sum suffix.
    fn parse_typespec(&mut self) {
        if self.at_keyword(KeywordId::Shared) || self.at_keyword(KeywordId::Const) {
            self.start(NodeKind::TypeSpec);
            self.bump();
            self.parse_typespec();
            self.builder.finish_node();
            return;
        }

        let cp = self.checkpoint();
        self.parse_typeunit();
        loop {
            if self.at_punct(PunctuationId::LBracket) {
                // Array dimensions: `int[3]`, `float64[n, m]`.
                self.builder.start_node_at(cp, NodeKind::TypeSpec);
                self.parse_bracket_expression();
                self.builder.finish_node();
            } else if self.at_punct(PunctuationId::LArrow) {
                // Port construction: `wire<int> <- <int>`.
                self.builder.start_node_at(cp, NodeKind::TypeSpec);
                self.bump();
                self.parse_typetuple();
                self.builder.finish_node();
            } else if self.at_operator(OperatorId::Plus) {
                // Sum type: `int + string`.
                self.builder.start_node_at(cp, NodeKind::TypeSpec);
                self.bump();
                self.parse_typespec();
                self.builder.finish_node();
                break;
            } else {
                break;
            }
        }
    }

    fn parse_typeunit(&mut self) {
        match self.peek() {
            TokenKind::Identifier => self.bump(),
            TokenKind::Keyword(k) if keywords::is_simple_type(k) => {
                self.start(NodeKind::SimpleType);
                self.bump();
                self.builder.finish_node();
            }
            TokenKind::Keyword(k) if keywords::is_container(k) => {
                self.start(NodeKind::ElementType);
                self.bump();
                self.parse_typetuple();
                self.builder.finish_node();
            }
            TokenKind::Keyword(k) if keywords::is_keyval(k) => {
                self.start(NodeKind::KeyvalType);
                self.bump();
                self.parse_typetuple();
                self.expect_keyword(KeywordId::To, "'to'");
                self.parse_typetuple();
                self.builder.finish_node();
            }
            TokenKind::Keyword(KeywordId::Tensor) => {
                self.start(NodeKind::TensorType);
                self.bump();
                self.parse_rank();
                self.parse_typetuple();
                self.builder.finish_node();
            }
            TokenKind::Keyword(KeywordId::Trigger) => {
                self.start(NodeKind::TriggerType);
                self.bump();
                if self.at_keyword(KeywordId::In) || self.at_keyword(KeywordId::Out) {
                    self.bump();
                } else {
                    self.missing("'in' or 'out'");
                }
                self.parse_typetuple();
                self.builder.finish_node();
            }
            TokenKind::Punct(PunctuationId::LBracket) => self.parse_signature_type(),
            TokenKind::Punct(PunctuationId::LBrace) | TokenKind::Operator(OperatorId::Lt) => {
                // rank_tuple: `{2}<int>` or a bare nested tuple `<int, int>`.
                self.start(NodeKind::RankTuple);
                if self.at_punct(PunctuationId::LBrace) {
                    self.parse_rank();
                }
                self.parse_typetuple();
                self.builder.finish_node();
            }
            _ => self.missing_node("a type", &["identifier", "type keyword", "'<'", "'['", "'{'"]),
        }
    }

    /// `{ intlit }` tensor/tuple rank.
    fn parse_rank(&mut self) {
        self.start(NodeKind::Rank);
        self.expect_punct(PunctuationId::LBrace, "'{'");
        self.expect(TokenKind::Number, "integer literal");
        self.expect_punct(PunctuationId::RBrace, "'}'");
        self.builder.finish_node();
    }

    /// `[ name: type, ... ]` structural interface type.
    fn parse_signature_type(&mut self) {
        self.start(NodeKind::SignatureType);
        self.expect_punct(PunctuationId::LBracket, "'['");
        if !self.at_punct(PunctuationId::RBracket) && !self.at_eof() {
            self.parse_method_signature();
            while self.at_punct(PunctuationId::Comma) {
                self.bump();
                self.parse_method_signature();
            }
        }
        self.expect_punct(PunctuationId::RBracket, "']'");
        self.builder.finish_node();
    }

    fn parse_method_signature(&mut self) {
        self.start(NodeKind::MethodSignature);
        self.expect_identifier("a method name");
        self.expect_punct(PunctuationId::Colon, "':'");
        self.parse_typespec();
        self.builder.finish_node();
    }
}
