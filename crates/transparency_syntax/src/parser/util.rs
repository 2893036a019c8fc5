// Predictive scans and small classification helpers.

impl<'a> Parser<'a> {
    /// Decide, without consuming anything, whether `<` at the cursor opens a
    /// well-formed type tuple.
    ///
    /// Linear scan over significant tokens: angle depth plus delimiter depths
    /// for `()`, `[]`, `{}`. Outside nested delimiters only type-position
    /// tokens are admitted, so `a < b && c > d` stays relational. The scan
    /// never crosses `;` or `Eof`, keeping it local to the current statement.
    fn scan_typetuple(&self) -> bool {
        let tokens = self.tokens();
        let mut i = self.sig_index(0);
        debug_assert!(tokens[i].kind.is_operator(OperatorId::Lt));
        let mut angle = 0usize;
        let (mut paren, mut bracket, mut brace) = (0usize, 0usize, 0usize);
        loop {
            let kind = tokens[i].kind;
            i += 1;
            if kind.is_trivia() {
                continue;
            }
            if kind == TokenKind::Eof {
                return false;
            }
            if paren + bracket + brace > 0 {
                // Inside array dimensions, ranks, or signature types arbitrary
                // expression tokens may appear; only balance the delimiters.
                match kind {
                    TokenKind::Punct(PunctuationId::LParen) => paren += 1,
                    TokenKind::Punct(PunctuationId::RParen) => {
                        if paren == 0 {
                            return false;
                        }
                        paren -= 1;
                    }
                    TokenKind::Punct(PunctuationId::LBracket) => bracket += 1,
                    TokenKind::Punct(PunctuationId::RBracket) => {
                        if bracket == 0 {
                            return false;
                        }
                        bracket -= 1;
                    }
                    TokenKind::Punct(PunctuationId::LBrace) => brace += 1,
                    TokenKind::Punct(PunctuationId::RBrace) => {
                        if brace == 0 {
                            return false;
                        }
                        brace -= 1;
                    }
                    TokenKind::Punct(PunctuationId::Semicolon) => return false,
                    _ => {}
                }
            } else {
                match kind {
                    TokenKind::Operator(OperatorId::Lt) => angle += 1,
                    TokenKind::Operator(OperatorId::Gt) => {
                        angle -= 1;
                        if angle == 0 {
                            return true;
                        }
                    }
                    TokenKind::Operator(OperatorId::Plus) => {}
                    TokenKind::Punct(PunctuationId::Comma)
                    | TokenKind::Punct(PunctuationId::Colon)
                    | TokenKind::Punct(PunctuationId::LArrow) => {}
                    TokenKind::Punct(PunctuationId::LBracket) => bracket += 1,
                    TokenKind::Punct(PunctuationId::LBrace) => brace += 1,
                    TokenKind::Identifier => {}
                    TokenKind::Keyword(k) if type_position_keyword(k) => {}
                    _ => return false,
                }
            }
        }
    }

    /// Can the next significant token begin an expression?
    ///
    /// Used by pragmas (whose trailing expression is optional and greedy) and
    /// by optional clauses in `for` headers and `return`.
    fn at_expression_start(&self) -> bool {
        match self.peek() {
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Symbol
            | TokenKind::Codepoint
            | TokenKind::Regex
            | TokenKind::RawString
            | TokenKind::IoLiteral
            | TokenKind::IoFlag(_)
            | TokenKind::Builtin(_) => true,
            TokenKind::Keyword(k) => matches!(
                k,
                KeywordId::True | KeywordId::False | KeywordId::Share | KeywordId::Unshare
            ),
            TokenKind::Punct(p) => matches!(
                p,
                PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace
            ),
            TokenKind::Operator(OperatorId::Pipe) => true,
            TokenKind::Operator(OperatorId::Lt) => self.scan_typetuple(),
            TokenKind::Operator(op) => operators::is_prefix(op),
            _ => false,
        }
    }

    /// Classify an identifier at the cursor as a ctor/dtor/fire head.
    ///
    /// These members have no introducing keyword; the final `::` segment of the
    /// (possibly scoped) name decides.
    fn special_member_kind(&self) -> Option<NodeKind> {
        if self.peek() != TokenKind::Identifier {
            return None;
        }
        let text = self.peek_text();
        let last = text.rsplit("::").next().unwrap_or(text);
        match last {
            "ctor" => Some(NodeKind::CtorDefinition),
            "dtor" => Some(NodeKind::DtorDefinition),
            "fire" => Some(NodeKind::FireDefinition),
            _ => None,
        }
    }
}

/// Keywords admissible between angle brackets during the predictive scan.
fn type_position_keyword(k: KeywordId) -> bool {
    keywords::is_simple_type(k)
        || keywords::is_container(k)
        || keywords::is_keyval(k)
        || matches!(
            k,
            KeywordId::Tensor
                | KeywordId::Trigger
                | KeywordId::To
                | KeywordId::Shared
                | KeywordId::Const
        )
}
