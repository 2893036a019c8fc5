// Parser state and the top-level item loop.

/// Recursive-descent parser over a lexed token vector.
///
/// The parser owns the [`TreeBuilder`] and walks the token vector by index;
/// trivia tokens are flushed into whichever node is open when the next
/// significant token is consumed, so comment attachment is a pure function of
/// the token stream. That property is what makes incremental reuse safe.
pub struct Parser<'a> {
    source: &'a str,
    builder: TreeBuilder,
    /// Index of the next unconsumed token, trivia included.
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// Depth of enclosing cardinality bars; suppresses infix `|` while non-zero.
    no_bitor: u32,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, tokens: Vec<Token>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            source,
            builder: TreeBuilder::new(tokens),
            pos: 0,
            diagnostics,
            no_bitor: 0,
        }
    }

    /// Resume over a pre-seeded builder, used by the incremental reparser after
    /// it has spliced reused prefix items into an open `source_file` node.
    pub(crate) fn resume(
        source: &'a str,
        builder: TreeBuilder,
        pos: usize,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            source,
            builder,
            pos,
            diagnostics,
            no_bitor: 0,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// True once only trivia and `Eof` remain.
    pub(crate) fn at_end(&self) -> bool {
        self.at_eof()
    }

    /// Parse exactly one top-level item. Incremental driver entry.
    pub(crate) fn parse_one(&mut self) {
        self.parse_item(true);
    }

    /// Hand the builder and collected diagnostics back to the incremental
    /// driver so it can splice reused suffix items.
    pub(crate) fn into_parts(self) -> (TreeBuilder, Vec<Diagnostic>) {
        (self.builder, self.diagnostics)
    }

    /// Parse a whole source file: class-scope definitions and pragmas.
    pub(crate) fn parse_source_file(mut self) -> Tree {
        self.builder.start_node(NodeKind::SourceFile);
        while !self.at_eof() {
            self.parse_item(true);
        }
        self.finish_file()
    }

    /// Parse remaining items and close the file. Shared by the full parse and
    /// the incremental path when no suffix could be reused.
    pub(crate) fn finish_file(mut self) -> Tree {
        while !self.at_eof() {
            self.parse_item(true);
        }
        self.flush_trivia();
        // Eof is a real token and a child of the root, so the tree tiles the
        // source even for an empty file.
        let eof = TokenId(self.pos as u32);
        self.builder.push_token(eof);
        self.builder.finish_node();
        self.builder
            .finish(Arc::from(self.source), self.diagnostics)
    }

    /// One top-level or class-scope item. `allow_pragma` is true only at file
    /// scope; class bodies reject `#`.
    pub(crate) fn parse_item(&mut self, allow_pragma: bool) {
        match self.peek() {
            TokenKind::Punct(PunctuationId::Hash) if allow_pragma => self.parse_pragma(),
            TokenKind::Keyword(KeywordId::Function) | TokenKind::Keyword(KeywordId::Entry) => {
                self.parse_function_definition()
            }
            TokenKind::Keyword(KeywordId::Var) | TokenKind::Keyword(KeywordId::Ref) => {
                self.parse_variable_or_comprehension()
            }
            TokenKind::Keyword(KeywordId::Type) => self.parse_type_definition(),
            TokenKind::Keyword(KeywordId::Constant) => self.parse_constant_definition(),
            TokenKind::Keyword(KeywordId::Enum) => self.parse_enum_definition(),
            TokenKind::Keyword(KeywordId::Class) | TokenKind::Keyword(KeywordId::Node) => {
                self.parse_class_definition()
            }
            TokenKind::Keyword(KeywordId::Method) => self.parse_method_definition(),
            TokenKind::Keyword(KeywordId::Circuit) => self.parse_circuit_definition(),
            TokenKind::Keyword(KeywordId::Implements) => self.parse_implements_declaration(),
            TokenKind::Punct(PunctuationId::Semicolon) => self.bump(),
            TokenKind::Identifier => match self.special_member_kind() {
                Some(kind) => self.parse_special_member(kind),
                None => self.recover_item(allow_pragma),
            },
            _ => self.recover_item(allow_pragma),
        }
    }

    /// Item-level recovery: wrap the unexpected run in an error node and stop
    /// at the next plausible item start.
    fn recover_item(&mut self, allow_pragma: bool) {
        let span = self.peek_span();
        let diag = Diagnostic::syntax(
            format!("expected a definition{}", if allow_pragma { " or pragma" } else { "" }),
            span,
        )
        .with_expected(&item_start_names(allow_pragma));
        self.diagnostics.push(diag);

        self.start(NodeKind::Error);
        // Always consume at least one token so the loop makes progress.
        self.bump();
        while !self.at_eof() && !self.at_item_start(allow_pragma) {
            if self.peek().is_punct(PunctuationId::Semicolon) {
                self.bump();
                break;
            }
            self.bump();
        }
        self.builder.finish_node();
    }

    fn at_item_start(&self, allow_pragma: bool) -> bool {
        match self.peek() {
            TokenKind::Punct(PunctuationId::Hash) => allow_pragma,
            TokenKind::Keyword(k) => matches!(
                k,
                KeywordId::Function
                    | KeywordId::Entry
                    | KeywordId::Var
                    | KeywordId::Ref
                    | KeywordId::Type
                    | KeywordId::Constant
                    | KeywordId::Enum
                    | KeywordId::Class
                    | KeywordId::Node
                    | KeywordId::Method
                    | KeywordId::Circuit
                    | KeywordId::Implements
            ),
            TokenKind::Identifier => self.special_member_kind().is_some(),
            _ => false,
        }
    }
}

fn item_start_names(allow_pragma: bool) -> Vec<&'static str> {
    let mut names = vec![
        "'function'",
        "'entry'",
        "'var'",
        "'ref'",
        "'type'",
        "'constant'",
        "'enum'",
        "'class'",
        "'node'",
        "'method'",
        "'circuit'",
        "'implements'",
    ];
    if allow_pragma {
        names.push("'#'");
    }
    names
}
