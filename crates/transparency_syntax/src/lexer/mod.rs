//! Lexer for the Transparency programming language
//!
//! Handles tokenization including:
//! - Scoped (`Foo::Bar::baz`) and guillemet-quoted (`«...»`) identifiers as single tokens
//! - The closed `@`-word sets (builtins, IO flags, the `@internal` keyword)
//! - Literal forms with non-ASCII delimiters (regex `‹...›`, raw string `“...”`)
//! - IO channel markers `<:...:`
//! - Trivia (whitespace, `//` and `/* */` comments) retained as tokens
//!
//! Every byte of the input is covered by exactly one token; lexing never fails.
//! Unrecognized bytes and unterminated literals produce `Error`/literal tokens
//! plus `Lex` diagnostics.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::cst::Span;
use crate::diagnostics::Diagnostic;
use transparency_core::lang::{builtins, ioflags, keywords, operators::OperatorId, punctuation::PunctuationId};

/// Lexer for Transparency source code.
///
/// The scanner is suffix-deterministic: restarting it at any token start
/// reproduces the rest of the token stream exactly. The incremental reparser
/// relies on this to re-lex only the damaged region of an edit.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    base: usize,
    current_pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the whole source.
    pub fn new(source: &'a str) -> Self {
        Self::new_at(source, 0)
    }

    /// Create a lexer that starts scanning at `start` (a known token boundary).
    pub fn new_at(source: &'a str, start: usize) -> Self {
        Self {
            source,
            chars: source[start..].char_indices().peekable(),
            base: start,
            current_pos: start,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize to end of input. The stream ends with a zero-length `Eof` token.
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    /// Diagnostics collected so far (used by the incremental re-lex loop).
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_second(&self) -> Option<char> {
        self.chars.clone().nth(1).map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = self.base + pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, Span::new(start, self.current_pos))
    }

    fn op(&self, id: OperatorId, start: usize) -> Token {
        self.token(TokenKind::Operator(id), start)
    }

    fn punct(&self, id: PunctuationId, start: usize) -> Token {
        self.token(TokenKind::Punct(id), start)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Scan and return the next token. Returns `Eof` (zero-length) at end of input.
    pub fn next_token(&mut self) -> Token {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return self.token(TokenKind::Eof, start);
        };

        match c {
            // Trivia: one token per whitespace run
            c if c.is_whitespace() => {
                while let Some(c) = self.peek() {
                    if c.is_whitespace() {
                        self.advance();
                    } else {
                        break;
                    }
                }
                self.token(TokenKind::Whitespace, start)
            }

            '/' => self.scan_slash(start),

            // Identifiers, keywords, scoped chains
            c if is_ident_start(c) => self.scan_identifier(start),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // @-words: the assertion keyword, IO flags, builtins
            '@' => self.scan_at_word(start),

            // Quoted literal forms
            '"' => self.scan_delimited(start, '"', true, TokenKind::String, "string literal"),
            '`' => self.scan_delimited(start, '`', true, TokenKind::Symbol, "symbol literal"),
            '\'' => self.scan_delimited(start, '\'', true, TokenKind::Codepoint, "codepoint literal"),
            '\u{2039}' => self.scan_delimited(start, '\u{203A}', false, TokenKind::Regex, "regex literal"),
            '\u{201C}' => self.scan_delimited(start, '\u{201D}', false, TokenKind::RawString, "raw string literal"),
            '\u{00AB}' => self.scan_quoted_identifier(start),

            // `\\` zip/join, `\u`+hex codepoint
            '\\' => {
                if self.match_char('\\') {
                    self.op(OperatorId::ZipJoin, start)
                } else if self.match_char('u') {
                    let mut digits = 0usize;
                    while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                        self.advance();
                        digits += 1;
                    }
                    if digits == 0 {
                        self.diagnostics.push(Diagnostic::lex(
                            "expected hex digits after '\\u'".to_string(),
                            Span::new(start, self.current_pos),
                        ));
                        self.token(TokenKind::Error, start)
                    } else {
                        self.token(TokenKind::Codepoint, start)
                    }
                } else {
                    self.unexpected(start, '\\')
                }
            }

            // Angle-family: io literal, dataflow shift, comparison, port arrow
            '<' => {
                if self.match_char(':') {
                    self.scan_io_literal(start)
                } else if self.match_char('~') {
                    if self.match_char('=') {
                        self.op(OperatorId::FlowLeftEq, start)
                    } else {
                        self.op(OperatorId::FlowLeft, start)
                    }
                } else if self.match_char('=') {
                    self.op(OperatorId::LtEq, start)
                } else if self.match_char('-') {
                    self.punct(PunctuationId::LArrow, start)
                } else {
                    self.op(OperatorId::Lt, start)
                }
            }
            '~' => {
                if self.match_char('>') {
                    if self.match_char('=') {
                        self.op(OperatorId::FlowRightEq, start)
                    } else {
                        self.op(OperatorId::FlowRight, start)
                    }
                } else if self.match_char('=') {
                    self.op(OperatorId::TildeEq, start)
                } else {
                    self.op(OperatorId::Tilde, start)
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.op(OperatorId::GtEq, start)
                } else {
                    self.op(OperatorId::Gt, start)
                }
            }

            '=' => {
                if self.match_char('=') {
                    self.op(OperatorId::EqEq, start)
                } else {
                    self.op(OperatorId::Eq, start)
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.op(OperatorId::NotEq, start)
                } else {
                    self.op(OperatorId::Bang, start)
                }
            }
            '+' => {
                if self.match_char('+') {
                    self.op(OperatorId::PlusPlus, start)
                } else if self.match_char('=') {
                    self.op(OperatorId::PlusEq, start)
                } else {
                    self.op(OperatorId::Plus, start)
                }
            }
            '-' => {
                if self.match_char('-') {
                    self.op(OperatorId::MinusMinus, start)
                } else if self.match_char('=') {
                    self.op(OperatorId::MinusEq, start)
                } else if self.match_char('>') {
                    self.punct(PunctuationId::Arrow, start)
                } else {
                    self.op(OperatorId::Minus, start)
                }
            }
            '*' => {
                if self.match_char('=') {
                    self.op(OperatorId::StarEq, start)
                } else {
                    self.op(OperatorId::Star, start)
                }
            }
            '%' => {
                if self.match_char('=') {
                    self.op(OperatorId::PercentEq, start)
                } else {
                    self.op(OperatorId::Percent, start)
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.op(OperatorId::PipePipe, start)
                } else if self.match_char('=') {
                    self.op(OperatorId::PipeEq, start)
                } else {
                    self.op(OperatorId::Pipe, start)
                }
            }
            '&' => {
                if self.match_char('&') {
                    self.op(OperatorId::AmpAmp, start)
                } else if self.match_char('=') {
                    self.op(OperatorId::AmpEq, start)
                } else {
                    self.op(OperatorId::Amp, start)
                }
            }
            '^' => {
                if self.match_char('=') {
                    self.op(OperatorId::CaretEq, start)
                } else {
                    self.op(OperatorId::Caret, start)
                }
            }
            '?' => {
                if self.match_char('?') {
                    self.punct(PunctuationId::QuestionQuestion, start)
                } else {
                    self.punct(PunctuationId::Question, start)
                }
            }

            '(' => self.punct(PunctuationId::LParen, start),
            ')' => self.punct(PunctuationId::RParen, start),
            '[' => self.punct(PunctuationId::LBracket, start),
            ']' => self.punct(PunctuationId::RBracket, start),
            '{' => self.punct(PunctuationId::LBrace, start),
            '}' => self.punct(PunctuationId::RBrace, start),
            ',' => self.punct(PunctuationId::Comma, start),
            ';' => self.punct(PunctuationId::Semicolon, start),
            ':' => self.punct(PunctuationId::Colon, start),
            '.' => self.punct(PunctuationId::Dot, start),
            '#' => self.punct(PunctuationId::Hash, start),

            c => self.unexpected(start, c),
        }
    }

    fn unexpected(&mut self, start: usize, c: char) -> Token {
        self.diagnostics.push(Diagnostic::lex(
            format!("Unexpected character '{}'", c),
            Span::new(start, self.current_pos),
        ));
        self.token(TokenKind::Error, start)
    }

    // ========================================================================
    // Comments and slash operators
    // ========================================================================

    /// Scan `//`, `/* */`, `/=`, `/`.
    fn scan_slash(&mut self, start: usize) -> Token {
        if self.match_char('/') {
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                self.advance();
            }
            self.token(TokenKind::LineComment, start)
        } else if self.match_char('*') {
            // Non-nesting block comment.
            loop {
                match self.advance() {
                    Some('*') if self.peek() == Some('/') => {
                        self.advance();
                        break;
                    }
                    Some(_) => {}
                    None => {
                        self.diagnostics.push(Diagnostic::lex(
                            "unterminated block comment".to_string(),
                            Span::new(start, self.current_pos),
                        ));
                        break;
                    }
                }
            }
            self.token(TokenKind::BlockComment, start)
        } else if self.match_char('=') {
            self.op(OperatorId::SlashEq, start)
        } else {
            self.op(OperatorId::Slash, start)
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    /// Scan an identifier or keyword. A whole `::`-chain (`Foo::Bar::ctor`) is
    /// one token; the parser inspects the final segment for `ctor`/`dtor`/`fire`.
    fn scan_identifier(&mut self, start: usize) -> Token {
        loop {
            while self.peek().is_some_and(is_ident_continue) {
                self.advance();
            }
            // Absorb `::segment` continuations.
            if self.peek() == Some(':') && self.peek_second() == Some(':') {
                let after = {
                    let mut it = self.chars.clone();
                    it.nth(1);
                    it.next().map(|(_, c)| c)
                };
                if after.is_some_and(is_ident_continue) {
                    self.advance();
                    self.advance();
                    continue;
                }
            }
            break;
        }

        let spelling = &self.source[start..self.current_pos];
        if let Some(id) = keywords::from_str(spelling) {
            self.token(TokenKind::Keyword(id), start)
        } else {
            self.token(TokenKind::Identifier, start)
        }
    }

    /// Scan `«...»`: arbitrary non-newline content as a single name.
    fn scan_quoted_identifier(&mut self, start: usize) -> Token {
        loop {
            match self.peek() {
                Some('\u{00BB}') => {
                    self.advance();
                    return self.token(TokenKind::Identifier, start);
                }
                Some('\n') | None => {
                    self.diagnostics.push(Diagnostic::lex(
                        "unterminated quoted identifier".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return self.token(TokenKind::Error, start);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a number: digit, then a run of hex digits / `x` / `.` / `_`, then an
    /// optional size suffix. Classification only; value interpretation is a
    /// downstream concern.
    fn scan_number(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(is_number_continue) {
            self.advance();
        }
        if self.peek().is_some_and(|c| matches!(c, 'u' | 'U' | 'z' | 'Z' | 's' | 'S')) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        self.token(TokenKind::Number, start)
    }

    /// Scan a delimited literal. `escapes` enables backslash escapes; raw forms
    /// (regex, raw string) take content verbatim and may span lines. An
    /// unterminated literal runs to end of input and is flagged, never dropped.
    fn scan_delimited(
        &mut self,
        start: usize,
        close: char,
        escapes: bool,
        kind: TokenKind,
        what: &str,
    ) -> Token {
        loop {
            match self.advance() {
                Some(c) if c == close => return self.token(kind, start),
                Some('\\') if escapes => {
                    self.advance();
                }
                Some(_) => {}
                None => {
                    self.diagnostics.push(Diagnostic::lex(
                        format!("unterminated {}", what),
                        Span::new(start, self.current_pos),
                    ));
                    return self.token(kind, start);
                }
            }
        }
    }

    /// Scan `<:...:`, the dataflow channel marker. The leading `<:` is already consumed.
    fn scan_io_literal(&mut self, start: usize) -> Token {
        loop {
            match self.advance() {
                Some(':') => return self.token(TokenKind::IoLiteral, start),
                Some(_) => {}
                None => {
                    self.diagnostics.push(Diagnostic::lex(
                        "unterminated io literal".to_string(),
                        Span::new(start, self.current_pos),
                    ));
                    return self.token(TokenKind::IoLiteral, start);
                }
            }
        }
    }

    /// Scan an `@`-word: the `@internal` keyword, an IO flag, or a builtin.
    /// The keyword registry wins, then IO flags, then builtins (longest match is
    /// automatic because the whole word is scanned first).
    fn scan_at_word(&mut self, start: usize) -> Token {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keywords::from_str(spelling) {
            return self.token(TokenKind::Keyword(id), start);
        }
        if let Some(id) = ioflags::from_str(spelling) {
            return self.token(TokenKind::IoFlag(id), start);
        }
        if let Some(id) = builtins::classify(spelling) {
            return self.token(TokenKind::Builtin(id), start);
        }

        self.diagnostics.push(Diagnostic::lex(
            format!("unknown builtin or io flag '{}'", spelling),
            Span::new(start, self.current_pos),
        ));
        self.token(TokenKind::Error, start)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier (or an `@`-word).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Check if a character can continue a numeric literal's digit run.
fn is_number_continue(c: char) -> bool {
    c.is_ascii_hexdigit() || matches!(c, 'x' | '.' | '_')
}

/// Convenience function to lex a source string.
///
/// Never fails: unrecognized input becomes `Error` tokens with `Lex` diagnostics.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use transparency_core::lang::builtins::BuiltinId;
    use transparency_core::lang::ioflags::IoFlagId;
    use transparency_core::lang::keywords::KeywordId;
    use transparency_core::lang::operators;
    use transparency_core::lang::punctuation;

    fn significant(source: &str) -> Vec<Token> {
        let (tokens, _) = lex(source);
        tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = significant(k.canonical);
            assert_eq!(tokens.len(), 2, "token + EOF for keyword {:?}", k.id);
            assert!(tokens[0].kind.is_keyword(k.id), "{:?}", k.canonical);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = significant(o.spelling);
            assert_eq!(tokens.len(), 2, "token + EOF for operator {:?}", o.spelling);
            assert!(tokens[0].kind.is_operator(o.id), "{:?}", o.spelling);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = significant(p.canonical);
            assert_eq!(tokens.len(), 2, "token + EOF for punctuation {:?}", p.canonical);
            assert!(tokens[0].kind.is_punct(p.id), "{:?}", p.canonical);
        }
    }

    #[test]
    fn test_ioflag_registry_parity() {
        for f in ioflags::IO_FLAGS {
            let tokens = significant(f.canonical);
            assert_eq!(tokens.len(), 2, "token + EOF for io flag {:?}", f.canonical);
            assert_eq!(tokens[0].kind, TokenKind::IoFlag(f.id), "{:?}", f.canonical);
        }
    }

    #[test]
    fn test_builtin_registry_parity() {
        use transparency_core::lang::builtins::{BUILTINS, BuiltinId};
        for b in BUILTINS {
            // The user-slot families need a slot character appended.
            let spelling = match b.id {
                BuiltinId::GetUser | BuiltinId::SetUser | BuiltinId::ClrUser => format!("{}7", b.canonical),
                _ => b.canonical.to_string(),
            };
            let tokens = significant(&spelling);
            assert_eq!(tokens.len(), 2, "token + EOF for builtin {:?}", spelling);
            assert_eq!(tokens[0].kind, TokenKind::Builtin(b.id), "{:?}", spelling);
        }
    }

    #[test]
    fn test_scoped_identifier_is_one_token() {
        let tokens = significant("Foo::Bar::ctor");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].span, Span::new(0, 14));
    }

    #[test]
    fn test_standalone_colons_are_not_absorbed() {
        let tokens = significant("a : b");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert!(tokens[1].kind.is_punct(PunctuationId::Colon));
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_quoted_identifier() {
        let tokens = significant("«any display text!»");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        let (_, diags) = lex("«runs off the line\nx");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_numbers() {
        for src in ["42", "0xdead_beef", "3.14", "1_000", "42u8", "7z16"] {
            let tokens = significant(src);
            assert_eq!(tokens.len(), 2, "{src}");
            assert_eq!(tokens[0].kind, TokenKind::Number, "{src}");
            assert_eq!(tokens[0].span, Span::new(0, src.len()), "{src}");
        }
    }

    #[test]
    fn test_multiline_raw_string_is_one_token() {
        let src = "“line one\nline two”";
        let tokens = significant(src);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::RawString);
        assert_eq!(tokens[0].span, Span::new(0, src.len()));
    }

    #[test]
    fn test_unterminated_regex_reaches_end_of_input() {
        let src = "‹[a-z]+";
        let (tokens, diags) = lex(src);
        let tokens: Vec<_> = tokens.into_iter().filter(|t| !t.kind.is_trivia()).collect();
        assert_eq!(tokens[0].kind, TokenKind::Regex);
        assert_eq!(tokens[0].span.end, src.len());
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("unterminated regex"));
        assert_eq!(diags[0].span, Span::new(0, src.len()));
    }

    #[test]
    fn test_io_literal() {
        let tokens = significant("<:stdin mode=fast:");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::IoLiteral);
    }

    #[test]
    fn test_at_words() {
        let tokens = significant("@internal @stdin @pop @getuserA");
        assert!(tokens[0].kind.is_keyword(KeywordId::AtInternal));
        assert_eq!(tokens[1].kind, TokenKind::IoFlag(IoFlagId::Stdin));
        assert_eq!(tokens[2].kind, TokenKind::Builtin(BuiltinId::Pop));
        assert_eq!(tokens[3].kind, TokenKind::Builtin(BuiltinId::GetUser));

        let (tokens, diags) = lex("@nosuch");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_dataflow_operators() {
        let tokens = significant("<~ ~> <~= ~>= \\\\ <- <:c: <=");
        assert!(tokens[0].kind.is_operator(OperatorId::FlowLeft));
        assert!(tokens[1].kind.is_operator(OperatorId::FlowRight));
        assert!(tokens[2].kind.is_operator(OperatorId::FlowLeftEq));
        assert!(tokens[3].kind.is_operator(OperatorId::FlowRightEq));
        assert!(tokens[4].kind.is_operator(OperatorId::ZipJoin));
        assert!(tokens[5].kind.is_punct(PunctuationId::LArrow));
        assert_eq!(tokens[6].kind, TokenKind::IoLiteral);
        assert!(tokens[7].kind.is_operator(OperatorId::LtEq));
    }

    #[test]
    fn test_codepoint_forms() {
        let tokens = significant(r"'a' '\n' \u41");
        assert_eq!(tokens[0].kind, TokenKind::Codepoint);
        assert_eq!(tokens[1].kind, TokenKind::Codepoint);
        assert_eq!(tokens[2].kind, TokenKind::Codepoint);
    }

    #[test]
    fn test_tokens_tile_input() {
        let src = "function <int> f <int a> { return a; } // done\n/* tail */";
        let (tokens, diags) = lex(src);
        assert!(diags.is_empty());
        let mut at = 0;
        for t in &tokens {
            assert_eq!(t.span.start, at);
            at = t.span.end;
        }
        assert_eq!(at, src.len());
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_restart_at_token_boundary_reproduces_suffix() {
        let src = "var x = «name» + 12; // c\nvar y = 2;";
        let (full, _) = lex(src);
        // Restart at each token start and compare the suffix.
        for (i, tok) in full.iter().enumerate() {
            let (tail, _) = Lexer::new_at(src, tok.span.start).tokenize();
            assert_eq!(&full[i..], &tail[..], "restart at {}", tok.span.start);
        }
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, diags) = lex("π");
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("Unexpected character"));
    }
}
