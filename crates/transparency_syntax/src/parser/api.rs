// Public entry point.

/// Lex and parse a complete source file.
///
/// Never fails: malformed input yields a tree with error nodes and
/// diagnostics attached.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Tree {
    let (tokens, diagnostics) = crate::lexer::lex(source);
    Parser::new(source, tokens, diagnostics).parse_source_file()
}
