// Parser tests. Structural assertions walk the finished tree; none of these
// depend on trivia placement except where that is the point.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::Element;
    use crate::diagnostics::DiagnosticKind;

    fn collect_kinds(tree: &Tree, id: crate::cst::NodeId, out: &mut Vec<(NodeKind, Span)>) {
        let data = tree.node(id);
        out.push((data.kind, data.span));
        for &child in &data.children {
            if let Element::Node(n) = child {
                collect_kinds(tree, n, out);
            }
        }
    }

    fn nodes_of(tree: &Tree, kind: NodeKind) -> Vec<Span> {
        let mut all = Vec::new();
        collect_kinds(tree, tree.root(), &mut all);
        all.into_iter().filter(|(k, _)| *k == kind).map(|(_, s)| s).collect()
    }

    fn count(tree: &Tree, kind: NodeKind) -> usize {
        nodes_of(tree, kind).len()
    }

    /// Lex and syntax diagnostics only; notes are informational.
    fn errors(tree: &Tree) -> Vec<String> {
        tree.diagnostics()
            .iter()
            .filter(|d| d.kind != DiagnosticKind::Note)
            .map(|d| d.message.clone())
            .collect()
    }

    fn notes(tree: &Tree) -> usize {
        tree.diagnostics()
            .iter()
            .filter(|d| d.kind == DiagnosticKind::Note)
            .count()
    }

    #[test]
    fn empty_file_is_a_source_file() {
        let tree = parse("");
        assert!(errors(&tree).is_empty());
        assert_eq!(tree.node(tree.root()).kind, NodeKind::SourceFile);
        // Root holds exactly the Eof token.
        assert_eq!(tree.items().len(), 1);
    }

    #[test]
    fn constant_definition_parses_clean() {
        let tree = parse("constant x = 1;");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::ConstantDefinition), 1);
        assert_eq!(nodes_of(&tree, NodeKind::ConstantDefinition)[0], Span::new(0, 15));
    }

    #[test]
    fn constant_definition_tree_shape() {
        let tree = parse("constant x = 1;");
        insta::assert_snapshot!(tree.dump(), @r#"
        source_file@0..15
          constant_definition@0..15
            keyword "constant"@0..8
            identifier "x"@9..10
            operator "="@11..12
            number "1"@13..14
            punct ";"@14..15
          eof ""@15..15
        "#);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let tree = parse("constant x = a + b * c;");
        assert!(errors(&tree).is_empty());
        let binaries = nodes_of(&tree, NodeKind::BinaryExpression);
        assert_eq!(binaries.len(), 2);
        assert!(binaries.contains(&Span::new(17, 22)), "inner b * c: {binaries:?}");
        assert!(binaries.contains(&Span::new(13, 22)), "outer sum: {binaries:?}");
    }

    #[test]
    fn infix_angle_is_always_relational() {
        let tree = parse("constant x = a < b > c;");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::BinaryExpression), 2);
        assert_eq!(count(&tree, NodeKind::TypeTuple), 0);
    }

    #[test]
    fn leading_typetuple_makes_a_cast() {
        let tree = parse("constant x = <int>(y);");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::CastExpression), 1);
        assert_eq!(count(&tree, NodeKind::TypeTuple), 1);
        assert_eq!(count(&tree, NodeKind::BinaryExpression), 0);
    }

    #[test]
    fn typetuple_then_name_then_tuple_is_a_call() {
        let tree = parse("constant x = <int> f (y);");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::CallExpression), 1);
        assert_eq!(count(&tree, NodeKind::CastExpression), 0);
    }

    #[test]
    fn closure_with_scope() {
        let tree = parse("constant x = <int> <- <int a> { return a; };");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::Closure), 1);
        assert_eq!(count(&tree, NodeKind::ReturnStatement), 1);
        assert_eq!(count(&tree, NodeKind::TypeTuple), 2);
    }

    #[test]
    fn function_closure_reference_emits_a_note() {
        let tree = parse("constant x = <int> sum <int>;");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::Closure), 1);
        assert_eq!(notes(&tree), 1);
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        let tree = parse("entry <> main <> { if (a) if (b) x; else y; }");
        let ifs = nodes_of(&tree, NodeKind::IfStatement);
        assert_eq!(ifs.len(), 2);
        // Else belongs to the inner if, so both statements end together.
        assert_eq!(ifs[0].end, ifs[1].end);
        let errs = errors(&tree);
        assert_eq!(errs.len(), 1, "{errs:?}");
        assert!(errs[0].contains("nested unbraced 'if'"));
    }

    #[test]
    fn missing_expression_yields_a_local_error_node() {
        let tree = parse("entry <> main <> { x = ; y = 1; }");
        let errs = nodes_of(&tree, NodeKind::Error);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].is_empty());
        assert_eq!(errs[0].start, 23);
        // The damage does not leak into the next statement.
        assert_eq!(count(&tree, NodeKind::Assignment), 2);
        assert_eq!(errors(&tree).len(), 1);
    }

    #[test]
    fn pragma_expression_is_greedy() {
        let tree = parse("# echo 1 + 2\nconstant x = 3;");
        assert!(errors(&tree).is_empty());
        let pragmas = nodes_of(&tree, NodeKind::Pragma);
        assert_eq!(pragmas.len(), 1);
        assert_eq!(pragmas[0], Span::new(0, 12));
        assert_eq!(count(&tree, NodeKind::ConstantDefinition), 1);
    }

    #[test]
    fn pragma_without_expression() {
        let tree = parse("# meta\nconstant x = 3;");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::Pragma), 1);
        assert_eq!(count(&tree, NodeKind::ConstantDefinition), 1);
    }

    #[test]
    fn class_with_members() {
        let source = "class Point : common Base {\n\
                      method! x: int;\n\
                      method <int> norm <> { return x; }\n\
                      Point::ctor <int x0> : x(x0) { ; }\n\
                      Point::dtor { ; }\n\
                      }\n";
        let tree = parse(source);
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::ClassDefinition), 1);
        assert_eq!(count(&tree, NodeKind::BaseSpecifier), 1);
        assert_eq!(count(&tree, NodeKind::MethodDefinition), 2);
        assert_eq!(count(&tree, NodeKind::CtorDefinition), 1);
        assert_eq!(count(&tree, NodeKind::CtorInit), 1);
        assert_eq!(count(&tree, NodeKind::DtorDefinition), 1);
    }

    #[test]
    fn variable_and_comprehension_forms() {
        let tree = parse("var a, b : int = 1;\nref (c, d) = make();\n");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::VariableDefinition), 1);
        assert_eq!(count(&tree, NodeKind::ComprehensionDefinition), 1);
        assert_eq!(count(&tree, NodeKind::IdList), 2);
        assert_eq!(count(&tree, NodeKind::CallExpression), 1);
    }

    #[test]
    fn classic_for_and_for_in() {
        let tree = parse("entry <> main <> { for (var i = 0; i < 10; ++i) { ; } for x in xs do ; }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::ForStatement), 1);
        assert_eq!(count(&tree, NodeKind::ForInStatement), 1);
        assert_eq!(count(&tree, NodeKind::Increment), 1);
        // The loop condition's `<` is relational, not a type tuple.
        assert_eq!(count(&tree, NodeKind::BinaryExpression), 1);
    }

    #[test]
    fn switch_with_case_labels() {
        let tree = parse("entry <> main <> { switch (x) { case 1: y = 1; default: y = 2; } }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::SwitchStatement), 1);
        assert_eq!(count(&tree, NodeKind::LabeledStatement), 2);
        assert_eq!(count(&tree, NodeKind::Assignment), 2);
    }

    #[test]
    fn cardinality_suppresses_bitwise_or() {
        let tree = parse("constant x = |a| + |b|;");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::CardExpression), 2);
        assert_eq!(count(&tree, NodeKind::BinaryExpression), 1);
    }

    #[test]
    fn parenthesized_bitwise_or_still_works() {
        let tree = parse("constant x = (a | b);");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::BinaryExpression), 1);
        assert_eq!(count(&tree, NodeKind::CardExpression), 0);
    }

    #[test]
    fn method_invocation_with_type_arguments() {
        let tree = parse("constant x = v-><int>sum;");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::MethodExpression), 1);
        assert_eq!(count(&tree, NodeKind::TypeTuple), 1);
        assert_eq!(notes(&tree), 1);
    }

    #[test]
    fn input_and_output_expressions() {
        let tree = parse("entry <> main <> { var x : int = <int> <:stdin: src; x <:out: sink; }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::InputExpression), 1);
        assert_eq!(count(&tree, NodeKind::OutputExpression), 1);
    }

    #[test]
    fn choose_expression_arms() {
        let tree = parse("constant x = y ?? { 1: a, b };");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::ChooseExpression), 1);
    }

    #[test]
    fn type_forms() {
        let tree = parse(
            "type t = vector<int>;\n\
             type u = map<string> to <int>;\n\
             type v = tensor {2} <float64>;\n\
             type w = shared int[4];\n\
             enum color { red, green }\n\
             implements [size: int, get: vector<int>];\n",
        );
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::ElementType), 2);
        assert_eq!(count(&tree, NodeKind::KeyvalType), 1);
        assert_eq!(count(&tree, NodeKind::TensorType), 1);
        assert_eq!(count(&tree, NodeKind::Rank), 1);
        assert_eq!(count(&tree, NodeKind::EnumDefinition), 1);
        assert_eq!(count(&tree, NodeKind::SignatureType), 1);
        assert_eq!(count(&tree, NodeKind::MethodSignature), 2);
    }

    #[test]
    fn recovery_is_local_to_one_definition() {
        let tree = parse("constant = 5;\nconstant y = 2;");
        assert_eq!(count(&tree, NodeKind::ConstantDefinition), 2);
        assert_eq!(errors(&tree).len(), 1);
    }

    #[test]
    fn class_scope_keyword_at_statement_position_recovers() {
        let tree = parse("entry <> main <> { method x; y = 1; }");
        assert_eq!(errors(&tree).len(), 1, "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::Error), 1);
        // Recovery swallows through the `;` and the next statement parses.
        assert_eq!(count(&tree, NodeKind::Assignment), 1);
    }

    #[test]
    fn controlled_position_recovers_from_definition_keywords() {
        let tree = parse("entry <> main <> { if (a) implements t; z = 2; }");
        assert_eq!(errors(&tree).len(), 1, "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::IfStatement), 1);
        assert_eq!(count(&tree, NodeKind::Assignment), 1);
    }

    #[test]
    fn unterminated_scope_still_yields_a_tree() {
        let tree = parse("entry <> main <> { return 1;");
        assert_eq!(count(&tree, NodeKind::FunctionDefinition), 1);
        assert_eq!(count(&tree, NodeKind::ReturnStatement), 1);
        assert!(!errors(&tree).is_empty());
    }

    #[test]
    fn braces_at_statement_position_open_a_scope() {
        let tree = parse("entry <> main <> { { ; } }");
        assert!(errors(&tree).is_empty());
        assert_eq!(count(&tree, NodeKind::Scope), 2);
        assert_eq!(count(&tree, NodeKind::Initializer), 0);
    }

    #[test]
    fn node_and_circuit_instantiation_statements() {
        let tree = parse("entry <> main <> { node 4 \"workers\" w; circuit c; fork handler; }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::NodeInstantiation), 1);
        assert_eq!(count(&tree, NodeKind::CircuitInstantiation), 1);
        assert_eq!(count(&tree, NodeKind::ForkStatement), 1);
    }

    #[test]
    fn assertion_and_builtin_statements() {
        let tree = parse("entry <> main <> { assert x == 1; @internal y; var q : int = @pop stack; }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::Assertion), 2);
        assert_eq!(count(&tree, NodeKind::BuiltinExpression), 1);
    }

    #[test]
    fn circuit_definition_with_body() {
        let tree = parse("circuit pipeline <int width> { node 2 stage; }");
        assert!(errors(&tree).is_empty(), "{:?}", errors(&tree));
        assert_eq!(count(&tree, NodeKind::CircuitDefinition), 1);
        assert_eq!(count(&tree, NodeKind::NodeInstantiation), 1);
    }

    #[test]
    fn trailing_trivia_belongs_to_the_root() {
        let tree = parse("constant x = 1; // tail\n");
        assert!(errors(&tree).is_empty());
        let items = tree.items();
        // Definition node, then whitespace/comment trivia, then Eof.
        assert!(matches!(items[0], Element::Node(_)));
        let last = *items.last().unwrap_or_else(|| unreachable!());
        match last {
            Element::Token(t) => assert_eq!(tree.token(t).kind, TokenKind::Eof),
            Element::Node(_) => unreachable!("file must end with the Eof token"),
        }
    }
}
