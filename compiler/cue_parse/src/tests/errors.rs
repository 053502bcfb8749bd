use super::*;
use pretty_assertions::assert_eq;

// === Recovery ===

#[test]
fn missing_value_becomes_error_node_and_parsing_resumes() {
    let (tree, codes) = recovered("x: {a: }\ny: 1");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier x))) (value (struct_lit \
         (field (label (label_name (identifier a))) (value (ERROR)))))) \
         (field (label (label_name (identifier y))) (value (int_lit 1))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn missing_value_at_end_of_input() {
    let (tree, codes) = recovered("a: ");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (ERROR))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn missing_terminator_between_fields() {
    let (tree, codes) = recovered("a: 1 b: 2");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (int_lit 1))) \
         (field (label (label_name (identifier b))) (value (int_lit 2))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1010]);
}

#[test]
fn missing_terminator_is_recorded() {
    let output = parse("a: 1 b: 2", &ParseOptions::default());
    let kinds: Vec<_> = output
        .file
        .declarations
        .iter()
        .map(|d| d.terminator.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            cue_ir::ast::TerminatorKind::Missing,
            cue_ir::ast::TerminatorKind::EndOfInput
        ]
    );
}

#[test]
fn struct_members_need_no_separator() {
    let (tree, codes) = recovered("a: {b: 1 c: 2}");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (struct_lit \
         (field (label (label_name (identifier b))) (value (int_lit 1))) \
         (field (label (label_name (identifier c))) (value (int_lit 2)))))))"
    );
    assert!(codes.is_empty(), "{codes:?}");
}

#[test]
fn stray_closer_at_file_level_is_skipped() {
    let (tree, codes) = recovered("a: 1\n}\nb: 2");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (int_lit 1))) \
         (ERROR) (field (label (label_name (identifier b))) (value (int_lit 2))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn broken_member_does_not_lose_its_neighbours() {
    let (tree, codes) = recovered("a: {\n\tb: 1\n\t: 2\n\tc: 3\n}");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (struct_lit \
         (field (label (label_name (identifier b))) (value (int_lit 1))) (ERROR) \
         (field (label (label_name (identifier c))) (value (int_lit 3)))))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn error_node_covers_the_skipped_tokens() {
    let source = "a: 1\n) ] 2\nb: 3";
    let output = parse(source, &ParseOptions::default());
    let errors: Vec<Span> = output
        .file
        .declarations()
        .filter_map(|d| match d {
            cue_ir::ast::Declaration::Error(node) => Some(node.span),
            _ => None,
        })
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(&source[errors[0].to_range()], ") ] 2");
}

// === Delimiters ===

#[test]
fn unclosed_paren() {
    let (tree, codes) = recovered("a: (1");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (parenthesized (int_lit 1)))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1003]);
}

#[test]
fn tokens_before_a_missing_paren_become_an_error_node() {
    let (tree, codes) = recovered("a: (b c)");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (parenthesized \
         (identifier b) (ERROR)))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1003]);
}

#[test]
fn tokens_before_a_missing_index_bracket_become_an_error_node() {
    let (tree, codes) = recovered("a: x[0 1]");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (index_expression \
         (identifier x) (int_lit 0) (ERROR)))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1003]);
}

#[test]
fn unclosed_list() {
    assert_eq!(error_codes("a: [1, 2"), vec![ErrorCode::E1003]);
}

#[test]
fn unclosed_struct() {
    let (tree, codes) = recovered("a: {b: 1");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (struct_lit \
         (field (label (label_name (identifier b))) (value (int_lit 1)))))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1003]);
}

#[test]
fn unclosed_error_points_at_the_opener() {
    let output = parse("a: [1", &ParseOptions::default());
    let Some(error) = output.errors.first() else {
        panic!("expected an error");
    };
    assert_eq!(error.related.as_ref().map(|(span, _)| *span), Some(Span::new(3, 4)));
}

#[test]
fn list_elements_need_no_comma() {
    let (tree, codes) = recovered("a: [1 2\n3]");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (list_lit \
         (int_lit 1) (int_lit 2) (int_lit 3)))))"
    );
    assert!(codes.is_empty(), "{codes:?}");
}

// === Ellipsis ===

#[test]
fn element_after_ellipsis() {
    let (tree, codes) = recovered("a: [..., 1]");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (list_lit \
         (ellipsis) (ERROR)))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1009]);
}

#[test]
fn typed_ellipsis_followed_by_element() {
    let output = parse("a: [...int, 1, 2]", &ParseOptions::default());
    assert_eq!(output.errors.len(), 1);
    let error = &output.errors[0];
    assert_eq!(error.code, ErrorCode::E1009);
    assert_eq!(error.span, Span::new(12, 16));
}

// === Calls and postfix ===

#[test]
fn user_identifier_cannot_be_called() {
    let (tree, codes) = recovered("a: foo(1)\nb: 2");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (ERROR))) \
         (field (label (label_name (identifier b))) (value (int_lit 2))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1006]);
}

#[test]
fn nested_selector_cannot_be_called() {
    assert_eq!(error_codes("a: x.y.z(1)"), vec![ErrorCode::E1006]);
}

#[test]
fn call_needs_an_argument() {
    let (tree, codes) = recovered("a: len()");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (call_expression \
         (builtin len) (arguments (ERROR))))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1007]);
}

#[test]
fn stray_argument_becomes_an_error_node() {
    let (tree, codes) = recovered("a: len(x y)");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (call_expression \
         (builtin len) (arguments (identifier x) (ERROR))))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn detached_selector() {
    let (tree, codes) = recovered("a: x .b");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (selector_expression \
         (identifier x) (identifier b)))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1011]);
}

#[test]
fn detached_index() {
    assert_eq!(error_codes("a: x [0]"), vec![ErrorCode::E1011]);
}

// === Comprehensions ===

#[test]
fn comprehension_without_body() {
    let (tree, codes) = recovered("for x in y\na: 1");
    assert_eq!(
        tree,
        "(source_file (ERROR) (field (label (label_name (identifier a))) (value (int_lit 1))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1008]);
}

#[test]
fn for_clause_needs_in() {
    let output = parse("for x y {}", &ParseOptions::default());
    let Some(error) = output.errors.first() else {
        panic!("expected an error");
    };
    assert_eq!(error.code, ErrorCode::E1001);
    assert!(error.expected.contains(&TokenKind::In));
    assert!(error.expected.contains(&TokenKind::Comma));
}

// === Header ===

#[test]
fn late_package_clause() {
    let (tree, codes) = recovered("a: 1\npackage foo");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (int_lit 1))) (ERROR))"
    );
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn late_import() {
    assert_eq!(error_codes("a: 1\nimport \"b\""), vec![ErrorCode::E1001]);
}

#[test]
fn stray_attribute_at_file_level() {
    let (tree, codes) = recovered("a: 1\n@tag(x)");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (int_lit 1))) (ERROR))"
    );
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn broken_import_is_dropped() {
    let (tree, codes) = recovered("import 1\na: 1");
    assert_eq!(
        tree,
        "(source_file (field (label (label_name (identifier a))) (value (int_lit 1))))"
    );
    assert_eq!(codes, vec![ErrorCode::E1001]);
}

#[test]
fn missing_separator_in_import_group() {
    assert_eq!(
        error_codes("import (\"a\" \"b\")"),
        vec![ErrorCode::E1010]
    );
}

// === Lexical errors ===

#[test]
fn lexer_errors_are_reported_once() {
    let output = parse("a: 1\nb: ^\nc: 2", &ParseOptions::default());
    assert_eq!(output.errors.len(), 1, "{:#?}", output.errors);
    let error = &output.errors[0];
    assert_eq!(error.kind, ParseErrorKind::Lexical);
    assert!(error.lex_error().is_some());
    assert_eq!(output.file.declarations.len(), 3);
}

#[test]
fn unterminated_string_keeps_later_fields() {
    let (tree, codes) = recovered("a: \"oops\nb: 1");
    assert_eq!(codes.len(), 1);
    assert!(tree.ends_with("(field (label (label_name (identifier b))) (value (int_lit 1))))"));
}

// === Modes and limits ===

#[test]
fn stop_at_first_returns_one_error_and_no_tree() {
    let output = parse("a: 1 b: 2\nc: ]", &ParseOptions::strict());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, ErrorCode::E1010);
    assert!(output.file.declarations.is_empty());
}

#[test]
fn parse_strict_reports_the_first_error() {
    let error = parse_strict("a: {b: }").err();
    assert_eq!(error.map(|e| e.code), Some(ErrorCode::E1002));
}

#[test]
fn deep_nesting_hits_the_depth_limit() {
    let source = format!("a: {}", "[".repeat(600));
    let output = parse(&source, &ParseOptions::default());
    assert!(output.errors.iter().any(|e| e.code == ErrorCode::E1100));
    assert!(output.file.declarations.is_empty());
}

#[test]
fn depth_limit_is_configurable() {
    let options = ParseOptions::new().with_max_depth(4);
    let output = parse("a: [[[[1]]]]", &options);
    assert_eq!(
        output.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1100]
    );
    let output = parse("a: [1]", &options);
    assert!(!output.has_errors());
}

#[test]
fn deep_but_allowed_nesting_parses() {
    let depth = 100;
    let source = format!("a: {}1{}", "(".repeat(depth), ")".repeat(depth));
    let output = parse(&source, &ParseOptions::default());
    assert!(!output.has_errors(), "{:#?}", output.errors);
}

#[test]
fn long_operator_chain_hits_the_depth_limit() {
    let source = format!("x: {}a", "a + ".repeat(300_000));
    let output = parse(&source, &ParseOptions::default());
    assert_eq!(
        output.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1100]
    );
    assert!(output.file.declarations.is_empty());
}

#[test]
fn long_selector_chain_hits_the_depth_limit() {
    let source = format!("x: a{}", ".b".repeat(300_000));
    assert_eq!(error_codes(&source), vec![ErrorCode::E1100]);
}

#[test]
fn long_boolean_chain_hits_the_depth_limit() {
    let source = format!("x: {}a", "a || ".repeat(300_000));
    assert_eq!(error_codes(&source), vec![ErrorCode::E1100]);
}

#[test]
fn chain_links_count_against_the_depth_limit() {
    let options = ParseOptions::new().with_max_depth(4);
    let output = parse("x: a + b + c + d + e", &options);
    assert_eq!(
        output.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1100]
    );
    let output = parse("x: a.b[0].c", &options);
    assert!(output.errors.iter().any(|e| e.code == ErrorCode::E1100));
    assert!(!parse("x: a + b", &options).has_errors());
}

#[test]
fn chain_depth_is_released_after_each_value() {
    let options = ParseOptions::new().with_max_depth(8);
    let source = "a: x + y + z
b: x.y.z
c: x | y | z
d: p + q + r
";
    let output = parse(source, &options);
    assert!(!output.has_errors(), "{:#?}", output.errors);
    assert_eq!(output.file.declarations.len(), 4);
}

#[test]
fn long_chain_within_the_limit_parses() {
    let source = format!("x: {}a", "a | ".repeat(400));
    let output = parse(&source, &ParseOptions::default());
    assert!(!output.has_errors(), "{:#?}", output.errors);
    assert!(to_sexp(&output.file).starts_with("(source_file (field"));
}

#[test]
fn expression_with_trailing_tokens() {
    let output = parse_expression("a b", &ParseOptions::default());
    assert_eq!(
        output.errors.iter().map(|e| e.code).collect::<Vec<_>>(),
        vec![ErrorCode::E1001]
    );
    assert_eq!(render_expression(&output.expression), "(identifier a)");
}
