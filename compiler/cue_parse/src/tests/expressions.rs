use super::*;
use cue_ir::ast::{Literal, Operand, PrimaryExpression};
use pretty_assertions::assert_eq;

// === Precedence ===

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        expr_sexp("1 + 2 * 3"),
        "(binary_operator (int_lit 1) + (binary_operator (int_lit 2) * (int_lit 3)))"
    );
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        expr_sexp("a - b - c"),
        "(binary_operator (binary_operator (identifier a) - (identifier b)) - (identifier c))"
    );
}

#[test]
fn unification_binds_tighter_than_disjunction() {
    assert_eq!(
        expr_sexp("a | b & c"),
        "(binary_operator (identifier a) | (binary_operator (identifier b) & (identifier c)))"
    );
}

#[test]
fn and_binds_tighter_than_or() {
    assert_eq!(
        expr_sexp("a || b && c"),
        "(boolean_operator (identifier a) || (boolean_operator (identifier b) && (identifier c)))"
    );
}

#[test]
fn not_binds_tighter_than_and() {
    assert_eq!(
        expr_sexp("not a && b"),
        "(boolean_operator (not_operator (identifier a)) && (identifier b))"
    );
}

#[test]
fn not_applies_to_a_comparison() {
    assert_eq!(
        expr_sexp("not a < 1"),
        "(not_operator (comparison_operator (identifier a) < (int_lit 1)))"
    );
}

#[test]
fn unary_binds_tighter_than_multiplication() {
    assert_eq!(
        expr_sexp("-x * 2"),
        "(binary_operator (unary_operator - (identifier x)) * (int_lit 2))"
    );
}

#[test]
fn nested_unary() {
    assert_eq!(
        expr_sexp("- -1"),
        "(unary_operator - (unary_operator - (int_lit 1)))"
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        expr_sexp("(1 + 2) * 3"),
        "(binary_operator (parenthesized (binary_operator (int_lit 1) + (int_lit 2))) * (int_lit 3))"
    );
}

// === Comparisons ===

#[test]
fn comparison_chain_is_one_node() {
    assert_eq!(
        expr_sexp("a == b == c"),
        "(comparison_operator (identifier a) == (identifier b) == (identifier c))"
    );
}

#[test]
fn mixed_comparison_chain() {
    assert_eq!(
        expr_sexp("1 < x <= 10"),
        "(comparison_operator (int_lit 1) < (identifier x) <= (int_lit 10))"
    );
}

#[test]
fn comparison_operands_are_binary_expressions() {
    assert_eq!(
        expr_sexp("a + 1 != b | c"),
        "(comparison_operator (binary_operator (identifier a) + (int_lit 1)) != \
         (binary_operator (identifier b) | (identifier c)))"
    );
}

#[test]
fn regex_match_operators() {
    assert_eq!(
        expr_sexp(r#"a =~ "x" && b !~ "y""#),
        "(boolean_operator (comparison_operator (identifier a) =~ (simple_string_lit \"x\")) && \
         (comparison_operator (identifier b) !~ (simple_string_lit \"y\")))"
    );
}

#[test]
fn comparison_keeps_operator_spans() {
    let output = parse_expression("a >= b", &ParseOptions::default());
    let Expression::Comparison(cmp) = output.expression else {
        panic!("expected a comparison, got {:?}", output.expression);
    };
    assert_eq!(cmp.operators.len(), 1);
    assert_eq!(cmp.operators[0].span, Span::new(2, 4));
    assert_eq!(cmp.span, Span::new(0, 6));
}

// === Operands ===

#[test]
fn predeclared_names() {
    assert_eq!(expr_sexp("null"), "(null)");
    assert_eq!(expr_sexp("true"), "(boolean true)");
    assert_eq!(expr_sexp("false"), "(boolean false)");
    assert_eq!(expr_sexp("_"), "(top_lit)");
    assert_eq!(expr_sexp("_|_"), "(bottom_lit)");
}

#[test]
fn primitive_types() {
    for primitive in PRIMITIVES {
        assert_eq!(expr_sexp(primitive), format!("(primitive {primitive})"));
    }
}

const PRIMITIVES: [&str; 6] = ["int", "float", "string", "bytes", "bool", "uint8"];

#[test]
fn numbers_keep_their_text() {
    assert_eq!(expr_sexp("0x1F"), "(int_lit 0x1F)");
    assert_eq!(expr_sexp("1_000"), "(int_lit 1_000)");
    assert_eq!(expr_sexp("1.5e3"), "(float_lit 1.5e3)");
}

#[test]
fn si_suffix_is_one_int() {
    assert_eq!(expr_sexp("1Ki"), "(int_lit 1Ki)");
    let output = parse_expression("1Ki", &ParseOptions::default());
    let Expression::Primary(PrimaryExpression::Operand(Operand::Literal(Literal::Int(int)))) =
        output.expression
    else {
        panic!("expected an int literal, got {:?}", output.expression);
    };
    assert_eq!(int.base, cue_ir::IntBase::Si);
}

#[test]
fn builtin_names_are_identifiers_unless_called() {
    assert_eq!(expr_sexp("len"), "(identifier len)");
}

// === Postfix ===

#[test]
fn selector_and_index_chain() {
    assert_eq!(
        expr_sexp("a.b[0].c"),
        "(selector_expression (index_expression (selector_expression (identifier a) \
         (identifier b)) (int_lit 0)) (identifier c))"
    );
}

#[test]
fn selector_with_string() {
    assert_eq!(
        expr_sexp(r#"a."b-c""#),
        "(selector_expression (identifier a) (simple_string_lit \"b-c\"))"
    );
}

#[test]
fn builtin_call() {
    assert_eq!(
        expr_sexp("len(x)"),
        "(call_expression (builtin len) (arguments (identifier x)))"
    );
}

#[test]
fn qualified_call_with_arguments() {
    assert_eq!(
        expr_sexp(r#"strings.Join(parts, ",")"#),
        "(call_expression (qualified_identifier (package_identifier strings) \
         (identifier Join)) (arguments (identifier parts) (simple_string_lit \",\")))"
    );
}

#[test]
fn call_arguments_may_span_lines() {
    assert_eq!(
        sexp("a: and([\n\tx,\n\ty,\n])\n"),
        "(source_file (field (label (label_name (identifier a))) (value (call_expression \
         (builtin and) (arguments (list_lit (identifier x) (identifier y)))))))"
    );
}

// === Line breaks ===

#[test]
fn line_break_ends_an_expression_at_file_level() {
    assert_eq!(
        sexp("a: b\n-1"),
        "(source_file (field (label (label_name (identifier a))) (value (identifier b))) \
         (unary_operator - (int_lit 1)))"
    );
}

#[test]
fn line_break_ends_an_expression_in_a_struct() {
    assert_eq!(
        sexp("a: {b: c\n[1]}"),
        "(source_file (field (label (label_name (identifier a))) (value (struct_lit \
         (field (label (label_name (identifier b))) (value (identifier c))) \
         (list_lit (int_lit 1))))))"
    );
}

#[test]
fn line_breaks_inside_parentheses_are_whitespace() {
    assert_eq!(
        sexp("a: (b\n+ c)"),
        "(source_file (field (label (label_name (identifier a))) (value (parenthesized \
         (binary_operator (identifier b) + (identifier c))))))"
    );
}

#[test]
fn standalone_expression_ignores_line_breaks() {
    assert_eq!(
        expr_sexp("a\n& b"),
        "(binary_operator (identifier a) & (identifier b))"
    );
}
