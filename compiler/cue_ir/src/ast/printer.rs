//! S-expression rendering of syntax trees.
//!
//! Produces one line per tree, e.g. `1 + 2 * 3` renders as
//! `(binary_operator (int_lit 1) + (binary_operator (int_lit 2) * (int_lit 3)))`.
//! Spans are omitted, so two trees parsed from different positions
//! render identically when their structure matches.

use super::{
    Aliased, Attribute, Binding, Callee, Clause, Comprehension, Declaration, Ellipsis, Embedding,
    ErrorNode, Expression, Field, Identifier, ImportDeclaration, ImportName, ImportSpecs, Label, LabelExpr,
    LabelName, Literal, LiteralPart, Operand, PrimaryExpression, Selector, SourceFile,
    StringLiteral, StructLiteral, StructMemberKind,
};
use crate::EscapeKind;

/// Render a whole file.
pub fn to_sexp(file: &SourceFile) -> String {
    let mut printer = SexpPrinter::new();
    printer.source_file(file);
    printer.finish()
}

/// Incremental S-expression writer.
#[derive(Default)]
pub struct SexpPrinter {
    out: String,
}

impl SexpPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, name: &str) {
        if !self.out.is_empty() && !self.out.ends_with('(') && !self.out.ends_with(' ') {
            self.out.push(' ');
        }
        self.out.push('(');
        self.out.push_str(name);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn atom(&mut self, text: &str) {
        self.out.push(' ');
        self.out.push_str(text);
    }

    /// Tokens skipped before a closing bracket.
    fn skipped(&mut self, node: Option<&ErrorNode>) {
        if node.is_some() {
            self.open("ERROR");
            self.close();
        }
    }

    fn field_name(&mut self, name: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push(':');
    }

    fn leaf(&mut self, name: &str, text: &str) {
        self.open(name);
        self.atom(text);
        self.close();
    }

    pub fn source_file(&mut self, file: &SourceFile) {
        self.open("source_file");
        if let Some(attr) = &file.attribute {
            self.attribute(attr);
        }
        if let Some(package) = &file.package {
            self.open("package_clause");
            self.leaf("package_identifier", package.name.as_str());
            self.close();
        }
        for import in &file.imports {
            self.import_declaration(import);
        }
        for decl in file.declarations() {
            self.declaration(decl);
        }
        self.close();
    }

    fn import_declaration(&mut self, import: &ImportDeclaration) {
        self.open("import_declaration");
        match &import.specs {
            ImportSpecs::Single(spec) => self.import_spec(spec),
            ImportSpecs::Grouped(specs) => {
                self.open("import_spec_list");
                for spec in specs {
                    self.import_spec(spec);
                }
                self.close();
            }
        }
        self.close();
    }

    fn import_spec(&mut self, spec: &Aliased<StringLiteral, ImportName>) {
        self.open("import_spec");
        if let Some(name) = spec.name() {
            self.field_name("name");
            match name {
                ImportName::Dot(_) => self.atom("."),
                ImportName::Blank(_) => self.leaf("blank_identifier", "_"),
                ImportName::Package(ident) => self.leaf("package_identifier", ident.as_str()),
            }
        }
        self.field_name("path");
        self.string_literal(spec.path());
        self.close();
    }

    fn attribute(&mut self, attr: &Attribute) {
        self.open("attribute");
        self.identifier(&attr.name);
        self.atom(&format!("{:?}", &*attr.body));
        self.close();
    }

    fn identifier(&mut self, ident: &Identifier) {
        self.leaf("identifier", ident.as_str());
    }

    pub fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Field(field) => self.field(field),
            Declaration::Ellipsis(ellipsis) => self.ellipsis(ellipsis),
            Declaration::Embedding(embedding) => self.embedding(embedding),
            Declaration::Let(clause) => {
                self.open("let_clause");
                self.field_name("left");
                self.identifier(&clause.left);
                self.field_name("right");
                self.expression(&clause.right);
                self.close();
            }
            Declaration::Error(_) => {
                self.open("ERROR");
                self.close();
            }
        }
    }

    fn field(&mut self, field: &Field) {
        self.open("field");
        for label in &field.labels {
            self.label(label);
        }
        self.open("value");
        self.aliased_expression(&field.value);
        self.close();
        for attr in &field.attributes {
            self.attribute(attr);
        }
        self.close();
    }

    fn label(&mut self, label: &Label) {
        self.open("label");
        if let Some(alias) = &label.alias {
            self.field_name("alias");
            self.identifier(alias);
        }
        match &label.value {
            LabelExpr::Name { name, optional, .. } => {
                self.open("label_name");
                match name {
                    LabelName::Identifier(ident) => self.identifier(ident),
                    LabelName::String(s) => self.string_literal(s),
                }
                self.close();
                if optional.is_some() {
                    self.atom("?");
                }
            }
            LabelExpr::Computed { expr, skipped, .. } => {
                self.open("computed");
                self.aliased_expression(expr);
                self.skipped(skipped.as_ref());
                self.close();
            }
        }
        self.close();
    }

    fn aliased_expression(&mut self, expr: &Aliased<Expression>) {
        if let Some(alias) = &expr.alias {
            self.field_name("alias");
            self.identifier(alias);
        }
        self.expression(&expr.value);
    }

    fn ellipsis(&mut self, ellipsis: &Ellipsis) {
        self.open("ellipsis");
        if let Some(value) = &ellipsis.value {
            self.expression(value);
        }
        self.close();
    }

    fn embedding(&mut self, embedding: &Embedding) {
        match embedding {
            Embedding::Comprehension(c) => self.comprehension(c),
            Embedding::Expression(e) => self.aliased_expression(e),
        }
    }

    fn comprehension(&mut self, comprehension: &Comprehension) {
        self.open("comprehension");
        for clause in &comprehension.clauses {
            match clause {
                Clause::For(c) => {
                    self.open("for_clause");
                    self.binding(&c.first);
                    if let Some(second) = &c.second {
                        self.binding(second);
                    }
                    self.expression(&c.source);
                    self.close();
                }
                Clause::Guard(c) => {
                    self.open("guard_clause");
                    self.field_name("condition");
                    self.expression(&c.condition);
                    self.close();
                }
                Clause::Let(c) => {
                    self.open("let_clause");
                    self.field_name("left");
                    self.identifier(&c.left);
                    self.field_name("right");
                    self.expression(&c.right);
                    self.close();
                }
            }
        }
        self.struct_literal(&comprehension.body);
        self.close();
    }

    fn binding(&mut self, binding: &Binding) {
        match binding {
            Binding::Identifier(ident) => self.identifier(ident),
            Binding::Blank(_) => self.leaf("blank_identifier", "_"),
        }
    }

    pub fn expression(&mut self, expr: &Expression) {
        match expr {
            Expression::Comparison(cmp) => {
                self.open("comparison_operator");
                for (i, operand) in cmp.operands.iter().enumerate() {
                    if i > 0 {
                        if let Some(op) = cmp.operators.get(i - 1) {
                            self.atom(op.kind.as_str());
                        }
                    }
                    self.primary(operand);
                }
                self.close();
            }
            Expression::Not(not) => {
                self.open("not_operator");
                self.expression(&not.argument);
                self.close();
            }
            Expression::Boolean(b) => {
                self.open("boolean_operator");
                self.expression(&b.left);
                self.atom(b.operator.kind.as_str());
                self.expression(&b.right);
                self.close();
            }
            Expression::Primary(p) => self.primary(p),
            Expression::Error(_) => {
                self.open("ERROR");
                self.close();
            }
        }
    }

    fn primary(&mut self, expr: &PrimaryExpression) {
        match expr {
            PrimaryExpression::Binary(b) => {
                self.open("binary_operator");
                self.primary(&b.left);
                self.atom(b.operator.kind.as_str());
                self.primary(&b.right);
                self.close();
            }
            PrimaryExpression::Unary(u) => {
                self.open("unary_operator");
                self.atom(u.operator.kind.as_str());
                self.primary(&u.argument);
                self.close();
            }
            PrimaryExpression::Operand(operand) => self.operand(operand),
            PrimaryExpression::Index(index) => {
                self.open("index_expression");
                self.primary(&index.operand);
                self.expression(&index.index);
                self.skipped(index.skipped.as_ref());
                self.close();
            }
            PrimaryExpression::Selector(sel) => {
                self.open("selector_expression");
                self.primary(&sel.operand);
                match &sel.selector {
                    Selector::Identifier(ident) => self.identifier(ident),
                    Selector::String(s) => self.string_literal(s),
                }
                self.close();
            }
            PrimaryExpression::Call(call) => {
                self.open("call_expression");
                match &call.callee {
                    Callee::Builtin { builtin, .. } => self.leaf("builtin", builtin.name()),
                    Callee::Qualified(q) => {
                        self.open("qualified_identifier");
                        self.leaf("package_identifier", q.package.as_str());
                        self.identifier(&q.name);
                        self.close();
                    }
                }
                self.open("arguments");
                for arg in &call.arguments {
                    self.expression(arg);
                }
                self.close();
                self.close();
            }
        }
    }

    fn operand(&mut self, operand: &Operand) {
        match operand {
            Operand::Identifier(ident) => self.identifier(ident),
            Operand::Literal(lit) => self.literal(lit),
            Operand::Paren(paren) => {
                self.open("parenthesized");
                self.expression(&paren.inner);
                self.skipped(paren.skipped.as_ref());
                self.close();
            }
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Struct(s) => self.struct_literal(s),
            Literal::List(list) => {
                self.open("list_lit");
                for element in &list.elements {
                    self.embedding(element);
                }
                if let Some(ellipsis) = &list.ellipsis {
                    self.ellipsis(ellipsis);
                }
                self.skipped(list.rejected.as_ref());
                self.close();
            }
            Literal::String(s) => self.string_literal(s),
            Literal::Int(int) => self.leaf("int_lit", &int.text),
            Literal::Float(float) => self.leaf("float_lit", &float.text),
            Literal::Bool { value, .. } => {
                self.leaf("boolean", if *value { "true" } else { "false" });
            }
            Literal::Null(_) => {
                self.open("null");
                self.close();
            }
            Literal::Top(_) => {
                self.open("top_lit");
                self.close();
            }
            Literal::Bottom(_) => {
                self.open("bottom_lit");
                self.close();
            }
            Literal::Primitive { primitive, .. } => self.leaf("primitive", primitive.name()),
        }
    }

    fn struct_literal(&mut self, lit: &StructLiteral) {
        self.open("struct_lit");
        for member in &lit.members {
            match &member.kind {
                StructMemberKind::Declaration(decl) => self.declaration(decl),
                StructMemberKind::Attribute(attr) => self.attribute(attr),
            }
        }
        self.close();
    }

    fn string_literal(&mut self, lit: &StringLiteral) {
        self.open(lit.kind.node_name());
        for part in &lit.parts {
            match part {
                LiteralPart::Text { text, .. } => self.atom(&format!("{:?}", &**text)),
                LiteralPart::Escape { kind, text, .. } => {
                    let name = match kind {
                        EscapeKind::Char => "escape_char",
                        EscapeKind::Byte => "escape_byte",
                        EscapeKind::Unicode => "escape_unicode",
                    };
                    self.leaf(name, text);
                }
                LiteralPart::Interpolation(interp) => {
                    self.open(if interp.raw {
                        "raw_interpolation"
                    } else {
                        "interpolation"
                    });
                    self.expression(&interp.expression);
                    self.skipped(interp.skipped.as_ref());
                    self.close();
                }
            }
        }
        self.close();
    }
}
