// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Babel-shaped syntax tree for ECMAScript modules.
//!
//! The tree is produced by an external parser and exchanged as JSON. Only the
//! node kinds the export mirror rewrite looks at are modelled as Rust types:
//!
//! - statements: `ExportNamedDeclaration`, `VariableDeclaration`,
//!   `FunctionDeclaration`, `ClassDeclaration`
//! - declarators and their `Identifier` bindings
//! - literal initializers: `StringLiteral`, `NumericLiteral`,
//!   `BooleanLiteral`, `NullLiteral`, plus `Identifier` references
//!
//! Every other node is carried as an `Opaque` JSON value, and every modelled
//! node keeps the fields it does not interpret (`start`, `end`, `loc`,
//! function bodies, ...) in a flattened `rest` map. Reading a tree and
//! writing it back therefore loses nothing.
//!
//! # JSON Shape
//!
//! ```text
//! { "type": "ExportNamedDeclaration",
//!   "declaration": { "type": "VariableDeclaration", "kind": "const",
//!     "declarations": [ { "type": "VariableDeclarator",
//!       "id": { "type": "Identifier", "name": "FOO" },
//!       "init": { "type": "StringLiteral", "value": "FOO",
//!                 "extra": { "raw": "'FOO'", "rawValue": "FOO" } } } ] },
//!   "specifiers": [], "source": null }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use exportmirror_core::QuoteStyle;

/// Node fields the model does not interpret, kept verbatim.
pub type Fields = Map<String, Value>;

fn node_fields(node_type: &str) -> Fields {
    let mut fields = Fields::new();
    fields.insert("type".to_string(), Value::String(node_type.to_string()));
    fields
}

/// Serde representation shared by all node enums: a known, tagged node kind,
/// or any other JSON value.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NodeRepr<K> {
    Known(K),
    Opaque(Value),
}

fn opaque_type(value: &Value) -> &str {
    value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("<untyped>")
}

// ============================================================================
// Program
// ============================================================================

/// Root of a module.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
    #[serde(flatten)]
    pub rest: Fields,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        let mut rest = node_fields("Program");
        rest.insert("sourceType".to_string(), Value::String("module".to_string()));
        Self { body, rest }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "NodeRepr<KnownStatement>",
    into = "NodeRepr<KnownStatement>"
)]
pub enum Statement {
    ExportNamedDeclaration(ExportNamedDeclaration),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    /// Any other statement.
    Opaque(Value),
}

impl Statement {
    /// The Babel node type name.
    pub fn node_type(&self) -> &str {
        match self {
            Statement::ExportNamedDeclaration(_) => "ExportNamedDeclaration",
            Statement::VariableDeclaration(_) => "VariableDeclaration",
            Statement::FunctionDeclaration(_) => "FunctionDeclaration",
            Statement::ClassDeclaration(_) => "ClassDeclaration",
            Statement::Opaque(value) => opaque_type(value),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum KnownStatement {
    ExportNamedDeclaration(ExportNamedDeclaration),
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
}

impl From<NodeRepr<KnownStatement>> for Statement {
    fn from(repr: NodeRepr<KnownStatement>) -> Self {
        match repr {
            NodeRepr::Known(KnownStatement::ExportNamedDeclaration(n)) => {
                Statement::ExportNamedDeclaration(n)
            }
            NodeRepr::Known(KnownStatement::VariableDeclaration(n)) => {
                Statement::VariableDeclaration(n)
            }
            NodeRepr::Known(KnownStatement::FunctionDeclaration(n)) => {
                Statement::FunctionDeclaration(n)
            }
            NodeRepr::Known(KnownStatement::ClassDeclaration(n)) => Statement::ClassDeclaration(n),
            NodeRepr::Opaque(value) => Statement::Opaque(value),
        }
    }
}

impl From<Statement> for NodeRepr<KnownStatement> {
    fn from(statement: Statement) -> Self {
        match statement {
            Statement::ExportNamedDeclaration(n) => {
                NodeRepr::Known(KnownStatement::ExportNamedDeclaration(n))
            }
            Statement::VariableDeclaration(n) => {
                NodeRepr::Known(KnownStatement::VariableDeclaration(n))
            }
            Statement::FunctionDeclaration(n) => {
                NodeRepr::Known(KnownStatement::FunctionDeclaration(n))
            }
            Statement::ClassDeclaration(n) => NodeRepr::Known(KnownStatement::ClassDeclaration(n)),
            Statement::Opaque(value) => NodeRepr::Opaque(value),
        }
    }
}

/// `export <declaration>` or `export { a, b } [from '...']`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNamedDeclaration {
    /// `None` for specifier lists and re-exports.
    pub declaration: Option<Declaration>,
    #[serde(flatten)]
    pub rest: Fields,
}

impl ExportNamedDeclaration {
    /// `export <declaration>`.
    pub fn new(declaration: Declaration) -> Self {
        Self::with_declaration(Some(declaration))
    }

    /// `export { name, ... }` without a declaration.
    pub fn specifiers(names: &[&str]) -> Self {
        let mut export = Self::with_declaration(None);
        let specifiers = names
            .iter()
            .map(|name| {
                let mut specifier = node_fields("ExportSpecifier");
                specifier.insert("local".to_string(), identifier_value(name));
                specifier.insert("exported".to_string(), identifier_value(name));
                Value::Object(specifier)
            })
            .collect();
        export
            .rest
            .insert("specifiers".to_string(), Value::Array(specifiers));
        export
    }

    fn with_declaration(declaration: Option<Declaration>) -> Self {
        let mut rest = Fields::new();
        rest.insert("specifiers".to_string(), Value::Array(Vec::new()));
        rest.insert("source".to_string(), Value::Null);
        Self { declaration, rest }
    }
}

fn identifier_value(name: &str) -> Value {
    let mut identifier = node_fields("Identifier");
    identifier.insert("name".to_string(), Value::String(name.to_string()));
    Value::Object(identifier)
}

// ============================================================================
// Declarations
// ============================================================================

/// The declaration carried by an `export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "NodeRepr<KnownDeclaration>",
    into = "NodeRepr<KnownDeclaration>"
)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    /// Any other declaration (TypeScript interfaces, enums, ...).
    Opaque(Value),
}

impl Declaration {
    /// The Babel node type name.
    pub fn node_type(&self) -> &str {
        match self {
            Declaration::Variable(_) => "VariableDeclaration",
            Declaration::Function(_) => "FunctionDeclaration",
            Declaration::Class(_) => "ClassDeclaration",
            Declaration::Opaque(value) => opaque_type(value),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum KnownDeclaration {
    VariableDeclaration(VariableDeclaration),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
}

impl From<NodeRepr<KnownDeclaration>> for Declaration {
    fn from(repr: NodeRepr<KnownDeclaration>) -> Self {
        match repr {
            NodeRepr::Known(KnownDeclaration::VariableDeclaration(n)) => Declaration::Variable(n),
            NodeRepr::Known(KnownDeclaration::FunctionDeclaration(n)) => Declaration::Function(n),
            NodeRepr::Known(KnownDeclaration::ClassDeclaration(n)) => Declaration::Class(n),
            NodeRepr::Opaque(value) => Declaration::Opaque(value),
        }
    }
}

impl From<Declaration> for NodeRepr<KnownDeclaration> {
    fn from(declaration: Declaration) -> Self {
        match declaration {
            Declaration::Variable(n) => NodeRepr::Known(KnownDeclaration::VariableDeclaration(n)),
            Declaration::Function(n) => NodeRepr::Known(KnownDeclaration::FunctionDeclaration(n)),
            Declaration::Class(n) => NodeRepr::Known(KnownDeclaration::ClassDeclaration(n)),
            Declaration::Opaque(value) => NodeRepr::Opaque(value),
        }
    }
}

/// `var`, `let` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// `const A = ..., B = ...;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
    #[serde(flatten)]
    pub rest: Fields,
}

impl VariableDeclaration {
    pub fn new(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self {
            kind,
            declarations,
            rest: Fields::new(),
        }
    }
}

/// One `binding = init` pair inside a [`VariableDeclaration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub id: Pattern,
    pub init: Option<Expression>,
    #[serde(flatten)]
    pub rest: Fields,
}

impl VariableDeclarator {
    pub fn new(name: &str, init: Option<Expression>) -> Self {
        Self {
            id: Pattern::Identifier(Identifier::new(name)),
            init,
            rest: node_fields("VariableDeclarator"),
        }
    }

    /// Name of the bound identifier, `None` for destructuring patterns.
    pub fn binding_name(&self) -> Option<&str> {
        match &self.id {
            Pattern::Identifier(identifier) => Some(&identifier.name),
            Pattern::Opaque(_) => None,
        }
    }
}

/// `function name() {}`; only the name is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    #[serde(flatten)]
    pub rest: Fields,
}

impl FunctionDeclaration {
    pub fn named(name: &str) -> Self {
        let mut rest = Fields::new();
        rest.insert("id".to_string(), identifier_value(name));
        rest.insert("generator".to_string(), Value::Bool(false));
        rest.insert("async".to_string(), Value::Bool(false));
        rest.insert("params".to_string(), Value::Array(Vec::new()));
        let mut body = node_fields("BlockStatement");
        body.insert("body".to_string(), Value::Array(Vec::new()));
        rest.insert("body".to_string(), Value::Object(body));
        Self { rest }
    }

    pub fn name(&self) -> Option<&str> {
        declared_name(&self.rest)
    }
}

/// `class Name {}`; only the name is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    #[serde(flatten)]
    pub rest: Fields,
}

impl ClassDeclaration {
    pub fn named(name: &str) -> Self {
        let mut rest = Fields::new();
        rest.insert("id".to_string(), identifier_value(name));
        rest.insert("superClass".to_string(), Value::Null);
        let mut body = node_fields("ClassBody");
        body.insert("body".to_string(), Value::Array(Vec::new()));
        rest.insert("body".to_string(), Value::Object(body));
        Self { rest }
    }

    pub fn name(&self) -> Option<&str> {
        declared_name(&self.rest)
    }
}

fn declared_name(rest: &Fields) -> Option<&str> {
    rest.get("id")?.get("name")?.as_str()
}

// ============================================================================
// Patterns and Expressions
// ============================================================================

/// Binding target of a declarator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeRepr<KnownPattern>", into = "NodeRepr<KnownPattern>")]
pub enum Pattern {
    Identifier(Identifier),
    /// Object/array destructuring and anything else.
    Opaque(Value),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum KnownPattern {
    Identifier(Identifier),
}

impl From<NodeRepr<KnownPattern>> for Pattern {
    fn from(repr: NodeRepr<KnownPattern>) -> Self {
        match repr {
            NodeRepr::Known(KnownPattern::Identifier(n)) => Pattern::Identifier(n),
            NodeRepr::Opaque(value) => Pattern::Opaque(value),
        }
    }
}

impl From<Pattern> for NodeRepr<KnownPattern> {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::Identifier(n) => NodeRepr::Known(KnownPattern::Identifier(n)),
            Pattern::Opaque(value) => NodeRepr::Opaque(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    #[serde(flatten)]
    pub rest: Fields,
}

impl Identifier {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rest: Fields::new(),
        }
    }
}

/// Initializer expression of a declarator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "NodeRepr<KnownExpression>",
    into = "NodeRepr<KnownExpression>"
)]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Identifier(Identifier),
    /// Calls, templates, objects and every other expression.
    Opaque(Value),
}

impl Expression {
    /// `'value'` with single quotes.
    pub fn string(value: &str) -> Self {
        Expression::StringLiteral(StringLiteral::quoted(value, QuoteStyle::Single))
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Expression::NumericLiteral(NumericLiteral {
            value: value.into(),
            rest: Fields::new(),
        })
    }

    pub fn boolean(value: bool) -> Self {
        Expression::BooleanLiteral(BooleanLiteral {
            value,
            rest: Fields::new(),
        })
    }

    pub fn null() -> Self {
        Expression::NullLiteral(NullLiteral { rest: Fields::new() })
    }

    pub fn identifier(name: &str) -> Self {
        Expression::Identifier(Identifier::new(name))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum KnownExpression {
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    Identifier(Identifier),
}

impl From<NodeRepr<KnownExpression>> for Expression {
    fn from(repr: NodeRepr<KnownExpression>) -> Self {
        match repr {
            NodeRepr::Known(KnownExpression::StringLiteral(n)) => Expression::StringLiteral(n),
            NodeRepr::Known(KnownExpression::NumericLiteral(n)) => Expression::NumericLiteral(n),
            NodeRepr::Known(KnownExpression::BooleanLiteral(n)) => Expression::BooleanLiteral(n),
            NodeRepr::Known(KnownExpression::NullLiteral(n)) => Expression::NullLiteral(n),
            NodeRepr::Known(KnownExpression::Identifier(n)) => Expression::Identifier(n),
            NodeRepr::Opaque(value) => Expression::Opaque(value),
        }
    }
}

impl From<Expression> for NodeRepr<KnownExpression> {
    fn from(expression: Expression) -> Self {
        match expression {
            Expression::StringLiteral(n) => NodeRepr::Known(KnownExpression::StringLiteral(n)),
            Expression::NumericLiteral(n) => NodeRepr::Known(KnownExpression::NumericLiteral(n)),
            Expression::BooleanLiteral(n) => NodeRepr::Known(KnownExpression::BooleanLiteral(n)),
            Expression::NullLiteral(n) => NodeRepr::Known(KnownExpression::NullLiteral(n)),
            Expression::Identifier(n) => NodeRepr::Known(KnownExpression::Identifier(n)),
            Expression::Opaque(value) => NodeRepr::Opaque(value),
        }
    }
}

/// `'text'` or `"text"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    /// Cooked value (escapes resolved).
    pub value: String,
    /// Source text as written, when the parser kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<LiteralExtra>,
    #[serde(flatten)]
    pub rest: Fields,
}

/// Babel's `extra` block on literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiteralExtra {
    #[serde(default)]
    pub raw: String,
    #[serde(default, rename = "rawValue")]
    pub raw_value: String,
    #[serde(flatten)]
    pub rest: Fields,
}

impl StringLiteral {
    /// A literal with no recorded source text.
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            extra: None,
            rest: Fields::new(),
        }
    }

    /// A literal written with the given quote character.
    pub fn quoted(value: &str, quote: QuoteStyle) -> Self {
        Self {
            value: value.to_string(),
            extra: Some(LiteralExtra {
                raw: quote_literal(value, quote),
                raw_value: value.to_string(),
                rest: Fields::new(),
            }),
            rest: Fields::new(),
        }
    }

    /// Quote character used in the source, if recorded.
    pub fn quote(&self) -> Option<QuoteStyle> {
        let raw = &self.extra.as_ref()?.raw;
        match raw.chars().next()? {
            '\'' => Some(QuoteStyle::Single),
            '"' => Some(QuoteStyle::Double),
            _ => None,
        }
    }

    /// Replace the value, keeping the recorded quote style in `extra.raw`.
    pub fn set_value(&mut self, value: &str) {
        let quote = self.quote().unwrap_or(QuoteStyle::Single);
        self.value = value.to_string();
        if let Some(extra) = self.extra.as_mut() {
            extra.raw = quote_literal(value, quote);
            extra.raw_value = value.to_string();
        }
    }
}

/// Render `value` as literal source text between `quote` characters.
pub fn quote_literal(value: &str, quote: QuoteStyle) -> String {
    let delimiter = quote.as_char();
    let mut raw = String::with_capacity(value.len() + 2);
    raw.push(delimiter);
    for c in value.chars() {
        match c {
            '\\' => raw.push_str("\\\\"),
            '\n' => raw.push_str("\\n"),
            '\r' => raw.push_str("\\r"),
            '\u{2028}' => raw.push_str("\\u2028"),
            '\u{2029}' => raw.push_str("\\u2029"),
            '$' if quote == QuoteStyle::Backtick => raw.push_str("\\$"),
            c if c == delimiter => {
                raw.push('\\');
                raw.push(c);
            }
            c => raw.push(c),
        }
    }
    raw.push(delimiter);
    raw
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    pub value: Number,
    #[serde(flatten)]
    pub rest: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    #[serde(flatten)]
    pub rest: Fields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {
    #[serde(flatten)]
    pub rest: Fields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export_const(name: &str, init: Value) -> Value {
        json!({
            "type": "ExportNamedDeclaration",
            "start": 0,
            "end": 24,
            "declaration": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": name },
                    "init": init
                }]
            },
            "specifiers": [],
            "source": null
        })
    }

    mod deserialize {
        use super::*;

        #[test]
        fn export_const_string_literal() {
            let value = export_const(
                "FOO",
                json!({
                    "type": "StringLiteral",
                    "value": "FOO",
                    "extra": { "raw": "'FOO'", "rawValue": "FOO" }
                }),
            );
            let statement: Statement = serde_json::from_value(value).unwrap();

            let Statement::ExportNamedDeclaration(export) = statement else {
                panic!("expected export");
            };
            let Some(Declaration::Variable(declaration)) = &export.declaration else {
                panic!("expected variable declaration");
            };
            assert_eq!(declaration.kind, VariableKind::Const);
            let declarator = &declaration.declarations[0];
            assert_eq!(declarator.binding_name(), Some("FOO"));
            let Some(Expression::StringLiteral(literal)) = &declarator.init else {
                panic!("expected string literal");
            };
            assert_eq!(literal.value, "FOO");
            assert_eq!(literal.quote(), Some(QuoteStyle::Single));
            assert_eq!(export.rest.get("start"), Some(&json!(0)));
        }

        #[test]
        fn unknown_statement_is_opaque() {
            let value = json!({ "type": "ExpressionStatement", "expression": { "type": "CallExpression" } });
            let statement: Statement = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(statement, Statement::Opaque(value));
            assert_eq!(statement.node_type(), "ExpressionStatement");
        }

        #[test]
        fn destructuring_binding_is_opaque_pattern() {
            let mut value = export_const("X", Value::Null);
            value["declaration"]["declarations"][0]["id"] =
                json!({ "type": "ObjectPattern", "properties": [] });
            let statement: Statement = serde_json::from_value(value).unwrap();
            let Statement::ExportNamedDeclaration(export) = statement else {
                panic!("expected export");
            };
            let Some(Declaration::Variable(declaration)) = export.declaration else {
                panic!("expected variable declaration");
            };
            assert_eq!(declaration.declarations[0].binding_name(), None);
            assert!(declaration.declarations[0].init.is_none());
        }

        #[test]
        fn unsupported_kind_keeps_statement_verbatim() {
            let value = json!({
                "type": "VariableDeclaration",
                "kind": "using",
                "declarations": []
            });
            let statement: Statement = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(statement, Statement::Opaque(value));
        }

        #[test]
        fn typescript_declaration_is_opaque() {
            let value = json!({
                "type": "ExportNamedDeclaration",
                "declaration": { "type": "TSInterfaceDeclaration", "id": { "type": "Identifier", "name": "I" } },
                "specifiers": [],
                "source": null
            });
            let statement: Statement = serde_json::from_value(value).unwrap();
            let Statement::ExportNamedDeclaration(export) = statement else {
                panic!("expected export");
            };
            let declaration = export.declaration.unwrap();
            assert!(matches!(declaration, Declaration::Opaque(_)));
            assert_eq!(declaration.node_type(), "TSInterfaceDeclaration");
        }

        #[test]
        fn function_and_class_names() {
            let function: FunctionDeclaration = serde_json::from_value(json!({
                "id": { "type": "Identifier", "name": "foo" },
                "params": [],
                "body": { "type": "BlockStatement", "body": [] }
            }))
            .unwrap();
            assert_eq!(function.name(), Some("foo"));
            assert_eq!(ClassDeclaration::named("Bar").name(), Some("Bar"));
        }
    }

    mod round_trip {
        use super::*;

        #[test]
        fn unmodelled_fields_survive() {
            let value = json!({
                "type": "Program",
                "sourceType": "module",
                "body": [
                    export_const("N", json!({ "type": "NumericLiteral", "value": 5, "extra": { "raw": "5" } })),
                    { "type": "ImportDeclaration", "specifiers": [], "source": { "type": "StringLiteral", "value": "x" } },
                    {
                        "type": "FunctionDeclaration",
                        "id": { "type": "Identifier", "name": "f", "start": 9 },
                        "params": [],
                        "body": { "type": "BlockStatement", "body": [] },
                        "loc": { "start": { "line": 1, "column": 0 } }
                    }
                ]
            });
            let program: Program = serde_json::from_value(value.clone()).unwrap();
            assert!(matches!(program.body[0], Statement::ExportNamedDeclaration(_)));
            assert!(matches!(program.body[1], Statement::Opaque(_)));
            assert!(matches!(program.body[2], Statement::FunctionDeclaration(_)));
            assert_eq!(serde_json::to_value(&program).unwrap(), value);
        }

        #[test]
        fn builders_serialize_babel_shape() {
            let program = Program::new(vec![Statement::ExportNamedDeclaration(
                ExportNamedDeclaration::new(Declaration::Variable(VariableDeclaration::new(
                    VariableKind::Let,
                    vec![VariableDeclarator::new("FOO", None)],
                ))),
            )]);
            assert_eq!(
                serde_json::to_value(&program).unwrap(),
                json!({
                    "type": "Program",
                    "sourceType": "module",
                    "body": [{
                        "type": "ExportNamedDeclaration",
                        "declaration": {
                            "type": "VariableDeclaration",
                            "kind": "let",
                            "declarations": [{
                                "type": "VariableDeclarator",
                                "id": { "type": "Identifier", "name": "FOO" },
                                "init": null
                            }]
                        },
                        "specifiers": [],
                        "source": null
                    }]
                })
            );
        }
    }

    mod string_literal {
        use super::*;

        #[test]
        fn set_value_keeps_quote_style() {
            let mut literal = StringLiteral::quoted("FOO", QuoteStyle::Double);
            literal.set_value("a");
            assert_eq!(literal.value, "a");
            let extra = literal.extra.as_ref().unwrap();
            assert_eq!(extra.raw, "\"a\"");
            assert_eq!(extra.raw_value, "a");
            assert_eq!(literal.quote(), Some(QuoteStyle::Double));
        }

        #[test]
        fn set_value_without_extra_only_touches_value() {
            let mut literal = StringLiteral::new("FOO");
            literal.set_value("b");
            assert_eq!(literal.value, "b");
            assert!(literal.extra.is_none());
            assert_eq!(literal.quote(), None);
        }

        #[test]
        fn quote_literal_escapes_delimiter_and_backslash() {
            assert_eq!(quote_literal("a'b", QuoteStyle::Single), "'a\\'b'");
            assert_eq!(quote_literal("a'b", QuoteStyle::Double), "\"a'b\"");
            assert_eq!(quote_literal("\\", QuoteStyle::Single), "'\\\\'");
            assert_eq!(quote_literal("x\ny", QuoteStyle::Double), "\"x\\ny\"");
        }

        #[test]
        fn extra_fields_survive_set_value() {
            let mut literal: StringLiteral = serde_json::from_value(json!({
                "value": "FOO",
                "start": 19,
                "end": 24,
                "extra": { "raw": "'FOO'", "rawValue": "FOO", "parenthesized": true }
            }))
            .unwrap();
            literal.set_value("c");
            assert_eq!(
                serde_json::to_value(&literal).unwrap(),
                json!({
                    "value": "c",
                    "start": 19,
                    "end": 24,
                    "extra": { "raw": "'c'", "rawValue": "c", "parenthesized": true }
                })
            );
        }
    }
}
