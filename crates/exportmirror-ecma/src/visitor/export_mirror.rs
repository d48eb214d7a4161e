// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! ExportMirrorRewriter for shrinking self-named string exports.
//!
//! A *mirror export* is a variable export whose initializer is a string literal
//! spelling the exported binding's own name:
//!
//! ```text
//! export const FOO = 'FOO';      // mirror export
//! export const BAR = 'bar';      // value differs from the name: untouched
//! export let BAZ;                // no initializer: untouched
//! export function qux() {}       // not a variable export: untouched
//! ```
//!
//! Such constants only need to be distinct from each other, so the rewriter
//! replaces each literal with the next value from a [`UniqueStringSource`]:
//!
//! ```text
//! export const FOO = 'a';
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use exportmirror_core::SequenceGenerator;
//! use exportmirror_ecma::ExportMirrorRewriter;
//!
//! let mut generator = SequenceGenerator::default();
//! let report = ExportMirrorRewriter::new(&mut generator).run(&mut program)?;
//! for replacement in &report.replacements {
//!     println!("{} -> {}", replacement.name, replacement.value);
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use exportmirror_core::{MirrorError, MirrorResult, UniqueStringSource};

use super::dispatch::walk_program_mut;
use super::traits::{VisitResult, VisitorMut};
use crate::nodes::{
    Declaration, ExportNamedDeclaration, Expression, Fields, Pattern, Program, Statement,
    VariableDeclarator,
};

/// Returns `true` when `declarator` binds a name to a string literal equal to
/// that name.
///
/// Whether the declarator sits inside an `export` is the caller's concern.
pub fn is_mirror_export(declarator: &VariableDeclarator) -> bool {
    match (&declarator.id, &declarator.init) {
        (Pattern::Identifier(id), Some(Expression::StringLiteral(literal))) => {
            literal.value == id.name
        }
        (
            Pattern::Identifier(_),
            Some(
                Expression::NumericLiteral(_)
                | Expression::BooleanLiteral(_)
                | Expression::NullLiteral(_)
                | Expression::Identifier(_)
                | Expression::Opaque(_),
            ),
        ) => false,
        (Pattern::Identifier(_), None) => false,
        (Pattern::Opaque(_), _) => false,
    }
}

/// One rewritten literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Exported binding name (and the literal's previous value).
    pub name: String,
    /// Value written into the literal.
    pub value: String,
    /// Byte offset of the literal in the original source, when the parser recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

/// Replacements made by one rewrite pass, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    pub replacements: Vec<Replacement>,
}

impl RewriteReport {
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// The replacement made for the export named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Replacement> {
        self.replacements.iter().find(|r| r.name == name)
    }

    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> MirrorResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MirrorError::internal(format!("failed to serialize report: {}", e)))
    }
}

/// A mutable visitor that rewrites mirror exports in place.
///
/// Exactly one value is drawn from the source per mirror export, in source
/// order. Everything else in the tree is left as it was. If the source fails,
/// traversal stops and [`run`](Self::run) returns the error; literals rewritten
/// before the failure keep their new values.
pub struct ExportMirrorRewriter<S> {
    source: S,
    report: RewriteReport,
    error: Option<MirrorError>,
    /// Set while walking the declaration of an `export`.
    in_export: bool,
}

impl<S: UniqueStringSource> ExportMirrorRewriter<S> {
    /// Create a rewriter drawing values from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            report: RewriteReport::default(),
            error: None,
            in_export: false,
        }
    }

    /// Rewrite every mirror export in `program`.
    pub fn run(mut self, program: &mut Program) -> MirrorResult<RewriteReport> {
        walk_program_mut(&mut self, program);
        if let Some(error) = self.error {
            return Err(error);
        }
        info!(
            replaced = self.report.len(),
            statements = program.body.len(),
            "export mirror rewrite complete"
        );
        Ok(self.report)
    }

    fn rewrite_declarator(&mut self, declarator: &mut VariableDeclarator) -> VisitResult {
        if !is_mirror_export(declarator) {
            debug!(
                name = declarator.binding_name().unwrap_or("<pattern>"),
                init = init_kind(declarator.init.as_ref()),
                "skipping exported declarator"
            );
            return VisitResult::Continue;
        }
        let Some(Expression::StringLiteral(literal)) = declarator.init.as_mut() else {
            return VisitResult::Continue;
        };

        let value = match self.source.next_unique() {
            Ok(value) => value,
            Err(error) => {
                self.error = Some(error);
                return VisitResult::Stop;
            }
        };

        let name = std::mem::take(&mut literal.value);
        literal.set_value(&value);
        debug!(name = %name, value = %value, "rewrote mirror export");

        self.report.replacements.push(Replacement {
            start: offset(&literal.rest, "start"),
            end: offset(&literal.rest, "end"),
            name,
            value,
        });
        VisitResult::Continue
    }
}

impl<S: UniqueStringSource> VisitorMut for ExportMirrorRewriter<S> {
    fn visit_statement(&mut self, node: &mut Statement) -> VisitResult {
        match node {
            Statement::ExportNamedDeclaration(_) => VisitResult::Continue,
            Statement::VariableDeclaration(_)
            | Statement::FunctionDeclaration(_)
            | Statement::ClassDeclaration(_)
            | Statement::Opaque(_) => VisitResult::SkipChildren,
        }
    }

    fn visit_export_named_declaration(&mut self, node: &mut ExportNamedDeclaration) -> VisitResult {
        match &node.declaration {
            Some(Declaration::Variable(_)) => {
                self.in_export = true;
                VisitResult::Continue
            }
            Some(declaration) => {
                debug!(kind = declaration.node_type(), "skipping non-variable export");
                VisitResult::SkipChildren
            }
            None => {
                debug!("skipping export without declaration");
                VisitResult::SkipChildren
            }
        }
    }

    fn leave_export_named_declaration(&mut self, _node: &mut ExportNamedDeclaration) {
        self.in_export = false;
    }

    fn visit_variable_declarator(&mut self, node: &mut VariableDeclarator) -> VisitResult {
        if !self.in_export {
            return VisitResult::SkipChildren;
        }
        self.rewrite_declarator(node)
    }
}

fn init_kind(init: Option<&Expression>) -> &str {
    match init {
        None => "<none>",
        Some(Expression::StringLiteral(_)) => "StringLiteral",
        Some(Expression::NumericLiteral(_)) => "NumericLiteral",
        Some(Expression::BooleanLiteral(_)) => "BooleanLiteral",
        Some(Expression::NullLiteral(_)) => "NullLiteral",
        Some(Expression::Identifier(_)) => "Identifier",
        Some(Expression::Opaque(value)) => value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("<untyped>"),
    }
}

fn offset(fields: &Fields, key: &str) -> Option<u64> {
    fields.get(key).and_then(Value::as_u64)
}
