// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! MirrorExportCollector visitor for listing mirror exports without rewriting.

use serde::Serialize;
use serde_json::Value;

use super::dispatch::walk_program;
use super::export_mirror::is_mirror_export;
use super::traits::{VisitResult, Visitor};
use crate::nodes::{Declaration, ExportNamedDeclaration, Program, Statement, VariableDeclarator};

/// A mirror export found in a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorExportInfo {
    /// Exported binding name.
    pub name: String,
    /// Byte span of the declarator, when the parser recorded it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

/// A visitor that finds mirror exports in source order.
///
/// Uses the same eligibility rule as
/// [`ExportMirrorRewriter`](super::ExportMirrorRewriter) but never touches the
/// tree, so no generator values are consumed.
///
/// # Example
///
/// ```ignore
/// let exports = MirrorExportCollector::collect(&program);
/// let names: Vec<_> = exports.iter().map(|e| e.name.as_str()).collect();
/// ```
#[derive(Debug, Default)]
pub struct MirrorExportCollector {
    exports: Vec<MirrorExportInfo>,
    in_export: bool,
}

impl MirrorExportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect mirror exports from a program.
    pub fn collect(program: &Program) -> Vec<MirrorExportInfo> {
        let mut collector = MirrorExportCollector::new();
        walk_program(&mut collector, program);
        collector.exports
    }

    pub fn into_exports(self) -> Vec<MirrorExportInfo> {
        self.exports
    }
}

impl Visitor for MirrorExportCollector {
    fn visit_statement(&mut self, node: &Statement) -> VisitResult {
        match node {
            Statement::ExportNamedDeclaration(_) => VisitResult::Continue,
            _ => VisitResult::SkipChildren,
        }
    }

    fn visit_export_named_declaration(&mut self, node: &ExportNamedDeclaration) -> VisitResult {
        match node.declaration {
            Some(Declaration::Variable(_)) => {
                self.in_export = true;
                VisitResult::Continue
            }
            _ => VisitResult::SkipChildren,
        }
    }

    fn leave_export_named_declaration(&mut self, _node: &ExportNamedDeclaration) {
        self.in_export = false;
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) -> VisitResult {
        if !self.in_export || !is_mirror_export(node) {
            return VisitResult::SkipChildren;
        }
        if let Some(name) = node.binding_name() {
            self.exports.push(MirrorExportInfo {
                name: name.to_string(),
                start: node.rest.get("start").and_then(Value::as_u64),
                end: node.rest.get("end").and_then(Value::as_u64),
            });
        }
        VisitResult::Continue
    }
}
