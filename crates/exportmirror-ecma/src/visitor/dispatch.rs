// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for syntax-tree traversal.
//!
//! This module contains walk functions that traverse nodes and call visitor methods:
//!
//! - **Pre-order**: `visit_*` is called before descending into children
//! - **Post-order**: `leave_*` is called after all children have been visited
//! - **Source order**: Children are visited in the order they appear
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)
//!
//! Opaque nodes have no modelled children; the walk visits them and moves on.
//! Every `walk_*` function has a `walk_*_mut` twin for [`VisitorMut`].

use super::traits::{VisitResult, Visitor, VisitorMut};
use crate::nodes::{
    Declaration, ExportNamedDeclaration, Program, Statement, VariableDeclaration,
    VariableDeclarator,
};

// ============================================================================
// Program walk
// ============================================================================

/// Walk a [`Program`] node and its children.
///
/// Traversal order:
/// 1. `visit_program`
/// 2. Walk each statement in `body` (in source order)
/// 3. `leave_program`
pub fn walk_program<V: Visitor>(visitor: &mut V, node: &Program) -> VisitResult {
    match visitor.visit_program(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for statement in &node.body {
                if walk_statement(visitor, statement) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_program(node);
    VisitResult::Continue
}

pub fn walk_program_mut<V: VisitorMut>(visitor: &mut V, node: &mut Program) -> VisitResult {
    match visitor.visit_program(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for statement in &mut node.body {
                if walk_statement_mut(visitor, statement) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_program(node);
    VisitResult::Continue
}

// ============================================================================
// Statement walks
// ============================================================================

/// Walk a [`Statement`] node.
///
/// Dispatches to the walk for the statement kind. Function and class
/// statements are declarations here; opaque statements have no children.
pub fn walk_statement<V: Visitor>(visitor: &mut V, node: &Statement) -> VisitResult {
    match visitor.visit_statement(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner = match node {
                Statement::ExportNamedDeclaration(export) => {
                    walk_export_named_declaration(visitor, export)
                }
                Statement::VariableDeclaration(declaration) => {
                    walk_variable_declaration(visitor, declaration)
                }
                Statement::FunctionDeclaration(_)
                | Statement::ClassDeclaration(_)
                | Statement::Opaque(_) => VisitResult::Continue,
            };
            if inner == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_statement(node);
    VisitResult::Continue
}

pub fn walk_statement_mut<V: VisitorMut>(visitor: &mut V, node: &mut Statement) -> VisitResult {
    match visitor.visit_statement(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner = match node {
                Statement::ExportNamedDeclaration(export) => {
                    walk_export_named_declaration_mut(visitor, export)
                }
                Statement::VariableDeclaration(declaration) => {
                    walk_variable_declaration_mut(visitor, declaration)
                }
                Statement::FunctionDeclaration(_)
                | Statement::ClassDeclaration(_)
                | Statement::Opaque(_) => VisitResult::Continue,
            };
            if inner == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_statement(node);
    VisitResult::Continue
}

/// Walk an [`ExportNamedDeclaration`] node.
///
/// Traversal order:
/// 1. `visit_export_named_declaration`
/// 2. Walk `declaration` (if present)
/// 3. `leave_export_named_declaration`
pub fn walk_export_named_declaration<V: Visitor>(
    visitor: &mut V,
    node: &ExportNamedDeclaration,
) -> VisitResult {
    match visitor.visit_export_named_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(declaration) = &node.declaration {
                if walk_declaration(visitor, declaration) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_export_named_declaration(node);
    VisitResult::Continue
}

pub fn walk_export_named_declaration_mut<V: VisitorMut>(
    visitor: &mut V,
    node: &mut ExportNamedDeclaration,
) -> VisitResult {
    match visitor.visit_export_named_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(declaration) = &mut node.declaration {
                if walk_declaration_mut(visitor, declaration) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_export_named_declaration(node);
    VisitResult::Continue
}

// ============================================================================
// Declaration walks
// ============================================================================

/// Walk a [`Declaration`] node.
pub fn walk_declaration<V: Visitor>(visitor: &mut V, node: &Declaration) -> VisitResult {
    match visitor.visit_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Declaration::Variable(declaration) = node {
                if walk_variable_declaration(visitor, declaration) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_declaration(node);
    VisitResult::Continue
}

pub fn walk_declaration_mut<V: VisitorMut>(
    visitor: &mut V,
    node: &mut Declaration,
) -> VisitResult {
    match visitor.visit_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Declaration::Variable(declaration) = node {
                if walk_variable_declaration_mut(visitor, declaration) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_declaration(node);
    VisitResult::Continue
}

/// Walk a [`VariableDeclaration`] node.
///
/// Declarators are visited left to right.
pub fn walk_variable_declaration<V: Visitor>(
    visitor: &mut V,
    node: &VariableDeclaration,
) -> VisitResult {
    match visitor.visit_variable_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for declarator in &node.declarations {
                if walk_variable_declarator(visitor, declarator) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_variable_declaration(node);
    VisitResult::Continue
}

pub fn walk_variable_declaration_mut<V: VisitorMut>(
    visitor: &mut V,
    node: &mut VariableDeclaration,
) -> VisitResult {
    match visitor.visit_variable_declaration(node) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for declarator in &mut node.declarations {
                if walk_variable_declarator_mut(visitor, declarator) == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_variable_declaration(node);
    VisitResult::Continue
}

/// Walk a [`VariableDeclarator`] node. Declarators are leaves for the walk.
pub fn walk_variable_declarator<V: Visitor>(
    visitor: &mut V,
    node: &VariableDeclarator,
) -> VisitResult {
    if visitor.visit_variable_declarator(node) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_variable_declarator(node);
    VisitResult::Continue
}

pub fn walk_variable_declarator_mut<V: VisitorMut>(
    visitor: &mut V,
    node: &mut VariableDeclarator,
) -> VisitResult {
    if visitor.visit_variable_declarator(node) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_variable_declarator(node);
    VisitResult::Continue
}
