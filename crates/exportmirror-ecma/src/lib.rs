// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! ECMAScript syntax-tree support for exportmirror.
//!
//! Trees come from an external parser as Babel-shaped JSON. This crate models
//! the node kinds involved in export declarations ([`nodes`]), provides
//! visitor traversal ([`visitor`]), and implements the mirror export rewrite.
//!
//! # Example
//!
//! ```ignore
//! use exportmirror_core::SequenceGenerator;
//! use exportmirror_ecma::{ExportMirrorRewriter, Program};
//!
//! let mut program: Program = serde_json::from_str(ast_json)?;
//! let report = ExportMirrorRewriter::new(SequenceGenerator::default()).run(&mut program)?;
//! ```

pub mod nodes;
pub mod visitor;

pub use nodes::{
    quote_literal, BooleanLiteral, ClassDeclaration, Declaration, ExportNamedDeclaration,
    Expression, Fields, FunctionDeclaration, Identifier, LiteralExtra, NullLiteral,
    NumericLiteral, Pattern, Program, Statement, StringLiteral, VariableDeclaration,
    VariableDeclarator, VariableKind,
};
pub use visitor::{
    is_mirror_export, walk_program, walk_program_mut, ExportMirrorRewriter,
    MirrorExportCollector, MirrorExportInfo, Replacement, RewriteReport, VisitResult, Visitor,
    VisitorMut,
};
