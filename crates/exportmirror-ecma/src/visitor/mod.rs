// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for syntax-tree traversal.
//!
//! Macro-generated trait method signatures with hand-written walk functions,
//! in two flavours:
//!
//! - [`Visitor`]: read-only traversal (used by [`MirrorExportCollector`])
//! - [`VisitorMut`]: in-place rewriting (used by [`ExportMirrorRewriter`])
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order** for `visit_*` methods
//! - **Post-order** for `leave_*` methods
//! - Children are visited in source order
//!
//! # Example
//!
//! ```ignore
//! use exportmirror_ecma::visitor::{walk_program, VisitResult, Visitor};
//!
//! struct DeclaratorCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for DeclaratorCounter {
//!     fn visit_variable_declarator(&mut self, _node: &VariableDeclarator) -> VisitResult {
//!         self.count += 1;
//!         VisitResult::Continue
//!     }
//! }
//! ```

mod collector;
mod dispatch;
mod export_mirror;
mod traits;

pub use collector::{MirrorExportCollector, MirrorExportInfo};
pub use dispatch::*;
pub use export_mirror::{is_mirror_export, ExportMirrorRewriter, Replacement, RewriteReport};
pub use traits::{VisitResult, Visitor, VisitorMut};
