//! exportmirror: shrink self-named string exports
//!
//! Rewrites `export const FOO = 'FOO'` style constants in a parsed ECMAScript
//! module so each literal holds the shortest string not yet handed out.
//! The short strings come from a bijective base-K sequence over a configurable
//! alphabet, so no two rewritten exports ever share a value.

// Core infrastructure - re-exported from exportmirror-core
pub use exportmirror_core::alphabet;
pub use exportmirror_core::config;
pub use exportmirror_core::error;
pub use exportmirror_core::sequence;

// Syntax tree and visitors - re-exported from exportmirror-ecma
pub use exportmirror_ecma::nodes;
pub use exportmirror_ecma::visitor;

pub mod output;
pub mod pipeline;

pub use exportmirror_core::{
    number_to_string, Alphabet, AlphabetError, ErrorCode, MirrorConfig, MirrorError,
    MirrorResult, QuoteStyle, SequenceGenerator, SharedSequence, UniqueStringSource,
    DEFAULT_ALPHABET,
};
pub use exportmirror_ecma::{ExportMirrorRewriter, Program, RewriteReport};
pub use pipeline::{
    find_mirror_exports, minify_json, minify_json_with, minify_program, MinifyOutput,
};
