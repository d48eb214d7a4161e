//! Core infrastructure for exportmirror.
//!
//! This crate provides the syntax-tree agnostic pieces:
//! - Alphabet: the ordered digit set used to build short strings
//! - Sequence: the bijective base-K generator of unique short strings
//! - Error types and error codes
//! - Configuration loading

pub mod alphabet;
pub mod config;
pub mod error;
pub mod sequence;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET};
pub use config::{MirrorConfig, QuoteStyle};
pub use error::{AlphabetError, ErrorCode, MirrorError, MirrorResult};
pub use sequence::{number_to_string, SequenceGenerator, SharedSequence, UniqueStringSource};
