//! Ordered digit sets for short-string generation.
//!
//! An [`Alphabet`] is an ordered sequence of `K >= 2` distinct symbols. The
//! index of a symbol is its digit value, and the symbol order is also the
//! order in which generated strings of equal length are produced.
//!
//! Validation happens once, at construction. A constructed alphabet is
//! immutable, so every generator built from it can rely on `size() >= 2`
//! and distinct symbols.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AlphabetError;

/// Default symbol set.
///
/// Letters, digits, then printable ASCII punctuation and space. Single quote
/// and backslash are left out so every generated string can sit inside a
/// single-quoted JavaScript string literal unescaped.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&()*+,-./:;<=>?@[]^_`{|}~ ";

/// An ordered, immutable set of distinct symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from symbols in digit order.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetError::TooFewSymbols` for fewer than two symbols and
    /// `AlphabetError::DuplicateSymbol` if any symbol repeats.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.into_iter().collect();

        let mut seen: HashMap<char, usize> = HashMap::with_capacity(symbols.len());
        for (index, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = seen.get(&symbol) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first,
                    second: index,
                });
            }
            seen.insert(symbol, index);
        }

        if symbols.len() < 2 {
            return Err(AlphabetError::TooFewSymbols {
                count: symbols.len(),
            });
        }

        Ok(Self { symbols })
    }

    /// Build an alphabet from the characters of a string, one symbol per `char`.
    pub fn parse(symbols: &str) -> Result<Self, AlphabetError> {
        Self::new(symbols.chars())
    }

    /// Number of symbols (`K`).
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol with digit value `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn symbol_at(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// The symbol with digit value `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Digit value of `symbol`.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbols in digit order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
