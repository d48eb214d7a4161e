//! Unique short-string generation.
//!
//! [`number_to_string`] maps counter values onto strings over an
//! [`Alphabet`] using a bijective base-K numeral system: every `u64` maps to
//! exactly one string and no two values share a string. Unlike plain base-K
//! there is no "leading zero" ambiguity, so enumerating `0, 1, 2, ...` yields
//! every single-symbol string, then every two-symbol string, and so on, each
//! length class in the order induced by the alphabet.
//!
//! With the alphabet `ab` the enumeration is:
//!
//! ```text
//! 0 -> a   1 -> b   2 -> aa   3 -> ab   4 -> ba   5 -> bb   6 -> aaa ...
//! ```
//!
//! [`SequenceGenerator`] owns a counter and hands out the next string on
//! every call. Consumers depend on the [`UniqueStringSource`] trait so tests
//! can substitute a stub.

use std::sync::{Arc, Mutex};

use tracing::{trace, warn};

use crate::alphabet::Alphabet;
use crate::error::{MirrorError, MirrorResult};

/// Map `n` to its string in the bijective base-K enumeration over `alphabet`.
///
/// Pure: the same `n` and alphabet always give the same string.
pub fn number_to_string(n: u64, alphabet: &Alphabet) -> String {
    let base = alphabet.size() as u64;
    let mut digits = Vec::new();
    let mut n = n;

    // floor(n / K) - 1 is negative exactly when n < K.
    loop {
        digits.push(alphabet.symbol_at((n % base) as usize));
        if n < base {
            break;
        }
        n = n / base - 1;
    }

    digits.iter().rev().collect()
}

/// A source of strings that are distinct for the lifetime of the source.
pub trait UniqueStringSource {
    /// Produce the next string. Never repeats an earlier result.
    fn next_unique(&mut self) -> MirrorResult<String>;
}

impl<S: UniqueStringSource + ?Sized> UniqueStringSource for &mut S {
    fn next_unique(&mut self) -> MirrorResult<String> {
        (**self).next_unique()
    }
}

impl<S: UniqueStringSource + ?Sized> UniqueStringSource for Box<S> {
    fn next_unique(&mut self) -> MirrorResult<String> {
        (**self).next_unique()
    }
}

/// Counter-backed generator of the shortest unused string.
///
/// The counter starts at zero (or wherever [`starting_from`] puts it) and
/// advances by one per generated string. It is never reset or decremented.
/// Once it reaches `u64::MAX` every further call fails with
/// [`MirrorError::Range`].
///
/// [`starting_from`]: SequenceGenerator::starting_from
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    alphabet: Alphabet,
    count: u64,
}

impl SequenceGenerator {
    /// Create a generator with a fresh counter.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::starting_from(alphabet, 0)
    }

    /// Create a generator that resumes at `count`.
    pub fn starting_from(alphabet: Alphabet, count: u64) -> Self {
        Self { alphabet, count }
    }

    /// Number of strings handed out so far (the next counter value).
    pub fn counter(&self) -> u64 {
        self.count
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The string the next call would return, without advancing.
    pub fn peek(&self) -> Option<String> {
        (self.count < u64::MAX).then(|| number_to_string(self.count, &self.alphabet))
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl UniqueStringSource for SequenceGenerator {
    fn next_unique(&mut self) -> MirrorResult<String> {
        if self.count == u64::MAX {
            warn!(count = self.count, "sequence counter exhausted");
            return Err(MirrorError::Range { count: self.count });
        }

        let value = number_to_string(self.count, &self.alphabet);
        trace!(count = self.count, value = %value, "generated unique string");
        self.count += 1;
        Ok(value)
    }
}

impl Iterator for SequenceGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_unique().ok()
    }
}

/// Cloneable handle that shares one [`SequenceGenerator`] across threads.
///
/// Every clone draws from the same counter; calls are serialized by a mutex.
#[derive(Debug, Clone)]
pub struct SharedSequence {
    inner: Arc<Mutex<SequenceGenerator>>,
}

impl SharedSequence {
    pub fn new(generator: SequenceGenerator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    /// Current counter value of the shared generator.
    pub fn counter(&self) -> MirrorResult<u64> {
        let guard = self
            .inner
            .lock()
            .map_err(|e| MirrorError::internal(format!("sequence lock poisoned: {}", e)))?;
        Ok(guard.counter())
    }
}

impl UniqueStringSource for SharedSequence {
    fn next_unique(&mut self) -> MirrorResult<String> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| MirrorError::internal(format!("sequence lock poisoned: {}", e)))?;
        guard.next_unique()
    }
}
