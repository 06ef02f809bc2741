//! The sequence generator contract.
//!
//! `SequenceGenerator` is the two-operation capability consumed by the CLI
//! and the iterator adapter. The default method bodies make the bare
//! contract abstract: invoking them without a concrete recurrence bound is
//! a programming error and fails with `SeqError::Unsupported`.

use num_bigint::BigUint;

/// Error type for sequence generation.
#[derive(Debug, thiserror::Error)]
pub enum SeqError {
    /// Operation invoked on the abstract contract rather than a concrete
    /// sequence. Signals a programming error; not recoverable.
    #[error("unsupported operation: {0} requires a concrete sequence")]
    Unsupported(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generation was cancelled.
    #[error("generation cancelled")]
    Cancelled,
}

/// Contract for stateful sequence generators.
///
/// A generator owns a window of the most recent terms and produces the
/// sequence one term at a time: `advance` computes and commits the next
/// term, `current` reads the most recently committed term without
/// mutating state. A freshly created generator has committed nothing yet;
/// `current` then reports the sequence's defined zeroth value.
pub trait SequenceGenerator: Send {
    /// Compute, commit and return the next term of the sequence.
    fn advance(&mut self) -> Result<BigUint, SeqError> {
        Err(SeqError::Unsupported("advance"))
    }

    /// Return the most recently committed term, or the sequence's zeroth
    /// value if `advance` has never been called.
    fn current(&self) -> Result<BigUint, SeqError> {
        Err(SeqError::Unsupported("current"))
    }

    /// Get the name of this generator.
    fn name(&self) -> &str;
}

/// The abstract capability instantiated directly.
///
/// Exists only to be specialized; both operations fail with
/// `SeqError::Unsupported` for all call sequences.
pub struct GenericGenerator;

impl GenericGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenericGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for GenericGenerator {
    fn name(&self) -> &'static str {
        "Generic"
    }
}
