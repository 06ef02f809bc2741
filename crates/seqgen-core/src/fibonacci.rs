//! Fibonacci sequence generator.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::generator::{SeqError, SequenceGenerator};

/// Stateful Fibonacci generator.
///
/// Holds a window of the last two committed terms; older terms are
/// discarded as soon as a new term lands. The zeroth value is F(0) = 0,
/// reported by `current` before any `advance`; the first `advance`
/// produces F(1) = 1, so after n advances `current` equals the standard
/// F(n).
pub struct FibonacciGenerator {
    last_two: Vec<BigUint>,
}

impl FibonacciGenerator {
    /// Create a generator with an empty window, before F(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_two: Vec::with_capacity(2),
        }
    }
}

impl Default for FibonacciGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for FibonacciGenerator {
    fn advance(&mut self) -> Result<BigUint, SeqError> {
        let next = match self.last_two.as_slice() {
            [] => BigUint::one(),
            [a] => a.clone(),
            [.., a, b] => a + b,
        };
        self.last_two.push(next.clone());
        if self.last_two.len() > 2 {
            self.last_two.remove(0);
        }
        Ok(next)
    }

    fn current(&self) -> Result<BigUint, SeqError> {
        Ok(self.last_two.last().cloned().unwrap_or_else(BigUint::zero))
    }

    fn name(&self) -> &'static str {
        "Fibonacci"
    }
}
