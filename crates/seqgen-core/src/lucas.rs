//! Lucas sequence generator.

use num_bigint::BigUint;
use num_traits::One;

use crate::generator::{SeqError, SequenceGenerator};

/// Stateful Lucas generator.
///
/// Same window discipline as the Fibonacci generator but with the Lucas
/// seeds: the zeroth value is L(0) = 2 and the first `advance` produces
/// L(1) = 1, seeding L(0) into the window alongside it so the two-term
/// sum rule takes over from L(2) = 3 onwards.
pub struct LucasGenerator {
    last_two: Vec<BigUint>,
}

impl LucasGenerator {
    /// Create a generator with an empty window, before L(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_two: Vec::with_capacity(2),
        }
    }
}

impl Default for LucasGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for LucasGenerator {
    fn advance(&mut self) -> Result<BigUint, SeqError> {
        let seeding = self.last_two.is_empty();
        let next = match self.last_two.as_slice() {
            [] => BigUint::one(),
            [a] => a.clone(),
            [.., a, b] => a + b,
        };
        if seeding {
            // L(0) enters the window alongside the produced L(1).
            self.last_two.push(BigUint::from(2u32));
        }
        self.last_two.push(next.clone());
        if self.last_two.len() > 2 {
            self.last_two.remove(0);
        }
        Ok(next)
    }

    fn current(&self) -> Result<BigUint, SeqError> {
        Ok(self
            .last_two
            .last()
            .cloned()
            .unwrap_or_else(|| BigUint::from(2u32)))
    }

    fn name(&self) -> &'static str {
        "Lucas"
    }
}
