//! Lazy iterator adapter over any sequence generator.

use num_bigint::BigUint;

use crate::generator::SequenceGenerator;

/// Lazy iterator over a sequence generator.
///
/// Yields `(index, term)` pairs starting from the sequence's zeroth value
/// at index 0, advancing the generator once per subsequent item.
/// Iteration ends if the generator refuses the operation, so iterating
/// the abstract capability yields nothing.
///
/// # Example
/// ```
/// use seqgen_core::fibonacci::FibonacciGenerator;
/// use seqgen_core::iterator::TermIterator;
///
/// let terms: Vec<_> = TermIterator::new(FibonacciGenerator::new())
///     .take(7)
///     .map(|(_, v)| v.to_string())
///     .collect();
/// assert_eq!(terms, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct TermIterator<G> {
    generator: G,
    index: u64,
}

impl<G: SequenceGenerator> TermIterator<G> {
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            index: 0,
        }
    }
}

impl<G: SequenceGenerator> Iterator for TermIterator<G> {
    type Item = (u64, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let val = if self.index == 0 {
            self.generator.current().ok()?
        } else {
            self.generator.advance().ok()?
        };
        let idx = self.index;
        self.index += 1;
        Some((idx, val))
    }
}
