//! # seqgen-core
//!
//! Core library for seqgen stateful sequence generators.
//! Defines the `SequenceGenerator` contract and the Fibonacci and Lucas
//! generators that implement it.

pub mod cancel;
pub mod constants;
pub mod fibonacci;
pub mod generator;
pub mod iterator;
pub mod lucas;
pub mod registry;
pub mod series;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{exit_codes, FIB_TABLE, LUCAS_TABLE, MAX_FIB_U64, MAX_LUCAS_U64};
pub use fibonacci::FibonacciGenerator;
pub use generator::{GenericGenerator, SeqError, SequenceGenerator};
pub use iterator::TermIterator;
pub use lucas::LucasGenerator;
pub use registry::{DefaultFactory, GeneratorFactory};

use num_bigint::BigUint;

/// Compute F(n) by advancing a fresh Fibonacci generator n times.
///
/// This is a convenience function for simple use cases. For streaming
/// terms, cancellation or alternative sequences, use the
/// `SequenceGenerator` trait directly.
///
/// # Example
/// ```
/// assert_eq!(seqgen_core::fibonacci(10).to_string(), "55");
/// assert_eq!(seqgen_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut generator = FibonacciGenerator::new();
    for _ in 0..n {
        generator
            .advance()
            .expect("concrete generator always advances");
    }
    generator
        .current()
        .expect("concrete generator always has a current term")
}
