//! Generator factory and registry.

use tracing::debug;

use crate::fibonacci::FibonacciGenerator;
use crate::generator::{SeqError, SequenceGenerator};
use crate::lucas::LucasGenerator;

/// Factory trait for creating sequence generators.
pub trait GeneratorFactory: Send + Sync {
    /// Create a generator by sequence name.
    fn get(&self, name: &str) -> Result<Box<dyn SequenceGenerator>, SeqError>;

    /// List all available sequence names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory for the built-in sequences.
///
/// Generators are stateful, so every lookup hands out a fresh instance
/// positioned before the zeroth term.
pub struct DefaultFactory;

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Box<dyn SequenceGenerator>, SeqError> {
        debug!(sequence = name, "creating generator");
        match name {
            "fib" | "fibonacci" => Ok(Box::new(FibonacciGenerator::new())),
            "lucas" => Ok(Box::new(LucasGenerator::new())),
            _ => Err(SeqError::Config(format!("unknown sequence: {name}"))),
        }
    }

    fn available(&self) -> Vec<&str> {
        vec!["fibonacci", "lucas"]
    }
}
