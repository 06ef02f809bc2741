//! CLI term presenter.

use std::time::Duration;

use num_bigint::BigUint;

use seqgen_core::generator::SeqError;

use crate::output::{format_duration, format_number, format_term};

/// Presents collected terms on the terminal.
pub struct TermPresenter {
    verbose: bool,
    quiet: bool,
}

impl TermPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present a collected range of terms.
    ///
    /// Quiet mode prints only the final term, one value suitable for
    /// scripting; otherwise a header, the indexed terms and the elapsed
    /// time are shown.
    #[allow(clippy::cast_possible_truncation)]
    pub fn present_terms(
        &self,
        sequence: &str,
        terms: &[(u64, BigUint)],
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            if let Some((_, last)) = terms.last() {
                println!("{last}");
            }
            return;
        }

        println!("Sequence: {sequence}");
        println!("Terms: {}", format_number(terms.len() as u64));
        println!("Duration: {}", format_duration(duration));

        for (n, term) in terms {
            println!("  {sequence}({n}) = {}", format_term(term, self.verbose));
        }

        if details {
            if let Some((n, last)) = terms.last() {
                let bits = last.bits();
                let digits = last.to_string().len();
                println!("Last term index: {}", format_number(*n));
                println!("Last term bits: {bits}");
                println!("Last term digits: {digits}");
            }
        }
    }

    /// Present an error.
    pub fn present_error(&self, error: &SeqError) {
        eprintln!("Error: {error}");
    }
}
