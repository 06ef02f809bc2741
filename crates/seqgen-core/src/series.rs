//! Range collection over a sequence generator.

use num_bigint::BigUint;
use tracing::debug;

use crate::cancel::CancellationToken;
use crate::generator::{SeqError, SequenceGenerator};

/// Upper bound on the preallocation hint; `end` may be `u64::MAX`.
const CAPACITY_HINT_MAX: u64 = 4096;

/// Preallocation hint for a collected range. Callers have already
/// checked `start <= end`; the count saturates rather than overflowing
/// when the range spans the whole index space.
#[allow(clippy::cast_possible_truncation)]
fn capacity_hint(start: u64, end: u64) -> usize {
    (end - start).saturating_add(1).min(CAPACITY_HINT_MAX) as usize
}

/// Collect `(index, term)` pairs for indices in `start..=end`.
///
/// Walks the generator from its zeroth value through index `end`,
/// recording the terms with index `>= start`. The token is checked once
/// per step so long walks stay responsive to Ctrl+C.
pub fn collect_range(
    generator: &mut dyn SequenceGenerator,
    start: u64,
    end: u64,
    cancel: &CancellationToken,
) -> Result<Vec<(u64, BigUint)>, SeqError> {
    if start > end {
        return Err(SeqError::Config("start must be <= end".into()));
    }

    let mut results = Vec::with_capacity(capacity_hint(start, end));

    for i in 0..=end {
        cancel.check_cancelled()?;

        let term = if i == 0 {
            generator.current()?
        } else {
            generator.advance()?
        };

        if i >= start {
            results.push((i, term));
        }
    }

    debug!(
        sequence = generator.name(),
        start, end, "range collection complete"
    );
    Ok(results)
}
