//! Error handling and exit codes.

use seqgen_core::constants::exit_codes;
use seqgen_core::generator::SeqError;

/// Map a generation error to the appropriate process exit code.
pub fn handle_error(err: &SeqError) -> i32 {
    match err {
        SeqError::Unsupported(_) => exit_codes::ERROR_GENERIC,
        SeqError::Config(_) => exit_codes::ERROR_CONFIG,
        SeqError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}
