//! Constants and u64 oracle tables for the built-in sequences.

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Maximum Lucas index that fits in a u64.
/// L(92) = 16860207025497407047
pub const MAX_LUCAS_U64: u64 = 92;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Precomputed Lucas values for n = 0..=92.
///
/// L(92) = 16,860,207,025,497,407,047 is the largest Lucas number that
/// fits in `u64`.
pub const LUCAS_TABLE: [u64; 93] = {
    let mut table = [0u64; 93];
    table[0] = 2;
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the seqgen binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Generation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
