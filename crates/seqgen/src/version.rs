//! Version information.

/// Get the version string, as shown by `--version`.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with the binary name.
#[must_use]
pub fn full_version() -> String {
    format!("seqgen {}", version())
}
