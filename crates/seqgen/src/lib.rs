//! seqgen library — application logic for the sequence generator CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
