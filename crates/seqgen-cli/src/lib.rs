//! # seqgen-cli
//!
//! Presentation layer for the seqgen binary: term formatting, JSON
//! export, file output and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
