//! # Core models for mutseq
//!
//! Shared data types used across the mutseq workspace: reference sequences and the
//! lookup table built from them, mutation-table rows, and the mutant/wildtype windows
//! produced by the engine in `mutseq-mutate`. Also carries small file utilities
//! (gzip-aware readers, FASTA header parsing) used by `mutseq-io`.

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::SequenceError;
pub use models::*;
