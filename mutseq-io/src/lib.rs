//! # Input/Output for mutseq
//!
//! Readers for the two inputs of a mutation run, a reference FASTA and a CSV/TSV
//! mutation table, and writers for the resulting windows (FASTA, gzipped FASTA,
//! and a TSV with wildtype and mutant windows side by side).
//!
pub mod error;
pub mod fasta;
pub mod table;

// re-expose core functions
pub use error::*;
pub use fasta::*;
pub use table::*;
