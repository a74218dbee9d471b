//! # Positional mutation engine
//!
//! This crate applies compact positional mutation notation (`c.3C>T`, `c.3_6del`,
//! `c.3_4insXYZ`, `c.3_4delinsTT`, `c.3_5dup`, `c.9_13inv`) to reference sequences
//! and emits bounded mutant/wildtype windows around each edit. It provides:
//!
//! - notation screening and parsing
//! - classification into the six supported edit kinds
//! - 1-based position resolution against the reference
//! - the sequence editor, including reverse complement for inversions
//! - flank extraction and window assembly, with optional repeat-overlap trimming
//! - batch orchestration (row-parallel with the `parallel` feature) and a
//!   per-category [`BatchReport`]
//!
//! ```
//! use mutseq_core::{MutationDescriptor, SequenceTable};
//! use mutseq_mutate::{mutate_batch, MutateConfig};
//!
//! let sequences: SequenceTable = [("seq1", "ABCDEFG")].into_iter().collect();
//! let rows = vec![
//!     MutationDescriptor::new("seq1", "c.3C>X"),
//!     MutationDescriptor::new("seq1", "c.3?"),
//! ];
//!
//! let output = mutate_batch(&sequences, &rows, &MutateConfig::default().with_flank(30)).unwrap();
//! assert_eq!(output.windows[0].mut_window, "ABXDEFG");
//! assert_eq!(output.report.uncertain, 1);
//! ```

pub mod batch;
pub mod config;
pub mod edit;
pub mod errors;
pub mod flank;
pub mod kind;
pub mod notation;
pub mod overlap;
pub mod position;
pub mod report;
pub mod window;

pub use batch::{BatchOutput, mutate_batch, mutate_one, mutate_sequential};
pub use config::MutateConfig;
pub use edit::{EditedRegion, apply_edit, reverse_complement};
pub use errors::MutateError;
pub use flank::{Flanks, extract_flanks};
pub use kind::MutationKind;
pub use notation::{ParsedNotation, parse_notation, screen_markers};
pub use position::{ResolvedPosition, resolve_positions};
pub use report::{BatchReport, RejectReason};
pub use window::assemble_window;
