//! Row-by-row mutation of a whole mutation table.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use log::{debug, info, warn};
use mutseq_core::{MutationDescriptor, MutationWindow, SequenceTable};

use crate::config::MutateConfig;
use crate::edit::apply_edit;
use crate::errors::MutateError;
use crate::flank::extract_flanks;
use crate::kind::MutationKind;
use crate::notation::{parse_notation, screen_markers};
use crate::overlap::{repeat_overlap, trim_flanks};
use crate::position::resolve_positions;
use crate::report::{BatchReport, RejectReason};
use crate::window::{ambiguous_bases, assemble_window};

/// Accepted windows, in input order, and the tally for the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutput {
    pub windows: Vec<MutationWindow>,
    pub report: BatchReport,
}

///
/// Run a single mutation row through the pipeline: sequence lookup, marker
/// screening, notation parsing, classification, position resolution, edit,
/// flank extraction and window assembly, followed by the length and
/// ambiguity filters of `config`.
///
pub fn mutate_one(
    sequences: &SequenceTable,
    descriptor: &MutationDescriptor,
    config: &MutateConfig,
) -> Result<MutationWindow, RejectReason> {
    let sequence = sequences
        .get(&descriptor.seq_id)
        .ok_or(RejectReason::MissingSequence)?
        .as_bytes();

    let notation = descriptor.notation.trim();
    if let Some(reason) = screen_markers(notation) {
        return Err(reason);
    }

    let parsed = parse_notation(notation).ok_or(RejectReason::UnparseableNotation)?;
    let kind = MutationKind::classify(parsed.edit).ok_or(RejectReason::UnknownMutationType)?;

    let position = resolve_positions(parsed.positions, kind, sequence.len())?;
    let region = apply_edit(sequence, kind, &position, parsed.edit)?;

    let mut flanks = extract_flanks(sequence, &position.span, config.flank);
    if config.trim_repeat_overlap {
        let indel = match kind {
            MutationKind::Deletion => &region.wt_region,
            _ => &region.mut_region,
        };
        let overlap = repeat_overlap(kind, indel, &flanks);
        flanks = trim_flanks(flanks, &overlap);
    }

    let window = assemble_window(descriptor, &flanks, &region)?;

    if let Some(min_len) = config.min_seq_len {
        if window.window_len < min_len {
            return Err(RejectReason::BelowMinLength);
        }
    }
    if let Some(max_n) = config.max_ambiguous {
        if ambiguous_bases(&window.mut_window) > max_n {
            return Err(RejectReason::TooAmbiguous);
        }
    }

    Ok(window)
}

fn tally(
    mut acc: BatchOutput,
    descriptor: &MutationDescriptor,
    sequences: &SequenceTable,
    config: &MutateConfig,
) -> BatchOutput {
    match mutate_one(sequences, descriptor, config) {
        Ok(window) => {
            acc.report.record_accepted();
            acc.windows.push(window);
        }
        Err(reason) => {
            debug!("Rejected {}: {}", descriptor, reason);
            acc.report.record(reason);
        }
    }
    acc
}

fn combine(mut left: BatchOutput, right: BatchOutput) -> BatchOutput {
    left.windows.extend(right.windows);
    left.report = left.report.merge(right.report);
    left
}

#[cfg(feature = "parallel")]
fn run_rows(
    sequences: &SequenceTable,
    mutations: &[MutationDescriptor],
    config: &MutateConfig,
) -> Result<BatchOutput, MutateError> {
    // rayon keeps fold chunks contiguous and reduce ordered, so windows stay in input order
    let run = || {
        mutations
            .par_iter()
            .fold(BatchOutput::default, |acc, descriptor| {
                tally(acc, descriptor, sequences, config)
            })
            .reduce(BatchOutput::default, combine)
    };

    match config.threads {
        Some(num_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?;
            Ok(pool.install(run))
        }
        None => Ok(run()),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_rows(
    sequences: &SequenceTable,
    mutations: &[MutationDescriptor],
    config: &MutateConfig,
) -> Result<BatchOutput, MutateError> {
    Ok(mutate_sequential(sequences, mutations, config))
}

///
/// Process every row on the calling thread. Produces the same output as
/// [`mutate_batch`].
///
pub fn mutate_sequential(
    sequences: &SequenceTable,
    mutations: &[MutationDescriptor],
    config: &MutateConfig,
) -> BatchOutput {
    mutations
        .iter()
        .fold(BatchOutput::default(), |acc, descriptor| {
            tally(acc, descriptor, sequences, config)
        })
}

///
/// Apply every row of `mutations` to `sequences`.
///
/// Rows that cannot be applied are counted in the returned report, never raised.
/// The batch only fails when the table is non-empty and none of its rows refer
/// to a loaded sequence, which almost always means mismatched identifiers.
///
/// # Example
///
/// ```
/// use mutseq_core::{MutationDescriptor, SequenceTable};
/// use mutseq_mutate::{mutate_batch, MutateConfig};
///
/// let sequences: SequenceTable = [("seq1", "ABCDEFG")].into_iter().collect();
/// let rows = vec![MutationDescriptor::new("seq1", "c.3_6del")];
///
/// let output = mutate_batch(&sequences, &rows, &MutateConfig::default()).unwrap();
/// assert_eq!(output.windows[0].mut_window, "ABG");
/// assert_eq!(output.report.accepted, 1);
/// ```
///
pub fn mutate_batch(
    sequences: &SequenceTable,
    mutations: &[MutationDescriptor],
    config: &MutateConfig,
) -> Result<BatchOutput, MutateError> {
    if !mutations.is_empty() && !mutations.iter().any(|m| sequences.contains(&m.seq_id)) {
        warn!(
            "No mutation row matches a reference ID ({} sequences loaded)",
            sequences.len()
        );
        return Err(MutateError::NoOverlappingSequences {
            mutations: mutations.len(),
            sequences: sequences.len(),
        });
    }

    info!(
        "Applying {} mutations to {} reference sequences",
        mutations.len(),
        sequences.len()
    );
    let output = run_rows(sequences, mutations, config)?;
    info!(
        "Accepted {} of {} mutations",
        output.report.accepted, output.report.total
    );

    Ok(output)
}
