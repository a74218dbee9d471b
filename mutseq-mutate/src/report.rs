//! Batch-wide accounting of accepted and rejected mutation rows.
//!
//! Every row of a batch ends up either accepted (a [`MutationWindow`](mutseq_core::MutationWindow)
//! was produced) or rejected for exactly one [`RejectReason`], so
//! `accepted + rejected() == total` always holds.

use std::fmt::{self, Display};

/// Why a single mutation row was dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The row's `seq_id` is not in the sequence table.
    MissingSequence,
    /// Notation contains `?`.
    UncertainMutation,
    /// Notation contains `(` or `)`.
    AmbiguousPosition,
    /// Notation contains an intronic offset marker (`+` or `-`).
    IntronicOffset,
    /// Notation contains `*`.
    PosttranslationalRegion,
    /// Notation does not match `(c|g).<positions><edit>` or its parts are malformed.
    UnparseableNotation,
    /// The edit token names no known operation.
    UnknownMutationType,
    PositionOutOfRange,
    WildtypeBaseMismatch,
    EmptyMutantWindow,
    BelowMinLength,
    TooAmbiguous,
}

impl RejectReason {
    pub const ALL: [RejectReason; 12] = [
        RejectReason::MissingSequence,
        RejectReason::UncertainMutation,
        RejectReason::AmbiguousPosition,
        RejectReason::IntronicOffset,
        RejectReason::PosttranslationalRegion,
        RejectReason::UnparseableNotation,
        RejectReason::UnknownMutationType,
        RejectReason::PositionOutOfRange,
        RejectReason::WildtypeBaseMismatch,
        RejectReason::EmptyMutantWindow,
        RejectReason::BelowMinLength,
        RejectReason::TooAmbiguous,
    ];

    /// Human readable description used in the batch summary.
    pub fn description(&self) -> &'static str {
        use RejectReason::*;
        match self {
            MissingSequence => "sequence ID not found in reference",
            UncertainMutation => "uncertain mutation (contains '?')",
            AmbiguousPosition => "ambiguous position (contains parentheses)",
            IntronicOffset => "intronic offset (contains '+' or '-')",
            PosttranslationalRegion => "posttranslational region (contains '*')",
            UnparseableNotation => "unparseable notation",
            UnknownMutationType => "unknown mutation type",
            PositionOutOfRange => "position out of range of the sequence",
            WildtypeBaseMismatch => "wildtype base does not match the reference",
            EmptyMutantWindow => "empty mutant window",
            BelowMinLength => "mutant window shorter than the minimum length",
            TooAmbiguous => "too many N bases in the mutant window",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Counts for one batch run.
///
/// Reports from disjoint parts of a batch combine with [`BatchReport::merge`], which
/// lets each worker thread keep its own report and fold them together at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchReport {
    pub total: usize,
    pub accepted: usize,

    pub missing_sequence: usize,
    pub uncertain: usize,
    pub ambiguous_position: usize,
    pub intronic: usize,
    pub posttranslational: usize,
    pub unparseable_notation: usize,
    pub unknown_mutation_type: usize,
    pub position_out_of_range: usize,
    pub wildtype_base_mismatch: usize,

    // post-assembly filters
    pub empty_mutant_window: usize,
    pub below_min_length: usize,
    pub too_ambiguous: usize,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self) {
        self.total += 1;
        self.accepted += 1;
    }

    pub fn record(&mut self, reason: RejectReason) {
        self.total += 1;
        *self.counter_mut(reason) += 1;
    }

    pub fn count(&self, reason: RejectReason) -> usize {
        use RejectReason::*;
        match reason {
            MissingSequence => self.missing_sequence,
            UncertainMutation => self.uncertain,
            AmbiguousPosition => self.ambiguous_position,
            IntronicOffset => self.intronic,
            PosttranslationalRegion => self.posttranslational,
            UnparseableNotation => self.unparseable_notation,
            UnknownMutationType => self.unknown_mutation_type,
            PositionOutOfRange => self.position_out_of_range,
            WildtypeBaseMismatch => self.wildtype_base_mismatch,
            EmptyMutantWindow => self.empty_mutant_window,
            BelowMinLength => self.below_min_length,
            TooAmbiguous => self.too_ambiguous,
        }
    }

    fn counter_mut(&mut self, reason: RejectReason) -> &mut usize {
        use RejectReason::*;
        match reason {
            MissingSequence => &mut self.missing_sequence,
            UncertainMutation => &mut self.uncertain,
            AmbiguousPosition => &mut self.ambiguous_position,
            IntronicOffset => &mut self.intronic,
            PosttranslationalRegion => &mut self.posttranslational,
            UnparseableNotation => &mut self.unparseable_notation,
            UnknownMutationType => &mut self.unknown_mutation_type,
            PositionOutOfRange => &mut self.position_out_of_range,
            WildtypeBaseMismatch => &mut self.wildtype_base_mismatch,
            EmptyMutantWindow => &mut self.empty_mutant_window,
            BelowMinLength => &mut self.below_min_length,
            TooAmbiguous => &mut self.too_ambiguous,
        }
    }

    /// Rows whose notation could not be turned into a known edit.
    pub fn unknown_notation(&self) -> usize {
        self.unparseable_notation + self.unknown_mutation_type
    }

    pub fn rejected(&self) -> usize {
        RejectReason::ALL.iter().map(|r| self.count(*r)).sum()
    }

    /// Share of `count` in the batch total, in percent. Zero for an empty batch.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    pub fn merge(mut self, other: BatchReport) -> BatchReport {
        self.total += other.total;
        self.accepted += other.accepted;
        for reason in RejectReason::ALL {
            *self.counter_mut(reason) += other.count(reason);
        }
        self
    }
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} of {} mutations accepted ({:.2}%)",
            self.accepted,
            self.total,
            self.percent(self.accepted)
        )?;
        for reason in RejectReason::ALL {
            let count = self.count(reason);
            if count == 0 {
                continue;
            }
            writeln!(
                f,
                "  rejected, {}: {} ({:.2}%)",
                reason,
                count,
                self.percent(count)
            )?;
        }
        Ok(())
    }
}
