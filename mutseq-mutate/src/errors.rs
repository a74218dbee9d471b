use thiserror::Error;

/// Failures that abort a whole batch. Problems with individual rows are
/// [`RejectReason`](crate::report::RejectReason)s instead.
#[derive(Error, Debug)]
pub enum MutateError {
    #[error(
        "None of the {mutations} mutation rows refer to one of the {sequences} reference sequences. Check that the sequence IDs match."
    )]
    NoOverlappingSequences { mutations: usize, sequences: usize },

    #[cfg(feature = "parallel")]
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
