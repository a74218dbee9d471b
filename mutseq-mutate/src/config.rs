/// Options for a batch run.
///
/// ```
/// use mutseq_mutate::MutateConfig;
///
/// let config = MutateConfig::default().with_flank(30).with_min_seq_len(10);
/// assert_eq!(config.flank, Some(30));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct MutateConfig {
    /// Bases kept on each side of the edit. `None` keeps the whole sequence.
    pub flank: Option<usize>,
    /// Drop mutant windows shorter than this.
    pub min_seq_len: Option<usize>,
    /// Drop mutant windows with more `N` bases than this.
    pub max_ambiguous: Option<usize>,
    /// Shave flanks by the repeat overlap of indels, see [`crate::overlap`].
    pub trim_repeat_overlap: bool,
    /// Worker threads for the batch. `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl MutateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flank(mut self, k: usize) -> Self {
        self.flank = Some(k);
        self
    }

    pub fn with_min_seq_len(mut self, len: usize) -> Self {
        self.min_seq_len = Some(len);
        self
    }

    pub fn with_max_ambiguous(mut self, n: usize) -> Self {
        self.max_ambiguous = Some(n);
        self
    }

    pub fn with_trim_repeat_overlap(mut self, enabled: bool) -> Self {
        self.trim_repeat_overlap = enabled;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_deserialize_partial_yaml() {
        let config: MutateConfig = serde_yaml::from_str("flank: 30\ntrim_repeat_overlap: true\n").unwrap();
        assert_eq!(
            config,
            MutateConfig::default()
                .with_flank(30)
                .with_trim_repeat_overlap(true)
        );
    }

    #[rstest]
    fn test_deserialize_rejects_unknown_keys() {
        let config: Result<MutateConfig, _> = serde_yaml::from_str("flnak: 30\n");
        assert!(config.is_err());
    }
}
