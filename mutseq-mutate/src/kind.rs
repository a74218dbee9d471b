use std::fmt::{self, Display};

/// The six edit operations the engine can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Substitution,
    Deletion,
    Insertion,
    Delins,
    Duplication,
    Inversion,
}

impl MutationKind {
    ///
    /// Classify an edit token. `delins` contains both `del` and `ins`, so it has
    /// to be tested before either of them. Returns `None` for unknown edits.
    ///
    pub fn classify(edit: &str) -> Option<MutationKind> {
        if edit.contains('>') {
            Some(MutationKind::Substitution)
        } else if edit.contains("delins") {
            Some(MutationKind::Delins)
        } else if edit.contains("del") {
            Some(MutationKind::Deletion)
        } else if edit.contains("ins") {
            Some(MutationKind::Insertion)
        } else if edit.contains("dup") {
            Some(MutationKind::Duplication)
        } else if edit.contains("inv") {
            Some(MutationKind::Inversion)
        } else {
            None
        }
    }

    /// Whether the edit consumes reference bases at the mutation site.
    pub fn consumes_reference(&self) -> bool {
        use MutationKind::*;
        match self {
            Substitution | Deletion | Delins | Inversion => true,
            Insertion | Duplication => false,
        }
    }
}

impl Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MutationKind::*;
        let name = match self {
            Substitution => "substitution",
            Deletion => "deletion",
            Insertion => "insertion",
            Delins => "delins",
            Duplication => "duplication",
            Inversion => "inversion",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("C>T", Some(MutationKind::Substitution))]
    #[case("delinsAT", Some(MutationKind::Delins))]
    #[case("del", Some(MutationKind::Deletion))]
    #[case("delCDEF", Some(MutationKind::Deletion))]
    #[case("insXYZ", Some(MutationKind::Insertion))]
    #[case("dup", Some(MutationKind::Duplication))]
    #[case("inv", Some(MutationKind::Inversion))]
    #[case("con", None)]
    #[case("X", None)]
    fn test_classify(#[case] edit: &str, #[case] expected: Option<MutationKind>) {
        assert_eq!(MutationKind::classify(edit), expected);
    }

    #[rstest]
    fn test_consumes_reference() {
        assert!(MutationKind::Deletion.consumes_reference());
        assert!(!MutationKind::Insertion.consumes_reference());
        assert!(!MutationKind::Duplication.consumes_reference());
    }
}
