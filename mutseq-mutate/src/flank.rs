use std::ops::Range;

/// Reference context on either side of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanks<'a> {
    pub left: &'a [u8],
    pub right: &'a [u8],
}

impl Flanks<'_> {
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

///
/// Slice up to `k` bases on each side of `span`, clipped to the sequence. With
/// `k = None` the flanks run to the sequence ends.
///
pub fn extract_flanks<'a>(sequence: &'a [u8], span: &Range<usize>, k: Option<usize>) -> Flanks<'a> {
    let len = sequence.len();
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);

    let left_start = match k {
        Some(k) => start.saturating_sub(k),
        None => 0,
    };
    let right_end = match k {
        Some(k) => end.saturating_add(k).min(len),
        None => len,
    };

    Flanks {
        left: &sequence[left_start..start],
        right: &sequence[end..right_end],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const SEQ: &[u8] = b"ABCDEFGHIJ";

    #[rstest]
    #[case(4..5, Some(2), "CD", "FG")]
    #[case(4..5, None, "ABCD", "FGHIJ")]
    #[case(1..2, Some(3), "A", "CDE")]
    #[case(8..10, Some(3), "FGH", "")]
    #[case(0..0, Some(3), "", "ABC")]
    #[case(10..10, Some(3), "HIJ", "")]
    #[case(4..5, Some(0), "", "")]
    #[case(3..3, Some(30), "ABC", "DEFGHIJ")]
    fn test_extract_flanks(
        #[case] span: Range<usize>,
        #[case] k: Option<usize>,
        #[case] left: &str,
        #[case] right: &str,
    ) {
        let flanks = extract_flanks(SEQ, &span, k);
        assert_eq!(flanks.left, left.as_bytes());
        assert_eq!(flanks.right, right.as_bytes());
        assert_eq!(flanks.len(), left.len() + right.len());
    }

    #[rstest]
    fn test_flanks_outlive_span() {
        let flanks = {
            let span = 2..3;
            extract_flanks(SEQ, &span, Some(1))
        };
        assert_eq!(flanks.left, b"B");
        assert_eq!(flanks.right, b"D");
    }

    #[rstest]
    fn test_extract_flanks_huge_k_does_not_overflow() {
        let flanks = extract_flanks(SEQ, &(4..5), Some(usize::MAX));
        assert_eq!(flanks.left, b"ABCD");
        assert_eq!(flanks.right, b"FGHIJ");
    }
}
