//! Parsing of the positional mutation notation, e.g. `c.3C>T`, `c.3_6del`, `c.3_4insXYZ`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::RejectReason;

static NOTATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[cg]\.([0-9]+(?:_[0-9]+)*)([A-Za-z>][A-Za-z>0-9]*)$")
        .expect("notation pattern is a valid regex")
});

/// The two raw parts of a notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNotation<'a> {
    /// 1-based positions, e.g. `"9_13"` or `"5"`.
    pub positions: &'a str,
    /// Edit token, e.g. `"C>T"`, `"del"`, `"insXYZ"`.
    pub edit: &'a str,
}

///
/// Reject notations carrying markers the engine cannot apply to a plain sequence.
/// A notation with several markers is reported under the first match, checked in
/// the order uncertain, ambiguous, intronic, posttranslational.
///
pub fn screen_markers(notation: &str) -> Option<RejectReason> {
    if notation.contains('?') {
        Some(RejectReason::UncertainMutation)
    } else if notation.contains(['(', ')']) {
        Some(RejectReason::AmbiguousPosition)
    } else if notation.contains(['+', '-']) {
        Some(RejectReason::IntronicOffset)
    } else if notation.contains('*') {
        Some(RejectReason::PosttranslationalRegion)
    } else {
        None
    }
}

///
/// Split a notation into its position and edit parts. Returns `None` when the
/// `c.`/`g.` anchor or the trailing edit token is missing.
///
pub fn parse_notation(notation: &str) -> Option<ParsedNotation<'_>> {
    let caps = NOTATION_RE.captures(notation)?;
    Some(ParsedNotation {
        positions: caps.get(1)?.as_str(),
        edit: caps.get(2)?.as_str(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("c.3C>T", "3", "C>T")]
    #[case("c.3_6del", "3_6", "del")]
    #[case("c.3_4insXYZ", "3_4", "insXYZ")]
    #[case("g.1000_1002delinsAT", "1000_1002", "delinsAT")]
    #[case("c.9_13inv", "9_13", "inv")]
    #[case("c.3_5dup", "3_5", "dup")]
    #[case("c.3_6del4", "3_6", "del4")]
    fn test_parse_notation(#[case] notation: &str, #[case] positions: &str, #[case] edit: &str) {
        let parsed = parse_notation(notation).unwrap();
        assert_eq!(parsed.positions, positions);
        assert_eq!(parsed.edit, edit);
    }

    #[rstest]
    #[case("3C>T")]
    #[case("p.V600E")]
    #[case("c.")]
    #[case("c.36")]
    #[case("c.C>T")]
    #[case("n.3del")]
    #[case("")]
    #[case("c.3C>\u{0663}")]
    #[case("c.\u{0663}del")]
    fn test_parse_notation_no_match(#[case] notation: &str) {
        assert_eq!(parse_notation(notation), None);
    }

    #[rstest]
    #[case("c.3?", Some(RejectReason::UncertainMutation))]
    #[case("c.(3_6)del", Some(RejectReason::AmbiguousPosition))]
    #[case("c.100+1G>A", Some(RejectReason::IntronicOffset))]
    #[case("c.-14G>C", Some(RejectReason::IntronicOffset))]
    #[case("c.*5del", Some(RejectReason::PosttranslationalRegion))]
    #[case("c.(100+1)?", Some(RejectReason::UncertainMutation))]
    #[case("c.(100+1_101-1)del", Some(RejectReason::AmbiguousPosition))]
    #[case("c.3C>T", None)]
    fn test_screen_markers(#[case] notation: &str, #[case] expected: Option<RejectReason>) {
        assert_eq!(screen_markers(notation), expected);
    }
}
