//! Character-class tables used by the cell classifier.
//!
//! Kept as plain data (`&'static str` membership tables) rather than scattered
//! `match` arms, per the pattern-catalog design: a classification question is
//! "is this char in class X", not a pile of one-off character comparisons.

pub const BOUNDARIES: &str = "/\\|-*=:+";
pub const UNDISPUTABLE_BOUNDARIES: &str = "|-*=:";
pub const HORIZONTAL_LINES: &str = "-=";
pub const VERTICAL_LINES: &str = "|:";
pub const ARROW_HEADS: &str = "<>^vV";
pub const CORNER_CHARS: &str = "\\/+";
pub const POINT_MARKERS: &str = "*";
pub const DASHED_LINES: &str = ":~=";

/// The predefined character classes a neighbor predicate can test membership against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Boundaries,
    UndisputableBoundaries,
    HorizontalLines,
    VerticalLines,
    ArrowHeads,
    CornerChars,
    PointMarkers,
    DashedLines,
}

impl CharClass {
    pub fn members(self) -> &'static str {
        match self {
            CharClass::Boundaries => BOUNDARIES,
            CharClass::UndisputableBoundaries => UNDISPUTABLE_BOUNDARIES,
            CharClass::HorizontalLines => HORIZONTAL_LINES,
            CharClass::VerticalLines => VERTICAL_LINES,
            CharClass::ArrowHeads => ARROW_HEADS,
            CharClass::CornerChars => CORNER_CHARS,
            CharClass::PointMarkers => POINT_MARKERS,
            CharClass::DashedLines => DASHED_LINES,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.members().contains(c)
    }
}

pub fn is_alphanumeric_glyph(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_matches_tables() {
        assert!(CharClass::HorizontalLines.contains('-'));
        assert!(CharClass::HorizontalLines.contains('='));
        assert!(!CharClass::HorizontalLines.contains('|'));
        assert!(CharClass::CornerChars.contains('+'));
        assert!(CharClass::DashedLines.contains(':'));
    }
}
