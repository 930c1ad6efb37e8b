//! The cell classifier: local 3x3 neighborhood pattern matching.
//!
//! A cell's classification is derived from two things: its own character, and
//! which of its four cardinal neighbors are "entries" — neighbors whose
//! character belongs to the class of glyphs that can continue a boundary
//! arriving from that direction. Counting entries collapses the dozens of
//! ad hoc "is this a T or a cross or a corner" questions into one table scan.

use crate::cell::{Cell, Compass};
use crate::charclass::CharClass;
use crate::grid::Grid;

/// Which character class is allowed to approach a cell from each compass
/// direction. Vertical approaches (N/S) need a vertical-ish glyph; horizontal
/// approaches (E/W) need a horizontal-ish glyph; diagonal approaches need the
/// diagonal stroke that points at them.
fn entry_class(dir: Compass) -> CharClass {
    match dir {
        Compass::N | Compass::S => CharClass::VerticalLines,
        Compass::E | Compass::W => CharClass::HorizontalLines,
        Compass::NW | Compass::SE => CharClass::CornerChars,
        Compass::NE | Compass::SW => CharClass::CornerChars,
    }
}

fn entry_class_members(dir: Compass) -> &'static str {
    // Corner and intersection characters continue a line arriving from any
    // direction in addition to the dedicated line glyphs, per the original
    // entry-point tables (see the design notes on directional entry points).
    match entry_class(dir) {
        CharClass::VerticalLines => "|:+\\/",
        CharClass::HorizontalLines => "-=+\\/",
        _ => "\\/",
    }
}

fn has_entry(grid: &Grid, cell: Cell, dir: Compass) -> bool {
    let neighbor = grid.get(cell.towards(dir));
    entry_class_members(dir).contains(neighbor)
}

/// Which of the four cardinal neighbors are entries into `cell`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardinalEntries {
    pub n: bool,
    pub s: bool,
    pub e: bool,
    pub w: bool,
}

impl CardinalEntries {
    pub fn count(self) -> u8 {
        self.n as u8 + self.s as u8 + self.e as u8 + self.w as u8
    }
}

pub fn cardinal_entries(grid: &Grid, cell: Cell) -> CardinalEntries {
    CardinalEntries {
        n: has_entry(grid, cell, Compass::N),
        s: has_entry(grid, cell, Compass::S),
        e: has_entry(grid, cell, Compass::E),
        w: has_entry(grid, cell, Compass::W),
    }
}

/// Round vs. plain-right-angle corner, per the classifier's corner-chars class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerStyle {
    Normal,
    Round,
}

/// The four corner orientations, named by the pair of cardinal entries present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerKind {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOrientation {
    Horizontal,
    Vertical,
}

/// The four-way intersection shapes, named after the glyph they resemble:
/// `T` (missing north), inverted `T` (missing south), `K`-ish ⊢ (missing
/// west), inverted ⊣ (missing east).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TJunction {
    T,
    InverseT,
    K,
    InverseK,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
    North,
    South,
    East,
    West,
}

/// The result of classifying a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellClass {
    Blank,
    Text,
    /// A boundary character with no matching entries: `+`, `/`, or `\` sitting
    /// alone, or a diagonal stroke with nothing attached.
    LoneDiagonal,
    Stub,
    LinesEnd,
    Line(LineOrientation),
    Corner(CornerKind, CornerStyle),
    Intersection(TJunction),
    Cross,
    CrossOnLine(LineOrientation),
    StarOnLine(LineOrientation),
    Arrowhead(ArrowDirection),
}

pub fn classify(grid: &Grid, cell: Cell) -> CellClass {
    let c = grid.get(cell);
    if grid.is_blank(cell) {
        return CellClass::Blank;
    }
    if let Some(dir) = arrowhead_direction(grid, cell) {
        return CellClass::Arrowhead(dir);
    }
    if c == '*' {
        let e = cardinal_entries(grid, cell);
        if e.e || e.w {
            return CellClass::StarOnLine(LineOrientation::Horizontal);
        }
        if e.n || e.s {
            return CellClass::StarOnLine(LineOrientation::Vertical);
        }
        return CellClass::Text;
    }
    if CharClass::CornerChars.contains(c) {
        let e = cardinal_entries(grid, cell);
        let style = if c == '+' {
            CornerStyle::Normal
        } else {
            CornerStyle::Round
        };
        return match e.count() {
            0 => CellClass::LoneDiagonal,
            1 => CellClass::Stub,
            2 => match corner_kind(e) {
                Some(kind) => CellClass::Corner(kind, style),
                None => match line_orientation(e) {
                    Some(o) => CellClass::Line(o),
                    None => CellClass::LoneDiagonal,
                },
            },
            3 => CellClass::Intersection(t_junction(e)),
            _ => CellClass::Cross,
        };
    }
    if CharClass::HorizontalLines.contains(c) {
        let e = cardinal_entries(grid, cell);
        if e.n || e.s {
            return CellClass::CrossOnLine(LineOrientation::Horizontal);
        }
        if e.e && e.w {
            return CellClass::Line(LineOrientation::Horizontal);
        }
        return CellClass::LinesEnd;
    }
    if CharClass::VerticalLines.contains(c) {
        let e = cardinal_entries(grid, cell);
        if e.e || e.w {
            return CellClass::CrossOnLine(LineOrientation::Vertical);
        }
        if e.n && e.s {
            return CellClass::Line(LineOrientation::Vertical);
        }
        return CellClass::LinesEnd;
    }
    CellClass::Text
}

fn corner_kind(e: CardinalEntries) -> Option<CornerKind> {
    match (e.n, e.s, e.e, e.w) {
        (true, false, true, false) => Some(CornerKind::NorthEast),
        (false, true, true, false) => Some(CornerKind::SouthEast),
        (false, true, false, true) => Some(CornerKind::SouthWest),
        (true, false, false, true) => Some(CornerKind::NorthWest),
        _ => None,
    }
}

fn line_orientation(e: CardinalEntries) -> Option<LineOrientation> {
    match (e.n, e.s, e.e, e.w) {
        (true, true, false, false) => Some(LineOrientation::Vertical),
        (false, false, true, true) => Some(LineOrientation::Horizontal),
        _ => None,
    }
}

fn t_junction(e: CardinalEntries) -> TJunction {
    if !e.n {
        TJunction::T
    } else if !e.s {
        TJunction::InverseT
    } else if !e.w {
        TJunction::K
    } else {
        TJunction::InverseK
    }
}

fn arrowhead_direction(grid: &Grid, cell: Cell) -> Option<ArrowDirection> {
    match grid.get(cell) {
        '^' if CharClass::VerticalLines.contains(grid.get(cell.south())) => {
            Some(ArrowDirection::North)
        }
        'v' | 'V' if CharClass::VerticalLines.contains(grid.get(cell.north())) => {
            Some(ArrowDirection::South)
        }
        '<' if CharClass::HorizontalLines.contains(grid.get(cell.east())) => {
            Some(ArrowDirection::West)
        }
        '>' if CharClass::HorizontalLines.contains(grid.get(cell.west())) => {
            Some(ArrowDirection::East)
        }
        _ => None,
    }
}

pub fn is_arrowhead(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Arrowhead(_))
}

pub fn is_corner(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Corner(_, _))
}

pub fn is_intersection(grid: &Grid, cell: Cell) -> bool {
    matches!(
        classify(grid, cell),
        CellClass::Intersection(_) | CellClass::Cross
    )
}

pub fn is_stub(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Stub)
}

pub fn is_linesend(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::LinesEnd)
}

pub fn is_cross_on_line(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::CrossOnLine(_))
}

pub fn is_star_on_line(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::StarOnLine(_))
}

pub fn is_line(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Line(_))
}

pub fn is_horizontal_line(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Line(LineOrientation::Horizontal))
}

pub fn is_vertical_line(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::Line(LineOrientation::Vertical))
}

pub fn is_lone_diagonal(grid: &Grid, cell: Cell) -> bool {
    matches!(classify(grid, cell), CellClass::LoneDiagonal)
}

/// A cell whose classifier reports exactly one boundary neighbor: the
/// terminal of an open path. Distinct from a [`CellClass::Stub`], which is a
/// corner/intersection glyph with only one arm attached.
pub fn is_point_cell(grid: &Grid, cell: Cell) -> bool {
    matches!(
        classify(grid, cell),
        CellClass::Corner(_, _)
            | CellClass::Intersection(_)
            | CellClass::Cross
            | CellClass::Stub
            | CellClass::LinesEnd
    )
}

pub fn is_dashed(c: char) -> bool {
    CharClass::DashedLines.contains(c)
}

pub fn is_boundary(grid: &Grid, cell: Cell) -> bool {
    let c = grid.get(cell);
    if !CharClass::Boundaries.contains(c) {
        return false;
    }
    if CharClass::CornerChars.contains(c) {
        is_intersection(grid, cell)
            || is_corner(grid, cell)
            || is_stub(grid, cell)
            || is_cross_on_line(grid, cell)
    } else {
        !is_lone_diagonal(grid, cell)
    }
}

/// `o  text` at the start of a run, replaced with a centered bullet glyph
/// during preprocessing.
pub fn is_bullet(grid: &Grid, cell: Cell) -> bool {
    grid.get(cell) == 'o' && grid.get(cell.east()) == ' ' && grid.get(cell.east().east()) == ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        Grid::from_text(s)
    }

    #[test]
    fn box_corners_are_normal() {
        let g = grid("+---+\n|   |\n+---+");
        assert!(matches!(
            classify(&g, Cell::new(0, 0)),
            CellClass::Corner(CornerKind::SouthEast, CornerStyle::Normal)
        ));
        assert!(matches!(
            classify(&g, Cell::new(4, 0)),
            CellClass::Corner(CornerKind::SouthWest, CornerStyle::Normal)
        ));
    }

    #[test]
    fn round_box_corners_are_round() {
        let g = grid("/---\\\n|   |\n\\---/");
        assert!(matches!(
            classify(&g, Cell::new(0, 0)),
            CellClass::Corner(CornerKind::SouthEast, CornerStyle::Round)
        ));
    }

    #[test]
    fn lone_plus_is_a_lone_diagonal_not_a_boundary() {
        let g = grid("+");
        assert!(matches!(classify(&g, Cell::new(0, 0)), CellClass::LoneDiagonal));
        assert!(!is_boundary(&g, Cell::new(0, 0)));
    }

    #[test]
    fn t_junction_points_are_classified() {
        // a '+' with arms on south/east/west but not north is a T.
        let g = grid("   \n-+-\n | ");
        assert!(matches!(
            classify(&g, Cell::new(1, 1)),
            CellClass::Intersection(TJunction::T)
        ));
    }

    #[test]
    fn cross_arrowhead_east_needs_horizontal_line_to_west() {
        let g = grid("--->");
        assert!(is_arrowhead(&g, Cell::new(3, 0)));
        assert!(matches!(
            classify(&g, Cell::new(3, 0)),
            CellClass::Arrowhead(ArrowDirection::East)
        ));
    }

    #[test]
    fn line_ends_have_exactly_one_entry() {
        let g = grid("--->");
        assert!(is_linesend(&g, Cell::new(0, 0)));
    }
}
