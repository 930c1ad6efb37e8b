//! The character grid the recognizer operates on.

use crate::cell::Cell;

/// The sentinel returned for out-of-bounds reads. Not part of any recognized
/// glyph alphabet, so it can never be mistaken for user text.
pub const OUT_OF_BOUNDS: char = '\u{0}';

/// A 2-D array of characters, read-only after preprocessing except for the
/// recognizer's own work copies (see `Grid::clone` call sites throughout the
/// crate, each of which documents why it needs a mutable copy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Builds a grid from already-rectangular rows. Panics if rows differ in
    /// length; callers that might have ragged input should run them through
    /// `diagram_preprocess::normalize_rows` first.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Grid {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as i32;
        debug_assert!(
            rows.iter().all(|r| r.len() as i32 == width),
            "Grid::from_rows requires rectangular input"
        );
        Grid {
            rows,
            width,
            height,
        }
    }

    pub fn from_text(text: &str) -> Grid {
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, ' ');
                r
            })
            .collect();
        Grid::from_rows(rows)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Reads the character at `cell`, or [`OUT_OF_BOUNDS`] if outside the grid.
    pub fn get(&self, cell: Cell) -> char {
        if self.in_bounds(cell) {
            self.rows[cell.y as usize][cell.x as usize]
        } else {
            OUT_OF_BOUNDS
        }
    }

    pub fn set(&mut self, cell: Cell, c: char) {
        if self.in_bounds(cell) {
            self.rows[cell.y as usize][cell.x as usize] = c;
        }
    }

    /// Blank-for-pattern-matching policy: whitespace or the out-of-bounds
    /// sentinel both count as blank. Used by every classifier neighbor test,
    /// so a cell near the edge behaves as if surrounded by open space.
    pub fn is_blank(&self, cell: Cell) -> bool {
        let c = self.get(cell);
        c == OUT_OF_BOUNDS || c == ' ' || c == '\u{feff}'
    }

    /// Blank-for-boundary-scans policy: the out-of-bounds sentinel is
    /// deliberately *not* blank here, so flood fills and edge walks never
    /// treat "off the grid" the same as "inside open space" and leak outward.
    /// This is the one place the two historically-inconsistent blank
    /// predicates noted in the design notes are reconciled.
    pub fn is_blank_for_boundary(&self, cell: Cell) -> bool {
        if !self.in_bounds(cell) {
            return false;
        }
        self.get(cell) == ' '
    }

    pub fn is_out_of_bounds(&self, cell: Cell) -> bool {
        !self.in_bounds(cell)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|r| r.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
