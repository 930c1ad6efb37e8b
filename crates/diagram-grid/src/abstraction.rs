//! The abstraction grid: a 3x resolution buffer that disambiguates adjacency.
//!
//! Two `+` cells that are diagonal neighbors in the original grid share no
//! edge; painted into their 3x3 tiles, the arms they actually draw keep them
//! apart unless the tiles are truly connected. This lets a flood fill over
//! the abstraction grid double as exact boundary-adjacency analysis.

use std::collections::HashSet;

use crate::cell::Cell;
use crate::classify::{classify, ArrowDirection, CellClass, CornerKind, LineOrientation, TJunction};
use crate::grid::Grid;

const BLANK: char = ' ';
const BOUNDARY_PIXEL: char = '*';

/// A 3Wx3H character buffer, one 3x3 tile per original cell.
#[derive(Clone, Debug)]
pub struct AbstractionGrid {
    pixels: Vec<Vec<char>>,
    width: i32,
    height: i32,
}

impl AbstractionGrid {
    pub fn empty(width: i32, height: i32) -> Self {
        AbstractionGrid {
            pixels: vec![vec![BLANK; (width * 3) as usize]; (height * 3) as usize],
            width,
            height,
        }
    }

    /// Paints every cell in `cells` into the abstraction grid according to
    /// its classification in `grid`. Non-boundary-like classifications paint
    /// nothing.
    pub fn paint(grid: &Grid, cells: &HashSet<Cell>) -> AbstractionGrid {
        let mut ab = AbstractionGrid::empty(grid.width(), grid.height());
        for &cell in cells {
            ab.set(cell, classify(grid, cell));
        }
        ab
    }

    fn set(&mut self, cell: Cell, class: CellClass) {
        let tile = tile_pattern(class);
        let ox = (cell.x * 3) as usize;
        let oy = (cell.y * 3) as usize;
        for (dy, row) in tile.iter().enumerate() {
            for (dx, &on) in row.iter().enumerate() {
                if on {
                    self.pixels[oy + dy][ox + dx] = BOUNDARY_PIXEL;
                }
            }
        }
    }

    pub fn width(&self) -> i32 {
        self.width * 3
    }

    pub fn height(&self) -> i32 {
        self.height * 3
    }

    pub fn is_blank(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return true;
        }
        self.pixels[y as usize][x as usize] == BLANK
    }

    pub fn mark_blank(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && x < self.width() && y < self.height() {
            self.pixels[y as usize][x as usize] = BLANK;
        }
    }

    /// Maps 3x-resolution coordinates back to the owning original cell.
    pub fn down_project_point(x: i32, y: i32) -> Cell {
        Cell::new(x.div_euclid(3), y.div_euclid(3))
    }

    /// Down-projects a whole set of 3x-resolution pixel coordinates to a
    /// cell-set in original coordinates.
    pub fn down_project(pixels: &HashSet<(i32, i32)>) -> HashSet<Cell> {
        pixels
            .iter()
            .map(|&(x, y)| AbstractionGrid::down_project_point(x, y))
            .collect()
    }

    /// Projects the abstraction grid back down to a plain text grid: any
    /// cell with at least one non-blank pixel in its tile becomes `*`.
    pub fn get_as_text_grid(&self) -> Grid {
        let mut rows = vec![vec![' '; self.width as usize]; self.height as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                let mut any = false;
                for dy in 0..3 {
                    for dx in 0..3 {
                        if !self.is_blank(x * 3 + dx, y * 3 + dy) {
                            any = true;
                        }
                    }
                }
                if any {
                    rows[y as usize][x as usize] = BOUNDARY_PIXEL;
                }
            }
        }
        Grid::from_rows(rows)
    }

    /// Every non-blank pixel coordinate, for connected-component flood fills.
    pub fn non_blank_pixels(&self) -> HashSet<(i32, i32)> {
        let mut out = HashSet::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                if !self.is_blank(x, y) {
                    out.insert((x, y));
                }
            }
        }
        out
    }
}

/// The 3x3 on/off tile painted for a given classification. `true` marks a lit
/// pixel. Ordered like the original glyphs: H-lines paint the middle row,
/// V-lines the middle column, corners an L-shape, intersections a plus with
/// one arm omitted, crosses a full plus.
fn tile_pattern(class: CellClass) -> [[bool; 3]; 3] {
    const N: bool = true;
    const F: bool = false;
    match class {
        CellClass::Line(LineOrientation::Horizontal) | CellClass::CrossOnLine(LineOrientation::Horizontal) => {
            [[F, F, F], [N, N, N], [F, F, F]]
        }
        CellClass::Line(LineOrientation::Vertical) | CellClass::CrossOnLine(LineOrientation::Vertical) => {
            [[F, N, F], [F, N, F], [F, N, F]]
        }
        CellClass::Corner(CornerKind::SouthEast, _) => [[F, F, F], [F, N, N], [F, N, F]],
        CellClass::Corner(CornerKind::SouthWest, _) => [[F, F, F], [N, N, F], [F, N, F]],
        CellClass::Corner(CornerKind::NorthEast, _) => [[F, N, F], [F, N, N], [F, F, F]],
        CellClass::Corner(CornerKind::NorthWest, _) => [[F, N, F], [N, N, F], [F, F, F]],
        CellClass::Intersection(TJunction::T) => [[F, F, F], [N, N, N], [F, N, F]],
        CellClass::Intersection(TJunction::InverseT) => [[F, N, F], [N, N, N], [F, F, F]],
        CellClass::Intersection(TJunction::K) => [[F, N, F], [F, N, N], [F, N, F]],
        CellClass::Intersection(TJunction::InverseK) => [[F, N, F], [N, N, F], [F, N, F]],
        CellClass::Cross => [[F, N, F], [N, N, N], [F, N, F]],
        CellClass::Stub => [[F, N, F], [N, N, N], [F, N, F]],
        CellClass::StarOnLine(_) => [[N, N, N], [N, N, N], [N, N, N]],
        CellClass::Arrowhead(ArrowDirection::North) => [[F, N, F], [N, N, N], [F, F, F]],
        CellClass::Arrowhead(ArrowDirection::South) => [[F, F, F], [N, N, N], [F, N, F]],
        CellClass::Arrowhead(ArrowDirection::East) => [[F, F, F], [N, N, N], [F, F, F]],
        CellClass::Arrowhead(ArrowDirection::West) => [[F, F, F], [N, N, N], [F, F, F]],
        CellClass::LinesEnd => [[F, F, F], [N, N, F], [F, F, F]],
        CellClass::LoneDiagonal | CellClass::Blank | CellClass::Text => [[F, F, F], [F, F, F], [F, F, F]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_then_project_roundtrips_a_box() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let cells: HashSet<Cell> = g
            .iter_cells()
            .filter(|&c| crate::classify::is_boundary(&g, c))
            .collect();
        let ab = AbstractionGrid::paint(&g, &cells);
        let projected = ab.get_as_text_grid();
        for &c in &cells {
            assert_eq!(projected.get(c), '*');
        }
    }

    #[test]
    fn empty_abstraction_grid_is_all_blank() {
        let ab = AbstractionGrid::empty(3, 2);
        assert!(ab.is_blank(4, 3));
        assert_eq!(ab.width(), 9);
        assert_eq!(ab.height(), 6);
    }
}
