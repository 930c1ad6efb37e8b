//! A set of grid cells with the algebra the boundary extractor and shape
//! builder need: union, difference, equality, bounding box, and topological
//! classification (open / closed / mixed).

use std::collections::HashSet;

use diagram_grid::{follow_cell, Cell, Grid};

/// Bounding box in cell coordinates, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// Topological classification of a cell set, per the entry-count rule: a set
/// is open if any member has zero in-set follow-neighbors, closed if every
/// member has at least two, and mixed otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetType {
    Open,
    Closed,
    Mixed,
}

/// An unordered collection of unique grid coordinates. Cheap to clone; backed
/// by a hash set since membership tests dominate over iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        CellSet {
            cells: HashSet::new(),
        }
    }

    pub fn from_iter(iter: impl IntoIterator<Item = Cell>) -> Self {
        CellSet {
            cells: iter.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn union(&self, other: &CellSet) -> CellSet {
        CellSet {
            cells: self.cells.union(&other.cells).copied().collect(),
        }
    }

    pub fn subtract(&self, other: &CellSet) -> CellSet {
        CellSet {
            cells: self.cells.difference(&other.cells).copied().collect(),
        }
    }

    pub fn intersection(&self, other: &CellSet) -> CellSet {
        CellSet {
            cells: self.cells.intersection(&other.cells).copied().collect(),
        }
    }

    /// Any cell shared between the two sets.
    pub fn overlaps(&self, other: &CellSet) -> bool {
        self.cells.iter().any(|c| other.cells.contains(c))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut iter = self.cells.iter();
        let first = iter.next()?;
        let mut bb = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for c in iter {
            bb.min_x = bb.min_x.min(c.x);
            bb.min_y = bb.min_y.min(c.y);
            bb.max_x = bb.max_x.max(c.x);
            bb.max_y = bb.max_y.max(c.y);
        }
        Some(bb)
    }

    /// Number of in-set follow-neighbors for `cell`, i.e. how many of the
    /// cells `follow_cell` would walk into are themselves members of this set.
    pub fn follow_neighbor_count(&self, grid: &Grid, cell: Cell) -> usize {
        follow_cell(grid, cell, None)
            .into_iter()
            .filter(|c| self.contains(*c))
            .count()
    }

    /// Classifies the set's topology per §4.C: open if any cell has zero
    /// in-set follow-neighbors, closed if every cell has at least two,
    /// mixed otherwise.
    pub fn classify_type(&self, grid: &Grid) -> SetType {
        if self.cells.is_empty() {
            return SetType::Open;
        }
        let mut any_zero = false;
        let mut all_at_least_two = true;
        for &cell in &self.cells {
            let n = self.follow_neighbor_count(grid, cell);
            if n == 0 {
                any_zero = true;
            }
            if n < 2 {
                all_at_least_two = false;
            }
        }
        if any_zero {
            SetType::Open
        } else if all_at_least_two {
            SetType::Closed
        } else {
            SetType::Mixed
        }
    }

    /// Cells in this set with zero in-set follow-neighbors.
    pub fn isolated_cells(&self, grid: &Grid) -> Vec<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|&c| self.follow_neighbor_count(grid, c) == 0)
            .collect()
    }

    /// Cells in this set with exactly one in-set follow-neighbor: line-ends.
    pub fn line_end_cells(&self, grid: &Grid) -> Vec<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|&c| self.follow_neighbor_count(grid, c) == 1)
            .collect()
    }

    pub fn as_hashset(&self) -> &HashSet<Cell> {
        &self.cells
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        CellSet::from_iter(iter)
    }
}

impl IntoIterator for CellSet {
    type Item = Cell;
    type IntoIter = std::collections::hash_set::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_boundary_classifies_closed() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let set: CellSet = g
            .iter_cells()
            .filter(|&c| diagram_grid::classify::is_boundary(&g, c))
            .collect();
        assert_eq!(set.classify_type(&g), SetType::Closed);
    }

    #[test]
    fn open_line_classifies_open() {
        let g = Grid::from_text("--->");
        let set: CellSet = g
            .iter_cells()
            .filter(|&c| diagram_grid::classify::is_boundary(&g, c))
            .collect();
        assert_eq!(set.classify_type(&g), SetType::Open);
    }

    #[test]
    fn union_and_subtract_are_inverses_on_disjoint_sets() {
        let a = CellSet::from_iter([Cell::new(0, 0), Cell::new(1, 0)]);
        let b = CellSet::from_iter([Cell::new(2, 0)]);
        let u = a.union(&b);
        assert_eq!(u.subtract(&b), a);
    }

    #[test]
    fn bounding_box_of_empty_set_is_none() {
        assert!(CellSet::new().bounding_box().is_none());
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = CellSet::from_iter([Cell::new(0, 0), Cell::new(1, 1)]);
        let b = CellSet::from_iter([Cell::new(1, 1), Cell::new(0, 0)]);
        assert_eq!(a, b);
    }
}
