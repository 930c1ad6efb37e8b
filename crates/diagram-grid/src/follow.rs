//! Dispatches from a boundary cell to the cells that continue it.
//!
//! Every classifier category (line, corner, stub, T-junction, cross) reduces
//! to the same question: which cardinal neighbors does this cell's entry
//! table consider reachable? `follow_cell` answers it uniformly instead of
//! branching per shape category, then callers restrict the result to
//! whatever cell-set they are walking.

use crate::cell::{Cell, Compass};
use crate::classify::is_boundary;
use crate::grid::Grid;

/// Cardinal neighbors this cell's classification allows a walk to continue
/// into, excluding `blocked` (typically the cell the walk just came from) and
/// any neighbor that isn't itself a boundary cell.
pub fn follow_cell(grid: &Grid, cell: Cell, blocked: Option<Cell>) -> Vec<Cell> {
    use crate::classify::cardinal_entries;
    let entries = cardinal_entries(grid, cell);
    let mut out = Vec::with_capacity(4);
    for (present, dir) in [
        (entries.n, Compass::N),
        (entries.s, Compass::S),
        (entries.e, Compass::E),
        (entries.w, Compass::W),
    ] {
        if !present {
            continue;
        }
        let neighbor = cell.towards(dir);
        if Some(neighbor) == blocked {
            continue;
        }
        if is_boundary(grid, neighbor) {
            out.push(neighbor);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_follows_both_ways_unless_blocked() {
        let g = Grid::from_text("---");
        let mid = Cell::new(1, 0);
        let mut both = follow_cell(&g, mid, None);
        both.sort();
        assert_eq!(both, vec![Cell::new(0, 0), Cell::new(2, 0)]);

        let one = follow_cell(&g, mid, Some(Cell::new(0, 0)));
        assert_eq!(one, vec![Cell::new(2, 0)]);
    }

    #[test]
    fn corner_follows_its_two_arms() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let mut out = follow_cell(&g, Cell::new(0, 0), None);
        out.sort();
        assert_eq!(out, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }
}
