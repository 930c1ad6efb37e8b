//! Text grouping: single-blank gaps are bridged so a gapped label merges into
//! one connected component, then the bridges are dropped back out.

use std::collections::HashSet;

use diagram_cellset::CellSet;
use diagram_grid::{Cell, Grid};

fn is_bridge(grid: &Grid, cell: Cell) -> bool {
    grid.get(cell) == ' ' && grid.get(cell.east()) != ' ' && grid.get(cell.west()) != ' '
}

/// Connected components of the erased grid's non-blank cells, with
/// single-character blank gaps bridged before flood-filling. Each returned
/// set holds only the real (non-bridge) text cells of its component.
pub fn text_groups(grid: &Grid) -> Vec<CellSet> {
    let mut merged: HashSet<Cell> = HashSet::new();
    let mut text_only: HashSet<Cell> = HashSet::new();
    for cell in grid.iter_cells() {
        if grid.get(cell) != ' ' {
            merged.insert(cell);
            text_only.insert(cell);
        } else if is_bridge(grid, cell) {
            merged.insert(cell);
        }
    }

    let mut visited: HashSet<Cell> = HashSet::new();
    let mut groups = Vec::new();
    for &start in &merged {
        if visited.contains(&start) {
            continue;
        }
        let mut component = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(cell) = stack.pop() {
            component.insert(cell);
            for n in cell.cardinal_neighbors() {
                if merged.contains(&n) && visited.insert(n) {
                    stack.push(n);
                }
            }
        }
        let real: CellSet = component.into_iter().filter(|c| text_only.contains(c)).collect();
        if !real.is_empty() {
            groups.push(real);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_blank_gap_merges_into_one_group() {
        let g = Grid::from_text("A B");
        let groups = text_groups(&g);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn double_blank_gap_stays_two_groups() {
        let g = Grid::from_text("A  B");
        let groups = text_groups(&g);
        assert_eq!(groups.len(), 2);
    }
}
