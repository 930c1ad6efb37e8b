//! Step 3 (distinct shapes via the abstraction grid) and step 4
//! (fill-and-trace refinement) of the boundary extractor.

use std::collections::HashSet;

use diagram_cellset::CellSet;
use diagram_grid::{AbstractionGrid, Grid};

/// Flood-fills the non-blank pixels of an abstraction grid into
/// 4-connected components, each down-projected to a cell-set. This is step 3:
/// building the candidate shape list S1 from the initial boundary set B0.
pub fn distinct_shapes(grid: &Grid, b0: &CellSet) -> Vec<CellSet> {
    let ab = AbstractionGrid::paint(grid, b0.as_hashset());
    let pixels = ab.non_blank_pixels();
    let mut visited: HashSet<(i32, i32)> = HashSet::new();
    let mut out = Vec::new();
    for &start in &pixels {
        if visited.contains(&start) {
            continue;
        }
        let mut component = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);
        while let Some((x, y)) = stack.pop() {
            component.insert((x, y));
            for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                if pixels.contains(&(nx, ny)) && visited.insert((nx, ny)) {
                    stack.push((nx, ny));
                }
            }
        }
        out.push(CellSet::from_iter(AbstractionGrid::down_project(&component)));
    }
    out
}

/// Step 4: for each candidate shape, re-derive its boundary by flood-filling
/// every isolated blank region in its own abstraction grid and recording the
/// non-blank pixels that bound each region. A shape seen from inside and
/// from outside produces two (generally equal, later deduplicated) results.
pub fn fill_and_trace_refinement(grid: &Grid, candidates: &[CellSet]) -> Vec<CellSet> {
    let mut refined = Vec::new();
    for candidate in candidates {
        let ab = AbstractionGrid::paint(grid, candidate.as_hashset());
        let w = ab.width();
        let h = ab.height();
        let mut visited = vec![vec![false; w as usize]; h as usize];
        for y in 0..h {
            for x in 0..w {
                if visited[y as usize][x as usize] || !ab.is_blank(x, y) {
                    continue;
                }
                let (filled, boundary) = find_boundary_expanding_from(&ab, x, y);
                for &(fx, fy) in &filled {
                    visited[fy as usize][fx as usize] = true;
                }
                if boundary.is_empty() {
                    continue;
                }
                let cells = CellSet::from_iter(AbstractionGrid::down_project(&boundary));
                if !cells.is_empty() {
                    refined.push(cells);
                }
            }
        }
    }
    refined
}

/// Flood-fills outward from a blank pixel, 4-connected, collecting every
/// blank pixel reached (`filled`) and every non-blank pixel touched along the
/// way without stepping into it (`boundary`).
fn find_boundary_expanding_from(
    ab: &AbstractionGrid,
    sx: i32,
    sy: i32,
) -> (HashSet<(i32, i32)>, HashSet<(i32, i32)>) {
    let mut filled = HashSet::new();
    let mut boundary = HashSet::new();
    let mut stack = vec![(sx, sy)];
    filled.insert((sx, sy));
    while let Some((x, y)) = stack.pop() {
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if nx < 0 || ny < 0 || nx >= ab.width() || ny >= ab.height() {
                continue;
            }
            if ab.is_blank(nx, ny) {
                if filled.insert((nx, ny)) {
                    stack.push((nx, ny));
                }
            } else {
                boundary.insert((nx, ny));
            }
        }
    }
    (filled, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_grid::classify::is_boundary;

    #[test]
    fn single_box_is_one_distinct_shape() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let b0: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let shapes = distinct_shapes(&g, &b0);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].len(), b0.len());
    }

    #[test]
    fn fill_and_trace_recovers_box_boundary_from_inside_and_outside() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let b0: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let candidates = distinct_shapes(&g, &b0);
        let refined = fill_and_trace_refinement(&g, &candidates);
        assert!(!refined.is_empty());
        for r in &refined {
            assert_eq!(r.len(), b0.len());
        }
    }
}
