//! Steps 5-7: deduplication, open/closed/mixed categorization, and mixed
//! boundary resolution.

use diagram_cellset::{CellSet, SetType};
use diagram_grid::Grid;

use crate::components::distinct_shapes;

/// Step 5: drop sets equal to one already accepted, preserving first-seen order.
pub fn deduplicate(sets: Vec<CellSet>) -> Vec<CellSet> {
    let mut out: Vec<CellSet> = Vec::with_capacity(sets.len());
    for s in sets {
        if !out.iter().any(|kept| *kept == s) {
            out.push(s);
        }
    }
    out
}

pub struct Categorized {
    pub open: Vec<CellSet>,
    pub closed: Vec<CellSet>,
    pub mixed: Vec<CellSet>,
}

/// Step 6: categorize every set into open, closed, or mixed.
pub fn categorize(grid: &Grid, sets: Vec<CellSet>) -> Categorized {
    let mut open = Vec::new();
    let mut closed = Vec::new();
    let mut mixed = Vec::new();
    for s in sets {
        match s.classify_type(grid) {
            SetType::Open => open.push(s),
            SetType::Closed => closed.push(s),
            SetType::Mixed => mixed.push(s),
        }
    }
    Categorized { open, closed, mixed }
}

/// Step 7: resolve mixed boundaries so that no set returned classifies as
/// mixed. Mutates `open`/`closed` in place, consuming `mixed`.
pub fn resolve_mixed(grid: &Grid, categorized: &mut Categorized) {
    let mixed = std::mem::take(&mut categorized.mixed);
    if mixed.is_empty() {
        return;
    }
    if !categorized.closed.is_empty() {
        for m in mixed {
            let mut remainder = m;
            for c in &categorized.closed {
                remainder = remainder.subtract(c);
            }
            match remainder.classify_type(grid) {
                SetType::Open => {
                    for piece in distinct_shapes(grid, &remainder) {
                        categorized.open.push(piece);
                    }
                }
                SetType::Closed => categorized.closed.push(remainder),
                SetType::Mixed => {
                    // Still tangled after subtracting every known closed
                    // shape; fall back to line-end tracing on what's left.
                    decompose_by_line_end_tracing(grid, remainder, categorized);
                }
            }
        }
    } else {
        for m in mixed {
            decompose_by_line_end_tracing(grid, m, categorized);
        }
    }
}

/// Walks from every unvisited line-end, following neighbors until another
/// line-end or an intersection (>=2 next candidates), producing one open
/// sub-set per walk. Whatever remains is the implicit closed core.
fn decompose_by_line_end_tracing(grid: &Grid, m: CellSet, categorized: &mut Categorized) {
    use diagram_grid::follow_cell;
    let mut visited = CellSet::new();
    let mut opens = Vec::new();
    for end in m.line_end_cells(grid) {
        if visited.contains(end) {
            continue;
        }
        let mut walk = CellSet::new();
        walk.insert(end);
        visited.insert(end);
        let mut prev = None;
        let mut current = end;
        loop {
            let candidates: Vec<_> = follow_cell(grid, current, prev)
                .into_iter()
                .filter(|c| m.contains(*c) && !walk.contains(*c))
                .collect();
            if candidates.len() != 1 {
                break;
            }
            let next = candidates[0];
            walk.insert(next);
            visited.insert(next);
            prev = Some(current);
            current = next;
            if m.line_end_cells(grid).contains(&current) {
                break;
            }
        }
        opens.push(walk);
    }
    let mut remainder = m;
    for w in &opens {
        remainder = remainder.subtract(w);
    }
    categorized.open.extend(opens);
    if !remainder.is_empty() {
        categorized.closed.push(remainder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_grid::Cell;

    #[test]
    fn deduplicate_drops_repeats() {
        let a = CellSet::from_iter([Cell::new(0, 0)]);
        let b = CellSet::from_iter([Cell::new(0, 0)]);
        let c = CellSet::from_iter([Cell::new(1, 1)]);
        let out = deduplicate(vec![a, b, c]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn categorize_splits_box_and_line() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let b0: CellSet = g
            .iter_cells()
            .filter(|&c| diagram_grid::classify::is_boundary(&g, c))
            .collect();
        let cat = categorize(&g, vec![b0]);
        assert_eq!(cat.closed.len(), 1);
        assert_eq!(cat.open.len(), 0);
        assert_eq!(cat.mixed.len(), 0);
    }
}
