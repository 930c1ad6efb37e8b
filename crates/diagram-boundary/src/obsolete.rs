//! Step 8: obsolete-shape elimination by pixel-level set arithmetic on each
//! closed boundary's filled interior.

use std::collections::HashSet;

use diagram_cellset::CellSet;
use diagram_grid::{AbstractionGrid, Grid};

/// Paints `closed` onto an abstraction grid, finds a cell inside it bracketed
/// by boundary pixels east and west, and flood-fills the interior from there.
/// Returns the union of the boundary and its filled interior, down-projected.
///
/// Per the design decision recorded for the open question: if the bracket
/// scan cannot find an interior seed (the east step would land out of
/// bounds), this returns `closed` unchanged rather than guessing.
pub fn filled_equivalent(grid: &Grid, closed: &CellSet) -> CellSet {
    let bbox = match closed.bounding_box() {
        Some(bb) => bb,
        None => return closed.clone(),
    };
    let ab = AbstractionGrid::paint(grid, closed.as_hashset());

    let y_lo = bbox.min_y * 3;
    let y_hi = bbox.max_y * 3 + 2;
    let x_lo = bbox.min_x * 3;
    let x_hi = bbox.max_x * 3 + 2;

    let mut seed: Option<(i32, i32)> = None;
    'outer: for y in y_lo..=y_hi {
        let mut seen_boundary = false;
        for x in x_lo..=x_hi {
            if !ab.is_blank(x, y) {
                seen_boundary = true;
                continue;
            }
            if !seen_boundary {
                continue;
            }
            let east_has_boundary = ((x + 1)..=x_hi).any(|xx| !ab.is_blank(xx, y));
            if !east_has_boundary {
                continue;
            }
            let candidate = x + 1;
            if candidate < 0 || candidate >= ab.width() {
                // The east step falls outside the painted bounds: the
                // documented fallback is to return the input unchanged.
                return closed.clone();
            }
            seed = Some((candidate, y));
            break 'outer;
        }
    }

    let seed = match seed {
        Some(s) if ab.is_blank(s.0, s.1) => s,
        _ => return closed.clone(),
    };

    let mut filled: HashSet<(i32, i32)> = HashSet::new();
    let mut stack = vec![seed];
    filled.insert(seed);
    while let Some((x, y)) = stack.pop() {
        for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            if nx < 0 || ny < 0 || nx >= ab.width() || ny >= ab.height() {
                continue;
            }
            if ab.is_blank(nx, ny) && filled.insert((nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }

    let mut result = CellSet::from_iter(AbstractionGrid::down_project(&filled));
    for c in closed.iter() {
        result.insert(c);
    }
    result
}

/// For every closed set whose filled form overlaps at least two other filled
/// forms, and whose filled form equals the union of those others exactly,
/// drop it: it is the outer boundary of shapes already represented by
/// smaller ones sharing common edges.
pub fn remove_obsolete_shapes(grid: &Grid, closed: Vec<CellSet>) -> Vec<CellSet> {
    let filled: Vec<CellSet> = closed.iter().map(|c| filled_equivalent(grid, c)).collect();
    let mut drop = vec![false; closed.len()];
    for i in 0..closed.len() {
        let overlapping: Vec<usize> = (0..closed.len())
            .filter(|&j| j != i && filled[i].overlaps(&filled[j]))
            .collect();
        if overlapping.len() < 2 {
            continue;
        }
        let mut union_others = CellSet::new();
        for &j in &overlapping {
            union_others = union_others.union(&filled[j]);
        }
        if union_others == filled[i] {
            drop[i] = true;
        }
    }
    closed
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !drop[*i])
        .map(|(_, c)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_grid::classify::is_boundary;

    #[test]
    fn filled_equivalent_of_box_covers_interior() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let b0: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let filled = filled_equivalent(&g, &b0);
        assert!(filled.contains(diagram_grid::Cell::new(2, 1)));
        assert!(filled.len() >= b0.len());
    }

    #[test]
    fn remove_obsolete_shapes_is_a_noop_without_overlap() {
        let g = Grid::from_text("+-+\n| |\n+-+");
        let b0: CellSet = g.iter_cells().filter(|&c| is_boundary(&g, c)).collect();
        let kept = remove_obsolete_shapes(&g, vec![b0.clone()]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0], b0);
    }
}
