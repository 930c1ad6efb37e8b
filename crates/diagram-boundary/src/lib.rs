//! The boundary extractor (§4.D): turns a preprocessed grid into a
//! categorized list of boundary cell-sets, with duplicates removed, mixed
//! boundaries resolved, and obsolete outer boundaries eliminated.

pub mod components;
pub mod mixed;
pub mod obsolete;
pub mod workgrid;

use diagram_cellset::CellSet;
use diagram_grid::{classify::is_boundary, Grid};

pub use mixed::Categorized;
pub use workgrid::prepare_work_grid;

/// The extractor's result: a prepared work grid (boundary-classification
/// callers downstream need it too, e.g. the shape builder) plus the
/// categorized boundary sets.
pub struct ExtractedBoundaries {
    pub work_grid: Grid,
    pub open: Vec<CellSet>,
    pub closed: Vec<CellSet>,
}

/// Runs the full 8-step algorithm from §4.D.
pub fn extract_boundaries(source: &Grid) -> ExtractedBoundaries {
    let work_grid = prepare_work_grid(source);

    let b0: CellSet = work_grid
        .iter_cells()
        .filter(|&c| is_boundary(&work_grid, c))
        .collect();
    tracing::debug!(cells = b0.len(), "initial boundary set collected");

    let s1 = components::distinct_shapes(&work_grid, &b0);
    let s2 = components::fill_and_trace_refinement(&work_grid, &s1);
    let s2 = mixed::deduplicate(s2);
    tracing::debug!(candidates = s2.len(), "candidate boundaries after fill-and-trace");

    let mut categorized = mixed::categorize(&work_grid, s2);
    mixed::resolve_mixed(&work_grid, &mut categorized);
    // Resolution can itself introduce freshly-mixed remainders in pathological
    // inputs; re-run once more so nothing mixed survives (§8 P4).
    if !categorized.mixed.is_empty() {
        mixed::resolve_mixed(&work_grid, &mut categorized);
    }
    debug_assert!(
        categorized.mixed.is_empty(),
        "mixed resolution must leave no mixed sets behind"
    );

    let closed = obsolete::remove_obsolete_shapes(&work_grid, categorized.closed);
    tracing::debug!(
        open = categorized.open.len(),
        closed = closed.len(),
        "boundary extraction complete"
    );

    ExtractedBoundaries {
        work_grid,
        open: categorized.open,
        closed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_box_extracts_one_closed_boundary() {
        let g = Grid::from_text("+---+\n|   |\n+---+");
        let result = extract_boundaries(&g);
        assert_eq!(result.closed.len(), 1);
        assert_eq!(result.open.len(), 0);
    }

    #[test]
    fn open_connector_extracts_as_open() {
        let g = Grid::from_text("--->");
        let result = extract_boundaries(&g);
        assert_eq!(result.open.len(), 1);
        assert_eq!(result.closed.len(), 0);
    }

    #[test]
    fn two_boxes_sharing_an_edge_eliminate_the_envelope() {
        let g = Grid::from_text("+-+-+\n| | |\n+-+-+");
        let result = extract_boundaries(&g);
        // Two small boxes plus their shared-edge envelope would be three
        // closed candidates; obsolete elimination should drop the envelope.
        assert_eq!(result.closed.len(), 2);
    }
}
