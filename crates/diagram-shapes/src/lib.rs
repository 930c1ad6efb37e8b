//! Shape value types and the shape builder (§3, §4.E).

pub mod build;
pub mod geometry;
pub mod shape;

pub use build::{build_closed_shape, build_open_shapes, build_small_line};
pub use geometry::{CellGeometry, Color, Point, Rect, VertexType};
pub use shape::{deduplicate_shapes, Shape, ShapeType};

use diagram_cellset::CellSet;
use diagram_grid::Grid;

/// Runs §4.E steps 1-2 ("create closed shapes", "create open shapes") over
/// every boundary cell-set the extractor produced. Dropped (unclean) closed
/// shapes are silently skipped, per §7.
pub fn build_shapes(
    grid: &Grid,
    geo: &CellGeometry,
    closed_sets: &[CellSet],
    open_sets: &[CellSet],
) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for set in closed_sets {
        if let Some(shape) = build::build_closed_shape(grid, geo, set) {
            shapes.push(shape);
        } else {
            tracing::debug!(size = set.len(), "dropped unclean closed boundary");
        }
    }
    for set in open_sets {
        if set.len() == 1 {
            if let Some(cell) = set.iter().next() {
                if let Some(shape) = build::build_small_line(grid, geo, cell) {
                    shapes.push(shape);
                }
            }
            continue;
        }
        shapes.extend(build::build_open_shapes(grid, geo, set));
    }
    shapes
}
