//! Arrowhead synthesis: each `^`/`v`/`<`/`>` cell attached to a line becomes
//! its own tiny closed triangle, oriented per its [`ArrowDirection`].

use diagram_grid::classify::{self, ArrowDirection, CellClass};
use diagram_grid::{Cell, Grid};

use diagram_shapes::{CellGeometry, Color, Point, Shape, ShapeType};

fn triangle_for(geo: &CellGeometry, cell: Cell, dir: ArrowDirection) -> Vec<Point> {
    let min_x = geo.min_x(cell);
    let max_x = geo.max_x(cell);
    let min_y = geo.min_y(cell);
    let max_y = geo.max_y(cell);
    let mid_x = geo.mid_x(cell);
    let mid_y = geo.mid_y(cell);
    match dir {
        ArrowDirection::North => vec![
            Point::new(min_x, max_y),
            Point::new(max_x, max_y),
            Point::new(mid_x, min_y),
        ],
        ArrowDirection::South => vec![
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(mid_x, max_y),
        ],
        ArrowDirection::East => vec![
            Point::new(min_x, min_y),
            Point::new(min_x, max_y),
            Point::new(max_x, mid_y),
        ],
        ArrowDirection::West => vec![
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, mid_y),
        ],
    }
}

/// Builds an arrowhead shape for every cell the classifier sees as one.
pub fn build_arrowheads(grid: &Grid, geo: &CellGeometry) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for cell in grid.iter_cells() {
        if let CellClass::Arrowhead(dir) = classify::classify(grid, cell) {
            let mut shape = Shape::new_closed(triangle_for(geo, cell, dir));
            shape.shape_type = ShapeType::Arrowhead;
            shape.fill_color = Some(Color::BLACK);
            shapes.push(shape);
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_facing_arrow_becomes_a_triangle() {
        let g = Grid::from_text("-->");
        let geo = CellGeometry::default();
        let shapes = build_arrowheads(&g, &geo);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].points.len(), 3);
        assert_eq!(shapes[0].shape_type, ShapeType::Arrowhead);
    }

    #[test]
    fn lone_caret_is_not_an_arrowhead() {
        let g = Grid::from_text("  ^  ");
        let geo = CellGeometry::default();
        assert!(build_arrowheads(&g, &geo).is_empty());
    }
}
