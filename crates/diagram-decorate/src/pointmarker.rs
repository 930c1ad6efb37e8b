//! Point-marker synthesis: a `*` sitting on a line becomes a single-point
//! shape (white fill, black stroke) rather than part of the line itself.

use diagram_grid::classify;
use diagram_grid::Grid;

use diagram_shapes::{CellGeometry, Color, Point, Shape, ShapeType};

pub fn build_point_markers(grid: &Grid, geo: &CellGeometry) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for cell in grid.iter_cells() {
        if classify::is_star_on_line(grid, cell) {
            let mut shape = Shape::new_closed(vec![Point::new(geo.mid_x(cell), geo.mid_y(cell))]);
            shape.shape_type = ShapeType::PointMarker;
            shape.fill_color = Some(Color::WHITE);
            shape.stroke_color = Color::BLACK;
            shapes.push(shape);
        }
    }
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_on_horizontal_line_becomes_a_point_marker() {
        let g = Grid::from_text("--*--");
        let geo = CellGeometry::default();
        let shapes = build_point_markers(&g, &geo);
        assert_eq!(shapes.len(), 1);
        assert!(shapes[0].is_point_marker());
        assert_eq!(shapes[0].fill_color, Some(Color::WHITE));
    }

    #[test]
    fn lone_star_is_not_a_point_marker() {
        let g = Grid::from_text("  *  ");
        let geo = CellGeometry::default();
        assert!(build_point_markers(&g, &geo).is_empty());
    }
}
