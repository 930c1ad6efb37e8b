//! The decoration pass (§4.F): color codes, markup tags, arrowheads, and
//! point markers layered onto the shapes the boundary/shape stages built.

pub mod arrowhead;
pub mod colorcode;
pub mod markup;
pub mod pointmarker;

use diagram_grid::Grid;
use diagram_shapes::{deduplicate_shapes, CellGeometry, Shape};

/// Runs decoration steps 3-6 in their fixed order, then deduplicates.
/// Steps 1-2 (closed/open shape construction) already happened upstream.
pub fn decorate(grid: &Grid, geo: &CellGeometry, mut shapes: Vec<Shape>) -> Vec<Shape> {
    colorcode::assign_color_codes(grid, geo, &mut shapes);
    markup::assign_markup_tags(grid, geo, &mut shapes);
    shapes.extend(arrowhead::build_arrowheads(grid, geo));
    shapes.extend(pointmarker::build_point_markers(grid, geo));
    deduplicate_shapes(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_shapes::Point;

    #[test]
    fn decoration_assigns_color_and_adds_arrowhead() {
        let grid = Grid::from_text("+----+\n|cE32|\n+--->|\n+----+");
        let geo = CellGeometry::default();
        let square = Shape::new_closed(vec![
            Point::new(0.0, 0.0),
            Point::new(60.0, 0.0),
            Point::new(60.0, 56.0),
            Point::new(0.0, 56.0),
        ]);
        let decorated = decorate(&grid, &geo, vec![square]);
        assert!(decorated[0].fill_color.is_some());
        assert!(decorated
            .iter()
            .any(|s| s.shape_type == diagram_shapes::ShapeType::Arrowhead));
    }
}
