//! Color-code scanning: `c[A-F0-9]{3}` runs set the fill color of the
//! smallest closed shape whose polygon contains them.

use regex::Regex;

use diagram_grid::{Cell, Grid};
use diagram_shapes::{CellGeometry, Color, Shape};

fn color_code_regex() -> Regex {
    Regex::new(r"c[A-F0-9]{3}").expect("valid color-code pattern")
}

/// The cell positions and parsed colors of every color-code run in the grid.
pub fn find_color_codes(grid: &Grid) -> Vec<(Cell, Color)> {
    let re = color_code_regex();
    let mut found = Vec::new();
    for (y, row) in grid.rows().iter().enumerate() {
        let text: String = row.iter().collect();
        for m in re.find_iter(&text) {
            let hex = &m.as_str()[1..];
            if let Some(color) = Color::from_hex_nibbles(hex) {
                found.push((Cell::new(m.start() as i32, y as i32), color));
            }
        }
    }
    found
}

fn smallest_shape_containing(shapes: &[Shape], x: f64, y: f64) -> Option<usize> {
    shapes
        .iter()
        .enumerate()
        .filter(|(_, s)| s.closed && s.contains_point(x, y))
        .min_by(|(_, a), (_, b)| a.calc_area().partial_cmp(&b.calc_area()).unwrap())
        .map(|(i, _)| i)
}

/// For each color code found, sets the fill color of the smallest enclosing
/// closed shape. A code not inside any shape is simply ignored (§8 P7).
pub fn assign_color_codes(grid: &Grid, geo: &CellGeometry, shapes: &mut [Shape]) {
    for (cell, color) in find_color_codes(grid) {
        let center = geo.center(cell);
        if let Some(idx) = smallest_shape_containing(shapes, center.x, center.y) {
            shapes[idx].fill_color = Some(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_and_parses_a_color_code() {
        let g = Grid::from_text("cE32");
        let found = find_color_codes(&g);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, Cell::new(0, 0));
        assert_eq!(found[0].1, Color::rgb(0xEE, 0x33, 0x22));
    }

    #[test]
    fn assigns_to_smallest_enclosing_shape() {
        let g = Grid::from_text("+---+\n|cE32|\n+---+");
        let geo = CellGeometry::default();
        let mut shapes = vec![Shape::new_closed(vec![
            diagram_shapes::Point::new(0.0, 0.0),
            diagram_shapes::Point::new(50.0, 0.0),
            diagram_shapes::Point::new(50.0, 42.0),
            diagram_shapes::Point::new(0.0, 42.0),
        ])];
        assign_color_codes(&g, &geo, &mut shapes);
        assert!(shapes[0].fill_color.is_some());
    }
}
