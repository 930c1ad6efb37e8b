//! Markup-tag scanning: `{tag}` sets the type of the smallest enclosing
//! closed shape. Unknown tags mark the shape CUSTOM.

use regex::Regex;

use diagram_grid::{Cell, Grid};
use diagram_shapes::{CellGeometry, Shape, ShapeType};

fn markup_regex() -> Regex {
    Regex::new(r"\{([a-zA-Z]+)\}").expect("valid markup-tag pattern")
}

fn tag_to_shape_type(tag: &str) -> ShapeType {
    match tag {
        "d" => ShapeType::Document,
        "s" => ShapeType::Storage,
        "io" => ShapeType::Io,
        "c" => ShapeType::Decision,
        "mo" => ShapeType::ManualOperation,
        "tr" => ShapeType::Trapezoid,
        "o" => ShapeType::Ellipse,
        _ => ShapeType::Custom,
    }
}

pub fn find_markup_tags(grid: &Grid) -> Vec<(Cell, ShapeType)> {
    let re = markup_regex();
    let mut found = Vec::new();
    for (y, row) in grid.rows().iter().enumerate() {
        let text: String = row.iter().collect();
        for caps in re.captures_iter(&text) {
            let whole = caps.get(0).unwrap();
            let tag = &caps[1];
            found.push((Cell::new(whole.start() as i32, y as i32), tag_to_shape_type(tag)));
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

/// Assigns shape types from markup tags. Per invariant (iii), the first tag
/// to reach a shape wins; later ones touching the same shape are ignored.
pub fn assign_markup_tags(grid: &Grid, geo: &CellGeometry, shapes: &mut [Shape]) {
    for (cell, shape_type) in find_markup_tags(grid) {
        let center = geo.center(cell);
        if let Some(idx) = smallest_shape_containing(shapes, center.x, center.y) {
            if shapes[idx].shape_type == ShapeType::Simple {
                shapes[idx].shape_type = shape_type;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_maps_to_its_shape_type() {
        assert_eq!(tag_to_shape_type("d"), ShapeType::Document);
        assert_eq!(tag_to_shape_type("mo"), ShapeType::ManualOperation);
        assert_eq!(tag_to_shape_type("wat"), ShapeType::Custom);
    }

    #[test]
    fn finds_tag_position() {
        let g = Grid::from_text("+--+\n|{d}\n+--+");
        let found = find_markup_tags(&g);
        assert_eq!(found, vec![(Cell::new(1, 1), ShapeType::Document)]);
    }
}
