//! Text extraction (§4.G): grouping, string isolation, font-size fitting,
//! positioning, and dark-fill color correction.

pub mod color;
pub mod erase;
pub mod fontsize;
pub mod group;
pub mod position;
pub mod strings;

pub use fontsize::FontMetrics;
pub use position::HAlign;
pub use strings::TextString;

use serde::{Deserialize, Serialize};

use diagram_grid::Grid;
use diagram_shapes::{CellGeometry, Color, Point, Rect, Shape};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: Color,
}

/// Runs the full text-extraction pipeline described in §4.G: erase
/// non-text content, group gapped words, isolate maximal runs, fit each
/// to its cell, position it, and correct its color against the shapes
/// it's drawn over.
pub fn extract_labels(grid: &Grid, geo: &CellGeometry, shapes: &[Shape], metrics: &dyn FontMetrics) -> Vec<Label> {
    let erased = erase::erase_non_text(grid);
    let groups = group::text_groups(&erased);

    let mut strings = Vec::new();
    for group in &groups {
        strings.extend(strings::isolate_strings(&erased, group));
    }

    strings
        .iter()
        .map(|s| {
            let len = s.text.chars().count() as i32;
            let min_x = geo.min_x(s.start);
            let max_x = min_x + len as f64 * geo.cell_w;
            let span_w = max_x - min_x;

            let size = fontsize::fit_font(metrics, geo.cell_h, span_w, &s.text);
            let rendered_w = metrics.width(size, &s.text);

            let starts = strings
                .iter()
                .filter(|o| o.start.x == s.start.x && o.start.y != s.start.y)
                .count();
            let end_x = s.end_x();
            let ends = strings
                .iter()
                .filter(|o| o.end_x() == end_x && o.start.y != s.start.y)
                .count();
            let halign = position::horizontal_align(starts, ends);
            let x = position::label_x(halign, min_x, max_x, rendered_w);

            let z_height = metrics.z_height(size);
            let y = position::vertical_baseline(geo, s.start, z_height);

            let rect = Rect {
                min: Point::new(min_x, geo.min_y(s.start)),
                max: Point::new(max_x, geo.max_y(s.start)),
            };
            let color = color::corrected_color(&rect, shapes);

            Label {
                text: s.text.clone(),
                x,
                y,
                font_size: size,
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMetrics;
    impl FontMetrics for FixedMetrics {
        fn ascent(&self, size: f64) -> f64 {
            size
        }
        fn width(&self, size: f64, text: &str) -> f64 {
            size * 0.6 * text.chars().count() as f64
        }
        fn z_height(&self, size: f64) -> f64 {
            size * 0.7
        }
    }

    #[test]
    fn extracts_a_single_centered_label() {
        let grid = Grid::from_text("+------+\n| Web  |\n+------+");
        let geo = CellGeometry::default();
        let labels = extract_labels(&grid, &geo, &[], &FixedMetrics);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "Web");
        assert_eq!(labels[0].color, Color::BLACK);
    }
}
