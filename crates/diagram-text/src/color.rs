//! Dark-fill recoloring: a label drawn over a dark-filled shape turns white
//! so it stays legible.

use diagram_shapes::{Color, Rect, Shape};

/// Finds the smallest closed shape whose bounding rectangle intersects
/// `label_rect`, and returns white if that shape's fill is dark.
pub fn corrected_color(label_rect: &Rect, shapes: &[Shape]) -> Color {
    shapes
        .iter()
        .filter(|s| s.closed)
        .filter_map(|s| s.bounding_rect().map(|r| (r, s)))
        .filter(|(r, _)| r.intersects(label_rect))
        .min_by(|(a, _), (b, _)| a.area().partial_cmp(&b.area()).unwrap())
        .and_then(|(_, s)| s.fill_color)
        .filter(|c| c.is_dark())
        .map(|_| Color::WHITE)
        .unwrap_or(Color::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_shapes::Point;

    fn square(min: f64, max: f64, fill: Color) -> Shape {
        let mut s = Shape::new_closed(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ]);
        s.fill_color = Some(fill);
        s
    }

    #[test]
    fn label_over_dark_fill_turns_white() {
        let shapes = vec![square(0.0, 100.0, Color::BLACK)];
        let rect = Rect {
            min: Point::new(10.0, 10.0),
            max: Point::new(20.0, 20.0),
        };
        assert_eq!(corrected_color(&rect, &shapes), Color::WHITE);
    }

    #[test]
    fn label_over_light_fill_stays_black() {
        let shapes = vec![square(0.0, 100.0, Color::rgb(220, 220, 220))];
        let rect = Rect {
            min: Point::new(10.0, 10.0),
            max: Point::new(20.0, 20.0),
        };
        assert_eq!(corrected_color(&rect, &shapes), Color::BLACK);
    }
}
