//! The shape value type: a tagged enum for shape kind, dispatched on rather
//! than modeled with inheritance, per the design notes.

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Simple,
    Arrowhead,
    PointMarker,
    Document,
    Storage,
    Io,
    Decision,
    ManualOperation,
    Trapezoid,
    Ellipse,
    Custom,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub points: Vec<Point>,
    pub closed: bool,
    pub dashed: bool,
    pub shape_type: ShapeType,
    pub fill_color: Option<Color>,
    pub stroke_color: Color,
}

impl Shape {
    pub fn new_closed(points: Vec<Point>) -> Shape {
        Shape {
            points,
            closed: true,
            dashed: false,
            shape_type: ShapeType::Simple,
            fill_color: None,
            stroke_color: Color::BLACK,
        }
    }

    pub fn new_open(points: Vec<Point>) -> Shape {
        Shape {
            points,
            closed: false,
            dashed: false,
            shape_type: ShapeType::Simple,
            fill_color: None,
            stroke_color: Color::BLACK,
        }
    }

    pub fn is_point_marker(&self) -> bool {
        self.points.len() == 1
    }

    /// Equality used for deduplication: type, flags, colors, and the full
    /// vertex sequence must match exactly.
    pub fn dedup_key(&self) -> (ShapeType, bool, bool, Option<Color>, Color, Vec<(u64, u64, bool, bool)>) {
        let pts = self
            .points
            .iter()
            .map(|p| {
                (
                    p.x.to_bits(),
                    p.y.to_bits(),
                    p.locked,
                    matches!(p.vertex_type, crate::geometry::VertexType::Round),
                )
            })
            .collect();
        (
            self.shape_type,
            self.closed,
            self.dashed,
            self.fill_color,
            self.stroke_color,
            pts,
        )
    }

    pub fn calc_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % self.points.len()];
            sum += p1.x * p2.y - p2.x * p1.y;
        }
        (sum / 2.0).abs()
    }

    pub fn bounding_rect(&self) -> Option<crate::geometry::Rect> {
        let mut iter = self.points.iter();
        let first = iter.next()?;
        let mut min = (first.x, first.y);
        let mut max = (first.x, first.y);
        for p in iter {
            min.0 = min.0.min(p.x);
            min.1 = min.1.min(p.y);
            max.0 = max.0.max(p.x);
            max.1 = max.1.max(p.y);
        }
        Some(crate::geometry::Rect {
            min: Point::new(min.0, min.1),
            max: Point::new(max.0, max.1),
        })
    }

    /// Point-in-polygon test (ray casting), used by the decoration pass's
    /// smallest-enclosing-shape containment rule. Only meaningful for closed
    /// shapes with >= 3 points.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        if !self.closed || self.points.len() < 3 {
            return false;
        }
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > y) != (pj.y > y) {
                let x_intersect = (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x;
                if x < x_intersect {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Removes shapes equal under [`Shape::dedup_key`], preserving first-seen order.
pub fn deduplicate_shapes(shapes: Vec<Shape>) -> Vec<Shape> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(shapes.len());
    for s in shapes {
        if seen.insert(s.dedup_key()) {
            out.push(s);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_contains_its_center() {
        let shape = Shape::new_closed(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(shape.contains_point(5.0, 5.0));
        assert!(!shape.contains_point(15.0, 5.0));
    }

    #[test]
    fn area_of_unit_square_is_one() {
        let shape = Shape::new_closed(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        assert_eq!(shape.calc_area(), 1.0);
    }

    #[test]
    fn dedup_drops_identical_shapes() {
        let s1 = Shape::new_closed(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let s2 = s1.clone();
        let s3 = Shape::new_open(vec![Point::new(0.0, 0.0)]);
        assert_eq!(deduplicate_shapes(vec![s1, s2, s3]).len(), 2);
    }
}
