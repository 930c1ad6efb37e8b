//! Pixel-space geometry: colors, points, rectangles, and the cell-to-pixel
//! conversion every shape vertex goes through.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// "Dark" per §4.G's color-correction rule: the brightest channel is
    /// still below 200.
    pub fn is_dark(self) -> bool {
        self.r.max(self.g).max(self.b) < 200
    }

    /// Parses a `c[A-F0-9]{3}` color-code body (the three hex nibbles after
    /// the leading `c`), each nibble repeated to a full byte (`×17`, since
    /// `0xF * 17 == 0xFF`).
    pub fn from_hex_nibbles(hex: &str) -> Option<Color> {
        let mut chars = hex.chars();
        let r = chars.next()?.to_digit(16)? as u8;
        let g = chars.next()?.to_digit(16)? as u8;
        let b = chars.next()?.to_digit(16)? as u8;
        Some(Color::rgb(r * 17, g * 17, b * 17))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexType {
    Normal,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub locked: bool,
    pub vertex_type: VertexType,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point {
            x,
            y,
            locked: false,
            vertex_type: VertexType::Normal,
        }
    }

    pub fn with_type(mut self, t: VertexType) -> Point {
        self.vertex_type = t;
        self
    }

    pub fn locked(mut self) -> Point {
        self.locked = true;
        self
    }

    pub fn north_of(self, other: Point) -> bool {
        self.y < other.y
    }
    pub fn south_of(self, other: Point) -> bool {
        self.y > other.y
    }
    pub fn west_of(self, other: Point) -> bool {
        self.x < other.x
    }
    pub fn east_of(self, other: Point) -> bool {
        self.x > other.x
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn area(&self) -> f64 {
        (self.max.x - self.min.x).abs() * (self.max.y - self.min.y).abs()
    }
}

/// Cell width/height in pixels, the only parameters the cell-to-pixel
/// mapping needs (§6: "these values are parameters, not hard-coded").
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub cell_w: f64,
    pub cell_h: f64,
}

impl Default for CellGeometry {
    fn default() -> Self {
        CellGeometry {
            cell_w: 10.0,
            cell_h: 14.0,
        }
    }
}

impl CellGeometry {
    pub fn min_x(&self, cell: diagram_grid::Cell) -> f64 {
        cell.x as f64 * self.cell_w
    }
    pub fn max_x(&self, cell: diagram_grid::Cell) -> f64 {
        (cell.x + 1) as f64 * self.cell_w
    }
    pub fn min_y(&self, cell: diagram_grid::Cell) -> f64 {
        cell.y as f64 * self.cell_h
    }
    pub fn max_y(&self, cell: diagram_grid::Cell) -> f64 {
        (cell.y + 1) as f64 * self.cell_h
    }
    pub fn mid_x(&self, cell: diagram_grid::Cell) -> f64 {
        self.min_x(cell) + self.cell_w / 2.0
    }
    pub fn mid_y(&self, cell: diagram_grid::Cell) -> f64 {
        self.min_y(cell) + self.cell_h / 2.0
    }
    pub fn center(&self, cell: diagram_grid::Cell) -> Point {
        Point::new(self.mid_x(cell), self.mid_y(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_nibbles_expand_to_full_bytes() {
        let c = Color::from_hex_nibbles("E32").unwrap();
        assert_eq!(c, Color::rgb(0xEE, 0x33, 0x22));
    }

    #[test]
    fn dark_threshold_is_max_channel_below_200() {
        assert!(Color::rgb(100, 100, 199).is_dark());
        assert!(!Color::rgb(100, 200, 100).is_dark());
    }

    #[test]
    fn cell_center_is_at_half_cell() {
        let geo = CellGeometry::default();
        let c = geo.center(diagram_grid::Cell::new(0, 0));
        assert_eq!(c.x, 5.0);
        assert_eq!(c.y, 7.0);
    }
}
