//! Font-size fitting. Actual glyph measurement is a rasterizer concern, so
//! this module works against a small [`FontMetrics`] trait instead of a real
//! font library; the fitting *algorithm* is what's implemented here.

const STARTING_SIZE: f64 = 12.0;
const MAX_STEPS: usize = 2000;

/// Queries a font's metrics at a given point size.
pub trait FontMetrics {
    /// Ascent in pixels at `size`.
    fn ascent(&self, size: f64) -> f64;
    /// Rendered width of `text` in pixels at `size`.
    fn width(&self, size: f64, text: &str) -> f64;
    /// Height of the glyph 'Z' in pixels at `size`, used to vertically center
    /// a label within its cell.
    fn z_height(&self, size: f64) -> f64;
}

/// Half-step search: adjusts size until ascent first crosses `target` from
/// the starting direction, then backs off half a step.
pub fn fit_by_height(metrics: &dyn FontMetrics, target: f64) -> f64 {
    let mut size = STARTING_SIZE;
    let font_h = metrics.ascent(size);
    let direction: f64 = if font_h > target { -1.0 } else { 1.0 };
    size += direction;

    for _ in 0..MAX_STEPS {
        if size <= 0.0 {
            return 1.0;
        }
        let font_h = metrics.ascent(size);
        if direction > 0.0 {
            if font_h > target {
                return size - 0.5;
            }
        } else if font_h < target {
            return size;
        }
        size += 0.5 * direction;
    }
    size.max(1.0)
}

/// Integer-step search over width, used when the height-fit size renders
/// wider than the string's cell span.
pub fn fit_by_width(metrics: &dyn FontMetrics, target: f64, text: &str) -> f64 {
    let mut size = STARTING_SIZE;
    let font_w = metrics.width(size, text);
    let direction: f64 = if font_w > target { -1.0 } else { 1.0 };
    size += direction;

    for _ in 0..MAX_STEPS {
        if size <= 0.0 {
            return 1.0;
        }
        let font_w = metrics.width(size, text);
        if direction > 0.0 {
            if font_w > target {
                return size - 1.0;
            }
        } else if font_w < target {
            return size;
        }
        size += direction;
    }
    size.max(1.0)
}

/// Fits a string to its cell height first, then re-fits by width if the
/// height-fit size overruns the string's allotted span.
pub fn fit_font(metrics: &dyn FontMetrics, cell_h: f64, span_w: f64, text: &str) -> f64 {
    let size = fit_by_height(metrics, cell_h);
    if metrics.width(size, text) > span_w {
        fit_by_width(metrics, span_w, text)
    } else {
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A deterministic fake: ascent/width/z_height all scale linearly with
    /// size, so the fitted size is exactly solvable.
    struct LinearMetrics {
        ascent_per_pt: f64,
        width_per_char_per_pt: f64,
    }

    impl FontMetrics for LinearMetrics {
        fn ascent(&self, size: f64) -> f64 {
            size * self.ascent_per_pt
        }
        fn width(&self, size: f64, text: &str) -> f64 {
            size * self.width_per_char_per_pt * text.chars().count() as f64
        }
        fn z_height(&self, size: f64) -> f64 {
            size * 0.7
        }
    }

    #[test]
    fn fit_by_height_converges_near_target() {
        let metrics = LinearMetrics {
            ascent_per_pt: 1.0,
            width_per_char_per_pt: 0.6,
        };
        let size = fit_by_height(&metrics, 14.0);
        assert!(metrics.ascent(size) <= 14.0);
        assert!(metrics.ascent(size) > 13.0);
    }

    #[test]
    fn fit_font_falls_back_to_width_when_too_wide() {
        let metrics = LinearMetrics {
            ascent_per_pt: 1.0,
            width_per_char_per_pt: 5.0,
        };
        let size = fit_font(&metrics, 14.0, 20.0, "Hi");
        assert!(metrics.width(size, "Hi") <= 20.0 + 1e-6);
    }
}
