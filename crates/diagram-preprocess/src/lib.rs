//! Grid preprocessing (§4.H): splitting raw text into rows, trimming
//! trailing blanks, expanding tabs, padding a blank border, and substituting
//! bullets and human color-code names.

pub mod lines;
pub mod outline;
pub mod substitute;

use diagram_grid::Grid;

/// Tab-stop width used when no config overrides it, matching the original
/// tool's default.
pub const DEFAULT_TAB_SIZE: usize = 8;

/// Border width padded around the grid by default; small enough not to
/// waste space, large enough that every flood fill in the boundary
/// extractor has room to run off the outermost shape without hitting the
/// grid edge.
pub const DEFAULT_BORDER: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub tab_size: usize,
    pub border: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        PreprocessConfig {
            tab_size: DEFAULT_TAB_SIZE,
            border: DEFAULT_BORDER,
        }
    }
}

/// Runs the full preprocessing pipeline over raw input text and returns a
/// ready-to-classify [`Grid`].
pub fn preprocess(text: &str, config: &PreprocessConfig) -> Grid {
    let rows = lines::split_lines(text);
    let rows = lines::trim_trailing_blank_lines(rows);
    let mut rows = rows;
    lines::expand_tabs(&mut rows, config.tab_size);
    outline::normalize_rows(&mut rows);
    let rows = outline::add_outline(rows, config.border);

    let mut grid = Grid::from_rows(rows);
    substitute::replace_bullets(&mut grid);
    substitute::replace_human_color_codes(&mut grid);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocess_pads_a_border_and_expands_color_codes() {
        let grid = preprocess("cRED box", &PreprocessConfig::default());
        assert_eq!(grid.get(diagram_grid::Cell::new(0, 0)), ' ');
        let text = grid.to_text();
        assert!(text.contains("cE32 box"));
    }

    #[test]
    fn trailing_blank_lines_do_not_survive_into_the_grid() {
        let grid = preprocess("hello\n\n\n", &PreprocessConfig::default());
        assert_eq!(grid.height(), 1 + 2 * DEFAULT_BORDER as i32);
    }
}
