//! Builds a "text-only" copy of the grid: every boundary, arrowhead,
//! point-marker, color-code run, and markup-tag run is blanked out, leaving
//! only the characters the text-extraction pass should see.

use regex::Regex;

use diagram_grid::classify;
use diagram_grid::{Cell, Grid};

fn color_code_regex() -> Regex {
    Regex::new(r"c[A-F0-9]{3}").expect("valid color-code pattern")
}

fn markup_regex() -> Regex {
    Regex::new(r"\{[a-zA-Z]+\}").expect("valid markup-tag pattern")
}

/// Returns a grid the same size as `grid`, with every non-text cell replaced
/// by a space.
pub fn erase_non_text(grid: &Grid) -> Grid {
    let mut rows: Vec<Vec<char>> = grid.rows().to_vec();
    let color_re = color_code_regex();
    let markup_re = markup_regex();

    for row in rows.iter_mut() {
        let text: String = row.iter().collect();
        for m in color_re.find_iter(&text) {
            for x in m.start()..m.end() {
                row[x] = ' ';
            }
        }
        for m in markup_re.find_iter(&text) {
            for x in m.start()..m.end() {
                row[x] = ' ';
            }
        }
    }
    let erased = Grid::from_rows(rows);

    let mut out_rows: Vec<Vec<char>> = erased.rows().to_vec();
    for cell in erased.iter_cells() {
        let is_structural = classify::is_boundary(&erased, cell)
            || classify::is_arrowhead(&erased, cell)
            || classify::is_star_on_line(&erased, cell);
        if is_structural {
            out_rows[cell.y as usize][cell.x as usize] = ' ';
        }
    }
    Grid::from_rows(out_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_and_color_code_are_erased_but_text_survives() {
        let g = Grid::from_text("+----+\n|cE32|\n|Web |\n+----+");
        let erased = erase_non_text(&g);
        assert_eq!(erased.get(Cell::new(0, 0)), ' ');
        assert_eq!(erased.get(Cell::new(1, 1)), ' ');
        assert_eq!(erased.get(Cell::new(1, 2)), 'W');
    }
}
