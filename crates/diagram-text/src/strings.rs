//! Within a text group's bounding area, isolates every maximal run of cells
//! that doesn't contain two consecutive blanks.

use diagram_cellset::CellSet;
use diagram_grid::{Cell, Grid};

#[derive(Clone, Debug, PartialEq)]
pub struct TextString {
    pub start: Cell,
    pub text: String,
}

impl TextString {
    pub fn end_x(&self) -> i32 {
        self.start.x + self.text.chars().count() as i32 - 1
    }
}

pub fn isolate_strings(grid: &Grid, group: &CellSet) -> Vec<TextString> {
    let bb = match group.bounding_box() {
        Some(bb) => bb,
        None => return Vec::new(),
    };
    let mut rows: Vec<i32> = group.iter().map(|c| c.y).collect();
    rows.sort_unstable();
    rows.dedup();

    let mut out = Vec::new();
    for y in rows {
        let mut x = bb.min_x;
        while x <= bb.max_x {
            if grid.get(Cell::new(x, y)) == ' ' {
                x += 1;
                continue;
            }
            let start_x = x;
            let mut text = String::new();
            let mut blank_run = 0;
            while x <= bb.max_x {
                let ch = grid.get(Cell::new(x, y));
                if ch == ' ' {
                    blank_run += 1;
                    if blank_run >= 2 {
                        break;
                    }
                } else {
                    blank_run = 0;
                }
                text.push(ch);
                x += 1;
            }
            let trimmed = text.trim_end().to_string();
            if !trimmed.is_empty() {
                out.push(TextString {
                    start: Cell::new(start_x, y),
                    text: trimmed,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_space_gap_stays_one_run() {
        let g = Grid::from_text("Web Server");
        let group: CellSet = g.iter_cells().filter(|&c| g.get(c) != ' ').collect();
        let strings = isolate_strings(&g, &group);
        assert_eq!(strings.len(), 1);
        assert_eq!(strings[0].text, "Web Server");
    }

    #[test]
    fn double_space_gap_splits_into_two_runs() {
        let g = Grid::from_text("Web  Server");
        let group: CellSet = g.iter_cells().filter(|&c| g.get(c) != ' ').collect();
        let strings = isolate_strings(&g, &group);
        assert_eq!(strings.len(), 2);
        assert_eq!(strings[0].text, "Web");
        assert_eq!(strings[1].text, "Server");
    }
}
