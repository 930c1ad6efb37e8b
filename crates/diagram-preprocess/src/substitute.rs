//! Bullet-glyph and human-readable color-code substitution, run after the
//! grid has its final dimensions.

use diagram_grid::{classify, Grid};

/// `cGRE`, `cBLU`, and friends expand to their `c[A-F0-9]{3}` equivalents so
/// the decoration pass's single color-code scanner handles both forms.
const HUMAN_COLOR_CODES: &[(&str, &str)] = &[
    ("GRE", "9D9"),
    ("BLU", "55B"),
    ("PNK", "FAA"),
    ("RED", "E32"),
    ("YEL", "FF3"),
    ("BLK", "000"),
];

/// Replaces every `o  ` bullet run with a blank followed by a centered bullet
/// glyph, matching [`diagram_grid::classify::is_bullet`].
pub fn replace_bullets(grid: &mut Grid) {
    let hits: Vec<_> = grid.iter_cells().filter(|&c| classify::is_bullet(grid, c)).collect();
    for cell in hits {
        grid.set(cell, ' ');
        grid.set(cell.east(), '\u{2022}');
    }
}

/// Replaces every `c` + 3-letter human color name with its `c` + hex-nibble
/// equivalent, row by row.
pub fn replace_human_color_codes(grid: &mut Grid) {
    for y in 0..grid.height() {
        let mut text: String = (0..grid.width()).map(|x| grid.get(diagram_grid::Cell::new(x, y))).collect();
        for (name, hex) in HUMAN_COLOR_CODES {
            let from = format!("c{name}");
            let to = format!("c{hex}");
            text = text.replace(&from, &to);
        }
        for (x, c) in text.chars().enumerate() {
            grid.set(diagram_grid::Cell::new(x as i32, y), c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_becomes_blank_plus_bullet_glyph() {
        let mut g = Grid::from_text("o  item");
        replace_bullets(&mut g);
        let text: String = g.rows()[0].iter().collect();
        assert_eq!(text, "  \u{2022}item");
    }

    #[test]
    fn human_color_name_expands_to_hex_code() {
        let mut g = Grid::from_text("cRED box");
        replace_human_color_codes(&mut g);
        let text: String = g.rows()[0].iter().collect();
        assert_eq!(text, "cE32 box");
    }
}
