//! Row normalization and blank-border padding. A border is required so the
//! boundary extractor's flood fills never run off the edge of the grid.

/// Pads every row to the width of the longest one.
pub fn normalize_rows(rows: &mut Vec<Vec<char>>) {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, ' ');
    }
}

/// Wraps the buffer in `border` blank rows/columns on every side.
pub fn add_outline(rows: Vec<Vec<char>>, border: usize) -> Vec<Vec<char>> {
    let max_len = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let width = max_len + 2 * border;

    let mut out = Vec::with_capacity(rows.len() + 2 * border);
    for _ in 0..border {
        out.push(vec![' '; width]);
    }
    for row in rows {
        let mut padded = Vec::with_capacity(width);
        padded.extend(std::iter::repeat(' ').take(border));
        padded.extend(row);
        padded.resize(width, ' ');
        out.push(padded);
    }
    for _ in 0..border {
        out.push(vec![' '; width]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_adds_border_on_every_side() {
        let rows = vec!["AB".chars().collect::<Vec<_>>()];
        let out = add_outline(rows, 2);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], vec![' '; 6]);
        assert_eq!(out[2], vec![' ', ' ', 'A', 'B', ' ', ' ']);
    }

    #[test]
    fn ragged_rows_are_padded_to_max_width() {
        let mut rows = vec![vec!['A'], vec!['B', 'C', 'D']];
        normalize_rows(&mut rows);
        assert!(rows.iter().all(|r| r.len() == 3));
    }
}
