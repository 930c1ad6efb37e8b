//! Line-level preparation: splitting raw input, dropping trailing blank
//! lines, and expanding tabs to the configured stop width.

/// Splits on `\n`, stripping a trailing `\r` from each line (`\r\n` input).
pub fn split_lines(text: &str) -> Vec<Vec<char>> {
    text.lines().map(|l| l.chars().collect()).collect()
}

fn only_whitespace(row: &[char]) -> bool {
    row.iter().all(|c| c.is_whitespace())
}

/// Drops every wholly-blank line from the end of the buffer.
pub fn trim_trailing_blank_lines(mut rows: Vec<Vec<char>>) -> Vec<Vec<char>> {
    while rows.last().is_some_and(|r| only_whitespace(r)) {
        rows.pop();
    }
    rows
}

/// Expands `\t` to the next multiple of `tab_size` columns, measured from
/// the start of the (already-expanded) line.
pub fn expand_tabs(rows: &mut [Vec<char>], tab_size: usize) {
    if tab_size == 0 {
        for row in rows.iter_mut() {
            row.retain(|&c| c != '\t');
        }
        return;
    }
    for row in rows.iter_mut() {
        let mut expanded = Vec::with_capacity(row.len());
        for &c in row.iter() {
            if c == '\t' {
                let pad = tab_size - expanded.len() % tab_size;
                expanded.extend(std::iter::repeat(' ').take(pad));
            } else {
                expanded.push(c);
            }
        }
        *row = expanded;
    }
}
