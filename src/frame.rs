/// A fixed glyph block used as a sprite. Spaces are transparent when drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    rows: usize,
    columns: usize,
    lines: Vec<Vec<char>>,
}

impl Frame {
    pub fn new(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        let columns = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        Frame { rows: lines.len(), columns, lines }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Absolute position of every visible glyph when the frame is anchored at
    /// (row, column). Anchors are rounded to the nearest cell.
    pub fn cells(&self, row: f64, column: f64) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        let top = row.round() as i32;
        let left = column.round() as i32;
        self.lines.iter().enumerate().flat_map(move |(dy, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &c)| c != ' ')
                .map(move |(dx, &c)| (top + dy as i32, left + dx as i32, c))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_uses_longest_line() {
        let frame = Frame::new("  .\n .'.\n|o|");
        assert_eq!(frame.rows(), 3);
        assert_eq!(frame.columns(), 4);
    }

    #[test]
    fn cells_skip_spaces_and_round_anchor() {
        let frame = Frame::new("a b\n c");
        let cells: Vec<_> = frame.cells(1.6, 2.2).collect();
        assert_eq!(cells, vec![(2, 2, 'a'), (2, 4, 'b'), (3, 3, 'c')]);
    }

    #[test]
    fn empty_text_is_empty_frame() {
        assert!(Frame::new("").is_empty());
    }
}
