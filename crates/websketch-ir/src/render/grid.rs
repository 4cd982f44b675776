//! Fixed-size character canvas the wireframe painter draws into.

/// Border glyph set for one render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Box-drawing borders for the full wireframe mode
pub(crate) const UNICODE_BORDERS: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Plain ASCII borders for structure mode
pub(crate) const ASCII_BORDERS: BorderSet = BorderSet {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

/// Row-major character canvas
///
/// Writes outside the canvas are ignored, so painters clip by construction
/// instead of bounds-checking at every call site.
#[derive(Debug)]
pub(crate) struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn set(&mut self, row: usize, col: usize, glyph: char) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = glyph;
        }
    }

    /// Write a string left-to-right from (row, col), clipped to the canvas
    pub fn put_text(&mut self, row: usize, col: usize, text: &str) {
        for (offset, glyph) in text.chars().enumerate() {
            self.set(row, col + offset, glyph);
        }
    }

    /// Draw a rectangular border between two inclusive cell corners
    pub fn draw_border(&mut self, top: usize, left: usize, bottom: usize, right: usize, borders: &BorderSet) {
        for col in left + 1..right {
            self.set(top, col, borders.horizontal);
            self.set(bottom, col, borders.horizontal);
        }
        for row in top + 1..bottom {
            self.set(row, left, borders.vertical);
            self.set(row, right, borders.vertical);
        }
        self.set(top, left, borders.top_left);
        self.set(top, right, borders.top_right);
        self.set(bottom, left, borders.bottom_left);
        self.set(bottom, right, borders.bottom_right);
    }

    /// Render the canvas as `height` newline-joined rows of `width` chars
    pub fn into_text(self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
            }
            out.extend(&self.cells[row * self.width..(row + 1) * self.width]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_shape() {
        let text = CharGrid::new(5, 3).into_text();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row, "     ");
        }
    }

    #[test]
    fn test_border_glyph_placement() {
        let mut grid = CharGrid::new(6, 4);
        grid.draw_border(0, 0, 3, 5, &ASCII_BORDERS);
        let text = grid.into_text();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows[0], "+----+");
        assert_eq!(rows[1], "|    |");
        assert_eq!(rows[2], "|    |");
        assert_eq!(rows[3], "+----+");
    }

    #[test]
    fn test_unicode_border_corners() {
        let mut grid = CharGrid::new(4, 3);
        grid.draw_border(0, 0, 2, 3, &UNICODE_BORDERS);
        let text = grid.into_text();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows[0], "┌──┐");
        assert_eq!(rows[2], "└──┘");
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut grid = CharGrid::new(3, 2);
        grid.set(10, 10, 'x');
        grid.put_text(1, 1, "overflowing text");
        let text = grid.into_text();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows[0], "   ");
        assert_eq!(rows[1], " ov");
    }
}
