//! Edge and cell coordinates.
//!
//! A board of size N has an (N+1) x N grid of horizontal edges and an
//! N x (N+1) grid of vertical edges. Cell (row, col) is bordered by the
//! horizontal edges at (row, col) and (row + 1, col) and the vertical edges
//! at (row, col) and (row, col + 1).

/// Direction of an edge between two adjacent dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    /// Parses an orientation from its notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<Orientation> {
        match c {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A single edge on the board, identified by grid position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Edge {
    /// Creates a horizontal edge.
    pub const fn horizontal(row: usize, col: usize) -> Self {
        Edge { row, col, orientation: Orientation::Horizontal }
    }

    /// Creates a vertical edge.
    pub const fn vertical(row: usize, col: usize) -> Self {
        Edge { row, col, orientation: Orientation::Vertical }
    }

    /// Returns true if this edge lies within a board of the given size.
    pub fn fits(&self, size: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => self.row <= size && self.col < size,
            Orientation::Vertical => self.row < size && self.col <= size,
        }
    }
}

/// A box on the board, identified by its top-left dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// The four edges bordering this cell: top, left, bottom, right.
    pub const fn edges(self) -> [Edge; 4] {
        [
            Edge::horizontal(self.row, self.col),
            Edge::vertical(self.row, self.col),
            Edge::horizontal(self.row + 1, self.col),
            Edge::vertical(self.row, self.col + 1),
        ]
    }
}
