//! Game state representation.
//!
//! Holds a complete Dots and Boxes position: which edges are drawn, who owns
//! each completed box, and the running score for both players.

use super::edge::{Cell, Edge, Orientation};
use super::player::Player;
use super::GameBoard;
use crate::movegen::edge_cells;

/// Largest supported board dimension. Keeps every score difference well
/// inside the search sentinels.
pub const MAX_SIZE: usize = 16;

/// Errors raised by validated board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_SIZE)]
    InvalidSize(usize),

    #[error("edge {0:?} lies outside the board")]
    EdgeOutOfBounds(Edge),

    #[error("edge {0:?} is already drawn")]
    EdgeAlreadyDrawn(Edge),

    #[error("{grid} grid has the wrong shape for a board of size {size}")]
    GridShape { grid: &'static str, size: usize },

    #[error("cell {0:?} ownership does not match its drawn edges")]
    OwnerMismatch(Cell),
}

/// Complete board state at a point in time.
///
/// Edge grids are indexed `[row][col]`; `horizontal` is (N+1) x N and
/// `vertical` is N x (N+1). The grids are only changed through moves so the
/// running scores and edge count stay in step with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    size: usize,
    horizontal: Vec<Vec<bool>>,
    vertical: Vec<Vec<bool>>,
    /// Owner of each completed cell, `None` while the cell is open.
    owners: Vec<Vec<Option<Player>>>,
    scores: [u32; 2],
    drawn: usize,
}

impl BoardState {
    /// Creates an empty board with `size` x `size` cells.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(BoardState {
            size,
            horizontal: vec![vec![false; size]; size + 1],
            vertical: vec![vec![false; size + 1]; size],
            owners: vec![vec![None; size]; size],
            scores: [0; 2],
            drawn: 0,
        })
    }

    /// Builds a board from explicit edge grids and box owners.
    ///
    /// Every completed cell must have an owner and every owned cell must be
    /// complete. Scores are derived from the owners.
    pub fn from_parts(
        size: usize,
        horizontal: Vec<Vec<bool>>,
        vertical: Vec<Vec<bool>>,
        owners: Vec<Vec<Option<Player>>>,
    ) -> Result<Self, BoardError> {
        let mut board = BoardState::new(size)?;
        if !has_shape(&horizontal, size + 1, size) {
            return Err(BoardError::GridShape { grid: "horizontal", size });
        }
        if !has_shape(&vertical, size, size + 1) {
            return Err(BoardError::GridShape { grid: "vertical", size });
        }
        if !has_shape(&owners, size, size) {
            return Err(BoardError::GridShape { grid: "owner", size });
        }

        board.drawn = horizontal.iter().chain(vertical.iter()).flatten().filter(|&&d| d).count();
        board.horizontal = horizontal;
        board.vertical = vertical;

        for row in 0..size {
            for col in 0..size {
                let cell = Cell::new(row, col);
                let owner = owners[row][col];
                if board.is_complete(cell) != owner.is_some() {
                    return Err(BoardError::OwnerMismatch(cell));
                }
                if let Some(player) = owner {
                    board.scores[player.index()] += 1;
                }
            }
        }
        board.owners = owners;
        Ok(board)
    }

    /// Board dimension in cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Horizontal edge grid, (N+1) rows of N.
    pub fn horizontal(&self) -> &[Vec<bool>] {
        &self.horizontal
    }

    /// Vertical edge grid, N rows of N+1.
    pub fn vertical(&self) -> &[Vec<bool>] {
        &self.vertical
    }

    /// Box owners, N rows of N.
    pub fn owners(&self) -> &[Vec<Option<Player>>] {
        &self.owners
    }

    /// Total number of edges on the board.
    pub fn edge_count(&self) -> usize {
        2 * self.size * (self.size + 1)
    }

    /// Number of edges not yet drawn.
    pub fn remaining_edges(&self) -> usize {
        self.edge_count() - self.drawn
    }

    /// Returns true if the edge lies within this board.
    pub fn contains(&self, edge: Edge) -> bool {
        edge.fits(self.size)
    }

    /// Returns the player who completed `cell`, if any.
    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.owners[cell.row][cell.col]
    }

    /// Plays a move after checking it is legal.
    ///
    /// Returns true if the move completed at least one box, in which case
    /// the mover plays again.
    pub fn try_play(&mut self, edge: Edge, player: Player) -> Result<bool, BoardError> {
        if !self.contains(edge) {
            return Err(BoardError::EdgeOutOfBounds(edge));
        }
        if self.is_drawn(edge) {
            return Err(BoardError::EdgeAlreadyDrawn(edge));
        }
        let before = self.score(player);
        self.add_move(edge, player);
        Ok(self.score(player) > before)
    }

    fn set_drawn(&mut self, edge: Edge, value: bool) {
        match edge.orientation {
            Orientation::Horizontal => self.horizontal[edge.row][edge.col] = value,
            Orientation::Vertical => self.vertical[edge.row][edge.col] = value,
        }
    }

    fn is_complete(&self, cell: Cell) -> bool {
        cell.edges().iter().all(|&e| self.is_drawn(e))
    }
}

fn has_shape<T>(grid: &[Vec<T>], rows: usize, cols: usize) -> bool {
    grid.len() == rows && grid.iter().all(|r| r.len() == cols)
}

impl GameBoard for BoardState {
    fn size(&self) -> usize {
        self.size
    }

    fn finished(&self) -> bool {
        self.drawn == self.edge_count()
    }

    fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    fn is_drawn(&self, edge: Edge) -> bool {
        match edge.orientation {
            Orientation::Horizontal => self.horizontal[edge.row][edge.col],
            Orientation::Vertical => self.vertical[edge.row][edge.col],
        }
    }

    fn add_move(&mut self, edge: Edge, player: Player) {
        debug_assert!(!self.is_drawn(edge), "edge {:?} drawn twice", edge);
        self.set_drawn(edge, true);
        self.drawn += 1;
        for cell in edge_cells(self.size, edge) {
            if self.is_complete(cell) {
                self.owners[cell.row][cell.col] = Some(player);
                self.scores[player.index()] += 1;
            }
        }
    }

    fn remove_move(&mut self, edge: Edge) {
        debug_assert!(self.is_drawn(edge), "edge {:?} removed while undrawn", edge);
        // Any owned neighbour was completed through this edge.
        for cell in edge_cells(self.size, edge) {
            if let Some(owner) = self.owners[cell.row][cell.col].take() {
                self.scores[owner.index()] -= 1;
            }
        }
        self.set_drawn(edge, false);
        self.drawn -= 1;
    }
}
