//! Board representation and game-state types.
//!
//! Contains edge and cell coordinates, player markers, the `GameBoard`
//! contract the search operates on, and `BoardState`, the concrete grid
//! implementation of it.

pub mod edge;
pub mod player;
pub mod state;

pub use edge::{Cell, Edge, Orientation};
pub use player::{Player, ALL_PLAYERS};
pub use state::{BoardError, BoardState, MAX_SIZE};

/// Operations the move generator, evaluator and search need from a board.
///
/// `add_move` and `remove_move` follow a strict stack discipline: an edge
/// is only removed after it was added, and only while every edge added
/// after it has already been removed again.
pub trait GameBoard {
    /// Board dimension in cells per side.
    fn size(&self) -> usize;

    /// True once no undrawn edges remain.
    fn finished(&self) -> bool;

    /// Number of boxes completed by `player`.
    fn score(&self, player: Player) -> u32;

    /// Whether `edge` has been drawn. `edge` must lie on the board.
    fn is_drawn(&self, edge: Edge) -> bool;

    /// Draws `edge` and credits any box it completes to `player`.
    fn add_move(&mut self, edge: Edge, player: Player);

    /// Undoes the `add_move` that drew `edge`, including its scoring.
    fn remove_move(&mut self, edge: Edge);
}
