//! Search and planning.
//!
//! Explores the game tree from the current position to pick the move that
//! maximizes the searching side's box differential.

pub mod minimax;

pub use minimax::{best_move, minimax, Agents, SearchResult, MAX_NODE_FLOOR, MIN_NODE_CEILING};
