//! Position evaluation.
//!
//! Scores a board from the maximizing player's point of view as the plain
//! difference in completed boxes. Chain and parity analysis would slot in
//! here; the search only relies on "higher is better for `max_agent`".

use crate::board::{GameBoard, Player};

/// Returns `score(max_agent) - score(min_agent)`.
pub fn evaluate<B: GameBoard + ?Sized>(board: &B, max_agent: Player, min_agent: Player) -> i32 {
    board.score(max_agent) as i32 - board.score(min_agent) as i32
}
