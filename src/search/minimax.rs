//! Depth-limited minimax with alpha-beta pruning.
//!
//! The board is mutated in place: each candidate is drawn, searched, and
//! erased again before the next sibling is tried. The erase is tied to the
//! lifetime of an `AppliedMove` guard so that every exit from a node,
//! including a pruning cutoff, leaves the board as it was found.

use std::ops::{Deref, DerefMut};

use log::warn;
use rand::Rng;

use crate::board::{Edge, GameBoard, Player};
use crate::eval::evaluate;
use crate::movegen::allowed_moves;

/// Starting best score at a maximizing node; below any reachable evaluation.
pub const MAX_NODE_FLOOR: i32 = -1000;

/// Starting best score at a minimizing node; above any reachable evaluation.
pub const MIN_NODE_CEILING: i32 = 1000;

/// The two sides of a search: whose score is maximized and whose minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agents {
    pub max: Player,
    pub min: Player,
}

impl Agents {
    /// Searches on behalf of `player` against the other side.
    pub const fn for_player(player: Player) -> Self {
        Agents { max: player, min: player.opponent() }
    }

    const fn mover(self, maximizing: bool) -> Player {
        if maximizing {
            self.max
        } else {
            self.min
        }
    }
}

/// Outcome of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` at depth 0, on a finished board, or when the
    /// node had no candidates.
    pub best: Option<Edge>,
    /// Score from the maximizing agent's point of view.
    pub score: i32,
    /// Nodes visited, including this one.
    pub nodes: u64,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        SearchResult { best: None, score, nodes: 1 }
    }
}

/// An edge drawn on a borrowed board for the duration of the guard.
struct AppliedMove<'a, B: GameBoard + ?Sized> {
    board: &'a mut B,
    edge: Edge,
}

impl<'a, B: GameBoard + ?Sized> AppliedMove<'a, B> {
    fn new(board: &'a mut B, edge: Edge, player: Player) -> Self {
        board.add_move(edge, player);
        AppliedMove { board, edge }
    }
}

impl<B: GameBoard + ?Sized> Deref for AppliedMove<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: GameBoard + ?Sized> DerefMut for AppliedMove<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: GameBoard + ?Sized> Drop for AppliedMove<'_, B> {
    fn drop(&mut self) {
        self.board.remove_move(self.edge);
    }
}

/// Searches `depth` plies from the current position.
///
/// A move that completes a box keeps the turn with the same side, but
/// still costs one ply of depth. Ties keep the earliest candidate in the
/// order produced by `allowed_moves`. The board is unchanged on return.
pub fn minimax<B, R>(
    board: &mut B,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    agents: Agents,
    rng: &mut R,
) -> SearchResult
where
    B: GameBoard + ?Sized,
    R: Rng + ?Sized,
{
    if depth == 0 || board.finished() {
        return SearchResult::leaf(evaluate(board, agents.max, agents.min));
    }

    let mover = agents.mover(maximizing);
    let mut best = SearchResult {
        best: None,
        score: if maximizing { MAX_NODE_FLOOR } else { MIN_NODE_CEILING },
        nodes: 1,
    };

    let candidates = allowed_moves(board, rng);
    if candidates.is_empty() {
        warn!("no legal moves on an unfinished board at depth {}", depth);
        return best;
    }

    for edge in candidates {
        let previous = board.score(mover);
        let child = {
            let mut applied = AppliedMove::new(board, edge, mover);
            let scored = applied.score(mover) > previous;
            let next_maximizing = if scored { maximizing } else { !maximizing };
            minimax(&mut *applied, depth - 1, alpha, beta, next_maximizing, agents, rng)
        };
        best.nodes += child.nodes;

        if maximizing {
            if child.score > best.score {
                best.best = Some(edge);
                best.score = child.score;
            }
            alpha = alpha.max(child.score);
        } else {
            if child.score < best.score {
                best.best = Some(edge);
                best.score = child.score;
            }
            beta = beta.min(child.score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Picks a move for `agents.max` with a full search window.
pub fn best_move<B, R>(board: &mut B, depth: u32, agents: Agents, rng: &mut R) -> SearchResult
where
    B: GameBoard + ?Sized,
    R: Rng + ?Sized,
{
    minimax(board, depth, i32::MIN, i32::MAX, true, agents, rng)
}
