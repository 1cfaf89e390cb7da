//! Legal move generation.
//!
//! Lists every undrawn edge, ordered for alpha-beta search: moves that
//! complete a box first, neutral moves next, and moves that hand the
//! opponent a box last. Order within each class is shuffled.

pub mod neighbours;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Edge, GameBoard};

pub use neighbours::{edge_cells, filled_edges, neighbours};

/// Search priority of a candidate edge, derived from the fill counts of the
/// cells it borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveClass {
    /// Completes a box and no bordering cell sits at two edges.
    Completing,
    /// Touches only cells with zero or one drawn edge.
    Neutral,
    /// Borders a cell with two drawn edges, leaving it open for the opponent.
    Conceding,
}

/// Classifies an undrawn edge. A cell with two drawn edges takes precedence
/// over a cell with three.
pub fn classify<B: GameBoard + ?Sized>(board: &B, edge: Edge) -> MoveClass {
    let mut completes = false;
    for cell in neighbours(board, edge) {
        match filled_edges(board, cell) {
            2 => return MoveClass::Conceding,
            3 => completes = true,
            _ => {}
        }
    }
    if completes {
        MoveClass::Completing
    } else {
        MoveClass::Neutral
    }
}

/// Calls `f` for every edge on a board of `size`: horizontal edges row by
/// row, then vertical edges.
pub fn for_each_edge(size: usize, mut f: impl FnMut(Edge)) {
    for row in 0..=size {
        for col in 0..size {
            f(Edge::horizontal(row, col));
        }
    }
    for row in 0..size {
        for col in 0..=size {
            f(Edge::vertical(row, col));
        }
    }
}

/// Returns all undrawn edges in search order.
///
/// Box-completing edges come first, then neutral edges, then edges that
/// concede a box. Each group is shuffled independently with `rng`. Returns
/// an empty list on a fully drawn board.
pub fn allowed_moves<B, R>(board: &B, rng: &mut R) -> Vec<Edge>
where
    B: GameBoard + ?Sized,
    R: Rng + ?Sized,
{
    let mut completing = Vec::new();
    let mut neutral = Vec::new();
    let mut conceding = Vec::new();

    for_each_edge(board.size(), |edge| {
        if board.is_drawn(edge) {
            return;
        }
        match classify(board, edge) {
            MoveClass::Completing => completing.push(edge),
            MoveClass::Neutral => neutral.push(edge),
            MoveClass::Conceding => conceding.push(edge),
        }
    });

    completing.shuffle(rng);
    neutral.shuffle(rng);
    conceding.shuffle(rng);

    completing.reserve(neutral.len() + conceding.len());
    completing.append(&mut neutral);
    completing.append(&mut conceding);
    completing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Cell, Player};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn undrawn(board: &BoardState) -> HashSet<Edge> {
        let mut set = HashSet::new();
        for_each_edge(board.size(), |e| {
            if !board.is_drawn(e) {
                set.insert(e);
            }
        });
        set
    }

    /// 3x3 board with cell (0,0) at three edges and cell (2,2) at two.
    fn mixed_board() -> BoardState {
        let mut board = BoardState::new(3).unwrap();
        for e in [
            Edge::horizontal(0, 0),
            Edge::vertical(0, 0),
            Edge::horizontal(1, 0),
            Edge::horizontal(3, 2),
            Edge::vertical(2, 3),
        ] {
            board.add_move(e, Player::A);
        }
        board
    }

    #[test]
    fn empty_board_yields_every_edge_once() {
        let board = BoardState::new(2).unwrap();
        let moves = allowed_moves(&board, &mut seeded_rng());
        assert_eq!(moves.len(), 12);
        let set: HashSet<Edge> = moves.iter().copied().collect();
        assert_eq!(set.len(), 12);
        assert_eq!(set, undrawn(&board));
        assert!(moves.iter().all(|e| board.contains(*e)));
    }

    #[test]
    fn drawn_edges_are_skipped() {
        let board = mixed_board();
        let moves = allowed_moves(&board, &mut seeded_rng());
        assert_eq!(moves.len(), board.remaining_edges());
        let set: HashSet<Edge> = moves.iter().copied().collect();
        assert_eq!(set.len(), moves.len());
        assert_eq!(set, undrawn(&board));
    }

    #[test]
    fn full_board_yields_nothing() {
        let mut board = BoardState::new(2).unwrap();
        for_each_edge(2, |e| board.add_move(e, Player::B));
        assert!(allowed_moves(&board, &mut seeded_rng()).is_empty());
    }

    #[test]
    fn classify_follows_precedence() {
        let board = mixed_board();
        assert_eq!(classify(&board, Edge::vertical(0, 1)), MoveClass::Completing);
        assert_eq!(classify(&board, Edge::vertical(2, 2)), MoveClass::Conceding);
        assert_eq!(classify(&board, Edge::horizontal(2, 2)), MoveClass::Conceding);
        assert_eq!(classify(&board, Edge::horizontal(0, 2)), MoveClass::Neutral);
    }

    #[test]
    fn two_beats_three_on_shared_edge() {
        // Cell (0,0) at three edges, cell (0,1) at two; v(0,1) borders both.
        let mut board = BoardState::new(2).unwrap();
        for e in [
            Edge::horizontal(0, 0),
            Edge::vertical(0, 0),
            Edge::horizontal(1, 0),
            Edge::horizontal(0, 1),
            Edge::horizontal(1, 1),
        ] {
            board.add_move(e, Player::A);
        }
        assert_eq!(filled_edges(&board, Cell::new(0, 0)), 3);
        assert_eq!(filled_edges(&board, Cell::new(0, 1)), 2);
        assert_eq!(classify(&board, Edge::vertical(0, 1)), MoveClass::Conceding);
    }

    #[test]
    fn buckets_are_ordered_for_every_seed() {
        let board = mixed_board();
        for seed in 0..50 {
            let moves = allowed_moves(&board, &mut StdRng::seed_from_u64(seed));
            let ranks: Vec<u8> = moves
                .iter()
                .map(|&e| match classify(&board, e) {
                    MoveClass::Completing => 0,
                    MoveClass::Neutral => 1,
                    MoveClass::Conceding => 2,
                })
                .collect();
            assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "seed {}: {:?}", seed, ranks);
            assert_eq!(ranks[0], 0);
            assert_eq!(*ranks.last().unwrap(), 2);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let board = mixed_board();
        let a = allowed_moves(&board, &mut StdRng::seed_from_u64(7));
        let b = allowed_moves(&board, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffling_varies_order_within_a_bucket() {
        let board = BoardState::new(3).unwrap();
        let first = allowed_moves(&board, &mut StdRng::seed_from_u64(0));
        let differs = (1..20).any(|seed| allowed_moves(&board, &mut StdRng::seed_from_u64(seed)) != first);
        assert!(differs);
    }
}
