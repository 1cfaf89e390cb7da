//! Edge-to-cell adjacency and per-cell fill counts.

use crate::board::{Cell, Edge, GameBoard, Orientation};

/// Returns the one or two cells bordering `edge` on a board of `size`.
///
/// Edges on the outer boundary border a single cell.
pub fn edge_cells(size: usize, edge: Edge) -> impl Iterator<Item = Cell> {
    let Edge { row, col, orientation } = edge;
    let (before, after) = match orientation {
        Orientation::Vertical => (
            (col > 0).then(|| Cell::new(row, col - 1)),
            (col < size).then(|| Cell::new(row, col)),
        ),
        Orientation::Horizontal => (
            (row > 0).then(|| Cell::new(row - 1, col)),
            (row < size).then(|| Cell::new(row, col)),
        ),
    };
    [before, after].into_iter().flatten()
}

/// Cells bordering `edge` on `board`: left then right for vertical edges,
/// top then bottom for horizontal ones.
pub fn neighbours<B: GameBoard + ?Sized>(board: &B, edge: Edge) -> impl Iterator<Item = Cell> {
    edge_cells(board.size(), edge)
}

/// Number of drawn edges around `cell`, in `0..=4`.
///
/// `cell` must lie on the board.
pub fn filled_edges<B: GameBoard + ?Sized>(board: &B, cell: Cell) -> u8 {
    cell.edges().iter().filter(|&&e| board.is_drawn(e)).count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Player};

    fn cells(board: &BoardState, edge: Edge) -> Vec<Cell> {
        neighbours(board, edge).collect()
    }

    #[test]
    fn interior_edges_have_two_neighbours() {
        let board = BoardState::new(3).unwrap();
        assert_eq!(
            cells(&board, Edge::vertical(1, 1)),
            vec![Cell::new(1, 0), Cell::new(1, 1)]
        );
        assert_eq!(
            cells(&board, Edge::horizontal(2, 2)),
            vec![Cell::new(1, 2), Cell::new(2, 2)]
        );
    }

    #[test]
    fn boundary_edges_have_one_neighbour() {
        let board = BoardState::new(3).unwrap();
        assert_eq!(cells(&board, Edge::vertical(2, 0)), vec![Cell::new(2, 0)]);
        assert_eq!(cells(&board, Edge::vertical(2, 3)), vec![Cell::new(2, 2)]);
        assert_eq!(cells(&board, Edge::horizontal(0, 1)), vec![Cell::new(0, 1)]);
        assert_eq!(cells(&board, Edge::horizontal(3, 1)), vec![Cell::new(2, 1)]);
    }

    #[test]
    fn single_cell_board_edges_all_touch_it() {
        let board = BoardState::new(1).unwrap();
        for edge in Cell::new(0, 0).edges() {
            assert_eq!(cells(&board, edge), vec![Cell::new(0, 0)]);
        }
    }

    #[test]
    fn fill_count_tracks_drawn_sides() {
        let mut board = BoardState::new(2).unwrap();
        let cell = Cell::new(1, 1);
        assert_eq!(filled_edges(&board, cell), 0);

        for (i, edge) in cell.edges().into_iter().enumerate() {
            board.add_move(edge, Player::A);
            assert_eq!(filled_edges(&board, cell), i as u8 + 1);
        }
        // The shared edges also count toward the neighbours.
        assert_eq!(filled_edges(&board, Cell::new(0, 1)), 1);
        assert_eq!(filled_edges(&board, Cell::new(1, 0)), 1);
        assert_eq!(filled_edges(&board, Cell::new(0, 0)), 0);
    }
}
