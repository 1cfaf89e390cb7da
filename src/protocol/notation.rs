//! Board and edge notation.
//!
//! Edges are written `<h|v><row>,<col>`, e.g. `h0,1` or `v2,3`.
//!
//! A board is written `<size>/<horizontal>/<vertical>/<owners>`:
//! - `horizontal`: N+1 comma-separated rows of N `0`/`1` characters
//! - `vertical`: N comma-separated rows of N+1 `0`/`1` characters
//! - `owners`: N comma-separated rows of N characters from `.`, `A`, `B`
//!
//! The empty 2x2 board is `2/00,00,00/000,000/..,..`.

use crate::board::{BoardError, BoardState, Edge, Orientation, Player};

/// Errors that can occur while parsing edge or board notation.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("expected 4 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid board size: '{0}'")]
    InvalidSize(String),

    #[error("{section} section: expected {expected} rows, got {got}")]
    WrongRowCount { section: &'static str, expected: usize, got: usize },

    #[error("{section} section row {row}: expected {expected} characters, got {got}")]
    WrongRowWidth { section: &'static str, row: usize, expected: usize, got: usize },

    #[error("invalid edge character: '{0}'")]
    InvalidEdgeChar(char),

    #[error("invalid owner character: '{0}'")]
    InvalidOwnerChar(char),

    #[error("invalid edge: '{0}'")]
    InvalidEdge(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Parses an edge such as `h0,1`.
pub fn parse_edge(s: &str) -> Result<Edge, NotationError> {
    let invalid = || NotationError::InvalidEdge(s.to_string());
    let mut chars = s.chars();
    let orientation = chars
        .next()
        .and_then(Orientation::from_notation_char)
        .ok_or_else(invalid)?;
    let (row, col) = chars.as_str().split_once(',').ok_or_else(invalid)?;
    let row = row.parse::<usize>().map_err(|_| invalid())?;
    let col = col.parse::<usize>().map_err(|_| invalid())?;
    Ok(Edge { row, col, orientation })
}

/// Formats an edge as `<h|v><row>,<col>`.
pub fn format_edge(edge: Edge) -> String {
    format!("{}{},{}", edge.orientation.notation_char(), edge.row, edge.col)
}

/// Splits a section into rows and checks their count and widths.
fn section_rows<'a>(
    section: &'a str,
    name: &'static str,
    rows: usize,
    width: usize,
) -> Result<Vec<&'a str>, NotationError> {
    let parts: Vec<&str> = section.split(',').collect();
    if parts.len() != rows {
        return Err(NotationError::WrongRowCount { section: name, expected: rows, got: parts.len() });
    }
    for (row, part) in parts.iter().enumerate() {
        let got = part.chars().count();
        if got != width {
            return Err(NotationError::WrongRowWidth { section: name, row, expected: width, got });
        }
    }
    Ok(parts)
}

fn parse_edge_grid(
    section: &str,
    name: &'static str,
    rows: usize,
    width: usize,
) -> Result<Vec<Vec<bool>>, NotationError> {
    section_rows(section, name, rows, width)?
        .into_iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    other => Err(NotationError::InvalidEdgeChar(other)),
                })
                .collect::<Result<Vec<bool>, _>>()
        })
        .collect()
}

fn parse_owners(section: &str, size: usize) -> Result<Vec<Vec<Option<Player>>>, NotationError> {
    section_rows(section, "owner", size, size)?
        .into_iter()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '.' => Ok(None),
                    other => Player::from_char(other)
                        .map(Some)
                        .ok_or(NotationError::InvalidOwnerChar(other)),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Parses a board notation string into a `BoardState`.
pub fn parse_board(s: &str) -> Result<BoardState, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != 4 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let size = sections[0]
        .parse::<usize>()
        .map_err(|_| NotationError::InvalidSize(sections[0].to_string()))?;
    // Validate the size before allocating grids from it.
    BoardState::new(size)?;

    let horizontal = parse_edge_grid(sections[1], "horizontal", size + 1, size)?;
    let vertical = parse_edge_grid(sections[2], "vertical", size, size + 1)?;
    let owners = parse_owners(sections[3], size)?;

    Ok(BoardState::from_parts(size, horizontal, vertical, owners)?)
}

fn encode_rows<T>(grid: &[Vec<T>], cell: impl Fn(&T) -> char) -> String {
    grid.iter()
        .map(|row| row.iter().map(&cell).collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encodes a board as notation. Inverse of `parse_board`.
pub fn encode_board(board: &BoardState) -> String {
    let edge = |d: &bool| if *d { '1' } else { '0' };
    format!(
        "{}/{}/{}/{}",
        board.size(),
        encode_rows(board.horizontal(), edge),
        encode_rows(board.vertical(), edge),
        encode_rows(board.owners(), |o: &Option<Player>| o.map_or('.', Player::char)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameBoard;

    const EMPTY_2: &str = "2/00,00,00/000,000/..,..";

    #[test]
    fn parse_edge_valid() {
        assert_eq!(parse_edge("h0,1").unwrap(), Edge::horizontal(0, 1));
        assert_eq!(parse_edge("v12,3").unwrap(), Edge::vertical(12, 3));
    }

    #[test]
    fn parse_edge_invalid() {
        for bad in ["", "x0,1", "h0", "h0,", "h,1", "h-1,0", "h0,1,2", "H0,1"] {
            assert!(
                matches!(parse_edge(bad), Err(NotationError::InvalidEdge(_))),
                "accepted '{}'",
                bad
            );
        }
    }

    #[test]
    fn format_edge_matches_parse() {
        let edge = Edge::vertical(2, 0);
        assert_eq!(format_edge(edge), "v2,0");
        assert_eq!(parse_edge(&format_edge(edge)).unwrap(), edge);
    }

    #[test]
    fn parse_empty_board() {
        let board = parse_board(EMPTY_2).unwrap();
        assert_eq!(board, BoardState::new(2).unwrap());
        assert_eq!(encode_board(&board), EMPTY_2);
    }

    #[test]
    fn parse_board_with_owned_cell() {
        // Cell (0,0) complete and owned by B; one extra edge in row 2.
        let board = parse_board("2/10,10,01/110,000/B.,..").unwrap();
        assert_eq!(board.score(Player::B), 1);
        assert_eq!(board.score(Player::A), 0);
        assert_eq!(board.remaining_edges(), 7);
        assert!(board.is_drawn(Edge::horizontal(2, 1)));
        assert_eq!(encode_board(&board), "2/10,10,01/110,000/B.,..");
    }

    #[test]
    fn encode_after_play() {
        let mut board = BoardState::new(1).unwrap();
        board.add_move(Edge::horizontal(0, 0), Player::A);
        board.add_move(Edge::horizontal(1, 0), Player::B);
        board.add_move(Edge::vertical(0, 0), Player::A);
        board.add_move(Edge::vertical(0, 1), Player::B);
        let text = encode_board(&board);
        assert_eq!(text, "1/1,1/11/B");
        assert_eq!(parse_board(&text).unwrap(), board);
    }

    #[test]
    fn parse_board_errors() {
        assert!(matches!(
            parse_board("2/00,00,00/000,000"),
            Err(NotationError::WrongSectionCount(3))
        ));
        assert!(matches!(
            parse_board("x/00,00,00/000,000/..,.."),
            Err(NotationError::InvalidSize(_))
        ));
        assert!(matches!(
            parse_board("0///"),
            Err(NotationError::Board(BoardError::InvalidSize(0)))
        ));
        assert!(matches!(
            parse_board("2/00,00/000,000/..,.."),
            Err(NotationError::WrongRowCount { section: "horizontal", expected: 3, got: 2 })
        ));
        assert!(matches!(
            parse_board("2/00,00,00/000,00/..,.."),
            Err(NotationError::WrongRowWidth { section: "vertical", row: 1, expected: 3, got: 2 })
        ));
        assert!(matches!(
            parse_board("2/00,02,00/000,000/..,.."),
            Err(NotationError::InvalidEdgeChar('2'))
        ));
        assert!(matches!(
            parse_board("2/00,00,00/000,000/.C,.."),
            Err(NotationError::InvalidOwnerChar('C'))
        ));
        assert!(matches!(
            parse_board("2/00,00,00/000,000/A.,.."),
            Err(NotationError::Board(BoardError::OwnerMismatch(_)))
        ));
        assert!(matches!(
            parse_board("2/10,10,00/110,000/..,.."),
            Err(NotationError::Board(BoardError::OwnerMismatch(_)))
        ));
    }
}
