//! Player markers.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

pub const ALL_PLAYERS: [Player; 2] = [Player::A, Player::B];

impl Player {
    /// Returns the single-character protocol abbreviation.
    pub const fn char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    /// Parses a player from its protocol abbreviation.
    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'A' => Some(Player::A),
            'B' => Some(Player::B),
            _ => None,
        }
    }

    /// Parses a player from a single-character token such as `"A"`.
    pub fn from_token(s: &str) -> Option<Player> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c),
            _ => None,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}
