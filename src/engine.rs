//! Engine state management.
//!
//! Holds the current board position, the side the engine plays for, engine
//! options, and the random source used for move ordering. Runs the search
//! for the `go` command.

use std::collections::HashMap;
use std::io::{self, Write};

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{BoardError, BoardState, Edge, Player};
use crate::protocol::notation::{format_edge, parse_board, NotationError};
use crate::search::{best_move, Agents, SearchResult};

/// Board size used by `newgame` when none is given.
pub const DEFAULT_SIZE: usize = 3;

/// Search depth used when neither `go` nor the `Depth` option sets one.
pub const DEFAULT_DEPTH: u32 = 4;

/// Deepest search the engine will run.
pub const MAX_DEPTH: u32 = 12;

/// Errors raised by engine commands that need a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no position set")]
    NoPosition,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<BoardState>,
    pub player: Player,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with no position, seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates an engine whose move ordering is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Engine {
            position: None,
            player: Player::A,
            options: HashMap::new(),
            rng,
        }
    }

    /// Starts a new game on an empty board.
    pub fn new_game(&mut self, size: Option<usize>) -> Result<(), BoardError> {
        self.position = Some(BoardState::new(size.unwrap_or(DEFAULT_SIZE))?);
        Ok(())
    }

    /// Sets the current board position from board notation.
    pub fn set_position(&mut self, notation: &str) -> Result<(), NotationError> {
        self.position = Some(parse_board(notation)?);
        Ok(())
    }

    /// Sets the side the engine searches for.
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured search depth from options, or the default.
    pub fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DEPTH)
            .clamp(1, MAX_DEPTH)
    }

    /// Applies a move to the current position.
    ///
    /// Returns true if the move completed a box. Fails with
    /// `EngineError::NoPosition` until `newgame` or `position` has run.
    pub fn play(&mut self, edge: Edge, player: Player) -> Result<bool, EngineError> {
        let board = self.position.as_mut().ok_or(EngineError::NoPosition)?;
        Ok(board.try_play(edge, player)?)
    }

    /// Searches the current position for the engine's side.
    ///
    /// Returns `None` when no position is set.
    pub fn best_move(&mut self, depth: Option<u32>) -> Option<SearchResult> {
        let depth = depth.map_or_else(|| self.depth(), |d| d.clamp(1, MAX_DEPTH));
        let board = self.position.as_mut()?;
        let result = best_move(board, depth, Agents::for_player(self.player), &mut self.rng);
        debug!(
            "searched depth {} for {}: {} nodes, score {}",
            depth,
            self.player.char(),
            result.nodes,
            result.score
        );
        Some(result)
    }

    /// Handles the handshake: writes id, options, and `dbiok`.
    pub fn handle_dbi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name boxline")?;
        writeln!(out, "id author boxline")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            DEFAULT_DEPTH, MAX_DEPTH
        )?;
        writeln!(out, "dbiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: writes an `info` line and the chosen move.
    pub fn handle_go<W: Write>(&mut self, depth: Option<u32>, out: &mut W) -> io::Result<()> {
        let depth = depth.map_or_else(|| self.depth(), |d| d.clamp(1, MAX_DEPTH));
        let result = match self.best_move(Some(depth)) {
            Some(r) => r,
            None => {
                eprintln!("go: no position set");
                return Ok(());
            }
        };

        writeln!(
            out,
            "info depth {} nodes {} score {}",
            depth, result.nodes, result.score
        )?;
        match result.best {
            Some(edge) => writeln!(out, "bestmove {}", format_edge(edge))?,
            None => writeln!(out, "bestmove none")?,
        }
        out.flush()
    }
}
