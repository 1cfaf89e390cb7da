//! Self-play game generation.
//!
//! Plays full games between two engine configurations, honouring the
//! extra-turn rule, and records every move. Records are written as JSONL
//! for offline analysis of search depth against outcome.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::board::{BoardError, BoardState, GameBoard, Player, ALL_PLAYERS};
use crate::protocol::notation::{encode_board, format_edge};
use crate::search::{best_move, Agents};

/// Errors that abort a self-play run.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("search depth for {player:?} must be at least 1, got 0")]
    InvalidDepth { player: Player },

    #[error("game {game_id}: search returned no move after {moves} moves")]
    NoMove { game_id: usize, moves: usize },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Board size in cells per side.
    pub size: usize,
    /// Search depth for player A.
    pub depth_a: u32,
    /// Search depth for player B.
    pub depth_b: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            size: 3,
            depth_a: 3,
            depth_b: 3,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

impl SelfPlayConfig {
    fn depth_for(&self, player: Player) -> u32 {
        match player {
            Player::A => self.depth_a,
            Player::B => self.depth_b,
        }
    }

    /// Rejects configurations that cannot finish a game.
    pub fn validate(&self) -> Result<(), SelfPlayError> {
        for player in ALL_PLAYERS {
            if self.depth_for(player) == 0 {
                return Err(SelfPlayError::InvalidDepth { player });
            }
        }
        BoardState::new(self.size)?;
        Ok(())
    }

    fn rng_for(&self, game_id: usize) -> SmallRng {
        if self.seed != 0 {
            SmallRng::seed_from_u64(self.seed.wrapping_add(game_id as u64))
        } else {
            SmallRng::from_entropy()
        }
    }
}

/// A single move made during a game.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub player: Player,
    /// Edge in protocol notation.
    pub edge: String,
    /// Whether the move completed a box and kept the turn.
    pub scored: bool,
    /// Search score from the mover's point of view.
    pub score: i32,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub size: usize,
    pub moves: Vec<MoveRecord>,
    /// Final box counts for A and B.
    pub final_scores: [u32; 2],
    /// Final position in board notation.
    pub final_board: String,
    /// `None` on a drawn game.
    pub winner: Option<Player>,
}

/// Plays one game from an empty board to the end.
pub fn play_game<R: Rng>(
    config: &SelfPlayConfig,
    game_id: usize,
    rng: &mut R,
) -> Result<GameRecord, SelfPlayError> {
    config.validate()?;
    let mut board = BoardState::new(config.size)?;
    let mut mover = Player::A;
    let mut moves = Vec::with_capacity(board.edge_count());

    while !board.finished() {
        let result = best_move(&mut board, config.depth_for(mover), Agents::for_player(mover), rng);
        let Some(edge) = result.best else {
            warn!("game {}: search returned no move on an unfinished board", game_id);
            return Err(SelfPlayError::NoMove { game_id, moves: moves.len() });
        };
        let scored = board.try_play(edge, mover)?;
        moves.push(MoveRecord {
            player: mover,
            edge: format_edge(edge),
            scored,
            score: result.score,
        });
        if !scored {
            mover = mover.opponent();
        }
    }

    let final_scores = ALL_PLAYERS.map(|p| board.score(p));
    let winner = match final_scores[0].cmp(&final_scores[1]) {
        std::cmp::Ordering::Greater => Some(Player::A),
        std::cmp::Ordering::Less => Some(Player::B),
        std::cmp::Ordering::Equal => None,
    };

    Ok(GameRecord {
        game_id,
        size: config.size,
        moves,
        final_scores,
        final_board: encode_board(&board),
        winner,
    })
}

fn outcome(game: &GameRecord) -> String {
    match game.winner {
        Some(w) => format!("{} wins", w.char()),
        None => "draw".to_string(),
    }
}

/// Runs self-play and returns all completed games in game-id order.
pub fn run_self_play(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    config.validate()?;
    if config.threads > 1 {
        run_self_play_parallel(config)
    } else {
        run_self_play_sequential(config)
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    let mut games = Vec::with_capacity(config.num_games);
    for i in 0..config.num_games {
        let game_start = Instant::now();
        let game = play_game(config, i, &mut config.rng_for(i))?;
        if !config.quiet {
            eprintln!(
                "Game {}/{}: {} {}-{} ({:.2}s)",
                i + 1,
                config.num_games,
                outcome(&game),
                game.final_scores[0],
                game.final_scores[1],
                game_start.elapsed().as_secs_f64(),
            );
        }
        games.push(game);
    }
    Ok(games)
}

/// Parallel self-play: plays games concurrently on a rayon pool.
fn run_self_play_parallel(config: &SelfPlayConfig) -> Result<Vec<GameRecord>, SelfPlayError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let completed = AtomicUsize::new(0);

    let games = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let game_start = Instant::now();
                let game = play_game(config, i, &mut config.rng_for(i))?;
                if !config.quiet {
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    eprintln!(
                        "Game {}/{}: {} {}-{} ({:.2}s)",
                        n,
                        config.num_games,
                        outcome(&game),
                        game.final_scores[0],
                        game.final_scores[1],
                        game_start.elapsed().as_secs_f64(),
                    );
                }
                Ok(game)
            })
            .collect::<Result<Vec<_>, SelfPlayError>>()
    })?;

    Ok(games)
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints win/draw totals to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let wins_a = games.iter().filter(|g| g.winner == Some(Player::A)).count();
    let wins_b = games.iter().filter(|g| g.winner == Some(Player::B)).count();
    let draws = games.len() - wins_a - wins_b;
    eprintln!("A wins: {}, B wins: {}, draws: {}", wins_a, wins_b, draws);
}
