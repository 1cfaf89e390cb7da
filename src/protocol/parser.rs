//! Command parser.
//!
//! Parses incoming protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::{Edge, Player};

use super::notation::parse_edge;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u32>,
}

/// A parsed controller-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the protocol handshake.
    Dbi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start a new game on an empty board of the given size.
    NewGame { size: Option<usize> },

    /// Set the board position from board notation.
    Position { notation: String },

    /// Set the side the engine plays for.
    SetPlayer { player: Player },

    /// Apply a move for a player: `play <A|B> <edge>`.
    Play { player: Player, edge: Edge },

    /// Search the current position.
    Go(GoParams),

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "dbi" => Some(Command::Dbi),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "newgame" => parse_newgame(&tokens),
        "position" => parse_position(&tokens),
        "player" => parse_player(&tokens),
        "play" => parse_play(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let (name, value) = match tokens.iter().position(|&t| t == "value") {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let value_parts = &tokens[vi + 1..];
            let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `newgame [size]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::NewGame { size: None }),
        Some(t) => match t.parse::<usize>() {
            Ok(size) => Some(Command::NewGame { size: Some(size) }),
            Err(_) => {
                eprintln!("invalid board size: '{}'", t);
                None
            }
        },
    }
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        Some(notation) => Some(Command::Position { notation: notation.to_string() }),
        None => {
            eprintln!("malformed position: expected 'position <notation>'");
            None
        }
    }
}

fn parse_player_token(token: Option<&&str>) -> Option<Player> {
    let token = token?;
    let player = Player::from_token(token);
    if player.is_none() {
        eprintln!("unknown player: '{}'", token);
    }
    player
}

/// Parses `player <A|B>`.
fn parse_player(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed player: expected 'player <A|B>'");
        return None;
    }
    parse_player_token(tokens.get(1)).map(|player| Command::SetPlayer { player })
}

/// Parses `play <A|B> <edge>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        eprintln!("malformed play: expected 'play <A|B> <edge>'");
        return None;
    }
    let player = parse_player_token(tokens.get(1))?;
    match parse_edge(tokens[2]) {
        Ok(edge) => Some(Command::Play { player, edge }),
        Err(e) => {
            eprintln!("{}", e);
            None
        }
    }
}

/// Parses `go [depth <n>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if let Some(t) = tokens.get(i) {
                    match t.parse::<u32>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => eprintln!("invalid depth value: '{}'", t),
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}
