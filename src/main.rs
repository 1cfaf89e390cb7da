//! Boxline -- a Dots and Boxes engine speaking a line protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout.

use std::io::{self, BufRead, Write};

use boxline::engine::Engine;
use boxline::protocol::parser::{parse_command, Command};

/// Runs the protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Dbi => engine.handle_dbi(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::NewGame { size } => {
                if let Err(e) = engine.new_game(size) {
                    eprintln!("{}", e);
                }
            }
            Command::Position { notation } => {
                if let Err(e) = engine.set_position(&notation) {
                    eprintln!("{}", e);
                }
            }
            Command::SetPlayer { player } => engine.set_player(player),
            Command::Play { player, edge } => {
                if let Err(e) = engine.play(edge, player) {
                    eprintln!("{}", e);
                }
            }
            Command::Go(params) => engine.handle_go(params.depth, &mut out)?,
            Command::Quit => break,
        }
    }

    out.flush()
}
