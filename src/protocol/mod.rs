//! Line protocol handling.
//!
//! Parsing and serialization for the engine's text protocol: the board and
//! edge notations and the command parser for the main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_board, format_edge, parse_board, parse_edge, NotationError};
pub use parser::{parse_command, Command, GoParams};
