//! Single-game PGN extraction: read one file, parse the first game record,
//! report selected header fields and the opening moves in standard algebraic
//! notation.

mod error;
pub mod log;
mod record;
mod report;
mod source;
mod visitor;

pub use error::ExtractError;
pub use record::{GameRecord, Headers, MoveKind, MoveList, Ply};
pub use report::{
    DEFAULT_HEADER_FIELDS, DEFAULT_MOVE_LIMIT, ReportOptions, UNKNOWN_VALUE, render_json,
    render_lines,
};
pub use source::{CompressionMode, read_source};
pub use visitor::parse_first_game;

use std::path::Path;

/// Reads `path` and parses its first game record in one step.
pub fn extract_file(path: &Path, compression: CompressionMode) -> Result<GameRecord, ExtractError> {
    let content = read_source(path, compression)?;
    parse_first_game(&content)
}
