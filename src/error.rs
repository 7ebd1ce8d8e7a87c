use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for one extraction run.
///
/// Every variant is terminal: the pipeline produces either a complete
/// [`GameRecord`](crate::GameRecord) or one of these, never a partially
/// populated record.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot open '{path}': {source}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode '{path}': {reason}")]
    DecodingError { path: PathBuf, reason: String },

    #[error("malformed game record: {detail}")]
    MalformedHeader { detail: String },

    #[error("illegal move '{san}' at ply {ply}")]
    IllegalMove { ply: usize, san: String },

    #[error("ambiguous move '{san}' at ply {ply}")]
    AmbiguousMove { ply: usize, san: String },

    #[error("no game record found before end of input")]
    EmptyInput,
}
