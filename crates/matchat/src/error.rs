use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read text from stdin")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] match_at::PatternError),

    #[error("{0}")]
    Match(#[from] match_at::MatchError),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
