use thiserror::Error;

/// Which pipeline stage produced a failure. Used for logging only; callers
/// handle every failure the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Url,
    Fetch,
    Parse,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Url => write!(f, "url"),
            Stage::Fetch => write!(f, "fetch"),
            Stage::Parse => write!(f, "parse"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP status {0}")]
    FetchStatus(u16),

    #[error("HTTP transport error: {0}")]
    FetchTransport(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::InvalidUrl(_) => Stage::Url,
            Error::FetchStatus(_) | Error::FetchTransport(_) => Stage::Fetch,
            Error::Parse(_) => Stage::Parse,
        }
    }
}
