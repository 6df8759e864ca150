use thiserror::Error;

#[derive(Error, Debug)]
pub enum RrssError {
    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Content filter errors: a registered filter is mandatory for its feed,
    // so any failure aborts the run
    #[error("Content filter failed for '{0}': {1}")]
    Filter(String, String),

    // Ledger errors
    #[error("Ledger append failed: {0}")]
    Ledger(#[source] std::io::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RrssResult<T> = Result<T, RrssError>;
