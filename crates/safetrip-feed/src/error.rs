//! Feed-level errors.
//!
//! A whole fetch or load can fail; a single malformed row inside an
//! otherwise readable batch never does. Those rows are skipped where
//! they are parsed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("json decode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv decode failed: {0}")]
    Csv(#[from] csv::Error),
}
