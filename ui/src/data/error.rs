//! Failure taxonomy for the read-only query layer.
//!
//! Query failures propagate unchanged to the fetch boundary, where the
//! dashboard logs them and shows a generic failed state. There are no
//! retries and no structured error codes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("store returned no row count (missing or malformed Content-Range)")]
    MissingCount,

    #[error("bundled snapshot is invalid: {0}")]
    Snapshot(String),
}
