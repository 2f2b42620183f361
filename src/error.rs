//! Error types for the notes store.

use thiserror::Error;

/// Failures reaching or decoding the durable notes blob.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The browser refused access to local storage.
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    /// Reading the key failed.
    #[error("failed to read key '{key}': {message}")]
    Read { key: String, message: String },

    /// Writing the key failed, usually because the quota is exhausted.
    #[error("failed to write key '{key}': {message}")]
    Write { key: String, message: String },

    /// The stored blob is not a valid notes array.
    #[error("stored notes are malformed: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize notes: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
