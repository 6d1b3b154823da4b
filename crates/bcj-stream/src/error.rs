//! Error types for streaming BCJ operations.

use thiserror::Error;

/// Result type for streaming BCJ operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a BCJ codec.
#[derive(Error, Debug)]
pub enum Error {
    /// A conversion kernel broke its contract. This indicates a bug in
    /// the library rather than bad input: the filters are total over
    /// arbitrary byte sequences.
    #[error("conversion kernel violated its contract: {0}")]
    Internal(&'static str),
}
