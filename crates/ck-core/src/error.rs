//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CkError` as one variant
//! where they surface core failures (time parsing, id conversion).

use thiserror::Error;

/// The top-level error type for `ck-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CkError {
    #[error("invalid time of day {0:?}: expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `ck-*` crates.
pub type CkResult<T> = Result<T, CkError>;
