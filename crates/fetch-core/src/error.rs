//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! in via `From`, or wrap it as one variant.  Prefer whichever keeps
//! error sites clean.

use thiserror::Error;

/// The common error base for all `fetch-*` crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fetch-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
