//! Error types for the contact book
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Persistence faults are never retried and never caught internally; the
//! operation that hit one aborts before any write. A missing backing file
//! is not an error (it means an empty book), and a failed update/delete
//! lookup is an ordinary `Ok(false)` result, not an error variant.

use std::io;
use thiserror::Error;

/// Result type alias for contact book operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the contact book
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Backing file exists but is invalid JSON or the wrong shape
    #[error("malformed backing file: {reason}")]
    Malformed {
        /// What the parser rejected
        reason: String,
    },

    /// Records could not be serialized for writing
    #[error("serialization error: {reason}")]
    Serialization {
        /// What the serializer rejected
        reason: String,
    },
}
