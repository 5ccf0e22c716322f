//! Error types for FileFly.
//!
//! This module provides a unified error type for all FileFly operations,
//! with specific error variants for different failure modes.

use std::io;

use thiserror::Error;

/// A specialized `Result` type for FileFly operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for FileFly.
#[derive(Error, Debug)]
pub enum Error {
    /// Transfer reference uses a scheme the intake pipeline cannot resolve
    #[error("unresolved transfer source: {0}")]
    UnresolvedSource(String),

    /// Encoded filename does not carry the expected sender metadata
    #[error("malformed encoded filename: {0}")]
    MalformedName(String),

    /// A codec component is empty or would make decoding ambiguous
    #[error("invalid {component}: {reason}")]
    InvalidComponent {
        /// Which component was rejected
        component: &'static str,
        /// Reason for rejection
        reason: String,
    },

    /// Source file does not exist
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Configuration file error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns whether the failure happened before any bytes were copied.
    ///
    /// Resolution and decoding failures leave the filesystem and the store
    /// untouched; storage failures may leave an orphan file behind.
    #[must_use]
    pub const fn is_pre_copy(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedSource(_)
                | Self::MalformedName(_)
                | Self::InvalidComponent { .. }
                | Self::FileNotFound(_)
        )
    }
}
