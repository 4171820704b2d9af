//! Failure types reported by host implementations.
//!
//! None of these ever reach the user. Controllers match on them, log at debug
//! level and carry on as if the operation had been attempted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The host refused to start playback, typically because the request did
    /// not originate from a user gesture.
    #[error("playback request rejected: {0}")]
    Rejected(String),
    #[error("pause failed: {0}")]
    Pause(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write preference `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A stored or submitted display mode this build does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown display mode `{0}`")]
pub struct UnknownDisplayMode(pub String);
