//! Error types for the leash-link client.

use thiserror::Error;

/// Errors surfaced by session operations and the frame pipeline.
#[derive(Error, Debug)]
pub enum LeashLinkError {
    /// Invalid client or endpoint configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Connect, send, or receive failure at the network layer.
    /// Hands control to the reconnect controller; never caller-fatal.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Outbound pipeline failure. The affected batch is dropped and the
    /// session continues.
    #[error("Failed to encode outbound frame: {0}")]
    Encode(String),

    /// Malformed or tampered inbound frame. The frame is dropped and the
    /// session continues.
    #[error("Failed to decode inbound frame: {0}")]
    Decode(String),

    /// The bounded reconnect attempt counter was exceeded. Fatal for the
    /// session; the caller must create a new one to resume streaming.
    #[error("Reconnect attempts exhausted after {0} tries")]
    RetryExhausted(u32),

    /// The session has reached its absorbing terminal state.
    #[error("Session is terminated")]
    Terminated,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LeashLinkError>;

/// Reasons a location sample is refused before it reaches the batching
/// buffer. Rejection never mutates buffered state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleRejected {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("accuracy {0} outside [0, 100) meters")]
    AccuracyOutOfRange(f64),

    #[error("speed {0} outside [0, 30) m/s")]
    SpeedOutOfRange(f64),

    #[error("sample captured in the future")]
    CapturedInFuture,

    #[error("sample older than {0} seconds")]
    Stale(u64),

    #[error("sample belongs to session '{0}'")]
    SessionMismatch(String),

    #[error("session command queue is full")]
    QueueFull,

    #[error("session is terminated")]
    SessionTerminated,
}
