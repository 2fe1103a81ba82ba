//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The networking worker is gone
    #[error("Network channel closed")]
    NetworkChannelClosed,
}
