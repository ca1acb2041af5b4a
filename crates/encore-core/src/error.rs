//! Error types for Encore.

use thiserror::Error;

/// Result type alias using Encore's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Encore.
#[derive(Error, Debug)]
pub enum Error {
    // Embed bridge errors
    #[error("player is not ready")]
    PlayerNotReady,

    #[error("player bridge shut down")]
    BridgeClosed,

    #[error("script evaluation failed: {0}")]
    Eval(String),

    #[error("unexpected reply from player: {0}")]
    MalformedReply(String),

    // Generic errors
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the call failed because the embed has not signalled
    /// readiness yet.
    pub const fn is_not_ready(&self) -> bool {
        matches!(self, Self::PlayerNotReady)
    }

    /// Returns true if the same call may succeed on a later tick.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::PlayerNotReady | Self::Eval(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_not_ready() {
        assert!(Error::PlayerNotReady.is_not_ready());
        assert!(!Error::BridgeClosed.is_not_ready());
    }

    #[test]
    fn test_error_transient() {
        assert!(Error::PlayerNotReady.is_transient());
        assert!(Error::Eval("gone".into()).is_transient());
        assert!(!Error::BridgeClosed.is_transient());
        assert!(!Error::InvalidArgument("test".into()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Eval("player missing".into());
        assert_eq!(err.to_string(), "script evaluation failed: player missing");
    }
}
