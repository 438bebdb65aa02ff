//! Domain errors - rules the draft enforces outside field validation

use thiserror::Error;

use crate::entities::ChannelKind;

/// Domain layer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Channel kind {0:?} cannot be selected")]
    KindDisabled(ChannelKind),

    #[error("Unknown channel kind code: {0}")]
    UnknownChannelKind(i32),
}

impl DomainError {
    /// Get an error code string for host-facing reporting
    pub fn code(&self) -> &'static str {
        match self {
            Self::KindDisabled(_) => "KIND_DISABLED",
            Self::UnknownChannelKind(_) => "UNKNOWN_CHANNEL_KIND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::KindDisabled(ChannelKind::Voice);
        assert_eq!(err.code(), "KIND_DISABLED");

        let err = DomainError::UnknownChannelKind(7);
        assert_eq!(err.code(), "UNKNOWN_CHANNEL_KIND");
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UnknownChannelKind(7);
        assert_eq!(err.to_string(), "Unknown channel kind code: 7");
    }
}
