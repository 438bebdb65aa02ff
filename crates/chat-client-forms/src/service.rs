//! Channel-service collaborator seam
//!
//! The form depends on one capability: creating a guild channel. The trait
//! is the port; the surrounding application provides the implementation
//! (HTTP client, gateway call, test double).

use async_trait::async_trait;
use thiserror::Error;

use chat_client_core::{Channel, Snowflake};

use crate::dto::CreateChannelRequest;

/// Errors the channel service may return
///
/// The form never interprets these beyond success/failure; the taxonomy
/// exists so implementors can report faithfully and logs stay useful.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service rejected the request payload
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced resource does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// The acting user lacks a required permission
    #[error("Missing required permission: {0}")]
    PermissionDenied(String),

    /// The call never reached the service (network, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Anything else an implementor needs to surface
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(permission: impl Into<String>) -> Self {
        Self::PermissionDenied(permission.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// The single capability the creation form consumes
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// Create a channel in a guild
    async fn create_guild_channel(
        &self,
        guild_id: Snowflake,
        request: CreateChannelRequest,
    ) -> ServiceResult<Channel>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ServiceError::not_found("Guild", "123");
        assert_eq!(err.to_string(), "Guild not found: 123");
    }

    #[test]
    fn test_permission_denied_display() {
        let err = ServiceError::permission_denied("MANAGE_CHANNELS");
        assert_eq!(
            err.to_string(),
            "Missing required permission: MANAGE_CHANNELS"
        );
    }

    #[test]
    fn test_other_wraps_anyhow() {
        let err = ServiceError::from(anyhow::anyhow!("socket closed"));
        assert_eq!(err.to_string(), "socket closed");
    }
}
