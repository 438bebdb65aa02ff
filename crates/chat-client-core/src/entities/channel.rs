//! Channel entity and kind codes as the channel service understands them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Channel kind enum with the service's integer codes
///
/// Voice channels exist in the protocol but cannot be created from the
/// client yet, so `Voice` is carried in the enum while staying unselectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum ChannelKind {
    /// Guild text channel
    #[default]
    Text = 0,
    /// Guild voice channel (not yet creatable)
    Voice = 2,
}

impl ChannelKind {
    /// Get the numeric wire code
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Parse a wire code, rejecting anything outside the enumerated set
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Text),
            2 => Some(Self::Voice),
            _ => None,
        }
    }

    /// Whether the creation form offers this kind
    #[inline]
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl From<ChannelKind> for i32 {
    fn from(kind: ChannelKind) -> Self {
        kind.as_i32()
    }
}

/// Channel entity as returned by the channel service
///
/// The form treats this as an opaque success payload; nothing here is
/// interpreted beyond logging the new channel's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new guild text channel value
    #[must_use]
    pub fn new_text(id: Snowflake, guild_id: Snowflake, name: String) -> Self {
        Self {
            id,
            guild_id,
            name,
            kind: ChannelKind::Text,
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    /// Check if this channel sits under a category
    #[inline]
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ChannelKind::Text.as_i32(), 0);
        assert_eq!(ChannelKind::Voice.as_i32(), 2);
        assert_eq!(ChannelKind::from_code(0), Some(ChannelKind::Text));
        assert_eq!(ChannelKind::from_code(2), Some(ChannelKind::Voice));
        assert_eq!(ChannelKind::from_code(1), None);
        assert_eq!(ChannelKind::from_code(99), None);
    }

    #[test]
    fn test_kind_defaults_to_text() {
        assert_eq!(ChannelKind::default(), ChannelKind::Text);
    }

    #[test]
    fn test_only_text_is_selectable() {
        assert!(ChannelKind::Text.is_selectable());
        assert!(!ChannelKind::Voice.is_selectable());
    }

    #[test]
    fn test_text_channel() {
        let channel = Channel::new_text(
            Snowflake::new(1),
            Snowflake::new(100),
            "general".to_string(),
        );
        assert_eq!(channel.kind, ChannelKind::Text);
        assert!(!channel.has_parent());
    }
}
