//! Request DTOs sent to the channel service
//!
//! Built once per submission from a validated draft; never mutated after.

use serde::{Deserialize, Serialize};

use chat_client_core::{normalized_name, ChannelDraft, Snowflake};

/// Create channel request
///
/// Wire shape: `{ "name": string, "type": int, "parent_id": string|null }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChannelRequest {
    /// Normalized channel name (trimmed, lowercased, whitespace runs
    /// collapsed to single hyphens)
    pub name: String,

    /// Channel kind code: 0 = text, 2 = voice
    #[serde(rename = "type")]
    pub kind: i32,

    /// Parent category ID, when the channel is created inside a category
    pub parent_id: Option<Snowflake>,
}

impl CreateChannelRequest {
    /// Build the immutable request snapshot from a draft
    ///
    /// The draft must already have passed validation; this only normalizes
    /// and maps codes.
    #[must_use]
    pub fn from_draft(draft: &ChannelDraft, parent_id: Option<Snowflake>) -> Self {
        Self {
            name: normalized_name(&draft.name),
            kind: draft.kind.as_i32(),
            parent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_client_core::ChannelKind;

    #[test]
    fn test_from_draft_normalizes_name() {
        let draft = ChannelDraft {
            name: "  My Cool Room  ".to_string(),
            kind: ChannelKind::Text,
        };
        let request = CreateChannelRequest::from_draft(&draft, None);
        assert_eq!(request.name, "my-cool-room");
        assert_eq!(request.kind, 0);
        assert_eq!(request.parent_id, None);
    }

    #[test]
    fn test_serialized_shape() {
        let request = CreateChannelRequest {
            name: "general-chat".to_string(),
            kind: 0,
            parent_id: Some(Snowflake::new(987654321)),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "general-chat",
                "type": 0,
                "parent_id": "987654321"
            })
        );
    }

    #[test]
    fn test_serialized_null_parent() {
        let request = CreateChannelRequest {
            name: "general".to_string(),
            kind: 0,
            parent_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"parent_id\":null"));
    }
}
