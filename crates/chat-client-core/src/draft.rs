//! Channel draft - the form-local, editable state behind the create dialog
//!
//! A draft lives for at most one submission attempt: defaults at mount,
//! mutated per edit event, validated and normalized once at submit time,
//! then reset. Validation is pure and never touches the edited text.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::ChannelKind;

/// Maximum channel name length, in characters of the raw (pre-normalization)
/// name.
pub const MAX_NAME_CHARS: usize = 100;

/// Transient channel-creation draft
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelDraft {
    /// Raw name exactly as typed; normalized only when the request is built
    pub name: String,
    /// Selected kind, always one of the enumerated codes
    pub kind: ChannelKind,
}

impl ChannelDraft {
    /// Create a fresh draft with default values (empty name, text kind)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ChannelDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            let mut err = ValidationError::new("required");
            err.message = Some("Channel name is required".into());
            errors.add("name", err);
        } else if self.name.chars().count() > MAX_NAME_CHARS {
            let mut err = ValidationError::new("too_long");
            err.message = Some("Channel name must be at most 100 characters".into());
            errors.add("name", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Canonicalize a raw channel name for submission
///
/// Trims, lowercases, and collapses every maximal run of whitespace into a
/// single hyphen. Applied exactly once, when the request is built; the text
/// the user is editing is never rewritten.
#[must_use]
pub fn normalized_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_codes(draft: &ChannelDraft) -> Vec<String> {
        let errors = draft.validate().unwrap_err();
        errors
            .field_errors()
            .get("name")
            .map(|errs| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_default_draft() {
        let draft = ChannelDraft::new();
        assert_eq!(draft.name, "");
        assert_eq!(draft.kind, ChannelKind::Text);
    }

    #[test]
    fn test_empty_name_is_required() {
        let draft = ChannelDraft::default();
        assert_eq!(error_codes(&draft), vec!["required"]);
    }

    #[test]
    fn test_whitespace_only_name_is_required() {
        let draft = ChannelDraft {
            name: "   \t ".to_string(),
            kind: ChannelKind::Text,
        };
        assert_eq!(error_codes(&draft), vec!["required"]);
    }

    #[test]
    fn test_name_at_limit_is_valid() {
        let draft = ChannelDraft {
            name: "a".repeat(MAX_NAME_CHARS),
            kind: ChannelKind::Text,
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_name_over_limit_is_too_long() {
        let draft = ChannelDraft {
            name: "a".repeat(MAX_NAME_CHARS + 1),
            kind: ChannelKind::Text,
        };
        assert_eq!(error_codes(&draft), vec!["too_long"]);
    }

    #[test]
    fn test_normalized_name_examples() {
        assert_eq!(normalized_name("  My Cool Room  "), "my-cool-room");
        assert_eq!(normalized_name("General Chat"), "general-chat");
        assert_eq!(normalized_name("  weird   spacing "), "weird-spacing");
        assert_eq!(normalized_name("already-fine"), "already-fine");
        assert_eq!(normalized_name("Tabs\tand\nnewlines"), "tabs-and-newlines");
    }
}
