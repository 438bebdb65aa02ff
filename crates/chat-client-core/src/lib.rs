//! # chat-client-core
//!
//! Domain layer for the client-side channel forms: entities, value objects,
//! draft state, and the pure validation/normalization rules. This crate has
//! zero dependencies on async runtimes or any transport.

pub mod draft;
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use draft::{normalized_name, ChannelDraft, MAX_NAME_CHARS};
pub use entities::{Channel, ChannelKind};
pub use error::DomainError;
pub use value_objects::{Snowflake, SnowflakeParseError};
