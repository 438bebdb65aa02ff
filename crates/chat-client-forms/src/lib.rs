//! # chat-client-forms
//!
//! Application layer for the client's channel-creation dialog: the form
//! state machine, the request DTO it emits, and the collaborator seams
//! (channel service, dialog shell) the surrounding application plugs into.

pub mod dto;
pub mod form;
pub mod service;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use dto::CreateChannelRequest;
pub use form::{ChannelCreationForm, DialogShell, FormPhase, SubmitAction, SubmitOutcome};
pub use service::{ChannelService, ServiceError, ServiceResult};
