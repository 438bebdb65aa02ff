//! Channel-creation form state machine
//!
//! Owns the draft, gates re-entrancy with an explicit phase field, and maps
//! user events onto the one outbound call. All transitions are synchronous;
//! only the dispatched service call suspends, and `submit`/`resolve` bracket
//! it so hosts with their own executors can drive the machine directly.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use validator::{Validate, ValidationErrors};

use chat_client_core::{Channel, ChannelDraft, ChannelKind, DomainError, Snowflake};

use crate::dto::CreateChannelRequest;
use crate::service::{ChannelService, ServiceResult};

/// Dialog shell collaborator - the generic open/close container
///
/// The form never owns visibility; it requests transitions through this
/// seam. Blanket-implemented for closures so hosts can pass a callback.
pub trait DialogShell: Send + Sync {
    /// Request that the host open or close the dialog
    fn request_open_change(&self, open: bool);
}

impl<F> DialogShell for F
where
    F: Fn(bool) + Send + Sync,
{
    fn request_open_change(&self, open: bool) {
        self(open);
    }
}

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Editable; submit and cancel are available
    #[default]
    Idle,
    /// One request is in flight; edits, duplicate submits, and cancel are
    /// suppressed until it resolves
    Submitting,
}

/// What a submit event produced
#[derive(Debug)]
pub enum SubmitAction {
    /// Draft was valid; the form entered `Submitting` and the host must
    /// dispatch this request, then feed the result to [`ChannelCreationForm::resolve`]
    Dispatch(CreateChannelRequest),
    /// Validation failed; errors are keyed by field for inline rendering
    Rejected(ValidationErrors),
    /// A submission is already in flight; no second request is issued
    InFlight,
}

/// Terminal result of one submit cycle
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Channel created; fields were reset and the shell asked to close
    Created,
    /// Validation blocked the submission; nothing was sent
    Rejected(ValidationErrors),
    /// The service call failed; fields retained, dialog still open
    Failed,
    /// Duplicate submit while in flight; ignored
    Suppressed,
}

/// Channel-creation form
pub struct ChannelCreationForm {
    guild_id: Snowflake,
    category_id: Option<Snowflake>,
    draft: ChannelDraft,
    phase: FormPhase,
    last_failure: Option<String>,
    shell: Arc<dyn DialogShell>,
}

impl ChannelCreationForm {
    /// Create a form targeting `guild_id`, optionally nested under a
    /// category, wired to the host's dialog shell
    pub fn new(
        guild_id: Snowflake,
        category_id: Option<Snowflake>,
        shell: Arc<dyn DialogShell>,
    ) -> Self {
        Self {
            guild_id,
            category_id,
            draft: ChannelDraft::new(),
            phase: FormPhase::Idle,
            last_failure: None,
            shell,
        }
    }

    /// Current draft contents
    pub fn draft(&self) -> &ChannelDraft {
        &self.draft
    }

    /// Current phase
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Generic notice from the most recent failed submission, if any
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// Replace the raw name with the latest edit
    ///
    /// Ignored while a submission is in flight.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_submitting() {
            debug!("edit ignored while submitting");
            return;
        }
        self.draft.name = name.into();
    }

    /// Select a channel kind
    ///
    /// Rejects kinds the form does not offer (currently everything but
    /// text). Ignored while a submission is in flight.
    pub fn select_kind(&mut self, kind: ChannelKind) -> Result<(), DomainError> {
        if self.is_submitting() {
            debug!(?kind, "selection ignored while submitting");
            return Ok(());
        }
        if !kind.is_selectable() {
            return Err(DomainError::KindDisabled(kind));
        }
        self.draft.kind = kind;
        Ok(())
    }

    /// Handle a submit event
    ///
    /// Validates synchronously, and on success transitions to `Submitting`
    /// and hands back the normalized request for the host to dispatch. The
    /// displayed draft is never rewritten by normalization.
    pub fn submit(&mut self) -> SubmitAction {
        if self.is_submitting() {
            debug!(guild_id = %self.guild_id, "duplicate submit suppressed");
            return SubmitAction::InFlight;
        }

        self.last_failure = None;

        if let Err(errors) = self.draft.validate() {
            debug!(guild_id = %self.guild_id, "draft failed validation");
            return SubmitAction::Rejected(errors);
        }

        self.phase = FormPhase::Submitting;
        SubmitAction::Dispatch(CreateChannelRequest::from_draft(
            &self.draft,
            self.category_id,
        ))
    }

    /// Apply the result of the dispatched service call
    ///
    /// Success resets the fields and asks the shell to close; failure keeps
    /// the entered values so the user can retry manually.
    pub fn resolve(&mut self, result: ServiceResult<Channel>) -> SubmitOutcome {
        if !self.is_submitting() {
            warn!(guild_id = %self.guild_id, "resolve called with no submission in flight");
        }
        self.phase = FormPhase::Idle;

        match result {
            Ok(channel) => {
                info!(
                    channel_id = %channel.id,
                    guild_id = %self.guild_id,
                    "channel created"
                );
                self.reset();
                self.shell.request_open_change(false);
                SubmitOutcome::Created
            }
            Err(err) => {
                error!(
                    error = %err,
                    guild_id = %self.guild_id,
                    "failed to create channel"
                );
                self.last_failure = Some("Failed to create the channel.".to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Run one full submit cycle against the channel service
    #[instrument(skip(self, service), fields(guild_id = %self.guild_id))]
    pub async fn submit_via<S>(&mut self, service: &S) -> SubmitOutcome
    where
        S: ChannelService + ?Sized,
    {
        match self.submit() {
            SubmitAction::InFlight => SubmitOutcome::Suppressed,
            SubmitAction::Rejected(errors) => SubmitOutcome::Rejected(errors),
            SubmitAction::Dispatch(request) => {
                let result = service.create_guild_channel(self.guild_id, request).await;
                self.resolve(result)
            }
        }
    }

    /// Handle a cancel event
    ///
    /// Refused while a submission is in flight (it runs to completion);
    /// otherwise resets the fields and asks the shell to close. Returns
    /// whether the cancel was honored. No request is ever sent.
    pub fn cancel(&mut self) -> bool {
        if self.is_submitting() {
            debug!(guild_id = %self.guild_id, "cancel ignored while submitting");
            return false;
        }
        self.reset();
        self.shell.request_open_change(false);
        true
    }

    fn reset(&mut self) {
        self.draft = ChannelDraft::new();
        self.last_failure = None;
    }
}
