use url::Url;

use crate::view_model::{AppViewModel, ProposalPhase};

/// Identifier for one generation request; a fresh id is allocated per
/// accepted submission.
pub type RequestId = u64;

/// Fixed user-safe text shown whenever the generation call fails.
pub const FALLBACK_TEXT: &str =
    "Unable to generate proposal at this time. Our team will contact you directly.";

/// Outcome of one generation call as reported back through the frontend.
///
/// Raw error detail never enters the core; the effect runner logs it and
/// collapses any failure to `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(String),
    Failure,
}

/// Lifecycle of the proposal result for the current modal session.
///
/// `Failed` carries the fallback text so every settled state is displayable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProposalState {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
        url: String,
    },
    Ready {
        url: String,
        text: String,
    },
    Failed {
        url: String,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    next_request_id: RequestId,
    proposal: ProposalState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let trimmed = self.input.trim();
        let (phase, url, proposal_text) = match &self.proposal {
            ProposalState::Idle => (ProposalPhase::Idle, None, None),
            ProposalState::Pending { url, .. } => {
                (ProposalPhase::Pending, Some(url.clone()), None)
            }
            ProposalState::Ready { url, text } => {
                (ProposalPhase::Ready, Some(url.clone()), Some(text.clone()))
            }
            ProposalState::Failed { url, text } => {
                (ProposalPhase::Failed, Some(url.clone()), Some(text.clone()))
            }
        };
        AppViewModel {
            phase,
            url,
            proposal_text,
            can_submit: !trimmed.is_empty(),
            input_is_well_formed: Url::parse(trimmed).is_ok(),
            dirty: self.dirty,
        }
    }

    pub fn proposal(&self) -> &ProposalState {
        &self.proposal
    }

    /// Returns whether a re-render is due, resetting the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.mark_dirty();
    }

    pub(crate) fn trimmed_input(&self) -> &str {
        self.input.trim()
    }

    /// Supersedes any prior result and enters `Pending` under a fresh id.
    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.proposal = ProposalState::Pending { request_id, url };
        self.mark_dirty();
        request_id
    }

    /// Settles the pending request, if this completion is for it.
    ///
    /// Completions for superseded requests, or arriving after the state has
    /// already settled, are dropped (last-submit-wins).
    pub(crate) fn apply_completion(&mut self, request_id: RequestId, outcome: GenerationOutcome) {
        let ProposalState::Pending {
            request_id: pending,
            url,
        } = &self.proposal
        else {
            return;
        };
        if *pending != request_id {
            return;
        }
        let url = url.clone();
        self.proposal = match outcome {
            GenerationOutcome::Success(text) => ProposalState::Ready { url, text },
            GenerationOutcome::Failure => ProposalState::Failed {
                url,
                text: FALLBACK_TEXT.to_string(),
            },
        };
        self.mark_dirty();
    }

    /// Discards the session result; the typed input is kept.
    pub(crate) fn close_modal(&mut self) {
        if self.proposal != ProposalState::Idle {
            self.proposal = ProposalState::Idle;
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
