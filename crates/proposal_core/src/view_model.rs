/// Coarse phase of the proposal flow, as rendered by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProposalPhase {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: ProposalPhase,
    /// URL of the submission the current phase belongs to.
    pub url: Option<String>,
    /// Displayable text; present once the flow has settled (generated
    /// proposal or fallback message).
    pub proposal_text: Option<String>,
    /// Trimmed input is non-empty.
    pub can_submit: bool,
    /// Advisory hint that the input parses as a URL. Never blocks submission;
    /// malformed input still goes to the generation call.
    pub input_is_well_formed: bool,
    pub dirty: bool,
}
