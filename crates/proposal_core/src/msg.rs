use crate::{GenerationOutcome, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User requested a proposal for the current URL input.
    ProposalRequested,
    /// Engine completion for a generation request.
    GenerationCompleted {
        request_id: RequestId,
        outcome: GenerationOutcome,
    },
    /// User dismissed the proposal view; its result is discarded.
    ModalClosed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
