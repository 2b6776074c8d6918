use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start exactly one generation call for an accepted submission.
    RequestProposal { request_id: RequestId, url: String },
}
