use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ProposalRequested => {
            let url = state.trimmed_input().to_owned();
            if url.is_empty() {
                // Nothing submitted; no transition, no effect.
                return (state, Vec::new());
            }
            let request_id = state.begin_request(url.clone());
            vec![Effect::RequestProposal { request_id, url }]
        }
        Msg::GenerationCompleted {
            request_id,
            outcome,
        } => {
            state.apply_completion(request_id, outcome);
            Vec::new()
        }
        Msg::ModalClosed => {
            state.close_modal();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
