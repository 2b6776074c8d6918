use std::sync::Once;

use proposal_core::{
    update, AppState, Effect, GenerationOutcome, Msg, ProposalPhase, ProposalState, FALLBACK_TEXT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(proposal_logging::initialize_for_tests);
}

fn submit(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(url.to_string()));
    update(state, Msg::ProposalRequested)
}

fn complete(state: AppState, request_id: u64, outcome: GenerationOutcome) -> AppState {
    let (state, effects) = update(
        state,
        Msg::GenerationCompleted {
            request_id,
            outcome,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn submission_enters_pending_with_one_effect() {
    init_logging();
    let state = AppState::new();
    let (mut state, effects) = submit(state, "  https://example.com ");

    assert_eq!(
        effects,
        vec![Effect::RequestProposal {
            request_id: 1,
            url: "https://example.com".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, ProposalPhase::Pending);
    assert_eq!(view.url.as_deref(), Some("https://example.com"));
    assert_eq!(view.proposal_text, None);
    assert!(state.consume_dirty());
}

#[test]
fn success_stores_text_verbatim() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://example.com");

    let text = "Gap: your organic reach is underperforming.";
    let state = complete(state, 1, GenerationOutcome::Success(text.to_string()));

    assert_eq!(
        state.proposal(),
        &ProposalState::Ready {
            url: "https://example.com".to_string(),
            text: text.to_string(),
        }
    );
    assert_eq!(state.view().proposal_text.as_deref(), Some(text));
}

#[test]
fn failure_substitutes_fallback_text() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://example.com");

    let state = complete(state, 1, GenerationOutcome::Failure);

    let view = state.view();
    assert_eq!(view.phase, ProposalPhase::Failed);
    assert_eq!(view.proposal_text.as_deref(), Some(FALLBACK_TEXT));
}

#[test]
fn modal_close_discards_result_and_keeps_input() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://example.com");
    let state = complete(state, 1, GenerationOutcome::Success("plan".to_string()));

    let (state, effects) = update(state, Msg::ModalClosed);
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.phase, ProposalPhase::Idle);
    assert_eq!(view.proposal_text, None);
    // Input survives so the user can re-open and re-submit.
    assert!(view.can_submit);
}

#[test]
fn resubmission_reenters_pending_from_settled_state() {
    init_logging();
    let state = AppState::new();
    let (state, _) = submit(state, "https://example.com");
    let state = complete(state, 1, GenerationOutcome::Failure);

    let (state, effects) = submit(state, "https://example.com");
    assert_eq!(
        effects,
        vec![Effect::RequestProposal {
            request_id: 2,
            url: "https://example.com".to_string(),
        }]
    );
    assert_eq!(state.view().phase, ProposalPhase::Pending);
    assert_eq!(state.view().proposal_text, None);
}

#[test]
fn sequential_submissions_behave_identically() {
    init_logging();
    let mut state = AppState::new();
    for expected_id in 1..=2u64 {
        let (next, effects) = submit(state, "https://example.com");
        assert_eq!(effects.len(), 1);
        let next = complete(
            next,
            expected_id,
            GenerationOutcome::Success("same plan".to_string()),
        );
        assert_eq!(next.view().phase, ProposalPhase::Ready);
        assert_eq!(next.view().proposal_text.as_deref(), Some("same plan"));
        state = next;
    }
}
