use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use proposal_core::{update, AppState, AppViewModel, Msg, ProposalPhase};
use proposal_engine::{api_key_from_env, GeneratorSettings};
use proposal_logging::flow_info;

use crate::effects::EffectRunner;
use crate::logging::{initialize, LogDestination};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run() -> io::Result<()> {
    initialize(LogDestination::File);

    let Some(api_key) = api_key_from_env() else {
        eprintln!("No API key found. Set GEMINI_API_KEY (or API_KEY) and retry.");
        return Ok(());
    };

    let runner = EffectRunner::new(GeneratorSettings::with_api_key(api_key));
    let mut state = AppState::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("website url (blank to quit)> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        state = dispatch(state, Msg::InputChanged(line), &runner);
        state = dispatch(state, Msg::ProposalRequested, &runner);

        println!("Analyzing your digital presence...");
        state = pump_until_settled(state, &runner);

        if state.consume_dirty() {
            render(&state.view());
        }

        state = dispatch(state, Msg::ModalClosed, &runner);
        state.consume_dirty();
    }

    flow_info!("session ended");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn pump_until_settled(mut state: AppState, runner: &EffectRunner) -> AppState {
    while state.view().phase == ProposalPhase::Pending {
        let msgs = runner.poll();
        if msgs.is_empty() {
            thread::sleep(POLL_INTERVAL);
            continue;
        }
        for msg in msgs {
            state = dispatch(state, msg, runner);
        }
    }
    state
}

fn render(view: &AppViewModel) {
    let url = view.url.as_deref().unwrap_or("");
    match view.phase {
        ProposalPhase::Ready => {
            println!("\n--- Your Custom Growth Roadmap ({url}) ---\n");
        }
        ProposalPhase::Failed => {
            println!("\n--- Proposal ({url}) ---\n");
        }
        ProposalPhase::Idle | ProposalPhase::Pending => return,
    }
    if let Some(text) = view.proposal_text.as_deref() {
        println!("{text}\n");
    }
}
