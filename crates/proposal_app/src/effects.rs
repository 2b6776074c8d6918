use proposal_core::{Effect, GenerationOutcome, Msg};
use proposal_engine::{EngineEvent, EngineHandle, GeneratorSettings};
use proposal_logging::{flow_info, flow_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_engine(EngineHandle::new(settings))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestProposal { request_id, url } => {
                    flow_info!("RequestProposal request_id={} url={}", request_id, url);
                    self.engine.request(request_id, url);
                }
            }
        }
    }

    /// Drains settled engine events into coordinator messages.
    ///
    /// Error detail is logged here and collapsed to a displayable outcome;
    /// the core never sees the raw failure.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::GenerationCompleted { request_id, result } => {
                    let outcome = match result {
                        Ok(proposal) => {
                            flow_info!(
                                "generation completed request_id={} model={} chars={}",
                                request_id,
                                proposal.model,
                                proposal.text.len()
                            );
                            GenerationOutcome::Success(proposal.text)
                        }
                        Err(err) => {
                            flow_warn!("generation failed request_id={}: {}", request_id, err);
                            GenerationOutcome::Failure
                        }
                    };
                    msgs.push(Msg::GenerationCompleted {
                        request_id,
                        outcome,
                    });
                }
            }
        }
        msgs
    }
}
