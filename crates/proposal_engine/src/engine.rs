use std::sync::{mpsc, Arc};
use std::thread;

use proposal_logging::flow_warn;

use crate::generate::{GeminiGenerator, Generator, GeneratorSettings};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Generate { request_id: RequestId, url: String },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_generator(Arc::new(GeminiGenerator::new(settings)))
    }

    pub fn with_generator(generator: Arc<dyn Generator>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let generator = generator.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(generator.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn request(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    generator: &dyn Generator,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate { request_id, url } => {
            let result = generator.generate(request_id, &url).await;
            if let Err(err) = &result {
                flow_warn!("generation request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::GenerationCompleted { request_id, result });
        }
    }
}
