use std::sync::Arc;
use std::time::{Duration, Instant};

use proposal_engine::{
    EngineEvent, EngineHandle, FailureKind, GenerationError, Generator, GeneratorSettings,
    Proposal, RequestId,
};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

struct StubGenerator {
    result: Result<Proposal, GenerationError>,
}

#[async_trait::async_trait]
impl Generator for StubGenerator {
    async fn generate(
        &self,
        _request_id: RequestId,
        _website_url: &str,
    ) -> Result<Proposal, GenerationError> {
        self.result.clone()
    }
}

fn wait_for_event(engine: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = engine.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no engine event within deadline");
        std::thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn engine_reports_successful_completion() {
    let engine = EngineHandle::with_generator(Arc::new(StubGenerator {
        result: Ok(Proposal {
            text: "plan".to_string(),
            model: "stub".to_string(),
        }),
    }));

    engine.request(7, "https://example.com");

    let EngineEvent::GenerationCompleted { request_id, result } = wait_for_event(&engine);
    assert_eq!(request_id, 7);
    assert_eq!(result.unwrap().text, "plan");
}

#[test]
fn engine_reports_failed_completion_with_error_detail() {
    let engine = EngineHandle::with_generator(Arc::new(StubGenerator {
        result: Err(GenerationError {
            kind: FailureKind::Quota,
            message: "429 Too Many Requests".to_string(),
        }),
    }));

    engine.request(8, "https://example.com");

    let EngineEvent::GenerationCompleted { request_id, result } = wait_for_event(&engine);
    assert_eq!(request_id, 8);
    assert_eq!(result.unwrap_err().kind, FailureKind::Quota);
}

#[test]
fn engine_drives_a_generation_call_end_to_end() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "Gap: no paid funnel." }] } }
                ]
            })))
            .mount(&server)
            .await;
        server
    });

    let settings = GeneratorSettings {
        base_url: server.uri(),
        model: "test-model".to_string(),
        api_key: "test-key".to_string(),
        ..GeneratorSettings::default()
    };
    let engine = EngineHandle::new(settings);
    engine.request(1, "https://example.com");

    let EngineEvent::GenerationCompleted { request_id, result } = wait_for_event(&engine);
    assert_eq!(request_id, 1);
    assert_eq!(result.unwrap().text, "Gap: no paid funnel.");
}
