use std::time::Duration;

use proposal_logging::flow_debug;
use serde::{Deserialize, Serialize};

use crate::prompt::build_prompt;
use crate::{FailureKind, GenerationError, Proposal, RequestId};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub temperature: f64,
    pub top_p: f64,
    pub connect_timeout: Duration,
    /// Upper bound on one generation call. The coordinator itself never times
    /// out, so this is the only latency bound in the flow.
    pub request_timeout: Duration,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            temperature: 0.7,
            top_p: 0.95,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl GeneratorSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Reads the API key from `GEMINI_API_KEY`, falling back to `API_KEY`.
pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|key| !key.trim().is_empty()))
}

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        request_id: RequestId,
        website_url: &str,
    ) -> Result<Proposal, GenerationError>;
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    settings: GeneratorSettings,
}

impl GeminiGenerator {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GenerationError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| GenerationError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait::async_trait]
impl Generator for GeminiGenerator {
    async fn generate(
        &self,
        request_id: RequestId,
        website_url: &str,
    ) -> Result<Proposal, GenerationError> {
        let client = self.build_client()?;
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(website_url),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_p: self.settings.top_p,
            },
        };

        flow_debug!(
            "generate request_id={} model={} url={}",
            request_id,
            self.settings.model,
            website_url
        );

        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(GenerationError::new(FailureKind::Quota, status.to_string()));
        }
        if !status.is_success() {
            return Err(GenerationError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                GenerationError::new(FailureKind::MalformedResponse, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })?;

        let text = payload.candidate_text();
        if text.is_empty() {
            return Err(GenerationError::new(
                FailureKind::EmptyResponse,
                "no candidate text in response",
            ));
        }

        Ok(Proposal {
            text,
            model: self.settings.model.clone(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        return GenerationError::new(FailureKind::Timeout, err.to_string());
    }
    GenerationError::new(FailureKind::Network, err.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, trimmed.
    fn candidate_text(&self) -> String {
        let Some(content) = self
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
        else {
            return String::new();
        };
        content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }
}
