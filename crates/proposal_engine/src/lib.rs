//! Proposal engine: generation-call execution and event plumbing.
mod engine;
mod generate;
mod prompt;
mod types;

pub use engine::EngineHandle;
pub use generate::{api_key_from_env, GeminiGenerator, Generator, GeneratorSettings};
pub use prompt::build_prompt;
pub use types::{EngineEvent, FailureKind, GenerationError, Proposal, RequestId};
