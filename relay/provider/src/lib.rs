mod chat_completions;
mod echo;

pub use chat_completions::ChatCompletionsClient;
pub use echo::EchoGenerator;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Something that turns a prompt into generated text.
///
/// Implementations are shared between concurrent requests, so `generate`
/// takes `&self` and must not rely on per-call mutable state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, text: &str) -> Result<String, ProviderError>;
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Failed(String),

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("provider answered without any completion")]
    EmptyCompletion,
}
