use crate::{ProviderError, TextGenerator};
use async_trait::async_trait;

/// Local generator that answers without a model behind it.
#[derive(Debug, Default, Clone)]
pub struct EchoGenerator;

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, text: &str) -> Result<String, ProviderError> {
        Ok(format!("Response for [{}]", text))
    }
}
