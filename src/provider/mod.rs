use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::errors::ProviderFailure;
use crate::wire::REDACTED;

pub mod gemini;

/// Everything the provider needs for one structured-output call.
#[derive(Clone)]
pub struct ProviderRequest {
    pub model: String,
    pub prompt: String,
    pub schema: Value,
    pub temperature: f32,
    pub credential: String,
}

impl fmt::Debug for ProviderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRequest")
            .field("model", &self.model)
            .field("prompt", &self.prompt)
            .field("schema", &self.schema)
            .field("temperature", &self.temperature)
            .field("credential", &REDACTED)
            .finish()
    }
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Returns the raw text payload the model produced.
    async fn complete(&self, req: &ProviderRequest) -> Result<String, ProviderFailure>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(cfg: &Config) -> DynProvider {
    Box::new(gemini::Gemini::new(cfg.api_base.clone()))
}
