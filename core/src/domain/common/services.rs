use std::{sync::Arc, time::Duration};

use crate::domain::{
    common::{GenerationParams, LLMConfig},
    food_analysis::ports::LLMClient,
};

/// Process-wide service handle.
///
/// Built once at startup and shared read-only between requests. The model
/// client is optional: when no credential was configured it stays `None`.
#[derive(Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Option<Arc<LLM>>,
    pub(crate) provider_name: String,
    pub(crate) generation: GenerationParams,
    pub(crate) timeout: Duration,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: Option<LLM>, config: &LLMConfig) -> Self {
        Self {
            llm_client: llm_client.map(Arc::new),
            provider_name: config.provider_name.clone(),
            generation: config.generation,
            timeout: config.timeout,
        }
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn is_llm_configured(&self) -> bool {
        self.llm_client.is_some()
    }
}
