use tracing::{error, info};

use crate::{
    domain::common::{FoodLensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type FoodLensService = Service<GeminiLLMClient>;

/// Builds the process-wide service.
///
/// A missing API key is not an error: the service starts without a model
/// client and reports every analysis as unavailable.
pub fn create_service(config: FoodLensConfig) -> Result<FoodLensService, CoreError> {
    if config.llm.gemini_model.trim().is_empty() {
        return Err(CoreError::Configuration(
            "model name must not be empty".to_string(),
        ));
    }

    if config.llm.timeout.is_zero() {
        return Err(CoreError::Configuration(
            "model timeout must be greater than zero".to_string(),
        ));
    }

    let llm_client = GeminiLLMClient::from_config(&config.llm);

    match &llm_client {
        Some(client) => info!(
            provider = %config.llm.provider_name,
            model = %client.model_name(),
            "Model API key loaded successfully"
        ),
        None => error!(
            provider = %config.llm.provider_name,
            "GEMINI_API_KEY missing, analysis requests will be rejected"
        ),
    }

    Ok(Service::new(llm_client, &config.llm))
}
