use std::future::Future;

use crate::domain::{
    common::{GenerationParams, entities::app_errors::CoreError},
    food_analysis::{
        entities::AnalysisResponse,
        value_objects::{AnalyzeFoodImageInput, ImageMediaType},
    },
};

/// LLM Client trait for calling multimodal AI models
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` together with the image and returns the model's raw text.
    ///
    /// Implementations must fail with `CoreError::EmptyResponse` when the
    /// model answers without any text.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        params: GenerationParams,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food analysis business logic
pub trait FoodAnalysisService: Send + Sync {
    /// Fails with `CoreError::ServiceUnavailable` when no model client is configured.
    fn ensure_configured(&self) -> Result<(), CoreError>;

    fn validate_media_type(&self, content_type: Option<&str>) -> Result<ImageMediaType, CoreError>;

    fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> impl Future<Output = Result<AnalysisResponse, CoreError>> + Send;
}
