use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_PROVIDER_NAME: &str = "Gemini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct FoodLensConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` leaves the model client unconfigured; every analysis then fails
    /// with `CoreError::ServiceUnavailable`.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub provider_name: String,
    pub timeout: Duration,
    pub generation: GenerationParams,
}

/// Sampling parameters sent with every generation request.
///
/// The defaults keep model output short and close to deterministic so the
/// JSON report is reproducible across calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 0.8,
            max_output_tokens: 512,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            timeout: DEFAULT_LLM_TIMEOUT,
            generation: GenerationParams::default(),
        }
    }
}

impl LLMConfig {
    /// Returns the API key when one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_counts_as_missing() {
        let config = LLMConfig {
            gemini_api_key: Some("   ".to_string()),
            ..LLMConfig::default()
        };

        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn api_key_is_trimmed() {
        let config = LLMConfig {
            gemini_api_key: Some(" secret\n".to_string()),
            ..LLMConfig::default()
        };

        assert_eq!(config.api_key(), Some("secret"));
    }
}
