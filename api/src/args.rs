use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use foodlens_core::domain::common::{FoodLensConfig, GenerationParams, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodlens", version, about = "Food image analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta"
    )]
    pub gemini_base_url: String,

    /// Reported as `source` in responses and used in error messages.
    #[arg(long, env = "LLM_PROVIDER_NAME", default_value = "Gemini")]
    pub llm_provider_name: String,

    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub llm_timeout_secs: u64,

    #[arg(long, env = "LLM_TEMPERATURE", default_value_t = 0.2)]
    pub temperature: f32,

    #[arg(long, env = "LLM_TOP_P", default_value_t = 0.8)]
    pub top_p: f32,

    #[arg(long, env = "LLM_MAX_OUTPUT_TOKENS", default_value_t = 512)]
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<LlmArgs> for LLMConfig {
    fn from(args: LlmArgs) -> Self {
        Self {
            gemini_api_key: args.gemini_api_key,
            gemini_model: args.gemini_model,
            gemini_base_url: args.gemini_base_url,
            provider_name: args.llm_provider_name,
            timeout: Duration::from_secs(args.llm_timeout_secs),
            generation: GenerationParams {
                temperature: args.temperature,
                top_p: args.top_p,
                max_output_tokens: args.max_output_tokens,
            },
        }
    }
}

impl From<Args> for FoodLensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: args.llm.into(),
        }
    }
}
