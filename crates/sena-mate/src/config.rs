use std::path::PathBuf;

use sena_common::openai::OpenAiClientConfig;

use crate::error::AppError;

pub const DEFAULT_CHAT_MODEL: &str = "openai/gpt-oss-20b";
pub const DEFAULT_PROMPT_PATH: &str = "prompts/prompt.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Model ID used for free-form questions.
    pub chat_model: String,
    pub prompt_path: PathBuf,
    /// When set, serve the HTTP API on this address instead of MCP over stdio.
    pub http_listen_addr: Option<String>,
    pub openai: OpenAiClientConfig,
}

impl Config {
    /// Load configuration from environment variables (a `.env` file is read
    /// beforehand by `main` if present).
    ///
    /// Required:
    /// - `HF_TOKEN`: token for the Hugging Face router
    ///
    /// Optional:
    /// - `CHAT_MODEL` (default: "openai/gpt-oss-20b")
    /// - `PROMPT_PATH` (default: "prompts/prompt.json")
    /// - `HTTP_LISTEN_ADDR` (e.g. "127.0.0.1:8000")
    /// - `OPENAI_*` client tuning, see [`OpenAiClientConfig::from_env`]
    pub fn from_env() -> Result<Self, AppError> {
        let openai = OpenAiClientConfig::from_env();
        if openai.api_key.is_none() {
            return Err(AppError::Config(
                "HF_TOKEN environment variable is required".to_string(),
            ));
        }

        let chat_model =
            std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        let prompt_path = std::env::var("PROMPT_PATH")
            .unwrap_or_else(|_| DEFAULT_PROMPT_PATH.to_string())
            .into();

        Ok(Self {
            chat_model,
            prompt_path,
            http_listen_addr: std::env::var("HTTP_LISTEN_ADDR").ok(),
            openai,
        })
    }
}
