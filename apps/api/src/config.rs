use anyhow::{bail, Context, Result};

pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "llama3-70b-8192";
pub const DEFAULT_QUESTION_COUNT: usize = 15;
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://localhost:5174,https://tech-interview-assistant.vercel.app";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub llm_api_key: String,
    pub llm_api_url: String,
    pub llm_model: String,
    pub question_count: usize,
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("llm_api_key", &"<redacted>")
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_model", &self.llm_model)
            .field("question_count", &self.question_count)
            .field("cors_origins", &self.cors_origins)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let question_count = std::env::var("QUESTION_COUNT")
            .unwrap_or_else(|_| DEFAULT_QUESTION_COUNT.to_string())
            .parse::<usize>()
            .context("QUESTION_COUNT must be a positive integer")?;
        if question_count == 0 {
            bail!("QUESTION_COUNT must be at least 1");
        }

        Ok(Config {
            llm_api_key: require_env("GROQ_API_KEY")?,
            llm_api_url: optional_env("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_model: optional_env("LLM_MODEL", DEFAULT_LLM_MODEL),
            question_count,
            cors_origins: parse_origins(&optional_env("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "4010".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Splits a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
