// src/config/mod.rs
// All values load from the environment (.env supported), with sane defaults.
// The config is built once in main() and passed down; nothing re-reads the
// environment per request.

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // ── OpenAI Configuration
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub model: String,
    pub max_output_tokens: usize,
    pub temperature: f32,
    pub openai_timeout: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,

    // ── CORS Settings
    pub cors_origins: String,

    // ── Logging Configuration
    pub log_level: String,
}

// Handles values with trailing comments and stray whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            openai_base_url: env_var_or(
                "OPENAI_BASE_URL",
                "https://api.openai.com/v1".to_string(),
            ),
            model: env_var_or("REPORTCARD_MODEL", "gpt-4".to_string()),
            max_output_tokens: env_var_or("REPORTCARD_MAX_OUTPUT_TOKENS", 1000),
            temperature: env_var_or("REPORTCARD_TEMPERATURE", 0.7),
            openai_timeout: env_var_or("REPORTCARD_OPENAI_TIMEOUT", 45),
            host: env_var_or("REPORTCARD_HOST", "0.0.0.0".to_string()),
            port: env_var_or("REPORTCARD_PORT", 8000),
            cors_origins: env_var_or(
                "CORS_ORIGINS",
                "http://localhost:3000,http://localhost:5173".to_string(),
            ),
            log_level: env_var_or("REPORTCARD_LOG_LEVEL", "info".to_string()),
        }
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Comma-separated CORS allow-list, split and trimmed
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}
