//! Configuration module
//!
//! Application configuration loaded from environment variables (with
//! `.env` support via dotenvy). Defaults mirror the development setup;
//! `validate()` is called during startup so misconfiguration fails fast.

use std::env;

use anyhow::{anyhow, Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_HF_API_BASE: &str = "https://router.huggingface.co/hf-inference/v1";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Root directory for stored uploads.
    pub storage_path: String,
    /// URL prefix under which stored files are served.
    pub storage_base_url: String,
    pub max_upload_size_bytes: usize,
    /// Chat-completion upstream. Without an API key the chat endpoint
    /// reports the upstream as unavailable instead of refusing to start.
    pub hf_api_key: Option<String>,
    pub hf_model: String,
    pub hf_api_base: String,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        // Load .env if present; real environment wins.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .context("DATABASE_URL environment variable is required")?;

        Ok(Config {
            server_port: env_parse("PORT", DEFAULT_PORT)?,
            environment: env_or("ENVIRONMENT", "development"),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                "http://localhost:5173,http://localhost:3000,http://localhost:5174",
            )),
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_CONNECTION_TIMEOUT_SECS)?,
            storage_path: env_or("STORAGE_PATH", "./uploads"),
            storage_base_url: env_or("STORAGE_BASE_URL", "/uploads"),
            max_upload_size_bytes: env_parse(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            )?,
            hf_api_key: env::var("HF_API_KEY").ok().filter(|k| !k.is_empty()),
            hf_model: env_or("HF_MODEL", ""),
            hf_api_base: env_or("HF_API_BASE", DEFAULT_HF_API_BASE),
        })
    }

    /// Validate configuration consistency. Called once at startup.
    pub fn validate(&self) -> Result<()> {
        if self.database_url.is_empty() {
            return Err(anyhow!("DATABASE_URL must not be empty"));
        }
        if self.db_max_connections == 0 {
            return Err(anyhow!("DB_MAX_CONNECTIONS must be greater than zero"));
        }
        if self.max_upload_size_bytes == 0 {
            return Err(anyhow!("MAX_UPLOAD_SIZE_BYTES must be greater than zero"));
        }
        if self.storage_path.is_empty() {
            return Err(anyhow!("STORAGE_PATH must not be empty"));
        }
        if self.hf_api_key.is_some() && self.hf_model.is_empty() {
            return Err(anyhow!("HF_MODEL is required when HF_API_KEY is set"));
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    parse_list(raw)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
