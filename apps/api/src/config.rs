use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_COMPLETION_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Where resume uploads are spooled while their text is extracted.
    pub upload_dir: PathBuf,
    /// Fonts and logo used by the PDF form.
    pub assets_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: upload_dir(is_serverless()),
            assets_dir: path_env("ASSETS_DIR", "assets"),
            public_dir: path_env("PUBLIC_DIR", "public"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn path_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Serverless hosts only allow writes under /tmp.
fn is_serverless() -> bool {
    ["SERVERLESS", "VERCEL"]
        .iter()
        .any(|key| std::env::var(key).map(|v| !v.is_empty()).unwrap_or(false))
}

fn upload_dir(serverless: bool) -> PathBuf {
    if serverless {
        PathBuf::from("/tmp/uploads")
    } else {
        PathBuf::from("uploads")
    }
}
