// src/config/mod.rs
// All tunables load from the environment (with .env support); defaults cover local dev.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ClosetConfig {
    // ── Gemini Vision Configuration
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub vision_timeout: u64,

    // ── Database Configuration
    pub database_url: String,
    pub sqlite_max_connections: u32,
}

// Handles values with trailing comments and extra whitespace.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            clean_val.parse::<T>().unwrap_or(default)
        }
        Err(_) => default,
    }
}

impl ClosetConfig {
    pub fn from_env() -> Self {
        // Load from .env file first if it exists
        let _ = dotenvy::dotenv();

        Self {
            gemini_api_key: env_var_or("GEMINI_API_KEY", String::new()),
            gemini_base_url: env_var_or(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com".to_string(),
            ),
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-2.5-flash".to_string()),
            vision_timeout: env_var_or("CLOSET_VISION_TIMEOUT", 30),
            database_url: env_var_or("DATABASE_URL", "sqlite:./closet.db".to_string()),
            sqlite_max_connections: env_var_or("SQLITE_MAX_CONNECTIONS", 5),
        }
    }
}

pub static CONFIG: Lazy<ClosetConfig> = Lazy::new(ClosetConfig::from_env);
