use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Model used for single-turn text generation.
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";

/// Email reported in every success envelope.
const DEFAULT_OFFICIAL_EMAIL: &str = "himani0436.be23@chitkara.edu.in";

#[derive(Debug, Clone, Deserialize)]
pub struct BfhlConfig {
    pub common: core_config::Config,
    pub service: ServiceSettings,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub official_email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

impl BfhlConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(BfhlConfig {
            common: common_config,
            service: ServiceSettings {
                official_email: get_env("OFFICIAL_EMAIL", Some(DEFAULT_OFFICIAL_EMAIL), is_prod)?,
            },
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
                model: get_env("GEMINI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
