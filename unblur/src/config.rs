use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub glm: GlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Configuration for the GLM vision/completion API.
#[derive(Debug, Clone)]
pub struct GlmConfig {
    /// Credential for the ZhipuAI open platform. When absent the provider
    /// constructs as unavailable and recognition endpoints return errors.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_GLM_BASE_URL: &str = "https://open.bigmodel.cn/api/paas/v4";
pub const DEFAULT_GLM_MODEL: &str = "glm-4.5v";

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 8000),
            },
            glm: GlmConfig {
                api_key: env::var("ZHIPUAI_API_KEY").ok(),
                base_url: env::var("ZHIPUAI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GLM_BASE_URL.to_string()),
                model: env::var("ZHIPUAI_MODEL").unwrap_or_else(|_| DEFAULT_GLM_MODEL.to_string()),
                timeout_secs: parse_env_or("ZHIPUAI_TIMEOUT_SECS", 120),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
