use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// Origins allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
    "https://*.railway.app",
    "https://*.up.railway.app",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

/// Settings for the Groq (OpenAI-compatible) chat completion provider
#[derive(Debug, Clone, PartialEq)]
pub struct LLMConfig {
    /// Missing keys are tolerated at startup; the health check and the
    /// translate route report them instead.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source. `from_env` reads the
    /// process environment; the development reload layers `.env` on top.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var(&lookup, "PORT", 8000)?,
                environment: lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),
            },
            llm: LLMConfig {
                api_key: lookup("GROQ_API_KEY").filter(|key| !key.trim().is_empty()),
                api_url: lookup("GROQ_API_URL")
                    .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
                model: lookup("GROQ_MODEL").unwrap_or_else(|| DEFAULT_GROQ_MODEL.to_string()),
                temperature: parse_var(&lookup, "LLM_TEMPERATURE", 0.1)?,
                timeout: Duration::from_secs(parse_var(&lookup, "LLM_TIMEOUT_SECS", 30)?),
            },
            allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|| {
                    DEFAULT_ALLOWED_ORIGINS
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                }),
        })
    }

    /// Reload behaviour is only enabled when ENVIRONMENT is explicitly "development"
    pub fn is_development(&self) -> bool {
        self.server.environment.eq_ignore_ascii_case("development")
    }

    pub fn has_api_key(&self) -> bool {
        self.llm.api_key.is_some()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "production".to_string(),
            },
            llm: LLMConfig {
                api_key: None,
                api_url: DEFAULT_GROQ_API_URL.to_string(),
                model: DEFAULT_GROQ_MODEL.to_string(),
                temperature: 0.1,
                timeout: Duration::from_secs(30),
            },
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, value)),
        None => Ok(default),
    }
}

/// Split a comma separated origin list, dropping blanks and trailing slashes
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "ENVIRONMENT",
        "GROQ_API_KEY",
        "GROQ_API_URL",
        "GROQ_MODEL",
        "LLM_TEMPERATURE",
        "LLM_TIMEOUT_SECS",
        "CORS_ALLOWED_ORIGINS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config, Config::default());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, "production");
        assert_eq!(config.llm.model, "llama3-8b-8192");
        assert!((config.llm.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.llm.timeout, Duration::from_secs(30));
        assert!(!config.has_api_key());
        assert_eq!(config.allowed_origins.len(), 6);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "9090");
        std::env::set_var("ENVIRONMENT", "development");
        std::env::set_var("GROQ_API_KEY", "gsk-test");
        std::env::set_var("GROQ_MODEL", "llama-3.1-8b-instant");
        std::env::set_var("LLM_TIMEOUT_SECS", "5");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert!(config.is_development());
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk-test"));
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.timeout, Duration::from_secs(5));
        assert_eq!(config.allowed_origins, vec!["https://app.example.com"]);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        let err = result.expect_err("invalid port should fail");
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_api_key_is_missing() {
        clear_env();
        std::env::set_var("GROQ_API_KEY", "   ");

        let config = Config::from_env().expect("should load");
        clear_env();

        assert!(!config.has_api_key());
    }

    #[test]
    fn test_from_lookup_uses_given_source() {
        let values = [("PORT", "9100"), ("GROQ_API_KEY", "gsk-from-file")];
        let config = Config::from_lookup(|key| {
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .expect("should load");

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk-from-file"));
        assert_eq!(config.llm.model, "llama3-8b-8192");
    }

    // ==================== Environment Mode Tests ====================

    #[test]
    fn test_is_development_case_insensitive() {
        let mut config = Config::default();
        assert!(!config.is_development());

        config.server.environment = "Development".to_string();
        assert!(config.is_development());

        config.server.environment = "staging".to_string();
        assert!(!config.is_development());
    }

    // ==================== Origin Parsing Tests ====================

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" http://localhost:3000/ , ,https://*.railway.app");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://*.railway.app"]
        );
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("").is_empty());
    }
}
