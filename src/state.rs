use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::TranslateError;
use crate::llm::{StatelessLLMFactory, StatelessLLMInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    llm_source: LLMSource,
}

/// Where the translate route gets its provider from
#[derive(Clone)]
enum LLMSource {
    /// Built per request from the current config, so a missing key is caught at call time
    Configured(reqwest::Client),
    Fixed(Arc<dyn StatelessLLMInterface>),
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.llm.timeout)
            .build()?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            llm_source: LLMSource::Configured(client),
        })
    }

    /// State that always uses the given provider, regardless of credentials
    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            llm_source: LLMSource::Fixed(llm),
        }
    }

    /// Current configuration. In development mode the environment and
    /// `.env` are re-read first, so edits apply without a restart.
    pub async fn current_config(&self) -> Config {
        let snapshot = self.config.read().await.clone();
        if !snapshot.is_development() {
            return snapshot;
        }

        match reload_config() {
            Ok(fresh) => {
                debug!("Reloaded configuration from environment");
                *self.config.write().await = fresh.clone();
                fresh
            }
            Err(e) => {
                warn!("Keeping previous configuration, reload failed: {:#}", e);
                snapshot
            }
        }
    }

    pub async fn llm(&self) -> Result<Arc<dyn StatelessLLMInterface>, TranslateError> {
        match &self.llm_source {
            LLMSource::Fixed(llm) => Ok(llm.clone()),
            LLMSource::Configured(client) => {
                let config = self.current_config().await;
                StatelessLLMFactory::create_llm(client, &config.llm)
            }
        }
    }
}

/// Re-read configuration with `.env` values taking precedence over the
/// process environment. The `.env` file is parsed into a map and never
/// written back with `set_var`.
fn reload_config() -> anyhow::Result<Config> {
    let dotenv: HashMap<String, String> = dotenvy::dotenv_iter()
        .map(|iter| iter.filter_map(Result::ok).collect())
        .unwrap_or_default();

    Config::from_lookup(|key| {
        dotenv
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
    })
}
