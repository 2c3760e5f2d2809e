//! Server configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Model name -> model file path table loaded at startup
    #[serde(default = "default_models")]
    pub models: BTreeMap<String, PathBuf>,

    /// Model assumed when a request omits `model_name`
    #[serde(default = "default_model_name")]
    pub default_model: String,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub allow_any_origin: bool,
}

impl ServerConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::cli::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config: Self = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(listen) = &cli.listen {
            config.listen = listen.clone();
        }
        if let Some(port) = cli.port {
            config.port = port;
        }

        // Env override, primarily for containerized deployments
        if let Ok(v) = std::env::var("LANGID_ALLOW_ANY_ORIGIN") {
            config.allow_any_origin = v == "1" || v.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            models: default_models(),
            default_model: default_model_name(),
            allow_any_origin: default_true(),
        }
    }
}

fn default_listen() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_models() -> BTreeMap<String, PathBuf> {
    let mut models = BTreeMap::new();
    models.insert("lid.176.bin".to_string(), PathBuf::from("model/lid.176.bin"));
    models.insert("lid.176.ftz".to_string(), PathBuf::from("model/lid.176.ftz"));
    models
}

fn default_model_name() -> String {
    "lid.176.bin".to_string()
}

fn default_true() -> bool {
    true
}
