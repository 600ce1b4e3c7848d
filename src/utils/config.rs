use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Config = Arc<ConfigInner>;

pub fn config(path: PathBuf) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let inner = (*config_store).clone();

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner)?);

    Ok(Arc::new(inner))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: FormDefaults,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Initial values of the cover letter form.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct FormDefaults {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub char_limit: u32,
    #[serde(default)]
    pub use_example: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_language() -> String {
    "ko".to_string()
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            language: default_language(),
            char_limit: 0,
            use_example: false,
        }
    }
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).unwrap() // should be okay
    }
}
