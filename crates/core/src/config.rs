use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Runtime settings for a fetch run. Built from command-line arguments;
/// there is no configuration file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Local models folder the catalog destinations are relative to
    pub root: PathBuf,

    /// HuggingFace token for gated repositories
    pub hf_token: Option<String>,

    /// Hub base URL
    pub endpoint: String,
}

pub fn default_root() -> PathBuf {
    PathBuf::from("./models")
}

pub fn default_endpoint() -> String {
    "https://huggingface.co".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            hf_token: None,
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    pub fn new(root: PathBuf, hf_token: Option<String>, endpoint: String) -> Self {
        Self {
            root,
            hf_token,
            endpoint,
        }
    }

    /// Fill in the token saved by `huggingface-cli login` when none was given.
    pub fn with_cached_token(mut self) -> Self {
        if self.hf_token.is_none() {
            self.hf_token = hf_hub::Cache::default().token();
        }
        self
    }

    /// The root has to exist up front; it is never created.
    pub fn ensure_root(&self) -> Result<&Path, ConfigError> {
        if self.root.is_dir() {
            Ok(&self.root)
        } else {
            Err(ConfigError::MissingRoot(self.root.clone()))
        }
    }

    /// Folder a catalog destination resolves to.
    pub fn destination_dir(&self, destination: &str) -> PathBuf {
        self.root.join(destination)
    }
}
