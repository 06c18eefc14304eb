//! Settings loaded from `lips.toml`
//!
//! ```toml
//! prompt = "Lips> "
//! grammar = "sexpr"
//! overflow = "wrap"
//! max_depth = 128
//! history_file = ".lips_history"
//! ```

use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::ast::Grammar;
use crate::interp::OverflowPolicy;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lips.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    pub grammar: Grammar,
    pub overflow: OverflowPolicy,
    pub max_depth: usize,
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Lips> ".to_string(),
            grammar: Grammar::default(),
            overflow: OverflowPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            history_file: None,
        }
    }
}

impl Config {
    /// Parse configuration text
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text)
            .into_diagnostic()
            .wrap_err("Invalid configuration")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read config file {}: {}", path.display(), e))?;
        let config = Self::from_toml(&text)
            .wrap_err_with(|| format!("in config file {}", path.display()))?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load `explicit` if given, else `lips.toml` when it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Config> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}
