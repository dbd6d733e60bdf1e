use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

static DEFAULT_PROMPTS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "what if...",
        "I never told anyone but...",
        "at 3am I think about...",
        "unpopular opinion:",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
});

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MURMUR_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.murmur/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: MURMUR_CONFIG environment variable
    if let Ok(env_path) = std::env::var("MURMUR_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG config directory (recommended default)
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("murmur").join("config.toml"));
    }

    // Priority 4: Fallback to ~/.murmur (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".murmur").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Simulated persistence latency for a post, in milliseconds.
    #[serde(default = "default_post_delay_ms")]
    pub post_delay_ms: u64,
    /// Writing prompts offered on the Write panel.
    #[serde(default = "default_prompts")]
    pub prompts: Vec<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            post_delay_ms: default_post_delay_ms(),
            prompts: default_prompts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Start the session with a handful of sample thoughts.
    #[serde(default = "default_true")]
    pub sample_thoughts: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sample_thoughts: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn post_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.compose.post_delay_ms)
    }
}

fn default_post_delay_ms() -> u64 {
    600
}

fn default_prompts() -> Vec<String> {
    DEFAULT_PROMPTS.clone()
}

fn default_true() -> bool {
    true
}
