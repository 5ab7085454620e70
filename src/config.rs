use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable holding the database connection string.
///
/// When set (and non-empty) it takes precedence over `[db].url`.
pub const DATABASE_URL_ENV: &str = "FNDLWR_URL";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub db: DbConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    #[serde(default = "default_db_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_url() -> String {
    "sqlite:./data/fndlwr.sqlite".to_string()
}
fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Directory served as the static fallback (`/lawyer-images/*`,
    /// `/default-lawyer-image.jpg`).
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}
fn default_public_dir() -> PathBuf {
    PathBuf::from("./public")
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Rows fetched per suggestion query. Each row yields a name and a
    /// specialty, so at most `2 * max_rows` candidates precede dedup.
    #[serde(default = "default_max_rows")]
    pub max_rows: i64,
    /// Callers (page script, CLI) withhold lookups below this many characters.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
            min_chars: default_min_chars(),
        }
    }
}

fn default_max_rows() -> i64 {
    5
}
fn default_min_chars() -> usize {
    2
}

impl Config {
    /// Applies environment overrides on top of file or default values.
    fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.db.url = url;
            }
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.db.url.trim().is_empty() {
            anyhow::bail!("db.url must not be empty");
        }
        if self.db.max_connections == 0 {
            anyhow::bail!("db.max_connections must be >= 1");
        }
        if self.suggestions.max_rows < 1 {
            anyhow::bail!("suggestions.max_rows must be >= 1");
        }
        Ok(())
    }
}

/// Parses configuration text without touching the environment.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from `path`, falling back to defaults when the file
/// does not exist, then applies `FNDLWR_URL`.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str::<Config>(&content).with_context(|| "Failed to parse config file")?
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Config::default()
    };

    let config = config.apply_env();
    config.validate()?;
    Ok(config)
}
