// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the compiled SPA output.
    pub static_dir: PathBuf,
    pub index_file: String,
    pub hero_image: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            index_file: "index.html".to_string(),
            hero_image: "secc.png".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the TOML file named by `DSS_CONFIG`
    /// (default `config.toml`), then apply environment overrides.
    /// A missing file is not an error, defaults apply.
    pub fn load() -> Result<Self> {
        let path = std::env::var("DSS_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"));

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(host) = std::env::var("DSS_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("DSS_PORT") {
            config.server.port = port.parse().context("DSS_PORT must be a port number")?;
        }
        if let Ok(dir) = std::env::var("DSS_STATIC_DIR") {
            config.content.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn index_path(&self) -> PathBuf {
        self.content.static_dir.join(&self.content.index_file)
    }

    pub fn hero_image_path(&self) -> PathBuf {
        self.content.static_dir.join(&self.content.hero_image)
    }
}
