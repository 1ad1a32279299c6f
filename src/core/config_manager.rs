// src/core/config_manager.rs
//! Process-wide configuration, loaded once at startup

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    pub templates_path: PathBuf,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    local: Option<EnvironmentConfig>,
    production: Option<EnvironmentConfig>,
}

impl ConfigManager {
    /// Load configuration from the process environment and the optional YAML file
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), config_path)
    }

    /// Load configuration with an explicit variable lookup
    pub fn from_lookup<F>(lookup: F, config_path: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Self::load_environment(&lookup, config_path)?;
        let service = Self::load_service(&lookup)?;
        let server = Self::load_server(&lookup)?;

        Ok(Self {
            environment,
            service,
            server,
        })
    }

    fn load_environment<F>(lookup: &F, config_path: Option<&Path>) -> Result<EnvironmentConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = lookup("ENVIRONMENT").unwrap_or_else(|| "local".to_string());
        info!("Loading environment configuration for: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let explicit_path = config_path
            .map(Path::to_path_buf)
            .or_else(|| lookup("PORTFOLIO_CONFIG").map(PathBuf::from));
        let file_path = explicit_path
            .clone()
            .unwrap_or_else(|| base_dir.join(DEFAULT_CONFIG_FILE));

        let config_file = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?;
            serde_yaml::from_str::<ConfigFile>(&content)
                .with_context(|| format!("Failed to parse {}", file_path.display()))?
        } else if explicit_path.is_some() {
            anyhow::bail!("Config file not found: {}", file_path.display());
        } else {
            ConfigFile::default()
        };

        let section = match env.as_str() {
            "production" => config_file.production,
            _ => config_file.local,
        };

        let environment = section.unwrap_or_else(|| EnvironmentConfig {
            templates_path: base_dir.join("templates"),
            output_path: std::env::temp_dir().join("portfolio-generator"),
        });

        Ok(EnvironmentConfig {
            templates_path: resolve_path(&base_dir, &environment.templates_path),
            output_path: resolve_path(&base_dir, &environment.output_path),
        })
    }

    fn load_service<F>(lookup: &F) -> Result<ServiceConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_api_url = lookup("GITHUB_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

        let github_token = lookup("GITHUB_TOKEN").filter(|token| !token.trim().is_empty());

        let timeout_seconds = match lookup("GITHUB_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("GITHUB_TIMEOUT_SECS must be a number, got '{}'", raw))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(ServiceConfig {
            github_api_url,
            github_token,
            timeout_seconds,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        })
    }

    fn load_server<F>(lookup: &F) -> Result<ServerSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("ROCKET_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("Port must be a valid port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(ServerSettings {
            address: lookup("ROCKET_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        use crate::core::FsOps;

        FsOps::ensure_dir_exists(&self.environment.output_path).await?;
        if !self.environment.templates_path.is_dir() {
            tracing::warn!(
                "Templates directory does not exist: {}",
                self.environment.templates_path.display()
            );
        }
        Ok(())
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
