use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 4999;

/// Process configuration: listen port from `.env`, everything else from the
/// environment with `.env` as a fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub content_config_path: PathBuf,
    pub templates_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// False when no `.env` file was found; reported once logging is up.
    pub dotenv_found: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_dotenv_file(Path::new(".env"))
    }

    pub fn from_dotenv_file(path: &Path) -> Result<Self> {
        let dotenv = read_dotenv(path)?;
        let lookup = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .or_else(|| dotenv.as_ref().and_then(|vars| vars.get(key).cloned()))
                .filter(|v| !v.is_empty())
        };

        // The port is only ever taken from .env.
        let port = resolve_port(
            dotenv
                .as_ref()
                .and_then(|vars| vars.get("PORT"))
                .map(String::as_str),
        )?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            content_config_path: lookup("CONTENT_CONFIG")
                .unwrap_or_else(|| "content_config.yaml".to_string())
                .into(),
            templates_dir: lookup("TEMPLATES_DIR")
                .unwrap_or_else(|| "templates".to_string())
                .into(),
            assets_dir: lookup("ASSETS_DIR")
                .unwrap_or_else(|| "assets".to_string())
                .into(),
            dotenv_found: dotenv.is_some(),
        })
    }

    /// `RUST_LOG` may be a bare level (`debug`), applied to this crate and
    /// tower_http, or a full directive list (`folio=debug,hyper=warn`) used as is.
    pub fn log_filter(&self) -> String {
        if self.rust_log.contains('=') {
            self.rust_log.clone()
        } else {
            format!(
                "{}={level},tower_http={level}",
                env!("CARGO_PKG_NAME"),
                level = self.rust_log
            )
        }
    }
}

/// Reads a `.env` file into a map. `Ok(None)` when the file does not exist.
fn read_dotenv(path: &Path) -> Result<Option<HashMap<String, String>>> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {}", path.display()))
        }
    };

    let vars = iter
        .collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(vars))
}

/// Absent or empty falls back to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}

/// Where the resume content lives, read from `content_config.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    pub content_path: PathBuf,
    pub portrait_path: String,
    /// Keys this server does not interpret, kept so they show up in the
    /// startup log.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ContentConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content config {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Failed to parse content config {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
