use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
path = "popis.json"

[window]
title = "Popis"

[logging]
level = "info"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Popis".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded document is covered by tests.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Config {
            dataset: DatasetConfig {
                path: PathBuf::from("popis.json"),
            },
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "popis", "popis")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).context("failed to parse config")
}

/// Reads `config_path`, falling back to the embedded default when it does not exist.
pub fn load_config_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config: {}", config_path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config: {}", config_path.display()))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&default_config_path()?)
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("popis-{prefix}-{nanos}"))
    }

    #[test]
    fn embedded_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).expect("default config should parse");

        assert_eq!(config.dataset.path, PathBuf::from("popis.json"));
        assert_eq!(config.window.title, "Popis");
        assert_eq!(config.logging.tracing_level(), tracing::Level::INFO);
        assert_eq!(Config::default(), config);
    }

    #[test]
    fn optional_sections_fall_back_to_defaults() {
        let config = parse_config("[dataset]\npath = \"data/catalog.csv\"\n")
            .expect("minimal config should parse");

        assert_eq!(config.dataset.path, PathBuf::from("data/catalog.csv"));
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn unknown_log_level_means_info() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(logging.tracing_level(), tracing::Level::INFO);

        let logging = LoggingConfig {
            level: "debug".to_string(),
        };
        assert_eq!(logging.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn missing_config_file_uses_default() {
        let temp_dir = unique_test_dir("missing-config");

        let config =
            load_config_from(&temp_dir.join("config.toml")).expect("missing file is not an error");

        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_config_file_is_an_error() {
        let temp_dir = unique_test_dir("invalid-config");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let config_path = temp_dir.join("config.toml");
        fs::write(&config_path, "[dataset]\n").expect("should write config fixture");

        let result = load_config_from(&config_path);

        assert!(result.is_err(), "dataset.path is required");

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn ensure_webview_data_dir_creates_webview2_subdir() {
        let temp_dir = unique_test_dir("webview-data-dir");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");

        let webview_dir =
            ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

        assert_eq!(webview_dir, temp_dir.join("webview2"));
        assert!(webview_dir.is_dir(), "webview2 directory should exist");

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
