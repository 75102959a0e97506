//! Load — config loading from file and environment variables.

use std::fs;
use std::path::Path;

use super::model::AnalyzerConfig;
use crate::error::AnalyzerError;

const DEFAULT_CONFIG_FILE: &str = "analyzer.toml";

impl AnalyzerConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, AnalyzerError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AnalyzerConfig::load`], reading variables through `lookup`.
    pub fn load_with<F>(lookup: F) -> Result<Self, AnalyzerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = lookup("ANALYZER_CONFIG_FILE")
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            let mut config = Self::from_file(Path::new(&config_path))?;
            config.apply_env(&lookup);
            Ok(config)
        } else {
            tracing::debug!("Config file not found at {}, using environment variables", config_path);
            Ok(Self::from_env(&lookup))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, AnalyzerError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AnalyzerError::Config(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&contents)
            .map_err(|e| AnalyzerError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Defaults overridden by environment variables
    fn from_env<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env(lookup);
        config
    }

    /// Values that fail to parse are ignored.
    fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("ANALYZER_RESULT_PATH") {
            self.result_path = path.into();
        }
        if let Some(normalize) = lookup("ANALYZER_NORMALIZE_PATH")
            .and_then(|s| s.parse::<bool>().ok())
        {
            self.normalize_path = normalize;
        }
        if let Some(echo) = lookup("ANALYZER_ECHO_STDOUT")
            .and_then(|s| s.parse::<bool>().ok())
        {
            self.echo_stdout = echo;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.result_path.as_os_str().is_empty() {
            return Err("result_path must not be empty".to_string());
        }
        if self.result_path.is_dir() {
            return Err(format!(
                "result_path {} is a directory",
                self.result_path.display()
            ));
        }
        Ok(())
    }
}
