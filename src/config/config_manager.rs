use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, SESSION_FILE_NAME};
use crate::errors::{HrError, HrResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# hrdesk configuration

[api]
# Base URL of the HR backend, including the /api prefix.
# Can be overridden with the HRDESK_API_URL environment variable.
base_url = "http://localhost:5111/api"

# Request timeout in seconds. Calls are never retried.
timeout_secs = 30

[session]
# Where the login token is stored. Defaults to ~/.hrdesk/session.toml
# file = "/home/user/.hrdesk/session.toml"

[output]
# Coloured notices and status badges
color = true

# Directory where salary exports (Excel / PDF) are written
download_dir = "."
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_dir() -> PathBuf {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME)).unwrap_or_default()
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn load() -> HrResult<Config> {
        let mut config = Self::load_from(&Self::config_path())?;

        if let Ok(base_url) = env::var(API_URL_ENV) {
            if !base_url.trim().is_empty() {
                log::debug!("Using API base URL from {}", API_URL_ENV);
                config.api.base_url = base_url.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn load_from(path: &Path) -> HrResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| HrError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| HrError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config() -> HrResult<PathBuf> {
        Self::write_sample_config(&Self::config_dir())
    }

    pub fn write_sample_config(dir: &Path) -> HrResult<PathBuf> {
        let config_file_path = dir.join(CONFIG_FILE_NAME);
        if config_file_path.exists() {
            return Err(HrError::config_error(
                "Configuration file already exists",
                None,
                Some(&format!("Edit {} directly", config_file_path.display())),
            ));
        }

        fs::create_dir_all(dir)?;
        fs::write(&config_file_path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn session_path(config: &Config) -> PathBuf {
        config
            .session
            .file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join(SESSION_FILE_NAME))
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let base_url = config.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            errors.push(format!("api.base_url must start with http:// or https://: {}", base_url));
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.output.download_dir.trim().is_empty() {
            errors.push("output.download_dir must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5111/api");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn sample_config_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = ConfigManager::write_sample_config(dir.path()).unwrap();
        let config = ConfigManager::load_from(&path).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::write_sample_config(dir.path()).is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"https://hr.example.com/api\"\n").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.api.base_url, "https://hr.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.output.color);
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut config = Config::default();
        config.api.base_url = "localhost:5111".to_string();
        config.api.timeout_secs = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn session_path_honours_override() {
        let mut config = Config::default();
        config.session.file = Some("/tmp/hrdesk-session.toml".to_string());
        assert_eq!(ConfigManager::session_path(&config), PathBuf::from("/tmp/hrdesk-session.toml"));
    }
}
