//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `config.toml` and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use medicare_core::config::AppConfig;
use medicare_core::error::{MedicareError, Result};
use tracing::{debug, info};

use crate::paths::MedicarePaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file is not an error: defaults are used. A file that exists but
/// cannot be parsed is reported.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Uses the platform default location.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(MedicarePaths::config_file()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| MedicareError::internal(format!("config lock poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_config(&self.path)?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| MedicareError::internal(format!("config lock poisoned: {}", e)))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            debug!("[Config] {} not found, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        info!("[Config] Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_loads_and_caches_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "login_delay_ms = 0\nlog_level = \"debug\"").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().unwrap();
        assert_eq!(config.login_delay_ms, 0);
        assert_eq!(config.log_level, "debug");

        std::fs::remove_file(&path).unwrap();
        assert_eq!(service.get_config().unwrap().log_level, "debug");

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "login_delay_ms = \"soon\"").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(matches!(err, MedicareError::Serialization { .. }));
    }
}
