//! Path management for MediCare configuration files.
//!
//! ```text
//! ~/.config/medicare/          # Config directory (platform dependent)
//! └── config.toml              # Application configuration
//! ```

use std::path::PathBuf;

use medicare_core::error::{MedicareError, Result};

const APP_DIR: &str = "medicare";
const CONFIG_FILE: &str = "config.toml";

pub struct MedicarePaths;

impl MedicarePaths {
    /// Returns the MediCare configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| MedicareError::config("Cannot find configuration directory"))
    }

    /// Returns the default `config.toml` location.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
