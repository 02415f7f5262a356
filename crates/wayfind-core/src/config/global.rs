//! Location of the user-level config file (`~/.config/wayfind/config.toml`)

use std::path::PathBuf;

use crate::config::types::CONFIG_FILE;
use crate::error::{Result, WayfindError};

const CONFIG_DIR: &str = "wayfind";
const CONFIG_DIR_ENV_VAR: &str = "WAYFIND_CONFIG_DIR";

/// Path of the default config file. It may not exist.
pub fn default_config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| WayfindError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}
