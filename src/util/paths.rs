use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::RwLock;

/// Environment variable pointing at the config directory
pub const CONFIG_DIR_ENV_VAR: &str = "FSUTIL_CONFIG_DIR";

// Global config directory override (for --config flag and tests)
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Set config directory override (used by --config flag and tests)
pub fn set_config_dir_override(path: Option<PathBuf>) {
    let mut override_path = CONFIG_DIR_OVERRIDE
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *override_path = path;
}

/// Get current config directory override
pub fn get_config_dir_override() -> Option<PathBuf> {
    CONFIG_DIR_OVERRIDE
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Find config directory by searching in priority order:
/// 1. Override from --config flag or set_config_dir_override() (highest priority)
/// 2. Environment variable FSUTIL_CONFIG_DIR
/// 3. User config directory (`~/.config/fsutil/` on Unix, `%APPDATA%\fsutil\` on Windows)
/// 4. Current working directory (`./config/`)
/// 5. Executable directory (`<exe_dir>/config/`)
///
/// If no config directory is found, creates one in the user config directory.
/// The override is returned even when it does not exist yet, so `config init`
/// can create it.
pub fn find_config_directory() -> Result<PathBuf> {
    // Priority 1: Override from --config flag or tests
    if let Some(override_path) = get_config_dir_override() {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Ok(override_path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV_VAR) {
        let env_config = PathBuf::from(env_path);
        if env_config.exists() {
            tracing::debug!("Found config directory from {}: {:?}", CONFIG_DIR_ENV_VAR, env_config);
            return Ok(env_config);
        }
    }

    // Priority 3: User config directory (platform standard location)
    if let Ok(user_config) = get_user_config_dir() {
        if user_config.exists() {
            tracing::debug!("Found config directory at: {:?}", user_config);
            return Ok(user_config);
        }
    }

    // Priority 4: Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        let cwd_config = cwd.join("config");
        if cwd_config.exists() {
            tracing::debug!("Found config directory at: {:?}", cwd_config);
            return Ok(cwd_config);
        }
    }

    // Priority 5: Executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let exe_config = exe_dir.join("config");
            if exe_config.exists() {
                tracing::debug!("Found config directory at: {:?}", exe_config);
                return Ok(exe_config);
            }
        }
    }

    // Fallback: Create in user config directory
    let user_config = get_user_config_dir()?;
    std::fs::create_dir_all(&user_config).context("Failed to create user config directory")?;
    tracing::info!("Created config directory at: {:?}", user_config);
    Ok(user_config)
}

/// Get platform-specific user config directory
/// - Windows: `%APPDATA%\fsutil`
/// - Unix: `~/.config/fsutil`
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join("fsutil"))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join("settings.toml"))
}

/// Get absolute path to the logs directory
pub fn get_logs_dir() -> Result<PathBuf> {
    let config_dir = find_config_directory()?;
    Ok(config_dir.join(".logs"))
}
