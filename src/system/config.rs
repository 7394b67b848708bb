// src/system/config.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, DEFAULT_READ_CHUNK_SIZE, DEFAULT_SHELL};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};
use thiserror::Error;

lazy_static! {
    static ref CONFIG_DIR: Mutex<Option<PathBuf>> = Mutex::new(None);
}

/// Errors raised while locating, reading or validating `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no config directory.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config file exists but could not be read.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML or has unknown keys.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlParse {
        /// The file being parsed.
        path: PathBuf,
        /// The deserializer's error.
        #[source]
        source: toml::de::Error,
    },
    /// `~` or a `$VAR` in the shell path could not be expanded.
    #[error("Could not expand shell path '{path}': {message}")]
    ShellExpansion {
        /// The shell path as written.
        path: String,
        /// Why expansion failed.
        message: String,
    },
    /// `read_chunk_size` is zero.
    #[error("'read_chunk_size' must be greater than zero.")]
    ZeroChunkSize,
}

/// Settings that decide how command lines are run.
///
/// ```toml
/// shell = "~/bin/dash"
/// read_chunk_size = 8192
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// The shell invoked as `<shell> -c <command line>`.
    pub shell: PathBuf,
    /// Maximum number of bytes requested per read while capturing output.
    pub read_chunk_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

/// Returns the shellrun configuration directory (`~/.config/shellrun` on Linux).
///
/// The lookup is memoized; the directory is not created.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let mut cached = CONFIG_DIR.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(path) = &*cached {
        return Ok(path.clone());
    }

    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join(CONFIG_DIR_NAME);
    *cached = Some(config_dir.clone());
    Ok(config_dir)
}

/// Returns the path of the user's `config.toml`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Loads the user's configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    load_config_from(&get_config_path()?)
}

/// Loads configuration from `path`, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        log::debug!("No config at '{}', using defaults.", path.display());
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ShellConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from '{}': {:?}", path.display(), config);
    config.validated()
}

impl ShellConfig {
    /// Expands `~` and environment variables in the shell path and checks the
    /// chunk size.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.read_chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        self.shell = expand_shell_path(&self.shell)?;
        Ok(self)
    }
}

fn expand_shell_path(shell: &Path) -> Result<PathBuf, ConfigError> {
    let raw = shell.to_string_lossy();
    let expanded = shellexpand::full(&raw).map_err(|e| ConfigError::ShellExpansion {
        path: raw.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.shell, PathBuf::from("/bin/sh"));
        assert_eq!(config.read_chunk_size, 4096);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("read_chunk_size = 16\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.read_chunk_size, 16);
        assert_eq!(config.shell, PathBuf::from(DEFAULT_SHELL));
    }

    #[test]
    fn test_full_file() {
        let file = write_config("shell = \"/usr/bin/env\"\nread_chunk_size = 1\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.shell, PathBuf::from("/usr/bin/env"));
        assert_eq!(config.read_chunk_size, 1);
    }

    #[test]
    fn test_zero_chunk_size_is_rejected() {
        let file = write_config("read_chunk_size = 0\n");
        let result = load_config_from(file.path());
        assert!(matches!(result, Err(ConfigError::ZeroChunkSize)));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let file = write_config("shel = \"/bin/bash\"\n");
        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_shell_path_expands_home() {
        let home = dirs::home_dir().unwrap();
        let file = write_config("shell = \"~/bin/mysh\"\n");
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.shell, home.join("bin/mysh"));
    }

    #[test]
    fn test_undefined_variable_in_shell_path_fails() {
        let config = ShellConfig {
            shell: PathBuf::from("$SHELLRUN_TEST_SURELY_UNDEFINED_VAR/sh"),
            ..ShellConfig::default()
        };
        assert!(matches!(
            config.validated(),
            Err(ConfigError::ShellExpansion { .. })
        ));
    }

    #[test]
    fn test_config_path_is_memoized() {
        let first = get_config_path();
        let second = get_config_path();
        if let (Ok(first), Ok(second)) = (first, second) {
            assert_eq!(first, second);
            assert!(first.ends_with("shellrun/config.toml"));
        }
    }
}
