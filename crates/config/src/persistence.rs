//! Config file discovery, reading and writing.
//!
//! Files may be JSON5 (comments, trailing commas, unquoted keys) or plain
//! JSON; both are read with the JSON5 parser. Writing always produces
//! pretty-printed JSON, which is valid JSON5.
//!
//! Discovery looks in the working directory first, then in the user config
//! directory:
//!
//! 1. `./dragboard.json5`, `./dragboard.json`
//! 2. `~/.config/dragboard/config.json5`, `~/.config/dragboard/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// File names looked up in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["dragboard.json5", "dragboard.json"];

/// Directory under the platform config dir holding the user config.
const USER_CONFIG_DIR: &str = "dragboard";

/// File names looked up in the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Returns every location a config file may live at, highest priority first.
///
/// `local_dir` is usually the working directory and `config_dir` the
/// platform config directory (see [`dirs::config_dir`]).
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dragboard_config::persistence::candidate_paths;
///
/// let paths = candidate_paths(Path::new("."), Some(Path::new("/home/me/.config")));
/// assert_eq!(paths[0], Path::new("./dragboard.json5"));
/// assert_eq!(paths[3], Path::new("/home/me/.config/dragboard/config.json"));
/// ```
#[must_use]
pub fn candidate_paths(local_dir: &Path, config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Finds the first existing config file among [`candidate_paths`].
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
    candidate_paths(local_dir, config_dir)
        .into_iter()
        .find(|path| path.is_file())
}

/// Finds the config file for the current process.
///
/// Searches the working directory, then the user config directory.
/// Returns `None` when no file exists.
///
/// # Examples
///
/// ```no_run
/// use dragboard_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_error)
}
