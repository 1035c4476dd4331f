// Default library base: <user config dir>/push-sounds

use std::path::PathBuf;

pub const LIBRARY_DIR_NAME: &str = "push-sounds";

pub fn default_location() -> PathBuf {
    default_location_from(dirs::config_dir)
}

/// Resolve the default base using `config_dir` to find the OS config folder.
/// Falls back to the current directory when there isn't one.
pub fn default_location_from<F>(config_dir: F) -> PathBuf
where
    F: FnOnce() -> Option<PathBuf>,
{
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LIBRARY_DIR_NAME)
}
