//! Location of the files the game keeps between runs.

use crate::core::constants::APP_NAME;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Where the game's files belong on this platform.
///
/// Falls back to the current directory when no home directory can be
/// determined. Nothing is created.
pub fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("", "", APP_NAME) {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from("."),
    }
}

/// Create `dir` and its parents if needed.
pub fn ensure_dir(dir: PathBuf) -> io::Result<PathBuf> {
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Platform data directory for the game, created if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    ensure_dir(default_data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_dirs::{unique_dir, unique_path};

    #[test]
    fn test_default_data_dir_names_the_game() {
        let dir = default_data_dir();
        assert!(dir.to_string_lossy().contains(APP_NAME) || dir == PathBuf::from("."));
        assert_eq!(dir, default_data_dir());
    }

    #[test]
    fn test_ensure_dir_creates_nested() {
        let root = unique_path("persistence");
        let nested = root.join("a").join("b");

        let dir = ensure_dir(nested.clone()).unwrap();
        assert_eq!(dir, nested);
        assert!(dir.is_dir());

        // Already present is fine
        assert!(ensure_dir(nested).is_ok());

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let root = unique_dir("persistence");
        let file = root.join("taken");
        fs::write(&file, "x").unwrap();

        assert!(ensure_dir(file).is_err());

        fs::remove_dir_all(&root).ok();
    }
}
