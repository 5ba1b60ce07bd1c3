//! High score persistence.
//!
//! The record is a single non-negative integer stored as plain decimal text,
//! with no header or trailing newline.

use log::{debug, info, warn};
use std::fs;
use std::io;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of reading the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighScoreLoad {
    Loaded(u64),
    /// No usable record (missing, empty, unreadable or not a number).
    DefaultUsed,
}

impl HighScoreLoad {
    pub fn value(self) -> u64 {
        match self {
            Self::Loaded(value) => value,
            Self::DefaultUsed => 0,
        }
    }
}

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("failed to write high score to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parse the file contents. Surrounding whitespace is allowed.
///
/// Records too large for `u64` saturate, so no run can ever replace them.
pub fn parse_high_score(text: &str) -> Option<u64> {
    match text.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}

/// Reads and writes the record file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record. Any failure means "no prior record".
    pub fn load(&self) -> HighScoreLoad {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No high score file at {}", self.path.display());
                return HighScoreLoad::DefaultUsed;
            }
            Err(e) => {
                warn!("Could not read high score {}: {}", self.path.display(), e);
                return HighScoreLoad::DefaultUsed;
            }
        };

        match parse_high_score(&text) {
            Some(value) => {
                info!("Loaded high score {} from {}", value, self.path.display());
                HighScoreLoad::Loaded(value)
            }
            None => {
                warn!(
                    "High score file {} does not contain a number, starting from 0",
                    self.path.display()
                );
                HighScoreLoad::DefaultUsed
            }
        }
    }

    /// Overwrite the record with `value`.
    ///
    /// Writes a sibling temp file first and renames it into place so a crash
    /// mid-write leaves the previous record intact.
    pub fn save(&self, value: u64) -> Result<(), HighScoreError> {
        let tmp_path = self.path.with_extension("txt.tmp");
        let write = || -> io::Result<()> {
            fs::write(&tmp_path, value.to_string())?;
            fs::rename(&tmp_path, &self.path)
        };

        write().map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            HighScoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("Saved high score {} to {}", value, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::HIGH_SCORE_FILENAME;
    use crate::utils::test_dirs::{unique_dir, unique_path};

    fn test_store() -> HighScoreStore {
        HighScoreStore::new(unique_dir("highscore").join(HIGH_SCORE_FILENAME))
    }

    fn cleanup(store: &HighScoreStore) {
        if let Some(dir) = store.path().parent() {
            fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_high_score("42"), Some(42));
        assert_eq!(parse_high_score(" 7\n"), Some(7));
        assert_eq!(parse_high_score("0"), Some(0));
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("abc"), None);
        assert_eq!(parse_high_score("-3"), None);
        assert_eq!(parse_high_score("4.5"), None);
    }

    #[test]
    fn test_parse_large_records() {
        assert_eq!(parse_high_score("5000000000"), Some(5_000_000_000));
        assert_eq!(
            parse_high_score("18446744073709551615"),
            Some(u64::MAX)
        );
        // Past u64 the record saturates instead of being discarded
        assert_eq!(
            parse_high_score("99999999999999999999999"),
            Some(u64::MAX)
        );
        assert_eq!(parse_high_score("-99999999999999999999999"), None);
    }

    #[test]
    fn test_unreadable_path_defaults_to_zero() {
        let store = test_store();
        // A directory where the record file should be
        fs::create_dir_all(store.path()).unwrap();
        assert_eq!(store.load(), HighScoreLoad::DefaultUsed);
        cleanup(&store);
    }

    #[test]
    fn test_invalid_utf8_defaults_to_zero() {
        let store = test_store();
        fs::write(store.path(), [0xff, 0xfe, b'7']).unwrap();
        assert_eq!(store.load(), HighScoreLoad::DefaultUsed);
        cleanup(&store);
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let store = test_store();
        let load = store.load();
        assert_eq!(load, HighScoreLoad::DefaultUsed);
        assert_eq!(load.value(), 0);
        cleanup(&store);
    }

    #[test]
    fn test_garbage_defaults_to_zero() {
        let store = test_store();
        fs::write(store.path(), "not a score").unwrap();
        assert_eq!(store.load(), HighScoreLoad::DefaultUsed);
        cleanup(&store);
    }

    #[test]
    fn test_empty_file_defaults_to_zero() {
        let store = test_store();
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load(), HighScoreLoad::DefaultUsed);
        cleanup(&store);
    }

    #[test]
    fn test_save_writes_plain_decimal() {
        let store = test_store();
        store.save(17).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "17");
        cleanup(&store);
    }

    #[test]
    fn test_save_then_load() {
        let store = test_store();
        for value in [0, 1, 99, u64::MAX] {
            store.save(value).unwrap();
            assert_eq!(store.load(), HighScoreLoad::Loaded(value));
        }
        cleanup(&store);
    }

    #[test]
    fn test_save_overwrites() {
        let store = test_store();
        store.save(123456).unwrap();
        store.save(3).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "3");
        cleanup(&store);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let store = HighScoreStore::new(
            unique_path("highscore")
                .join("deeper")
                .join(HIGH_SCORE_FILENAME),
        );
        let err = store.save(5).unwrap_err();
        assert!(err.to_string().contains("failed to write high score"));
    }
}
