//! Scratch directories for unit tests, unique per process and per call.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Path of a fresh directory under the system temp dir. Not created.
pub(crate) fn unique_path(label: &str) -> PathBuf {
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "flappy-{}-{}-{}",
        label,
        std::process::id(),
        test_id
    ))
}

/// Like [`unique_path`], but the directory exists on return.
pub(crate) fn unique_dir(label: &str) -> PathBuf {
    let dir = unique_path(label);
    fs::create_dir_all(&dir).unwrap();
    dir
}
