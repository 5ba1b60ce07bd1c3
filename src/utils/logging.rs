//! Logger setup.
//!
//! The terminal is in raw mode with an alternate screen while the game runs,
//! so log records go to a file instead of stderr.

use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Install the global logger, appending to `path`.
///
/// If the file cannot be opened, records are discarded. Calling this twice
/// is harmless; the second call has no effect.
pub fn init(path: &Path, level: LevelFilter) {
    let target: Box<dyn io::Write + Send> =
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Box::new(file),
            Err(_) => Box::new(io::sink()),
        };

    let _ = Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .target(Target::Pipe(target))
        .try_init();
}
