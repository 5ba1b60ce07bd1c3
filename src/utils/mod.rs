//! Utility modules: build info, logging, data directory.

pub mod build_info;
pub mod logging;
pub mod persistence;

#[cfg(test)]
pub(crate) mod test_dirs;
