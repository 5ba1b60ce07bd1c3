//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line description used in the startup log.
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        crate::core::constants::APP_NAME,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
