//! Helpers shared by examples.

use std::path::PathBuf;

use owned_assimp::Logger;

#[allow(dead_code)]
/// Model path from the first CLI argument, else tests/models/<fallback>
pub fn model_path(fallback_name: &str) -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("owned-assimp/tests/models").join(fallback_name))
}

/// Route Rust and Assimp logs through env_logger (`RUST_LOG=debug` to see them).
///
/// Keep the returned logger alive for as long as Assimp output is wanted.
pub fn init_logging() -> Logger {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if std::env::var("OWNED_ASSIMP_VERBOSE").ok().as_deref() == Some("1") {
        owned_assimp::enable_verbose_logging(true);
    }
    Logger::with_log_crate()
}
