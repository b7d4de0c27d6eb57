pub mod config;
pub mod plan;
pub mod system_deps;
pub mod util;

#[cfg(feature = "system")]
pub mod system;
