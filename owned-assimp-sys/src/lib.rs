//! Low-level FFI bindings for the Assimp 3D asset import library
//!
//! Hand-written `#[repr(C)]` mirrors of the native structs this workspace reads,
//! the C API functions it calls, and the enum values it interprets. For the
//! safe owned-copy API, use the `owned-assimp` crate instead.
//!
//! Every native enum is exposed as an integer alias plus constants so a value
//! outside the known range can be read without undefined behavior.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

pub mod constants;
pub mod functions;
pub mod scene;
pub mod types;

pub use constants::*;
pub use functions::*;
pub use scene::*;
pub use types::*;

pub use aiImportFile as import_file;
pub use aiReleaseImport as release_import;

/// Version information for this crate
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

mod test;
