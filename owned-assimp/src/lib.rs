//! # Owned Assimp
//!
//! Import 3D assets with Assimp and get back a scene made only of owned Rust
//! values.
//!
//! Each import copies the native scene into a [`Scene`] and releases the native
//! one before returning, on success and on failure alike. The copy has no
//! pointers into Assimp memory, can be sent across threads, compared with
//! `==`, and saved with [`persist`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use owned_assimp::{ImportBuilder, postprocess::PostProcessSteps};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scene = ImportBuilder::new()
//!     .with_post_process(PostProcessSteps::TRIANGULATE | PostProcessSteps::FLIP_UVS)
//!     .import_file("model.fbx")?;
//!
//! println!("Loaded {} meshes", scene.meshes().len());
//! print!("{}", scene.print_hierarchy());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! `owned-assimp-sys` holds the `#[repr(C)]` mirrors of Assimp's structs and
//! the C API declarations. This crate walks those structs once per import
//! ([`Scene::from_raw`]) and never touches native memory afterwards.

#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "raw-sys")]
pub use owned_assimp_sys as sys;
#[cfg(not(feature = "raw-sys"))]
pub(crate) use owned_assimp_sys as sys;

pub use crate::{
    aabb::AABB,
    animation::{Animation, MeshAnimation, MorphMeshAnimation, NodeAnimation},
    bone::{Bone, VertexWeight},
    camera::Camera,
    error::{Error, Result},
    importer::{ImportBuilder, ImportProperty, Importer, PropertyStore, import_properties},
    light::{Light, LightType},
    logging::{LogCrateStream, LogLevel, LogStream, Logger, MemoryLogStream},
    material::{Material, MaterialProperty, PropertyValue, TextureInfo, TextureType, material_keys},
    mesh::{Face, Mesh, PrimitiveTypes},
    metadata::{Metadata, MetadataEntry},
    node::{Node, NodeId, NodeRef},
    postprocess::PostProcessSteps,
    scene::{MemoryInfo, Scene, SceneFlags},
    texture::{Texel, Texture, TextureData},
    types::*,
};

pub mod error;
pub mod importer;
pub mod persist;
pub mod scene;
pub mod types;

pub mod aabb;
pub mod animation;
pub mod bone;
pub mod camera;
pub mod light;
pub mod material;
pub mod mesh;
pub mod metadata;
pub mod node;
pub mod texture;

pub mod logging;
pub mod postprocess;

mod ffi;
#[cfg(test)]
mod test_support;

/// Version information
pub mod version {
    /// Version of this crate
    pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn major() -> u32 {
        // SAFETY: no arguments, returns a constant.
        unsafe { crate::sys::aiGetVersionMajor() }
    }

    pub fn minor() -> u32 {
        // SAFETY: as above.
        unsafe { crate::sys::aiGetVersionMinor() }
    }

    pub fn revision() -> u32 {
        // SAFETY: as above.
        unsafe { crate::sys::aiGetVersionRevision() }
    }

    /// `major.minor.revision` of the linked Assimp
    pub fn assimp_version() -> String {
        format!("{}.{}.{}", major(), minor(), revision())
    }

    /// `ASSIMP_CFLAGS_*` bits the library was built with
    pub fn compile_flags() -> u32 {
        // SAFETY: as above.
        unsafe { crate::sys::aiGetCompileFlags() }
    }
}

/// Can Assimp import files with this extension?
///
/// Accepts `".obj"`, `"*.obj"` or `"obj"`, in any case.
pub fn is_extension_supported(extension: &str) -> bool {
    let trimmed = extension.trim().trim_start_matches('*').trim_start_matches('.');
    if trimmed.is_empty() {
        return false;
    }
    let Ok(c_extension) = std::ffi::CString::new(format!(".{trimmed}")) else {
        return false;
    };
    // SAFETY: `c_extension` is NUL-terminated and outlives the call.
    unsafe { sys::aiIsExtensionSupported(c_extension.as_ptr()) == sys::AI_TRUE }
}

/// Every importable extension, each with a leading dot (`".obj"`)
pub fn import_extensions() -> Vec<String> {
    let mut list = sys::aiString::default();
    // SAFETY: `list` is a valid out-parameter.
    unsafe { sys::aiGetExtensionList(&mut list) };
    parse_extension_list(&types::ai_string_to_string(&list))
}

/// Split Assimp's `"*.3ds;*.obj;*.dae"` format.
fn parse_extension_list(list: &str) -> Vec<String> {
    list.split(';')
        .map(|ext| ext.trim().trim_start_matches('*'))
        .filter(|ext| ext.len() > 1 && ext.starts_with('.'))
        .map(str::to_ascii_lowercase)
        .collect()
}

/// Assimp's error text from the most recent failed import, if any
pub fn last_error() -> Option<String> {
    error::last_error_string()
}

pub use logging::enable_verbose_logging;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list("*.3ds;*.OBJ; *.dae;;*"),
            vec![".3ds", ".obj", ".dae"]
        );
        assert!(parse_extension_list("").is_empty());
    }

    #[test]
    fn test_blank_extension_is_unsupported() {
        assert!(!is_extension_supported(""));
        assert!(!is_extension_supported("*."));
        assert!(!is_extension_supported("ob\0j"));
    }
}
