//! Import facade
//!
//! Every import follows the same shape: validate arguments, build a native
//! property store for this import only, call Assimp, wrap the returned scene
//! in a guard that releases it on drop, deep-copy it into an owned
//! [`Scene`], then let the guard release it. The guard also runs when the copy
//! fails, so no path leaks the native scene.

use std::ffi::CString;
use std::os::raw::c_char;
use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use crate::{
    error::{Error, Result},
    postprocess::PostProcessSteps,
    scene::{MemoryInfo, Scene},
    sys,
    types::{Matrix4x4, to_ai_matrix4x4},
};

/// A configuration value handed to Assimp for one import
#[derive(Debug, Clone, PartialEq)]
pub enum ImportProperty {
    Integer(i32),
    Float(f32),
    String(String),
    /// Sent as integer 0 or 1
    Boolean(bool),
    Matrix(Matrix4x4),
}

/// Import configuration (`AI_CONFIG_*` keys and their values)
///
/// Each import gets its own native property store built from this value, so
/// concurrent imports with different settings do not interfere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyStore {
    properties: Vec<(String, ImportProperty)>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_int<S: Into<String>>(&mut self, name: S, value: i32) -> &mut Self {
        self.set(name, ImportProperty::Integer(value))
    }

    pub fn set_float<S: Into<String>>(&mut self, name: S, value: f32) -> &mut Self {
        self.set(name, ImportProperty::Float(value))
    }

    pub fn set_string<S: Into<String>, V: Into<String>>(&mut self, name: S, value: V) -> &mut Self {
        self.set(name, ImportProperty::String(value.into()))
    }

    pub fn set_bool<S: Into<String>>(&mut self, name: S, value: bool) -> &mut Self {
        self.set(name, ImportProperty::Boolean(value))
    }

    pub fn set_matrix<S: Into<String>>(&mut self, name: S, value: Matrix4x4) -> &mut Self {
        self.set(name, ImportProperty::Matrix(value))
    }

    /// Set `name`, replacing any earlier value for it
    pub fn set<S: Into<String>>(&mut self, name: S, value: ImportProperty) -> &mut Self {
        let name = name.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ImportProperty> {
        self.properties.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn properties(&self) -> &[(String, ImportProperty)] {
        &self.properties
    }

    pub fn clear(&mut self) {
        self.properties.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }
}

/// Common import property keys
pub mod import_properties {
    /// Components removed by `REMOVE_COMPONENT` (bitmask of `aiComponent`)
    pub const REMOVE_VERTEX_COMPONENTS: &str = "PP_RVC_FLAGS";
    /// Smoothing angle in degrees for `GEN_SMOOTH_NORMALS`
    pub const MAX_SMOOTHING_ANGLE: &str = "PP_GSN_MAX_SMOOTHING_ANGLE";
    /// Smoothing angle in degrees for `CALC_TANGENT_SPACE`
    pub const TANGENT_SMOOTHING_ANGLE: &str = "PP_CT_MAX_SMOOTHING_ANGLE";
    pub const FBX_READ_ALL_GEOMETRY_LAYERS: &str = "IMPORT_FBX_READ_ALL_GEOMETRY_LAYERS";
    pub const FBX_PRESERVE_PIVOTS: &str = "IMPORT_FBX_PRESERVE_PIVOTS";
    pub const REMOVE_DEGENERATE_FACES: &str = "PP_FD_REMOVE";
    pub const SPLIT_LARGE_MESHES_VERTEX_LIMIT: &str = "PP_SLM_VERTEX_LIMIT";
    pub const SPLIT_LARGE_MESHES_TRIANGLE_LIMIT: &str = "PP_SLM_TRIANGLE_LIMIT";
    pub const LIMIT_BONE_WEIGHTS_MAX: &str = "PP_LBW_MAX_WEIGHTS";
    pub const SORT_BY_PTYPE_REMOVE: &str = "PP_SBP_REMOVE";
    pub const GLOBAL_SCALE_FACTOR: &str = "GLOBAL_SCALE_FACTOR";
    pub const APP_SCALE_FACTOR: &str = "APP_SCALE_FACTOR";
}

/// Native property store, released on drop
struct NativePropertyStore(NonNull<sys::aiPropertyStore>);

impl NativePropertyStore {
    fn new(store: &PropertyStore) -> Result<Self> {
        // SAFETY: plain allocation, no preconditions.
        let raw = unsafe { sys::aiCreatePropertyStore() };
        let native = NonNull::new(raw)
            .map(Self)
            .ok_or_else(|| Error::other("aiCreatePropertyStore returned null"))?;

        for (name, value) in store.properties() {
            let c_name = CString::new(name.as_str())
                .map_err(|_| Error::invalid_parameter(format!("property name `{name}` contains NUL")))?;
            let ptr = native.0.as_ptr();
            // SAFETY: `ptr` is a live store and `c_name` outlives each call.
            unsafe {
                match value {
                    ImportProperty::Integer(v) => sys::aiSetImportPropertyInteger(ptr, c_name.as_ptr(), *v),
                    ImportProperty::Boolean(v) => {
                        sys::aiSetImportPropertyInteger(ptr, c_name.as_ptr(), i32::from(*v))
                    }
                    ImportProperty::Float(v) => sys::aiSetImportPropertyFloat(ptr, c_name.as_ptr(), *v),
                    ImportProperty::String(v) => {
                        let value = sys::aiString::from_str_truncated(v);
                        sys::aiSetImportPropertyString(ptr, c_name.as_ptr(), &value);
                    }
                    ImportProperty::Matrix(m) => {
                        let value = to_ai_matrix4x4(*m);
                        sys::aiSetImportPropertyMatrix(ptr, c_name.as_ptr(), &value);
                    }
                }
            }
        }
        Ok(native)
    }

    fn as_ptr(&self) -> *const sys::aiPropertyStore {
        self.0.as_ptr()
    }
}

impl Drop for NativePropertyStore {
    fn drop(&mut self) {
        // SAFETY: created by aiCreatePropertyStore and released only here.
        unsafe { sys::aiReleasePropertyStore(self.0.as_ptr()) };
    }
}

/// Scene returned by Assimp, released with `aiReleaseImport` on drop
struct ImportedScene(NonNull<sys::aiScene>);

impl ImportedScene {
    /// Take ownership of an import result; null becomes [`Error::ImportFailed`].
    fn new(raw: *const sys::aiScene) -> Result<Self> {
        NonNull::new(raw.cast_mut()).map(Self).ok_or_else(Error::from_assimp)
    }

    fn memory_info(&self) -> MemoryInfo {
        let mut info = sys::aiMemoryInfo::default();
        // SAFETY: the scene is live until drop; `info` is a valid out-pointer.
        unsafe { sys::aiGetMemoryRequirements(self.0.as_ptr(), &mut info) };
        MemoryInfo::from(info)
    }

    fn copy(&self, source_path: Option<PathBuf>) -> Result<Scene> {
        // SAFETY: Assimp keeps the scene valid and unmodified until aiReleaseImport.
        let mut scene = unsafe { Scene::from_raw(self.0.as_ref())? };
        scene.memory_info = Some(self.memory_info());
        scene.source_path = source_path;
        log::debug!(
            "copied scene: {} nodes, {} meshes, {} materials, {} animations, {} textures",
            scene.nodes().len(),
            scene.meshes().len(),
            scene.materials().len(),
            scene.animations().len(),
            scene.textures().len()
        );
        Ok(scene)
    }
}

impl Drop for ImportedScene {
    fn drop(&mut self) {
        log::debug!("releasing native scene {:p}", self.0);
        // SAFETY: the pointer came from an aiImport* call and is released only here.
        unsafe { sys::aiReleaseImport(self.0.as_ptr()) };
    }
}

/// Builder for configuring and executing scene imports
#[derive(Debug, Clone, Default)]
pub struct ImportBuilder {
    post_process: PostProcessSteps,
    properties: PropertyStore,
}

impl ImportBuilder {
    /// Defaults: [`PostProcessSteps::FAST`], no properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the post-processing steps
    pub fn with_post_process(mut self, steps: PostProcessSteps) -> Self {
        self.post_process = steps;
        self
    }

    /// Add to the post-processing steps
    pub fn add_post_process(mut self, steps: PostProcessSteps) -> Self {
        self.post_process |= steps;
        self
    }

    pub fn with_property_int<S: Into<String>>(mut self, name: S, value: i32) -> Self {
        self.properties.set_int(name, value);
        self
    }

    pub fn with_property_float<S: Into<String>>(mut self, name: S, value: f32) -> Self {
        self.properties.set_float(name, value);
        self
    }

    pub fn with_property_string<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.properties.set_string(name, value);
        self
    }

    pub fn with_property_bool<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.properties.set_bool(name, value);
        self
    }

    pub fn with_property_matrix<S: Into<String>>(mut self, name: S, value: Matrix4x4) -> Self {
        self.properties.set_matrix(name, value);
        self
    }

    /// Replace all properties
    pub fn with_property_store(mut self, store: PropertyStore) -> Self {
        self.properties = store;
        self
    }

    pub fn post_process(&self) -> PostProcessSteps {
        self.post_process
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    /// Import a scene from a file.
    ///
    /// Fails with [`Error::InvalidParameter`] for an empty path, a path with
    /// an interior NUL, or conflicting post-process flags, all before any
    /// native call. A file Assimp cannot read is [`Error::ImportFailed`]
    /// carrying Assimp's error text.
    pub fn import_file<P: AsRef<Path>>(self, path: P) -> Result<Scene> {
        let path = path.as_ref();
        let c_path = path_to_cstring(path)?;
        self.post_process.validate()?;
        let store = NativePropertyStore::new(&self.properties)?;

        log::debug!(
            "importing {} with flags {:#x} and {} properties",
            path.display(),
            self.post_process.as_raw(),
            self.properties.len()
        );
        // SAFETY: `c_path` and `store` outlive the call; no custom IO is used.
        let raw = unsafe {
            sys::aiImportFileExWithProperties(
                c_path.as_ptr(),
                self.post_process.as_raw(),
                std::ptr::null_mut(),
                store.as_ptr(),
            )
        };
        drop(store);

        let imported = ImportedScene::new(raw).inspect_err(|err| {
            log::warn!("import of {} failed: {err}", path.display());
        })?;
        imported.copy(Some(path.to_path_buf()))
    }

    /// Import a scene from bytes already in memory.
    ///
    /// `hint` is the file extension (with or without the dot) for formats
    /// Assimp cannot detect from content.
    pub fn import_from_memory(self, data: &[u8], hint: Option<&str>) -> Result<Scene> {
        if data.is_empty() {
            return Err(Error::invalid_parameter("memory buffer is empty"));
        }
        let len = u32::try_from(data.len())
            .map_err(|_| Error::invalid_parameter("memory buffer exceeds 4 GiB"))?;
        let hint = hint
            .map(|h| CString::new(h.trim_start_matches('.')))
            .transpose()
            .map_err(|_| Error::invalid_parameter("format hint contains NUL"))?;
        self.post_process.validate()?;
        let store = NativePropertyStore::new(&self.properties)?;

        log::debug!(
            "importing {len} bytes (hint {:?}) with flags {:#x}",
            hint,
            self.post_process.as_raw()
        );
        // SAFETY: `data`, `hint` and `store` outlive the call.
        let raw = unsafe {
            sys::aiImportFileFromMemoryWithProperties(
                data.as_ptr().cast::<c_char>(),
                len,
                self.post_process.as_raw(),
                hint.as_ref().map_or(std::ptr::null(), |h| h.as_ptr()),
                store.as_ptr(),
            )
        };
        drop(store);

        let imported = ImportedScene::new(raw).inspect_err(|err| {
            log::warn!("import from memory failed: {err}");
        })?;
        imported.copy(None)
    }
}

fn path_to_cstring(path: &Path) -> Result<CString> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_parameter("path is empty"));
    }
    let text = path
        .to_str()
        .ok_or_else(|| Error::invalid_parameter(format!("path {} is not UTF-8", path.display())))?;
    CString::new(text).map_err(|_| Error::invalid_parameter(format!("path {text:?} contains NUL")))
}

/// Entry point for imports with default settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer;

impl Importer {
    pub fn new() -> Self {
        Self
    }

    /// Start a configurable import
    pub fn builder(&self) -> ImportBuilder {
        ImportBuilder::new()
    }

    /// Import a file with [`PostProcessSteps::FAST`]
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Scene> {
        ImportBuilder::new().import_file(path)
    }

    /// Import bytes with [`PostProcessSteps::FAST`]
    pub fn import_from_memory(&self, data: &[u8], hint: Option<&str>) -> Result<Scene> {
        ImportBuilder::new().import_from_memory(data, hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_builder() {
        let builder = ImportBuilder::new()
            .with_post_process(PostProcessSteps::TRIANGULATE)
            .add_post_process(PostProcessSteps::FLIP_UVS)
            .with_property_int(import_properties::LIMIT_BONE_WEIGHTS_MAX, 4)
            .with_property_bool(import_properties::REMOVE_DEGENERATE_FACES, true);

        assert!(builder.post_process().contains(PostProcessSteps::TRIANGULATE | PostProcessSteps::FLIP_UVS));
        assert_eq!(builder.properties().len(), 2);
        assert_eq!(
            builder.properties().get(import_properties::LIMIT_BONE_WEIGHTS_MAX),
            Some(&ImportProperty::Integer(4))
        );
    }

    #[test]
    fn test_property_store_replaces_existing_key() {
        let mut store = PropertyStore::new();
        store
            .set_float(import_properties::GLOBAL_SCALE_FACTOR, 1.0)
            .set_float(import_properties::GLOBAL_SCALE_FACTOR, 0.01);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(import_properties::GLOBAL_SCALE_FACTOR),
            Some(&ImportProperty::Float(0.01))
        );
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_bad_paths_are_rejected_before_native_code() {
        for path in ["", "bad\0name.obj"] {
            let err = Importer::new().read_file(path).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { .. }), "{path:?}: {err}");
        }
    }

    #[test]
    fn test_empty_memory_is_rejected() {
        let err = Importer::new().import_from_memory(&[], Some("obj")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let err = ImportBuilder::new()
            .with_post_process(PostProcessSteps::GEN_NORMALS | PostProcessSteps::GEN_SMOOTH_NORMALS)
            .import_file("model.obj")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }
}
