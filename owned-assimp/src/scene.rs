//! Owned scene graph
//!
//! [`Scene::from_raw`] is the one entry into the copy walk. It reads the
//! native scene and everything reachable from it into owned values and never
//! calls back into Assimp, so the native scene can be released as soon as it
//! returns.

use std::fmt;
use std::path::{Path, PathBuf};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    animation::Animation,
    camera::Camera,
    error::Result,
    ffi::copy_pointer_array,
    light::Light,
    material::Material,
    mesh::Mesh,
    metadata::Metadata,
    node::{Node, NodeId, NodeRef, copy_hierarchy},
    sys,
    texture::Texture,
    types::ai_string_to_string,
};

bitflags! {
    /// State flags Assimp sets on an imported scene
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SceneFlags: u32 {
        /// Import stopped early or the scene lacks required parts
        const INCOMPLETE = sys::AI_SCENE_FLAGS_INCOMPLETE;
        const VALIDATED = sys::AI_SCENE_FLAGS_VALIDATED;
        const VALIDATION_WARNING = sys::AI_SCENE_FLAGS_VALIDATION_WARNING;
        /// Vertices are shared between faces
        const NON_VERBOSE_FORMAT = sys::AI_SCENE_FLAGS_NON_VERBOSE_FORMAT;
        /// Height-map terrain, no real meshes
        const TERRAIN = sys::AI_SCENE_FLAGS_TERRAIN;
        const ALLOW_SHARED = sys::AI_SCENE_FLAGS_ALLOW_SHARED;
    }
}

/// Bytes Assimp held for each part of the scene before it was released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryInfo {
    pub textures: u32,
    pub materials: u32,
    pub meshes: u32,
    pub nodes: u32,
    pub animations: u32,
    pub cameras: u32,
    pub lights: u32,
    pub total: u32,
}

impl From<sys::aiMemoryInfo> for MemoryInfo {
    fn from(raw: sys::aiMemoryInfo) -> Self {
        Self {
            textures: raw.textures,
            materials: raw.materials,
            meshes: raw.meshes,
            nodes: raw.nodes,
            animations: raw.animations,
            cameras: raw.cameras,
            lights: raw.lights,
            total: raw.total,
        }
    }
}

impl MemoryInfo {
    pub fn total_kb(&self) -> f64 {
        self.total as f64 / 1024.0
    }

    pub fn total_mb(&self) -> f64 {
        self.total as f64 / (1024.0 * 1024.0)
    }

    /// (component, bytes) pairs, total excluded
    pub fn breakdown(&self) -> [(&'static str, u32); 7] {
        [
            ("textures", self.textures),
            ("materials", self.materials),
            ("meshes", self.meshes),
            ("nodes", self.nodes),
            ("animations", self.animations),
            ("cameras", self.cameras),
            ("lights", self.lights),
        ]
    }
}

/// A fully owned copy of an imported scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub(crate) flags: SceneFlags,
    pub(crate) name: String,
    #[serde(deserialize_with = "crate::node::deserialize_arena")]
    pub(crate) nodes: Vec<Node>,
    pub(crate) meshes: Vec<Mesh>,
    pub(crate) materials: Vec<Material>,
    pub(crate) animations: Vec<Animation>,
    pub(crate) textures: Vec<Texture>,
    pub(crate) lights: Vec<Light>,
    pub(crate) cameras: Vec<Camera>,
    pub(crate) metadata: Metadata,
    pub(crate) memory_info: Option<MemoryInfo>,
    pub(crate) source_path: Option<PathBuf>,
}

impl Scene {
    /// Deep-copy a native scene.
    ///
    /// Fails with [`crate::Error::InvalidScene`] when a required array is null
    /// but has a non-zero count, a pointer array has a null element, or a
    /// material property buffer is malformed.
    ///
    /// # Safety
    /// `raw` and everything reachable from it must be valid for reads and
    /// must not be mutated or freed for the duration of the call.
    pub unsafe fn from_raw(raw: &sys::aiScene) -> Result<Self> {
        unsafe {
            let nodes = match raw.mRootNode.as_ref() {
                Some(root) => copy_hierarchy(root)?,
                None => Vec::new(),
            };
            let meshes = copy_pointer_array(raw.mMeshes, raw.mNumMeshes as usize, "scene meshes", |m| {
                Mesh::from_raw(m)
            })?;
            let materials = copy_pointer_array(
                raw.mMaterials,
                raw.mNumMaterials as usize,
                "scene materials",
                |m| Material::from_raw(m),
            )?;
            let animations = copy_pointer_array(
                raw.mAnimations,
                raw.mNumAnimations as usize,
                "scene animations",
                |a| Animation::from_raw(a),
            )?;
            let textures = copy_pointer_array(
                raw.mTextures,
                raw.mNumTextures as usize,
                "scene textures",
                |t| Texture::from_raw(t),
            )?;
            let lights = copy_pointer_array(raw.mLights, raw.mNumLights as usize, "scene lights", |l| {
                Ok(Light::from(l))
            })?;
            let cameras = copy_pointer_array(raw.mCameras, raw.mNumCameras as usize, "scene cameras", |c| {
                Ok(Camera::from(c))
            })?;
            let metadata = Metadata::from_raw(raw.mMetaData)?;

            Ok(Self {
                flags: SceneFlags::from_bits_retain(raw.mFlags),
                name: ai_string_to_string(&raw.mName),
                nodes,
                meshes,
                materials,
                animations,
                textures,
                lights,
                cameras,
                metadata,
                memory_info: None,
                source_path: None,
            })
        }
    }

    pub fn flags(&self) -> SceneFlags {
        self.flags
    }

    pub fn is_incomplete(&self) -> bool {
        self.flags.contains(SceneFlags::INCOMPLETE)
    }

    pub fn is_validated(&self) -> bool {
        self.flags.contains(SceneFlags::VALIDATED)
    }

    pub fn has_validation_warnings(&self) -> bool {
        self.flags.contains(SceneFlags::VALIDATION_WARNING)
    }

    pub fn is_non_verbose(&self) -> bool {
        self.flags.contains(SceneFlags::NON_VERBOSE_FORMAT)
    }

    pub fn has_terrain(&self) -> bool {
        self.flags.contains(SceneFlags::TERRAIN)
    }

    /// Scene name; many formats leave it empty
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` only for scenes Assimp flagged incomplete
    pub fn root_node(&self) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.nodes, NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.nodes, id)
    }

    /// All nodes in preorder, root first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// First node named `name` in a depth-first walk from the root
    pub fn find_node(&self, name: &str) -> Option<NodeRef<'_>> {
        self.root_node()?.find_node(name)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Material used by `mesh`
    pub fn material_of(&self, mesh: &Mesh) -> Option<&Material> {
        self.materials.get(mesh.material_index())
    }

    /// Meshes referenced by `node`, skipping out-of-range indices
    pub fn meshes_of<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Mesh> + 'a {
        node.mesh_indices()
            .iter()
            .filter_map(|&i| self.meshes.get(i as usize))
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// Embedded textures; materials refer to them as `*N`
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Native memory held by the import, when it came from the importer
    pub fn memory_info(&self) -> Option<MemoryInfo> {
        self.memory_info
    }

    /// File the scene was imported from, `None` for in-memory imports
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn total_vertices(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices().len()).sum()
    }

    pub fn total_faces(&self) -> usize {
        self.meshes.iter().map(|m| m.faces().len()).sum()
    }

    /// Node tree, one line per node, two spaces of indent per level
    pub fn print_hierarchy(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root_node() {
            root.write_tree(&mut out);
        }
        out
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() { "<unnamed>" } else { &self.name };
        writeln!(f, "Scene {name}")?;
        writeln!(
            f,
            "  nodes: {}, meshes: {}, materials: {}, animations: {}",
            self.nodes.len(),
            self.meshes.len(),
            self.materials.len(),
            self.animations.len()
        )?;
        write!(
            f,
            "  textures: {}, lights: {}, cameras: {}, vertices: {}, faces: {}",
            self.textures.len(),
            self.lights.len(),
            self.cameras.len(),
            self.total_vertices(),
            self.total_faces()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn sample_scene() -> sys::aiScene {
        let root = node(
            "root",
            vec![],
            vec![
                node("body", vec![0], vec![node("head", vec![1], vec![])]),
                node("lamp", vec![], vec![]),
            ],
        );
        let mut raw = scene(
            root,
            vec![triangle_mesh("torso", 0), triangle_mesh("skull", 0)],
            vec![material(vec![])],
        );
        raw.mFlags = sys::AI_SCENE_FLAGS_VALIDATED | sys::AI_SCENE_FLAGS_NON_VERBOSE_FORMAT;
        raw.mNumLights = 1;
        raw.mLights = leak_ptrs(vec![sys::aiLight {
            mName: ai_str("lamp"),
            mType: sys::aiLightSourceType_aiLightSource_POINT,
            ..Default::default()
        }]);
        raw
    }

    #[test]
    fn test_copy_scene() {
        let scene = unsafe { Scene::from_raw(&sample_scene()) }.unwrap();
        assert_eq!(scene.name(), "synthetic");
        assert_eq!(scene.nodes().len(), 4);
        assert_eq!(scene.meshes().len(), 2);
        assert_eq!(scene.lights()[0].name(), "lamp");
        assert!(scene.cameras().is_empty());
        assert!(scene.is_validated());
        assert!(scene.is_non_verbose());
        assert!(!scene.is_incomplete());
        assert!(!scene.has_validation_warnings());
        assert!(!scene.has_terrain());
        assert_eq!(scene.memory_info(), None);
        assert_eq!(scene.source_path(), None);
        assert_eq!(scene.total_vertices(), 6);
    }

    #[test]
    fn test_parent_links_point_to_the_copied_parent() {
        let scene = unsafe { Scene::from_raw(&sample_scene()) }.unwrap();
        let head = scene.find_node("head").unwrap();
        let body = head.parent().unwrap();
        assert_eq!(body.name(), "body");
        assert!(body.parent().unwrap().is_root());
        assert_eq!(head.depth(), 2);
        assert_eq!(scene.meshes_of(&head).next().unwrap().name(), "skull");
        for node in scene.nodes().iter().skip(1) {
            let parent = scene.node(node.parent_id().unwrap()).unwrap();
            assert!(parent.child_ids().iter().any(|&c| scene.nodes()[c.index()].name() == node.name()));
        }
    }

    #[test]
    fn test_print_hierarchy() {
        let scene = unsafe { Scene::from_raw(&sample_scene()) }.unwrap();
        assert_eq!(
            scene.print_hierarchy(),
            "root\n  body meshes=[0]\n    head meshes=[1]\n  lamp\n"
        );
        assert!(scene.to_string().starts_with("Scene synthetic\n"));
    }

    #[test]
    fn test_null_root_gives_no_nodes() {
        let raw = sys::aiScene {
            mFlags: sys::AI_SCENE_FLAGS_INCOMPLETE,
            ..Default::default()
        };
        let scene = unsafe { Scene::from_raw(&raw) }.unwrap();
        assert!(scene.root_node().is_none());
        assert!(scene.find_node("anything").is_none());
        assert!(scene.is_incomplete());
        assert_eq!(scene.print_hierarchy(), "");
    }

    #[test]
    fn test_null_mesh_pointer_is_invalid_scene() {
        let mut raw = sample_scene();
        raw.mNumMeshes = 3;
        raw.mMeshes = leak_slice(vec![
            leak(triangle_mesh("a", 0)),
            std::ptr::null_mut(),
            leak(triangle_mesh("c", 0)),
        ]);
        let err = unsafe { Scene::from_raw(&raw) }.unwrap_err();
        assert!(err.to_string().contains("scene meshes[1]"), "{err}");
    }

    #[test]
    fn test_memory_info_units() {
        let info = MemoryInfo {
            total: 2 * 1024 * 1024,
            ..Default::default()
        };
        assert_eq!(info.total_kb(), 2048.0);
        assert_eq!(info.total_mb(), 2.0);
    }
}
