//! Post-processing flags passed to each import

use crate::{
    error::{Error, Result},
    sys,
};
use bitflags::bitflags;

bitflags! {
    /// Independent, combinable post-processing steps run by Assimp before the copy.
    ///
    /// The native pipeline decides execution order; callers only pick the set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PostProcessSteps: u32 {
        /// Tangents and bitangents (needs normals and UVs).
        const CALC_TANGENT_SPACE = sys::aiPostProcessSteps_aiProcess_CalcTangentSpace;
        /// Merge identical vertices so faces share indices.
        const JOIN_IDENTICAL_VERTICES = sys::aiPostProcessSteps_aiProcess_JoinIdenticalVertices;
        /// Convert to a left-handed coordinate system.
        const MAKE_LEFT_HANDED = sys::aiPostProcessSteps_aiProcess_MakeLeftHanded;
        /// Split polygons into triangles.
        const TRIANGULATE = sys::aiPostProcessSteps_aiProcess_Triangulate;
        /// Drop components listed in the `PP_RVC_FLAGS` property.
        const REMOVE_COMPONENT = sys::aiPostProcessSteps_aiProcess_RemoveComponent;
        /// Flat per-face normals.
        const GEN_NORMALS = sys::aiPostProcessSteps_aiProcess_GenNormals;
        /// Smoothed per-vertex normals.
        const GEN_SMOOTH_NORMALS = sys::aiPostProcessSteps_aiProcess_GenSmoothNormals;
        const SPLIT_LARGE_MESHES = sys::aiPostProcessSteps_aiProcess_SplitLargeMeshes;
        /// Bake node transforms into vertices and flatten the hierarchy.
        const PRE_TRANSFORM_VERTICES = sys::aiPostProcessSteps_aiProcess_PreTransformVertices;
        const LIMIT_BONE_WEIGHTS = sys::aiPostProcessSteps_aiProcess_LimitBoneWeights;
        const VALIDATE_DATA_STRUCTURE = sys::aiPostProcessSteps_aiProcess_ValidateDataStructure;
        /// Reorder triangles for the post-transform vertex cache.
        const IMPROVE_CACHE_LOCALITY = sys::aiPostProcessSteps_aiProcess_ImproveCacheLocality;
        const REMOVE_REDUNDANT_MATERIALS = sys::aiPostProcessSteps_aiProcess_RemoveRedundantMaterials;
        const FIX_INFACING_NORMALS = sys::aiPostProcessSteps_aiProcess_FixInfacingNormals;
        /// Fill in bone armature and node references.
        const POPULATE_ARMATURE_DATA = sys::aiPostProcessSteps_aiProcess_PopulateArmatureData;
        /// Split meshes so each holds a single primitive type.
        const SORT_BY_PTYPE = sys::aiPostProcessSteps_aiProcess_SortByPType;
        const FIND_DEGENERATES = sys::aiPostProcessSteps_aiProcess_FindDegenerates;
        const FIND_INVALID_DATA = sys::aiPostProcessSteps_aiProcess_FindInvalidData;
        const GEN_UV_COORDS = sys::aiPostProcessSteps_aiProcess_GenUVCoords;
        const TRANSFORM_UV_COORDS = sys::aiPostProcessSteps_aiProcess_TransformUVCoords;
        const FIND_INSTANCES = sys::aiPostProcessSteps_aiProcess_FindInstances;
        const OPTIMIZE_MESHES = sys::aiPostProcessSteps_aiProcess_OptimizeMeshes;
        const OPTIMIZE_GRAPH = sys::aiPostProcessSteps_aiProcess_OptimizeGraph;
        const FLIP_UVS = sys::aiPostProcessSteps_aiProcess_FlipUVs;
        const FLIP_WINDING_ORDER = sys::aiPostProcessSteps_aiProcess_FlipWindingOrder;
        const SPLIT_BY_BONE_COUNT = sys::aiPostProcessSteps_aiProcess_SplitByBoneCount;
        const DEBONE = sys::aiPostProcessSteps_aiProcess_Debone;
        /// Apply the `GLOBAL_SCALE_FACTOR` property.
        const GLOBAL_SCALE = sys::aiPostProcessSteps_aiProcess_GlobalScale;
        const EMBED_TEXTURES = sys::aiPostProcessSteps_aiProcess_EmbedTextures;
        const FORCE_GEN_NORMALS = sys::aiPostProcessSteps_aiProcess_ForceGenNormals;
        const DROP_NORMALS = sys::aiPostProcessSteps_aiProcess_DropNormals;
        /// Fill in each mesh's AABB.
        const GEN_BOUNDING_BOXES = sys::aiPostProcessSteps_aiProcess_GenBoundingBoxes;
    }
}

impl PostProcessSteps {
    /// Value passed to the C API
    pub fn as_raw(self) -> u32 {
        self.bits()
    }

    pub fn from_raw(value: u32) -> Self {
        Self::from_bits_truncate(value)
    }

    /// Reject combinations Assimp refuses to run together.
    pub fn validate(&self) -> Result<()> {
        if self.contains(Self::GEN_SMOOTH_NORMALS | Self::GEN_NORMALS) {
            return Err(Error::invalid_parameter(
                "GEN_SMOOTH_NORMALS and GEN_NORMALS are mutually exclusive",
            ));
        }
        if self.contains(Self::OPTIMIZE_GRAPH | Self::PRE_TRANSFORM_VERTICES) {
            return Err(Error::invalid_parameter(
                "OPTIMIZE_GRAPH and PRE_TRANSFORM_VERTICES are mutually exclusive",
            ));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Triangulated, indexed, one primitive type per mesh.
    pub const FAST: Self = Self::from_bits_truncate(
        Self::TRIANGULATE.bits() | Self::JOIN_IDENTICAL_VERTICES.bits() | Self::SORT_BY_PTYPE.bits(),
    );

    /// [`Self::FAST`] plus smooth normals and cleanup passes.
    pub const QUALITY: Self = Self::from_bits_truncate(
        Self::FAST.bits()
            | Self::GEN_SMOOTH_NORMALS.bits()
            | Self::IMPROVE_CACHE_LOCALITY.bits()
            | Self::REMOVE_REDUNDANT_MATERIALS.bits()
            | Self::FIX_INFACING_NORMALS.bits()
            | Self::FIND_DEGENERATES.bits()
            | Self::FIND_INVALID_DATA.bits(),
    );

    /// [`Self::QUALITY`] plus tangents, generated UVs, mesh and graph optimization.
    pub const MAX_QUALITY: Self = Self::from_bits_truncate(
        Self::QUALITY.bits()
            | Self::CALC_TANGENT_SPACE.bits()
            | Self::GEN_UV_COORDS.bits()
            | Self::OPTIMIZE_MESHES.bits()
            | Self::OPTIMIZE_GRAPH.bits()
            | Self::VALIDATE_DATA_STRUCTURE.bits(),
    );

    pub const REALTIME: Self = Self::from_bits_truncate(
        Self::FAST.bits()
            | Self::GEN_NORMALS.bits()
            | Self::IMPROVE_CACHE_LOCALITY.bits()
            | Self::LIMIT_BONE_WEIGHTS.bits()
            | Self::SPLIT_LARGE_MESHES.bits(),
    );
}

impl Default for PostProcessSteps {
    fn default() -> Self {
        Self::FAST
    }
}
