//! Owned mesh data
//!
//! Every per-vertex channel is copied with exactly `num_vertices` elements or
//! left as `None` when the native pointer is null. Absent channels are never
//! replaced by defaults.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    aabb::AABB,
    bone::Bone,
    error::Result,
    ffi::{copy_optional, copy_pointer_array, copy_required},
    sys,
    types::{
        Color4D, Vector2D, Vector3D, ai_string_to_string, from_ai_color4d, from_ai_vector3d,
    },
};

/// Number of texture coordinate channels a mesh can carry
pub const MAX_TEXTURE_COORDS: usize = sys::AI_MAX_NUMBER_OF_TEXTURECOORDS;
/// Number of vertex color channels a mesh can carry
pub const MAX_COLOR_SETS: usize = sys::AI_MAX_NUMBER_OF_COLOR_SETS;

bitflags! {
    /// Primitive kinds present in a mesh
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PrimitiveTypes: u32 {
        const POINT = sys::aiPrimitiveType_aiPrimitiveType_POINT;
        const LINE = sys::aiPrimitiveType_aiPrimitiveType_LINE;
        const TRIANGLE = sys::aiPrimitiveType_aiPrimitiveType_TRIANGLE;
        const POLYGON = sys::aiPrimitiveType_aiPrimitiveType_POLYGON;
        /// Set when polygons were triangulated with the NGON encoding.
        const NGON_ENCODING = sys::aiPrimitiveType_aiPrimitiveType_NGONEncodingFlag;
    }
}

/// How anim meshes combine with the base mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MorphingMethod {
    Unknown,
    VertexBlend,
    MorphNormalized,
    MorphRelative,
    Other(u32),
}

impl From<u32> for MorphingMethod {
    fn from(value: u32) -> Self {
        match value {
            sys::aiMorphingMethod_aiMorphingMethod_UNKNOWN => Self::Unknown,
            sys::aiMorphingMethod_aiMorphingMethod_VERTEX_BLEND => Self::VertexBlend,
            sys::aiMorphingMethod_aiMorphingMethod_MORPH_NORMALIZED => Self::MorphNormalized,
            sys::aiMorphingMethod_aiMorphingMethod_MORPH_RELATIVE => Self::MorphRelative,
            other => Self::Other(other),
        }
    }
}

/// Kind of primitive a single face describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Point,
    Line,
    Triangle,
    Polygon,
}

/// A face: indices into the mesh's vertex arrays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub(crate) indices: Vec<u32>,
}

impl Face {
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// `None` for a face without indices
    pub fn kind(&self) -> Option<FaceKind> {
        match self.indices.len() {
            0 => None,
            1 => Some(FaceKind::Point),
            2 => Some(FaceKind::Line),
            3 => Some(FaceKind::Triangle),
            _ => Some(FaceKind::Polygon),
        }
    }
}

type UvChannels = [Option<Vec<Vector3D>>; MAX_TEXTURE_COORDS];
type ColorChannels = [Option<Vec<Color4D>>; MAX_COLOR_SETS];

/// # Safety
/// Each non-null pointer must hold `len` elements.
unsafe fn copy_uv_channels(raw: &[*mut sys::aiVector3D; MAX_TEXTURE_COORDS], len: usize) -> Result<UvChannels> {
    let mut out: UvChannels = Default::default();
    for (slot, &ptr) in out.iter_mut().zip(raw) {
        *slot = unsafe { copy_optional(ptr, len, "texture coords", |v| from_ai_vector3d(*v))? };
    }
    Ok(out)
}

/// # Safety
/// Each non-null pointer must hold `len` elements.
unsafe fn copy_color_channels(raw: &[*mut sys::aiColor4D; MAX_COLOR_SETS], len: usize) -> Result<ColorChannels> {
    let mut out: ColorChannels = Default::default();
    for (slot, &ptr) in out.iter_mut().zip(raw) {
        *slot = unsafe { copy_optional(ptr, len, "vertex colors", |c| from_ai_color4d(*c))? };
    }
    Ok(out)
}

unsafe fn copy_vectors(ptr: *const sys::aiVector3D, len: usize, what: &str) -> Result<Option<Vec<Vector3D>>> {
    unsafe { copy_optional(ptr, len, what, |v| from_ai_vector3d(*v)) }
}

/// A morph target attached to a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimMesh {
    pub(crate) name: String,
    pub(crate) vertices: Option<Vec<Vector3D>>,
    pub(crate) normals: Option<Vec<Vector3D>>,
    pub(crate) tangents: Option<Vec<Vector3D>>,
    pub(crate) bitangents: Option<Vec<Vector3D>>,
    pub(crate) colors: ColorChannels,
    pub(crate) texture_coords: UvChannels,
    pub(crate) weight: f32,
}

impl AnimMesh {
    unsafe fn from_raw(raw: &sys::aiAnimMesh) -> Result<Self> {
        let len = raw.mNumVertices as usize;
        unsafe {
            Ok(Self {
                name: ai_string_to_string(&raw.mName),
                vertices: copy_vectors(raw.mVertices, len, "anim mesh vertices")?,
                normals: copy_vectors(raw.mNormals, len, "anim mesh normals")?,
                tangents: copy_vectors(raw.mTangents, len, "anim mesh tangents")?,
                bitangents: copy_vectors(raw.mBitangents, len, "anim mesh bitangents")?,
                colors: copy_color_channels(&raw.mColors, len)?,
                texture_coords: copy_uv_channels(&raw.mTextureCoords, len)?,
                weight: raw.mWeight,
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replacement positions, if this target moves vertices
    pub fn vertices(&self) -> Option<&[Vector3D]> {
        self.vertices.as_deref()
    }

    pub fn normals(&self) -> Option<&[Vector3D]> {
        self.normals.as_deref()
    }

    pub fn tangents(&self) -> Option<&[Vector3D]> {
        self.tangents.as_deref()
    }

    pub fn bitangents(&self) -> Option<&[Vector3D]> {
        self.bitangents.as_deref()
    }

    pub fn vertex_colors(&self, channel: usize) -> Option<&[Color4D]> {
        self.colors.get(channel)?.as_deref()
    }

    pub fn texture_coords(&self, channel: usize) -> Option<&[Vector3D]> {
        self.texture_coords.get(channel)?.as_deref()
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }
}

/// An owned mesh bound to one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub(crate) name: String,
    pub(crate) primitive_types: PrimitiveTypes,
    pub(crate) material_index: u32,
    pub(crate) vertices: Vec<Vector3D>,
    pub(crate) normals: Option<Vec<Vector3D>>,
    pub(crate) tangents: Option<Vec<Vector3D>>,
    pub(crate) bitangents: Option<Vec<Vector3D>>,
    pub(crate) texture_coords: UvChannels,
    pub(crate) num_uv_components: [u32; MAX_TEXTURE_COORDS],
    pub(crate) texture_coords_names: [Option<String>; MAX_TEXTURE_COORDS],
    pub(crate) colors: ColorChannels,
    pub(crate) faces: Vec<Face>,
    pub(crate) bones: Vec<Bone>,
    pub(crate) aabb: AABB,
    pub(crate) anim_meshes: Vec<AnimMesh>,
    pub(crate) morphing_method: MorphingMethod,
}

impl Mesh {
    /// Copy one native mesh
    ///
    /// # Safety
    /// Every non-null array in `raw` must hold the element count Assimp
    /// documents for it (`mNumVertices`, `mNumFaces`, `mNumBones`, ...).
    pub(crate) unsafe fn from_raw(raw: &sys::aiMesh) -> Result<Self> {
        let len = raw.mNumVertices as usize;
        unsafe {
            let vertices = copy_required(raw.mVertices, len, "mesh vertices", |v| from_ai_vector3d(*v))?;
            let faces = copy_required(raw.mFaces, raw.mNumFaces as usize, "mesh faces", |f| {
                (f.mIndices, f.mNumIndices)
            })?
            .into_iter()
            .map(|(ptr, n)| {
                copy_required(ptr, n as usize, "face indices", |i| *i).map(|indices| Face { indices })
            })
            .collect::<Result<Vec<_>>>()?;
            let bones = copy_pointer_array(raw.mBones, raw.mNumBones as usize, "mesh bones", |b| {
                Bone::from_raw(b)
            })?;
            let anim_meshes = copy_pointer_array(
                raw.mAnimMeshes,
                raw.mNumAnimMeshes as usize,
                "anim meshes",
                |m| AnimMesh::from_raw(m),
            )?;

            let mut texture_coords_names: [Option<String>; MAX_TEXTURE_COORDS] = Default::default();
            if !raw.mTextureCoordsNames.is_null() {
                let names = std::slice::from_raw_parts(raw.mTextureCoordsNames, MAX_TEXTURE_COORDS);
                for (slot, &name) in texture_coords_names.iter_mut().zip(names) {
                    *slot = name.as_ref().map(ai_string_to_string);
                }
            }

            Ok(Self {
                name: ai_string_to_string(&raw.mName),
                primitive_types: PrimitiveTypes::from_bits_retain(raw.mPrimitiveTypes),
                material_index: raw.mMaterialIndex,
                vertices,
                normals: copy_vectors(raw.mNormals, len, "mesh normals")?,
                tangents: copy_vectors(raw.mTangents, len, "mesh tangents")?,
                bitangents: copy_vectors(raw.mBitangents, len, "mesh bitangents")?,
                texture_coords: copy_uv_channels(&raw.mTextureCoords, len)?,
                num_uv_components: raw.mNumUVComponents,
                texture_coords_names,
                colors: copy_color_channels(&raw.mColors, len)?,
                faces,
                bones,
                aabb: AABB::from_raw(&raw.mAABB),
                anim_meshes,
                morphing_method: MorphingMethod::from(raw.mMethod),
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primitive_types(&self) -> PrimitiveTypes {
        self.primitive_types
    }

    /// Index into [`crate::Scene::materials`]
    pub fn material_index(&self) -> usize {
        self.material_index as usize
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Vector3D] {
        &self.vertices
    }

    /// Positions as tightly packed `f32` triples, ready for a GPU upload
    #[cfg(feature = "bytemuck")]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn normals(&self) -> Option<&[Vector3D]> {
        self.normals.as_deref()
    }

    pub fn tangents(&self) -> Option<&[Vector3D]> {
        self.tangents.as_deref()
    }

    pub fn bitangents(&self) -> Option<&[Vector3D]> {
        self.bitangents.as_deref()
    }

    /// UVW coordinates of a channel; see [`Mesh::num_uv_components`] for how many are used.
    pub fn texture_coords(&self, channel: usize) -> Option<&[Vector3D]> {
        self.texture_coords.get(channel)?.as_deref()
    }

    /// Channel narrowed to UV pairs
    pub fn texture_coords_2d(&self, channel: usize) -> Option<Vec<Vector2D>> {
        self.texture_coords(channel)
            .map(|uvs| uvs.iter().map(|uv| uv.truncate()).collect())
    }

    /// 1 (U), 2 (UV) or 3 (UVW); 0 for absent channels
    pub fn num_uv_components(&self, channel: usize) -> u32 {
        self.num_uv_components.get(channel).copied().unwrap_or(0)
    }

    pub fn texture_coords_name(&self, channel: usize) -> Option<&str> {
        self.texture_coords_names.get(channel)?.as_deref()
    }

    pub fn vertex_colors(&self, channel: usize) -> Option<&[Color4D]> {
        self.colors.get(channel)?.as_deref()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name() == name)
    }

    /// Only meaningful when imported with `GEN_BOUNDING_BOXES`
    pub fn aabb(&self) -> AABB {
        self.aabb
    }

    pub fn anim_meshes(&self) -> &[AnimMesh] {
        &self.anim_meshes
    }

    pub fn morphing_method(&self) -> MorphingMethod {
        self.morphing_method
    }

    pub fn has_normals(&self) -> bool {
        channel_matches(&self.normals, self.vertices.len())
    }

    pub fn has_tangents(&self) -> bool {
        channel_matches(&self.tangents, self.vertices.len())
    }

    pub fn has_bitangents(&self) -> bool {
        channel_matches(&self.bitangents, self.vertices.len())
    }

    pub fn has_tangents_and_bitangents(&self) -> bool {
        self.has_tangents() && self.has_bitangents()
    }

    pub fn has_texture_coords(&self, channel: usize) -> bool {
        self.texture_coords
            .get(channel)
            .is_some_and(|c| channel_matches(c, self.vertices.len()))
    }

    pub fn has_vertex_colors(&self, channel: usize) -> bool {
        self.colors
            .get(channel)
            .is_some_and(|c| channel_matches(c, self.vertices.len()))
    }

    pub fn num_uv_channels(&self) -> usize {
        (0..MAX_TEXTURE_COORDS).filter(|&i| self.has_texture_coords(i)).count()
    }

    pub fn num_color_channels(&self) -> usize {
        (0..MAX_COLOR_SETS).filter(|&i| self.has_vertex_colors(i)).count()
    }

    pub fn has_bones(&self) -> bool {
        !self.bones.is_empty()
    }

    /// Vertex color packed as `0xAARRGGBB`, each component clamped to [0, 1]
    pub fn vertex_color_argb(&self, channel: usize, vertex: usize) -> Option<u32> {
        let color = self.vertex_colors(channel)?.get(vertex)?;
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        Some((byte(color.w) << 24) | (byte(color.x) << 16) | (byte(color.y) << 8) | byte(color.z))
    }

    /// All face indices flattened, in face order
    pub fn indices(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|f| f.indices.iter().copied()).collect()
    }
}

fn channel_matches<T>(channel: &Option<Vec<T>>, len: usize) -> bool {
    channel.as_ref().is_some_and(|c| c.len() == len)
}
