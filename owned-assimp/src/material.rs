//! Materials as decoded property lists
//!
//! Every native property is decoded once, at copy time, into a
//! [`PropertyValue`] according to its type tag. Properties keep their source
//! order. Lookup by key alone returns the last property with that key, the
//! same result a key-to-property map built in source order would give. Use
//! [`Material::property_with`] to address one (key, semantic, index) slot
//! exactly.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    ffi::{copy_pointer_array, copy_required},
    sys,
    types::{Color3D, Color4D, ai_string_to_string},
};

/// Standard material property keys
pub mod material_keys {
    pub const NAME: &str = "?mat.name";
    pub const COLOR_DIFFUSE: &str = "$clr.diffuse";
    pub const COLOR_AMBIENT: &str = "$clr.ambient";
    pub const COLOR_SPECULAR: &str = "$clr.specular";
    pub const COLOR_EMISSIVE: &str = "$clr.emissive";
    pub const COLOR_TRANSPARENT: &str = "$clr.transparent";
    pub const COLOR_REFLECTIVE: &str = "$clr.reflective";
    pub const SHININESS: &str = "$mat.shininess";
    pub const SHININESS_STRENGTH: &str = "$mat.shinpercent";
    pub const OPACITY: &str = "$mat.opacity";
    pub const TRANSPARENCYFACTOR: &str = "$mat.transparencyfactor";
    pub const BUMPSCALING: &str = "$mat.bumpscaling";
    pub const REFRACTI: &str = "$mat.refracti";
    pub const REFLECTIVITY: &str = "$mat.reflectivity";
    pub const SHADING_MODEL: &str = "$mat.shadingm";
    pub const BLEND_FUNC: &str = "$mat.blend";
    pub const TWOSIDED: &str = "$mat.twosided";

    // Per-texture keys; semantic is the texture type, index the slot.
    pub const TEXTURE_FILE: &str = "$tex.file";
    pub const TEXTURE_UVWSRC: &str = "$tex.uvwsrc";
    pub const TEXTURE_OP: &str = "$tex.op";
    pub const TEXTURE_MAPPING: &str = "$tex.mapping";
    pub const TEXTURE_BLEND: &str = "$tex.blend";
    pub const TEXTURE_MAPMODE_U: &str = "$tex.mapmodeu";
    pub const TEXTURE_MAPMODE_V: &str = "$tex.mapmodev";
    pub const TEXTURE_MAPMODE_W: &str = "$tex.mapmodew";
}

/// Native type tag of a material property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTypeInfo {
    Float,
    Double,
    String,
    Integer,
    Buffer,
}

/// Decoded value of a material property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Float(Vec<f32>),
    Double(Vec<f64>),
    String(String),
    Integer(Vec<i32>),
    /// Opaque bytes, including values with a type tag this crate does not know
    Buffer(Vec<u8>),
}

impl PropertyValue {
    /// Decode a native property buffer by its type tag.
    fn decode(key: &str, type_tag: u32, data: &[u8]) -> Result<Self> {
        let malformed = |why: &str| Error::invalid_scene(format!("material property `{key}`: {why}"));
        match type_tag {
            sys::aiPropertyTypeInfo_aiPTI_Float => {
                if data.len() % 4 != 0 {
                    return Err(malformed("float buffer is not a multiple of 4 bytes"));
                }
                Ok(Self::Float(
                    data.chunks_exact(4)
                        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                ))
            }
            sys::aiPropertyTypeInfo_aiPTI_Double => {
                if data.len() % 8 != 0 {
                    return Err(malformed("double buffer is not a multiple of 8 bytes"));
                }
                Ok(Self::Double(
                    data.chunks_exact(8)
                        .map(|c| {
                            let mut b = [0u8; 8];
                            b.copy_from_slice(c);
                            f64::from_ne_bytes(b)
                        })
                        .collect(),
                ))
            }
            sys::aiPropertyTypeInfo_aiPTI_Integer => {
                if data.len() % 4 != 0 {
                    return Err(malformed("integer buffer is not a multiple of 4 bytes"));
                }
                Ok(Self::Integer(
                    data.chunks_exact(4)
                        .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                ))
            }
            sys::aiPropertyTypeInfo_aiPTI_String => {
                // u32 length, then the bytes (Assimp appends a NUL not counted in length).
                let Some((len, rest)) = data.split_first_chunk::<4>() else {
                    return Err(malformed("string buffer shorter than its length prefix"));
                };
                let len = u32::from_ne_bytes(*len) as usize;
                let Some(bytes) = rest.get(..len) else {
                    return Err(malformed("string length exceeds buffer"));
                };
                Ok(Self::String(String::from_utf8_lossy(bytes).into_owned()))
            }
            _ => Ok(Self::Buffer(data.to_vec())),
        }
    }

    pub fn type_info(&self) -> PropertyTypeInfo {
        match self {
            Self::Float(_) => PropertyTypeInfo::Float,
            Self::Double(_) => PropertyTypeInfo::Double,
            Self::String(_) => PropertyTypeInfo::String,
            Self::Integer(_) => PropertyTypeInfo::Integer,
            Self::Buffer(_) => PropertyTypeInfo::Buffer,
        }
    }

    /// Numeric view as floats, converting integer and double arrays
    pub fn as_floats(&self) -> Option<Vec<f32>> {
        match self {
            Self::Float(v) => Some(v.clone()),
            Self::Double(v) => Some(v.iter().map(|&d| d as f32).collect()),
            Self::Integer(v) => Some(v.iter().map(|&i| i as f32).collect()),
            _ => None,
        }
    }

    /// Numeric view as integers; buffers of whole `i32`s count too
    pub fn as_integers(&self) -> Option<Vec<i32>> {
        match self {
            Self::Integer(v) => Some(v.clone()),
            Self::Float(v) => Some(v.iter().map(|&f| f as i32).collect()),
            Self::Double(v) => Some(v.iter().map(|&d| d as i32).collect()),
            Self::Buffer(b) if !b.is_empty() && b.len() % 4 == 0 => Some(
                b.chunks_exact(4)
                    .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One (key, semantic, index) entry of a material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperty {
    pub(crate) key: String,
    pub(crate) semantic: u32,
    pub(crate) index: u32,
    pub(crate) value: PropertyValue,
}

impl MaterialProperty {
    unsafe fn from_raw(raw: &sys::aiMaterialProperty) -> Result<Self> {
        let key = ai_string_to_string(&raw.mKey);
        let data = unsafe {
            copy_required(
                raw.mData.cast::<u8>(),
                raw.mDataLength as usize,
                "material property data",
                |b| *b,
            )?
        };
        let value = PropertyValue::decode(&key, raw.mType, &data)?;
        Ok(Self {
            key,
            semantic: raw.mSemantic,
            index: raw.mIndex,
            value,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Texture type for `$tex.*` keys, 0 otherwise
    pub fn semantic(&self) -> u32 {
        self.semantic
    }

    /// Texture slot for `$tex.*` keys, 0 otherwise
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }

    pub fn type_info(&self) -> PropertyTypeInfo {
        self.value.type_info()
    }
}

/// An owned material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub(crate) properties: Vec<MaterialProperty>,
    pub(crate) num_allocated: u32,
}

impl Material {
    /// # Safety
    /// `raw.mProperties` must hold `mNumProperties` valid property pointers.
    pub(crate) unsafe fn from_raw(raw: &sys::aiMaterial) -> Result<Self> {
        let properties = unsafe {
            copy_pointer_array(
                raw.mProperties,
                raw.mNumProperties as usize,
                "material properties",
                |p| MaterialProperty::from_raw(p),
            )?
        };
        Ok(Self {
            properties,
            num_allocated: raw.mNumAllocated,
        })
    }

    /// All properties in source order, duplicates included
    pub fn properties(&self) -> &[MaterialProperty] {
        &self.properties
    }

    /// Capacity of the native property array
    pub fn num_allocated(&self) -> u32 {
        self.num_allocated
    }

    /// Last property with `key`, whatever its semantic and index
    pub fn property(&self, key: &str) -> Option<&MaterialProperty> {
        self.properties.iter().rev().find(|p| p.key == key)
    }

    /// Property at exactly (key, semantic, index)
    pub fn property_with(&self, key: &str, semantic: u32, index: u32) -> Option<&MaterialProperty> {
        self.properties
            .iter()
            .rev()
            .find(|p| p.key == key && p.semantic == semantic && p.index == index)
    }

    /// Distinct keys in order of first appearance
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for p in &self.properties {
            if !keys.contains(&p.key.as_str()) {
                keys.push(&p.key);
            }
        }
        keys
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.property(key)?.value.as_str()
    }

    pub fn get_float_array(&self, key: &str) -> Option<Vec<f32>> {
        self.property(key)?.value.as_floats()
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.get_float_array(key)?.first().copied()
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.property(key)?.value.as_integers()?.first().copied()
    }

    /// RGBA from three or four floats; alpha defaults to 1
    pub fn get_color(&self, key: &str) -> Option<Color4D> {
        match self.get_float_array(key)?.as_slice() {
            [r, g, b] => Some(Color4D::new(*r, *g, *b, 1.0)),
            [r, g, b, a, ..] => Some(Color4D::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    fn get_color3(&self, key: &str) -> Option<Color3D> {
        self.get_color(key).map(|c| c.truncate())
    }

    /// Empty when the material has no name property
    pub fn name(&self) -> &str {
        self.get_string(material_keys::NAME).unwrap_or_default()
    }

    pub fn diffuse_color(&self) -> Option<Color3D> {
        self.get_color3(material_keys::COLOR_DIFFUSE)
    }

    pub fn specular_color(&self) -> Option<Color3D> {
        self.get_color3(material_keys::COLOR_SPECULAR)
    }

    pub fn ambient_color(&self) -> Option<Color3D> {
        self.get_color3(material_keys::COLOR_AMBIENT)
    }

    pub fn emissive_color(&self) -> Option<Color3D> {
        self.get_color3(material_keys::COLOR_EMISSIVE)
    }

    pub fn shininess(&self) -> Option<f32> {
        self.get_float(material_keys::SHININESS)
    }

    pub fn opacity(&self) -> Option<f32> {
        self.get_float(material_keys::OPACITY)
    }

    pub fn refraction_index(&self) -> Option<f32> {
        self.get_float(material_keys::REFRACTI)
    }

    /// Raw `aiShadingMode` value
    pub fn shading_model(&self) -> Option<i32> {
        self.get_integer(material_keys::SHADING_MODEL)
    }

    pub fn two_sided(&self) -> bool {
        self.get_integer(material_keys::TWOSIDED).is_some_and(|v| v != 0)
    }

    /// Number of texture slots of `texture_type` (highest `$tex.file` index + 1)
    pub fn texture_count(&self, texture_type: TextureType) -> usize {
        let semantic = texture_type.as_raw();
        self.properties
            .iter()
            .filter(|p| p.key == material_keys::TEXTURE_FILE && p.semantic == semantic)
            .map(|p| p.index as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Texture slot description, `None` when the slot has no file
    pub fn texture(&self, texture_type: TextureType, index: u32) -> Option<TextureInfo> {
        let semantic = texture_type.as_raw();
        let slot = |key: &str| self.property_with(key, semantic, index).map(|p| &p.value);
        let slot_int = |key: &str| slot(key).and_then(|v| v.as_integers()?.first().copied());

        let path = slot(material_keys::TEXTURE_FILE)?.as_str()?.to_string();
        let map_mode = |key: &str| {
            slot_int(key)
                .map(|v| TextureMapMode::from(v as u32))
                .unwrap_or(TextureMapMode::Wrap)
        };
        Some(TextureInfo {
            path,
            mapping: slot_int(material_keys::TEXTURE_MAPPING)
                .map(|v| TextureMapping::from(v as u32))
                .unwrap_or(TextureMapping::UV),
            uv_index: slot_int(material_keys::TEXTURE_UVWSRC).unwrap_or(0).max(0) as u32,
            blend_factor: slot(material_keys::TEXTURE_BLEND)
                .and_then(|v| v.as_floats()?.first().copied())
                .unwrap_or(1.0),
            operation: slot_int(material_keys::TEXTURE_OP).map(|v| TextureOperation::from(v as u32)),
            map_modes: [
                map_mode(material_keys::TEXTURE_MAPMODE_U),
                map_mode(material_keys::TEXTURE_MAPMODE_V),
                map_mode(material_keys::TEXTURE_MAPMODE_W),
            ],
        })
    }
}

/// Implement equality and hashing on the raw native value, so an `Other`
/// holding a known value equals the named variant.
macro_rules! raw_value_eq {
    ($($ty:ty),+) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.as_raw() == other.as_raw()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.as_raw().hash(state);
            }
        }
    )+};
}

raw_value_eq!(TextureType, TextureMapping, TextureOperation, TextureMapMode);

/// Texture semantic a material slot is used for
///
/// `Other` carries values without a named variant. [`From<u32>`] never builds
/// it for a known value, and equality compares raw values either way.
#[derive(Debug, Clone, Copy)]
pub enum TextureType {
    None,
    Diffuse,
    Specular,
    Ambient,
    Emissive,
    Height,
    Normals,
    Shininess,
    Opacity,
    Displacement,
    Lightmap,
    Reflection,
    BaseColor,
    NormalCamera,
    EmissionColor,
    Metalness,
    DiffuseRoughness,
    AmbientOcclusion,
    Unknown,
    Other(u32),
}

impl TextureType {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::None => sys::aiTextureType_aiTextureType_NONE,
            Self::Diffuse => sys::aiTextureType_aiTextureType_DIFFUSE,
            Self::Specular => sys::aiTextureType_aiTextureType_SPECULAR,
            Self::Ambient => sys::aiTextureType_aiTextureType_AMBIENT,
            Self::Emissive => sys::aiTextureType_aiTextureType_EMISSIVE,
            Self::Height => sys::aiTextureType_aiTextureType_HEIGHT,
            Self::Normals => sys::aiTextureType_aiTextureType_NORMALS,
            Self::Shininess => sys::aiTextureType_aiTextureType_SHININESS,
            Self::Opacity => sys::aiTextureType_aiTextureType_OPACITY,
            Self::Displacement => sys::aiTextureType_aiTextureType_DISPLACEMENT,
            Self::Lightmap => sys::aiTextureType_aiTextureType_LIGHTMAP,
            Self::Reflection => sys::aiTextureType_aiTextureType_REFLECTION,
            Self::BaseColor => sys::aiTextureType_aiTextureType_BASE_COLOR,
            Self::NormalCamera => sys::aiTextureType_aiTextureType_NORMAL_CAMERA,
            Self::EmissionColor => sys::aiTextureType_aiTextureType_EMISSION_COLOR,
            Self::Metalness => sys::aiTextureType_aiTextureType_METALNESS,
            Self::DiffuseRoughness => sys::aiTextureType_aiTextureType_DIFFUSE_ROUGHNESS,
            Self::AmbientOcclusion => sys::aiTextureType_aiTextureType_AMBIENT_OCCLUSION,
            Self::Unknown => sys::aiTextureType_aiTextureType_UNKNOWN,
            Self::Other(v) => v,
        }
    }
}

impl From<u32> for TextureType {
    fn from(value: u32) -> Self {
        match value {
            sys::aiTextureType_aiTextureType_NONE => Self::None,
            sys::aiTextureType_aiTextureType_DIFFUSE => Self::Diffuse,
            sys::aiTextureType_aiTextureType_SPECULAR => Self::Specular,
            sys::aiTextureType_aiTextureType_AMBIENT => Self::Ambient,
            sys::aiTextureType_aiTextureType_EMISSIVE => Self::Emissive,
            sys::aiTextureType_aiTextureType_HEIGHT => Self::Height,
            sys::aiTextureType_aiTextureType_NORMALS => Self::Normals,
            sys::aiTextureType_aiTextureType_SHININESS => Self::Shininess,
            sys::aiTextureType_aiTextureType_OPACITY => Self::Opacity,
            sys::aiTextureType_aiTextureType_DISPLACEMENT => Self::Displacement,
            sys::aiTextureType_aiTextureType_LIGHTMAP => Self::Lightmap,
            sys::aiTextureType_aiTextureType_REFLECTION => Self::Reflection,
            sys::aiTextureType_aiTextureType_BASE_COLOR => Self::BaseColor,
            sys::aiTextureType_aiTextureType_NORMAL_CAMERA => Self::NormalCamera,
            sys::aiTextureType_aiTextureType_EMISSION_COLOR => Self::EmissionColor,
            sys::aiTextureType_aiTextureType_METALNESS => Self::Metalness,
            sys::aiTextureType_aiTextureType_DIFFUSE_ROUGHNESS => Self::DiffuseRoughness,
            sys::aiTextureType_aiTextureType_AMBIENT_OCCLUSION => Self::AmbientOcclusion,
            sys::aiTextureType_aiTextureType_UNKNOWN => Self::Unknown,
            other => Self::Other(other),
        }
    }
}

/// How texture coordinates are generated
#[derive(Debug, Clone, Copy)]
pub enum TextureMapping {
    UV,
    Sphere,
    Cylinder,
    Box,
    Plane,
    Other(u32),
}

impl TextureMapping {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::UV => sys::aiTextureMapping_aiTextureMapping_UV,
            Self::Sphere => sys::aiTextureMapping_aiTextureMapping_SPHERE,
            Self::Cylinder => sys::aiTextureMapping_aiTextureMapping_CYLINDER,
            Self::Box => sys::aiTextureMapping_aiTextureMapping_BOX,
            Self::Plane => sys::aiTextureMapping_aiTextureMapping_PLANE,
            Self::Other(v) => v,
        }
    }
}

impl From<u32> for TextureMapping {
    fn from(value: u32) -> Self {
        match value {
            sys::aiTextureMapping_aiTextureMapping_UV => Self::UV,
            sys::aiTextureMapping_aiTextureMapping_SPHERE => Self::Sphere,
            sys::aiTextureMapping_aiTextureMapping_CYLINDER => Self::Cylinder,
            sys::aiTextureMapping_aiTextureMapping_BOX => Self::Box,
            sys::aiTextureMapping_aiTextureMapping_PLANE => Self::Plane,
            other => Self::Other(other),
        }
    }
}

/// How a texture layer combines with the one below it
#[derive(Debug, Clone, Copy)]
pub enum TextureOperation {
    Multiply,
    Add,
    Subtract,
    Divide,
    SmoothAdd,
    SignedAdd,
    Other(u32),
}

impl TextureOperation {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Multiply => sys::aiTextureOp_aiTextureOp_Multiply,
            Self::Add => sys::aiTextureOp_aiTextureOp_Add,
            Self::Subtract => sys::aiTextureOp_aiTextureOp_Subtract,
            Self::Divide => sys::aiTextureOp_aiTextureOp_Divide,
            Self::SmoothAdd => sys::aiTextureOp_aiTextureOp_SmoothAdd,
            Self::SignedAdd => sys::aiTextureOp_aiTextureOp_SignedAdd,
            Self::Other(v) => v,
        }
    }
}

impl From<u32> for TextureOperation {
    fn from(value: u32) -> Self {
        match value {
            sys::aiTextureOp_aiTextureOp_Multiply => Self::Multiply,
            sys::aiTextureOp_aiTextureOp_Add => Self::Add,
            sys::aiTextureOp_aiTextureOp_Subtract => Self::Subtract,
            sys::aiTextureOp_aiTextureOp_Divide => Self::Divide,
            sys::aiTextureOp_aiTextureOp_SmoothAdd => Self::SmoothAdd,
            sys::aiTextureOp_aiTextureOp_SignedAdd => Self::SignedAdd,
            other => Self::Other(other),
        }
    }
}

/// Addressing outside [0, 1]
#[derive(Debug, Clone, Copy)]
pub enum TextureMapMode {
    Wrap,
    Clamp,
    Mirror,
    Decal,
    Other(u32),
}

impl TextureMapMode {
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Wrap => sys::aiTextureMapMode_aiTextureMapMode_Wrap,
            Self::Clamp => sys::aiTextureMapMode_aiTextureMapMode_Clamp,
            Self::Mirror => sys::aiTextureMapMode_aiTextureMapMode_Mirror,
            Self::Decal => sys::aiTextureMapMode_aiTextureMapMode_Decal,
            Self::Other(v) => v,
        }
    }
}

impl From<u32> for TextureMapMode {
    fn from(value: u32) -> Self {
        match value {
            sys::aiTextureMapMode_aiTextureMapMode_Wrap => Self::Wrap,
            sys::aiTextureMapMode_aiTextureMapMode_Clamp => Self::Clamp,
            sys::aiTextureMapMode_aiTextureMapMode_Mirror => Self::Mirror,
            sys::aiTextureMapMode_aiTextureMapMode_Decal => Self::Decal,
            other => Self::Other(other),
        }
    }
}

/// A texture slot of a material
#[derive(Debug, Clone, PartialEq)]
pub struct TextureInfo {
    /// File path, or `*N` for the N-th embedded texture
    pub path: String,
    pub mapping: TextureMapping,
    pub uv_index: u32,
    pub blend_factor: f32,
    pub operation: Option<TextureOperation>,
    /// U, V, W
    pub map_modes: [TextureMapMode; 3],
}

impl TextureInfo {
    /// Index into [`crate::Scene::textures`] for `*N` paths
    pub fn embedded_index(&self) -> Option<usize> {
        self.path.strip_prefix('*')?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn sample() -> Material {
        let raw = material(vec![
            property(material_keys::NAME, sys::aiPropertyTypeInfo_aiPTI_String, string_bytes("first")),
            property(
                material_keys::COLOR_DIFFUSE,
                sys::aiPropertyTypeInfo_aiPTI_Float,
                float_bytes(&[1.0, 0.0, 0.0]),
            ),
            property(material_keys::TWOSIDED, sys::aiPropertyTypeInfo_aiPTI_Integer, int_bytes(&[1])),
            property(material_keys::SHININESS, sys::aiPropertyTypeInfo_aiPTI_Integer, int_bytes(&[32])),
            property_at(
                material_keys::TEXTURE_FILE,
                sys::aiTextureType_aiTextureType_DIFFUSE,
                1,
                sys::aiPropertyTypeInfo_aiPTI_String,
                string_bytes("*0"),
            ),
            property_at(
                material_keys::TEXTURE_UVWSRC,
                sys::aiTextureType_aiTextureType_DIFFUSE,
                1,
                sys::aiPropertyTypeInfo_aiPTI_Integer,
                int_bytes(&[2]),
            ),
            property(material_keys::NAME, sys::aiPropertyTypeInfo_aiPTI_String, string_bytes("second")),
            property("$raw.blob", 0x99, vec![1, 2, 3]),
        ]);
        unsafe { Material::from_raw(&raw) }.unwrap()
    }

    #[test]
    fn test_duplicate_keys_last_wins_but_all_are_kept() {
        let material = sample();
        assert_eq!(material.name(), "second");
        assert_eq!(material.properties().len(), 8);
        assert_eq!(material.properties()[0].value(), &PropertyValue::String("first".into()));
        assert_eq!(material.keys().iter().filter(|k| **k == material_keys::NAME).count(), 1);
        assert_eq!(material.num_allocated(), 8);
    }

    #[test]
    fn test_typed_getters() {
        let material = sample();
        assert_eq!(material.diffuse_color(), Some(Color3D::new(1.0, 0.0, 0.0)));
        assert_eq!(
            material.get_color(material_keys::COLOR_DIFFUSE),
            Some(Color4D::new(1.0, 0.0, 0.0, 1.0))
        );
        assert!(material.two_sided());
        // Stored as integer, read back as float the way Assimp converts it.
        assert_eq!(material.shininess(), Some(32.0));
        assert_eq!(material.opacity(), None);
        assert_eq!(
            material.property("$raw.blob").unwrap().value(),
            &PropertyValue::Buffer(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_texture_slots() {
        let material = sample();
        assert_eq!(material.texture_count(TextureType::Diffuse), 2);
        assert_eq!(material.texture_count(TextureType::Normals), 0);
        assert!(material.texture(TextureType::Diffuse, 0).is_none());

        let info = material.texture(TextureType::Diffuse, 1).unwrap();
        assert_eq!(info.path, "*0");
        assert_eq!(info.embedded_index(), Some(0));
        assert_eq!(info.uv_index, 2);
        assert_eq!(info.mapping, TextureMapping::UV);
        assert_eq!(info.map_modes, [TextureMapMode::Wrap; 3]);
        assert_eq!(info.blend_factor, 1.0);
    }

    #[test]
    fn test_malformed_buffers_are_rejected() {
        let bad_float = material(vec![property("$x", sys::aiPropertyTypeInfo_aiPTI_Float, vec![0; 6])]);
        assert!(matches!(
            unsafe { Material::from_raw(&bad_float) },
            Err(Error::InvalidScene { .. })
        ));

        let mut long = string_bytes("abc");
        long[0] = 200;
        let bad_string = material(vec![property("$s", sys::aiPropertyTypeInfo_aiPTI_String, long)]);
        assert!(unsafe { Material::from_raw(&bad_string) }.is_err());
    }

    #[test]
    fn test_texture_type_round_trips_unknown_values() {
        assert_eq!(TextureType::from(1), TextureType::Diffuse);
        assert_eq!(TextureType::from(26).as_raw(), 26);
        assert_eq!(TextureType::Other(26), TextureType::from(26));
    }

    #[test]
    fn test_other_with_known_value_equals_named_variant() {
        use std::collections::HashSet;

        assert_eq!(TextureType::Other(sys::aiTextureType_aiTextureType_DIFFUSE), TextureType::Diffuse);
        assert_ne!(TextureType::Other(99), TextureType::Diffuse);
        let set: HashSet<_> = [TextureType::Diffuse, TextureType::Other(1)].into_iter().collect();
        assert_eq!(set.len(), 1);

        assert_eq!(TextureMapMode::Other(sys::aiTextureMapMode_aiTextureMapMode_Clamp), TextureMapMode::Clamp);
        assert_eq!(TextureOperation::Other(sys::aiTextureOp_aiTextureOp_Add), TextureOperation::Add);
        assert_eq!(TextureMapping::Other(sys::aiTextureMapping_aiTextureMapping_UV), TextureMapping::UV);
    }
}
