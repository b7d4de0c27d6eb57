//! Typed metadata copied from scenes and nodes

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    sys,
    types::{Vector3D, ai_string_to_string, from_ai_vector3d},
};

/// Common metadata keys used across different file formats
pub mod common_metadata {
    /// Name of the importer which loaded the source asset.
    pub const SOURCE_FORMAT: &str = "SourceAsset_Format";
    /// Version of the source asset, if the format records one.
    pub const SOURCE_FORMAT_VERSION: &str = "SourceAsset_FormatVersion";
    pub const SOURCE_GENERATOR: &str = "SourceAsset_Generator";
    pub const SOURCE_COPYRIGHT: &str = "SourceAsset_Copyright";
    /// Up axis index (0 = X, 1 = Y, 2 = Z) for formats that store one.
    pub const UP_AXIS: &str = "UpAxis";
    pub const UNIT_SCALE_FACTOR: &str = "UnitScaleFactor";
}

/// A metadata value, decoded by its native type tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataEntry {
    Bool(bool),
    Int32(i32),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    Vector3D(Vector3D),
    Metadata(Metadata),
    Int64(i64),
    UInt32(u32),
    /// A type tag this crate does not know; the payload is not read.
    Unknown(u32),
}

impl MetadataEntry {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataEntry::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Any integer variant that fits in an `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetadataEntry::Int32(v) => Some(i64::from(*v)),
            MetadataEntry::UInt32(v) => Some(i64::from(*v)),
            MetadataEntry::Int64(v) => Some(*v),
            MetadataEntry::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Either float variant, widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataEntry::Float(v) => Some(f64::from(*v)),
            MetadataEntry::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataEntry::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector3d(&self) -> Option<Vector3D> {
        match self {
            MetadataEntry::Vector3D(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_metadata(&self) -> Option<&Metadata> {
        match self {
            MetadataEntry::Metadata(v) => Some(v),
            _ => None,
        }
    }
}

/// Ordered key/value metadata
///
/// Source order is kept; [`Metadata::get`] returns the first entry for a key,
/// matching `aiMetadata::Get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<(String, MetadataEntry)>,
}

impl Metadata {
    /// Copy a native metadata block; null yields an empty collection.
    ///
    /// # Safety
    /// `ptr` must be null or point to a valid `aiMetadata` whose arrays hold
    /// `mNumProperties` elements.
    pub(crate) unsafe fn from_raw(ptr: *const sys::aiMetadata) -> Result<Self> {
        let Some(raw) = (unsafe { ptr.as_ref() }) else {
            return Ok(Self::default());
        };
        let len = raw.mNumProperties as usize;
        let keys = unsafe { crate::ffi::copy_required(raw.mKeys, len, "metadata keys", ai_string_to_string)? };
        let values = unsafe {
            crate::ffi::copy_required(raw.mValues, len, "metadata values", |entry| *entry)?
        };

        let mut entries = Vec::with_capacity(len);
        for (key, entry) in keys.into_iter().zip(values) {
            let value = unsafe { Self::read_entry(&key, &entry)? };
            entries.push((key, value));
        }
        Ok(Self { entries })
    }

    unsafe fn read_entry(key: &str, entry: &sys::aiMetadataEntry) -> Result<MetadataEntry> {
        let data = entry.mData;
        if data.is_null() {
            return Err(Error::invalid_scene(format!("metadata `{key}` has no value")));
        }
        // Values are heap allocated by Assimp but may not be aligned for every type.
        let value = unsafe {
            match entry.mType {
                sys::aiMetadataType_AI_BOOL => MetadataEntry::Bool(data.cast::<u8>().read() != 0),
                sys::aiMetadataType_AI_INT32 => {
                    MetadataEntry::Int32(data.cast::<i32>().read_unaligned())
                }
                sys::aiMetadataType_AI_UINT64 => {
                    MetadataEntry::UInt64(data.cast::<u64>().read_unaligned())
                }
                sys::aiMetadataType_AI_FLOAT => {
                    MetadataEntry::Float(data.cast::<f32>().read_unaligned())
                }
                sys::aiMetadataType_AI_DOUBLE => {
                    MetadataEntry::Double(data.cast::<f64>().read_unaligned())
                }
                sys::aiMetadataType_AI_AISTRING => MetadataEntry::String(ai_string_to_string(
                    &data.cast::<sys::aiString>().read_unaligned(),
                )),
                sys::aiMetadataType_AI_AIVECTOR3D => MetadataEntry::Vector3D(from_ai_vector3d(
                    data.cast::<sys::aiVector3D>().read_unaligned(),
                )),
                sys::aiMetadataType_AI_AIMETADATA => MetadataEntry::Metadata(Self::from_raw(
                    data.cast::<sys::aiMetadata>(),
                )?),
                sys::aiMetadataType_AI_INT64 => {
                    MetadataEntry::Int64(data.cast::<i64>().read_unaligned())
                }
                sys::aiMetadataType_AI_UINT32 => {
                    MetadataEntry::UInt32(data.cast::<u32>().read_unaligned())
                }
                other => MetadataEntry::Unknown(other),
            }
        };
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&MetadataEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over all key-value pairs in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn entry<T>(ty: u32, value: T) -> sys::aiMetadataEntry {
        sys::aiMetadataEntry {
            mType: ty,
            mData: leak(value).cast(),
        }
    }

    #[test]
    fn test_null_metadata_is_empty() {
        let metadata = unsafe { Metadata::from_raw(std::ptr::null()) }.unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_typed_entries_copy_in_order() {
        let raw = sys::aiMetadata {
            mNumProperties: 4,
            mKeys: leak_slice(vec![
                ai_str(common_metadata::SOURCE_FORMAT),
                ai_str(common_metadata::UP_AXIS),
                ai_str(common_metadata::UNIT_SCALE_FACTOR),
                ai_str("Custom"),
            ]),
            mValues: leak_slice(vec![
                entry(sys::aiMetadataType_AI_AISTRING, ai_str("Wavefront Object")),
                entry(sys::aiMetadataType_AI_INT32, 1i32),
                entry(sys::aiMetadataType_AI_DOUBLE, 0.01f64),
                entry(42, 0u8),
            ]),
        };
        let metadata = unsafe { Metadata::from_raw(&raw) }.unwrap();

        assert_eq!(metadata.len(), 4);
        assert_eq!(
            metadata.keys().collect::<Vec<_>>(),
            ["SourceAsset_Format", "UpAxis", "UnitScaleFactor", "Custom"]
        );
        assert_eq!(metadata.get_str(common_metadata::SOURCE_FORMAT), Some("Wavefront Object"));
        assert_eq!(metadata.get_i64(common_metadata::UP_AXIS), Some(1));
        assert_eq!(metadata.get_f64(common_metadata::UNIT_SCALE_FACTOR), Some(0.01));
        assert_eq!(metadata.get("Custom"), Some(&MetadataEntry::Unknown(42)));
    }

    #[test]
    fn test_null_value_is_invalid_scene() {
        let raw = sys::aiMetadata {
            mNumProperties: 1,
            mKeys: leak_slice(vec![ai_str("broken")]),
            mValues: leak_slice(vec![sys::aiMetadataEntry {
                mType: sys::aiMetadataType_AI_INT32,
                mData: std::ptr::null_mut(),
            }]),
        };
        let err = unsafe { Metadata::from_raw(&raw) }.unwrap_err();
        assert!(matches!(err, Error::InvalidScene { .. }));
    }
}
