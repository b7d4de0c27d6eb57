//! Scene graph mirrors
//!
//! Field order and widths follow `scene.h`, `mesh.h`, `material.h`, `anim.h`,
//! `texture.h`, `camera.h`, `light.h` and `metadata.h` of Assimp 5.3 and later.
//! Enum-typed fields are plain integers; see [`crate::constants`].

use std::os::raw::{c_char, c_uint, c_void};

use crate::constants::{
    AI_MAX_NUMBER_OF_COLOR_SETS, AI_MAX_NUMBER_OF_TEXTURECOORDS, HINTMAXTEXTURELEN,
};
use crate::types::*;

pub type aiPrimitiveType = c_uint;
pub type aiPropertyTypeInfo = c_uint;
pub type aiTextureType = c_uint;
pub type aiLightSourceType = c_uint;
pub type aiAnimBehaviour = c_uint;
pub type aiAnimInterpolation = c_uint;
pub type aiMorphingMethod = c_uint;
pub type aiMetadataType = c_uint;

/// All-zero value: null pointers, zero counts, empty strings.
macro_rules! zeroed_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Default for $ty {
                fn default() -> Self {
                    let mut s = std::mem::MaybeUninit::<Self>::uninit();
                    // SAFETY: every field is an integer, float, raw pointer or array thereof.
                    unsafe {
                        std::ptr::write_bytes(s.as_mut_ptr(), 0, 1);
                        s.assume_init()
                    }
                }
            }
        )*
    };
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiAABB {
    pub mMin: aiVector3D,
    pub mMax: aiVector3D,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiFace {
    pub mNumIndices: c_uint,
    pub mIndices: *mut c_uint,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiVertexWeight {
    pub mVertexId: c_uint,
    pub mWeight: ai_real,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiBone {
    pub mName: aiString,
    pub mNumWeights: c_uint,
    pub mArmature: *mut aiNode,
    pub mNode: *mut aiNode,
    pub mWeights: *mut aiVertexWeight,
    pub mOffsetMatrix: aiMatrix4x4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiAnimMesh {
    pub mName: aiString,
    pub mVertices: *mut aiVector3D,
    pub mNormals: *mut aiVector3D,
    pub mTangents: *mut aiVector3D,
    pub mBitangents: *mut aiVector3D,
    pub mColors: [*mut aiColor4D; AI_MAX_NUMBER_OF_COLOR_SETS],
    pub mTextureCoords: [*mut aiVector3D; AI_MAX_NUMBER_OF_TEXTURECOORDS],
    pub mNumVertices: c_uint,
    pub mWeight: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMesh {
    pub mPrimitiveTypes: c_uint,
    pub mNumVertices: c_uint,
    pub mNumFaces: c_uint,
    pub mVertices: *mut aiVector3D,
    pub mNormals: *mut aiVector3D,
    pub mTangents: *mut aiVector3D,
    pub mBitangents: *mut aiVector3D,
    pub mColors: [*mut aiColor4D; AI_MAX_NUMBER_OF_COLOR_SETS],
    pub mTextureCoords: [*mut aiVector3D; AI_MAX_NUMBER_OF_TEXTURECOORDS],
    pub mNumUVComponents: [c_uint; AI_MAX_NUMBER_OF_TEXTURECOORDS],
    pub mFaces: *mut aiFace,
    pub mNumBones: c_uint,
    pub mBones: *mut *mut aiBone,
    pub mMaterialIndex: c_uint,
    pub mName: aiString,
    pub mNumAnimMeshes: c_uint,
    pub mAnimMeshes: *mut *mut aiAnimMesh,
    pub mMethod: aiMorphingMethod,
    pub mAABB: aiAABB,
    pub mTextureCoordsNames: *mut *mut aiString,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMaterialProperty {
    pub mKey: aiString,
    pub mSemantic: c_uint,
    pub mIndex: c_uint,
    pub mDataLength: c_uint,
    pub mType: aiPropertyTypeInfo,
    pub mData: *mut c_char,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMaterial {
    pub mProperties: *mut *mut aiMaterialProperty,
    pub mNumProperties: c_uint,
    pub mNumAllocated: c_uint,
}

/// Texel in BGRA byte order.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct aiTexel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiTexture {
    pub mWidth: c_uint,
    pub mHeight: c_uint,
    pub achFormatHint: [c_char; HINTMAXTEXTURELEN],
    pub pcData: *mut aiTexel,
    pub mFilename: aiString,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiVectorKey {
    pub mTime: f64,
    pub mValue: aiVector3D,
    pub mInterpolation: aiAnimInterpolation,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiQuatKey {
    pub mTime: f64,
    pub mValue: aiQuaternion,
    pub mInterpolation: aiAnimInterpolation,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiMeshKey {
    pub mTime: f64,
    pub mValue: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMeshMorphKey {
    pub mTime: f64,
    pub mValues: *mut c_uint,
    pub mWeights: *mut f64,
    pub mNumValuesAndWeights: c_uint,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiNodeAnim {
    pub mNodeName: aiString,
    pub mNumPositionKeys: c_uint,
    pub mPositionKeys: *mut aiVectorKey,
    pub mNumRotationKeys: c_uint,
    pub mRotationKeys: *mut aiQuatKey,
    pub mNumScalingKeys: c_uint,
    pub mScalingKeys: *mut aiVectorKey,
    pub mPreState: aiAnimBehaviour,
    pub mPostState: aiAnimBehaviour,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMeshAnim {
    pub mName: aiString,
    pub mNumKeys: c_uint,
    pub mKeys: *mut aiMeshKey,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMeshMorphAnim {
    pub mName: aiString,
    pub mNumKeys: c_uint,
    pub mKeys: *mut aiMeshMorphKey,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiAnimation {
    pub mName: aiString,
    pub mDuration: f64,
    pub mTicksPerSecond: f64,
    pub mNumChannels: c_uint,
    pub mChannels: *mut *mut aiNodeAnim,
    pub mNumMeshChannels: c_uint,
    pub mMeshChannels: *mut *mut aiMeshAnim,
    pub mNumMorphMeshChannels: c_uint,
    pub mMorphMeshChannels: *mut *mut aiMeshMorphAnim,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiCamera {
    pub mName: aiString,
    pub mPosition: aiVector3D,
    pub mUp: aiVector3D,
    pub mLookAt: aiVector3D,
    pub mHorizontalFOV: f32,
    pub mClipPlaneNear: f32,
    pub mClipPlaneFar: f32,
    pub mAspect: f32,
    pub mOrthographicWidth: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiLight {
    pub mName: aiString,
    pub mType: aiLightSourceType,
    pub mPosition: aiVector3D,
    pub mDirection: aiVector3D,
    pub mUp: aiVector3D,
    pub mAttenuationConstant: f32,
    pub mAttenuationLinear: f32,
    pub mAttenuationQuadratic: f32,
    pub mColorDiffuse: aiColor3D,
    pub mColorSpecular: aiColor3D,
    pub mColorAmbient: aiColor3D,
    pub mAngleInnerCone: f32,
    pub mAngleOuterCone: f32,
    pub mSize: aiVector2D,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMetadataEntry {
    pub mType: aiMetadataType,
    pub mData: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiMetadata {
    pub mNumProperties: c_uint,
    pub mKeys: *mut aiString,
    pub mValues: *mut aiMetadataEntry,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiNode {
    pub mName: aiString,
    pub mTransformation: aiMatrix4x4,
    pub mParent: *mut aiNode,
    pub mNumChildren: c_uint,
    pub mChildren: *mut *mut aiNode,
    pub mNumMeshes: c_uint,
    pub mMeshes: *mut c_uint,
    pub mMetaData: *mut aiMetadata,
}

/// Skeletons are not copied; only the pointer width matters here.
#[repr(C)]
#[derive(Debug)]
pub struct aiSkeleton {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiScene {
    pub mFlags: c_uint,
    pub mRootNode: *mut aiNode,
    pub mNumMeshes: c_uint,
    pub mMeshes: *mut *mut aiMesh,
    pub mNumMaterials: c_uint,
    pub mMaterials: *mut *mut aiMaterial,
    pub mNumAnimations: c_uint,
    pub mAnimations: *mut *mut aiAnimation,
    pub mNumTextures: c_uint,
    pub mTextures: *mut *mut aiTexture,
    pub mNumLights: c_uint,
    pub mLights: *mut *mut aiLight,
    pub mNumCameras: c_uint,
    pub mCameras: *mut *mut aiCamera,
    pub mMetaData: *mut aiMetadata,
    pub mName: aiString,
    pub mNumSkeletons: c_uint,
    pub mSkeletons: *mut *mut aiSkeleton,
    pub mPrivate: *mut c_char,
}

/// Byte totals reported by `aiGetMemoryRequirements`.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct aiMemoryInfo {
    pub textures: c_uint,
    pub materials: c_uint,
    pub meshes: c_uint,
    pub nodes: c_uint,
    pub animations: c_uint,
    pub cameras: c_uint,
    pub lights: c_uint,
    pub total: c_uint,
}

pub type aiLogStreamCallback = Option<unsafe extern "C" fn(message: *const c_char, user: *mut c_char)>;

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct aiLogStream {
    pub callback: aiLogStreamCallback,
    pub user: *mut c_char,
}

/// Opaque handle returned by `aiCreatePropertyStore`.
#[repr(C)]
#[derive(Debug)]
pub struct aiPropertyStore {
    pub sentinel: c_char,
}

/// Custom IO is not used; only pointer identity is needed.
#[repr(C)]
#[derive(Debug)]
pub struct aiFileIO {
    _unused: [u8; 0],
}

zeroed_default!(
    aiFace,
    aiBone,
    aiAnimMesh,
    aiMesh,
    aiMaterialProperty,
    aiMaterial,
    aiTexture,
    aiMeshMorphKey,
    aiNodeAnim,
    aiMeshAnim,
    aiMeshMorphAnim,
    aiAnimation,
    aiCamera,
    aiLight,
    aiMetadataEntry,
    aiMetadata,
    aiNode,
    aiScene,
    aiLogStream,
);
