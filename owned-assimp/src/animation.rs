//! Animation clips and their keyframe channels

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    ffi::{copy_pointer_array, copy_required},
    sys,
    types::{Quaternion, Vector3D, ai_string_to_string, from_ai_quaternion, from_ai_vector3d},
};

/// Ticks per second assumed when a file leaves it unspecified
pub const DEFAULT_TICKS_PER_SECOND: f64 = 25.0;

/// Interpolation method for animation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimInterpolation {
    /// No interpolation, hold the previous key
    Step,
    Linear,
    /// Spherical linear interpolation (for quaternions)
    SphericalLinear,
    CubicSpline,
    /// Unknown interpolation method with raw value
    Unknown(u32),
}

impl From<u32> for AnimInterpolation {
    fn from(v: u32) -> Self {
        match v {
            sys::aiAnimInterpolation_aiAnimInterpolation_Step => Self::Step,
            sys::aiAnimInterpolation_aiAnimInterpolation_Linear => Self::Linear,
            sys::aiAnimInterpolation_aiAnimInterpolation_Spherical_Linear => Self::SphericalLinear,
            sys::aiAnimInterpolation_aiAnimInterpolation_Cubic_Spline => Self::CubicSpline,
            other => Self::Unknown(other),
        }
    }
}

/// Behaviour outside the key range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimBehaviour {
    /// Use the node's own transformation
    Default,
    /// Hold the boundary key
    Constant,
    /// Extrapolate from the two nearest keys
    Linear,
    /// Repeat the animation cyclically
    Repeat,
    Unknown(u32),
}

impl From<u32> for AnimBehaviour {
    fn from(v: u32) -> Self {
        match v {
            sys::aiAnimBehaviour_aiAnimBehaviour_DEFAULT => Self::Default,
            sys::aiAnimBehaviour_aiAnimBehaviour_CONSTANT => Self::Constant,
            sys::aiAnimBehaviour_aiAnimBehaviour_LINEAR => Self::Linear,
            sys::aiAnimBehaviour_aiAnimBehaviour_REPEAT => Self::Repeat,
            other => Self::Unknown(other),
        }
    }
}

/// A keyframe with a 3D vector value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorKey {
    /// Time in ticks
    pub time: f64,
    pub value: Vector3D,
    pub interpolation: AnimInterpolation,
}

impl From<&sys::aiVectorKey> for VectorKey {
    fn from(k: &sys::aiVectorKey) -> Self {
        Self {
            time: k.mTime,
            value: from_ai_vector3d(k.mValue),
            interpolation: AnimInterpolation::from(k.mInterpolation),
        }
    }
}

/// A keyframe with a rotation value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuaternionKey {
    /// Time in ticks
    pub time: f64,
    pub value: Quaternion,
    pub interpolation: AnimInterpolation,
}

impl From<&sys::aiQuatKey> for QuaternionKey {
    fn from(k: &sys::aiQuatKey) -> Self {
        Self {
            time: k.mTime,
            value: from_ai_quaternion(k.mValue),
            interpolation: AnimInterpolation::from(k.mInterpolation),
        }
    }
}

/// Keyframes for one node's position, rotation and scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAnimation {
    pub(crate) node_name: String,
    pub(crate) position_keys: Vec<VectorKey>,
    pub(crate) rotation_keys: Vec<QuaternionKey>,
    pub(crate) scaling_keys: Vec<VectorKey>,
    pub(crate) pre_state: AnimBehaviour,
    pub(crate) post_state: AnimBehaviour,
}

impl NodeAnimation {
    unsafe fn from_raw(raw: &sys::aiNodeAnim) -> Result<Self> {
        unsafe {
            Ok(Self {
                node_name: ai_string_to_string(&raw.mNodeName),
                position_keys: copy_required(
                    raw.mPositionKeys,
                    raw.mNumPositionKeys as usize,
                    "position keys",
                    |k| VectorKey::from(k),
                )?,
                rotation_keys: copy_required(
                    raw.mRotationKeys,
                    raw.mNumRotationKeys as usize,
                    "rotation keys",
                    |k| QuaternionKey::from(k),
                )?,
                scaling_keys: copy_required(
                    raw.mScalingKeys,
                    raw.mNumScalingKeys as usize,
                    "scaling keys",
                    |k| VectorKey::from(k),
                )?,
                pre_state: AnimBehaviour::from(raw.mPreState),
                post_state: AnimBehaviour::from(raw.mPostState),
            })
        }
    }

    /// Name of the affected node
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn position_keys(&self) -> &[VectorKey] {
        &self.position_keys
    }

    pub fn rotation_keys(&self) -> &[QuaternionKey] {
        &self.rotation_keys
    }

    pub fn scaling_keys(&self) -> &[VectorKey] {
        &self.scaling_keys
    }

    pub fn pre_state(&self) -> AnimBehaviour {
        self.pre_state
    }

    pub fn post_state(&self) -> AnimBehaviour {
        self.post_state
    }
}

/// Keyframe selecting one of a mesh's anim meshes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshKey {
    pub time: f64,
    /// Index into [`crate::Mesh::anim_meshes`]
    pub value: u32,
}

/// Vertex-based animation of one mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshAnimation {
    pub(crate) name: String,
    pub(crate) keys: Vec<MeshKey>,
}

impl MeshAnimation {
    unsafe fn from_raw(raw: &sys::aiMeshAnim) -> Result<Self> {
        let keys = unsafe {
            copy_required(raw.mKeys, raw.mNumKeys as usize, "mesh keys", |k| MeshKey {
                time: k.mTime,
                value: k.mValue,
            })?
        };
        Ok(Self {
            name: ai_string_to_string(&raw.mName),
            keys,
        })
    }

    /// Name of the animated mesh
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[MeshKey] {
        &self.keys
    }
}

/// Morph target weights at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphMeshKey {
    pub time: f64,
    /// Anim mesh indices, parallel to `weights`
    pub values: Vec<u32>,
    pub weights: Vec<f64>,
}

impl MorphMeshKey {
    unsafe fn from_raw(raw: &sys::aiMeshMorphKey) -> Result<Self> {
        let n = raw.mNumValuesAndWeights as usize;
        unsafe {
            Ok(Self {
                time: raw.mTime,
                values: copy_required(raw.mValues, n, "morph key values", |v| *v)?,
                weights: copy_required(raw.mWeights, n, "morph key weights", |w| *w)?,
            })
        }
    }

    /// (anim mesh index, weight) pairs
    pub fn targets(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.values.iter().copied().zip(self.weights.iter().copied())
    }
}

/// Morph target animation of one mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphMeshAnimation {
    pub(crate) name: String,
    pub(crate) keys: Vec<MorphMeshKey>,
}

impl MorphMeshAnimation {
    unsafe fn from_raw(raw: &sys::aiMeshMorphAnim) -> Result<Self> {
        let len = raw.mNumKeys as usize;
        if len > 0 && raw.mKeys.is_null() {
            return Err(crate::Error::invalid_scene(format!(
                "morph keys: null array with {len} elements"
            )));
        }
        // Each key owns nested arrays, so copy them one by one.
        let mut keys = Vec::with_capacity(len);
        for i in 0..len {
            keys.push(unsafe { MorphMeshKey::from_raw(&*raw.mKeys.add(i))? });
        }
        Ok(Self {
            name: ai_string_to_string(&raw.mName),
            keys,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &[MorphMeshKey] {
        &self.keys
    }
}

/// An animation clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub(crate) name: String,
    pub(crate) duration: f64,
    pub(crate) ticks_per_second: f64,
    pub(crate) channels: Vec<NodeAnimation>,
    pub(crate) mesh_channels: Vec<MeshAnimation>,
    pub(crate) morph_mesh_channels: Vec<MorphMeshAnimation>,
}

impl Animation {
    /// # Safety
    /// Every channel array must hold its stated count of valid pointers.
    pub(crate) unsafe fn from_raw(raw: &sys::aiAnimation) -> Result<Self> {
        unsafe {
            Ok(Self {
                name: ai_string_to_string(&raw.mName),
                duration: raw.mDuration,
                ticks_per_second: raw.mTicksPerSecond,
                channels: copy_pointer_array(
                    raw.mChannels,
                    raw.mNumChannels as usize,
                    "animation channels",
                    |c| NodeAnimation::from_raw(c),
                )?,
                mesh_channels: copy_pointer_array(
                    raw.mMeshChannels,
                    raw.mNumMeshChannels as usize,
                    "mesh channels",
                    |c| MeshAnimation::from_raw(c),
                )?,
                morph_mesh_channels: copy_pointer_array(
                    raw.mMorphMeshChannels,
                    raw.mNumMorphMeshChannels as usize,
                    "morph mesh channels",
                    |c| MorphMeshAnimation::from_raw(c),
                )?,
            })
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration in ticks
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Ticks per second as stored in the file, 0 when unspecified
    pub fn raw_ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// Ticks per second, falling back to [`DEFAULT_TICKS_PER_SECOND`]
    pub fn ticks_per_second(&self) -> f64 {
        if self.ticks_per_second != 0.0 {
            self.ticks_per_second
        } else {
            DEFAULT_TICKS_PER_SECOND
        }
    }

    pub fn duration_in_seconds(&self) -> f64 {
        self.duration / self.ticks_per_second()
    }

    pub fn channels(&self) -> &[NodeAnimation] {
        &self.channels
    }

    pub fn mesh_channels(&self) -> &[MeshAnimation] {
        &self.mesh_channels
    }

    pub fn morph_mesh_channels(&self) -> &[MorphMeshAnimation] {
        &self.morph_mesh_channels
    }

    /// First channel animating the node called `node_name`
    pub fn find_channel(&self, node_name: &str) -> Option<&NodeAnimation> {
        self.channels.iter().find(|c| c.node_name == node_name)
    }
}
