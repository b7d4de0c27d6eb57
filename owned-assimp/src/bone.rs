//! Skinning bones and vertex weights

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    sys,
    types::{Matrix4x4, ai_string_to_string, from_ai_matrix4x4},
};

/// Influence of a bone on one vertex
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexWeight {
    pub vertex_id: u32,
    pub weight: f32,
}

impl VertexWeight {
    pub fn new(vertex_id: u32, weight: f32) -> Self {
        Self { vertex_id, weight }
    }
}

/// A bone: named joint with per-vertex weights and a bind-pose offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bone {
    pub(crate) name: String,
    pub(crate) weights: Vec<VertexWeight>,
    pub(crate) offset_matrix: Matrix4x4,
    pub(crate) node_name: Option<String>,
    pub(crate) armature_name: Option<String>,
}

impl Bone {
    /// # Safety
    /// `raw.mWeights` must hold `mNumWeights` elements; `mNode` and
    /// `mArmature` must each be null or valid.
    pub(crate) unsafe fn from_raw(raw: &sys::aiBone) -> Result<Self> {
        let weights = unsafe {
            crate::ffi::copy_required(raw.mWeights, raw.mNumWeights as usize, "bone weights", |w| {
                VertexWeight::new(w.mVertexId, w.mWeight)
            })?
        };
        // Only the names are kept; the pointers reference the native node graph.
        let node_name = unsafe { raw.mNode.as_ref() }.map(|n| ai_string_to_string(&n.mName));
        let armature_name =
            unsafe { raw.mArmature.as_ref() }.map(|n| ai_string_to_string(&n.mName));

        Ok(Self {
            name: ai_string_to_string(&raw.mName),
            weights,
            offset_matrix: from_ai_matrix4x4(raw.mOffsetMatrix),
            node_name,
            armature_name,
        })
    }

    /// Name of the node this bone animates
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weights(&self) -> &[VertexWeight] {
        &self.weights
    }

    /// Mesh space to bone space in bind pose
    pub fn offset_matrix(&self) -> Matrix4x4 {
        self.offset_matrix
    }

    /// Set when `POPULATE_ARMATURE_DATA` ran
    pub fn node_name(&self) -> Option<&str> {
        self.node_name.as_deref()
    }

    pub fn armature_name(&self) -> Option<&str> {
        self.armature_name.as_deref()
    }

    /// Sum of weights this bone applies to `vertex_id`
    pub fn weight_for_vertex(&self, vertex_id: u32) -> f32 {
        self.weights
            .iter()
            .filter(|w| w.vertex_id == vertex_id)
            .map(|w| w.weight)
            .sum()
    }

    pub fn affects_vertex(&self, vertex_id: u32) -> bool {
        self.weights.iter().any(|w| w.vertex_id == vertex_id)
    }

    pub fn max_weight(&self) -> f32 {
        self.weights.iter().map(|w| w.weight).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_bone_copy() {
        let joint = node("joint", vec![], vec![]);
        let raw = sys::aiBone {
            mName: ai_str("joint"),
            mNumWeights: 3,
            mWeights: leak_slice(vec![
                sys::aiVertexWeight { mVertexId: 0, mWeight: 0.25 },
                sys::aiVertexWeight { mVertexId: 2, mWeight: 1.0 },
                sys::aiVertexWeight { mVertexId: 0, mWeight: 0.5 },
            ]),
            mNode: joint,
            mOffsetMatrix: sys::aiMatrix4x4::translation(0.0, -1.0, 0.0),
            ..Default::default()
        };
        let bone = unsafe { Bone::from_raw(&raw) }.unwrap();

        assert_eq!(bone.name(), "joint");
        assert_eq!(bone.weights().len(), 3);
        assert_eq!(bone.weight_for_vertex(0), 0.75);
        assert!(bone.affects_vertex(2));
        assert!(!bone.affects_vertex(1));
        assert_eq!(bone.max_weight(), 1.0);
        assert_eq!(bone.node_name(), Some("joint"));
        assert_eq!(bone.armature_name(), None);
        assert_eq!(bone.offset_matrix().w_axis.y, -1.0);
    }
}
