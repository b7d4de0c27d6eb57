//! Scene cameras

use serde::{Deserialize, Serialize};

use crate::{
    sys,
    types::{Matrix4x4, Vector3D, ai_string_to_string, from_ai_vector3d},
};

/// A camera, positioned relative to the node that shares its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub(crate) name: String,
    pub(crate) position: Vector3D,
    pub(crate) up: Vector3D,
    pub(crate) look_at: Vector3D,
    pub(crate) horizontal_fov: f32,
    pub(crate) clip_plane_near: f32,
    pub(crate) clip_plane_far: f32,
    pub(crate) aspect: f32,
    pub(crate) orthographic_width: f32,
}

impl From<&sys::aiCamera> for Camera {
    fn from(raw: &sys::aiCamera) -> Self {
        Self {
            name: ai_string_to_string(&raw.mName),
            position: from_ai_vector3d(raw.mPosition),
            up: from_ai_vector3d(raw.mUp),
            look_at: from_ai_vector3d(raw.mLookAt),
            horizontal_fov: raw.mHorizontalFOV,
            clip_plane_near: raw.mClipPlaneNear,
            clip_plane_far: raw.mClipPlaneFar,
            aspect: raw.mAspect,
            orthographic_width: raw.mOrthographicWidth,
        }
    }
}

impl Camera {
    /// Name of the node carrying this camera
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vector3D {
        self.position
    }

    pub fn up(&self) -> Vector3D {
        self.up
    }

    /// Viewing direction, not a target point
    pub fn look_at(&self) -> Vector3D {
        self.look_at
    }

    /// Half horizontal field of view, in radians
    pub fn horizontal_fov(&self) -> f32 {
        self.horizontal_fov
    }

    pub fn clip_plane_near(&self) -> f32 {
        self.clip_plane_near
    }

    pub fn clip_plane_far(&self) -> f32 {
        self.clip_plane_far
    }

    /// Width over height, 0 when unknown
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Half width of the view volume, 0 for perspective cameras
    pub fn orthographic_width(&self) -> f32 {
        self.orthographic_width
    }

    pub fn is_orthographic(&self) -> bool {
        self.orthographic_width > 0.0
    }

    /// Right-handed view matrix in the camera's local space
    pub fn view_matrix(&self) -> Matrix4x4 {
        Matrix4x4::look_to_rh(self.position, self.look_at, self.up)
    }
}
