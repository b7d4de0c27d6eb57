//! Axis-aligned bounding boxes
//!
//! Assimp only fills a mesh's box when [`crate::PostProcessSteps::GEN_BOUNDING_BOXES`]
//! is requested; otherwise the copied box is all zeros.

use serde::{Deserialize, Serialize};

use crate::{
    sys,
    types::{Matrix4x4, Vector3D, from_ai_vector3d},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: Vector3D,
    pub max: Vector3D,
}

impl AABB {
    pub fn new(min: Vector3D, max: Vector3D) -> Self {
        Self { min, max }
    }

    /// A box with `min > max`, which any point expands into a real box.
    pub fn empty() -> Self {
        Self {
            min: Vector3D::splat(f32::INFINITY),
            max: Vector3D::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point; empty for no points.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector3D>,
    {
        points.into_iter().fold(Self::empty(), |mut aabb, p| {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
            aabb
        })
    }

    pub(crate) fn from_raw(raw: &sys::aiAABB) -> Self {
        Self::new(from_ai_vector3d(raw.mMin), from_ai_vector3d(raw.mMax))
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// True for the all-zero box Assimp leaves when bounds were not generated.
    pub fn is_unset(&self) -> bool {
        self.min == Vector3D::ZERO && self.max == Vector3D::ZERO
    }

    pub fn center(&self) -> Vector3D {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3D {
        if self.is_empty() {
            Vector3D::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn contains_point(&self, point: Vector3D) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn corners(&self) -> [Vector3D; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vector3D::new(a.x, a.y, a.z),
            Vector3D::new(b.x, a.y, a.z),
            Vector3D::new(a.x, b.y, a.z),
            Vector3D::new(b.x, b.y, a.z),
            Vector3D::new(a.x, a.y, b.z),
            Vector3D::new(b.x, a.y, b.z),
            Vector3D::new(a.x, b.y, b.z),
            Vector3D::new(b.x, b.y, b.z),
        ]
    }

    /// Box around the eight transformed corners.
    pub fn transformed(&self, matrix: &Matrix4x4) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::from_points(self.corners().map(|c| matrix.transform_point3(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let aabb = AABB::from_points([
            Vector3D::new(-1.0, 0.0, 2.0),
            Vector3D::new(1.0, 3.0, -2.0),
        ]);
        assert_eq!(aabb.min, Vector3D::new(-1.0, 0.0, -2.0));
        assert_eq!(aabb.max, Vector3D::new(1.0, 3.0, 2.0));
        assert_eq!(aabb.center(), Vector3D::new(0.0, 1.5, 0.0));
        assert!(aabb.contains_point(Vector3D::ZERO));
        assert!(!aabb.contains_point(Vector3D::splat(5.0)));
    }

    #[test]
    fn test_empty_and_unset() {
        assert!(AABB::from_points(std::iter::empty()).is_empty());
        assert_eq!(AABB::empty().size(), Vector3D::ZERO);
        assert!(AABB::default().is_unset());
    }

    #[test]
    fn test_transformed_translation() {
        let aabb = AABB::new(Vector3D::ZERO, Vector3D::ONE);
        let moved = aabb.transformed(&Matrix4x4::from_translation(Vector3D::new(2.0, 0.0, 0.0)));
        assert_eq!(moved.min, Vector3D::new(2.0, 0.0, 0.0));
        assert_eq!(moved.max, Vector3D::new(3.0, 1.0, 1.0));
    }
}
