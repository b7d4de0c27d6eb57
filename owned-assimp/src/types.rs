//! Math aliases and conversions from the native mirrors
//!
//! Owned scene values use glam types throughout. With the `mint` feature,
//! glam's own `From` impls provide interop with other math crates.
//!
//! ```rust,no_run
//! use owned_assimp::types::*;
//! use owned_assimp::Importer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scene = Importer::new().read_file("model.obj")?;
//! for mesh in scene.meshes() {
//!     for vertex in mesh.vertices() {
//!         let moved = Matrix4x4::from_translation(Vector3D::X) * vertex.extend(1.0);
//!         println!("{moved}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::sys;

pub use glam::{
    Mat4 as Matrix4x4, Quat as Quaternion, Vec2 as Vector2D, Vec3 as Vector3D, Vec4 as Vector4D,
};

/// RGB color type (alias for Vector3D)
pub type Color3D = Vector3D;

/// RGBA color type (alias for Vector4D)
pub type Color4D = Vector4D;

/// Convert Assimp `aiString` to an owned UTF-8 string (lossy).
///
/// Assimp stores the length explicitly; the buffer is not assumed NUL-terminated.
#[inline]
pub fn ai_string_to_string(value: &sys::aiString) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

#[inline]
pub fn from_ai_vector3d(v: sys::aiVector3D) -> Vector3D {
    Vector3D::new(v.x, v.y, v.z)
}

#[inline]
pub fn from_ai_vector2d(v: sys::aiVector2D) -> Vector2D {
    Vector2D::new(v.x, v.y)
}

/// Convert aiMatrix4x4 to glam Mat4
#[inline]
pub fn from_ai_matrix4x4(m: sys::aiMatrix4x4) -> Matrix4x4 {
    // Assimp rows (a*, b*, c*, d*) become glam columns transposed.
    Matrix4x4::from_cols(
        Vector4D::new(m.a1, m.b1, m.c1, m.d1),
        Vector4D::new(m.a2, m.b2, m.c2, m.d2),
        Vector4D::new(m.a3, m.b3, m.c3, m.d3),
        Vector4D::new(m.a4, m.b4, m.c4, m.d4),
    )
}

/// Convert glam Mat4 to aiMatrix4x4
#[inline]
pub fn to_ai_matrix4x4(m: Matrix4x4) -> sys::aiMatrix4x4 {
    let cols = m.to_cols_array_2d();
    sys::aiMatrix4x4 {
        a1: cols[0][0],
        a2: cols[1][0],
        a3: cols[2][0],
        a4: cols[3][0],
        b1: cols[0][1],
        b2: cols[1][1],
        b3: cols[2][1],
        b4: cols[3][1],
        c1: cols[0][2],
        c2: cols[1][2],
        c3: cols[2][2],
        c4: cols[3][2],
        d1: cols[0][3],
        d2: cols[1][3],
        d3: cols[2][3],
        d4: cols[3][3],
    }
}

#[inline]
pub fn from_ai_quaternion(q: sys::aiQuaternion) -> Quaternion {
    Quaternion::from_xyzw(q.x, q.y, q.z, q.w)
}

#[inline]
pub fn from_ai_color3d(c: sys::aiColor3D) -> Color3D {
    Color3D::new(c.r, c.g, c.b)
}

#[inline]
pub fn from_ai_color4d(c: sys::aiColor4D) -> Color4D {
    Color4D::new(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_translation_lands_in_w_axis() {
        let m = from_ai_matrix4x4(sys::aiMatrix4x4::translation(1.0, 2.0, 3.0));
        assert_eq!(m.w_axis, Vector4D::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.transform_point3(Vector3D::ZERO), Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_matrix_conversion_is_symmetric() {
        let native = sys::aiMatrix4x4::translation(4.0, -1.0, 0.5);
        assert_eq!(to_ai_matrix4x4(from_ai_matrix4x4(native)), native);
    }

    #[test]
    fn test_quaternion_keeps_w() {
        let q = from_ai_quaternion(sys::aiQuaternion::identity());
        assert_eq!(q, Quaternion::IDENTITY);
    }

    #[test]
    fn test_ai_string_uses_length_field() {
        let mut s = sys::aiString::from_str_truncated("mesh_name");
        s.length = 4;
        assert_eq!(ai_string_to_string(&s), "mesh");
    }
}
