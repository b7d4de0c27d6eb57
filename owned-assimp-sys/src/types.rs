//! Math and string mirrors
//!
//! Plain-old-data layouts shared by every other native struct, plus small
//! constructors and conversions that make them usable from tests and callers.

use std::os::raw::c_char;

/// Floating point type used by Assimp when built without `ASSIMP_DOUBLE_PRECISION`.
pub type ai_real = f32;

/// Maximum length of an [`aiString`] buffer, terminator included.
pub const AI_MAXLEN: usize = 1024;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiVector2D {
    pub x: ai_real,
    pub y: ai_real,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiVector3D {
    pub x: ai_real,
    pub y: ai_real,
    pub z: ai_real,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiColor3D {
    pub r: ai_real,
    pub g: ai_real,
    pub b: ai_real,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiColor4D {
    pub r: ai_real,
    pub g: ai_real,
    pub b: ai_real,
    pub a: ai_real,
}

/// Quaternion with `w` stored first, as in the native header.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiQuaternion {
    pub w: ai_real,
    pub x: ai_real,
    pub y: ai_real,
    pub z: ai_real,
}

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiMatrix3x3 {
    pub a1: ai_real,
    pub a2: ai_real,
    pub a3: ai_real,
    pub b1: ai_real,
    pub b2: ai_real,
    pub b3: ai_real,
    pub c1: ai_real,
    pub c2: ai_real,
    pub c3: ai_real,
}

/// Row-major 4x4 matrix: `a1..a4` is the first row.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct aiMatrix4x4 {
    pub a1: ai_real,
    pub a2: ai_real,
    pub a3: ai_real,
    pub a4: ai_real,
    pub b1: ai_real,
    pub b2: ai_real,
    pub b3: ai_real,
    pub b4: ai_real,
    pub c1: ai_real,
    pub c2: ai_real,
    pub c3: ai_real,
    pub c4: ai_real,
    pub d1: ai_real,
    pub d2: ai_real,
    pub d3: ai_real,
    pub d4: ai_real,
}

/// Length-prefixed string with a fixed 1024 byte buffer.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct aiString {
    pub length: u32,
    pub data: [c_char; AI_MAXLEN],
}

impl Default for aiString {
    fn default() -> Self {
        Self {
            length: 0,
            data: [0; AI_MAXLEN],
        }
    }
}

impl std::fmt::Debug for aiString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("aiString")
            .field("length", &self.length)
            .field("data", &String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

impl aiString {
    /// Build a string from UTF-8 text, truncating to the buffer capacity on a
    /// char boundary.
    pub fn from_str_truncated(s: &str) -> Self {
        let mut out = Self::default();
        let mut len = s.len().min(AI_MAXLEN - 1);
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        for (dst, src) in out.data.iter_mut().zip(&s.as_bytes()[..len]) {
            *dst = *src as c_char;
        }
        out.length = len as u32;
        out
    }

    /// Bytes covered by `length`, clamped to the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        let len = (self.length as usize).min(AI_MAXLEN);
        // SAFETY: c_char and u8 share size and alignment; len is within the array.
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<u8>(), len) }
    }
}

impl aiVector3D {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl aiVector2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl aiColor3D {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl aiColor4D {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl aiQuaternion {
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }
}

impl aiMatrix4x4 {
    /// Identity matrix
    pub const fn identity() -> Self {
        Self {
            a1: 1.0,
            a2: 0.0,
            a3: 0.0,
            a4: 0.0,
            b1: 0.0,
            b2: 1.0,
            b3: 0.0,
            b4: 0.0,
            c1: 0.0,
            c2: 0.0,
            c3: 1.0,
            c4: 0.0,
            d1: 0.0,
            d2: 0.0,
            d3: 0.0,
            d4: 1.0,
        }
    }

    /// Translation matrix; the offset lives in the last column (`a4`, `b4`, `c4`).
    pub const fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.a4 = x;
        m.b4 = y;
        m.c4 = z;
        m
    }
}

impl From<[f32; 3]> for aiVector3D {
    #[inline]
    fn from(array: [f32; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl From<aiVector3D> for [f32; 3] {
    #[inline]
    fn from(v: aiVector3D) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

impl From<[f32; 2]> for aiVector2D {
    #[inline]
    fn from(array: [f32; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl From<[f32; 4]> for aiColor4D {
    #[inline]
    fn from(array: [f32; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

#[cfg(feature = "mint")]
mod mint_integration {
    use super::*;

    impl From<mint::Vector3<f32>> for aiVector3D {
        #[inline]
        fn from(v: mint::Vector3<f32>) -> Self {
            Self::new(v.x, v.y, v.z)
        }
    }

    impl From<aiVector3D> for mint::Vector3<f32> {
        #[inline]
        fn from(v: aiVector3D) -> Self {
            mint::Vector3 {
                x: v.x,
                y: v.y,
                z: v.z,
            }
        }
    }

    impl From<aiQuaternion> for mint::Quaternion<f32> {
        #[inline]
        fn from(q: aiQuaternion) -> Self {
            mint::Quaternion {
                s: q.w,
                v: mint::Vector3 {
                    x: q.x,
                    y: q.y,
                    z: q.z,
                },
            }
        }
    }

    impl From<aiMatrix4x4> for mint::RowMatrix4<f32> {
        #[inline]
        fn from(m: aiMatrix4x4) -> Self {
            mint::RowMatrix4 {
                x: mint::Vector4 { x: m.a1, y: m.a2, z: m.a3, w: m.a4 },
                y: mint::Vector4 { x: m.b1, y: m.b2, z: m.b3, w: m.b4 },
                z: mint::Vector4 { x: m.c1, y: m.c2, z: m.c3, w: m.c4 },
                w: mint::Vector4 { x: m.d1, y: m.d2, z: m.d3, w: m.d4 },
            }
        }
    }
}
