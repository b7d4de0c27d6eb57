//! Embedded textures
//!
//! A texture stored inside the model file is either a raw texel grid
//! (`height > 0`) or a compressed image file of `width` bytes (`height == 0`)
//! whose format is named by [`Texture::format_hint`].

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    ffi::copy_required,
    sys,
    types::{Vector4D, ai_string_to_string},
};

/// A texel in BGRA byte order, as Assimp stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Texel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Texel {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Normalized RGBA
    pub fn to_vec4(self) -> Vector4D {
        Vector4D::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32) / 255.0
    }
}

impl From<&sys::aiTexel> for Texel {
    fn from(texel: &sys::aiTexel) -> Self {
        Self {
            b: texel.b,
            g: texel.g,
            r: texel.r,
            a: texel.a,
        }
    }
}

/// Content of an embedded texture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureData {
    /// Row-major `width * height` texels
    Texels(Vec<Texel>),
    /// Encoded image file bytes
    Compressed(Vec<u8>),
}

/// An owned embedded texture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) format_hint: String,
    pub(crate) filename: Option<String>,
    pub(crate) data: TextureData,
}

impl Texture {
    /// # Safety
    /// `raw.pcData` must hold `mWidth * mHeight` texels, or `mWidth` bytes when
    /// `mHeight` is 0.
    pub(crate) unsafe fn from_raw(raw: &sys::aiTexture) -> Result<Self> {
        let data = if raw.mHeight == 0 {
            let bytes = unsafe {
                copy_required(raw.pcData.cast::<u8>(), raw.mWidth as usize, "compressed texture", |b| *b)?
            };
            TextureData::Compressed(bytes)
        } else {
            let len = (raw.mWidth as usize)
                .checked_mul(raw.mHeight as usize)
                .ok_or_else(|| Error::invalid_scene("texture dimensions overflow"))?;
            let texels = unsafe { copy_required(raw.pcData, len, "texture texels", |t| Texel::from(t))? };
            TextureData::Texels(texels)
        };

        let hint_bytes: Vec<u8> = raw
            .achFormatHint
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        let filename = ai_string_to_string(&raw.mFilename);

        Ok(Self {
            width: raw.mWidth,
            height: raw.mHeight,
            format_hint: String::from_utf8_lossy(&hint_bytes).into_owned(),
            filename: (!filename.is_empty()).then_some(filename),
            data,
        })
    }

    /// Texel columns, or byte length when compressed
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texel rows, 0 when compressed
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Lowercase file extension (`"png"`) for compressed data, or a channel
    /// layout such as `"rgba8888"` for texels. May be empty.
    pub fn format_hint(&self) -> &str {
        &self.format_hint
    }

    /// Does the format hint match `format` (case-insensitive)?
    pub fn check_format(&self, format: &str) -> bool {
        self.format_hint.eq_ignore_ascii_case(format)
    }

    /// Original file name, if the format kept one
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn data(&self) -> &TextureData {
        &self.data
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self.data, TextureData::Compressed(_))
    }

    /// Is any texel not fully opaque? Always false for compressed data.
    pub fn has_alpha_channel(&self) -> bool {
        match &self.data {
            TextureData::Texels(texels) => texels.iter().any(|t| t.a != u8::MAX),
            TextureData::Compressed(_) => false,
        }
    }

    /// Texel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<Texel> {
        let TextureData::Texels(texels) = &self.data else {
            return None;
        };
        if x >= self.width || y >= self.height {
            return None;
        }
        texels.get(y as usize * self.width as usize + x as usize).copied()
    }
}
