//! Scene lights

use serde::{Deserialize, Serialize};

use crate::{
    sys,
    types::{Color3D, Vector2D, Vector3D, ai_string_to_string, from_ai_color3d, from_ai_vector2d, from_ai_vector3d},
};

/// Kind of light source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    Undefined,
    /// Infinitely far away, only `direction` matters
    Directional,
    Point,
    /// Cone-shaped, see the cone angles
    Spot,
    Ambient,
    /// Rectangle of `size` facing `direction`
    Area,
    Unknown(u32),
}

impl From<u32> for LightType {
    fn from(value: u32) -> Self {
        match value {
            sys::aiLightSourceType_aiLightSource_UNDEFINED => Self::Undefined,
            sys::aiLightSourceType_aiLightSource_DIRECTIONAL => Self::Directional,
            sys::aiLightSourceType_aiLightSource_POINT => Self::Point,
            sys::aiLightSourceType_aiLightSource_SPOT => Self::Spot,
            sys::aiLightSourceType_aiLightSource_AMBIENT => Self::Ambient,
            sys::aiLightSourceType_aiLightSource_AREA => Self::Area,
            other => Self::Unknown(other),
        }
    }
}

/// A light, positioned relative to the node that shares its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub(crate) name: String,
    pub(crate) light_type: LightType,
    pub(crate) position: Vector3D,
    pub(crate) direction: Vector3D,
    pub(crate) up: Vector3D,
    pub(crate) attenuation_constant: f32,
    pub(crate) attenuation_linear: f32,
    pub(crate) attenuation_quadratic: f32,
    pub(crate) color_diffuse: Color3D,
    pub(crate) color_specular: Color3D,
    pub(crate) color_ambient: Color3D,
    pub(crate) angle_inner_cone: f32,
    pub(crate) angle_outer_cone: f32,
    pub(crate) size: Vector2D,
}

impl From<&sys::aiLight> for Light {
    fn from(raw: &sys::aiLight) -> Self {
        Self {
            name: ai_string_to_string(&raw.mName),
            light_type: LightType::from(raw.mType),
            position: from_ai_vector3d(raw.mPosition),
            direction: from_ai_vector3d(raw.mDirection),
            up: from_ai_vector3d(raw.mUp),
            attenuation_constant: raw.mAttenuationConstant,
            attenuation_linear: raw.mAttenuationLinear,
            attenuation_quadratic: raw.mAttenuationQuadratic,
            color_diffuse: from_ai_color3d(raw.mColorDiffuse),
            color_specular: from_ai_color3d(raw.mColorSpecular),
            color_ambient: from_ai_color3d(raw.mColorAmbient),
            angle_inner_cone: raw.mAngleInnerCone,
            angle_outer_cone: raw.mAngleOuterCone,
            size: from_ai_vector2d(raw.mSize),
        }
    }
}

impl Light {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    pub fn position(&self) -> Vector3D {
        self.position
    }

    pub fn direction(&self) -> Vector3D {
        self.direction
    }

    pub fn up(&self) -> Vector3D {
        self.up
    }

    pub fn color_diffuse(&self) -> Color3D {
        self.color_diffuse
    }

    pub fn color_specular(&self) -> Color3D {
        self.color_specular
    }

    pub fn color_ambient(&self) -> Color3D {
        self.color_ambient
    }

    pub fn attenuation_constant(&self) -> f32 {
        self.attenuation_constant
    }

    pub fn attenuation_linear(&self) -> f32 {
        self.attenuation_linear
    }

    pub fn attenuation_quadratic(&self) -> f32 {
        self.attenuation_quadratic
    }

    /// Inner cone angle in radians, full intensity inside
    pub fn angle_inner_cone(&self) -> f32 {
        self.angle_inner_cone
    }

    /// Outer cone angle in radians, no light outside
    pub fn angle_outer_cone(&self) -> f32 {
        self.angle_outer_cone
    }

    /// Extent of an area light
    pub fn size(&self) -> Vector2D {
        self.size
    }

    /// Attenuation factor `1 / (c + l*d + q*d^2)` at distance `d`
    pub fn attenuation_at(&self, distance: f32) -> f32 {
        let denom = self.attenuation_constant
            + self.attenuation_linear * distance
            + self.attenuation_quadratic * distance * distance;
        if denom > 0.0 { 1.0 / denom } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_copy_light() {
        let raw = sys::aiLight {
            mName: ai_str("sun"),
            mType: sys::aiLightSourceType_aiLightSource_DIRECTIONAL,
            mDirection: vec3(0.0, -1.0, 0.0),
            mAttenuationConstant: 1.0,
            mAttenuationLinear: 0.5,
            mColorDiffuse: sys::aiColor3D::new(1.0, 0.9, 0.8),
            mSize: sys::aiVector2D::new(2.0, 3.0),
            ..Default::default()
        };
        let light = Light::from(&raw);
        assert_eq!(light.name(), "sun");
        assert_eq!(light.light_type(), LightType::Directional);
        assert_eq!(light.direction(), -Vector3D::Y);
        assert_eq!(light.color_diffuse(), Color3D::new(1.0, 0.9, 0.8));
        assert_eq!(light.size(), Vector2D::new(2.0, 3.0));
        assert_eq!(light.attenuation_at(2.0), 0.5);
    }

    #[test]
    fn test_unknown_light_type_keeps_value() {
        assert_eq!(LightType::from(42), LightType::Unknown(42));
    }
}
