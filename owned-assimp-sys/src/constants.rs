//! Native enum and flag values
//!
//! Names follow bindgen's `<enum>_<variant>` convention so code written against
//! generated bindings reads the same here.

use std::os::raw::{c_int, c_uint};

pub const AI_MAX_NUMBER_OF_COLOR_SETS: usize = 8;
pub const AI_MAX_NUMBER_OF_TEXTURECOORDS: usize = 8;
pub const HINTMAXTEXTURELEN: usize = 9;

pub type aiBool = c_int;
pub const AI_FALSE: aiBool = 0;
pub const AI_TRUE: aiBool = 1;

pub type aiReturn = c_int;
pub const aiReturn_aiReturn_SUCCESS: aiReturn = 0;
pub const aiReturn_aiReturn_FAILURE: aiReturn = -1;
pub const aiReturn_aiReturn_OUTOFMEMORY: aiReturn = -3;

// Scene flags
pub const AI_SCENE_FLAGS_INCOMPLETE: c_uint = 0x1;
pub const AI_SCENE_FLAGS_VALIDATED: c_uint = 0x2;
pub const AI_SCENE_FLAGS_VALIDATION_WARNING: c_uint = 0x4;
pub const AI_SCENE_FLAGS_NON_VERBOSE_FORMAT: c_uint = 0x8;
pub const AI_SCENE_FLAGS_TERRAIN: c_uint = 0x10;
pub const AI_SCENE_FLAGS_ALLOW_SHARED: c_uint = 0x20;

// aiPrimitiveType
pub const aiPrimitiveType_aiPrimitiveType_POINT: c_uint = 0x1;
pub const aiPrimitiveType_aiPrimitiveType_LINE: c_uint = 0x2;
pub const aiPrimitiveType_aiPrimitiveType_TRIANGLE: c_uint = 0x4;
pub const aiPrimitiveType_aiPrimitiveType_POLYGON: c_uint = 0x8;
pub const aiPrimitiveType_aiPrimitiveType_NGONEncodingFlag: c_uint = 0x10;

// aiPropertyTypeInfo
pub const aiPropertyTypeInfo_aiPTI_Float: c_uint = 0x1;
pub const aiPropertyTypeInfo_aiPTI_Double: c_uint = 0x2;
pub const aiPropertyTypeInfo_aiPTI_String: c_uint = 0x3;
pub const aiPropertyTypeInfo_aiPTI_Integer: c_uint = 0x4;
pub const aiPropertyTypeInfo_aiPTI_Buffer: c_uint = 0x5;

// aiTextureType
pub const aiTextureType_aiTextureType_NONE: c_uint = 0;
pub const aiTextureType_aiTextureType_DIFFUSE: c_uint = 1;
pub const aiTextureType_aiTextureType_SPECULAR: c_uint = 2;
pub const aiTextureType_aiTextureType_AMBIENT: c_uint = 3;
pub const aiTextureType_aiTextureType_EMISSIVE: c_uint = 4;
pub const aiTextureType_aiTextureType_HEIGHT: c_uint = 5;
pub const aiTextureType_aiTextureType_NORMALS: c_uint = 6;
pub const aiTextureType_aiTextureType_SHININESS: c_uint = 7;
pub const aiTextureType_aiTextureType_OPACITY: c_uint = 8;
pub const aiTextureType_aiTextureType_DISPLACEMENT: c_uint = 9;
pub const aiTextureType_aiTextureType_LIGHTMAP: c_uint = 10;
pub const aiTextureType_aiTextureType_REFLECTION: c_uint = 11;
pub const aiTextureType_aiTextureType_BASE_COLOR: c_uint = 12;
pub const aiTextureType_aiTextureType_NORMAL_CAMERA: c_uint = 13;
pub const aiTextureType_aiTextureType_EMISSION_COLOR: c_uint = 14;
pub const aiTextureType_aiTextureType_METALNESS: c_uint = 15;
pub const aiTextureType_aiTextureType_DIFFUSE_ROUGHNESS: c_uint = 16;
pub const aiTextureType_aiTextureType_AMBIENT_OCCLUSION: c_uint = 17;
pub const aiTextureType_aiTextureType_UNKNOWN: c_uint = 18;
pub const aiTextureType_aiTextureType_SHEEN: c_uint = 19;
pub const aiTextureType_aiTextureType_CLEARCOAT: c_uint = 20;
pub const aiTextureType_aiTextureType_TRANSMISSION: c_uint = 21;
pub const aiTextureType_aiTextureType_MAYA_BASE: c_uint = 22;
pub const aiTextureType_aiTextureType_MAYA_SPECULAR: c_uint = 23;
pub const aiTextureType_aiTextureType_MAYA_SPECULAR_COLOR: c_uint = 24;
pub const aiTextureType_aiTextureType_MAYA_SPECULAR_ROUGHNESS: c_uint = 25;
pub const aiTextureType_aiTextureType_ANISOTROPY: c_uint = 26;
pub const aiTextureType_aiTextureType_GLTF_METALLIC_ROUGHNESS: c_uint = 27;

// aiLightSourceType
pub const aiLightSourceType_aiLightSource_UNDEFINED: c_uint = 0;
pub const aiLightSourceType_aiLightSource_DIRECTIONAL: c_uint = 1;
pub const aiLightSourceType_aiLightSource_POINT: c_uint = 2;
pub const aiLightSourceType_aiLightSource_SPOT: c_uint = 3;
pub const aiLightSourceType_aiLightSource_AMBIENT: c_uint = 4;
pub const aiLightSourceType_aiLightSource_AREA: c_uint = 5;

// aiAnimBehaviour
pub const aiAnimBehaviour_aiAnimBehaviour_DEFAULT: c_uint = 0;
pub const aiAnimBehaviour_aiAnimBehaviour_CONSTANT: c_uint = 1;
pub const aiAnimBehaviour_aiAnimBehaviour_LINEAR: c_uint = 2;
pub const aiAnimBehaviour_aiAnimBehaviour_REPEAT: c_uint = 3;

// aiAnimInterpolation
pub const aiAnimInterpolation_aiAnimInterpolation_Step: c_uint = 0;
pub const aiAnimInterpolation_aiAnimInterpolation_Linear: c_uint = 1;
pub const aiAnimInterpolation_aiAnimInterpolation_Spherical_Linear: c_uint = 2;
pub const aiAnimInterpolation_aiAnimInterpolation_Cubic_Spline: c_uint = 3;

// aiMorphingMethod
pub const aiMorphingMethod_aiMorphingMethod_UNKNOWN: c_uint = 0;
pub const aiMorphingMethod_aiMorphingMethod_VERTEX_BLEND: c_uint = 1;
pub const aiMorphingMethod_aiMorphingMethod_MORPH_NORMALIZED: c_uint = 2;
pub const aiMorphingMethod_aiMorphingMethod_MORPH_RELATIVE: c_uint = 3;

// aiMetadataType
pub const aiMetadataType_AI_BOOL: c_uint = 0;
pub const aiMetadataType_AI_INT32: c_uint = 1;
pub const aiMetadataType_AI_UINT64: c_uint = 2;
pub const aiMetadataType_AI_FLOAT: c_uint = 3;
pub const aiMetadataType_AI_DOUBLE: c_uint = 4;
pub const aiMetadataType_AI_AISTRING: c_uint = 5;
pub const aiMetadataType_AI_AIVECTOR3D: c_uint = 6;
pub const aiMetadataType_AI_AIMETADATA: c_uint = 7;
pub const aiMetadataType_AI_INT64: c_uint = 8;
pub const aiMetadataType_AI_UINT32: c_uint = 9;

// aiPostProcessSteps
pub const aiPostProcessSteps_aiProcess_CalcTangentSpace: c_uint = 0x1;
pub const aiPostProcessSteps_aiProcess_JoinIdenticalVertices: c_uint = 0x2;
pub const aiPostProcessSteps_aiProcess_MakeLeftHanded: c_uint = 0x4;
pub const aiPostProcessSteps_aiProcess_Triangulate: c_uint = 0x8;
pub const aiPostProcessSteps_aiProcess_RemoveComponent: c_uint = 0x10;
pub const aiPostProcessSteps_aiProcess_GenNormals: c_uint = 0x20;
pub const aiPostProcessSteps_aiProcess_GenSmoothNormals: c_uint = 0x40;
pub const aiPostProcessSteps_aiProcess_SplitLargeMeshes: c_uint = 0x80;
pub const aiPostProcessSteps_aiProcess_PreTransformVertices: c_uint = 0x100;
pub const aiPostProcessSteps_aiProcess_LimitBoneWeights: c_uint = 0x200;
pub const aiPostProcessSteps_aiProcess_ValidateDataStructure: c_uint = 0x400;
pub const aiPostProcessSteps_aiProcess_ImproveCacheLocality: c_uint = 0x800;
pub const aiPostProcessSteps_aiProcess_RemoveRedundantMaterials: c_uint = 0x1000;
pub const aiPostProcessSteps_aiProcess_FixInfacingNormals: c_uint = 0x2000;
pub const aiPostProcessSteps_aiProcess_PopulateArmatureData: c_uint = 0x4000;
pub const aiPostProcessSteps_aiProcess_SortByPType: c_uint = 0x8000;
pub const aiPostProcessSteps_aiProcess_FindDegenerates: c_uint = 0x10000;
pub const aiPostProcessSteps_aiProcess_FindInvalidData: c_uint = 0x20000;
pub const aiPostProcessSteps_aiProcess_GenUVCoords: c_uint = 0x40000;
pub const aiPostProcessSteps_aiProcess_TransformUVCoords: c_uint = 0x80000;
pub const aiPostProcessSteps_aiProcess_FindInstances: c_uint = 0x100000;
pub const aiPostProcessSteps_aiProcess_OptimizeMeshes: c_uint = 0x200000;
pub const aiPostProcessSteps_aiProcess_OptimizeGraph: c_uint = 0x400000;
pub const aiPostProcessSteps_aiProcess_FlipUVs: c_uint = 0x800000;
pub const aiPostProcessSteps_aiProcess_FlipWindingOrder: c_uint = 0x1000000;
pub const aiPostProcessSteps_aiProcess_SplitByBoneCount: c_uint = 0x2000000;
pub const aiPostProcessSteps_aiProcess_Debone: c_uint = 0x4000000;
pub const aiPostProcessSteps_aiProcess_GlobalScale: c_uint = 0x8000000;
pub const aiPostProcessSteps_aiProcess_EmbedTextures: c_uint = 0x10000000;
pub const aiPostProcessSteps_aiProcess_ForceGenNormals: c_uint = 0x20000000;
pub const aiPostProcessSteps_aiProcess_DropNormals: c_uint = 0x40000000;
pub const aiPostProcessSteps_aiProcess_GenBoundingBoxes: c_uint = 0x80000000;

// aiTextureMapping
pub const aiTextureMapping_aiTextureMapping_UV: c_uint = 0;
pub const aiTextureMapping_aiTextureMapping_SPHERE: c_uint = 1;
pub const aiTextureMapping_aiTextureMapping_CYLINDER: c_uint = 2;
pub const aiTextureMapping_aiTextureMapping_BOX: c_uint = 3;
pub const aiTextureMapping_aiTextureMapping_PLANE: c_uint = 4;
pub const aiTextureMapping_aiTextureMapping_OTHER: c_uint = 5;

// aiTextureOp
pub const aiTextureOp_aiTextureOp_Multiply: c_uint = 0;
pub const aiTextureOp_aiTextureOp_Add: c_uint = 1;
pub const aiTextureOp_aiTextureOp_Subtract: c_uint = 2;
pub const aiTextureOp_aiTextureOp_Divide: c_uint = 3;
pub const aiTextureOp_aiTextureOp_SmoothAdd: c_uint = 4;
pub const aiTextureOp_aiTextureOp_SignedAdd: c_uint = 5;

// aiTextureMapMode
pub const aiTextureMapMode_aiTextureMapMode_Wrap: c_uint = 0;
pub const aiTextureMapMode_aiTextureMapMode_Clamp: c_uint = 1;
pub const aiTextureMapMode_aiTextureMapMode_Mirror: c_uint = 2;
pub const aiTextureMapMode_aiTextureMapMode_Decal: c_uint = 3;
