//! Builders for synthetic native scenes used by unit tests.
//!
//! Everything is leaked; tests are short-lived and Assimp never frees these.

use crate::sys;

pub(crate) fn leak<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

pub(crate) fn leak_slice<T>(values: Vec<T>) -> *mut T {
    if values.is_empty() {
        return std::ptr::null_mut();
    }
    Box::leak(values.into_boxed_slice()).as_mut_ptr()
}

/// `T**` array built from owned values.
pub(crate) fn leak_ptrs<T>(values: Vec<T>) -> *mut *mut T {
    leak_slice(values.into_iter().map(leak).collect())
}

pub(crate) fn ai_str(s: &str) -> sys::aiString {
    sys::aiString::from_str_truncated(s)
}

pub(crate) fn vec3(x: f32, y: f32, z: f32) -> sys::aiVector3D {
    sys::aiVector3D::new(x, y, z)
}

/// Faces over consecutive indices, `arity` vertices each.
pub(crate) fn faces(count: u32, arity: u32) -> *mut sys::aiFace {
    leak_slice(
        (0..count)
            .map(|f| sys::aiFace {
                mNumIndices: arity,
                mIndices: leak_slice((0..arity).map(|i| f * arity + i).collect()),
            })
            .collect(),
    )
}

/// Triangle mesh with positions only.
pub(crate) fn triangle_mesh(name: &str, material_index: u32) -> sys::aiMesh {
    sys::aiMesh {
        mPrimitiveTypes: sys::aiPrimitiveType_aiPrimitiveType_TRIANGLE,
        mNumVertices: 3,
        mNumFaces: 1,
        mVertices: leak_slice(vec![vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]),
        mFaces: faces(1, 3),
        mMaterialIndex: material_index,
        mName: ai_str(name),
        ..Default::default()
    }
}

/// Material property holding raw bytes of the given type tag.
pub(crate) fn property(key: &str, ty: u32, bytes: Vec<u8>) -> sys::aiMaterialProperty {
    property_at(key, 0, 0, ty, bytes)
}

pub(crate) fn property_at(
    key: &str,
    semantic: u32,
    index: u32,
    ty: u32,
    bytes: Vec<u8>,
) -> sys::aiMaterialProperty {
    sys::aiMaterialProperty {
        mKey: ai_str(key),
        mSemantic: semantic,
        mIndex: index,
        mDataLength: bytes.len() as u32,
        mType: ty,
        mData: leak_slice(bytes).cast(),
    }
}

pub(crate) fn float_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

pub(crate) fn int_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Encoding Assimp uses for string properties: u32 length, bytes, NUL.
pub(crate) fn string_bytes(s: &str) -> Vec<u8> {
    let mut out = (s.len() as u32).to_ne_bytes().to_vec();
    out.extend_from_slice(s.as_bytes());
    out.push(0);
    out
}

pub(crate) fn material(props: Vec<sys::aiMaterialProperty>) -> sys::aiMaterial {
    let count = props.len() as u32;
    sys::aiMaterial {
        mProperties: leak_ptrs(props),
        mNumProperties: count,
        mNumAllocated: count.next_power_of_two().max(1),
    }
}

/// Node with the given children; `mParent` is wired by [`wire_parents`].
pub(crate) fn node(name: &str, meshes: Vec<u32>, children: Vec<*mut sys::aiNode>) -> *mut sys::aiNode {
    leak(sys::aiNode {
        mName: ai_str(name),
        mTransformation: sys::aiMatrix4x4::identity(),
        mNumChildren: children.len() as u32,
        mChildren: leak_slice(children),
        mNumMeshes: meshes.len() as u32,
        mMeshes: leak_slice(meshes),
        ..Default::default()
    })
}

/// Set every child's `mParent`, as Assimp does.
pub(crate) fn wire_parents(root: *mut sys::aiNode) {
    // SAFETY: nodes come from `node` and are leaked, so they are valid and unaliased here.
    unsafe {
        let n = &mut *root;
        for i in 0..n.mNumChildren as usize {
            let child = *n.mChildren.add(i);
            (*child).mParent = root;
            wire_parents(child);
        }
    }
}

/// Scene with the root node and meshes; materials are filled to cover indices.
pub(crate) fn scene(root: *mut sys::aiNode, meshes: Vec<sys::aiMesh>, materials: Vec<sys::aiMaterial>) -> sys::aiScene {
    wire_parents(root);
    sys::aiScene {
        mRootNode: root,
        mNumMeshes: meshes.len() as u32,
        mMeshes: leak_ptrs(meshes),
        mNumMaterials: materials.len() as u32,
        mMaterials: leak_ptrs(materials),
        mName: ai_str("synthetic"),
        ..Default::default()
    }
}
