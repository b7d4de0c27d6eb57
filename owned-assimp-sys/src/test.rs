#[cfg(test)]
mod tests {
    use std::mem::{align_of, offset_of, size_of};

    use crate::*;

    #[test]
    fn test_math_layouts() {
        assert_eq!(size_of::<aiVector2D>(), 8);
        assert_eq!(size_of::<aiVector3D>(), 12);
        assert_eq!(size_of::<aiColor3D>(), 12);
        assert_eq!(size_of::<aiColor4D>(), 16);
        assert_eq!(size_of::<aiQuaternion>(), 16);
        assert_eq!(size_of::<aiMatrix4x4>(), 64);
        assert_eq!(size_of::<aiString>(), 1028);
        assert_eq!(align_of::<aiString>(), 4);
        assert_eq!(offset_of!(aiQuaternion, w), 0);
    }

    #[test]
    fn test_small_record_layouts() {
        assert_eq!(size_of::<aiTexel>(), 4);
        assert_eq!(size_of::<aiMemoryInfo>(), 32);
        assert_eq!(size_of::<aiAABB>(), 24);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_pointer_record_layouts() {
        assert_eq!(size_of::<aiFace>(), 16);
        assert_eq!(size_of::<aiVertexWeight>(), 8);
        assert_eq!(size_of::<aiVectorKey>(), 24);
        assert_eq!(size_of::<aiQuatKey>(), 32);
        assert_eq!(size_of::<aiMeshKey>(), 16);
        assert_eq!(size_of::<aiMaterial>(), 16);
        assert_eq!(size_of::<aiLogStream>(), 16);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_node_layout() {
        assert_eq!(offset_of!(aiNode, mTransformation), 1032);
        assert_eq!(offset_of!(aiNode, mParent), 1096);
        assert_eq!(offset_of!(aiNode, mChildren), 1112);
        assert_eq!(offset_of!(aiNode, mMetaData), 1136);
        assert_eq!(size_of::<aiNode>(), 1144);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_mesh_layout() {
        assert_eq!(offset_of!(aiMesh, mVertices), 16);
        assert_eq!(offset_of!(aiMesh, mColors), 48);
        assert_eq!(offset_of!(aiMesh, mTextureCoords), 112);
        assert_eq!(offset_of!(aiMesh, mNumUVComponents), 176);
        assert_eq!(offset_of!(aiMesh, mFaces), 208);
        assert_eq!(offset_of!(aiMesh, mMaterialIndex), 232);
        assert_eq!(offset_of!(aiMesh, mName), 236);
        assert_eq!(offset_of!(aiMesh, mAABB), 1284);
        assert_eq!(size_of::<aiMesh>(), 1320);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_material_and_texture_layout() {
        assert_eq!(offset_of!(aiMaterialProperty, mSemantic), 1028);
        assert_eq!(offset_of!(aiMaterialProperty, mType), 1040);
        assert_eq!(offset_of!(aiMaterialProperty, mData), 1048);
        assert_eq!(offset_of!(aiTexture, achFormatHint), 8);
        assert_eq!(offset_of!(aiTexture, pcData), 24);
        assert_eq!(offset_of!(aiTexture, mFilename), 32);
        assert_eq!(offset_of!(aiBone, mWeights), 1048);
        assert_eq!(offset_of!(aiBone, mOffsetMatrix), 1056);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_scene_layout() {
        assert_eq!(offset_of!(aiScene, mRootNode), 8);
        assert_eq!(offset_of!(aiScene, mCameras), 104);
        assert_eq!(offset_of!(aiScene, mMetaData), 112);
        assert_eq!(offset_of!(aiScene, mName), 120);
        assert_eq!(offset_of!(aiScene, mPrivate), 1160);
        assert_eq!(size_of::<aiScene>(), 1168);
    }

    #[test]
    fn test_zeroed_defaults_are_empty() {
        let mesh = aiMesh::default();
        assert!(mesh.mVertices.is_null());
        assert!(mesh.mColors.iter().all(|p| p.is_null()));
        assert_eq!(mesh.mNumVertices, 0);

        let stream = aiLogStream::default();
        assert!(stream.callback.is_none());
    }

    #[test]
    fn test_ai_string_truncates() {
        let s = aiString::from_str_truncated("box");
        assert_eq!(s.length, 3);
        assert_eq!(s.as_bytes(), b"box");

        let long = "x".repeat(AI_MAXLEN * 2);
        let s = aiString::from_str_truncated(&long);
        assert_eq!(s.length as usize, AI_MAXLEN - 1);
    }

    #[test]
    fn test_ai_string_truncates_on_char_boundary() {
        let text = format!("{}é", "x".repeat(AI_MAXLEN - 2));
        let s = aiString::from_str_truncated(&text);
        assert_eq!(s.length as usize, AI_MAXLEN - 2);
        assert!(std::str::from_utf8(s.as_bytes()).is_ok());
    }
}
