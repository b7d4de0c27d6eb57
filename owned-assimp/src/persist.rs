//! Saving and loading owned scenes
//!
//! A persisted scene is the magic `OASC`, a little-endian `u16` format
//! version, then the bincode encoding of [`Scene`]. Node parents are arena
//! indices, so decoding restores every parent link as-is. Decoding a
//! [`Scene`] checks its node arena on any serde path, this one included.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::{
    error::{Error, Result},
    scene::Scene,
};

/// Leading bytes of every persisted scene
pub const MAGIC: [u8; 4] = *b"OASC";

/// Bumped whenever the encoded layout of [`Scene`] changes
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + std::mem::size_of::<u16>();

/// Encode `scene` with the persist header.
pub fn to_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_to(scene, &mut out)?;
    Ok(out)
}

/// Decode a scene produced by [`to_bytes`].
///
/// Fails with [`Error::Persist`] on a wrong magic or version, a truncated or
/// corrupt body, or a node arena with broken parent/child links.
pub fn from_bytes(bytes: &[u8]) -> Result<Scene> {
    let Some((header, body)) = bytes.split_at_checked(HEADER_LEN) else {
        return Err(Error::persist(format!(
            "{} bytes is too short for a persisted scene",
            bytes.len()
        )));
    };
    check_header(header)?;
    Ok(bincode::deserialize(body)?)
}

/// Write `scene` to `path`, replacing any existing file.
pub fn save<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_to(scene, &mut writer)?;
    writer.flush()?;
    log::debug!("saved scene with {} nodes to {}", scene.nodes().len(), path.display());
    Ok(())
}

/// Read a scene written by [`save`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header)?;
    check_header(&header)?;
    let scene: Scene = bincode::deserialize_from(reader)?;
    log::debug!("loaded scene with {} nodes from {}", scene.nodes().len(), path.display());
    Ok(scene)
}

fn write_to<W: Write>(scene: &Scene, mut writer: W) -> Result<()> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    bincode::serialize_into(writer, scene)?;
    Ok(())
}

fn check_header(header: &[u8]) -> Result<()> {
    let (magic, version) = header.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(Error::persist(format!("bad magic {magic:02x?}")));
    }
    let version = u16::from_le_bytes([version[0], version[1]]);
    if version != FORMAT_VERSION {
        return Err(Error::persist(format!(
            "unsupported format version {version}, expected {FORMAT_VERSION}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use crate::sys;
    use crate::test_support::*;

    fn sample() -> Scene {
        let root = node(
            "root",
            vec![],
            vec![node("a", vec![0], vec![node("a1", vec![], vec![])]), node("b", vec![], vec![])],
        );
        let mat = material(vec![property(
            "?mat.name",
            sys::aiPropertyTypeInfo_aiPTI_String,
            string_bytes("steel"),
        )]);
        let raw = scene(root, vec![triangle_mesh("tri", 0)], vec![mat]);
        unsafe { Scene::from_raw(&raw) }.unwrap()
    }

    #[test]
    fn test_round_trip_preserves_parents() {
        let scene = sample();
        let restored = from_bytes(&to_bytes(&scene).unwrap()).unwrap();
        assert_eq!(restored, scene);

        let a1 = restored.find_node("a1").unwrap();
        let a = a1.parent().unwrap();
        assert_eq!(a.name(), "a");
        assert!(a.children().any(|c| c.id() == a1.id()));
        assert_eq!(a.parent().unwrap().id(), NodeId::ROOT);
        assert_eq!(restored.materials()[0].name(), "steel");
    }

    #[test]
    fn test_save_and_load() {
        let scene = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.oasc");
        save(&scene, &path).unwrap();
        assert_eq!(load(&path).unwrap(), scene);
    }

    #[test]
    fn test_rejects_bad_header() {
        let mut bytes = to_bytes(&sample()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(from_bytes(&bytes), Err(Error::Persist { .. })));

        let mut bytes = to_bytes(&sample()).unwrap();
        bytes[4..6].copy_from_slice(&(FORMAT_VERSION + 1).to_le_bytes());
        let err = from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("version"), "{err}");

        assert!(matches!(from_bytes(b"OAS"), Err(Error::Persist { .. })));
    }

    #[test]
    fn test_rejects_truncated_body() {
        let bytes = to_bytes(&sample()).unwrap();
        assert!(matches!(from_bytes(&bytes[..bytes.len() / 2]), Err(Error::Persist { .. })));
    }

    #[test]
    fn test_rejects_broken_parent_links() {
        let mut scene = sample();
        scene.nodes[3].parent = Some(NodeId(1));
        let bytes = to_bytes(&scene).unwrap();
        let err = from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("corrupt node hierarchy"), "{err}");
    }

    #[test]
    fn test_plain_bincode_rejects_corrupt_arena() {
        let mut scene = sample();
        scene.nodes[0].children[0] = NodeId(7);
        let bytes = bincode::serialize(&scene).unwrap();
        let err = bincode::deserialize::<Scene>(&bytes).unwrap_err();
        assert!(err.to_string().contains("out-of-range child 7"), "{err}");

        let mut scene = sample();
        scene.nodes[1].parent = Some(NodeId(3));
        let bytes = bincode::serialize(&scene).unwrap();
        assert!(bincode::deserialize::<Scene>(&bytes).is_err());
    }
}
