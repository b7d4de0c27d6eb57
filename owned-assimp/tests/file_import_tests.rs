//! Import tests against the OBJ fixtures in tests/models

use std::path::Path;

use approx::assert_relative_eq;
use owned_assimp::{
    Error, ImportBuilder, Importer, TextureType, Vector3D, postprocess::PostProcessSteps,
};

const BOX: &str = "tests/models/box.obj";
const TWO_MATERIALS: &str = "tests/models/two_materials.obj";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture(path: &str) -> Option<&Path> {
    let path = Path::new(path);
    if path.exists() {
        Some(path)
    } else {
        println!("Skipping - model file not found: {}", path.display());
        None
    }
}

#[test]
fn test_import_box() {
    init_logging();
    let Some(path) = fixture(BOX) else { return };

    let scene = ImportBuilder::new()
        .with_post_process(
            PostProcessSteps::TRIANGULATE
                | PostProcessSteps::JOIN_IDENTICAL_VERTICES
                | PostProcessSteps::GEN_BOUNDING_BOXES,
        )
        .import_file(path)
        .expect("box.obj should import");

    assert_eq!(scene.meshes().len(), 1);
    let mesh = &scene.meshes()[0];
    assert_eq!(mesh.num_vertices(), 8, "a cube has 8 corners");
    assert_eq!(mesh.num_faces(), 12, "6 quads triangulate into 12 triangles");
    assert!(mesh.faces().iter().all(|f| f.len() == 3));
    assert!(!mesh.has_texture_coords(0));
    assert!(mesh.texture_coords(0).is_none());

    let aabb = mesh.aabb();
    assert_relative_eq!(aabb.min.x, -0.5);
    assert_relative_eq!(aabb.max.y, 0.5);
    assert_relative_eq!(aabb.size().length(), Vector3D::ONE.length(), epsilon = 1e-5);

    assert!(scene.root_node().is_some());
    assert!(scene.memory_info().is_some_and(|m| m.total > 0));
    assert_eq!(scene.source_path(), Some(path));
}

#[test]
fn test_every_node_reaches_the_root() {
    init_logging();
    for name in [BOX, TWO_MATERIALS] {
        let Some(path) = fixture(name) else { continue };
        let scene = Importer::new().read_file(path).expect("fixture should import");
        let root = scene.root_node().expect("imported scenes have a root");
        assert!(root.parent().is_none());

        for node in scene.nodes() {
            let node_ref = scene.find_node(node.name()).expect("every node is findable");
            let last = node_ref.ancestors().last().unwrap_or(node_ref);
            assert_eq!(last.id(), root.id(), "{name}: {} does not reach the root", node.name());
            assert!(node_ref.ancestors().count() < scene.nodes().len());
        }
    }
}

#[test]
fn test_materials_from_mtl() {
    init_logging();
    let Some(path) = fixture(TWO_MATERIALS) else { return };

    let scene = Importer::new().read_file(path).expect("two_materials.obj should import");
    assert_eq!(scene.meshes().len(), 2);

    let red = scene
        .materials()
        .iter()
        .find(|m| m.name() == "red")
        .expect("material `red`");
    assert_eq!(red.diffuse_color(), Some(Vector3D::new(1.0, 0.0, 0.0)));
    assert_relative_eq!(red.shininess().unwrap_or_default(), 32.0);
    assert_eq!(red.texture_count(TextureType::Diffuse), 0);

    let blue = scene
        .materials()
        .iter()
        .find(|m| m.name() == "blue")
        .expect("material `blue`");
    assert_relative_eq!(blue.opacity().unwrap_or_default(), 0.5);
    let texture = blue.texture(TextureType::Diffuse, 0).expect("diffuse map");
    assert_eq!(texture.path, "blue.png");
    assert_eq!(texture.embedded_index(), None);

    for mesh in scene.meshes() {
        assert!(mesh.material_index() < scene.materials().len());
        assert!(mesh.has_texture_coords(0));
    }

    for (object, expected) in [("Left", "red"), ("Right", "blue")] {
        let node = scene.find_node(object).expect("one node per OBJ object");
        let meshes: Vec<_> = scene.meshes_of(&node).collect();
        assert_eq!(meshes.len(), 1, "{object} holds a single quad");
        let material = scene.material_of(meshes[0]).expect("mesh material index is in range");
        assert_eq!(material.name(), expected, "{object} uses `usemtl {expected}`");
    }
}

#[test]
fn test_import_from_memory() {
    init_logging();
    let Some(path) = fixture(BOX) else { return };
    let bytes = std::fs::read(path).expect("read fixture");

    let scene = ImportBuilder::new()
        .with_post_process(PostProcessSteps::TRIANGULATE | PostProcessSteps::JOIN_IDENTICAL_VERTICES)
        .import_from_memory(&bytes, Some(".obj"))
        .expect("in-memory OBJ should import");
    assert_eq!(scene.meshes()[0].num_vertices(), 8);
    assert_eq!(scene.source_path(), None);
}

#[test]
fn test_missing_file_is_import_failed() {
    init_logging();
    let err = Importer::new()
        .read_file("tests/models/does_not_exist.obj")
        .unwrap_err();
    let Error::ImportFailed { message } = &err else {
        panic!("expected ImportFailed, got {err:?}");
    };
    assert!(!message.is_empty());
    assert!(owned_assimp::last_error().is_some());
}

#[test]
fn test_unsupported_file_is_import_failed() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.unknownext");
    std::fs::write(&path, b"not a model").expect("write temp file");

    let err = Importer::new().read_file(&path).unwrap_err();
    let Error::ImportFailed { message } = &err else {
        panic!("expected ImportFailed, got {err:?}");
    };
    assert!(!message.is_empty());
    assert!(owned_assimp::last_error().is_some_and(|e| !e.is_empty()));
}

#[test]
fn test_extension_queries() {
    assert!(owned_assimp::is_extension_supported(".obj"));
    assert!(owned_assimp::is_extension_supported("OBJ"));
    assert!(!owned_assimp::is_extension_supported(".definitely_not_a_format"));

    let extensions = owned_assimp::import_extensions();
    assert!(extensions.iter().any(|e| e == ".obj"), "{extensions:?}");
    assert!(extensions.iter().all(|e| e.starts_with('.')));
}

#[test]
fn test_version() {
    assert!(owned_assimp::version::major() >= 5);
    assert!(!owned_assimp::version::assimp_version().is_empty());
}
