//! Quickstart: import a model, print its hierarchy, save it and load it back

#[path = "common/mod.rs"]
mod common;

use std::error::Error;

use owned_assimp::{ImportBuilder, persist, postprocess::PostProcessSteps};

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = common::init_logging();
    let path = common::model_path("box.obj");

    let scene = ImportBuilder::new()
        .with_post_process(PostProcessSteps::FAST | PostProcessSteps::GEN_BOUNDING_BOXES)
        .import_file(&path)?;
    println!("Loaded: {}", path.display());
    println!("{scene}");
    print!("{}", scene.print_hierarchy());

    for mesh in scene.meshes() {
        let material = scene.material_of(mesh).map(|m| m.name()).unwrap_or("<none>");
        println!(
            "mesh {:?}: vertices={} faces={} material={material} aabb={:?}..{:?}",
            mesh.name(),
            mesh.num_vertices(),
            mesh.num_faces(),
            mesh.aabb().min,
            mesh.aabb().max
        );
    }
    if let Some(info) = scene.memory_info() {
        println!("native memory: {:.1} KiB", info.total_kb());
    }

    let out = std::env::temp_dir().join("owned_assimp_quickstart.oasc");
    persist::save(&scene, &out)?;
    let loaded = persist::load(&out)?;
    println!(
        "saved to {} and loaded back: {}",
        out.display(),
        if loaded == scene { "identical" } else { "DIFFERENT" }
    );
    std::fs::remove_file(&out)?;
    Ok(())
}
