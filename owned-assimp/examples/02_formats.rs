//! List the formats the linked Assimp can import, or query one
//!
//! Usage: 02_formats [extension]

#[path = "common/mod.rs"]
mod common;

fn main() {
    let _logger = common::init_logging();
    println!(
        "owned-assimp {} on Assimp {}",
        owned_assimp::version::CRATE_VERSION,
        owned_assimp::version::assimp_version()
    );

    if let Some(ext) = std::env::args().nth(1) {
        let supported = owned_assimp::is_extension_supported(&ext);
        println!("{ext}: {}", if supported { "supported" } else { "not supported" });
        return;
    }

    let extensions = owned_assimp::import_extensions();
    println!("{} importable extensions:", extensions.len());
    for chunk in extensions.chunks(10) {
        println!("  {}", chunk.join(" "));
    }
}
