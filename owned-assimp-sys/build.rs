mod build_support;

use build_support::{
    config::BuildConfig,
    plan::{self, LinkKind},
    system_deps,
};

fn main() {
    let cfg = BuildConfig::new();
    cfg.emit_rerun_triggers();

    // docs.rs has no native Assimp; the mirrors are plain Rust and need nothing linked.
    if cfg.docs_rs {
        return;
    }

    let plan = plan::resolve(&cfg);

    // C++ runtime is only pulled in transitively for dynamic libraries.
    if matches!(plan.link_kind, LinkKind::Static) {
        system_deps::emit(&cfg);
    }

    plan.emit_link(&cfg);
}
