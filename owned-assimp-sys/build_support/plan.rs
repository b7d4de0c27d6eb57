use std::path::PathBuf;

use crate::build_support::{config::BuildConfig, util};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Static,
    Dynamic,
}

#[derive(Clone, Debug)]
pub struct BuildPlan {
    pub include_dirs: Vec<PathBuf>,
    pub link_kind: LinkKind,
    pub link_lib: Option<String>,
    pub link_search: Vec<PathBuf>,
    pub method: BuildMethod,
}

#[derive(Clone, Debug)]
pub enum BuildMethod {
    /// Discovered through pkg-config or vcpkg, which emit their own link flags.
    #[cfg(feature = "system")]
    System,
    /// Explicit `ASSIMP_LIB_DIR`.
    LibDir,
    /// Plain `-lassimp`, relying on the default linker search path.
    Default,
}

impl BuildPlan {
    pub fn emit_link(&self, cfg: &BuildConfig) {
        for p in &self.link_search {
            println!("cargo:rustc-link-search=native={}", p.display());
        }
        if let Some(lib) = &self.link_lib {
            match self.link_kind {
                LinkKind::Static => println!("cargo:rustc-link-lib=static={}", lib),
                LinkKind::Dynamic => println!("cargo:rustc-link-lib={}", lib),
            }
        }

        // Expose include paths to downstream build scripts (DEP_ASSIMP_INCLUDE).
        if let Some(first) = self.include_dirs.first() {
            println!("cargo:include={}", first.display());
        }
        if let Some(joined) = util::join_paths_for_env(&self.include_dirs) {
            println!("cargo:include_paths={}", joined);
        }

        if cfg.verbose {
            util::warn(format!(
                "Assimp plan: method={:?} link_kind={:?} lib={:?}",
                self.method, self.link_kind, self.link_lib
            ));
            for p in &self.link_search {
                util::warn(format!("Assimp link search: {}", p.display()));
            }
        }
    }
}

pub fn resolve(cfg: &BuildConfig) -> BuildPlan {
    let link_kind = if cfg!(feature = "static-link") {
        LinkKind::Static
    } else {
        LinkKind::Dynamic
    };

    // An explicit directory always wins over discovery.
    if let Some(dir) = &cfg.lib_dir {
        return BuildPlan {
            include_dirs: Vec::new(),
            link_kind,
            link_lib: Some(cfg.lib_name.clone()),
            link_search: vec![dir.clone()],
            method: BuildMethod::LibDir,
        };
    }

    #[cfg(feature = "system")]
    {
        if let Some(plan) = crate::build_support::system::probe(cfg, link_kind) {
            return plan;
        }
        util::warn("system discovery of assimp failed; falling back to `-lassimp`");
    }

    BuildPlan {
        include_dirs: Vec::new(),
        link_kind,
        link_lib: Some(cfg.lib_name.clone()),
        link_search: Vec::new(),
        method: BuildMethod::Default,
    }
}
