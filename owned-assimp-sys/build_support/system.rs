use crate::build_support::{
    config::BuildConfig,
    plan::{BuildMethod, BuildPlan, LinkKind},
    util,
};

/// Oldest major version whose struct layouts match the mirrors in `src/`.
const REQUIRED_MAJOR: u32 = 5;

pub fn probe(cfg: &BuildConfig, link_kind: LinkKind) -> Option<BuildPlan> {
    if cfg.is_windows() && cfg.is_msvc() {
        let mut vcpkg_cfg = vcpkg::Config::new();
        vcpkg_cfg.emit_includes(true);

        if matches!(link_kind, LinkKind::Static) && std::env::var("VCPKGRS_TRIPLET").is_err() {
            if let Some(triplet) = default_vcpkg_static_triplet(&cfg.target) {
                vcpkg_cfg.target_triplet(triplet);
            }
        }

        let lib = match vcpkg_cfg.find_package("assimp") {
            Ok(lib) => lib,
            Err(e) => {
                util::warn(format!("vcpkg could not find assimp: {e}"));
                return None;
            }
        };

        return Some(BuildPlan {
            include_dirs: lib.include_paths.clone(),
            link_kind,
            link_lib: None, // vcpkg emits all rustc link flags
            link_search: Vec::new(),
            method: BuildMethod::System,
        });
    }

    let lib = match pkg_config::Config::new()
        .statik(matches!(link_kind, LinkKind::Static))
        .probe("assimp")
    {
        Ok(lib) => lib,
        Err(e) => {
            util::warn(format!("pkg-config could not find assimp: {e}"));
            return None;
        }
    };

    if parse_major_from_version(&lib.version).is_some_and(|m| m < REQUIRED_MAJOR) {
        panic!(
            "system assimp is too old (pkg-config reports version {}). This crate requires Assimp >= {}.",
            lib.version, REQUIRED_MAJOR
        );
    }

    Some(BuildPlan {
        include_dirs: lib.include_paths.clone(),
        link_kind,
        link_lib: None, // pkg-config emits all rustc link flags
        link_search: Vec::new(),
        method: BuildMethod::System,
    })
}

fn default_vcpkg_static_triplet(target: &str) -> Option<&'static str> {
    if target.starts_with("x86_64-") {
        Some("x64-windows-static")
    } else if target.starts_with("i686-") {
        Some("x86-windows-static")
    } else if target.starts_with("aarch64-") {
        Some("arm64-windows-static")
    } else {
        None
    }
}

fn parse_major_from_version(version: &str) -> Option<u32> {
    let first = version
        .split(|c: char| c == '.' || c == '-' || c == '+' || c == '~')
        .next()?
        .trim();
    first.parse::<u32>().ok()
}
