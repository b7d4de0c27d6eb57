use std::{env, path::PathBuf};

#[derive(Clone, Debug)]
pub struct BuildConfig {
    #[cfg_attr(not(feature = "system"), allow(dead_code))]
    pub target: String,
    pub target_os: String,
    pub target_env: String,
    pub docs_rs: bool,
    pub verbose: bool,
    /// Directory holding a prebuilt `assimp` library, bypassing discovery.
    pub lib_dir: Option<PathBuf>,
    /// Library name override (e.g. `assimp-vc143-mt` on Windows).
    pub lib_name: String,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self {
            target: env::var("TARGET").unwrap_or_default(),
            target_os: env::var("CARGO_CFG_TARGET_OS").unwrap_or_default(),
            target_env: env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default(),
            docs_rs: env::var("DOCS_RS").is_ok(),
            verbose: env::var("OWNED_ASSIMP_VERBOSE").is_ok(),
            lib_dir: env::var_os("ASSIMP_LIB_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            lib_name: env::var("ASSIMP_LIB_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "assimp".to_string()),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.target_os == "windows"
    }

    pub fn is_macos(&self) -> bool {
        self.target_os == "macos"
    }

    pub fn is_msvc(&self) -> bool {
        self.target_env == "msvc"
    }

    pub fn emit_rerun_triggers(&self) {
        println!("cargo:rerun-if-changed=build.rs");

        println!("cargo:rerun-if-env-changed=ASSIMP_LIB_DIR");
        println!("cargo:rerun-if-env-changed=ASSIMP_LIB_NAME");
        println!("cargo:rerun-if-env-changed=OWNED_ASSIMP_VERBOSE");

        // System discovery knobs (pkg-config/vcpkg)
        println!("cargo:rerun-if-env-changed=PKG_CONFIG");
        println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
        println!("cargo:rerun-if-env-changed=PKG_CONFIG_LIBDIR");
        println!("cargo:rerun-if-env-changed=PKG_CONFIG_SYSROOT_DIR");
        println!("cargo:rerun-if-env-changed=VCPKG_ROOT");
        println!("cargo:rerun-if-env-changed=VCPKGRS_TRIPLET");
        println!("cargo:rerun-if-env-changed=VCPKGRS_DYNAMIC");
    }
}
