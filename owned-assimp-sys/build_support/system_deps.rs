use crate::build_support::config::BuildConfig;

/// C++ runtime needed when assimp is linked as a static archive.
pub fn emit(cfg: &BuildConfig) {
    if cfg.is_windows() {
        if !cfg.is_msvc() {
            // MinGW
            println!("cargo:rustc-link-lib=stdc++");
        }
        return;
    }

    if cfg.is_macos() {
        println!("cargo:rustc-link-lib=c++");
        return;
    }

    // Linux/BSD
    println!("cargo:rustc-link-lib=stdc++");
    println!("cargo:rustc-link-lib=z");
}
