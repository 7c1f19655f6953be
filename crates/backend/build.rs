use std::env;
use std::fs;
use std::path::Path;

/// Copies the workspace `config.toml` next to the backend binary, where
/// `shared::config::load_config` looks for it.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    let dest_config = target_dir.join("config.toml");

    if source_config.exists() {
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }
}
