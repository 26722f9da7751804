use std::fs;
use std::path::PathBuf;

use window_manager::LauncherManifest;

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("launchers.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: LauncherManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = manifest.validate() {
        panic!("invalid launcher manifest {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize launcher manifest");
    let generated = format!(
        "/// Build-time validated launcher manifest JSON.\n\
pub const LAUNCHER_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("launcher_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
