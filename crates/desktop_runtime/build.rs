use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Placement {
    #[default]
    Cascade,
    Centered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InventoryEntry {
    id: String,
    label: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    external_url: Option<String>,
    #[serde(default)]
    show_on_desktop: bool,
    #[serde(default)]
    show_in_start_menu: bool,
    #[serde(default)]
    dismiss_once: bool,
    #[serde(default)]
    placement: Placement,
    #[serde(default)]
    width: Option<i32>,
    #[serde(default)]
    height: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InventoryManifest {
    schema_version: u32,
    fallback_icon: String,
    #[serde(rename = "entry", default)]
    entries: Vec<InventoryEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop_inventory.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: InventoryManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "inventory schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &manifest.entries {
        if entry.id.trim().is_empty() {
            panic!("inventory entry with label `{}` has an empty id", entry.label);
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate inventory id `{}` in {}", entry.id, path.display());
        }
        if matches!((entry.width, entry.height), (Some(w), _) if w <= 0)
            || matches!((entry.width, entry.height), (_, Some(h)) if h <= 0)
        {
            panic!("inventory entry `{}` has a non-positive size", entry.id);
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize desktop inventory");
    let generated = format!(
        "/// Build-time generated desktop inventory JSON.\n\
pub const DESKTOP_INVENTORY_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_inventory_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
