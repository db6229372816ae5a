use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

// One voxel type as authored, before inheritance is resolved.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct VoxelRecord {
    // Informational only; the key the record is registered under is authoritative.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "$parent", alias = "parent")]
    pub parent: Option<String>,
    // placeholder key -> material; replaces `${key}` in inherited face materials
    #[serde(default)]
    pub materials: HashMap<String, String>,
    // Absent means "inherit from the nearest ancestor that declares components".
    #[serde(default)]
    pub components: Option<Vec<ComponentRecord>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ComponentRecord {
    #[serde(default)]
    pub min: Option<[f32; 3]>,
    #[serde(default)]
    pub max: Option<[f32; 3]>,
    #[serde(default)]
    pub translate: Option<[f32; 3]>,
    // face name (north/south/east/west/top/bottom or canonical) -> overrides
    #[serde(default)]
    pub face: HashMap<String, FaceRecord>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FaceRecord {
    #[serde(default)]
    pub uv_min: Option<[f32; 2]>,
    #[serde(default)]
    pub uv_max: Option<[f32; 2]>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub cull: Option<bool>,
}

// Single-file form: every voxel type as a `[voxels.<name>]` table.
#[derive(Deserialize, Debug, Default)]
pub struct VoxelsConfig {
    #[serde(default)]
    pub voxels: HashMap<String, VoxelRecord>,
}

impl VoxelRecord {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Loads records from either a directory holding one `<name>.toml` per voxel
/// type, or a single file with `[voxels.<name>]` tables.
pub fn load_records(
    path: impl AsRef<Path>,
) -> Result<HashMap<String, VoxelRecord>, Box<dyn Error>> {
    let path = path.as_ref();
    if path.is_dir() {
        load_records_from_dir(path)
    } else {
        let s = fs::read_to_string(path)?;
        let cfg: VoxelsConfig = toml::from_str(&s)?;
        Ok(cfg.voxels)
    }
}

pub fn load_records_from_dir(
    dir: impl AsRef<Path>,
) -> Result<HashMap<String, VoxelRecord>, Box<dyn Error>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    // read_dir order is platform dependent
    paths.sort();
    let mut out = HashMap::with_capacity(paths.len());
    for p in paths {
        let Some(stem) = p.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("skipping voxel file with non-UTF-8 name: {}", p.display());
            continue;
        };
        let s = fs::read_to_string(&p)?;
        let record = VoxelRecord::from_toml_str(&s)
            .map_err(|e| format!("{}: {e}", p.display()))?;
        if let Some(declared) = record.name.as_deref() {
            if declared != stem {
                log::warn!(
                    "{} declares name `{declared}`; registering it as `{stem}`",
                    p.display()
                );
            }
        }
        log::debug!("loaded voxel record `{stem}` from {}", p.display());
        out.insert(stem.to_string(), record);
    }
    Ok(out)
}
