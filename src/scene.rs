use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tessera_mesh::{Dims, OutputMode, UvOrigin};
use tessera_voxels::{EMPTY_VOXEL_ID, VoxelId, VoxelRegistry};

#[derive(Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UvOriginArg {
    #[default]
    TopLeft,
    BottomLeft,
}

impl From<UvOriginArg> for UvOrigin {
    fn from(o: UvOriginArg) -> Self {
        match o {
            UvOriginArg::TopLeft => UvOrigin::TopLeft,
            UvOriginArg::BottomLeft => UvOrigin::BottomLeft,
        }
    }
}

// Per-scene mesher defaults; command-line flags can only switch options on.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MesherSettings {
    #[serde(default)]
    pub add_border: bool,
    #[serde(default)]
    pub shared_vertices: bool,
    #[serde(default)]
    pub uv_origin: UvOriginArg,
}

impl MesherSettings {
    pub fn with_flags(mut self, border: bool, shared: bool, uv_origin: Option<UvOriginArg>) -> Self {
        self.add_border |= border;
        self.shared_vertices |= shared;
        if let Some(o) = uv_origin {
            self.uv_origin = o;
        }
        self
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.shared_vertices {
            OutputMode::SharedVertices
        } else {
            OutputMode::Unindexed
        }
    }
}

/// Scene file as authored: palette names plus 1-based palette indices per cell.
#[derive(Deserialize, Debug, Clone)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    #[serde(default)]
    pub palette: Vec<String>,
    pub cells: Vec<u32>,
    #[serde(default)]
    pub mesher: MesherSettings,
}

/// A scene with every cell resolved to a voxel id.
#[derive(Debug, Clone)]
pub struct Scene {
    pub dims: Dims,
    pub cells: Vec<VoxelId>,
    pub mesher: MesherSettings,
}

impl SceneConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s).map_err(|e| format!("{}: {e}", path.display()).into())
    }

    pub fn into_scene(self, reg: &VoxelRegistry) -> Result<Scene, Box<dyn Error>> {
        let dims = Dims::new(self.width, self.height, self.depth);
        if self.cells.len() != dims.len() {
            return Err(format!(
                "scene has {} cell(s) but {}x{}x{} needs {}",
                self.cells.len(),
                dims.width,
                dims.height,
                dims.depth,
                dims.len()
            )
            .into());
        }
        let mut ids = Vec::with_capacity(self.palette.len());
        for name in &self.palette {
            let id = reg
                .id_by_name(name)
                .ok_or_else(|| format!("scene palette names unknown voxel `{name}`"))?;
            ids.push(id);
        }
        let cells = self
            .cells
            .iter()
            .map(|&c| match c {
                0 => Ok(EMPTY_VOXEL_ID),
                k => ids.get(k as usize - 1).copied().ok_or_else(|| {
                    format!("cell value {k} is outside the {}-entry palette", ids.len())
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Scene {
            dims,
            cells,
            mesher: self.mesher,
        })
    }
}
