use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tessera_geom::{Vec2, Vec3};

use crate::face::Direction;
use crate::hash::fnv1a64;

/// Stable voxel type identifier: FNV-1a 64 of the type name.
pub type VoxelId = u64;

/// Cell value meaning "nothing here" in id-valued volumes.
pub const EMPTY_VOXEL_ID: VoxelId = 0;
/// Type id reported for cells whose type is unknown.
pub const UNSET_VOXEL_ID: VoxelId = u64::MAX;

static NO_MATERIAL: LazyLock<Arc<str>> = LazyLock::new(|| Arc::from(""));

/// Per-face override carried by a component.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceDef {
    pub uv_min: Vec2,
    pub uv_max: Vec2,
    pub material: Arc<str>,
    pub cull: bool,
}

impl Default for FaceDef {
    fn default() -> Self {
        Self {
            uv_min: Vec2::ZERO,
            uv_max: Vec2::ONE,
            material: Arc::clone(&NO_MATERIAL),
            cull: true,
        }
    }
}

/// One axis-aligned sub-box of a voxel type.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelComponentDef {
    pub min: Vec3,
    pub max: Vec3,
    pub translate: Vec3,
    pub faces: HashMap<Direction, FaceDef>,
}

impl Default for VoxelComponentDef {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ONE,
            translate: Vec3::ZERO,
            faces: HashMap::new(),
        }
    }
}

impl VoxelComponentDef {
    /// Flattens this component's face in `dir` (or the default face when the
    /// component does not override it) into a mesher-ready definition.
    pub fn face_definition(&self, dir: Direction) -> VoxelFaceDefinition {
        let face = self.faces.get(&dir).cloned().unwrap_or_default();
        VoxelFaceDefinition {
            min: self.min,
            max: self.max,
            translate: self.translate,
            uv_min: face.uv_min,
            uv_max: face.uv_max,
            material: face.material,
            cull: face.cull,
        }
    }
}

/// One renderable sub-rectangle of one cube face.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelFaceDefinition {
    pub min: Vec3,
    pub max: Vec3,
    pub translate: Vec3,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
    pub material: Arc<str>,
    pub cull: bool,
}

impl VoxelFaceDefinition {
    /// The whole unit face, full UV window, no material, culls.
    pub fn full() -> Self {
        VoxelComponentDef::default().face_definition(Direction::Top)
    }

    /// True when the clip box has zero extent on some axis.
    pub fn is_degenerate(&self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y || self.max.z <= self.min.z
    }
}

/// Fully resolved voxel type.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelTypeDef {
    pub name: String,
    pub id: VoxelId,
    pub components: Vec<VoxelComponentDef>,
    // Precomputed per-direction face lists (fast path for the mesher)
    faces: [Vec<VoxelFaceDefinition>; 6],
}

impl VoxelTypeDef {
    pub fn new(name: impl Into<String>, components: Vec<VoxelComponentDef>) -> Self {
        let name = name.into();
        let faces = Direction::ALL.map(|dir| {
            components
                .iter()
                .map(|c| c.face_definition(dir))
                .collect::<Vec<_>>()
        });
        Self {
            id: fnv1a64(&name),
            name,
            components,
            faces,
        }
    }

    /// Face geometry to draw for direction `dir`, one entry per component.
    #[inline]
    pub fn faces(&self, dir: Direction) -> &[VoxelFaceDefinition] {
        &self.faces[dir.index()]
    }

    /// Whether this type hides its own face in `dir` (and occludes the
    /// neighbor's reciprocal face). A type without components never occludes;
    /// otherwise every component face must cull.
    pub fn culls(&self, dir: Direction) -> bool {
        let f = self.faces(dir);
        !f.is_empty() && f.iter().all(|d| d.cull)
    }
}
