use std::sync::Arc;

use tessera_geom::{Aabb, Vec2, Vec3};
use tessera_voxels::VoxelId;

/// How a mesher hands back quad corners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Each quad carries its four positions inline.
    #[default]
    Unindexed,
    /// Quads index into `MesherResult::vertices`; coincident lattice corners share one entry.
    SharedVertices,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuadCorners {
    Positions([Vec3; 4]),
    Indices([u32; 4]),
}

/// One emitted rectangle, counter-clockwise when viewed along `-normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Quad {
    pub corners: QuadCorners,
    pub normal: Vec3,
    pub uv: [Vec2; 4],
    pub type_id: VoxelId,
    pub material: Arc<str>,
}

#[derive(Clone, Debug, Default)]
pub struct MesherResult {
    /// Shared positions; empty in unindexed mode.
    pub vertices: Vec<Vec3>,
    pub quads: Vec<Quad>,
}

impl MesherResult {
    pub fn with_capacity(quads: usize, vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            quads: Vec::with_capacity(quads),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Resolves a quad's corners to positions regardless of output mode.
    ///
    /// Panics if an index is out of range for `vertices`, which the meshers
    /// never produce.
    pub fn positions(&self, quad: &Quad) -> [Vec3; 4] {
        match &quad.corners {
            QuadCorners::Positions(p) => *p,
            QuadCorners::Indices(ix) => ix.map(|i| self.vertices[i as usize]),
        }
    }

    /// Total area covered by all quads.
    pub fn surface_area(&self) -> f32 {
        self.quads
            .iter()
            .map(|q| {
                let [a, b, _, d] = self.positions(q);
                (b - a).cross(d - a).length()
            })
            .sum()
    }

    /// Bounding box of every emitted corner.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.quads.iter().flat_map(|q| self.positions(q)))
    }

    /// Same quads with positions inlined.
    pub fn into_unindexed(self) -> MesherResult {
        let quads = self
            .quads
            .iter()
            .map(|q| Quad {
                corners: QuadCorners::Positions(self.positions(q)),
                ..q.clone()
            })
            .collect();
        MesherResult {
            vertices: Vec::new(),
            quads,
        }
    }
}
