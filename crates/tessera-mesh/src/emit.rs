use std::sync::Arc;

use tessera_geom::{Vec2, Vec3};
use tessera_voxels::{Direction, VoxelFaceDefinition, VoxelId};

use crate::constants::NO_VERTEX;
use crate::cube::CubeFace;
use crate::reader::VoxelReader;
use crate::result::{MesherResult, Quad, QuadCorners};
use crate::volume::Dims;

// Destination for emitted quads; one implementation per output mode.
pub(crate) trait QuadSink {
    fn push_quad(
        &mut self,
        corners: [Vec3; 4],
        normal: Vec3,
        uv: [Vec2; 4],
        type_id: VoxelId,
        material: &Arc<str>,
    );

    fn finish(self) -> MesherResult;
}

pub(crate) struct UnindexedSink {
    result: MesherResult,
}

impl UnindexedSink {
    pub(crate) fn new(reserve_quads: usize) -> Self {
        Self {
            result: MesherResult::with_capacity(reserve_quads, 0),
        }
    }
}

impl QuadSink for UnindexedSink {
    #[inline]
    fn push_quad(
        &mut self,
        corners: [Vec3; 4],
        normal: Vec3,
        uv: [Vec2; 4],
        type_id: VoxelId,
        material: &Arc<str>,
    ) {
        self.result.quads.push(Quad {
            corners: QuadCorners::Positions(corners),
            normal,
            uv,
            type_id,
            material: Arc::clone(material),
        });
    }

    fn finish(self) -> MesherResult {
        self.result
    }
}

// Dense map from integer lattice point to vertex index. Corners that are not
// on the lattice (sub-box faces) are appended unshared.
pub(crate) struct SharedVertexSink {
    result: MesherResult,
    lattice: Dims,
    vert_map: Vec<u32>,
}

impl SharedVertexSink {
    pub(crate) fn new(dims: Dims, reserve_quads: usize) -> Self {
        let lattice = Dims::new(dims.width + 1, dims.height + 1, dims.depth + 1);
        Self {
            result: MesherResult::with_capacity(reserve_quads, lattice.len()),
            lattice,
            vert_map: vec![NO_VERTEX; lattice.len()],
        }
    }

    fn lattice_slot(&self, p: Vec3) -> Option<usize> {
        let on_lattice = |c: f32| c >= 0.0 && c.fract() == 0.0;
        if !(on_lattice(p.x) && on_lattice(p.y) && on_lattice(p.z)) {
            return None;
        }
        let (x, y, z) = (p.x as usize, p.y as usize, p.z as usize);
        if x >= self.lattice.width || y >= self.lattice.height || z >= self.lattice.depth {
            return None;
        }
        Some(self.lattice.index(x, y, z))
    }

    fn vertex(&mut self, p: Vec3) -> u32 {
        let Some(slot) = self.lattice_slot(p) else {
            return self.append(p);
        };
        match self.vert_map[slot] {
            NO_VERTEX => {
                let ix = self.append(p);
                self.vert_map[slot] = ix;
                ix
            }
            ix => ix,
        }
    }

    #[inline]
    fn append(&mut self, p: Vec3) -> u32 {
        let ix = self.result.vertices.len() as u32;
        self.result.vertices.push(p);
        ix
    }
}

impl QuadSink for SharedVertexSink {
    fn push_quad(
        &mut self,
        corners: [Vec3; 4],
        normal: Vec3,
        uv: [Vec2; 4],
        type_id: VoxelId,
        material: &Arc<str>,
    ) {
        let indices = corners.map(|c| self.vertex(c));
        self.result.quads.push(Quad {
            corners: QuadCorners::Indices(indices),
            normal,
            uv,
            type_id,
            material: Arc::clone(material),
        });
    }

    fn finish(self) -> MesherResult {
        log::trace!(
            "shared vertices: {} of {} lattice slots used",
            self.vert_map.iter().filter(|&&v| v != NO_VERTEX).count(),
            self.vert_map.len()
        );
        self.result
    }
}

/// Clips the unit face to each definition's sub-box, applies its translation,
/// moves it to `origin` and remaps texture coordinates into its UV window.
#[inline]
pub(crate) fn emit_face_defs(
    sink: &mut impl QuadSink,
    face: &CubeFace,
    defs: &[VoxelFaceDefinition],
    origin: Vec3,
    type_id: VoxelId,
) {
    for def in defs {
        let corners = face
            .corners
            .map(|c| c.clamp(def.min, def.max) + def.translate + origin);
        let uv = face.uv.map(|t| def.uv_min.lerp(def.uv_max, 1.0 - t));
        sink.push_quad(corners, face.normal, uv, type_id, &def.material);
    }
}

/// Emits every definition the reader gives for `cell`'s face in `dir`.
#[inline]
pub(crate) fn emit_cell_face<C, R: VoxelReader<C>>(
    sink: &mut impl QuadSink,
    reader: &R,
    faces: &[CubeFace; 6],
    cell: &C,
    dir: Direction,
    origin: Vec3,
) {
    emit_face_defs(
        sink,
        &faces[dir.index()],
        reader.faces_for(cell, dir),
        origin,
        reader.type_of(cell),
    );
}
