//! Face-culling mesher.
//!
//! Every pair of cells adjacent along +x, +y or +z is inspected once. Where one
//! side is solid and the other is not, the solid side's face toward the gap is
//! emitted. Where both are solid the shared boundary is drawn on both sides
//! unless each side's face culls. Cells outside the volume are empty.

use tessera_geom::Vec3;
use tessera_voxels::Direction;

use crate::constants::{BORDER, FACES_PER_CELL};
use crate::cube::{CubeFace, UvOrigin, cube_faces};
use crate::emit::{QuadSink, SharedVertexSink, UnindexedSink, emit_cell_face};
use crate::reader::{OptionalReader, VoxelReader};
use crate::result::{MesherResult, OutputMode};
use crate::volume::{Dims, pad_volume};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CullingMesher {
    pub dims: Dims,
    /// Sweep a padded copy instead of bounds-checking neighbors. Output is identical.
    pub add_border: bool,
    pub mode: OutputMode,
    pub uv_origin: UvOrigin,
}

impl CullingMesher {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            ..Default::default()
        }
    }

    pub fn with_border(mut self, add_border: bool) -> Self {
        self.add_border = add_border;
        self
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_uv_origin(mut self, uv_origin: UvOrigin) -> Self {
        self.uv_origin = uv_origin;
        self
    }

    /// Meshes `volume` (x-fastest, `dims.len()` cells). Missing trailing cells
    /// read as empty.
    ///
    /// Dims with an axis of `i32::MAX` or more are rejected with an error log
    /// and an empty result.
    pub fn eval<C, R: VoxelReader<C>>(&self, volume: &[C], reader: &R) -> MesherResult {
        let Some(extent) = self.dims.signed_extent() else {
            log::error!(
                "culling mesher: dims {}x{}x{} exceed the i32 sweep range",
                self.dims.width,
                self.dims.height,
                self.dims.depth
            );
            return MesherResult::default();
        };
        if volume.len() < self.dims.len() {
            log::warn!(
                "volume holds {} cell(s) but dims {}x{}x{} need {}; treating the rest as empty",
                volume.len(),
                self.dims.width,
                self.dims.height,
                self.dims.depth,
                self.dims.len()
            );
        }
        let reserve = self.dims.len() * FACES_PER_CELL;
        let out = match self.mode {
            OutputMode::Unindexed => {
                self.run(volume, reader, extent, UnindexedSink::new(reserve))
            }
            OutputMode::SharedVertices => self.run(
                volume,
                reader,
                extent,
                SharedVertexSink::new(self.dims, reserve),
            ),
        };
        log::debug!(
            "culling mesher {}x{}x{} (border={}, {:?}): {} quad(s), {} shared vertex(es)",
            self.dims.width,
            self.dims.height,
            self.dims.depth,
            self.add_border,
            self.mode,
            out.quads.len(),
            out.vertices.len()
        );
        out
    }

    fn run<C, R: VoxelReader<C>, S: QuadSink>(
        &self,
        volume: &[C],
        reader: &R,
        hi: [i32; 3],
        mut sink: S,
    ) -> MesherResult {
        let faces = cube_faces(self.uv_origin);
        let d = self.dims;
        if self.add_border {
            let padded = pad_volume(volume, d);
            let pd = d.padded(BORDER as usize);
            // padded coordinates: logical -1 is 0, so the sweep starts at 0
            let fetch = |x: i32, y: i32, z: i32| {
                padded.get(pd.index(x as usize, y as usize, z as usize))
            };
            sweep(
                &mut sink,
                &OptionalReader(reader),
                faces,
                [0; 3],
                hi,
                BORDER,
                fetch,
            );
        } else {
            let fetch =
                |x: i32, y: i32, z: i32| d.index_checked(x, y, z).and_then(|i| volume.get(i));
            let last = hi.map(|h| h - 1);
            sweep(&mut sink, reader, faces, [-1; 3], last, 0, fetch);
        }
        sink.finish()
    }
}

/// Between two solid cells the boundary is drawn on both sides when either
/// side's face does not cull.
// Visits cells `lo..=hi` per axis together with their +x/+y/+z neighbors.
// `base` is subtracted from sweep coordinates to get volume coordinates.
fn sweep<'v, C: 'v, R, S, F>(
    sink: &mut S,
    reader: &R,
    faces: &[CubeFace; 6],
    lo: [i32; 3],
    hi: [i32; 3],
    base: i32,
    fetch: F,
) where
    R: VoxelReader<C>,
    S: QuadSink,
    F: Fn(i32, i32, i32) -> Option<&'v C>,
{
    let origin = |x: i32, y: i32, z: i32| {
        Vec3::new((x - base) as f32, (y - base) as f32, (z - base) as f32)
    };
    let solid = |c: Option<&C>| c.is_some_and(|c| reader.visible(c));

    for z in lo[2]..=hi[2] {
        for y in lo[1]..=hi[1] {
            for x in lo[0]..=hi[0] {
                let here = fetch(x, y, z);
                let here_solid = solid(here);
                for dir in Direction::POSITIVE {
                    let (dx, dy, dz) = dir.delta();
                    let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                    let there = fetch(nx, ny, nz);
                    match (here, there) {
                        (Some(h), Some(t)) if here_solid && solid(there) => {
                            let open = !reader.culls(h, dir) || !reader.culls(t, dir.opposite());
                            if open {
                                emit_cell_face(sink, reader, faces, h, dir, origin(x, y, z));
                                emit_cell_face(
                                    sink,
                                    reader,
                                    faces,
                                    t,
                                    dir.opposite(),
                                    origin(nx, ny, nz),
                                );
                            }
                        }
                        (Some(h), _) if here_solid => {
                            emit_cell_face(sink, reader, faces, h, dir, origin(x, y, z));
                        }
                        (_, Some(t)) if solid(there) => {
                            emit_cell_face(
                                sink,
                                reader,
                                faces,
                                t,
                                dir.opposite(),
                                origin(nx, ny, nz),
                            );
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Culling mesh of `volume` with unindexed output and top-left UVs.
pub fn mesh_culled<C, R: VoxelReader<C>>(
    volume: &[C],
    dims: Dims,
    reader: &R,
    add_border: bool,
) -> MesherResult {
    CullingMesher::new(dims)
        .with_border(add_border)
        .eval(volume, reader)
}
