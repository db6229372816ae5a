use tessera_geom::Vec3;
use tessera_voxels::Direction;

use crate::constants::FACES_PER_CELL;
use crate::cube::{UvOrigin, cube_faces};
use crate::emit::{QuadSink, SharedVertexSink, UnindexedSink, emit_cell_face};
use crate::reader::VoxelReader;
use crate::result::{MesherResult, OutputMode};
use crate::volume::Dims;

/// Emits all six faces of every visible cell with no occlusion test. Useful
/// as a reference for the culling mesher and for debugging face definitions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleMesher {
    pub dims: Dims,
    pub mode: OutputMode,
    pub uv_origin: UvOrigin,
}

impl SimpleMesher {
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_uv_origin(mut self, uv_origin: UvOrigin) -> Self {
        self.uv_origin = uv_origin;
        self
    }

    pub fn eval<C, R: VoxelReader<C>>(&self, volume: &[C], reader: &R) -> MesherResult {
        let reserve = self.dims.len() * FACES_PER_CELL;
        let out = match self.mode {
            OutputMode::Unindexed => self.run(volume, reader, UnindexedSink::new(reserve)),
            OutputMode::SharedVertices => {
                self.run(volume, reader, SharedVertexSink::new(self.dims, reserve))
            }
        };
        log::debug!(
            "simple mesher {}x{}x{}: {} quad(s)",
            self.dims.width,
            self.dims.height,
            self.dims.depth,
            out.quads.len()
        );
        out
    }

    fn run<C, R: VoxelReader<C>, S: QuadSink>(
        &self,
        volume: &[C],
        reader: &R,
        mut sink: S,
    ) -> MesherResult {
        let faces = cube_faces(self.uv_origin);
        let d = self.dims;
        for z in 0..d.depth {
            for y in 0..d.height {
                for x in 0..d.width {
                    let Some(cell) = volume.get(d.index(x, y, z)) else {
                        continue;
                    };
                    if !reader.visible(cell) {
                        continue;
                    }
                    let origin = Vec3::new(x as f32, y as f32, z as f32);
                    for dir in Direction::ALL {
                        emit_cell_face(&mut sink, reader, faces, cell, dir, origin);
                    }
                }
            }
        }
        sink.finish()
    }
}
