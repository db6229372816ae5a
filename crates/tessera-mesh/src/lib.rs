//! CPU voxel meshing: face-culling and brute-force meshers over dense volumes.
#![forbid(unsafe_code)]

mod constants;
pub mod cube;
pub mod culling;
mod emit;
pub mod reader;
pub mod result;
pub mod simple;
pub mod volume;

pub use cube::{CubeFace, UvOrigin, cube_faces};
pub use culling::{CullingMesher, mesh_culled};
pub use reader::{
    DefaultReader, OptionalReader, PredicateReader, RegistryReader, VoxelReader, full_face,
};
pub use result::{MesherResult, OutputMode, Quad, QuadCorners};
pub use simple::SimpleMesher;
pub use volume::{Dims, pad_volume};
