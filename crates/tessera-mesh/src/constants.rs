//! Shared constants for tessera-mesh.

// Width of the absent-cell shell the padded strategy wraps around a volume.
pub(crate) const BORDER: i32 = 1;

// Upper bound on faces a single cell can contribute; used to pre-reserve quads.
pub(crate) const FACES_PER_CELL: usize = 6;

// Vertex-map slot that has not been assigned an index yet.
pub(crate) const NO_VERTEX: u32 = u32::MAX;
