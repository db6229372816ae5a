/// Extent of a dense volume in cells. Cells are stored x-fastest, then y, then z.
///
/// The culling mesher sweeps signed coordinates one cell past each end, so it
/// only accepts dims whose every axis is below `i32::MAX`; see
/// [`Dims::signed_extent`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dims {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Dims {
    #[inline]
    pub const fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.width * self.height * self.depth
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn index(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }

    /// Linear index for signed coordinates, or `None` outside the volume.
    #[inline]
    pub fn index_checked(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        Some(self.index(x, y, z))
    }

    /// Per-axis extent as `i32`, or `None` unless every axis is below `i32::MAX`.
    #[inline]
    pub fn signed_extent(&self) -> Option<[i32; 3]> {
        let axis = |n: usize| i32::try_from(n).ok().filter(|&v| v < i32::MAX);
        Some([axis(self.width)?, axis(self.height)?, axis(self.depth)?])
    }

    /// Dims grown by `border` cells on every side.
    #[inline]
    pub const fn padded(&self, border: usize) -> Dims {
        Dims::new(
            self.width + 2 * border,
            self.height + 2 * border,
            self.depth + 2 * border,
        )
    }

    /// Number of integer lattice points spanned by the volume's corners.
    #[inline]
    pub const fn lattice_len(&self) -> usize {
        (self.width + 1) * (self.height + 1) * (self.depth + 1)
    }
}

/// Copies references to `volume` into a grid with a one-cell shell of absent
/// cells, so that every neighbor of a real cell can be read unchecked.
pub fn pad_volume<C>(volume: &[C], dims: Dims) -> Vec<Option<&C>> {
    let padded = dims.padded(1);
    let mut out = vec![None; padded.len()];
    for z in 0..dims.depth {
        for y in 0..dims.height {
            for x in 0..dims.width {
                out[padded.index(x + 1, y + 1, z + 1)] = volume.get(dims.index(x, y, z));
            }
        }
    }
    out
}
