//! Cell interpretation seam between a volume and the meshers.

use std::sync::LazyLock;

use tessera_voxels::{
    Direction, EMPTY_VOXEL_ID, UNSET_VOXEL_ID, VoxelFaceDefinition, VoxelId, VoxelRegistry,
};

static FULL_FACE: LazyLock<[VoxelFaceDefinition; 1]> =
    LazyLock::new(|| [VoxelFaceDefinition::full()]);

/// The unit face with full UV window, no material and culling on.
#[inline]
pub fn full_face() -> &'static [VoxelFaceDefinition] {
    &FULL_FACE[..]
}

/// Tells a mesher what a cell value means.
///
/// Only `visible` and `faces_for` matter for plain solid/empty volumes; the
/// defaults describe an untyped unit cube that occludes in every direction.
pub trait VoxelReader<C> {
    fn visible(&self, cell: &C) -> bool;

    fn type_of(&self, _cell: &C) -> VoxelId {
        UNSET_VOXEL_ID
    }

    fn faces_for(&self, _cell: &C, _dir: Direction) -> &[VoxelFaceDefinition] {
        full_face()
    }

    /// Whether this cell's face in `dir` hides what lies behind it.
    fn culls(&self, _cell: &C, _dir: Direction) -> bool {
        true
    }
}

impl<C, R: VoxelReader<C>> VoxelReader<C> for &R {
    #[inline]
    fn visible(&self, cell: &C) -> bool {
        (**self).visible(cell)
    }
    #[inline]
    fn type_of(&self, cell: &C) -> VoxelId {
        (**self).type_of(cell)
    }
    #[inline]
    fn faces_for(&self, cell: &C, dir: Direction) -> &[VoxelFaceDefinition] {
        (**self).faces_for(cell, dir)
    }
    #[inline]
    fn culls(&self, cell: &C, dir: Direction) -> bool {
        (**self).culls(cell, dir)
    }
}

/// Numbers are solid when non-zero, booleans when true.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultReader;

macro_rules! impl_default_reader {
    ($($t:ty),*) => {
        $(
            impl VoxelReader<$t> for DefaultReader {
                #[inline]
                fn visible(&self, cell: &$t) -> bool {
                    *cell != 0
                }
            }
        )*
    };
}

impl_default_reader!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl VoxelReader<bool> for DefaultReader {
    #[inline]
    fn visible(&self, cell: &bool) -> bool {
        *cell
    }
}

/// Wraps a visibility predicate for cell types with no natural default.
#[derive(Copy, Clone)]
pub struct PredicateReader<F>(pub F);

impl<C, F: Fn(&C) -> bool> VoxelReader<C> for PredicateReader<F> {
    #[inline]
    fn visible(&self, cell: &C) -> bool {
        (self.0)(cell)
    }
}

/// Reads id-valued volumes against a resolved registry.
///
/// `EMPTY_VOXEL_ID` and `UNSET_VOXEL_ID` cells are empty. Ids the registry
/// does not know are drawn as plain unit cubes.
#[derive(Copy, Clone, Debug)]
pub struct RegistryReader<'a> {
    registry: &'a VoxelRegistry,
}

impl<'a> RegistryReader<'a> {
    pub fn new(registry: &'a VoxelRegistry) -> Self {
        Self { registry }
    }
}

impl VoxelReader<VoxelId> for RegistryReader<'_> {
    #[inline]
    fn visible(&self, cell: &VoxelId) -> bool {
        *cell != EMPTY_VOXEL_ID && *cell != UNSET_VOXEL_ID
    }

    #[inline]
    fn type_of(&self, cell: &VoxelId) -> VoxelId {
        *cell
    }

    fn faces_for(&self, cell: &VoxelId, dir: Direction) -> &[VoxelFaceDefinition] {
        match self.registry.get(*cell) {
            Some(ty) => ty.faces(dir),
            None => full_face(),
        }
    }

    fn culls(&self, cell: &VoxelId, dir: Direction) -> bool {
        self.registry.get(*cell).is_none_or(|ty| ty.culls(dir))
    }
}

/// Lifts a reader over `Option<&C>` cells; `None` is an absent cell that
/// is invisible, untyped and faceless.
#[derive(Copy, Clone, Debug, Default)]
pub struct OptionalReader<R>(pub R);

impl<'c, C, R: VoxelReader<C>> VoxelReader<Option<&'c C>> for OptionalReader<R> {
    #[inline]
    fn visible(&self, cell: &Option<&'c C>) -> bool {
        cell.is_some_and(|c| self.0.visible(c))
    }

    #[inline]
    fn type_of(&self, cell: &Option<&'c C>) -> VoxelId {
        cell.map_or(UNSET_VOXEL_ID, |c| self.0.type_of(c))
    }

    fn faces_for(&self, cell: &Option<&'c C>, dir: Direction) -> &[VoxelFaceDefinition] {
        match *cell {
            Some(c) => self.0.faces_for(c, dir),
            None => &[],
        }
    }

    #[inline]
    fn culls(&self, cell: &Option<&'c C>, dir: Direction) -> bool {
        cell.is_none_or(|c| self.0.culls(c, dir))
    }
}
