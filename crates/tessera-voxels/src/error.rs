use thiserror::Error;

use crate::types::VoxelId;

/// Configuration faults found while resolving voxel records. Resolution
/// stops at the first one; nothing is partially registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown voxel type `{0}`")]
    UnknownVoxel(String),

    #[error("voxel `{name}` references unknown parent `{parent}`")]
    UnknownParent { name: String, parent: String },

    #[error("voxel `{name}` has a cyclic parent chain: {}", .chain.join(" -> "))]
    ParentCycle { name: String, chain: Vec<String> },

    #[error("voxel `{name}` hashes to id {id:#018x}, already used by `{existing}`")]
    IdCollision {
        name: String,
        existing: String,
        id: VoxelId,
    },
}
