//! Voxel type definitions: record schema, inheritance resolution and registry.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod face;
pub mod hash;
pub mod interner;
pub mod registry;
pub mod resolver;
pub mod types;

pub use error::ResolveError;
pub use face::Direction;
pub use interner::Interner;
pub use registry::VoxelRegistry;
pub use types::{
    EMPTY_VOXEL_ID, FaceDef, UNSET_VOXEL_ID, VoxelComponentDef, VoxelFaceDefinition, VoxelId,
    VoxelTypeDef,
};
