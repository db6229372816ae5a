use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use super::config::{VoxelRecord, load_records};
use super::error::ResolveError;
use super::hash::fnv1a64;
use super::interner::Interner;
use super::resolver::resolve_type;
use super::types::{VoxelId, VoxelTypeDef};

/// Resolved voxel types, keyed by id with a name index. Built once at load
/// time and read-only afterwards.
#[derive(Default, Clone, Debug)]
pub struct VoxelRegistry {
    pub types: HashMap<VoxelId, VoxelTypeDef>,
    pub by_name: HashMap<String, VoxelId>,
}

impl VoxelRegistry {
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Reads records from a directory (one TOML per type) or a single TOML
    /// file and resolves them.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let records = load_records(path)?;
        Ok(Self::from_records(&records)?)
    }

    /// Resolves every record. The first configuration error aborts the whole
    /// pass.
    pub fn from_records(records: &HashMap<String, VoxelRecord>) -> Result<Self, ResolveError> {
        let mut names: Vec<&String> = records.keys().collect();
        names.sort();

        let mut interner = Interner::new();
        let mut reg = VoxelRegistry {
            types: HashMap::with_capacity(names.len()),
            by_name: HashMap::with_capacity(names.len()),
        };
        for name in names {
            let def = resolve_type(name, records, &mut interner)?;
            if let Some(existing) = reg.types.get(&def.id) {
                return Err(ResolveError::IdCollision {
                    name: def.name,
                    existing: existing.name.clone(),
                    id: def.id,
                });
            }
            reg.by_name.insert(def.name.clone(), def.id);
            reg.types.insert(def.id, def);
        }
        log::info!(
            "resolved {} voxel type(s), {} distinct material(s)",
            reg.types.len(),
            interner.len()
        );
        Ok(reg)
    }

    #[inline]
    pub fn get(&self, id: VoxelId) -> Option<&VoxelTypeDef> {
        self.types.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&VoxelTypeDef> {
        self.id_by_name(name).and_then(|id| self.get(id))
    }

    pub fn id_by_name(&self, name: &str) -> Option<VoxelId> {
        self.by_name.get(name).copied()
    }

    /// Reverse lookup for diagnostics.
    pub fn name_of(&self, id: VoxelId) -> Option<&str> {
        self.get(id).map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Types sorted by name.
    pub fn iter_sorted(&self) -> Vec<&VoxelTypeDef> {
        let mut v: Vec<&VoxelTypeDef> = self.types.values().collect();
        v.sort_by(|a, b| a.name.cmp(&b.name));
        v
    }

    /// The id a type named `name` gets, whether or not it is registered.
    #[inline]
    pub const fn id_for(name: &str) -> VoxelId {
        fnv1a64(name)
    }
}
