use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use tessera_mesh::MesherResult;
use tessera_voxels::{VoxelId, VoxelRegistry};

/// Quad totals of one mesher run, grouped the way a renderer would batch them.
#[derive(Debug, Default, Clone)]
pub struct MeshReport {
    pub quads: usize,
    pub vertices: usize,
    pub surface_area: f32,
    pub by_type: Vec<(String, usize)>,
    pub by_material: Vec<(Arc<str>, usize)>,
}

impl MeshReport {
    pub fn from_result(out: &MesherResult, reg: &VoxelRegistry) -> Self {
        let mut types: HashMap<VoxelId, usize> = HashMap::new();
        let mut materials: HashMap<Arc<str>, usize> = HashMap::new();
        for q in &out.quads {
            *types.entry(q.type_id).or_default() += 1;
            *materials.entry(Arc::clone(&q.material)).or_default() += 1;
        }
        let mut by_type: Vec<(String, usize)> = types
            .into_iter()
            .map(|(id, n)| {
                let name = reg
                    .name_of(id)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{id:#018x}"));
                (name, n)
            })
            .collect();
        by_type.sort();
        let mut by_material: Vec<(Arc<str>, usize)> = materials.into_iter().collect();
        by_material.sort();
        Self {
            quads: out.quads.len(),
            vertices: if out.vertices.is_empty() {
                out.quads.len() * 4
            } else {
                out.vertices.len()
            },
            surface_area: out.surface_area(),
            by_type,
            by_material,
        }
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} quad(s), {} vertex(es), surface area {:.2}",
            self.quads, self.vertices, self.surface_area
        )?;
        writeln!(f, "by type:")?;
        for (name, n) in &self.by_type {
            writeln!(f, "  {name:<16} {n}")?;
        }
        writeln!(f, "by material:")?;
        for (mat, n) in &self.by_material {
            let mat: &str = if mat.is_empty() { "<none>" } else { mat };
            writeln!(f, "  {mat:<16} {n}")?;
        }
        Ok(())
    }
}
