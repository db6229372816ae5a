//! Prototype inheritance for voxel records.
//!
//! Resolution is a two-phase merge. First the geometry template is taken from
//! the most-derived record in the parent chain that declares `components`.
//! Then, walking from the root ancestor down to the leaf, each record's
//! `materials` table is applied: a face material equal to the placeholder
//! `${key}` is replaced by the mapped value. Nothing is ever inserted, so an
//! ancestor can only fill in slots the template left open.

use std::collections::{BTreeMap, HashMap, HashSet};

use tessera_geom::{Vec2, Vec3};

use crate::config::{ComponentRecord, FaceRecord, VoxelRecord};
use crate::error::ResolveError;
use crate::face::Direction;
use crate::interner::Interner;
use crate::types::{FaceDef, VoxelComponentDef, VoxelTypeDef};

#[derive(Clone, Debug)]
struct FaceTemplate {
    uv_min: Vec2,
    uv_max: Vec2,
    material: String,
    cull: bool,
}

#[derive(Clone, Debug)]
struct ComponentTemplate {
    min: Vec3,
    max: Vec3,
    translate: Vec3,
    faces: BTreeMap<Direction, FaceTemplate>,
}

/// Returns `name` followed by its ancestors, leaf first.
pub fn ancestor_chain<'a>(
    name: &'a str,
    records: &'a HashMap<String, VoxelRecord>,
) -> Result<Vec<(&'a str, &'a VoxelRecord)>, ResolveError> {
    let mut chain: Vec<(&str, &VoxelRecord)> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = name;
    loop {
        if !seen.insert(current) {
            let mut names: Vec<String> = chain.iter().map(|(n, _)| n.to_string()).collect();
            names.push(current.to_string());
            return Err(ResolveError::ParentCycle {
                name: name.to_string(),
                chain: names,
            });
        }
        let Some(record) = records.get(current) else {
            return Err(match chain.last() {
                Some((child, _)) => ResolveError::UnknownParent {
                    name: child.to_string(),
                    parent: current.to_string(),
                },
                None => ResolveError::UnknownVoxel(current.to_string()),
            });
        };
        chain.push((current, record));
        match record.parent.as_deref() {
            Some(parent) => current = parent,
            None => return Ok(chain),
        }
    }
}

fn build_template(name: &str, components: &[ComponentRecord]) -> Vec<ComponentTemplate> {
    components
        .iter()
        .map(|c| {
            let mut keyed: Vec<(Direction, &String, &FaceRecord)> = Vec::new();
            for (key, f) in &c.face {
                match Direction::from_name(key) {
                    Some(dir) => keyed.push((dir, key, f)),
                    None => log::debug!("voxel `{name}`: skipping unknown face `{key}`"),
                }
            }
            // compass synonym first, canonical name last: the canonical entry wins
            keyed.sort_by_key(|&(dir, key, _)| (dir, key.as_str() == dir.name(), key));
            let mut faces = BTreeMap::new();
            for (dir, key, f) in keyed {
                if faces.contains_key(&dir) {
                    log::warn!(
                        "voxel `{name}`: face `{key}` overrides a synonym for {}",
                        dir.name()
                    );
                }
                faces.insert(
                    dir,
                    FaceTemplate {
                        uv_min: f.uv_min.map(Vec2::from).unwrap_or(Vec2::ZERO),
                        uv_max: f.uv_max.map(Vec2::from).unwrap_or(Vec2::ONE),
                        material: f.material.clone().unwrap_or_default(),
                        cull: f.cull.unwrap_or(true),
                    },
                );
            }
            ComponentTemplate {
                min: c.min.map(Vec3::from).unwrap_or(Vec3::ZERO),
                max: c.max.map(Vec3::from).unwrap_or(Vec3::ONE),
                translate: c.translate.map(Vec3::from).unwrap_or(Vec3::ZERO),
                faces,
            }
        })
        .collect()
}

fn apply_materials(template: &mut [ComponentTemplate], materials: &HashMap<String, String>) {
    let mut entries: Vec<(&String, &String)> = materials.iter().collect();
    // HashMap iteration order is nondeterministic; chained placeholders must substitute stably.
    entries.sort();
    for (key, value) in entries {
        let token = format!("${{{key}}}");
        for face in template.iter_mut().flat_map(|c| c.faces.values_mut()) {
            if face.material == token {
                face.material.clone_from(value);
            }
        }
    }
}

#[inline]
fn is_placeholder(material: &str) -> bool {
    material.starts_with("${") && material.ends_with('}')
}

/// Resolves one voxel type against the full record set.
pub fn resolve_type(
    name: &str,
    records: &HashMap<String, VoxelRecord>,
    interner: &mut Interner,
) -> Result<VoxelTypeDef, ResolveError> {
    let chain = ancestor_chain(name, records)?;

    let mut template = chain
        .iter()
        .find_map(|(_, r)| r.components.as_deref())
        .map(|comps| build_template(name, comps))
        .unwrap_or_default();

    for (_, record) in chain.iter().rev() {
        apply_materials(&mut template, &record.materials);
    }

    let components = template
        .into_iter()
        .map(|c| VoxelComponentDef {
            min: c.min,
            max: c.max,
            translate: c.translate,
            faces: c
                .faces
                .into_iter()
                .map(|(dir, f)| {
                    if is_placeholder(&f.material) {
                        log::warn!(
                            "voxel `{name}`: {} face keeps unresolved material `{}`",
                            dir.name(),
                            f.material
                        );
                    }
                    let face = FaceDef {
                        uv_min: f.uv_min,
                        uv_max: f.uv_max,
                        material: interner.intern(&f.material),
                        cull: f.cull,
                    };
                    (dir, face)
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    log::trace!(
        "voxel `{name}`: {} ancestor(s), {} component(s)",
        chain.len() - 1,
        components.len()
    );
    Ok(VoxelTypeDef::new(name, components))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(src: &str) -> HashMap<String, VoxelRecord> {
        let cfg: crate::config::VoxelsConfig = toml::from_str(src).expect("valid test toml");
        cfg.voxels
    }

    const CUBE: &str = r#"
        [voxels.cube]
        [[voxels.cube.components]]
        [voxels.cube.components.face.north]
        material = "${side}"
        [voxels.cube.components.face.south]
        material = "${side}"
        [voxels.cube.components.face.top]
        material = "${top}"
        [voxels.cube.components.face.bottom]
        material = "fixed_bottom"

        [voxels.log]
        "$parent" = "cube"
        [voxels.log.materials]
        side = "bark"
        top = "rings"
        bottom = "should_not_apply"
    "#;

    #[test]
    fn leaf_materials_fill_placeholders() {
        let recs = records(CUBE);
        let mut interner = Interner::new();
        let log_ty = resolve_type("log", &recs, &mut interner).unwrap();
        assert_eq!(log_ty.components.len(), 1);
        let c = &log_ty.components[0];
        assert_eq!(&*c.faces[&Direction::Back].material, "bark");
        assert_eq!(&*c.faces[&Direction::Front].material, "bark");
        assert_eq!(&*c.faces[&Direction::Top].material, "rings");
        // No placeholder there: the ancestor value is not forced in.
        assert_eq!(&*c.faces[&Direction::Bottom].material, "fixed_bottom");
        // Undeclared faces are not created by material overrides.
        assert!(!c.faces.contains_key(&Direction::Right));
    }

    #[test]
    fn root_keeps_placeholders() {
        let recs = records(CUBE);
        let cube = resolve_type("cube", &recs, &mut Interner::new()).unwrap();
        assert_eq!(&*cube.components[0].faces[&Direction::Top].material, "${top}");
    }

    #[test]
    fn root_first_substitution_order() {
        let recs = records(
            r#"
            [voxels.base]
            [[voxels.base.components]]
            [voxels.base.components.face.top]
            material = "${a}"

            [voxels.mid]
            "$parent" = "base"
            [voxels.mid.materials]
            a = "${b}"

            [voxels.leaf]
            "$parent" = "mid"
            [voxels.leaf.materials]
            b = "grass"
        "#,
        );
        let leaf = resolve_type("leaf", &recs, &mut Interner::new()).unwrap();
        assert_eq!(&*leaf.components[0].faces[&Direction::Top].material, "grass");
    }

    #[test]
    fn leaf_components_override_ancestor_geometry() {
        let recs = records(
            r#"
            [voxels.cube]
            [[voxels.cube.components]]

            [voxels.slab]
            "$parent" = "cube"
            [[voxels.slab.components]]
            max = [1.0, 1.0, 0.5]
            [[voxels.slab.components]]
            min = [0.0, 0.0, 0.5]
            max = [0.5, 0.5, 1.0]
        "#,
        );
        let slab = resolve_type("slab", &recs, &mut Interner::new()).unwrap();
        assert_eq!(slab.components.len(), 2);
        assert_eq!(slab.components[0].max, Vec3::new(1.0, 1.0, 0.5));
        assert_eq!(slab.components[1].min, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn unknown_face_names_are_skipped() {
        let recs = records(
            r#"
            [voxels.odd]
            [[voxels.odd.components]]
            [voxels.odd.components.face.sideways]
            material = "x"
            [voxels.odd.components.face.east]
            cull = false
        "#,
        );
        let odd = resolve_type("odd", &recs, &mut Interner::new()).unwrap();
        let faces = &odd.components[0].faces;
        assert_eq!(faces.len(), 1);
        assert!(!faces[&Direction::Right].cull);
    }

    #[test]
    fn canonical_face_name_beats_compass_synonym() {
        let src = r#"
            [voxels.both]
            [[voxels.both.components]]
            [voxels.both.components.face.north]
            material = "from_north"
            [voxels.both.components.face.back]
            material = "from_back"
            [voxels.both.components.face.west]
            material = "from_west"
            cull = false
            [voxels.both.components.face.left]
            material = "from_left"
        "#;
        // each parse gets a fresh hash seed, so iteration order varies
        for _ in 0..64 {
            let recs = records(src);
            let both = resolve_type("both", &recs, &mut Interner::new()).unwrap();
            let faces = &both.components[0].faces;
            assert_eq!(faces.len(), 2);
            assert_eq!(&*faces[&Direction::Back].material, "from_back");
            assert_eq!(&*faces[&Direction::Left].material, "from_left");
            assert!(faces[&Direction::Left].cull);
        }
    }

    #[test]
    fn unknown_parent_is_an_error() {
        let recs = records(
            r#"
            [voxels.orphan]
            "$parent" = "nobody"
        "#,
        );
        let err = resolve_type("orphan", &recs, &mut Interner::new()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownParent {
                name: "orphan".into(),
                parent: "nobody".into()
            }
        );
    }

    #[test]
    fn cycles_are_detected() {
        let recs = records(
            r#"
            [voxels.a]
            "$parent" = "b"
            [voxels.b]
            "$parent" = "c"
            [voxels.c]
            "$parent" = "a"
        "#,
        );
        match resolve_type("a", &recs, &mut Interner::new()) {
            Err(ResolveError::ParentCycle { name, chain }) => {
                assert_eq!(name, "a");
                assert_eq!(chain, vec!["a", "b", "c", "a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }

        let self_ref = records(
            r#"
            [voxels.me]
            "$parent" = "me"
        "#,
        );
        assert!(matches!(
            resolve_type("me", &self_ref, &mut Interner::new()),
            Err(ResolveError::ParentCycle { .. })
        ));
    }

    #[test]
    fn chain_is_leaf_first() {
        let recs = records(CUBE);
        let chain = ancestor_chain("log", &recs).unwrap();
        let names: Vec<&str> = chain.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["log", "cube"]);
        assert_eq!(
            ancestor_chain("missing", &recs).unwrap_err(),
            ResolveError::UnknownVoxel("missing".into())
        );
    }
}
