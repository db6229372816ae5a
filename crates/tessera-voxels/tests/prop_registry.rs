use std::collections::HashMap;

use proptest::prelude::*;
use tessera_voxels::config::{ComponentRecord, FaceRecord, VoxelRecord};
use tessera_voxels::{Direction, ResolveError, VoxelRegistry};

fn root_record() -> VoxelRecord {
    let face = HashMap::from([(
        "top".to_string(),
        FaceRecord {
            material: Some("${m0}".into()),
            ..Default::default()
        },
    )]);
    VoxelRecord {
        components: Some(vec![ComponentRecord {
            face,
            ..Default::default()
        }]),
        ..Default::default()
    }
}

// A linear chain v0 <- v1 <- ... <- v{n-1}; each vi maps `m{i}` to `m{i+1}`
// except the last, which maps to a concrete material.
fn chain(n: usize) -> HashMap<String, VoxelRecord> {
    let mut out = HashMap::new();
    out.insert("v0".to_string(), root_record());
    for i in 1..n {
        let value = if i + 1 == n {
            "final".to_string()
        } else {
            format!("${{m{}}}", i)
        };
        out.insert(
            format!("v{i}"),
            VoxelRecord {
                parent: Some(format!("v{}", i - 1)),
                materials: HashMap::from([(format!("m{}", i - 1), value)]),
                ..Default::default()
            },
        );
    }
    out
}

proptest! {
    // Placeholders chained through any number of ancestors end at the leaf value.
    #[test]
    fn chained_placeholders_resolve(n in 2usize..12) {
        let recs = chain(n);
        let reg = VoxelRegistry::from_records(&recs).unwrap();
        let leaf = reg.get_by_name(&format!("v{}", n - 1)).unwrap();
        prop_assert_eq!(&*leaf.faces(Direction::Top)[0].material, "final");
        prop_assert_eq!(leaf.components.len(), 1);
    }

    // Closing the chain into a loop is always rejected.
    #[test]
    fn closed_chain_is_cycle(n in 2usize..12) {
        let mut recs = chain(n);
        recs.get_mut("v0").unwrap().parent = Some(format!("v{}", n - 1));
        let err = VoxelRegistry::from_records(&recs).unwrap_err();
        let is_cycle = matches!(err, ResolveError::ParentCycle { .. });
        prop_assert!(is_cycle);
    }

    // Ids depend only on the name.
    #[test]
    fn ids_are_name_hashes(name in "[a-z_]{1,24}") {
        let recs = HashMap::from([(name.clone(), root_record())]);
        let reg = VoxelRegistry::from_records(&recs).unwrap();
        prop_assert_eq!(reg.id_by_name(&name), Some(VoxelRegistry::id_for(&name)));
    }
}

#[test]
fn broken_parent_aborts_everything() {
    let mut recs = chain(3);
    recs.insert(
        "stray".into(),
        VoxelRecord {
            parent: Some("ghost".into()),
            ..Default::default()
        },
    );
    let err = VoxelRegistry::from_records(&recs).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownParent {
            name: "stray".into(),
            parent: "ghost".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "voxel `stray` references unknown parent `ghost`"
    );
}
