use proptest::prelude::*;
use tessera_mesh::{CullingMesher, DefaultReader, Dims, OutputMode, mesh_culled};

fn volume() -> impl Strategy<Value = (Dims, Vec<bool>)> {
    (1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(w, h, d)| {
        let dims = Dims::new(w, h, d);
        (Just(dims), prop::collection::vec(any::<bool>(), dims.len()))
    })
}

// Solid/empty transitions across every cell boundary, volume exterior included.
fn transitions(dims: Dims, cells: &[bool]) -> usize {
    let solid = |x: i32, y: i32, z: i32| dims.index_checked(x, y, z).is_some_and(|i| cells[i]);
    let mut n = 0;
    for z in -1..dims.depth as i32 {
        for y in -1..dims.height as i32 {
            for x in -1..dims.width as i32 {
                let here = solid(x, y, z);
                n += usize::from(here != solid(x + 1, y, z));
                n += usize::from(here != solid(x, y + 1, z));
                n += usize::from(here != solid(x, y, z + 1));
            }
        }
    }
    n
}

proptest! {
    #[test]
    fn quad_count_equals_transition_count((dims, cells) in volume()) {
        let out = mesh_culled(&cells, dims, &DefaultReader, false);
        prop_assert_eq!(out.quads.len(), transitions(dims, &cells));
        prop_assert_eq!(out.surface_area(), out.quads.len() as f32);
    }

    #[test]
    fn border_and_direct_sweeps_agree((dims, cells) in volume()) {
        let direct = CullingMesher::new(dims).eval(&cells, &DefaultReader);
        let bordered = CullingMesher::new(dims).with_border(true).eval(&cells, &DefaultReader);
        prop_assert_eq!(direct.quads, bordered.quads);
    }

    #[test]
    fn shared_indices_stay_in_range((dims, cells) in volume()) {
        let out = CullingMesher::new(dims)
            .with_mode(OutputMode::SharedVertices)
            .eval(&cells, &DefaultReader);
        prop_assert!(out.vertices.len() <= dims.lattice_len());
        for q in &out.quads {
            for p in out.positions(q) {
                prop_assert!(p.x >= 0.0 && p.x <= dims.width as f32);
                prop_assert!(p.y >= 0.0 && p.y <= dims.height as f32);
                prop_assert!(p.z >= 0.0 && p.z <= dims.depth as f32);
            }
        }
    }
}
