use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;
use tessera_geom::{Aabb, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e3)
}

fn unit_f32() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_unit_box() -> impl Strategy<Value = (Vec3, Vec3)> {
    (
        (unit_f32(), unit_f32(), unit_f32()),
        (unit_f32(), unit_f32(), unit_f32()),
    )
        .prop_map(|(a, b)| {
            let a = Vec3::new(a.0, a.1, a.2);
            let b = Vec3::new(b.0, b.1, b.2);
            (a.min(b), a.max(b))
        })
}

proptest! {
    // Clamped points always land inside the box.
    #[test]
    fn clamp_stays_in_box(p in arb_vec3(), (lo, hi) in arb_unit_box()) {
        let c = p.clamp(lo, hi);
        prop_assert!(Aabb::new(lo, hi).contains(c));
    }

    // Clamping twice changes nothing.
    #[test]
    fn clamp_idempotent(p in arb_vec3(), (lo, hi) in arb_unit_box()) {
        let once = p.clamp(lo, hi);
        prop_assert_eq!(once.clamp(lo, hi), once);
    }

    // a×b = -(b×a)
    #[test]
    fn cross_anticommutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a.cross(b), -b.cross(a), 1e-2));
    }

    // Endpoints of lerp are exact.
    #[test]
    fn lerp_endpoints(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a.lerp(b, 0.0), a, 1e-4));
        prop_assert!(vapprox(a.lerp(b, 1.0), b, 1e-4));
    }

    // The bounding box of a point set contains every point.
    #[test]
    fn from_points_contains_all(pts in prop::collection::vec(arb_vec3(), 1..16)) {
        let b = Aabb::from_points(pts.iter().copied()).unwrap();
        for p in pts {
            prop_assert!(b.contains(p));
        }
    }
}
