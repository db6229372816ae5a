//! Canonical unit-cube face template.
//!
//! Every face of the cell `[0,1]^3` is described by four corners in a fixed
//! winding, the outward unit normal, and the texture coordinate at each corner.
//! For the face perpendicular to axis `i` the corners sweep the tangents
//! `u = e[(i+1)%3]` then `v = e[(i+2)%3]`; negative faces walk the same square
//! in reverse so that `(c2 - c1) x (c0 - c1)` points out of the cube on all six.

use std::sync::LazyLock;

use tessera_geom::{Vec2, Vec3};
use tessera_voxels::Direction;

/// Which image row texture coordinate `v = 0` refers to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UvOrigin {
    #[default]
    TopLeft,
    BottomLeft,
}

impl UvOrigin {
    /// Texture coordinates for corners `[p, p+u, p+u+v, p+v]` of a positive face.
    fn corner_uvs(self) -> [Vec2; 4] {
        match self {
            UvOrigin::TopLeft => [
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
            ],
            UvOrigin::BottomLeft => [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
        }
    }
}

/// One face of the unit cube.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeFace {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
    pub uv: [Vec2; 4],
}

/// `(u, v)` tangents spanning the faces perpendicular to each axis.
pub static AXIS_TANGENTS: LazyLock<[[Vec3; 2]; 3]> =
    LazyLock::new(|| [0, 1, 2].map(|i| [Vec3::unit((i + 1) % 3), Vec3::unit((i + 2) % 3)]));

static FACES_TOP_LEFT: LazyLock<[CubeFace; 6]> =
    LazyLock::new(|| build_faces(UvOrigin::TopLeft));
static FACES_BOTTOM_LEFT: LazyLock<[CubeFace; 6]> =
    LazyLock::new(|| build_faces(UvOrigin::BottomLeft));

fn build_faces(origin: UvOrigin) -> [CubeFace; 6] {
    Direction::ALL.map(|dir| {
        let axis = dir.axis();
        let [u, v] = AXIS_TANGENTS[axis];
        let p = if dir.is_positive() {
            Vec3::unit(axis)
        } else {
            Vec3::ZERO
        };
        let mut corners = [p, p + u, p + u + v, p + v];
        let mut uv = origin.corner_uvs();
        if !dir.is_positive() {
            corners.reverse();
            uv.reverse();
        }
        let normal = (corners[2] - corners[1]).cross(corners[0] - corners[1]);
        CubeFace {
            corners,
            normal,
            uv,
        }
    })
}

/// The six faces of the unit cube, indexed by `Direction::index()`.
#[inline]
pub fn cube_faces(origin: UvOrigin) -> &'static [CubeFace; 6] {
    match origin {
        UvOrigin::TopLeft => &FACES_TOP_LEFT,
        UvOrigin::BottomLeft => &FACES_BOTTOM_LEFT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_point_outward() {
        for origin in [UvOrigin::TopLeft, UvOrigin::BottomLeft] {
            for dir in Direction::ALL {
                let face = &cube_faces(origin)[dir.index()];
                assert_eq!(face.normal, dir.normal(), "{dir:?}");
            }
        }
    }

    #[test]
    fn corners_lie_on_the_face_plane() {
        for dir in Direction::ALL {
            let face = &cube_faces(UvOrigin::TopLeft)[dir.index()];
            let plane = if dir.is_positive() { 1.0 } else { 0.0 };
            for c in face.corners {
                assert_eq!(c[dir.axis()], plane);
            }
        }
    }

    #[test]
    fn uv_origin_flips_v() {
        let tl = cube_faces(UvOrigin::TopLeft);
        let bl = cube_faces(UvOrigin::BottomLeft);
        for i in 0..6 {
            assert_eq!(tl[i].corners, bl[i].corners);
            for k in 0..4 {
                assert_eq!(tl[i].uv[k].x, bl[i].uv[k].x);
                assert_eq!(tl[i].uv[k].y, 1.0 - bl[i].uv[k].y);
            }
        }
    }

    #[test]
    fn top_face_winds_counter_clockwise_from_above() {
        let top = &cube_faces(UvOrigin::TopLeft)[Direction::Top.index()];
        assert_eq!(
            top.corners,
            [
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(0.0, 1.0, 1.0),
            ]
        );
    }
}
