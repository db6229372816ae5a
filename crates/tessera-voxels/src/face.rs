use tessera_geom::Vec3;

/// Cardinal face directions of a cell. Z is up: `Top`/`Bottom` step along z,
/// `Back`/`Front` along y, `Right`/`Left` along x.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Right = 0,
    Back = 1,
    Top = 2,
    Left = 3,
    Front = 4,
    Bottom = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Back,
        Direction::Top,
        Direction::Left,
        Direction::Front,
        Direction::Bottom,
    ];

    /// The three directions pointing along +x, +y, +z (in axis order).
    pub const POSITIVE: [Direction; 3] = [Direction::Right, Direction::Back, Direction::Top];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a direction.
    #[inline]
    pub fn from_index(i: usize) -> Option<Direction> {
        Direction::ALL.get(i).copied()
    }

    /// Axis this direction steps along (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis(self) -> usize {
        self.index() % 3
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.index() < 3
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() + 3) % 6]
    }

    /// Integer grid step `(dx, dy, dz)` when leaving a cell through this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        let s = if self.is_positive() { 1 } else { -1 };
        match self.axis() {
            0 => (s, 0, 0),
            1 => (0, s, 0),
            _ => (0, 0, s),
        }
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (x, y, z) = self.delta();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    /// Parses a face key as authored in voxel records. Accepts the compass
    /// synonyms (`north` = back, `south` = front, `east` = right,
    /// `west` = left) as well as the canonical names.
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "north" | "back" => Some(Direction::Back),
            "south" | "front" => Some(Direction::Front),
            "east" | "right" => Some(Direction::Right),
            "west" | "left" => Some(Direction::Left),
            "top" => Some(Direction::Top),
            "bottom" => Some(Direction::Bottom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Back => "back",
            Direction::Top => "top",
            Direction::Left => "left",
            Direction::Front => "front",
            Direction::Bottom => "bottom",
        }
    }
}
