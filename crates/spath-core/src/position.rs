/// Coordinates of a vertex, used only by heuristics.
///
/// Planar positions have `z == 0`, so 2D and 3D positions can be mixed freely.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    /// First coordinate.
    pub x: f64,
    /// Second coordinate.
    pub y: f64,
    /// Third coordinate, zero for planar positions.
    pub z: f64,
}

impl Position {
    /// Creates a planar position.
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y, z: 0.0 }
    }

    /// Creates a spatial position.
    pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    /// Straight-line distance to `other`.
    pub fn euclidean(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Sum of absolute coordinate differences to `other`.
    pub fn manhattan(self, other: Position) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Position::new_3d(x, y, z)
    }
}
