use super::constants::SECTOR_SIZE;

/// A position within the 8x8 sector grid.
/// Values range 1-8. (1,1) is upper-left, (8,8) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Whether both coordinates fall inside the sector grid.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (1..=SECTOR_SIZE).contains(&x) && (1..=SECTOR_SIZE).contains(&y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: Position) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
