use super::position::Position;

/// A Klingon warship in the quadrant.
/// Ids are 1-based and never reused; dead ships stay in the quadrant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Klingon {
    pub id: u32,
    pub hull: i32,
    pub position: Position,
}

impl Klingon {
    pub fn new(id: u32, hull: i32, position: Position) -> Self {
        Klingon { id, hull, position }
    }

    pub fn is_alive(&self) -> bool {
        self.hull > 0
    }

    /// Reduce the hull by `damage`, clamping at zero.
    /// Returns true if this hit destroyed the ship.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.hull -= damage;
        if self.hull <= 0 {
            self.hull = 0;
            return true;
        }
        false
    }
}
