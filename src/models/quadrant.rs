use super::klingon::Klingon;
use super::position::Position;

/// The single 8x8 combat area.
/// Holds every Klingon ever created, in creation order.
#[derive(Debug, Clone)]
pub struct Quadrant {
    pub klingons: Vec<Klingon>,
}

impl Default for Quadrant {
    fn default() -> Self {
        Self::new()
    }
}

impl Quadrant {
    pub fn new() -> Self {
        Quadrant {
            klingons: Vec::new(),
        }
    }

    pub fn alive_klingons(&self) -> impl Iterator<Item = &Klingon> {
        self.klingons.iter().filter(|k| k.is_alive())
    }

    pub fn alive_klingons_mut(&mut self) -> impl Iterator<Item = &mut Klingon> {
        self.klingons.iter_mut().filter(|k| k.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive_klingons().count()
    }

    /// First living Klingon occupying `pos`, if any.
    pub fn klingon_at_mut(&mut self, pos: Position) -> Option<&mut Klingon> {
        self.alive_klingons_mut().find(|k| k.position == pos)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.alive_klingons().any(|k| k.position == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrant_with(hulls: &[(i32, (i32, i32))]) -> Quadrant {
        let mut q = Quadrant::new();
        for (i, (hull, (x, y))) in hulls.iter().enumerate() {
            q.klingons
                .push(Klingon::new(i as u32 + 1, *hull, Position::new(*x, *y)));
        }
        q
    }

    #[test]
    fn dead_klingons_are_retained_but_filtered() {
        let q = quadrant_with(&[(200, (1, 1)), (0, (2, 2)), (50, (3, 3))]);
        assert_eq!(q.klingons.len(), 3);
        assert_eq!(q.alive_count(), 2);
        let ids: Vec<u32> = q.alive_klingons().map(|k| k.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn dead_klingon_does_not_occupy_its_cell() {
        let mut q = quadrant_with(&[(0, (5, 5)), (80, (6, 6))]);
        assert!(!q.is_occupied(Position::new(5, 5)));
        assert!(q.is_occupied(Position::new(6, 6)));
        assert!(q.klingon_at_mut(Position::new(5, 5)).is_none());
    }

    #[test]
    fn shared_cell_resolves_to_first_in_creation_order() {
        let mut q = quadrant_with(&[(100, (2, 2)), (100, (2, 2))]);
        let hit = q.klingon_at_mut(Position::new(2, 2)).map(|k| k.id);
        assert_eq!(hit, Some(1));
    }
}
