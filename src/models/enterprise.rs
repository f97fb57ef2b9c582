use super::constants::{
    AlertLevel, INITIAL_ENERGY, INITIAL_SECTOR, INITIAL_SHIELDS, INITIAL_TORPEDOES, SHIP_NAME,
};
use super::position::Position;

/// The player's starship.
#[derive(Debug, Clone)]
pub struct Enterprise {
    pub name: String,
    pub energy: i32,
    pub shields: i32,
    pub torpedoes: i32,
    pub position: Position,
    pub condition: AlertLevel,
}

impl Default for Enterprise {
    fn default() -> Self {
        Self::new()
    }
}

impl Enterprise {
    pub fn new() -> Self {
        Enterprise {
            name: SHIP_NAME.to_string(),
            energy: INITIAL_ENERGY,
            shields: INITIAL_SHIELDS,
            torpedoes: INITIAL_TORPEDOES,
            position: Position::new(INITIAL_SECTOR.0, INITIAL_SECTOR.1),
            condition: AlertLevel::Normal,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.condition == AlertLevel::Destroyed
    }

    /// Absorb incoming fire.
    ///
    /// The raw value is scaled by the current condition and floored. Shields
    /// soak up as much as they can; the rest drains main energy. Running main
    /// energy down to zero destroys the ship for good.
    pub fn apply_damage(&mut self, raw_damage: i32) {
        let scaled = (raw_damage as f64 * self.condition.damage_multiplier()).floor() as i32;

        if self.shields >= scaled {
            self.shields -= scaled;
            return;
        }

        let remaining = scaled - self.shields;
        self.shields = 0;
        self.energy -= remaining;

        if self.energy <= 0 {
            self.energy = 0;
            self.condition = AlertLevel::Destroyed;
        }
    }

    /// Spend main energy. Callers validate the amount first.
    pub fn subtract_energy(&mut self, amount: i32) {
        self.energy = (self.energy - amount).max(0);
    }

    /// Remove one torpedo from the magazine. Returns false if it was empty.
    pub fn consume_torpedo(&mut self) -> bool {
        if self.torpedoes <= 0 {
            return false;
        }
        self.torpedoes -= 1;
        true
    }

    /// Replace the ship's position with a new one.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Switch alert level. A destroyed ship never leaves Destroyed.
    pub fn set_condition(&mut self, condition: AlertLevel) {
        if self.is_destroyed() {
            return;
        }
        self.condition = condition;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: an Enterprise with the given reserves.
    fn enterprise_with(energy: i32, shields: i32, condition: AlertLevel) -> Enterprise {
        let mut e = Enterprise::new();
        e.energy = energy;
        e.shields = shields;
        e.condition = condition;
        e
    }

    #[test]
    fn new_ship_has_mission_loadout() {
        let e = Enterprise::new();
        assert_eq!(e.energy, 3000);
        assert_eq!(e.shields, 1000);
        assert_eq!(e.torpedoes, 10);
        assert_eq!(e.position, Position::new(4, 4));
        assert_eq!(e.condition, AlertLevel::Normal);
    }

    #[test]
    fn shields_absorb_damage_first() {
        let mut e = enterprise_with(3000, 500, AlertLevel::Normal);
        e.apply_damage(200);
        assert_eq!(e.shields, 300);
        assert_eq!(e.energy, 3000);
    }

    #[test]
    fn red_alert_scales_and_floors_damage() {
        let mut e = enterprise_with(3000, 500, AlertLevel::RedAlert);
        // floor(93 * 0.9) = 83
        e.apply_damage(93);
        assert_eq!(e.shields, 417);
    }

    #[test]
    fn overflow_drains_energy() {
        let mut e = enterprise_with(1000, 50, AlertLevel::Normal);
        e.apply_damage(150);
        assert_eq!(e.shields, 0);
        assert_eq!(e.energy, 900);
        assert_eq!(e.condition, AlertLevel::Normal);
    }

    #[test]
    fn lethal_overflow_destroys_ship_and_clamps_energy() {
        let mut e = enterprise_with(40, 10, AlertLevel::Normal);
        e.apply_damage(300);
        assert_eq!(e.shields, 0);
        assert_eq!(e.energy, 0);
        assert!(e.is_destroyed());
    }

    #[test]
    fn destroyed_is_terminal() {
        let mut e = enterprise_with(10, 0, AlertLevel::RedAlert);
        e.apply_damage(100);
        assert!(e.is_destroyed());

        e.set_condition(AlertLevel::Normal);
        assert_eq!(e.condition, AlertLevel::Destroyed);

        e.apply_damage(50);
        assert_eq!(e.energy, 0);
        assert!(e.is_destroyed());
    }

    #[test]
    fn empty_magazine_cannot_fire() {
        let mut e = Enterprise::new();
        e.torpedoes = 1;
        assert!(e.consume_torpedo());
        assert!(!e.consume_torpedo());
        assert_eq!(e.torpedoes, 0);
    }
}
