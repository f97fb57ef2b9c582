use crate::models::constants::{KLINGON_FIRE_RANGE, TORPEDO_BASE_RANGE};
use crate::models::enterprise::Enterprise;
use crate::models::klingon::Klingon;
use crate::models::position::Position;
use crate::models::random::RandomSource;

/// Calculate the Euclidean distance between two sector positions.
pub fn calculate_distance(from: Position, to: Position) -> f64 {
    from.distance_to(to)
}

/// Turns an energy allocation into hull damage.
pub trait PhaserStrategy {
    fn resolve_damage(&self, allocated_energy: i32, distance: f64) -> i32;
}

/// Rolls torpedo damage against a target at `distance`.
pub trait TorpedoStrategy {
    fn resolve_damage(&self, distance: f64, rng: &mut dyn RandomSource) -> i32;
}

/// Rolls one Klingon shot at the Enterprise.
pub trait EnemyAttackStrategy {
    fn resolve_enemy_damage(
        &self,
        attacker: &Klingon,
        ship: &Enterprise,
        rng: &mut dyn RandomSource,
    ) -> i32;
}

/// Energy falls off linearly with distance. Adjacent targets take it all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPhaserStrategy;

impl PhaserStrategy for ClassicPhaserStrategy {
    fn resolve_damage(&self, allocated_energy: i32, distance: f64) -> i32 {
        if allocated_energy <= 0 {
            return 0;
        }
        (allocated_energy as f64 / distance.max(1.0)).floor() as i32
    }
}

/// Random warhead yield, softened by the square root of distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicTorpedoStrategy;

impl TorpedoStrategy for ClassicTorpedoStrategy {
    fn resolve_damage(&self, distance: f64, rng: &mut dyn RandomSource) -> i32 {
        let base = rng.next_int(TORPEDO_BASE_RANGE.0, TORPEDO_BASE_RANGE.1);
        (base as f64 / distance.max(1.0).sqrt()).floor() as i32
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEnemyAttackStrategy;

impl EnemyAttackStrategy for DefaultEnemyAttackStrategy {
    fn resolve_enemy_damage(
        &self,
        attacker: &Klingon,
        ship: &Enterprise,
        rng: &mut dyn RandomSource,
    ) -> i32 {
        let distance = calculate_distance(attacker.position, ship.position);
        let base = rng.next_int(KLINGON_FIRE_RANGE.0, KLINGON_FIRE_RANGE.1);
        (base as f64 / distance.max(1.0)).floor() as i32
    }
}
