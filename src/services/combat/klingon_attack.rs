use log::{debug, info};

use crate::models::game_state::GameState;
use crate::models::klingon::Klingon;
use crate::models::random::RandomSource;

use super::strategies::EnemyAttackStrategy;

/// Every live Klingon fires once at the Enterprise, in quadrant order.
///
/// The shooters are fixed before the first shot. Firing stops as soon as
/// the Enterprise is destroyed. Returns true if it was.
pub fn klingons_fire(
    state: &mut GameState,
    strategy: &dyn EnemyAttackStrategy,
    rng: &mut dyn RandomSource,
) -> bool {
    let attackers: Vec<Klingon> = state.quadrant().alive_klingons().copied().collect();

    if attackers.is_empty() {
        state.add_message("Sector clear of enemy threats.");
        return false;
    }

    for attacker in &attackers {
        let damage = strategy.resolve_enemy_damage(attacker, state.ship(), rng);
        state.ship_mut().apply_damage(damage);
        debug!(
            "Klingon #{} hit for {}; shields {} energy {}",
            attacker.id,
            damage,
            state.ship().shields,
            state.ship().energy
        );
        state.add_message(format!("Klingon #{} fires for {} damage.", attacker.id, damage));

        if state.ship().is_destroyed() {
            info!("Enterprise destroyed by Klingon #{}", attacker.id);
            state.add_message("The Enterprise has been destroyed.");
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::AlertLevel;
    use crate::models::position::Position;
    use crate::models::random::test_utils::FixedRandom;
    use crate::services::combat::strategies::DefaultEnemyAttackStrategy;

    /// Enterprise at (4,4) under red alert; Klingons at distance 1 each.
    fn setup_combat_scenario(hulls: &[i32]) -> GameState {
        let mut state = GameState::default();
        let spots = [(4, 5), (5, 4), (3, 4), (4, 3)];
        for (i, (hull, (x, y))) in hulls.iter().zip(spots).enumerate() {
            state
                .quadrant_mut()
                .klingons
                .push(Klingon::new(i as u32 + 1, *hull, Position::new(x, y)));
        }
        state.ship_mut().set_condition(AlertLevel::RedAlert);
        state
    }

    fn fire(state: &mut GameState, base: i32) -> bool {
        klingons_fire(state, &DefaultEnemyAttackStrategy, &mut FixedRandom(base))
    }

    #[test]
    fn each_live_klingon_fires_once() {
        let mut state = setup_combat_scenario(&[300, 300]);
        assert!(!fire(&mut state, 200));

        // 200 * 0.9 = 180 absorbed twice
        assert_eq!(state.ship().shields, 1000 - 360);
        assert_eq!(state.ship().energy, 3000);
        assert_eq!(
            state.messages(),
            [
                "Klingon #1 fires for 200 damage.".to_string(),
                "Klingon #2 fires for 200 damage.".to_string(),
            ]
        );
    }

    #[test]
    fn dead_klingons_hold_fire() {
        let mut state = setup_combat_scenario(&[0, 300]);
        fire(&mut state, 200);
        assert_eq!(state.messages(), ["Klingon #2 fires for 200 damage.".to_string()]);
    }

    #[test]
    fn sector_clear_when_no_enemies() {
        let mut state = setup_combat_scenario(&[0]);
        assert!(!fire(&mut state, 200));
        assert_eq!(state.ship().shields, 1000);
        assert_eq!(state.last_message(), Some("Sector clear of enemy threats."));
    }

    #[test]
    fn firing_stops_once_enterprise_is_destroyed() {
        let mut state = setup_combat_scenario(&[300, 300, 300]);
        state.ship_mut().shields = 0;
        state.ship_mut().energy = 150;

        assert!(fire(&mut state, 200));

        assert_eq!(state.ship().energy, 0);
        assert_eq!(state.ship().condition, AlertLevel::Destroyed);
        assert_eq!(
            state.messages(),
            [
                "Klingon #1 fires for 200 damage.".to_string(),
                "The Enterprise has been destroyed.".to_string(),
            ]
        );
    }
}
