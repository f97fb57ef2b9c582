use log::debug;

use crate::models::errors::CommandError;
use crate::models::game_state::GameState;
use crate::models::position::Position;
use crate::services::command::{parse_coordinates, reject, Command, CommandContext};

use super::strategies::calculate_distance;

/// Validate a torpedo order: target sector first, then tube inventory.
fn read_torpedo_target(state: &GameState, args: &[String]) -> Result<Position, CommandError> {
    let target = parse_coordinates(args, "Torpedo", "TOR <x> <y>")?;

    if state.ship().torpedoes <= 0 {
        return Err(CommandError::TorpedoesExpended);
    }

    Ok(target)
}

/// TOR x y: fire one photon torpedo at a sector (consumes a turn).
///
/// The torpedo is spent before the target is resolved, so a miss still
/// costs ammunition and counts as an executed command.
pub struct TorpedoCommand;

impl Command for TorpedoCommand {
    fn name(&self) -> &'static str {
        "TOR"
    }

    fn description(&self) -> &'static str {
        "Fire photon torpedo: TOR <x> <y>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> bool {
        let game = &mut *ctx.game_state;

        let target = match read_torpedo_target(game, args) {
            Ok(target) => target,
            Err(err) => return reject(game, err),
        };

        game.ship_mut().consume_torpedo();
        let ship_pos = game.ship().position;

        let strike = match game.quadrant_mut().klingon_at_mut(target) {
            Some(klingon) => {
                let distance = calculate_distance(target, ship_pos);
                let damage = ctx.torpedo_strategy.resolve_damage(distance, &mut *ctx.rng);
                let destroyed = klingon.take_damage(damage);
                Some((klingon.id, damage, destroyed, klingon.hull))
            }
            None => None,
        };

        let Some((id, damage, destroyed, hull)) = strike else {
            debug!("torpedo missed at {:?}", target);
            game.add_message(format!(
                "Photon torpedo misses at X={} Y={}.",
                target.x, target.y
            ));
            return true;
        };

        debug!("torpedo hit Klingon #{} for {}", id, damage);
        if destroyed {
            game.add_message(format!("Direct hit! Klingon #{} destroyed.", id));
        } else {
            game.add_message(format!(
                "Direct hit on Klingon #{} for {}. Hull remaining: {}",
                id, damage, hull
            ));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::klingon::Klingon;
    use crate::models::random::test_utils::FixedRandom;
    use crate::services::command::test_utils::run;

    /// Enterprise at (5,4), Klingon #1 at (3,1) with 444 hull.
    fn setup() -> GameState {
        let mut state = GameState::default();
        state.ship_mut().move_to(Position::new(5, 4));
        state
            .quadrant_mut()
            .klingons
            .push(Klingon::new(1, 444, Position::new(3, 1)));
        state
    }

    fn tor(state: &mut GameState, base: i32, args: &[&str]) -> bool {
        run(&TorpedoCommand, state, &mut FixedRandom(base), args)
    }

    #[test]
    fn hit_scales_with_root_of_distance() {
        let mut state = setup();
        // distance sqrt(13), 526 / 13^0.25 = 277.01
        assert!(tor(&mut state, 526, &["3", "1"]));

        assert_eq!(state.quadrant().klingons[0].hull, 167);
        assert_eq!(state.ship().torpedoes, 9);
        assert_eq!(
            state.last_message(),
            Some("Direct hit on Klingon #1 for 277. Hull remaining: 167")
        );
    }

    #[test]
    fn lethal_hit_reports_destruction() {
        let mut state = setup();
        state.quadrant_mut().klingons[0].hull = 100;

        assert!(tor(&mut state, 600, &["3", "1"]));
        assert_eq!(state.quadrant().klingons[0].hull, 0);
        assert_eq!(state.last_message(), Some("Direct hit! Klingon #1 destroyed."));
    }

    #[test]
    fn miss_still_spends_the_torpedo() {
        let mut state = setup();
        assert!(tor(&mut state, 500, &["8", "8"]));

        assert_eq!(state.ship().torpedoes, 9);
        assert_eq!(state.quadrant().klingons[0].hull, 444);
        assert_eq!(state.last_message(), Some("Photon torpedo misses at X=8 Y=8."));
    }

    #[test]
    fn wreck_is_not_a_target() {
        let mut state = setup();
        state.quadrant_mut().klingons[0].hull = 0;

        assert!(tor(&mut state, 500, &["3", "1"]));
        assert_eq!(state.last_message(), Some("Photon torpedo misses at X=3 Y=1."));
    }

    #[test]
    fn empty_tubes_are_rejected() {
        let mut state = setup();
        state.ship_mut().torpedoes = 0;

        assert!(!tor(&mut state, 500, &["3", "1"]));
        assert_eq!(state.ship().torpedoes, 0);
        assert_eq!(state.last_message(), Some("No photon torpedoes remaining."));
    }

    #[test]
    fn coordinates_are_checked_before_inventory() {
        let mut state = setup();
        state.ship_mut().torpedoes = 0;

        assert!(!tor(&mut state, 500, &["0", "3"]));
        assert_eq!(
            state.last_message(),
            Some("Torpedo coordinates must be between 1 and 8.")
        );
    }

    #[test]
    fn rejects_missing_arguments() {
        let mut state = setup();
        assert!(!tor(&mut state, 500, &["3"]));
        assert_eq!(state.last_message(), Some("Usage: TOR <x> <y>"));
        assert_eq!(state.ship().torpedoes, 10);
    }
}
