//! Navigation
//!
//! Impulse moves inside the quadrant. The ship jumps straight to the target
//! sector; the energy bill grows with the Euclidean distance covered.

use log::debug;

use crate::models::constants::{MIN_NAV_COST, NAV_COST_PER_SECTOR};
use crate::models::errors::CommandError;
use crate::models::game_state::GameState;
use crate::models::position::Position;
use crate::services::command::{parse_coordinates, reject, Command, CommandContext};

use super::combat::calculate_distance;

/// Energy needed to move between two sectors: 80 per unit of distance,
/// never less than 25.
pub fn course_energy_cost(from: Position, to: Position) -> i32 {
    let distance = calculate_distance(from, to);
    MIN_NAV_COST.max((distance * NAV_COST_PER_SECTOR).floor() as i32)
}

/// Validate a course and work out what it costs.
fn plot_course(state: &GameState, args: &[String]) -> Result<(Position, i32), CommandError> {
    let target = parse_coordinates(args, "Navigation", "NAV <x> <y>")?;
    let ship = state.ship();

    if target == ship.position {
        return Err(CommandError::AlreadyThere);
    }

    if state.quadrant().is_occupied(target) {
        return Err(CommandError::SectorOccupied);
    }

    let cost = course_energy_cost(ship.position, target);
    if cost > ship.energy {
        return Err(CommandError::InsufficientCourseEnergy {
            required: cost,
            available: ship.energy,
        });
    }

    Ok((target, cost))
}

/// NAV x y: move the Enterprise to another sector (consumes a turn).
pub struct NavigateCommand;

impl Command for NavigateCommand {
    fn name(&self) -> &'static str {
        "NAV"
    }

    fn description(&self) -> &'static str {
        "Navigate to sector coordinates: NAV <x> <y>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> bool {
        let game = &mut *ctx.game_state;

        let (target, cost) = match plot_course(game, args) {
            Ok(course) => course,
            Err(err) => return reject(game, err),
        };

        let ship = game.ship_mut();
        ship.subtract_energy(cost);
        ship.move_to(target);
        debug!("warped to {:?} for {} energy", target, cost);

        game.add_message(format!(
            "Course laid in. Arrived at X={} Y={}. Energy cost: {}",
            target.x, target.y, cost
        ));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::klingon::Klingon;
    use crate::models::random::test_utils::FixedRandom;
    use crate::services::command::test_utils::run;

    /// Ship at (4,4) with one live Klingon at (6,6).
    fn setup() -> GameState {
        let mut state = GameState::default();
        state
            .quadrant_mut()
            .klingons
            .push(Klingon::new(1, 400, Position::new(6, 6)));
        state
    }

    fn nav(state: &mut GameState, args: &[&str]) -> bool {
        run(&NavigateCommand, state, &mut FixedRandom(0), args)
    }

    #[test]
    fn cost_has_a_floor_of_25() {
        // Adjacent diagonal: sqrt(2) * 80 = 113
        assert_eq!(course_energy_cost(Position::new(4, 4), Position::new(5, 5)), 113);
        assert_eq!(course_energy_cost(Position::new(4, 4), Position::new(5, 4)), 80);
        // Same square would be 0, floor applies
        assert_eq!(course_energy_cost(Position::new(4, 4), Position::new(4, 4)), 25);
    }

    #[test]
    fn successful_move_deducts_energy_and_relocates() {
        let mut state = setup();
        assert!(nav(&mut state, &["1", "1"]));

        // sqrt(18) * 80 = 339.4
        assert_eq!(state.ship().energy, 3000 - 339);
        assert_eq!(state.ship().position, Position::new(1, 1));
        assert_eq!(
            state.last_message(),
            Some("Course laid in. Arrived at X=1 Y=1. Energy cost: 339")
        );
    }

    #[test]
    fn rejects_move_onto_live_klingon() {
        let mut state = setup();
        assert!(!nav(&mut state, &["6", "6"]));
        assert_eq!(state.ship().energy, 3000);
        assert_eq!(state.ship().position, Position::new(4, 4));
        assert_eq!(
            state.last_message(),
            Some("Navigation blocked: hostile vessel occupies that sector.")
        );
    }

    #[test]
    fn wreck_does_not_block() {
        let mut state = setup();
        state.quadrant_mut().klingons[0].hull = 0;
        assert!(nav(&mut state, &["6", "6"]));
        assert_eq!(state.ship().position, Position::new(6, 6));
    }

    #[test]
    fn rejects_current_position() {
        let mut state = setup();
        assert!(!nav(&mut state, &["4", "4"]));
        assert_eq!(state.last_message(), Some("Already at those coordinates."));
    }

    #[test]
    fn rejects_when_energy_short() {
        let mut state = setup();
        state.ship_mut().energy = 100;
        assert!(!nav(&mut state, &["8", "8"]));
        assert_eq!(state.ship().energy, 100);
        assert_eq!(
            state.last_message(),
            Some("Insufficient energy for course. Required: 452, available: 100")
        );
    }

    #[test]
    fn exact_energy_is_enough() {
        let mut state = setup();
        state.ship_mut().energy = 80;
        assert!(nav(&mut state, &["5", "4"]));
        assert_eq!(state.ship().energy, 0);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut state = setup();
        assert!(!nav(&mut state, &[]));
        assert_eq!(state.last_message(), Some("Usage: NAV <x> <y>"));

        assert!(!nav(&mut state, &["x", "2"]));
        assert_eq!(
            state.last_message(),
            Some("Navigation coordinates must be whole numbers.")
        );

        assert!(!nav(&mut state, &["9", "2"]));
        assert_eq!(
            state.last_message(),
            Some("Navigation coordinates must be between 1 and 8.")
        );
        assert_eq!(state.ship().energy, 3000);
    }
}
