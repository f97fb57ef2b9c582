//! Scenario setup
//!
//! Builds a ready-to-play [`GameState`]: a fresh Enterprise at its starting
//! sector and a squadron of Klingons scattered across the quadrant.

use log::debug;

use crate::models::constants::{
    KLINGON_COUNT, KLINGON_HULL_RANGE, MISSION_TURNS, SECTOR_SIZE, STARTING_STARDATE,
};
use crate::models::errors::{GameError, GameResult};
use crate::models::game_state::GameState;
use crate::models::klingon::Klingon;
use crate::models::position::Position;
use crate::models::random::RandomSource;

/// Largest squadron a scenario may field.
pub const MAX_ENEMIES: usize = 16;

/// Knobs for a new game. `Default` is the classic mission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub enemy_count: usize,
    pub stardate: i32,
    pub turns: i32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            enemy_count: KLINGON_COUNT,
            stardate: STARTING_STARDATE,
            turns: MISSION_TURNS,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> GameResult<()> {
        if self.enemy_count == 0 || self.enemy_count > MAX_ENEMIES {
            return Err(GameError::InvalidConfig(format!(
                "enemy count must be between 1 and {}, got {}",
                MAX_ENEMIES, self.enemy_count
            )));
        }
        if self.turns < 1 {
            return Err(GameError::InvalidConfig(format!(
                "mission needs at least one turn, got {}",
                self.turns
            )));
        }
        Ok(())
    }
}

pub struct ScenarioFactory;

impl ScenarioFactory {
    /// Three Klingons, stardate 1312, thirty turns.
    pub fn create_default_game(rng: &mut dyn RandomSource) -> GameState {
        Self::create_game(&ScenarioConfig::default(), rng)
    }

    /// Place `config.enemy_count` Klingons and announce them.
    ///
    /// Draw order per Klingon is x, y, hull. A Klingon that lands on the
    /// Enterprise is nudged one column right, wrapping 8 to 1. Klingons may
    /// share a sector with each other.
    pub fn create_game(config: &ScenarioConfig, rng: &mut dyn RandomSource) -> GameState {
        let mut state = GameState::new(config.stardate, config.turns);
        let ship_pos = state.ship().position;

        for id in 1..=config.enemy_count {
            let mut x = rng.next_int(1, SECTOR_SIZE + 1);
            let y = rng.next_int(1, SECTOR_SIZE + 1);
            if Position::new(x, y) == ship_pos {
                x = (x % SECTOR_SIZE) + 1;
            }
            let hull = rng.next_int(KLINGON_HULL_RANGE.0, KLINGON_HULL_RANGE.1);

            debug!("Klingon #{} at ({}, {}) hull {}", id, x, y, hull);
            state
                .quadrant_mut()
                .klingons
                .push(Klingon::new(id as u32, hull, Position::new(x, y)));
        }

        state.add_message("Incoming transmission: Klingon vessels detected in this quadrant.");
        state.evaluate_ship_condition();
        state
    }
}
