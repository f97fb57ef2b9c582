use log::debug;

use crate::models::errors::CommandError;
use crate::models::events::GameEvent;
use crate::models::game_state::GameState;
use crate::services::command::{reject, Command, CommandContext};

use super::strategies::calculate_distance;

/// Check preconditions for firing phasers.
fn check_phaser_readiness(state: &GameState) -> Result<(), CommandError> {
    if state.alive_enemy_count() == 0 {
        return Err(CommandError::NoTargets);
    }
    Ok(())
}

/// Parse and validate the number of energy units to fire.
fn read_phaser_energy(state: &GameState, args: &[String]) -> Result<i32, CommandError> {
    let raw = args.first().ok_or(CommandError::Usage("PHA <energy>"))?;
    let units: i64 = raw
        .parse()
        .map_err(|_| CommandError::PhaserEnergyNotWhole)?;

    if units <= 0 {
        return Err(CommandError::PhaserEnergyNotPositive);
    }

    let available = state.ship().energy;
    match i32::try_from(units) {
        Ok(units) if units <= available => Ok(units),
        _ => Err(CommandError::InsufficientEnergy { available }),
    }
}

/// Split `requested` energy across targets by inverse distance.
///
/// `distances` must already be clamped to at least 1. Each share is floored
/// on its own, so the shares may sum to slightly less than `requested`.
pub fn allocate_phaser_energy(requested: i32, distances: &[f64]) -> Vec<i32> {
    let weights: Vec<f64> = distances.iter().map(|d| 1.0 / d).collect();
    let weight_sum: f64 = weights.iter().sum();

    weights
        .iter()
        .map(|w| (requested as f64 * (w / weight_sum)).floor() as i32)
        .collect()
}

/// PHA energy: fire at every live Klingon at once (consumes a turn).
///
/// Closer targets get a larger share of the volley. The full requested
/// amount leaves the ship's reserves up front, whatever the rounding.
pub struct PhaserCommand;

impl Command for PhaserCommand {
    fn name(&self) -> &'static str {
        "PHA"
    }

    fn description(&self) -> &'static str {
        "Fire phasers: PHA <energy>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> bool {
        let game = &mut *ctx.game_state;

        // Phase 1: Preconditions and input
        let requested = match check_phaser_readiness(game)
            .and_then(|()| read_phaser_energy(game, args))
        {
            Ok(units) => units,
            Err(err) => return reject(game, err),
        };

        // Phase 2: Targeting
        let ship_pos = game.ship().position;
        let distances: Vec<f64> = game
            .quadrant()
            .alive_klingons()
            .map(|k| calculate_distance(k.position, ship_pos).max(1.0))
            .collect();
        let shares = allocate_phaser_energy(requested, &distances);

        // Phase 3: Energy deduction
        game.ship_mut().subtract_energy(requested);

        // Phase 4: Apply damage in quadrant order
        let mut total_damage = 0;
        let mut reports = Vec::with_capacity(shares.len());
        let targets = game.quadrant_mut().alive_klingons_mut();
        for ((klingon, share), distance) in targets.zip(shares).zip(distances) {
            let damage = ctx.phaser_strategy.resolve_damage(share, distance);
            total_damage += damage;

            if klingon.take_damage(damage) {
                reports.push(format!("Klingon #{} destroyed.", klingon.id));
            } else {
                reports.push(format!(
                    "Klingon #{} hit for {}. Hull remaining: {}",
                    klingon.id, damage, klingon.hull
                ));
            }
        }

        for report in reports {
            game.add_message(report);
        }
        debug!("phaser volley of {} dealt {}", requested, total_damage);
        game.add_message(format!("Phaser volley complete. Total damage: {}", total_damage));
        game.notify(GameEvent::CombatResolved);
        true
    }
}
