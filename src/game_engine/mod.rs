//! Turn sequencer
//!
//! [`GameController`] owns the game state and turns one line of player input
//! into one atomic step: parse, run the command, let the Klingons answer if
//! the order took a turn, advance the clock, re-evaluate the alert, and ask
//! the views to redraw.
//!
//! [`MissionOutcome`] decides how a finished session is reported.

use log::debug;

use crate::models::constants::{AlertLevel, TURN_CONSUMING_VERBS};
use crate::models::events::{GameEvent, RenderReason};
use crate::models::game_state::GameState;
use crate::models::random::RandomSource;
use crate::services::combat::{
    klingons_fire, ClassicPhaserStrategy, ClassicTorpedoStrategy, DefaultEnemyAttackStrategy,
    EnemyAttackStrategy, PhaserStrategy, TorpedoStrategy,
};
use crate::services::command::{CommandContext, CommandRegistry, ControllerPort};

/// One line of player input, split into an upper-case verb and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: String,
    pub args: Vec<String>,
}

pub struct CommandParser;

impl CommandParser {
    /// Split on whitespace. Blank input yields `None`.
    pub fn parse(input: &str) -> Option<ParsedCommand> {
        let mut tokens = input.split_whitespace();
        let verb = tokens.next()?.to_uppercase();
        let args = tokens.map(str::to_string).collect();
        Some(ParsedCommand { verb, args })
    }
}

/// The part of the controller that commands are allowed to touch.
#[derive(Debug, Default)]
pub struct SessionControl {
    quit_requested: bool,
    names: Vec<&'static str>,
}

impl ControllerPort for SessionControl {
    fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    fn command_names(&self) -> Vec<&'static str> {
        self.names.clone()
    }
}

pub struct GameController {
    state: GameState,
    registry: CommandRegistry,
    session: SessionControl,
    phaser_strategy: Box<dyn PhaserStrategy>,
    torpedo_strategy: Box<dyn TorpedoStrategy>,
    enemy_strategy: Box<dyn EnemyAttackStrategy>,
    rng: Box<dyn RandomSource>,
}

impl GameController {
    /// Standard command set and the classic damage model.
    pub fn new(state: GameState, rng: Box<dyn RandomSource>) -> Self {
        Self::with_strategies(
            state,
            rng,
            Box::new(ClassicPhaserStrategy),
            Box::new(ClassicTorpedoStrategy),
            Box::new(DefaultEnemyAttackStrategy),
        )
    }

    pub fn with_strategies(
        state: GameState,
        rng: Box<dyn RandomSource>,
        phaser_strategy: Box<dyn PhaserStrategy>,
        torpedo_strategy: Box<dyn TorpedoStrategy>,
        enemy_strategy: Box<dyn EnemyAttackStrategy>,
    ) -> Self {
        let registry = CommandRegistry::standard();
        let session = SessionControl {
            quit_requested: false,
            names: registry.names(),
        };
        GameController {
            state,
            registry,
            session,
            phaser_strategy,
            torpedo_strategy,
            enemy_strategy,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mostly for registering observers.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn quit_requested(&self) -> bool {
        self.session.quit_requested
    }

    /// Stop the session from outside a command, e.g. when input runs dry.
    pub fn request_quit(&mut self) {
        self.session.request_quit();
    }

    pub fn can_continue(&self) -> bool {
        !self.session.quit_requested && !self.state.is_game_over()
    }

    /// Run one line of player input to completion.
    pub fn dispatch(&mut self, input: &str) {
        let Some(parsed) = CommandParser::parse(input) else {
            return;
        };
        let command = self.registry.lookup(&parsed.verb);
        debug!(
            "dispatch {} {:?} ({})",
            parsed.verb,
            parsed.args,
            command.description()
        );

        let mut ctx = CommandContext {
            game_state: &mut self.state,
            phaser_strategy: self.phaser_strategy.as_ref(),
            torpedo_strategy: self.torpedo_strategy.as_ref(),
            rng: self.rng.as_mut(),
            controller: &mut self.session,
        };
        let executed = command.execute(&mut ctx, &parsed.args);

        if executed && TURN_CONSUMING_VERBS.contains(&parsed.verb.as_str()) {
            self.resolve_turn();
        }

        self.state
            .notify(GameEvent::RenderRequested(RenderReason::PostCommand));
    }

    /// Klingon return fire, then the clock.
    fn resolve_turn(&mut self) {
        klingons_fire(
            &mut self.state,
            self.enemy_strategy.as_ref(),
            self.rng.as_mut(),
        );
        self.state.advance_turn();
        self.state.evaluate_ship_condition();
    }

    pub fn outcome(&self) -> MissionOutcome {
        MissionOutcome::evaluate(&self.state, self.session.quit_requested)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionOutcome {
    ShipLost,
    Victory,
    Terminated,
    TimeExpired,
}

impl MissionOutcome {
    /// Destruction beats victory, victory beats quitting, and anything else
    /// is the clock running out.
    pub fn evaluate(state: &GameState, quit_requested: bool) -> Self {
        if state.ship().condition == AlertLevel::Destroyed {
            MissionOutcome::ShipLost
        } else if state.alive_enemy_count() == 0 {
            MissionOutcome::Victory
        } else if quit_requested {
            MissionOutcome::Terminated
        } else {
            MissionOutcome::TimeExpired
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MissionOutcome::ShipLost => "MISSION FAILED: The Enterprise was lost.",
            MissionOutcome::Victory => "MISSION SUCCESS: Enemy ships destroyed.",
            MissionOutcome::Terminated => "Simulation terminated by command.",
            MissionOutcome::TimeExpired => "MISSION FAILED: Stardate limit exceeded.",
        }
    }
}
