//! Command set
//!
//! Every verb the player can type is a [`Command`]. Handlers validate their
//! own arguments, mutate the game state, and write to the computer log.
//! Rejected input never escapes as an error: it becomes a log line and a
//! `false` ("not executed") result.

use std::collections::BTreeMap;

use crate::models::errors::CommandError;
use crate::models::game_state::GameState;
use crate::models::position::Position;
use crate::models::random::RandomSource;
use crate::services::combat::{PhaserCommand, PhaserStrategy, TorpedoCommand, TorpedoStrategy};
use crate::services::computer::StatusCommand;
use crate::services::navigation::NavigateCommand;
use crate::services::scan::ShortRangeScanCommand;

/// What a command may ask of the controller that runs it.
pub trait ControllerPort {
    fn request_quit(&mut self);
    /// Registered verbs, sorted.
    fn command_names(&self) -> Vec<&'static str>;
}

/// Everything a command needs for one execution.
pub struct CommandContext<'a> {
    pub game_state: &'a mut GameState,
    pub phaser_strategy: &'a dyn PhaserStrategy,
    pub torpedo_strategy: &'a dyn TorpedoStrategy,
    pub rng: &'a mut dyn RandomSource,
    pub controller: &'a mut dyn ControllerPort,
}

pub trait Command {
    /// Upper-case verb the player types.
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Run the command. Returns true if it executed, false if rejected.
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> bool;
}

/// Log a validation failure and report the command as not executed.
pub(crate) fn reject(game_state: &mut GameState, err: CommandError) -> bool {
    game_state.add_message(err.to_string());
    false
}

/// Parse `<x> <y>` sector arguments shared by NAV and TOR.
pub(crate) fn parse_coordinates(
    args: &[String],
    system: &'static str,
    usage: &'static str,
) -> Result<Position, CommandError> {
    if args.len() < 2 {
        return Err(CommandError::Usage(usage));
    }

    let (x, y) = match (args[0].parse::<i64>(), args[1].parse::<i64>()) {
        (Ok(x), Ok(y)) => (x, y),
        _ => return Err(CommandError::CoordinatesNotWhole(system)),
    };

    // Anything beyond i32 is off the grid anyway
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(x), Ok(y)) if Position::in_bounds(x, y) => Ok(Position::new(x, y)),
        _ => Err(CommandError::CoordinatesOutOfRange(system)),
    }
}

/// HELP: list every registered verb.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "HELP"
    }

    fn description(&self) -> &'static str {
        "List commands"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> bool {
        let names = ctx.controller.command_names().join(", ");
        ctx.game_state
            .add_message(format!("Available commands: {}", names));
        true
    }
}

/// QUIT: ask the session to stop after this command.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn name(&self) -> &'static str {
        "QUIT"
    }

    fn description(&self) -> &'static str {
        "Exit game"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> bool {
        ctx.controller.request_quit();
        ctx.game_state
            .add_message("Starfleet command acknowledged. Ending simulation.");
        true
    }
}

/// Fallback for anything not in the registry.
pub struct UnknownCommand;

impl Command for UnknownCommand {
    fn name(&self) -> &'static str {
        "UNKNOWN"
    }

    fn description(&self) -> &'static str {
        "Unknown command handler"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> bool {
        reject(ctx.game_state, CommandError::UnknownCommand)
    }
}

/// Verb lookup with an [`UnknownCommand`] fallback.
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
    unknown: UnknownCommand,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandRegistry {
    pub fn empty() -> Self {
        CommandRegistry {
            commands: BTreeMap::new(),
            unknown: UnknownCommand,
        }
    }

    /// NAV, PHA, TOR, SRS, STATUS, HELP and QUIT.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(NavigateCommand));
        registry.register(Box::new(PhaserCommand));
        registry.register(Box::new(TorpedoCommand));
        registry.register(Box::new(ShortRangeScanCommand));
        registry.register(Box::new(StatusCommand));
        registry.register(Box::new(HelpCommand));
        registry.register(Box::new(QuitCommand));
        registry
    }

    /// Add a command, replacing any earlier one with the same verb.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name(), command);
    }

    /// Upper-case verb lookup. Unregistered verbs get the unknown handler.
    pub fn lookup(&self, verb: &str) -> &dyn Command {
        self.commands
            .get(verb)
            .map(|command| command.as_ref())
            .unwrap_or(&self.unknown)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::services::combat::{ClassicPhaserStrategy, ClassicTorpedoStrategy};

    /// Controller stand-in that records quit requests.
    pub struct StubController {
        pub quit_requested: bool,
        pub names: Vec<&'static str>,
    }

    impl Default for StubController {
        fn default() -> Self {
            StubController {
                quit_requested: false,
                names: CommandRegistry::standard().names(),
            }
        }
    }

    impl ControllerPort for StubController {
        fn request_quit(&mut self) {
            self.quit_requested = true;
        }

        fn command_names(&self) -> Vec<&'static str> {
            self.names.clone()
        }
    }

    /// Execute `command` once with the classic strategies.
    pub fn run_with(
        command: &dyn Command,
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        controller: &mut StubController,
        args: &[&str],
    ) -> bool {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut ctx = CommandContext {
            game_state: state,
            phaser_strategy: &ClassicPhaserStrategy,
            torpedo_strategy: &ClassicTorpedoStrategy,
            rng,
            controller,
        };
        command.execute(&mut ctx, &args)
    }

    pub fn run(
        command: &dyn Command,
        state: &mut GameState,
        rng: &mut dyn RandomSource,
        args: &[&str],
    ) -> bool {
        run_with(command, state, rng, &mut StubController::default(), args)
    }
}
