//! TSO Star Trek Engine
//!
//! A turn-based sector-combat game in the style of the mainframe Star Trek
//! consoles.
//!
//! # Overview
//!
//! The player commands the USS Enterprise in a single 8x8 quadrant and must
//! destroy every Klingon vessel before the mission clock runs out. Each
//! navigation, phaser, or torpedo order costs a turn and draws return fire
//! from every Klingon still alive.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn sequencer, command parsing and mission outcome
//! - [`models`] - Domain models (GameState, Enterprise, Klingon, events, RNG)
//! - [`services`] - Commands, combat, scenario setup and the console session
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Console views and presenters
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use tso_startrek::{GameController, LcgRandom, ScenarioFactory};
//!
//! let mut rng = LcgRandom::new(Some(42));
//! let state = ScenarioFactory::create_default_game(&mut rng);
//! let mut controller = GameController::new(state, Box::new(rng));
//!
//! controller.dispatch("NAV 5 4");
//! assert_eq!(controller.state().turns_remaining(), 29);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{CommandParser, GameController, MissionOutcome};
pub use models::errors::{CommandError, GameError, GameResult};
pub use models::events::{GameEvent, GameObserver, RenderReason};
pub use models::game_state::GameState;
pub use models::random::{LcgRandom, RandomSource, RngKind};
pub use services::scenario::{ScenarioConfig, ScenarioFactory};
