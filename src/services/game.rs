//! Console session
//!
//! Wires a scenario, the turn sequencer, and the terminal views together and
//! runs the read-dispatch loop until the mission ends.

use std::cell::RefCell;
use std::io::ErrorKind;
use std::rc::Rc;

use log::info;

use crate::game_engine::{GameController, MissionOutcome};
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::events::{GameEvent, RenderReason};
use crate::models::random::RngKind;
use crate::services::scenario::{ScenarioConfig, ScenarioFactory};
use crate::ui::presenters::{ConsoleView, EventLogObserver, OutcomePresenter, RenderMode};

const PROMPT: &str = "COMMAND (HELP for list)";

/// Everything needed to start a session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// `None` seeds from the clock.
    pub seed: Option<u64>,
    pub rng: RngKind,
    pub scenario: ScenarioConfig,
    pub render_mode: RenderMode,
}

pub struct Game<I: InputReader, W: OutputWriter + 'static> {
    controller: GameController,
    input: I,
    view: Rc<RefCell<ConsoleView<W>>>,
    // Held so the weak registration stays alive
    event_log: Rc<RefCell<EventLogObserver>>,
}

impl<I: InputReader, W: OutputWriter + 'static> Game<I, W> {
    pub fn new(config: &SessionConfig, input: I, output: W) -> GameResult<Self> {
        config.scenario.validate()?;

        let mut rng = config.rng.build(config.seed);
        let state = ScenarioFactory::create_game(&config.scenario, rng.as_mut());
        let mut controller = GameController::new(state, rng);

        let view = Rc::new(RefCell::new(ConsoleView::with_mode(output, config.render_mode)));
        let event_log = Rc::new(RefCell::new(EventLogObserver::new()));
        controller.state_mut().add_observer(&view);
        controller.state_mut().add_observer(&event_log);

        info!(
            "session ready: rng {:?}, seed {:?}, {} Klingons, {} turns",
            config.rng, config.seed, config.scenario.enemy_count, config.scenario.turns
        );

        Ok(Game {
            controller,
            input,
            view,
            event_log,
        })
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn view(&self) -> &Rc<RefCell<ConsoleView<W>>> {
        &self.view
    }

    /// Play until the mission is decided, the player quits, or input ends.
    pub fn run(&mut self) -> GameResult<MissionOutcome> {
        self.controller
            .state()
            .notify(GameEvent::RenderRequested(RenderReason::Initial));

        while self.controller.can_continue() {
            let line = match self.input.read_line(PROMPT) {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    info!("input closed, ending session");
                    self.controller.request_quit();
                    break;
                }
                Err(e) => return Err(e.into()),
            };
            self.controller.dispatch(&line);
        }

        let outcome = self.controller.outcome();
        OutcomePresenter::show_outcome(outcome, self.view.borrow_mut().output_mut());
        info!(
            "session over at stardate {} after {} events: {:?}",
            self.controller.state().stardate(),
            self.event_log.borrow().events_seen(),
            outcome
        );
        Ok(outcome)
    }
}
