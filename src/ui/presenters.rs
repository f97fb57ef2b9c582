use std::fmt::{self, Write as _};
use std::io::{self, IsTerminal};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::Command as _;
use log::{debug, warn};

use crate::game_engine::MissionOutcome;
use crate::io::OutputWriter;
use crate::models::constants::SECTOR_SIZE;
use crate::models::events::{GameEvent, GameObserver};
use crate::models::game_state::GameState;
use crate::models::position::Position;

const BANNER_WIDTH: usize = 68;
const LOG_TAIL: usize = 8;
const MIN_SCREEN_WIDTH: usize = 60;
const FALLBACK_COLUMNS: usize = 120;

/// How frames reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Frames follow one another; for pipes, files and tests.
    #[default]
    Plain,
    /// Each frame repaints the screen from the top-left corner, every row
    /// cut or padded to `width` columns.
    InPlace { width: usize },
}

impl RenderMode {
    /// In-place when stdout is a terminal, plain otherwise.
    pub fn detect() -> Self {
        if !io::stdout().is_terminal() {
            return RenderMode::Plain;
        }
        let columns = terminal::size()
            .map(|(columns, _)| columns as usize)
            .unwrap_or_else(|e| {
                debug!("terminal size unavailable ({}), assuming {}", e, FALLBACK_COLUMNS);
                FALLBACK_COLUMNS
            });
        RenderMode::InPlace {
            width: MIN_SCREEN_WIDTH.max(columns.saturating_sub(1)),
        }
    }
}

/// Full-screen command console, redrawn whenever a render is requested.
pub struct ConsoleView<W: OutputWriter> {
    output: W,
    mode: RenderMode,
    // Rows painted by the previous in-place frame
    last_frame_height: usize,
}

impl<W: OutputWriter> ConsoleView<W> {
    pub fn new(output: W) -> Self {
        Self::with_mode(output, RenderMode::Plain)
    }

    pub fn with_mode(output: W, mode: RenderMode) -> Self {
        ConsoleView {
            output,
            mode,
            last_frame_height: 0,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// The console frame for `state`, one entry per screen line.
    pub fn build_frame(state: &GameState) -> Vec<String> {
        let banner = "=".repeat(BANNER_WIDTH);
        let ship = state.ship();
        let mut lines = vec![
            banner.clone(),
            "MAINFRAME TSO STAR TREK - COMMAND CONSOLE".to_string(),
            banner.clone(),
            format!(
                "STARDATE: {}   TURNS: {}   ALERT: {}",
                state.stardate(),
                state.turns_remaining(),
                ship.condition.label()
            ),
            format!(
                "ENERGY: {}   SHIELDS: {}   TORPEDOES: {}",
                ship.energy, ship.shields, ship.torpedoes
            ),
            format!(
                "POSITION: X={}, Y={}   HOSTILES: {}",
                ship.position.x,
                ship.position.y,
                state.alive_enemy_count()
            ),
            banner,
            "SECTOR MAP (E=Enterprise, K=Klingon)".to_string(),
        ];

        for y in 1..=SECTOR_SIZE {
            let row: Vec<&str> = (1..=SECTOR_SIZE)
                .map(|x| sector_symbol(state, Position::new(x, y)))
                .collect();
            lines.push(format!("{}  | {}", row.join(" "), y));
        }
        lines.push("1 2 3 4 5 6 7 8  | X-axis".to_string());
        lines.push(String::new());
        lines.push("--- COMPUTER LOG ---".to_string());

        let messages = state.messages();
        let start = messages.len().saturating_sub(LOG_TAIL);
        let tail = &messages[start..];
        for i in 0..LOG_TAIL {
            lines.push(tail.get(i).map(|m| format!("- {}", m)).unwrap_or_default());
        }

        lines.push(String::new());
        lines.push(
            "Commands: NAV <x> <y>, PHA <energy>, TOR <x> <y>, SRS, STATUS, HELP, QUIT".to_string(),
        );
        lines
    }

    /// Escape sequences that paint `frame` over the previous one and park
    /// the cursor on the row below it.
    fn paint_in_place(&self, frame: &[String], width: usize) -> Result<String, fmt::Error> {
        let mut screen = String::new();
        MoveTo(0, 0).write_ansi(&mut screen)?;
        for (row, text) in frame.iter().enumerate() {
            Clear(ClearType::CurrentLine).write_ansi(&mut screen)?;
            write!(screen, "{:<width$.width$}", text, width = width)?;
            if row + 1 < frame.len() {
                screen.push('\n');
            }
        }
        // A taller earlier frame leaves rows behind
        for _ in frame.len()..self.last_frame_height {
            screen.push('\n');
            Clear(ClearType::CurrentLine).write_ansi(&mut screen)?;
            screen.push_str(&" ".repeat(width));
        }
        let below = u16::try_from(frame.len() + 1).unwrap_or(u16::MAX);
        MoveTo(0, below).write_ansi(&mut screen)?;
        Ok(screen)
    }
}

/// A live Klingon hides the Enterprise if they share a sector.
fn sector_symbol(state: &GameState, pos: Position) -> &'static str {
    if state.quadrant().is_occupied(pos) {
        "K"
    } else if state.ship().position == pos {
        "E"
    } else {
        "."
    }
}

impl<W: OutputWriter> GameObserver for ConsoleView<W> {
    fn update(&mut self, event: &GameEvent, state: &GameState) {
        if !matches!(event, GameEvent::RenderRequested(_)) {
            return;
        }
        let frame = Self::build_frame(state);
        match self.mode {
            RenderMode::Plain => {
                for line in &frame {
                    self.output.writeln(line);
                }
            }
            RenderMode::InPlace { width } => match self.paint_in_place(&frame, width) {
                Ok(screen) => {
                    self.output.write(&screen);
                    self.last_frame_height = frame.len();
                }
                Err(e) => warn!("could not compose console frame: {}", e),
            },
        }
    }
}

/// Mirrors every engine event into the debug log.
#[derive(Debug, Default)]
pub struct EventLogObserver {
    seen: usize,
}

impl EventLogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events_seen(&self) -> usize {
        self.seen
    }
}

impl GameObserver for EventLogObserver {
    fn update(&mut self, event: &GameEvent, state: &GameState) {
        self.seen += 1;
        debug!("[stardate {}] {}", state.stardate(), event);
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    pub fn show_outcome(outcome: MissionOutcome, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(outcome.message());
    }
}
