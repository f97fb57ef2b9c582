//! Game state
//!
//! The aggregate the whole engine works on: the Enterprise, the quadrant with
//! its Klingons, the mission clock, the computer log, and the observers that
//! get told about every change.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::constants::{AlertLevel, MISSION_TURNS, STARTING_STARDATE};
use super::enterprise::Enterprise;
use super::events::{GameEvent, GameObserver};
use super::quadrant::Quadrant;

/// Top-level game state container.
pub struct GameState {
    ship: Enterprise,
    quadrant: Quadrant,
    stardate: i32,
    turns_remaining: i32,
    /// Append-only. Views decide how much of the tail to show.
    message_log: Vec<String>,
    /// Held weakly: the state never keeps an observer alive.
    observers: Vec<Weak<RefCell<dyn GameObserver>>>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(STARTING_STARDATE, MISSION_TURNS)
    }
}

impl GameState {
    pub fn new(stardate: i32, turns_remaining: i32) -> Self {
        GameState {
            ship: Enterprise::new(),
            quadrant: Quadrant::new(),
            stardate,
            turns_remaining,
            message_log: Vec::new(),
            observers: Vec::new(),
        }
    }

    // ========== Accessor Methods ==========

    pub fn ship(&self) -> &Enterprise {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Enterprise {
        &mut self.ship
    }

    pub fn quadrant(&self) -> &Quadrant {
        &self.quadrant
    }

    pub fn quadrant_mut(&mut self) -> &mut Quadrant {
        &mut self.quadrant
    }

    pub fn stardate(&self) -> i32 {
        self.stardate
    }

    pub fn turns_remaining(&self) -> i32 {
        self.turns_remaining
    }

    pub fn messages(&self) -> &[String] {
        &self.message_log
    }

    /// The most recent log entry, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.message_log.last().map(String::as_str)
    }

    pub fn alive_enemy_count(&self) -> usize {
        self.quadrant.alive_count()
    }

    // ========== Observers ==========

    /// Subscribe an observer. The caller keeps ownership.
    pub fn add_observer<O: GameObserver + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        self.observers.retain(|o| o.strong_count() > 0);
        let weak: Weak<RefCell<O>> = Rc::downgrade(observer);
        self.observers.push(weak);
    }

    /// Broadcast to live observers in registration order.
    pub fn notify(&self, event: GameEvent) {
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            match observer.try_borrow_mut() {
                Ok(mut o) => o.update(&event, self),
                Err(_) => warn!("observer busy, dropped {}", event.name()),
            }
        }
    }

    // ========== State Transitions ==========

    pub fn add_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.message_log.push(message.clone());
        self.notify(GameEvent::MessageAdded(message));
    }

    /// Move the mission clock forward one turn.
    pub fn advance_turn(&mut self) {
        self.stardate += 1;
        self.turns_remaining -= 1;
        debug!(
            "stardate {} ({} turns remaining)",
            self.stardate, self.turns_remaining
        );
        self.notify(GameEvent::TurnAdvanced);
    }

    /// Red alert while any Klingon is alive, normal otherwise.
    /// A destroyed ship is left alone and nothing is broadcast.
    pub fn evaluate_ship_condition(&mut self) {
        if self.ship.is_destroyed() {
            return;
        }

        let level = if self.alive_enemy_count() > 0 {
            AlertLevel::RedAlert
        } else {
            AlertLevel::Normal
        };
        self.ship.set_condition(level);
        self.notify(GameEvent::ConditionChanged(level));
    }

    /// Destroyed, quadrant cleared, or out of time.
    pub fn is_game_over(&self) -> bool {
        if self.ship.is_destroyed() {
            return true;
        }

        if self.alive_enemy_count() == 0 {
            return true;
        }

        self.turns_remaining <= 0
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("GameState")
            .field("ship", &self.ship)
            .field("quadrant", &self.quadrant)
            .field("stardate", &self.stardate)
            .field("turns_remaining", &self.turns_remaining)
            .field("messages", &self.message_log.len())
            .finish_non_exhaustive()
    }
}
