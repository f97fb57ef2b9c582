//! Notifications broadcast by the game state to its observers.

use std::fmt;

use super::constants::AlertLevel;
use super::game_state::GameState;

/// Why a redraw was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderReason {
    Initial,
    Srs,
    Status,
    PostCommand,
}

impl RenderReason {
    pub fn tag(&self) -> &'static str {
        match self {
            RenderReason::Initial => "INITIAL",
            RenderReason::Srs => "SRS",
            RenderReason::Status => "STATUS",
            RenderReason::PostCommand => "POST_COMMAND",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RenderRequested(RenderReason),
    MessageAdded(String),
    TurnAdvanced,
    ConditionChanged(AlertLevel),
    /// A phaser volley finished resolving.
    CombatResolved,
}

impl GameEvent {
    /// Event name as seen by renderers.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::RenderRequested(_) => "RenderRequested",
            GameEvent::MessageAdded(_) => "MessageAdded",
            GameEvent::TurnAdvanced => "TurnAdvanced",
            GameEvent::ConditionChanged(_) => "ConditionChanged",
            GameEvent::CombatResolved => "CombatResolved",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameEvent::RenderRequested(reason) => write!(f, "{}({})", self.name(), reason.tag()),
            GameEvent::MessageAdded(msg) => write!(f, "{}({})", self.name(), msg),
            GameEvent::ConditionChanged(level) => write!(f, "{}({})", self.name(), level.label()),
            GameEvent::TurnAdvanced | GameEvent::CombatResolved => write!(f, "{}", self.name()),
        }
    }
}

/// Receives every event the game state broadcasts.
///
/// Observers are called synchronously, in registration order, while the
/// state is borrowed; they must not try to mutate it.
pub trait GameObserver {
    fn update(&mut self, event: &GameEvent, state: &GameState);
}
