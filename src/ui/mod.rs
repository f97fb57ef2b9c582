//! User interface and presentation
//!
//! Views subscribe to the game state as observers and turn engine events
//! into terminal output. Nothing here mutates the game.

pub mod presenters;
