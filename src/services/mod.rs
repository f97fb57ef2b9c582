//! Game services
//!
//! The rules of play: the command set, combat resolution, navigation,
//! scenario setup, and the console session that drives them.

pub mod combat;
pub mod command;
pub mod computer;
pub mod game;
pub mod navigation;
pub mod scan;
pub mod scenario;
