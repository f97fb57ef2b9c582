//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are plain data with the state transitions the
//! rules need; command resolution lives in `services`.

pub mod constants;
pub mod position;
pub mod enterprise;
pub mod klingon;
pub mod quadrant;
pub mod game_state;
pub mod events;
pub mod random;
pub mod errors;
