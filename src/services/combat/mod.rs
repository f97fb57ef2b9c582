//! Combat system
//!
//! Phaser volleys, photon torpedoes, and the Klingon return fire that
//! follows every turn-consuming order. The damage formulas themselves sit
//! behind the strategy traits so they can be swapped without touching the
//! commands.

mod klingon_attack;
mod phasers;
pub mod strategies;
mod torpedoes;

pub use klingon_attack::klingons_fire;
pub use phasers::{allocate_phaser_energy, PhaserCommand};
pub use strategies::{
    calculate_distance, ClassicPhaserStrategy, ClassicTorpedoStrategy,
    DefaultEnemyAttackStrategy, EnemyAttackStrategy, PhaserStrategy, TorpedoStrategy,
};
pub use torpedoes::TorpedoCommand;
