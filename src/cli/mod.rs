//! Command-line interface for the console binary.

pub mod args;

pub use args::{Args, RngChoice};
