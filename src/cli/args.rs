use clap::{Parser, ValueEnum};

use crate::models::errors::GameResult;
use crate::models::random::RngKind;
use crate::services::game::SessionConfig;
use crate::services::scenario::{ScenarioConfig, MAX_ENEMIES};
use crate::ui::presenters::RenderMode;

/// Command line arguments for the command console.
#[derive(Parser, Debug)]
#[command(name = "tso-startrek")]
#[command(about = "Turn-based Star Trek sector combat on a mainframe-style console")]
#[command(version)]
pub struct Args {
    /// Seed for the random number generator (0 or absent picks a fresh one)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Random number generator backing the game
    #[arg(long, value_enum, default_value_t = RngChoice::Lcg)]
    pub rng: RngChoice,

    /// Number of Klingon vessels in the quadrant
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=MAX_ENEMIES as i64))]
    pub enemies: u8,

    /// Turns before the mission clock runs out
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i32).range(1..))]
    pub turns: i32,

    /// Print every frame below the last instead of redrawing in place
    #[arg(long)]
    pub plain: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RngChoice {
    /// Classic linear congruential generator
    Lcg,
    /// The rand crate's StdRng
    Std,
}

impl From<RngChoice> for RngKind {
    fn from(choice: RngChoice) -> Self {
        match choice {
            RngChoice::Lcg => RngKind::Lcg,
            RngChoice::Std => RngKind::Std,
        }
    }
}

impl Args {
    /// Session settings, validated.
    pub fn session_config(&self) -> GameResult<SessionConfig> {
        let scenario = ScenarioConfig {
            enemy_count: self.enemies as usize,
            turns: self.turns,
            ..Default::default()
        };
        scenario.validate()?;

        Ok(SessionConfig {
            seed: self.seed,
            rng: self.rng.into(),
            scenario,
            render_mode: if self.plain {
                RenderMode::Plain
            } else {
                RenderMode::detect()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_mission() {
        let args = Args::parse_from(["tso-startrek"]);
        let config = args.session_config().unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.rng, RngKind::Lcg);
        assert_eq!(config.scenario, ScenarioConfig::default());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn flags_reach_the_session() {
        let args = Args::parse_from([
            "tso-startrek", "--seed", "42", "--rng", "std", "--enemies", "5", "--turns", "12",
        ]);
        let config = args.session_config().unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.rng, RngKind::Std);
        assert_eq!(config.scenario.enemy_count, 5);
        assert_eq!(config.scenario.turns, 12);
    }

    #[test]
    fn plain_flag_forces_streamed_frames() {
        let args = Args::parse_from(["tso-startrek", "--plain"]);
        assert!(args.plain);
        assert_eq!(args.session_config().unwrap().render_mode, RenderMode::Plain);
    }

    #[test]
    fn out_of_range_values_are_refused_by_the_parser() {
        assert!(Args::try_parse_from(["tso-startrek", "--enemies", "0"]).is_err());
        assert!(Args::try_parse_from(["tso-startrek", "--enemies", "17"]).is_err());
        assert!(Args::try_parse_from(["tso-startrek", "--turns", "0"]).is_err());
        assert!(Args::try_parse_from(["tso-startrek", "--rng", "dice"]).is_err());
    }
}
