use clap::Parser;
use log::info;

use tso_startrek::cli::Args;
use tso_startrek::io::TerminalIO;
use tso_startrek::services::game::Game;
use tso_startrek::GameResult;

fn main() -> GameResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = args.session_config()?;
    info!("starting with {:?}", config);

    let mut game = Game::new(&config, TerminalIO, TerminalIO)?;
    game.run()?;
    Ok(())
}
