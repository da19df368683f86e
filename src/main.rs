use std::env;
use std::fs::File;
use std::io::Stdout;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config as LogConfig, WriteLogger};

use snekgrid::term::{restore_terminal, setup_terminal, CrosstermInput, TerminalRenderer};
use snekgrid::{Config, FixedRateClock, GameError, GameLoop};

fn main() -> Result<(), GameError> {
    let config =
        Config::parse_checked_from(env::args_os()).unwrap_or_else(|err| err.exit());

    // The terminal is taken by the game, so the log goes to a file
    WriteLogger::init(
        config.log_level(),
        LogConfig::default(),
        File::create(&config.log_file)?,
    )?;

    info!("Starting snekgrid with {:?}", config);

    let terminal = setup_terminal()?;
    let result = play(&config, terminal);
    if let Err(e) = &result {
        error!("Game stopped: {}", e);
    }

    restore_terminal()?;
    result
}

fn play(config: &Config, terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<(), GameError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let renderer = TerminalRenderer::new(terminal, config.grid()?, config.cell_size);
    let clock = FixedRateClock::new(config.tick_period());

    let mut game = GameLoop::new(config, CrosstermInput, renderer, clock, rng)?;
    game.run()
}
