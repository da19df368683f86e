use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use log::LevelFilter;

use crate::error::GameError;
use crate::grid::{Cell, Grid};

/// Where the snake's head is placed at the start and after every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPosition {
    #[default]
    Center,
    Random,
}

#[derive(Clone, Debug, Parser)]
#[command(name = "snekgrid")]
#[command(version, about = "Snake on a wrap-around grid, played in the terminal")]
pub struct Config {
    /// Grid width in cells
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = 24, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Terminal columns used to draw one cell
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=8))]
    pub cell_size: u16,

    /// Simulation ticks per second
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub speed: u32,

    /// Starting cell of the snake
    #[arg(long, value_enum, default_value_t = StartPosition::Center)]
    pub start: StartPosition,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// File the log is written to
    #[arg(long, default_value = "snekgrid.log")]
    pub log_file: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 32,
            height: 24,
            cell_size: 2,
            speed: 20,
            start: StartPosition::Center,
            seed: None,
            log_file: PathBuf::from("snekgrid.log"),
            verbose: 0,
        }
    }
}

impl Config {
    /// Parses arguments and rejects grids a game cannot start on.
    pub fn parse_checked_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let config = Self::try_parse_from(args)?;
        if let Err(err) = config.grid() {
            return Err(Self::command().error(ErrorKind::ValueValidation, err));
        }
        Ok(config)
    }

    /// The snake and one food need two distinct cells.
    pub fn grid(&self) -> Result<Grid, GameError> {
        if (self.width as usize) * (self.height as usize) < 2 {
            return Err(GameError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        Ok(Grid::new(self.width, self.height))
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Fixed start cell, or `None` when it is drawn at random.
    pub fn start_cell(&self, grid: &Grid) -> Option<Cell> {
        match self.start {
            StartPosition::Center => Some(grid.center()),
            StartPosition::Random => None,
        }
    }
}
