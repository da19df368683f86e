use std::io;

use thiserror::Error;

use crate::grid::Direction;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no free cell left on the grid to place food")]
    GridFull,

    #[error("a {width}x{height} grid has no room for both snake and food")]
    GridTooSmall { width: u16, height: u16 },

    #[error("cannot turn from {from:?} straight into {to:?}")]
    InvalidDirectionRequest { from: Direction, to: Direction },

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
