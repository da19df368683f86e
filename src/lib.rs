//! Snake on a wrap-around grid.
//!
//! The simulation (grid arithmetic, snake movement, food placement and the
//! tick loop) has no terminal dependencies; `term` holds the crossterm and
//! ratatui adapters the binary plugs into it.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod render;
pub mod snake;
pub mod term;

pub use config::{Config, StartPosition};
pub use error::GameError;
pub use food::Food;
pub use game::{Clock, FixedRateClock, GameLoop, InputEvent, InputSource, LoopState, TickOutcome};
pub use grid::{Cell, Delta, Direction, Grid};
pub use render::{Renderer, Rgb};
pub use snake::{Occupant, Snake};
