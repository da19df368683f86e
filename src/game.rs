use std::io;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use crate::config::Config;
use crate::error::GameError;
use crate::food::Food;
use crate::grid::{Cell, Direction, Grid};
use crate::render::{Renderer, FOOD_COLOR, SNAKE_COLOR};
use crate::snake::{Occupant, Snake};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Quit,
    Ignored,
}

/// Non-blocking source of player input.
pub trait InputSource {
    /// Next queued event, or `None` once the queue is drained.
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}

/// Paces the loop at a fixed tick rate.
pub trait Clock {
    fn wait(&mut self);
}

pub struct FixedRateClock {
    period: Duration,
    last_tick: Instant,
}

impl FixedRateClock {
    pub fn new(period: Duration) -> Self {
        FixedRateClock {
            period,
            last_tick: Instant::now(),
        }
    }
}

impl Clock for FixedRateClock {
    fn wait(&mut self) {
        let remaining = self.period.saturating_sub(self.last_tick.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Reset,
    Quit,
}

pub struct GameLoop<I, R, C, G> {
    grid: Grid,
    snake: Snake,
    food: Food,
    /// `None` draws a random start cell on every reset.
    start: Option<Cell>,
    state: LoopState,
    input: I,
    renderer: R,
    clock: C,
    rng: G,
    ticks: u64,
    resets: u64,
    food_eaten: u64,
}

impl<I, R, C, G> GameLoop<I, R, C, G>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
    G: Rng,
{
    pub fn new(
        config: &Config,
        input: I,
        renderer: R,
        clock: C,
        mut rng: G,
    ) -> Result<Self, GameError> {
        let grid = config.grid()?;
        let start = config.start_cell(&grid);
        let head = start.unwrap_or_else(|| grid.random_cell(&mut rng));
        let snake = Snake::new(head, Direction::random(&mut rng));
        let food = Food::spawn(&snake, &grid, &mut rng)?;

        info!(
            "new game on {}x{} grid, snake at {:?} heading {:?}, food at {:?}",
            grid.width(),
            grid.height(),
            head,
            snake.direction(),
            food.position()
        );

        Ok(GameLoop {
            grid,
            snake,
            food,
            start,
            state: LoopState::Running,
            input,
            renderer,
            clock,
            rng,
            ticks: 0,
            resets: 0,
            food_eaten: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    pub fn food_eaten(&self) -> u64 {
        self.food_eaten
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs until the player quits.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.render()?;
        while self.state == LoopState::Running {
            self.clock.wait();
            self.tick()?;
        }
        info!(
            "game over after {} ticks, {} food eaten, {} resets",
            self.ticks, self.food_eaten, self.resets
        );
        Ok(())
    }

    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.state == LoopState::Terminated {
            return Ok(TickOutcome::Quit);
        }

        while let Some(event) = self.input.poll_event()? {
            match event {
                InputEvent::Turn(direction) => self.snake.request_direction(direction),
                InputEvent::Quit => {
                    info!("quit requested");
                    self.state = LoopState::Terminated;
                    return Ok(TickOutcome::Quit);
                }
                InputEvent::Ignored => {}
            }
        }

        self.snake.advance(&self.grid);
        self.ticks += 1;

        let outcome = if self.food.occupies(self.snake.head()) {
            self.snake.grow();
            self.food.place(&self.snake, &self.grid, &mut self.rng)?;
            self.food_eaten += 1;
            debug!(
                "ate food at {:?}, length now {}, new food at {:?}",
                self.snake.head(),
                self.snake.length(),
                self.food.position()
            );
            TickOutcome::Ate
        } else if self.snake.head_collides_with_body() {
            info!(
                "snake of length {} ran into itself at {:?}",
                self.snake.length(),
                self.snake.head()
            );
            let start = self.start_cell();
            let direction = Direction::random(&mut self.rng);
            self.snake.reset(start, direction);
            self.renderer.clear();
            self.resets += 1;
            TickOutcome::Reset
        } else {
            TickOutcome::Moved
        };

        self.render()?;
        Ok(outcome)
    }

    fn start_cell(&mut self) -> Cell {
        match self.start {
            Some(cell) => cell,
            None => self.grid.random_cell(&mut self.rng),
        }
    }

    fn render(&mut self) -> Result<(), GameError> {
        // Erase first: fresh food may land on the cell the tail just left
        if let Some(cell) = self.snake.last_vacated() {
            self.renderer.erase_cell(cell);
        }
        self.renderer.draw_cell(self.food.position(), FOOD_COLOR);
        for &cell in self.snake.body() {
            self.renderer.draw_cell(cell, SNAKE_COLOR);
        }
        self.renderer.present()?;
        Ok(())
    }
}
