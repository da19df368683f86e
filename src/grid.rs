use rand::Rng;

use crate::error::GameError;

/// A single square of the arena, addressed by column and row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }
}

impl From<(u16, u16)> for Cell {
    fn from((x, y): (u16, u16)) -> Self {
        Cell { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delta {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Checks a turn from `self` towards `to`, refusing a straight reversal.
    pub fn turn_to(&self, to: Direction) -> Result<Direction, GameError> {
        if self.is_opposite(to) {
            Err(GameError::InvalidDirectionRequest { from: *self, to })
        } else {
            Ok(to)
        }
    }

    pub fn random(rng: &mut impl Rng) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Delta { x: 0, y: -1 },
            Direction::Down => Delta { x: 0, y: 1 },
            Direction::Left => Delta { x: -1, y: 0 },
            Direction::Right => Delta { x: 1, y: 0 },
        }
    }
}

/// Dimensions of the toroidal arena. Owns no mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// Both dimensions must be at least one cell.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Offsets `cell` by `delta`, re-entering on the far edge when it leaves the grid.
    pub fn wrap(&self, cell: Cell, delta: impl Into<Delta>) -> Cell {
        let delta = delta.into();
        let x = (cell.x as i32 + delta.x).rem_euclid(self.width as i32) as u16;
        let y = (cell.y as i32 + delta.y).rem_euclid(self.height as i32) as u16;
        Cell { x, y }
    }

    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }
}
