use std::collections::HashSet;

use rand::Rng;

use crate::error::GameError;
use crate::grid::{Cell, Grid};
use crate::snake::Occupant;

/// Random draws allowed per grid cell before giving up on placement.
const DRAWS_PER_CELL: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn spawn(
        occupied: &impl Occupant,
        grid: &Grid,
        rng: &mut impl Rng,
    ) -> Result<Self, GameError> {
        let mut food = Food::at(grid.center());
        food.place(occupied, grid, rng)?;
        Ok(food)
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a random cell `occupied` does not cover.
    pub fn place(
        &mut self,
        occupied: &impl Occupant,
        grid: &Grid,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        if grid.cells().all(|cell| occupied.occupies(cell)) {
            return Err(GameError::GridFull);
        }

        for _ in 0..grid.cell_count() * DRAWS_PER_CELL {
            let cell = grid.random_cell(rng);
            if !occupied.occupies(cell) {
                self.position = cell;
                return Ok(());
            }
        }

        Err(GameError::GridFull)
    }
}

impl Occupant for Food {
    fn occupied_cells(&self) -> HashSet<Cell> {
        HashSet::from([self.position])
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.position == cell
    }
}
