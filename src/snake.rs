use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::grid::{Cell, Direction, Grid};

/// Anything that takes up cells on the grid.
pub trait Occupant {
    fn occupied_cells(&self) -> HashSet<Cell>;

    fn occupies(&self, cell: Cell) -> bool {
        self.occupied_cells().contains(&cell)
    }
}

impl Occupant for HashSet<Cell> {
    fn occupied_cells(&self) -> HashSet<Cell> {
        self.clone()
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Head first.
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Size the body is growing towards.
    length: usize,
    last_vacated: Option<Cell>,
}

impl Snake {
    pub fn new(start: Cell, direction: Direction) -> Self {
        Snake {
            body: VecDeque::from([start]),
            direction,
            pending_direction: None,
            length: 1,
            last_vacated: None,
        }
    }

    /// Builds a snake from head-first cells, already at its full length.
    pub fn from_body(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake {
            length: body.len(),
            body,
            direction,
            pending_direction: None,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cell dropped off the tail by the last move, if any.
    pub fn last_vacated(&self) -> Option<Cell> {
        self.last_vacated
    }

    /// Queues a turn for the next move. Reversals are dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        match self.direction.turn_to(direction) {
            Ok(direction) => self.pending_direction = Some(direction),
            Err(err) => trace!("ignoring turn request: {}", err),
        }
    }

    pub fn advance(&mut self, grid: &Grid) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = grid.wrap(self.head(), self.direction);
        self.body.push_front(new_head);

        // While growing the tail stays put
        self.last_vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    pub fn head_collides_with_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn reset(&mut self, start: Cell, direction: Direction) {
        self.length = 1;
        self.body = VecDeque::from([start]);
        self.direction = direction;
        self.pending_direction = None;
        self.last_vacated = None;
    }
}

impl Occupant for Snake {
    fn occupied_cells(&self) -> HashSet<Cell> {
        self.body.iter().copied().collect()
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(coords: &[(u16, u16)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    fn body_of(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Cell::new(2, 3), Direction::Left);
        assert_eq!(snake.head(), Cell::new(2, 3));
        assert_eq!(snake.body().len(), 1);
        assert_eq!(snake.length(), 1);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_vacated(), None);
    }

    #[test]
    fn test_advance_moves_head_and_drops_tail() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::from_body(cells(&[(5, 5), (4, 5), (3, 5)]), Direction::Right);

        snake.advance(&grid);

        assert_eq!(body_of(&snake), cells(&[(6, 5), (5, 5), (4, 5)]));
        assert_eq!(snake.last_vacated(), Some(Cell::new(3, 5)));
    }

    #[test]
    fn test_advance_wraps_at_every_edge() {
        let grid = Grid::new(4, 3);

        let mut snake = Snake::new(Cell::new(3, 1), Direction::Right);
        snake.advance(&grid);
        assert_eq!(snake.head(), Cell::new(0, 1));

        let mut snake = Snake::new(Cell::new(0, 1), Direction::Left);
        snake.advance(&grid);
        assert_eq!(snake.head(), Cell::new(3, 1));

        let mut snake = Snake::new(Cell::new(2, 0), Direction::Up);
        snake.advance(&grid);
        assert_eq!(snake.head(), Cell::new(2, 2));

        let mut snake = Snake::new(Cell::new(2, 2), Direction::Down);
        snake.advance(&grid);
        assert_eq!(snake.head(), Cell::new(2, 0));
    }

    #[test]
    fn test_pending_direction_applied_on_advance() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.request_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));

        snake.advance(&grid);
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.head(), Cell::new(5, 4));
    }

    #[test]
    fn test_reverse_request_ignored() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::from_body(cells(&[(5, 5), (4, 5)]), Direction::Right);

        snake.request_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), None);

        snake.advance(&grid);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_reverse_request_keeps_earlier_turn() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.request_direction(Direction::Down);
        snake.request_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_later_request_overwrites_earlier() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.request_direction(Direction::Down);
        snake.request_direction(Direction::Up);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn test_growth_is_deferred_by_one_advance() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::from_body(cells(&[(5, 5), (4, 5)]), Direction::Right);

        snake.grow();
        assert_eq!(snake.length(), 3);
        assert_eq!(snake.body().len(), 2);

        snake.advance(&grid);
        assert_eq!(snake.body().len(), 3);
        assert_eq!(snake.last_vacated(), None);
        assert_eq!(body_of(&snake), cells(&[(6, 5), (5, 5), (4, 5)]));

        for _ in 0..5 {
            snake.advance(&grid);
            assert_eq!(snake.body().len(), 3);
        }
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_body(
            cells(&[(5, 5), (5, 6), (6, 6), (6, 5), (5, 5)]),
            Direction::Up,
        );
        assert!(snake.head_collides_with_body());

        let snake = Snake::from_body(cells(&[(5, 5), (5, 6), (5, 7)]), Direction::Up);
        assert!(!snake.head_collides_with_body());

        let snake = Snake::new(Cell::new(0, 0), Direction::Up);
        assert!(!snake.head_collides_with_body());
    }

    #[test]
    fn test_reset_restores_single_cell() {
        let grid = Grid::new(10, 10);
        let mut snake = Snake::from_body(cells(&[(5, 5), (4, 5), (3, 5)]), Direction::Right);
        snake.grow();
        snake.request_direction(Direction::Up);
        snake.advance(&grid);
        snake.request_direction(Direction::Left);

        snake.reset(Cell::new(1, 1), Direction::Down);

        assert_eq!(snake.length(), 1);
        assert_eq!(body_of(&snake), cells(&[(1, 1)]));
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_vacated(), None);
    }

    #[test]
    fn test_reset_body_is_independent() {
        let grid = Grid::new(10, 10);
        let start = Cell::new(5, 5);
        let mut first = Snake::new(start, Direction::Right);
        let mut second = Snake::new(start, Direction::Right);

        first.grow();
        first.advance(&grid);
        first.reset(start, Direction::Right);
        first.advance(&grid);

        assert_eq!(body_of(&second), vec![start]);
        second.reset(start, Direction::Up);
        assert_eq!(body_of(&second), vec![start]);
        assert_eq!(body_of(&first), vec![Cell::new(6, 5)]);
    }

    #[test]
    fn test_cell_set_as_occupant() {
        let set: HashSet<Cell> = cells(&[(0, 0), (3, 1)]).into_iter().collect();

        assert_eq!(set.occupied_cells(), set);
        assert!(set.occupies(Cell::new(3, 1)));
        assert!(!set.occupies(Cell::new(1, 3)));
    }

    #[test]
    fn test_occupied_cells() {
        let snake = Snake::from_body(cells(&[(1, 1), (1, 2), (2, 2)]), Direction::Up);
        let occupied = snake.occupied_cells();

        assert_eq!(occupied.len(), 3);
        assert!(snake.occupies(Cell::new(1, 2)));
        assert!(!snake.occupies(Cell::new(0, 0)));
    }
}
