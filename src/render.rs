use std::io;

use crate::grid::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const SNAKE_COLOR: Rgb = Rgb(0, 255, 0);
pub const FOOD_COLOR: Rgb = Rgb(255, 0, 0);
pub const BORDER_COLOR: Rgb = Rgb(93, 216, 228);

/// Retained-mode drawing surface addressed in grid cells.
///
/// Cells keep their color until erased or cleared; `present` pushes the
/// current picture to the screen.
pub trait Renderer {
    fn draw_cell(&mut self, cell: Cell, color: Rgb);

    fn erase_cell(&mut self, cell: Cell);

    fn clear(&mut self);

    fn present(&mut self) -> io::Result<()>;
}
