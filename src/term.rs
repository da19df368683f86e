//! Terminal front end: crossterm for input, ratatui for drawing.

use std::collections::HashMap;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};

use crate::game::{InputEvent, InputSource};
use crate::grid::{Cell, Direction, Grid};
use crate::render::{Renderer, Rgb, BORDER_COLOR};

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

pub fn map_key(key: KeyEvent) -> InputEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            InputEvent::Turn(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            InputEvent::Turn(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            InputEvent::Turn(Direction::Right)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Quit,
        _ => InputEvent::Ignored,
    }
}

#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(map_key(key))),
            _ => Ok(Some(InputEvent::Ignored)),
        }
    }
}

/// Colored cells currently on screen.
#[derive(Debug)]
pub struct Canvas {
    cells: HashMap<Cell, Rgb>,
    cell_size: u16,
}

impl Canvas {
    pub fn new(cell_size: u16) -> Self {
        Canvas {
            cells: HashMap::new(),
            cell_size: cell_size.max(1),
        }
    }
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (cell, &color) in &self.cells {
            let y = area.y.saturating_add(cell.y);
            if y >= area.bottom() {
                continue;
            }
            let left = area.x.saturating_add(cell.x.saturating_mul(self.cell_size));
            for x in left..left.saturating_add(self.cell_size).min(area.right()) {
                buf[(x, y)].set_symbol(" ").set_bg(color.into());
            }
        }
    }
}

pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
    grid: Grid,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, grid: Grid, cell_size: u16) -> Self {
        TerminalRenderer {
            terminal,
            canvas: Canvas::new(cell_size),
            grid,
        }
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw_cell(&mut self, cell: Cell, color: Rgb) {
        self.canvas.cells.insert(cell, color);
    }

    fn erase_cell(&mut self, cell: Cell) {
        self.canvas.cells.remove(&cell);
    }

    fn clear(&mut self) {
        self.canvas.cells.clear();
    }

    fn present(&mut self) -> io::Result<()> {
        let board = Rect::new(
            0,
            0,
            self.grid
                .width()
                .saturating_mul(self.canvas.cell_size)
                .saturating_add(2),
            self.grid.height().saturating_add(2),
        );
        let canvas = &self.canvas;

        self.terminal.draw(|frame| {
            let area = board.intersection(frame.area());
            let block = Block::default()
                .title(" snekgrid | q to quit ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_COLOR.into()));
            let inner = block.inner(area);

            frame.render_widget(block, area);
            frame.render_widget(canvas, inner);
        })?;
        Ok(())
    }
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
