use crate::canvas::{Canvas, Color};
use crate::Coords;

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

/// One game cell spans two terminal columns and one row, since terminal
/// characters are roughly twice as tall as they are wide.
const COLS_PER_CELL: i32 = 2;

/// Renders the pixel-addressed game board onto the terminal, one game cell
/// per character pair, and drains keyboard input for the host loop.
pub struct TermCanvas {
    cell_size: i32,
    stdout: Stdout,
}

impl TermCanvas {
    pub fn new(cell_size: i32) -> Self {
        TermCanvas { cell_size, stdout: stdout() }
    }

    /// True if the terminal is large enough to show a full board.
    pub fn fits_board(&self, board_width: i32, board_height: i32) -> crossterm::Result<bool> {
        let (cols, rows) = terminal::size()?;
        let needed_cols = (board_width / self.cell_size * COLS_PER_CELL) as u16;
        let needed_rows = (board_height / self.cell_size) as u16;

        Ok(cols >= needed_cols && rows >= needed_rows)
    }

    /// Switches to the alternate screen in raw mode with the cursor hidden.
    /// `restore` undoes all of it.
    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Drains every key event queued since the last call, without blocking.
    pub fn poll_keys(&mut self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Pushes the queued frame out to the terminal.
    pub fn present(&mut self) -> crossterm::Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn to_term(&self, (x, y): Coords) -> (u16, u16) {
        ((x / self.cell_size * COLS_PER_CELL) as u16, (y / self.cell_size) as u16)
    }
}

impl Canvas for TermCanvas {
    fn clear(&mut self) -> crossterm::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, pos: Coords, width: i32, height: i32, color: Color) -> crossterm::Result<()> {
        let (col, row) = self.to_term(pos);
        let cols = (width / self.cell_size * COLS_PER_CELL) as usize;
        let rows = height / self.cell_size;
        let band = " ".repeat(cols);

        queue!(self.stdout, style::SetBackgroundColor(term_color(color)))?;
        for dy in 0..rows {
            queue!(self.stdout, cursor::MoveTo(col, row + dy as u16), style::Print(&band))?;
        }
        queue!(self.stdout, style::ResetColor)?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, pos: Coords, color: Color) -> crossterm::Result<()> {
        let (col, row) = self.to_term(pos);

        queue!(
            self.stdout,
            style::SetForegroundColor(term_color(color)),
            cursor::MoveTo(col, row),
            style::Print(text),
            style::ResetColor
        )?;
        Ok(())
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb { r: color.r, g: color.g, b: color.b }
}
