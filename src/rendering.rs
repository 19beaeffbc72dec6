use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Attribute, Print, SetAttribute},
};
use log::debug;

use crate::frame::Frame;

/// Text attribute of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Normal,
    Dim,
    Bold,
}

impl Style {
    fn attribute(self) -> Attribute {
        match self {
            Style::Normal => Attribute::NormalIntensity,
            Style::Dim => Attribute::Dim,
            Style::Bold => Attribute::Bold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { ch: ' ', style: Style::Normal }
    }
}

// --- GameGrid: the canvas every task draws on ---
// Nothing clears it between ticks; tasks erase what they drew.
pub struct GameGrid {
    grid: Vec<Vec<Cell>>,
    width: u16,
    height: u16,
}

impl GameGrid {
    pub fn new(width: u16, height: u16) -> Self {
        GameGrid {
            grid: vec![vec![Cell::default(); width as usize]; height as usize],
            width,
            height,
        }
    }

    /// (height, width), rows first.
    pub fn bounds(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && row < self.height as i32 && column < self.width as i32
    }

    pub fn set_char(&mut self, row: i32, column: i32, ch: char, style: Style) {
        if self.in_bounds(row, column) {
            self.grid[row as usize][column as usize] = Cell { ch, style };
        }
    }

    pub fn cell(&self, row: u16, column: u16) -> Cell {
        self.grid
            .get(row as usize)
            .and_then(|line| line.get(column as usize))
            .copied()
            .unwrap_or_default()
    }

    pub fn char_at(&self, row: u16, column: u16) -> char {
        self.cell(row, column).ch
    }

    /// Draws the frame's glyphs anchored at (row, column), or blanks them when
    /// `invert` is set. Glyphs outside the grid are clipped and the bottom-right
    /// cell is never written, since terminals scroll when it is.
    pub fn draw(&mut self, row: f64, column: f64, frame: &Frame, invert: bool) {
        let (last_row, last_column) = (self.height as i32 - 1, self.width as i32 - 1);
        for (r, c, ch) in frame.cells(row, column) {
            if r == last_row && c == last_column {
                continue;
            }
            let ch = if invert { ' ' } else { ch };
            self.set_char(r, c, ch, Style::Normal);
        }
    }

    pub fn draw_text(&mut self, row: f64, column: f64, text: &str, invert: bool) {
        self.draw(row, column, &Frame::new(text), invert);
    }

    pub fn draw_symbol(&mut self, row: f64, column: f64, symbol: char, style: Style) {
        self.set_char(row.round() as i32, column.round() as i32, symbol, style);
    }

    pub fn draw_border(&mut self) {
        let (bottom, right) = (self.height as i32 - 1, self.width as i32 - 1);
        for column in 1..right {
            self.set_char(0, column, '-', Style::Normal);
            self.set_char(bottom, column, '-', Style::Normal);
        }
        for row in 1..bottom {
            self.set_char(row, 0, '|', Style::Normal);
            self.set_char(row, right, '|', Style::Normal);
        }
        for (row, column) in [(0, 0), (0, right), (bottom, 0), (bottom, right)] {
            self.set_char(row, column, '+', Style::Normal);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|line| line.iter().map(|cell| cell.ch).collect())
            .collect()
    }

    pub fn render(&self, stdout: &mut impl Write) -> io::Result<()> {
        for (y, line) in self.grid.iter().enumerate() {
            queue!(stdout, MoveTo(0, y as u16))?;
            let mut style = Style::Normal;
            let mut run = String::new();
            queue!(stdout, SetAttribute(style.attribute()))?;
            for cell in line {
                if cell.style != style {
                    queue!(stdout, Print(&run), SetAttribute(cell.style.attribute()))?;
                    run.clear();
                    style = cell.style;
                }
                run.push(cell.ch);
            }
            queue!(stdout, Print(&run))?;
        }
        queue!(stdout, SetAttribute(Attribute::Reset))?;
        stdout.flush()
    }
}

// --- ScreenBuffer for headless rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<String>,
    pub refreshes: u64,
}

impl ScreenBuffer {
    pub fn new() -> Self {
        ScreenBuffer { buffer: Vec::new(), refreshes: 0 }
    }

    pub fn capture(&mut self, game_grid: &GameGrid) {
        self.buffer = game_grid.lines();
        self.refreshes += 1;
    }

    pub fn print_to_log(&self) {
        debug!("--- Screen Buffer #{} ---", self.refreshes);
        for row in &self.buffer {
            debug!("{}", row);
        }
    }
}

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()),
        }
    }

    /// Pushes the accumulated draws out, once per tick.
    pub fn refresh(&mut self, game_grid: &GameGrid) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => game_grid.render(s),
            OutputTarget::ScreenBuffer(sb) => {
                sb.capture(game_grid);
                sb.print_to_log();
                Ok(())
            }
        }
    }
}
