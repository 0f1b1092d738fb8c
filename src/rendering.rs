use std::io::{self, Write};
use log::info;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
use crate::sprites::{Rgb, Sprite};

/// Drawing primitives the simulation calls into. Coordinates are playfield
/// pixels with the origin at the bottom-left.
pub trait Renderer {
    fn clear(&mut self, color: Rgb);
    /// `(x, y)` is the sprite's bottom-left pixel; its top row lands on
    /// `y + height - 1`. Off-canvas pixels are dropped.
    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: Rgb);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb);
    fn draw_number(&mut self, value: u32, x: i32, y: i32, color: Rgb);
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }
    }
}

// --- ScreenBuffer for simulated rendering ---
pub struct ScreenBuffer {
    pub buffer: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
    pub cursor_x: u16,
    pub cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_char(&mut self, c: char) {
        if self.cursor_y < self.height && self.cursor_x < self.width {
            self.buffer[self.cursor_y as usize][self.cursor_x as usize] = c;
        }
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.write_char(c);
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer[y as usize].iter().collect()
    }

    pub fn clear(&mut self) {
        self.buffer = vec![vec![' '; self.width as usize]; self.height as usize];
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for row in &self.buffer {
            info!("{}", row.iter().collect::<String>());
        }
        info!("---------------------");
    }
}

impl Write for ScreenBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.write_str(&s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// --- OutputTarget enum to handle stdout or ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_move_to(&mut self, command: MoveTo) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(command.0, command.1);
                Ok(())
            }
        }
    }

    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // Colours and cursor state have no buffer form
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::ScreenBuffer(sb) => sb.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(sb) => sb.flush(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub column: u16,
    pub row: u16,
    pub text: String,
    pub color: Rgb,
}

// --- GameGrid: pixel canvas downsampled to terminal cells ---
pub struct GameGrid {
    pixels: Vec<Option<Rgb>>,
    labels: Vec<Label>,
    background: Rgb,
    pub width: i32,
    pub height: i32,
}

impl GameGrid {
    pub fn new(width: i32, height: i32) -> Self {
        GameGrid {
            pixels: vec![None; (width * height) as usize],
            labels: Vec::new(),
            background: Rgb::new(0, 0, 0),
            width,
            height,
        }
    }

    pub fn columns(&self) -> u16 {
        (self.width / CELL_WIDTH) as u16
    }

    pub fn rows(&self) -> u16 {
        (self.height / CELL_HEIGHT) as u16
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = Some(color);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            None
        }
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Half-block glyph for a terminal cell. Row 0 is the top of the screen.
    pub fn cell(&self, column: u16, row: u16) -> (char, Option<Rgb>) {
        let half = CELL_HEIGHT / 2;
        let mut color = None;
        let mut lit = [false; 2];
        for dy in 0..CELL_HEIGHT {
            let y = self.height - 1 - (row as i32 * CELL_HEIGHT + dy);
            for dx in 0..CELL_WIDTH {
                if let Some(pixel) = self.pixel(column as i32 * CELL_WIDTH + dx, y) {
                    lit[(dy / half) as usize] = true;
                    color.get_or_insert(pixel);
                }
            }
        }
        let glyph = match lit {
            [true, true] => '█',
            [true, false] => '▀',
            [false, true] => '▄',
            [false, false] => ' ',
        };
        (glyph, color)
    }

    pub fn render(&self, out: &mut OutputTarget) -> io::Result<()> {
        out.execute_other_command(SetBackgroundColor(self.background.into()))?;
        for row in 0..self.rows() {
            out.execute_move_to(MoveTo(0, row))?;
            let mut run = String::new();
            let mut current: Option<Rgb> = None;
            for column in 0..self.columns() {
                let (glyph, color) = self.cell(column, row);
                if let Some(color) = color.filter(|c| current != Some(*c)) {
                    write!(out, "{}", run)?;
                    run.clear();
                    out.execute_other_command(SetForegroundColor(color.into()))?;
                    current = Some(color);
                }
                run.push(glyph);
            }
            write!(out, "{}", run)?;
        }
        for label in &self.labels {
            out.execute_move_to(MoveTo(label.column, label.row))?;
            out.execute_other_command(SetForegroundColor(label.color.into()))?;
            write!(out, "{}", label.text)?;
        }
        out.execute_other_command(ResetColor)?;
        out.flush()
    }

    pub fn clear_screen_manual(&self, stdout: &mut OutputTarget, terminal_width: u16, terminal_height: u16) -> io::Result<()> {
        for y in 0..terminal_height {
            stdout.execute_move_to(MoveTo(0, y))?;
            write!(stdout, "{}", " ".repeat(terminal_width as usize))?;
        }
        stdout.execute_move_to(MoveTo(0, 0))?;
        Ok(())
    }
}

impl Renderer for GameGrid {
    fn clear(&mut self, color: Rgb) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = None);
        self.labels.clear();
        self.background = color;
    }

    fn draw_sprite(&mut self, sprite: &Sprite, x: i32, y: i32, color: Rgb) {
        for row in 0..sprite.height {
            for column in 0..sprite.width {
                if sprite.is_set(column, row) {
                    self.set_pixel(x + column, y + sprite.height - 1 - row, color);
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.labels.push(Label {
            column: (x / CELL_WIDTH) as u16,
            row: ((self.height - 1 - y) / CELL_HEIGHT) as u16,
            text: text.to_string(),
            color,
        });
    }

    /// One glyph cell per digit, most significant first.
    fn draw_number(&mut self, value: u32, x: i32, y: i32, color: Rgb) {
        self.draw_text(&value.to_string(), x, y, color);
    }
}
