//! Terminal presentation layer.
//!
//! `TerminalSurface` rasterises the logical play area into a grid of
//! character cells; `present` flushes that grid with crossterm. The menu,
//! pause overlay and game-over notice are drawn straight onto the terminal.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use arcade_shooter::entities::Rect;
use arcade_shooter::score_store::SessionSummary;
use arcade_shooter::surface::{self as surf, Surface};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_BEST: Color = Color::Yellow;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

const FILL: char = '█';

fn terminal_color(color: surf::Color) -> Color {
    match color {
        surf::Color::White => Color::White,
        surf::Color::Red => Color::Red,
        surf::Color::Blue => Color::Blue,
        surf::Color::Green => Color::Green,
    }
}

// ── Cell-grid surface ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    color: Color,
}

const BLANK: Cell = Cell {
    ch: ' ',
    color: Color::Reset,
};

pub struct TerminalSurface {
    width: f32,
    height: f32,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalSurface {
    /// `width` × `height` logical units stretched over `cols` × `rows` cells.
    pub fn new(width: f32, height: f32, cols: u16, rows: u16) -> Self {
        Self {
            width,
            height,
            cols,
            rows,
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    fn col(&self, x: f32) -> f32 {
        x / self.width * self.cols as f32
    }

    fn row(&self, y: f32) -> f32 {
        y / self.height * self.rows as f32
    }

    // Half-open cell span covering [start, end), at least one cell wide when
    // the span starts on screen.
    fn span(start: f32, end: f32, limit: u16) -> Option<(u16, u16)> {
        let lo = start.floor().max(0.0);
        let hi = end.ceil().min(limit as f32);
        if lo >= limit as f32 || end <= 0.0 {
            return None;
        }
        let lo = lo as u16;
        let hi = (hi as u16).max(lo + 1).min(limit);
        Some((lo, hi))
    }

    fn put(&mut self, col: u16, row: u16, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row as usize * self.cols as usize + col as usize] = cell;
        }
    }

    /// Write the whole grid to the terminal.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut current = Color::Reset;
        out.queue(style::SetForegroundColor(current))?;
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let start = row as usize * self.cols as usize;
            let mut line = String::with_capacity(self.cols as usize);
            for cell in &self.cells[start..start + self.cols as usize] {
                if cell.color != current && cell.ch != ' ' {
                    out.queue(Print(std::mem::take(&mut line)))?;
                    out.queue(style::SetForegroundColor(cell.color))?;
                    current = cell.color;
                }
                line.push(cell.ch);
            }
            out.queue(Print(line))?;
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn fill_rect(&mut self, rect: Rect, color: surf::Color) {
        let Some((c0, c1)) = Self::span(self.col(rect.x), self.col(rect.x + rect.w), self.cols)
        else {
            return;
        };
        let Some((r0, r1)) = Self::span(self.row(rect.y), self.row(rect.y + rect.h), self.rows)
        else {
            return;
        };
        let cell = Cell {
            ch: FILL,
            color: terminal_color(color),
        };
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
    }

    // The font only matters to pixel surfaces; text is one cell per char here.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, _font: &str) {
        let row = self.row(y).floor();
        if row < 0.0 || row >= self.rows as f32 {
            return;
        }
        let col = self.col(x).floor().max(0.0) as u16;
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as u16, row as u16, Cell { ch, color: C_TEXT });
        }
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

fn centred<W: Write>(out: &mut W, text: &str, row: u16, color: Color) -> std::io::Result<()> {
    let (width, _) = terminal::size()?;
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

pub fn draw_menu<W: Write>(out: &mut W, best_score: u32) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (_, height) = terminal::size()?;
    let cy = height / 2;

    centred(out, "*  ARCADE  SHOOTER  *", cy.saturating_sub(4), C_TITLE)?;
    if best_score > 0 {
        centred(out, &format!("Best Score: {best_score}"), cy.saturating_sub(2), C_BEST)?;
    }
    centred(out, "ENTER / SPACE : Start   Q : Quit", cy, C_TEXT)?;
    centred(
        out,
        "<- -> / A D : Move   SPACE : Shoot   ESC / P : Pause",
        cy + 2,
        C_HINT,
    )?;
    centred(out, "Catch blue power-ups for a triple shot", cy + 3, C_HINT)?;

    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

pub fn draw_pause_overlay<W: Write>(out: &mut W) -> std::io::Result<()> {
    let (_, height) = terminal::size()?;
    let cy = height / 2;
    centred(out, "╔══════════════╗", cy.saturating_sub(1), C_TEXT)?;
    centred(out, "║    PAUSED    ║", cy, C_TEXT)?;
    centred(out, "╚══════════════╝", cy + 1, C_TEXT)?;
    centred(out, "ESC / P : Resume   Q : Quit", cy + 2, C_HINT)?;
    out.queue(style::ResetColor)?;
    out.flush()
}

// ── Game-over notice ──────────────────────────────────────────────────────────

pub fn draw_game_over<W: Write>(out: &mut W, summary: &SessionSummary) -> std::io::Result<()> {
    let (_, height) = terminal::size()?;
    let start = (height / 2).saturating_sub(3);

    centred(out, "╔════════════════════╗", start, C_GAME_OVER)?;
    centred(out, "║    GAME  OVER      ║", start + 1, C_GAME_OVER)?;
    centred(out, "╚════════════════════╝", start + 2, C_GAME_OVER)?;
    centred(
        out,
        &format!("Final Score: {:>6}", summary.final_score),
        start + 3,
        C_BEST,
    )?;
    if summary.new_best {
        centred(out, &format!("* NEW BEST: {:>6} *", summary.best_score), start + 4, C_BEST)?;
    } else {
        centred(out, &format!("Best Score:  {:>6}", summary.best_score), start + 4, C_HINT)?;
    }
    centred(out, "Press any key to return to the menu", start + 5, C_TEXT)?;

    out.queue(style::ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(surface: &TerminalSurface) -> Vec<(u16, u16)> {
        let mut cells = Vec::new();
        for row in 0..surface.rows {
            for col in 0..surface.cols {
                let cell = surface.cells[row as usize * surface.cols as usize + col as usize];
                if cell.ch == FILL {
                    cells.push((col, row));
                }
            }
        }
        cells
    }

    #[test]
    fn rect_scales_to_cells() {
        let mut s = TerminalSurface::new(800.0, 600.0, 80, 60);
        s.fill_rect(Rect::new(400.0, 540.0, 40.0, 20.0), surf::Color::Green);
        let cells = filled(&s);
        assert_eq!(cells.len(), 4 * 2);
        assert_eq!(cells[0], (40, 54));
    }

    #[test]
    fn tiny_rect_still_covers_one_cell() {
        let mut s = TerminalSurface::new(800.0, 600.0, 80, 24);
        s.fill_rect(Rect::new(100.0, 100.0, 4.0, 10.0), surf::Color::White);
        assert_eq!(filled(&s), vec![(10, 4)]);
    }

    #[test]
    fn offscreen_rect_draws_nothing() {
        let mut s = TerminalSurface::new(800.0, 600.0, 80, 24);
        s.fill_rect(Rect::new(0.0, -50.0, 40.0, 40.0), surf::Color::Red);
        s.fill_rect(Rect::new(900.0, 10.0, 40.0, 40.0), surf::Color::Red);
        assert!(filled(&s).is_empty());
    }

    #[test]
    fn partially_visible_rect_is_clipped() {
        let mut s = TerminalSurface::new(800.0, 600.0, 80, 24);
        s.fill_rect(Rect::new(0.0, -20.0, 30.0, 30.0), surf::Color::Red);
        assert_eq!(filled(&s), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn text_is_truncated_at_right_edge() {
        let mut s = TerminalSurface::new(800.0, 600.0, 10, 5);
        s.draw_text("Level: 12", 700.0, 20.0, "18px Arial");
        let row: String = s.cells[..10].iter().map(|c| c.ch).collect();
        assert_eq!(row, "        Le");
    }

    #[test]
    fn clear_blanks_everything() {
        let mut s = TerminalSurface::new(800.0, 600.0, 10, 5);
        s.fill_rect(Rect::new(0.0, 0.0, 800.0, 600.0), surf::Color::Blue);
        s.clear();
        assert!(filled(&s).is_empty());
    }
}
