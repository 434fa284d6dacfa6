// Board, border and effect rendering
// Everything here writes through the shared Screen; timing comes from Pace

use crate::xtm_board::{Board, Cell, Content};
use crate::xtm_color::*;
use crate::xtm_explode::{Frame, Spark, explosion_frames};
use crate::xtm_term::{Out, Screen, clear_line_in};
use crate::xtm_text::*;
use crossterm::cursor::{MoveRight, MoveTo};
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute};
use rand::Rng;
use std::io;
use std::thread;
use std::time::Duration;

/// Terminal columns per board cell
pub const CELL_W: usize = 3;

// Screen rows (1-based)
pub const TITLE_ROW: u16 = 1;
pub const LOADING_ROW: u16 = TITLE_ROW + 6;
pub const LEVEL_ROW: u16 = TITLE_ROW + 6;
pub const TIME_ROW: u16 = LEVEL_ROW + 1;
pub const MINES_ROW: u16 = TIME_ROW + 1;
pub const PROMPT_ROW: u16 = MINES_ROW + 2;
pub const ERROR_ROW: u16 = PROMPT_ROW + 2;
pub const STATUS_ROW: u16 = ERROR_ROW + 1;
pub const COLNUM_ROW: u16 = STATUS_ROW + 1;
pub const BORDER_TOP_ROW: u16 = COLNUM_ROW + 1;
pub const TOP_CELL_ROW: u16 = BORDER_TOP_ROW + 1;
/// Terminals clamp this to their last line
pub const BOTTOM_ROW: u16 = 9999;

// Screen columns (1-based)
pub const ROWNUM_COL: u16 = 1;
pub const BOX_LEFT_COL: u16 = ROWNUM_COL + 3;
pub const TOP_CELL_COL: u16 = BOX_LEFT_COL + 1;
pub const LOADING_WIDTH: u16 = 40;

/// Column of the status icon: centred over a board `width` cells wide
pub fn status_col(width: usize) -> u16 {
    (BOX_LEFT_COL + (width * CELL_W / 2) as u16).saturating_sub(2).max(1)
}

/// 1-based MoveTo
fn at(row: u16, col: u16) -> MoveTo {
    MoveTo(col.saturating_sub(1), row.saturating_sub(1))
}

/// Animation pacing; with animations off every sleep is skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pace {
    animate: bool,
}

impl Pace {
    pub fn new(animate: bool) -> Self {
        Pace { animate }
    }

    pub fn animates(&self) -> bool {
        self.animate
    }

    pub fn sleep(&self, ms: u64) {
        if self.animate && ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

/// Checkerboard shade of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light, // (odd, odd)
    Dark,  // (even, even)
    Mid,   // mixed parity
}

impl Shade {
    pub fn of(row: usize, col: usize) -> Shade {
        match (row % 2, col % 2) {
            (1, 1) => Shade::Light,
            (0, 0) => Shade::Dark,
            _ => Shade::Mid,
        }
    }

    fn covered(self) -> Rgb {
        match self {
            Shade::Light => COVERED_LIGHT,
            Shade::Dark => COVERED_DARK,
            Shade::Mid => COVERED_MID,
        }
    }

    fn revealed(self) -> Rgb {
        match self {
            Shade::Light => REVEALED_LIGHT,
            Shade::Dark => REVEALED_DARK,
            Shade::Mid => REVEALED_MID,
        }
    }
}

/// What one board cell looks like on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Covered(Shade),
    Flag,
    Open(Shade, u8), // 0 draws blank
    CorrectFlag,     // flag on a mine, final board only
    WrongFlag,       // flag on a safe cell, final board only
    Exploded,
    HiddenMine,
}

impl Face {
    /// Face during play
    pub fn of(cell: Cell, row: usize, col: usize) -> Face {
        if cell.revealed {
            match cell.content {
                Content::Mine => Face::Exploded,
                Content::Empty => Face::Open(Shade::of(row, col), 0),
                Content::Near(n) => Face::Open(Shade::of(row, col), n),
            }
        } else if cell.flagged {
            Face::Flag
        } else {
            Face::Covered(Shade::of(row, col))
        }
    }

    /// Face once the game is over: every mine and misplaced flag is shown
    pub fn final_of(cell: Cell, row: usize, col: usize) -> Face {
        match (cell.content == Content::Mine, cell.flagged, cell.revealed) {
            (true, true, _) => Face::CorrectFlag,
            (true, false, true) => Face::Exploded,
            (true, false, false) => Face::HiddenMine,
            (false, true, _) => Face::WrongFlag,
            _ => Face::of(cell, row, col),
        }
    }

    /// Mines and flags get a pause in the final sweep; plain cells do not
    fn lingers(self) -> bool {
        !matches!(self, Face::Covered(_) | Face::Open(..))
    }

    fn paint(self, out: &mut Out) -> io::Result<()> {
        match self {
            Face::Covered(s) => queue!(out, bg(s.covered()), Print(" - "))?,
            Face::Flag => queue!(out, fg(RED), bg(ORANGE), Print(" F "))?,
            Face::Open(s, 0) => queue!(out, bg(s.revealed()), Print("   "))?,
            Face::Open(s, n) => {
                let digit = DIGITS[(n as usize - 1).min(DIGITS.len() - 1)];
                queue!(out, bg(s.revealed()), fg(digit), Print(format!(" {} ", n)))?
            }
            Face::CorrectFlag => queue!(out, fg(BLACK), bg(GREEN), Print(" F "))?,
            Face::WrongFlag => queue!(out, fg(BLACK), bg(RED), Print(" F "))?,
            Face::Exploded => queue!(out, fg(BLACK), bg(RED), Print(" X "))?,
            Face::HiddenMine => queue!(out, fg(RED), bg(HIDDEN_MINE_BG), Print(" * "))?,
        }
        queue!(out, ResetColor)
    }
}

/// Cells grouped by row + col ascending, row ascending within a group
pub fn anti_diagonal_order(height: usize, width: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(height * width);
    if height == 0 || width == 0 {
        return order;
    }
    for sum in 0..height + width - 1 {
        let first = sum.saturating_sub(width - 1);
        let last = sum.min(height - 1);
        for row in first..=last {
            order.push((row, sum - row));
        }
    }
    order
}

/// Per-tick arm lengths of the animated border as (horizontal chars, vertical chars)
pub fn border_arm_steps(height: usize, width: usize) -> Vec<(usize, usize)> {
    let ticks = height.max(width);
    let across = (width * CELL_W) as f64;
    (1..=ticks)
        .map(|i| {
            let h = (i as f64 * across / ticks as f64).round() as usize;
            let v = (i as f64 * height as f64 / ticks as f64).round() as usize;
            (h, v)
        })
        .collect()
}

/// Border positions clockwise from the top-left corner, each with its glyph.
/// The bottom edge runs right to left and the left edge bottom to top.
pub fn border_ring(height: usize, width: usize) -> Vec<(u16, u16, char)> {
    let top = BORDER_TOP_ROW;
    let left = BOX_LEFT_COL;
    let across = (width * CELL_W) as u16;
    let (right, bottom) = (left + across + 1, top + height as u16 + 1);

    let mut ring = Vec::with_capacity(2 * across as usize + 2 * height + 4);
    ring.push((top, left, CORNER_TL));
    ring.extend((1..=across).map(|x| (top, left + x, BORDER_H)));
    ring.push((top, right, CORNER_TR));
    ring.extend((1..=height as u16).map(|y| (top + y, right, BORDER_V)));
    ring.push((bottom, right, CORNER_BR));
    ring.extend((1..=across).rev().map(|x| (bottom, left + x, BORDER_H)));
    ring.push((bottom, left, CORNER_BL));
    ring.extend((1..=height as u16).rev().map(|y| (top + y, left, BORDER_V)));
    ring
}

/// How a text run is styled when typed out
#[derive(Debug, Clone, Copy)]
pub enum Ink {
    Fg(Rgb),
    Reverse,
}

fn ink(out: &mut Out, ink: Ink) -> io::Result<()> {
    match ink {
        Ink::Fg(c) => queue!(out, fg(c)),
        Ink::Reverse => queue!(out, SetAttribute(Attribute::Reverse)),
    }
}

fn plain(out: &mut Out) -> io::Result<()> {
    queue!(out, ResetColor, SetAttribute(Attribute::Reset))
}

/// Type styled runs starting at (row, col), spreading `ms` over the characters
pub fn type_runs(screen: &Screen, pace: Pace, row: u16, col: u16, runs: &[(Ink, &str)], ms: u64) -> io::Result<()> {
    let total: usize = runs.iter().map(|(_, t)| t.chars().count()).sum();
    if !pace.animates() || total == 0 {
        return screen.draw(|out| {
            queue!(out, at(row, col))?;
            for &(style, text) in runs {
                ink(out, style)?;
                queue!(out, Print(text))?;
                plain(out)?;
            }
            Ok(())
        });
    }
    let step = ms / total as u64;
    screen.move_to(row, col)?;
    for &(style, text) in runs {
        for ch in text.chars() {
            screen.draw(|out| {
                ink(out, style)?;
                queue!(out, Print(ch))?;
                plain(out)
            })?;
            pace.sleep(step);
        }
    }
    Ok(())
}

/// Reveal a multi-line block column by column, `ms` in total
pub fn type_block(screen: &Screen, pace: Pace, text: &str, color: Rgb, row: u16, col: u16, ms: u64) -> io::Result<()> {
    let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
    let widest = lines.iter().map(Vec::len).max().unwrap_or(0);
    let step = if widest == 0 { 0 } else { ms / widest as u64 };
    if !pace.animates() || step == 0 {
        return screen.draw(|out| {
            queue!(out, fg(color))?;
            for (i, line) in lines.iter().enumerate() {
                queue!(out, at(row + i as u16, col), Print(line.iter().collect::<String>()))?;
            }
            queue!(out, ResetColor)
        });
    }
    for x in 0..widest {
        screen.draw(|out| {
            queue!(out, fg(color))?;
            for (i, line) in lines.iter().enumerate() {
                if let Some(ch) = line.get(x) {
                    queue!(out, at(row + i as u16, col + x as u16), Print(*ch))?;
                }
            }
            queue!(out, ResetColor)
        })?;
        pace.sleep(step);
    }
    Ok(())
}

/// Framed progress bar filling from 0% to 100% over `ms`
pub fn loading_bar(screen: &Screen, pace: Pace, row: u16, col: u16, width: u16, ms: u64) -> io::Result<()> {
    let rule = LOAD_H.to_string().repeat(width as usize);
    screen.draw(|out| {
        queue!(
            out,
            fg(LOADING_FRAME),
            at(row, col),
            Print(LOAD_TL),
            Print(&rule),
            Print(LOAD_TR),
            at(row + 2, col),
            Print(LOAD_BL),
            Print(&rule),
            Print(LOAD_BR),
            at(row + 1, col),
            Print(LOAD_V),
            at(row + 1, col + width + 1),
            Print(LOAD_V),
            ResetColor
        )
    })?;

    let steps: Vec<u16> = if pace.animates() { (0..=100).collect() } else { vec![100] };
    let mut filled = 0;
    for i in steps {
        let progress = i * width / 100;
        let fill = LOAD_FILL.to_string().repeat((progress - filled) as usize);
        screen.draw(|out| {
            queue!(
                out,
                at(row + 1, col + 1 + filled),
                fg(LOADING_FILL),
                Print(fill),
                at(row + 1, col + width + 3),
                fg(LOADING_PERCENT),
                Print(format!("{}%", i)),
                ResetColor
            )
        })?;
        filled = progress;
        pace.sleep(ms / 100);
    }
    Ok(())
}

/// "Press Enter" banner on the last terminal line
pub fn press_enter(screen: &Screen, pace: Pace) -> io::Result<()> {
    type_runs(screen, pace, BOTTOM_ROW, 1, &[(Ink::Reverse, PRESS_ENTER)], 500)
}

/// Draws one game's board and its surroundings
pub struct Compositor {
    screen: Screen,
    pace: Pace,
    height: usize,
    width: usize,
}

impl Compositor {
    pub fn new(screen: Screen, pace: Pace, height: usize, width: usize) -> Self {
        Compositor {
            screen,
            pace,
            height,
            width,
        }
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    fn cell_at(&self, row: usize, col: usize) -> (u16, u16) {
        (TOP_CELL_ROW + row as u16, TOP_CELL_COL + (col * CELL_W) as u16)
    }

    /// Title, level and mine counter, numbers, border and board. The clock
    /// draws its own line. A non-zero `ms`
    /// also plays the loading bar and paces the border and board sweep.
    pub fn game_layout(&self, board: &Board, level: &str, ms: u64) -> io::Result<()> {
        self.screen.clear_screen(2)?;
        type_block(&self.screen, self.pace, GAME_TITLE, TITLE, TITLE_ROW, 1, 0)?;
        if ms != 0 {
            loading_bar(&self.screen, self.pace, LOADING_ROW, 1, LOADING_WIDTH, ms / 2)?;
            self.screen.move_to(LOADING_ROW, 1)?;
            self.screen.clear_screen(0)?;
        }
        self.info_line(LEVEL_ROW, LEVEL_LABEL, level)?;
        self.mines_left(board.mines_left())?;
        self.border_numbers()?;
        self.border(BORDER_NORMAL, ms / 2)?;
        self.board_sweep(board, ms / 2)
    }

    fn info_line(&self, row: u16, label: &str, value: &str) -> io::Result<()> {
        self.screen.draw_at(row, 1, |out| {
            queue!(out, fg(INFO_LABEL), Print(label), fg(INFO_VALUE), Print(value), ResetColor)?;
            clear_line_in(out, 0)
        })
    }

    /// Update the mines-left counter
    pub fn mines_left(&self, left: isize) -> io::Result<()> {
        self.info_line(MINES_ROW, MINES_LABEL, &left.to_string())
    }

    /// Column numbers above the box, row numbers on both sides
    pub fn border_numbers(&self) -> io::Result<()> {
        let right = BOX_LEFT_COL + (self.width * CELL_W) as u16 + 2;
        self.screen.draw(|out| {
            for i in 1..=self.width {
                let col = TOP_CELL_COL + ((i - 1) * CELL_W) as u16;
                queue!(out, at(COLNUM_ROW, col), Print(format!("{:2}", i)))?;
            }
            for i in 1..=self.height {
                let row = TOP_CELL_ROW + (i - 1) as u16;
                let label = format!("{:2}", i);
                queue!(out, at(row, ROWNUM_COL), Print(&label), at(row, right), Print(&label))?;
            }
            Ok(())
        })
    }

    /// Draw the border in two passes: top and left arms grow together, then
    /// bottom and right. `ms` is spread over both passes.
    pub fn border(&self, color: Rgb, ms: u64) -> io::Result<()> {
        let top = BORDER_TOP_ROW;
        let left = BOX_LEFT_COL;
        let across = (self.width * CELL_W) as u16;
        let (right, bottom) = (left + across + 1, top + self.height as u16 + 1);
        let steps = border_arm_steps(self.height, self.width);
        let tick = ms / steps.len().max(1) as u64 / 2;
        let glyph = |out: &mut Out, row: u16, col: u16, ch: char| queue!(out, at(row, col), fg(color), Print(ch), ResetColor);

        self.screen.draw(|out| glyph(out, top, left, CORNER_TL))?;
        let (mut h, mut v) = (0u16, 0u16);
        for &(hs, vs) in &steps {
            self.screen.draw(|out| {
                while (h as usize) < hs {
                    h += 1;
                    glyph(out, top, left + h, BORDER_H)?;
                }
                while (v as usize) < vs {
                    v += 1;
                    glyph(out, top + v, left, BORDER_V)?;
                }
                Ok(())
            })?;
            self.pace.sleep(tick);
        }
        self.screen.draw(|out| {
            glyph(out, top, left + h + 1, CORNER_TR)?;
            glyph(out, top + v + 1, left, CORNER_BL)
        })?;

        let (mut h, mut v) = (0u16, 0u16);
        for &(hs, vs) in &steps {
            self.screen.draw(|out| {
                while (h as usize) < hs {
                    h += 1;
                    glyph(out, bottom, left + h, BORDER_H)?;
                }
                while (v as usize) < vs {
                    v += 1;
                    glyph(out, top + v, right, BORDER_V)?;
                }
                Ok(())
            })?;
            self.pace.sleep(tick);
        }
        self.screen.draw(|out| glyph(out, bottom, right, CORNER_BR))
    }

    /// Full board in anti-diagonal order, `ms` spread over the cells
    pub fn board_sweep(&self, board: &Board, ms: u64) -> io::Result<()> {
        let step = ms / (self.width * self.height).max(1) as u64;
        for (row, col) in anti_diagonal_order(self.height, self.width) {
            self.face(row, col, Face::of(board.cell(row, col), row, col))?;
            self.pace.sleep(step);
        }
        Ok(())
    }

    fn face(&self, row: usize, col: usize, face: Face) -> io::Result<()> {
        let (r, c) = self.cell_at(row, col);
        self.screen.draw_at(r, c, |out| face.paint(out))
    }

    /// Redraw the given cells from the current board state
    pub fn cells(&self, board: &Board, which: &[(usize, usize)]) -> io::Result<()> {
        for &(row, col) in which {
            self.face(row, col, Face::of(board.cell(row, col), row, col))?;
        }
        Ok(())
    }

    /// Reveal the whole board as it ended. Returns the blast origin in
    /// character coordinates relative to the top-left cell, if a mine went off.
    pub fn final_board(&self, board: &Board, ms: u64) -> io::Result<Option<(usize, usize)>> {
        let step = ms / (self.width * self.height).max(1) as u64;
        for (row, col) in anti_diagonal_order(self.height, self.width) {
            let face = Face::final_of(board.cell(row, col), row, col);
            self.face(row, col, face)?;
            if face.lingers() {
                self.pace.sleep(step);
            }
        }
        Ok(board.detonated().map(|(r, c)| (r, c * CELL_W + (CELL_W - 1) / 2)))
    }

    /// Green border chase around the box, then a settled green border
    pub fn win_animation(&self) -> io::Result<()> {
        self.border(BORDER_WIN, 2000)?;
        let ring = border_ring(self.height, self.width);
        for i in 0..20 {
            self.screen.draw(|out| {
                for (k, &(row, col, ch)) in ring.iter().enumerate() {
                    let color = if (i + k) % 3 == 0 { BORDER_WIN } else { BORDER_NORMAL };
                    queue!(out, at(row, col), fg(color), Print(ch))?;
                }
                queue!(out, ResetColor)
            })?;
            self.pace.sleep(300);
        }
        self.border(BORDER_WIN, 0)
    }

    /// Red border, then the explosion over the board area
    pub fn loss_animation<R: Rng>(&self, origin: (usize, usize), rng: &mut R) -> io::Result<()> {
        self.border(BORDER_LOSS, 1500)?;
        let frames = explosion_frames(self.height, self.width * CELL_W, origin.0, origin.1, rng);
        self.play(&frames)
    }

    /// Blit frames at the top-left cell. Transparent cells keep what is under them.
    pub fn play(&self, frames: &[Frame]) -> io::Result<()> {
        for (n, frame) in frames.iter().enumerate() {
            self.screen.draw(|out| {
                for row in 0..frame.rows() {
                    queue!(out, at(TOP_CELL_ROW + row as u16, TOP_CELL_COL))?;
                    for &spark in frame.row(row) {
                        match spark.glyph() {
                            None => queue!(out, MoveRight(1))?,
                            Some((ch, _)) if spark == Spark::Blank => queue!(out, ResetColor, Print(ch))?,
                            Some((ch, color)) => queue!(out, fg(color), Print(ch))?,
                        }
                    }
                    queue!(out, ResetColor)?;
                }
                Ok(())
            })?;
            self.pace.sleep(if n == 0 { 500 } else { 20 });
        }
        self.pace.sleep(500);
        Ok(())
    }

    /// Two-line move prompt; leaves the cursor where the player types
    pub fn prompt(&self) -> io::Result<()> {
        self.screen.draw(|out| {
            queue!(out, at(PROMPT_ROW, 1), fg(PROMPT), Print(PROMPT_HINT), ResetColor)?;
            clear_line_in(out, 0)?;
            queue!(out, at(PROMPT_ROW + 1, 1), fg(PROMPT), Print(PROMPT_MOVE), ResetColor)?;
            clear_line_in(out, 0)
        })
    }

    /// Erase both prompt lines
    pub fn clear_prompt(&self) -> io::Result<()> {
        self.screen.draw_at(PROMPT_ROW, 1, |out| {
            clear_line_in(out, 2)?;
            queue!(out, at(PROMPT_ROW + 1, 1))?;
            clear_line_in(out, 2)
        })
    }

    /// Replace the error line; None just clears it
    pub fn error_line(&self, msg: Option<&str>) -> io::Result<()> {
        self.screen.draw_at(ERROR_ROW, 1, |out| {
            clear_line_in(out, 2)?;
            match msg {
                Some(m) => queue!(out, fg(RED), Print(m), ResetColor),
                None => Ok(()),
            }
        })
    }

    /// Help page on a cleared screen
    pub fn help(&self) -> io::Result<()> {
        self.screen.clear_screen(2)?;
        self.screen.draw(|out| {
            for run in HELP {
                match run {
                    HelpRun::Heading(t) => queue!(out, fg(WHITE), SetAttribute(Attribute::Bold), Print(t), SetAttribute(Attribute::Reset))?,
                    HelpRun::Title(t) => queue!(out, fg(HELP_TITLE), Print(t))?,
                    HelpRun::Subtitle(t) => queue!(out, fg(HELP_SUBTITLE), Print(t))?,
                    HelpRun::Command(t) => queue!(out, bg(HELP_COMMAND), Print(t))?,
                    HelpRun::Plain(t) => queue!(out, Print(t))?,
                }
                queue!(out, ResetColor)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_groups_by_anti_diagonal() {
        let order = anti_diagonal_order(2, 3);
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (1, 2)]);
        assert_eq!(anti_diagonal_order(16, 30).len(), 480);
        assert!(anti_diagonal_order(0, 4).is_empty());
    }

    #[test]
    fn shades_follow_parity() {
        assert_eq!(Shade::of(1, 1), Shade::Light);
        assert_eq!(Shade::of(0, 2), Shade::Dark);
        assert_eq!(Shade::of(0, 1), Shade::Mid);
        assert_eq!(Shade::of(3, 0), Shade::Mid);
    }

    #[test]
    fn border_arms_reach_full_length() {
        let steps = border_arm_steps(9, 9);
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0], (3, 1));
        assert_eq!(*steps.last().unwrap(), (27, 9));

        let steps = border_arm_steps(1, 8);
        assert_eq!(steps.len(), 8);
        assert_eq!(*steps.last().unwrap(), (24, 1));
        // the short arm completes halfway through
        assert_eq!(steps[3].1, 1);
        assert_eq!(steps[2].1, 0);
    }

    #[test]
    fn ring_runs_clockwise() {
        let ring = border_ring(2, 1);
        assert_eq!(ring.len(), 2 * 3 + 2 * 2 + 4);
        assert_eq!(ring[0], (BORDER_TOP_ROW, BOX_LEFT_COL, CORNER_TL));
        assert_eq!(ring[4], (BORDER_TOP_ROW, BOX_LEFT_COL + 4, CORNER_TR));
        assert_eq!(ring[7], (BORDER_TOP_ROW + 3, BOX_LEFT_COL + 4, CORNER_BR));
        assert_eq!(ring[8], (BORDER_TOP_ROW + 3, BOX_LEFT_COL + 3, BORDER_H));
        assert_eq!(ring[11], (BORDER_TOP_ROW + 3, BOX_LEFT_COL, CORNER_BL));
        assert_eq!(*ring.last().unwrap(), (BORDER_TOP_ROW + 1, BOX_LEFT_COL, BORDER_V));
    }

    #[test]
    fn final_faces() {
        let mine = |revealed, flagged| Cell {
            revealed,
            flagged,
            content: Content::Mine,
        };
        let safe = |revealed, flagged| Cell {
            revealed,
            flagged,
            content: Content::Near(2),
        };
        assert_eq!(Face::final_of(mine(false, true), 0, 0), Face::CorrectFlag);
        assert_eq!(Face::final_of(mine(true, false), 0, 0), Face::Exploded);
        assert_eq!(Face::final_of(mine(false, false), 0, 0), Face::HiddenMine);
        assert_eq!(Face::final_of(safe(false, true), 0, 0), Face::WrongFlag);
        assert_eq!(Face::final_of(safe(true, false), 1, 1), Face::Open(Shade::Light, 2));
        assert_eq!(Face::final_of(safe(false, false), 0, 1), Face::Covered(Shade::Mid));
    }

    #[test]
    fn status_centres_over_board() {
        assert_eq!(status_col(9), 4 + 13 - 2);
        assert_eq!(status_col(1), 3);
    }
}
