// Launcher: title, player statistics and difficulty menu
// Statistics live only for the lifetime of the process

use crate::xtm_color::{MENU_LABEL, MENU_NUMBER, PROMPT, RED, STATS, TITLE, fg};
use crate::xtm_config::{Config, Difficulty, save_config};
use crate::xtm_input::{clamp_numeric, is_quit};
use crate::xtm_render::{Ink, Pace, type_block, type_runs};
use crate::xtm_session::{Ending, GameResult, play};
use crate::xtm_term::{Screen, clear_line_in, read_line};
use crate::xtm_text::*;
use chrono::{DateTime, Local};
use crossterm::queue;
use crossterm::style::{Print, ResetColor};
use log::{info, warn};
use std::io::{self, BufRead};

const TITLE_ROW: u16 = 1;
const WELCOME_ROW: u16 = TITLE_ROW + 6;
const STATS_ROW: u16 = WELCOME_ROW + 1;

// custom-size screen
const CUSTOM_ERROR_ROW: u16 = TITLE_ROW + 6;
const CUSTOM_ROWS_ROW: u16 = CUSTOM_ERROR_ROW + 2;
const CUSTOM_COLS_ROW: u16 = CUSTOM_ROWS_ROW + 2;
const CUSTOM_MINES_ROW: u16 = CUSTOM_COLS_ROW + 2;

pub const MIN_ROWS: usize = 1;
pub const MAX_ROWS: usize = 20;
pub const MIN_COLS: usize = 8;
pub const MAX_COLS: usize = 35;
pub const MIN_MINES: usize = 0;

/// Largest mine count for a custom board
pub fn max_mines(rows: usize, cols: usize) -> usize {
    (rows * cols).saturating_sub(1)
}

/// Pull custom sizes (possibly hand-edited in the config file) into the menu's bounds
pub fn clamp_custom(level: Difficulty) -> Difficulty {
    match level {
        Difficulty::Custom(w, h, n) => {
            let cols = w.clamp(MIN_COLS, MAX_COLS);
            let rows = h.clamp(MIN_ROWS, MAX_ROWS);
            Difficulty::Custom(cols, rows, n.clamp(MIN_MINES, max_mines(rows, cols)))
        }
        preset => preset,
    }
}

/// What the player picked in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Entry(usize), // 1-based menu entry
    Again,         // empty answer: last difficulty
}

/// Results of the games played this run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub quit: u32,
    pub total_ms: u64,
    pub last: Option<DateTime<Local>>, // when the latest game ended
}

impl Stats {
    pub fn record(&mut self, result: &GameResult) {
        self.played += 1;
        self.total_ms += result.elapsed_ms;
        match result.outcome {
            Ending::Win => self.won += 1,
            Ending::Loss => self.lost += 1,
            Ending::Quit => self.quit += 1,
        }
        self.last = Some(result.finished_at);
    }

    /// Framed statistics block
    pub fn render(&self) -> String {
        let last = self.last.map(|t| t.format("%Y-%m-%d %H:%M").to_string());
        stats_box(self.played, self.won, self.lost, self.quit, self.total_ms / 1000, last.as_deref())
    }
}

/// Run the launcher against the real config file
pub fn run<B: BufRead>(cfg: &mut Config, screen: &Screen, input: &mut B) -> io::Result<Stats> {
    run_with(cfg, screen, input, None, true)
}

/// Run the launcher until the player quits or input ends.
/// `seed` fixes every game's layout; `persist` controls saving the chosen difficulty.
pub fn run_with<B: BufRead>(cfg: &mut Config, screen: &Screen, input: &mut B, seed: Option<u64>, persist: bool) -> io::Result<Stats> {
    let pace = Pace::new(cfg.animations);
    let mut stats = Stats::default();

    loop {
        let Some(pick) = main_menu(cfg, screen, input, pace, &stats)? else {
            return Ok(stats);
        };
        let level = match pick {
            Pick::Again => clamp_custom(cfg.difficulty),
            Pick::Entry(4) => match custom_menu(screen, input, pace)? {
                Some(level) => level,
                None => continue,
            },
            Pick::Entry(n) => Difficulty::from_option(n, cfg.custom_w, cfg.custom_h, cfg.custom_n),
        };

        if level != cfg.difficulty {
            cfg.set_difficulty(level);
            if persist {
                if let Err(e) = save_config(cfg) {
                    warn!("could not save settings: {}", e);
                }
            }
        }
        let result = play(cfg, level, screen, input, seed)?;
        stats.record(&result);
        info!("stats: {} played, {} won, {} lost, {} quit", stats.played, stats.won, stats.lost, stats.quit);
    }
}

/// Draw the menu and read a valid option. None means quit.
/// An empty answer picks the difficulty used last time.
fn main_menu<B: BufRead>(cfg: &Config, screen: &Screen, input: &mut B, pace: Pace, stats: &Stats) -> io::Result<Option<Pick>> {
    screen.set_title(WINDOW_TITLE_MENU)?;
    screen.clear_screen(2)?;
    type_block(screen, pace, GAME_TITLE, TITLE, TITLE_ROW, 1, 1000)?;
    type_runs(screen, pace, WELCOME_ROW, 1, &[(Ink::Fg(RED), WELCOME)], 1000)?;
    let board = stats.render();
    type_block(screen, pace, &board, STATS, STATS_ROW, 1, 700)?;

    let select_row = STATS_ROW + line_count(&board) + 1;
    let error_row = select_row + 1;
    let options_row = error_row + 1;
    type_runs(screen, pace, select_row, 1, &[(Ink::Fg(PROMPT), MENU_SELECT)], 300)?;
    let current = cfg.difficulty.to_option();
    for (i, name) in MENU_OPTIONS.iter().enumerate() {
        let number = format!("{}. ", i + 1);
        let marker = if i + 1 == current { "  <" } else { "" };
        let runs = [(Ink::Fg(MENU_NUMBER), number.as_str()), (Ink::Fg(MENU_LABEL), *name), (Ink::Fg(MENU_NUMBER), marker)];
        type_runs(screen, pace, options_row + i as u16, 1, &runs, 200)?;
        pace.sleep(100);
    }

    let answer_col = MENU_SELECT.chars().count() as u16 + 1;
    screen.move_to(select_row, answer_col)?;
    loop {
        let Some(line) = read_line(screen, input)? else {
            return Ok(None);
        };
        let answer = line.trim();
        if is_quit(answer) {
            return Ok(None);
        }
        let pick = if answer.is_empty() {
            Some(Pick::Again)
        } else {
            answer.parse::<usize>().ok().filter(|n| (1..=MENU_OPTIONS.len()).contains(n)).map(Pick::Entry)
        };
        if let Some(pick) = pick {
            screen.draw_at(error_row, 1, |out| clear_line_in(out, 2))?;
            return Ok(Some(pick));
        }
        show_error(screen, error_row, WRONG_OPTION)?;
        screen.move_to(select_row, answer_col)?;
        screen.clear_line(0)?;
    }
}

fn show_error(screen: &Screen, row: u16, msg: &str) -> io::Result<()> {
    screen.draw_at(row, 1, |out| {
        clear_line_in(out, 2)?;
        queue!(out, fg(RED), Print(msg), ResetColor)
    })
}

/// Ask for rows, columns and mines. None means the player quit.
fn custom_menu<B: BufRead>(screen: &Screen, input: &mut B, pace: Pace) -> io::Result<Option<Difficulty>> {
    screen.clear_screen(2)?;
    type_block(screen, pace, GAME_TITLE, TITLE, TITLE_ROW, 1, 0)?;

    let Some(rows) = ask_number(screen, input, pace, CUSTOM_ROWS_ROW, ENTER_ROWS, MIN_ROWS, MAX_ROWS)? else {
        return Ok(None);
    };
    let Some(cols) = ask_number(screen, input, pace, CUSTOM_COLS_ROW, ENTER_COLS, MIN_COLS, MAX_COLS)? else {
        return Ok(None);
    };
    let most = max_mines(rows, cols);
    let Some(mines) = ask_number(screen, input, pace, CUSTOM_MINES_ROW, ENTER_MINES, MIN_MINES, most)? else {
        return Ok(None);
    };
    Ok(Some(Difficulty::Custom(cols, rows, mines)))
}

/// One numeric prompt; out-of-range answers are clamped, non-numbers re-asked
fn ask_number<B: BufRead>(
    screen: &Screen,
    input: &mut B,
    pace: Pace,
    row: u16,
    label: &str,
    min: usize,
    max: usize,
) -> io::Result<Option<usize>> {
    let question = format!("{} (Minimum {}, Maximum {}) or 'q' to quit: ", label, min, max);
    type_runs(screen, pace, row, 1, &[(Ink::Fg(PROMPT), question.as_str())], 0)?;
    let answer_col = question.chars().count() as u16 + 1;
    loop {
        let Some(line) = read_line(screen, input)? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        if let Some(value) = clamp_numeric(&line, min, max) {
            screen.draw_at(CUSTOM_ERROR_ROW, 1, |out| clear_line_in(out, 2))?;
            return Ok(Some(value));
        }
        show_error(screen, CUSTOM_ERROR_ROW, WRONG_NUMBER)?;
        screen.move_to(row, answer_col)?;
        screen.clear_line(0)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(outcome: Ending, ms: u64) -> GameResult {
        GameResult {
            outcome,
            elapsed_ms: ms,
            score: None,
            finished_at: Local::now(),
        }
    }

    #[test]
    fn stats_count_each_ending() {
        let mut s = Stats::default();
        s.record(&result(Ending::Win, 61_500));
        s.record(&result(Ending::Loss, 2_000));
        s.record(&result(Ending::Quit, 999));
        assert_eq!((s.played, s.won, s.lost, s.quit), (3, 1, 1, 1));
        // fractions add up before rounding down
        assert_eq!(s.total_ms, 64_499);
        assert!(s.render().contains("Total Time Played:   1m  4s"));
        assert!(s.last.is_some());
        assert!(s.render().contains("Games Played   :      3"));
    }

    #[test]
    fn mine_limit_leaves_one_safe_cell() {
        assert_eq!(max_mines(1, 8), 7);
        assert_eq!(max_mines(20, 35), 699);
    }

    #[test]
    fn saved_custom_sizes_are_clamped() {
        assert_eq!(clamp_custom(Difficulty::Custom(0, 0, 50)), Difficulty::Custom(8, 1, 7));
        assert_eq!(clamp_custom(Difficulty::Custom(99, 40, 5)), Difficulty::Custom(35, 20, 5));
        assert_eq!(clamp_custom(Difficulty::Expert), Difficulty::Expert);
    }

    #[test]
    fn quitting_at_the_menu_plays_nothing() {
        let screen = Screen::from_writer(io::sink());
        let mut cfg = Config {
            animations: false,
            ..Config::default()
        };
        let mut input = io::Cursor::new("7\nq\n");
        let start = std::time::Instant::now();
        let stats = run_with(&mut cfg, &screen, &mut input, Some(1), false).unwrap();
        assert_eq!(stats.played, 0);
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
