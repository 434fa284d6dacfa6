// One game from first prompt to final board
// Owns the board, the clock and the status icon; reports a GameResult

use crate::xtm_board::{Board, Outcome};
use crate::xtm_config::{Config, Difficulty};
use crate::xtm_input::{Command, parse_command};
use crate::xtm_render::{Compositor, Pace, STATUS_ROW, TIME_ROW, press_enter, status_col};
use crate::xtm_status::{Mood, StatusScheduler};
use crate::xtm_term::{Screen, read_line};
use crate::xtm_text::WINDOW_TITLE_GAME;
use crate::xtm_timer::TimerService;
use chrono::{DateTime, Local};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead};
use std::time::Duration;

const LAYOUT_MS: u64 = 1500;
const FINAL_BOARD_MS: u64 = 2000;
const FINAL_BOARD_AGAIN_MS: u64 = 500;
const IDLE_FACE_DELAY: Duration = Duration::from_millis(150);

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Win,
    Loss,
    Quit,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub outcome: Ending,
    pub elapsed_ms: u64,       // wall time since the first open
    pub score: Option<u32>,    // safe cells uncovered; None when quit
    pub finished_at: DateTime<Local>,
}

impl GameResult {
    fn new(outcome: Ending, elapsed_ms: u64, score: Option<u32>) -> Self {
        GameResult {
            outcome,
            elapsed_ms,
            score,
            finished_at: Local::now(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Ending::Win
    }

    pub fn is_loss(&self) -> bool {
        self.outcome == Ending::Loss
    }

    pub fn is_quit(&self) -> bool {
        self.outcome == Ending::Quit
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Play one game of `level` reading commands from `input`.
/// End of input counts as quitting. A seed makes mines and the explosion repeatable.
pub fn play<B: BufRead>(cfg: &Config, level: Difficulty, screen: &Screen, input: &mut B, seed: Option<u64>) -> io::Result<GameResult> {
    let (width, height, mines) = level.params();
    let board = Board::configure(width, height, mines, rng_from(seed))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    play_board(cfg, level, board, screen, input, rng_from(seed.map(|s| s.wrapping_add(1))))
}

/// Play on a prepared board (fixed layouts, replays). `level` only names the game.
pub fn play_board<B: BufRead>(
    cfg: &Config,
    level: Difficulty,
    mut board: Board,
    screen: &Screen,
    input: &mut B,
    mut fx_rng: StdRng,
) -> io::Result<GameResult> {
    let (width, height) = (board.width(), board.height());
    let pace = Pace::new(cfg.animations);
    let view = Compositor::new(screen.clone(), pace, height, width);
    let mut timer = TimerService::new(screen.clone(), TIME_ROW, 1);
    let mut status = StatusScheduler::new(screen.clone(), STATUS_ROW, status_col(width));

    info!("starting {} game: {}x{} with {} mines", level.name(), width, height, board.mines());
    screen.set_title(WINDOW_TITLE_GAME)?;
    view.game_layout(&board, level.name(), LAYOUT_MS)?;
    timer.refresh();

    let ending = loop {
        if board.is_won() {
            break Ending::Win;
        }
        view.prompt()?;
        status.schedule_delayed(Mood::Normal, IDLE_FACE_DELAY);
        timer.unpause();
        let line = read_line(screen, input)?;
        timer.pause();
        status.cancel();
        status.show_now(Mood::Processing);

        let Some(line) = line else {
            debug!("input closed");
            break Ending::Quit;
        };
        let cmd = parse_command(&line, height, width);
        debug!("command {:?}", cmd);
        match cmd {
            Command::Invalid(e) if e.is_silent() => {}
            Command::Invalid(e) => view.error_line(Some(&e.to_string()))?,
            Command::Quit => break Ending::Quit,
            Command::Help => {
                view.error_line(None)?;
                view.help()?;
                press_enter(screen, pace)?;
                read_line(screen, input)?;
                view.game_layout(&board, level.name(), 0)?;
                timer.refresh();
            }
            Command::Flag(row, col) => {
                view.error_line(None)?;
                if board.flag(row, col) {
                    view.cells(&board, &[(row, col)])?;
                    view.mines_left(board.mines_left())?;
                }
            }
            Command::Open(row, col) => {
                view.error_line(None)?;
                let first = !board.is_initialized();
                let outcome = board.open(row, col);
                if first && board.is_initialized() {
                    timer.start();
                }
                let fresh = board.take_revealed();
                view.cells(&board, &fresh)?;
                if outcome == Outcome::Mine {
                    break Ending::Loss;
                }
            }
        }
    };

    let elapsed_ms = timer.stop();
    status.cancel();
    let score = board.safe_revealed() as u32;
    info!("{} game ended: {:?} after {} ms, {} safe cells", level.name(), ending, elapsed_ms, score);

    if ending == Ending::Quit {
        status.shutdown();
        screen.clear_screen(2)?;
        return Ok(GameResult::new(ending, elapsed_ms, None));
    }

    status.show_now(if ending == Ending::Win { Mood::Won } else { Mood::Lost });
    status.shutdown();
    view.clear_prompt()?;
    view.mines_left(0)?;
    let origin = view.final_board(&board, FINAL_BOARD_MS)?;
    match (ending, origin) {
        (Ending::Loss, Some(origin)) => {
            view.loss_animation(origin, &mut fx_rng)?;
            view.final_board(&board, FINAL_BOARD_AGAIN_MS)?;
        }
        (Ending::Win, _) => view.win_animation()?,
        _ => {}
    }
    press_enter(screen, pace)?;
    read_line(screen, input)?;
    screen.clear_screen(2)?;
    Ok(GameResult::new(ending, elapsed_ms, Some(score)))
}
