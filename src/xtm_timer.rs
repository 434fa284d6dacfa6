// Elapsed-time clock drawn on the game screen
// A background thread redraws "Time: H:MM:SS" once per second until stopped

use crate::xtm_color::{INFO_LABEL, INFO_VALUE, fg};
use crate::xtm_term::{Screen, clear_line_in};
use crate::xtm_text::{TIME_LABEL, format_hms};
use crossterm::queue;
use crossterm::style::{Print, ResetColor};
use log::debug;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(1000);
const PAUSED_POLL: Duration = Duration::from_millis(500);

/// Lifecycle of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Stopped,
}

pub struct TimerService {
    screen: Screen,
    row: u16,                     // 1-based screen position of the label
    col: u16,
    state: TimerState,
    started: Option<Instant>,     // set by start()
    paused: Arc<AtomicBool>,      // polled by the tick loop
    stop_tx: Option<Sender<()>>,  // wakes the tick loop on stop
    worker: Option<JoinHandle<()>>,
}

fn draw_time(screen: &Screen, row: u16, col: u16, secs: u64) -> io::Result<()> {
    screen.draw_at(row, col, |out| {
        queue!(
            out,
            fg(INFO_LABEL),
            Print(TIME_LABEL),
            fg(INFO_VALUE),
            Print(format_hms(secs)),
            ResetColor
        )?;
        clear_line_in(out, 0)
    })
}

impl TimerService {
    pub fn new(screen: Screen, row: u16, col: u16) -> Self {
        TimerService {
            screen,
            row,
            col,
            state: TimerState::Idle,
            started: None,
            paused: Arc::new(AtomicBool::new(false)),
            stop_tx: None,
            worker: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Record the start instant and launch the tick loop. Only the first call has any effect.
    pub fn start(&mut self) {
        if self.state != TimerState::Idle {
            return;
        }
        let start = Instant::now();
        let (tx, rx) = mpsc::channel::<()>();
        let screen = self.screen.clone();
        let paused = Arc::clone(&self.paused);
        let (row, col) = (self.row, self.col);

        if let Err(e) = draw_time(&screen, row, col, 0) {
            debug!("timer draw failed: {}", e);
        }
        self.worker = Some(thread::spawn(move || {
            loop {
                let wait = if paused.load(Ordering::Relaxed) { PAUSED_POLL } else { TICK };
                match rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        if paused.load(Ordering::Relaxed) {
                            continue;
                        }
                        if let Err(e) = draw_time(&screen, row, col, start.elapsed().as_secs()) {
                            debug!("timer draw failed: {}", e);
                        }
                    }
                    // stop request, or the service was dropped
                    _ => break,
                }
            }
        }));
        self.started = Some(start);
        self.stop_tx = Some(tx);
        self.state = TimerState::Running;
    }

    /// Draw the current elapsed time right away (after a full-screen redraw)
    pub fn refresh(&self) {
        let secs = match (self.state, self.started) {
            (TimerState::Running | TimerState::Paused, Some(s)) => s.elapsed().as_secs(),
            _ => 0,
        };
        if let Err(e) = draw_time(&self.screen, self.row, self.col, secs) {
            debug!("timer draw failed: {}", e);
        }
    }

    /// Stop redrawing until unpause()
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.paused.store(true, Ordering::Relaxed);
            self.state = TimerState::Paused;
        }
    }

    pub fn unpause(&mut self) {
        if self.state == TimerState::Paused {
            self.paused.store(false, Ordering::Relaxed);
            self.state = TimerState::Running;
        }
    }

    /// Freeze the clock and return the elapsed milliseconds.
    /// Returns 0 if the clock never ran or was already stopped.
    pub fn stop(&mut self) -> u64 {
        let running = matches!(self.state, TimerState::Running | TimerState::Paused);
        self.state = TimerState::Stopped;
        if !running {
            return 0;
        }
        let elapsed = self.started.map_or(0, |s| s.elapsed().as_millis() as u64);
        if let Some(tx) = self.stop_tx.take() {
            // the loop may already be gone; either way it ends
            let _ = tx.send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                debug!("timer thread panicked");
            }
        }
        elapsed
    }
}

impl Drop for TimerService {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_transitions() {
        let mut t = TimerService::new(Screen::from_writer(io::sink()), 8, 1);
        assert_eq!(t.state(), TimerState::Idle);
        t.pause();
        assert_eq!(t.state(), TimerState::Idle);
        t.start();
        assert_eq!(t.state(), TimerState::Running);
        t.pause();
        assert_eq!(t.state(), TimerState::Paused);
        t.unpause();
        assert_eq!(t.state(), TimerState::Running);
        t.stop();
        assert_eq!(t.state(), TimerState::Stopped);
        t.unpause();
        assert_eq!(t.state(), TimerState::Stopped);
    }

    #[test]
    fn stop_before_start_is_zero() {
        let mut t = TimerService::new(Screen::from_writer(io::sink()), 8, 1);
        assert_eq!(t.stop(), 0);
        t.start();
        assert_eq!(t.state(), TimerState::Stopped);
    }
}
