// Status icon above the board
// One worker thread holds at most one delayed icon; a newer request replaces it

use crate::xtm_color::{YELLOW, fg};
use crate::xtm_term::Screen;
use crate::xtm_text::{ICON_LOST, ICON_NORMAL, ICON_PROCESSING, ICON_WON};
use crossterm::queue;
use crossterm::style::{Print, ResetColor};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Face shown in the status slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Normal,
    Processing,
    Won,
    Lost,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Normal, Mood::Processing, Mood::Won, Mood::Lost];

    pub fn icon(self) -> &'static str {
        match self {
            Mood::Normal => ICON_NORMAL,
            Mood::Processing => ICON_PROCESSING,
            Mood::Won => ICON_WON,
            Mood::Lost => ICON_LOST,
        }
    }

    /// Icon right-padded to the widest icon so a shorter one erases a longer one
    pub fn padded(self) -> String {
        let widest = Mood::ALL.iter().map(|m| m.icon().width()).max().unwrap_or(0);
        let icon = self.icon();
        format!("{}{}", icon, " ".repeat(widest - icon.width()))
    }
}

enum Msg {
    Schedule(Mood, Duration),
    Cancel,
    Shutdown,
}

#[derive(Clone)]
struct Slot {
    screen: Screen,
    row: u16,
    col: u16,
}

impl Slot {
    fn write(&self, mood: Mood) {
        let drawn = self
            .screen
            .draw_at(self.row, self.col, |out| queue!(out, fg(YELLOW), Print(mood.padded()), ResetColor));
        if let Err(e) = drawn {
            debug!("status draw failed: {}", e);
        }
    }
}

pub struct StatusScheduler {
    slot: Slot,
    live: Arc<AtomicBool>, // cleared by shutdown
    tx: Sender<Msg>,
    worker: Option<JoinHandle<()>>,
}

/// Worker loop: wait for the pending icon's deadline or the next message.
/// A message that is already queued always wins over a due icon.
fn run(slot: Slot, rx: Receiver<Msg>) {
    let mut pending: Option<(Mood, Instant)> = None;
    loop {
        let msg = match pending {
            None => match rx.recv() {
                Ok(m) => m,
                Err(_) => return,
            },
            Some((mood, due)) => {
                let left = due.saturating_duration_since(Instant::now());
                let got = if left.is_zero() {
                    rx.try_recv().map_err(|e| match e {
                        TryRecvError::Empty => RecvTimeoutError::Timeout,
                        TryRecvError::Disconnected => RecvTimeoutError::Disconnected,
                    })
                } else {
                    rx.recv_timeout(left)
                };
                match got {
                    Ok(m) => m,
                    Err(RecvTimeoutError::Timeout) => {
                        if left.is_zero() {
                            slot.write(mood);
                            pending = None;
                        }
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
        };
        match msg {
            Msg::Schedule(mood, delay) => pending = Some((mood, Instant::now() + delay)),
            Msg::Cancel => pending = None,
            Msg::Shutdown => return,
        }
    }
}

impl StatusScheduler {
    /// Start the worker for an icon slot at (row, col), 1-based
    pub fn new(screen: Screen, row: u16, col: u16) -> Self {
        let slot = Slot { screen, row, col };
        let (tx, rx) = mpsc::channel();
        let worker_slot = slot.clone();
        let worker = thread::spawn(move || run(worker_slot, rx));
        StatusScheduler {
            slot,
            live: Arc::new(AtomicBool::new(true)),
            tx,
            worker: Some(worker),
        }
    }

    /// Show `mood` after `delay`, replacing any icon still waiting
    pub fn schedule_delayed(&self, mood: Mood, delay: Duration) {
        if self.live.load(Ordering::Acquire) && self.tx.send(Msg::Schedule(mood, delay)).is_err() {
            debug!("status worker is gone");
        }
    }

    /// Write `mood` right away from the calling thread
    pub fn show_now(&self, mood: Mood) {
        if self.live.load(Ordering::Acquire) {
            self.slot.write(mood);
        }
    }

    /// Drop the waiting icon, if it has not fired yet
    pub fn cancel(&self) {
        let _ = self.tx.send(Msg::Cancel);
    }

    /// Stop the worker. Nothing is written after this returns.
    pub fn shutdown(&mut self) {
        self.live.store(false, Ordering::Release);
        let _ = self.tx.send(Msg::Shutdown);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                debug!("status thread panicked");
            }
        }
    }

    pub fn is_shut_down(&self) -> bool {
        !self.live.load(Ordering::Acquire)
    }
}

impl Drop for StatusScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn padding_equalizes_widths() {
        let widths: Vec<usize> = Mood::ALL.iter().map(|m| m.padded().width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(Mood::Normal.padded().starts_with("(^w^)"));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut s = StatusScheduler::new(Screen::from_writer(io::sink()), 14, 10);
        s.shutdown();
        s.shutdown();
        assert!(s.is_shut_down());
    }
}
