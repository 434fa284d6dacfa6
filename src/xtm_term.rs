// Shared terminal-control surface
// Every write from the main loop, the timer and the status scheduler goes through one mutex

use crossterm::cursor::{self, RestorePosition, SavePosition, SetCursorStyle};
use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::queue;
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Boxed output sink shared by all writers
pub type Out = Box<dyn Write + Send>;

/// Cloneable handle to the terminal output.
///
/// Cursor save/restore has no nesting semantics, so a save/move/write/restore
/// sequence must never interleave with another thread's. `draw_at` performs the
/// whole sequence while holding the lock.
#[derive(Clone)]
pub struct Screen {
    out: Arc<Mutex<Out>>,
}

impl Screen {
    /// Screen writing to the process stdout
    pub fn stdout() -> Self {
        Screen::from_writer(io::stdout())
    }

    /// Screen writing to an arbitrary sink (tests use an in-memory buffer)
    pub fn from_writer<W: Write + Send + 'static>(w: W) -> Self {
        Screen {
            out: Arc::new(Mutex::new(Box::new(w))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Out> {
        // a writer that panicked mid-sequence leaves the terminal usable
        self.out.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Run a batch of writes atomically, then flush
    pub fn draw<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Out) -> io::Result<()>,
    {
        let mut out = self.lock();
        f(&mut out)?;
        out.flush()
    }

    /// Save the cursor, move to (row, col), run the writes, restore the cursor.
    /// Coordinates are 1-based.
    pub fn draw_at<F>(&self, row: u16, col: u16, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut Out) -> io::Result<()>,
    {
        let mut out = self.lock();
        queue!(out, SavePosition, cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1)))?;
        let drawn = f(&mut out);
        // restore even if the body failed so the caller's cursor stays put
        queue!(out, RestorePosition)?;
        out.flush()?;
        drawn
    }

    /// Move the cursor to a 1-based position
    pub fn move_to(&self, row: u16, col: u16) -> io::Result<()> {
        self.draw(|out| queue!(out, cursor::MoveTo(col.saturating_sub(1), row.saturating_sub(1))))
    }

    /// Erase part of the current line.
    /// 0 = cursor to end, 1 = start to cursor, 2 = whole line.
    pub fn clear_line(&self, mode: u8) -> io::Result<()> {
        self.draw(|out| clear_line_in(out, mode))
    }

    /// Erase part of the screen.
    /// 0 = cursor to end, 1 = start to cursor, 2 = everything (cursor homed), 3 = everything plus scrollback.
    pub fn clear_screen(&self, mode: u8) -> io::Result<()> {
        self.draw(|out| match mode {
            0 => queue!(out, terminal::Clear(ClearType::FromCursorDown)),
            1 => queue!(out, terminal::Clear(ClearType::FromCursorUp)),
            2 => queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All)),
            _ => queue!(out, cursor::MoveTo(0, 0), terminal::Clear(ClearType::Purge)),
        })
    }

    pub fn hide_cursor(&self) -> io::Result<()> {
        self.draw(|out| queue!(out, cursor::Hide))
    }

    pub fn show_cursor(&self) -> io::Result<()> {
        self.draw(|out| queue!(out, cursor::Show))
    }

    pub fn set_title(&self, title: &str) -> io::Result<()> {
        self.draw(|out| queue!(out, SetTitle(title)))
    }

    /// Change the cursor shape (DECSCUSR codes 0..=6)
    pub fn cursor_shape(&self, code: u8) -> io::Result<()> {
        let style = match code {
            1 => SetCursorStyle::BlinkingBlock,
            2 => SetCursorStyle::SteadyBlock,
            3 => SetCursorStyle::BlinkingUnderScore,
            4 => SetCursorStyle::SteadyUnderScore,
            5 => SetCursorStyle::BlinkingBar,
            6 => SetCursorStyle::SteadyBar,
            _ => SetCursorStyle::DefaultUserShape,
        };
        self.draw(|out| queue!(out, style))
    }

    /// Set the cursor color (OSC 12), e.g. "#00FF00"
    pub fn set_cursor_color(&self, hex: &str) -> io::Result<()> {
        self.draw(|out| queue!(out, Print(format!("\x1b]12;{}\x07", hex))))
    }

    /// Reset the cursor color to the terminal default (OSC 112)
    pub fn reset_cursor_color(&self) -> io::Result<()> {
        self.draw(|out| queue!(out, Print("\x1b]112\x07")))
    }

    /// Switch to the alternate screen buffer and home the cursor
    pub fn open_alternate(&self) -> io::Result<()> {
        self.draw(|out| queue!(out, EnterAlternateScreen, cursor::MoveTo(0, 0)))
    }

    /// Return to the main screen buffer
    pub fn close_alternate(&self) -> io::Result<()> {
        self.draw(|out| queue!(out, LeaveAlternateScreen))
    }
}

/// Read one line with a visible green block cursor, hiding it again afterwards.
/// Returns None at end of input.
pub fn read_line<B: BufRead>(screen: &Screen, input: &mut B) -> io::Result<Option<String>> {
    screen.set_cursor_color("#00FF00")?;
    screen.cursor_shape(2)?;
    screen.show_cursor()?;
    let mut line = String::new();
    let read = input.read_line(&mut line);
    screen.hide_cursor()?;
    screen.reset_cursor_color()?;
    screen.cursor_shape(0)?;
    Ok(if read? == 0 { None } else { Some(line) })
}

/// Line erase usable inside an existing `draw` batch
pub fn clear_line_in(out: &mut Out, mode: u8) -> io::Result<()> {
    match mode {
        0 => queue!(out, terminal::Clear(ClearType::UntilNewLine)),
        // crossterm has no "start of line to cursor" variant
        1 => queue!(out, Print("\x1b[1K")),
        _ => queue!(out, terminal::Clear(ClearType::CurrentLine)),
    }
}
