// Palette and cross-terminal color fitting
// Colors are kept as RGB and degraded to what the current terminal can show

use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};
use std::sync::OnceLock;
use term_color_support::ColorSupport;

/// An RGB triple from the game palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Terminal color capability, detected once per process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    TrueColor, // 24-bit escapes
    Indexed,   // xterm 256-color cube
    Basic,     // 16 ANSI colors
}

static DEPTH: OnceLock<Depth> = OnceLock::new();

/// Detect (and cache) the color depth of stdout
pub fn depth() -> Depth {
    *DEPTH.get_or_init(|| {
        let support = ColorSupport::stdout();
        if support.has_16m {
            Depth::TrueColor
        } else if support.has_256 {
            Depth::Indexed
        } else {
            Depth::Basic
        }
    })
}

/// A trait to turn palette entries into crossterm colors that the terminal can render.
pub trait Fit {
    /// Convert to a crossterm color using the detected terminal depth
    fn fit(self) -> Color;
    /// Convert to a crossterm color for an explicit depth
    fn fit_to(self, depth: Depth) -> Color;
}

impl Fit for Rgb {
    fn fit(self) -> Color {
        self.fit_to(depth())
    }

    fn fit_to(self, depth: Depth) -> Color {
        let Rgb(r, g, b) = self;
        match depth {
            // 1. TrueColor support: emit the exact palette value
            Depth::TrueColor => Color::Rgb { r, g, b },
            // 2. 256-color support: nearest entry of the 6x6x6 cube (16..=231)
            Depth::Indexed => Color::AnsiValue(cube_index(r, g, b)),
            // 3. Basic 16-color support: threshold each channel
            Depth::Basic => basic_color(r, g, b),
        }
    }
}

/// Map an RGB value onto the xterm 6x6x6 color cube
pub fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    let level = |c: u8| -> u8 {
        // cube levels: 0, 95, 135, 175, 215, 255
        if c < 48 {
            0
        } else if c < 115 {
            1
        } else {
            (c - 35) / 40
        }
    };
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

fn basic_color(r: u8, g: u8, b: u8) -> Color {
    let bright = r.max(g).max(b) > 170;
    let on = |c: u8| c > 90;
    match (on(r), on(g), on(b), bright) {
        (false, false, false, _) => Color::Black,
        (true, false, false, false) => Color::DarkRed,
        (true, false, false, true) => Color::Red,
        (false, true, false, false) => Color::DarkGreen,
        (false, true, false, true) => Color::Green,
        (false, false, true, false) => Color::DarkBlue,
        (false, false, true, true) => Color::Blue,
        (true, true, false, false) => Color::DarkYellow,
        (true, true, false, true) => Color::Yellow,
        (true, false, true, false) => Color::DarkMagenta,
        (true, false, true, true) => Color::Magenta,
        (false, true, true, false) => Color::DarkCyan,
        (false, true, true, true) => Color::Cyan,
        (true, true, true, false) => Color::Grey,
        (true, true, true, true) => Color::White,
    }
}

/// Foreground command for a palette entry
pub fn fg(c: Rgb) -> SetForegroundColor {
    SetForegroundColor(c.fit())
}

/// Background command for a palette entry
pub fn bg(c: Rgb) -> SetBackgroundColor {
    SetBackgroundColor(c.fit())
}

// Game palette
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const ORANGE: Rgb = Rgb(252, 127, 0);

pub const TITLE: Rgb = Rgb(22, 161, 119);
pub const PROMPT: Rgb = Rgb(100, 149, 237);
pub const MENU_NUMBER: Rgb = Rgb(255, 69, 0);
pub const MENU_LABEL: Rgb = Rgb(120, 81, 169);
pub const STATS: Rgb = Rgb(255, 191, 0);
pub const INFO_LABEL: Rgb = Rgb(80, 255, 200);
pub const INFO_VALUE: Rgb = Rgb(255, 100, 100);
pub const HELP_TITLE: Rgb = Rgb(188, 44, 104);
pub const HELP_SUBTITLE: Rgb = Rgb(207, 133, 13);
pub const HELP_COMMAND: Rgb = Rgb(66, 66, 66);

pub const BORDER_NORMAL: Rgb = Rgb(24, 80, 200);
pub const BORDER_WIN: Rgb = Rgb(80, 226, 90);
pub const BORDER_LOSS: Rgb = Rgb(250, 27, 27);

pub const LOADING_FRAME: Rgb = Rgb(0, 255, 255);
pub const LOADING_FILL: Rgb = Rgb(200, 0, 200);
pub const LOADING_PERCENT: Rgb = Rgb(0, 150, 150);

// Covered cells: (odd,odd) / (even,even) / mixed parity
pub const COVERED_LIGHT: Rgb = Rgb(90, 90, 120);
pub const COVERED_DARK: Rgb = Rgb(30, 30, 50);
pub const COVERED_MID: Rgb = Rgb(60, 60, 90);

// Revealed cells: same parity split
pub const REVEALED_LIGHT: Rgb = Rgb(30, 30, 30);
pub const REVEALED_DARK: Rgb = Rgb(0, 0, 0);
pub const REVEALED_MID: Rgb = Rgb(17, 17, 17);

pub const HIDDEN_MINE_BG: Rgb = Rgb(20, 10, 10);

/// Digit colors for counts 1..=8
pub const DIGITS: [Rgb; 8] = [
    BLUE,
    Rgb(0, 123, 0),
    RED,
    Rgb(0, 0, 123),
    Rgb(123, 0, 0),
    Rgb(0, 123, 123),
    BLACK,
    Rgb(123, 123, 123),
];
