// Entry point for the terminal Minesweeper
// Loads the configuration, starts the file logger and runs the launcher on the alternate screen

use simplelog::{ConfigBuilder, WriteLogger};
use std::error::Error;
use std::fs::{self, File};
use std::io;

use xtmines::xtm_config::{load_or_create_config, log_path};
use xtmines::xtm_menu::run;
use xtmines::xtm_term::Screen;

fn main() -> Result<(), Box<dyn Error>> {
    // Load or create user configuration (difficulty, animations, log level)
    let mut cfg = load_or_create_config();

    // Log to a file: stdout is the game screen
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Some(path) = log_path() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(log_file) = File::create(&path) {
            let _ = WriteLogger::init(cfg.level_filter(), log_config, log_file);
        }
    }
    log::info!("xtmines {} starting", env!("CARGO_PKG_VERSION"));

    let screen = Screen::stdout();
    screen.open_alternate()?;
    screen.hide_cursor()?;

    let stdin = io::stdin();
    let outcome = run(&mut cfg, &screen, &mut stdin.lock());

    // Restore the terminal whatever happened in the launcher
    let restored = screen
        .reset_cursor_color()
        .and_then(|_| screen.cursor_shape(0))
        .and_then(|_| screen.show_cursor())
        .and_then(|_| screen.close_alternate());

    let stats = outcome?;
    restored?;
    log::info!("session over: {} games, {} won", stats.played, stats.won);
    Ok(())
}
