// Terminal Minesweeper played with typed commands
// Library root: the binary only wires the terminal, config and logger together

pub mod xtm_board;   // Board state, mine placement, reveal and flag rules
pub mod xtm_color;   // Palette and terminal color fitting
pub mod xtm_config;  // Difficulty presets and persisted preferences
pub mod xtm_explode; // Explosion frame generator
pub mod xtm_input;   // Command grammar and numeric prompt parsing
pub mod xtm_menu;    // Launcher, statistics and difficulty menu
pub mod xtm_render;  // Board, border and animation drawing
pub mod xtm_session; // One game's main loop
pub mod xtm_status;  // Delayed status icon
pub mod xtm_term;    // Shared terminal writer
pub mod xtm_text;    // UI strings
pub mod xtm_timer;   // Elapsed-time clock
