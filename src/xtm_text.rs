// UI strings
// Plain text only; colors are applied by the renderer

pub const WINDOW_TITLE_MENU: &str = "MinesSweeper Menu";
pub const WINDOW_TITLE_GAME: &str = "MinesSweeper";

pub const GAME_TITLE: &str = concat!(
    "   __  ____              ____                           \n",
    "  /  |/  (_)__  ___ ___ / __/    _____ ___ ___  ___ ____\n",
    " / /|_/ / / _ \\/ -_|_-<_\\ \\| |/|/ / -_) -_) _ \\/ -_) __/\n",
    "/_/  /_/_/_//_/\\__/___/___/|__,__/\\__/\\__/ .__/\\__/_/   \n",
    "                                        /_/             ",
);

pub const WELCOME: &str = "Welcome to MineSweeper game!";
pub const MENU_SELECT: &str = "Select an option to start the game. (Enter 'q' to quit): ";
pub const MENU_OPTIONS: [&str; 4] = ["Beginner", "Intermediate", "Expert", "Custom"];
pub const WRONG_OPTION: &str = "Oops! Invalid option.";

pub const ENTER_ROWS: &str = "Enter number of rows";
pub const ENTER_COLS: &str = "Enter number of columns";
pub const ENTER_MINES: &str = "Enter number of mines";
pub const WRONG_NUMBER: &str = "That doesn't look like a number. Try again or type 'q' to quit.";

pub const PROMPT_HINT: &str = "Press 'q' to quit or 'h' for help.";
pub const PROMPT_MOVE: &str = "Enter your move (row col): ";
pub const PRESS_ENTER: &str = ">> Press Enter to continue...";

pub const LEVEL_LABEL: &str = "Level: ";
pub const TIME_LABEL: &str = "Time: ";
pub const MINES_LABEL: &str = "Mines left: ";

// Status icons
pub const ICON_NORMAL: &str = "(^w^)";
pub const ICON_PROCESSING: &str = "(\"O\")";
pub const ICON_WON: &str = "(⌐■_■)";
pub const ICON_LOST: &str = "(x_x)";

// Border pieces
pub const BORDER_H: char = '═';
pub const BORDER_V: char = '║';
pub const CORNER_TL: char = '╔';
pub const CORNER_TR: char = '╗';
pub const CORNER_BL: char = '╚';
pub const CORNER_BR: char = '╝';

// Loading bar pieces
pub const LOAD_TL: char = '┌';
pub const LOAD_TR: char = '┐';
pub const LOAD_BL: char = '└';
pub const LOAD_BR: char = '┘';
pub const LOAD_H: char = '─';
pub const LOAD_V: char = '│';
pub const LOAD_FILL: char = '█';

/// A styled run of the help screen
pub enum HelpRun {
    Heading(&'static str),
    Title(&'static str),
    Subtitle(&'static str),
    Command(&'static str),
    Plain(&'static str),
}

pub const HELP: &[HelpRun] = &[
    HelpRun::Heading("Minesweeper Guide\n\n"),
    HelpRun::Title("Game Mechanics:\n"),
    HelpRun::Plain("    "),
    HelpRun::Subtitle("Bombs"),
    HelpRun::Plain(": The grid has hidden bombs. Opening a cell with a bomb ends the game.\n\n    "),
    HelpRun::Subtitle("Numbers"),
    HelpRun::Plain(": Each opened cell shows a number (0-8),\n        indicating how many bombs are in adjacent cells (including diagonals).\n        An empty cell represents 0.\n\n    "),
    HelpRun::Subtitle("Flagging"),
    HelpRun::Plain(": If you suspect a bomb in a cell, flag it to avoid opening it by mistake.\n\n"),
    HelpRun::Title("Commands:\n"),
    HelpRun::Plain("    "),
    HelpRun::Subtitle("Flagging/Unflagging a Cell"),
    HelpRun::Plain(":\n        "),
    HelpRun::Command("f row col"),
    HelpRun::Plain("\n        Example: f 2 3 flags the cell at row 2, column 3.\n        Use the same command to unflag a cell.\n\n    "),
    HelpRun::Subtitle("Opening a Cell"),
    HelpRun::Plain(":\n        "),
    HelpRun::Command("v row col"),
    HelpRun::Plain(" or "),
    HelpRun::Command("row col"),
    HelpRun::Plain("\n        Example: "),
    HelpRun::Command("2 3"),
    HelpRun::Plain(" opens the cell at row 2, column 3.\n\n    "),
    HelpRun::Subtitle("Quit the Game"),
    HelpRun::Plain(":\n        To quit the game, enter the command:\n        "),
    HelpRun::Command("q"),
    HelpRun::Plain("\n\n"),
    HelpRun::Title("Special Rules:\n"),
    HelpRun::Plain("    "),
    HelpRun::Subtitle("Recursive Opening"),
    HelpRun::Plain(":\n        Opening a \"0\" cell automatically opens adjacent cells, continuing for other \"0\" cells.\n\n    "),
    HelpRun::Subtitle("Winning"),
    HelpRun::Plain(": You win the game when you have opened all non-bomb cells.\n\n    "),
    HelpRun::Subtitle("Losing"),
    HelpRun::Plain(": The game ends if you open a cell with a bomb.\n\n"),
    HelpRun::Title("Bonus Command:\n"),
    HelpRun::Plain("    "),
    HelpRun::Subtitle("Auto-Open Adjacent Cells"),
    HelpRun::Plain(": If all surrounding mines are flagged,\n        opening a numbered cell automatically reveals adjacent safe cells.\n        This helps clear safe zones quickly!"),
];

/// Number of lines in a block of text
pub fn line_count(s: &str) -> u16 {
    s.lines().count() as u16
}

/// Elapsed time as H:MM:SS
pub fn format_hms(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}

/// Player statistics box shown by the launcher
pub fn stats_box(played: u32, won: u32, lost: u32, quit: u32, secs: u64, last: Option<&str>) -> String {
    let mut s = String::new();
    s.push_str("╔═══════════════════════════════╗\n");
    s.push_str("║         PLAYER STATS          ║\n");
    s.push_str("╠═══════════════════════════════╣\n");
    s.push_str(&format!("║ Games Played   :{:7}       ║\n", played));
    s.push_str(&format!("║ Games Won      :{:7}       ║\n", won));
    s.push_str(&format!("║ Games Lost     :{:7}       ║\n", lost));
    s.push_str(&format!("║ Games Quit     :{:7}       ║\n", quit));
    s.push_str("║                               ║\n");
    s.push_str(&format!("║ Total Time Played:{:4}m {:2}s   ║\n", secs / 60, secs % 60));
    s.push_str(&format!("║ Last Game: {:>18} ║\n", last.unwrap_or("-")));
    s.push_str("╚═══════════════════════════════╝");
    s
}
