// Command-line grammar for moves and the numeric prompts of the launcher
// Coordinates come in 1-based and leave 0-based after bounds checks

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only: `\d` would also accept other scripts' digits
    Regex::new(r"(?i)^(?:(?:([fv])\s+)?([0-9]+)\s+([0-9]+)|([hq]))$").expect("static move pattern")
});

/// Why a line was not a usable command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input format!")]
    BadFormat,
    #[error("Row out of range!")]
    RowOutOfRange,
    #[error("Column out of range!")]
    ColOutOfRange,
    // empty line: re-prompt without a message
    #[error("")]
    Empty,
}

impl InputError {
    /// Whether the player should see a message for this error
    pub fn is_silent(&self) -> bool {
        matches!(self, InputError::Empty)
    }
}

/// A parsed player command with 0-based coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(usize, usize),
    Flag(usize, usize),
    Help,
    Quit,
    Invalid(InputError),
}

/// Parse one input line against a board of `rows` x `cols`
pub fn parse_command(line: &str, rows: usize, cols: usize) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Invalid(InputError::Empty);
    }
    let Some(caps) = MOVE_RE.captures(line) else {
        return Command::Invalid(InputError::BadFormat);
    };
    if let Some(single) = caps.get(4) {
        return match single.as_str() {
            "q" | "Q" => Command::Quit,
            _ => Command::Help,
        };
    }
    // digits that overflow are simply out of range
    let row = caps[2].parse::<usize>().ok().filter(|r| (1..=rows).contains(r));
    let Some(row) = row else {
        return Command::Invalid(InputError::RowOutOfRange);
    };
    let col = caps[3].parse::<usize>().ok().filter(|c| (1..=cols).contains(c));
    let Some(col) = col else {
        return Command::Invalid(InputError::ColOutOfRange);
    };
    match caps.get(1).map(|m| m.as_str()) {
        Some("f") | Some("F") => Command::Flag(row - 1, col - 1),
        _ => Command::Open(row - 1, col - 1),
    }
}

/// Parse a numeric prompt answer and clamp it into [min, max].
/// Returns None unless the text is all ASCII digits. Answers with more digits
/// than `max` saturate to `max` without being parsed.
pub fn clamp_numeric(text: &str, min: usize, max: usize) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = text.trim_start_matches('0');
    if digits.len() > max.to_string().len() {
        return Some(max);
    }
    let value = if digits.is_empty() { 0 } else { digits.parse::<usize>().ok()? };
    Some(value.clamp(min, max))
}

/// Whether a prompt answer asks to quit
pub fn is_quit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("q")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_pair_opens() {
        assert_eq!(parse_command("3 4", 9, 9), Command::Open(2, 3));
        assert_eq!(parse_command("  1   1  ", 9, 9), Command::Open(0, 0));
    }

    #[test]
    fn prefixes_are_case_insensitive() {
        assert_eq!(parse_command("f 2 3", 9, 9), Command::Flag(1, 2));
        assert_eq!(parse_command("F 2 3", 9, 9), Command::Flag(1, 2));
        assert_eq!(parse_command("V 2 3", 9, 9), Command::Open(1, 2));
        assert_eq!(parse_command("Q", 9, 9), Command::Quit);
        assert_eq!(parse_command("h", 9, 9), Command::Help);
    }

    #[test]
    fn malformed_lines() {
        for bad in ["f", "f 1", "x 1 2", "1 2 3", "hq", "f1 2", "-1 2", "1,2", "٣ ٤"] {
            assert_eq!(parse_command(bad, 9, 9), Command::Invalid(InputError::BadFormat), "{:?}", bad);
        }
    }

    #[test]
    fn range_checks_row_first() {
        assert_eq!(parse_command("0 1", 9, 9), Command::Invalid(InputError::RowOutOfRange));
        assert_eq!(parse_command("10 1", 9, 9), Command::Invalid(InputError::RowOutOfRange));
        assert_eq!(parse_command("10 10", 9, 9), Command::Invalid(InputError::RowOutOfRange));
        assert_eq!(parse_command("1 0", 9, 9), Command::Invalid(InputError::ColOutOfRange));
        assert_eq!(parse_command("9 31", 9, 30), Command::Invalid(InputError::ColOutOfRange));
        assert_eq!(parse_command("99999999999999999999999 1", 9, 9), Command::Invalid(InputError::RowOutOfRange));
    }

    #[test]
    fn empty_is_silent() {
        assert_eq!(parse_command("   ", 9, 9), Command::Invalid(InputError::Empty));
        assert!(InputError::Empty.is_silent());
        assert!(!InputError::BadFormat.is_silent());
        assert_eq!(InputError::ColOutOfRange.to_string(), "Column out of range!");
    }

    #[test]
    fn numeric_prompt_clamps() {
        assert_eq!(clamp_numeric("5", 1, 20), Some(5));
        assert_eq!(clamp_numeric("0", 1, 20), Some(1));
        assert_eq!(clamp_numeric("21", 1, 20), Some(20));
        assert_eq!(clamp_numeric("000007", 1, 20), Some(7));
        assert_eq!(clamp_numeric("123456789012345678901234567890", 8, 35), Some(35));
        assert_eq!(clamp_numeric("abc", 1, 20), None);
        assert_eq!(clamp_numeric("", 1, 20), None);
        assert_eq!(clamp_numeric("-3", 1, 20), None);
        assert!(is_quit(" Q "));
    }
}
