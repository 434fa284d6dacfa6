use xtmines::xtm_input::{Command, InputError, clamp_numeric, is_quit, parse_command};

#[test]
fn moves_are_one_based_on_input() {
    assert_eq!(parse_command("1 1", 9, 9), Command::Open(0, 0));
    assert_eq!(parse_command("9 9", 9, 9), Command::Open(8, 8));
    assert_eq!(parse_command("  3   4  ", 9, 9), Command::Open(2, 3));
    assert_eq!(parse_command("v 2 5", 9, 9), Command::Open(1, 4));
}

#[test]
fn flag_prefix_in_either_case() {
    assert_eq!(parse_command("f 3 4", 9, 9), Command::Flag(2, 3));
    assert_eq!(parse_command("F 1 1", 9, 9), Command::Flag(0, 0));
}

#[test]
fn single_letter_commands() {
    assert_eq!(parse_command("h", 9, 9), Command::Help);
    assert_eq!(parse_command("H", 9, 9), Command::Help);
    assert_eq!(parse_command("q", 9, 9), Command::Quit);
    assert_eq!(parse_command(" Q \n", 9, 9), Command::Quit);
}

#[test]
fn range_checks_report_row_before_column() {
    assert_eq!(parse_command("0 1", 9, 9), Command::Invalid(InputError::RowOutOfRange));
    assert_eq!(parse_command("10 1", 9, 9), Command::Invalid(InputError::RowOutOfRange));
    assert_eq!(parse_command("10 99", 9, 9), Command::Invalid(InputError::RowOutOfRange));
    assert_eq!(parse_command("1 10", 9, 9), Command::Invalid(InputError::ColOutOfRange));
    assert_eq!(
        parse_command("99999999999999999999999 1", 9, 9),
        Command::Invalid(InputError::RowOutOfRange)
    );
}

#[test]
fn malformed_lines() {
    for line in ["abc", "1", "1 2 3", "f1 1", "x 1 1", "1,2", "-1 2", "hq"] {
        assert_eq!(parse_command(line, 9, 9), Command::Invalid(InputError::BadFormat), "{:?}", line);
    }
}

#[test]
fn empty_line_is_silent() {
    let Command::Invalid(e) = parse_command("   ", 9, 9) else {
        panic!("blank line parsed as a command");
    };
    assert_eq!(e, InputError::Empty);
    assert!(e.is_silent());
    assert!(!InputError::BadFormat.is_silent());
}

#[test]
fn error_messages() {
    assert_eq!(InputError::BadFormat.to_string(), "Invalid input format!");
    assert_eq!(InputError::RowOutOfRange.to_string(), "Row out of range!");
    assert_eq!(InputError::ColOutOfRange.to_string(), "Column out of range!");
}

#[test]
fn numeric_prompts_clamp() {
    assert_eq!(clamp_numeric("5", 1, 20), Some(5));
    assert_eq!(clamp_numeric("0", 1, 20), Some(1));
    assert_eq!(clamp_numeric("25", 1, 20), Some(20));
    assert_eq!(clamp_numeric("000012", 1, 20), Some(12));
    assert_eq!(clamp_numeric("123456789012345678901234567890", 0, 699), Some(699));
    assert_eq!(clamp_numeric("twelve", 1, 20), None);
    assert_eq!(clamp_numeric("", 1, 20), None);
    assert!(is_quit(" Q "));
    assert!(!is_quit("quit"));
}
